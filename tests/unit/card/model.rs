use super::*;

fn request() -> CardRequest {
    CardRequest {
        recipient: "Alice".to_string(),
        occasion: "Birthday".to_string(),
        message: "Hope your day is wonderful!".to_string(),
        sender: "Bob".to_string(),
        template: None,
    }
}

#[test]
fn default_table_has_the_three_fixed_sizes_in_order() {
    let table = SizeTable::default();
    let entries: Vec<_> = table
        .iter()
        .map(|s| (s.name.as_str(), s.width, s.height))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("square", 1080, 1080),
            ("portrait", 1080, 1350),
            ("landscape", 1200, 628),
        ]
    );
    assert_eq!(table.len(), 3);
    assert!(!table.is_empty());
}

#[test]
fn validate_names_the_empty_field() {
    let mut req = request();
    req.sender = "   ".to_string();
    let err = req.validate().unwrap_err().to_string();
    assert!(err.contains("'sender'"), "unexpected error: {err}");

    let mut req = request();
    req.message.clear();
    let err = req.validate().unwrap_err().to_string();
    assert!(err.contains("'message'"), "unexpected error: {err}");

    assert!(request().validate().is_ok());
}

#[test]
fn table_construction_rejects_bad_entries() {
    assert!(SizeTable::new(vec![]).is_err());

    let zero = vec![OutputSize {
        name: "tiny".to_string(),
        width: 0,
        height: 10,
    }];
    assert!(SizeTable::new(zero).is_err());

    let dup = vec![
        OutputSize {
            name: "a".to_string(),
            width: 10,
            height: 10,
        },
        OutputSize {
            name: "a".to_string(),
            width: 20,
            height: 20,
        },
    ];
    assert!(SizeTable::new(dup).is_err());

    let ok = vec![OutputSize {
        name: "a".to_string(),
        width: 10,
        height: 10,
    }];
    assert!(SizeTable::new(ok).is_ok());
}

#[test]
fn size_table_serde_round_trip() {
    let table = SizeTable::default();
    let json = serde_json::to_string(&table).unwrap();
    let back: SizeTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}
