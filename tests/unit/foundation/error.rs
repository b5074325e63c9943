use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CardError::template("x")
            .to_string()
            .contains("template error:")
    );
    assert!(CardError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = CardError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk full"));
}
