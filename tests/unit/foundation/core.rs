use super::*;

#[test]
fn new_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(1, 1).is_ok());
}

#[test]
fn dims_u16_bounds() {
    let small = Canvas {
        width: 1200,
        height: 628,
    };
    assert_eq!(small.dims_u16().unwrap(), (1200, 628));

    let huge = Canvas {
        width: 70_000,
        height: 10,
    };
    assert!(huge.dims_u16().is_err());
}

#[test]
fn rgba8_len_is_tightly_packed() {
    let c = Canvas {
        width: 3,
        height: 2,
    };
    assert_eq!(c.rgba8_len(), 24);
}
