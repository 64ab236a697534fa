use super::*;

#[test]
fn cpu_from_str_test() {
    assert_eq!(555_000_000_000, CpuQuantity::from_str("555").unwrap().value);
    assert_eq!(100_000_000, CpuQuantity::from_str("100m").unwrap().value);
    assert_eq!(250_000, CpuQuantity::from_str("250u").unwrap().value);
    assert_eq!(100, CpuQuantity::from_str("100n").unwrap().value);
    assert_eq!(1_500_000_000, CpuQuantity::from_str("1.5").unwrap().value);
}

#[test]
fn memory_from_str_test() {
    assert_eq!(555, MemoryQuantity::from_str("555").unwrap().value);

    assert_eq!(100_000, MemoryQuantity::from_str("100KB").unwrap().value);
    assert_eq!(250_000_000_000, MemoryQuantity::from_str("250Gb").unwrap().value);

    assert_eq!(102_400, MemoryQuantity::from_str("100KiB").unwrap().value);
    assert_eq!(17_825_792, MemoryQuantity::from_str("17Mi").unwrap().value);
}

#[test]
fn from_str_error_test() {
    assert_eq!(QuantityError::Empty, MemoryQuantity::from_str("  ").unwrap_err());
    assert_eq!(QuantityError::InvalidNumber, MemoryQuantity::from_str("Mi").unwrap_err());
    assert_eq!(
        QuantityError::UnknownSuffix("xx".to_owned()),
        MemoryQuantity::from_str("100xx").unwrap_err()
    );
    assert_eq!(
        QuantityError::UnknownSuffix("Ki".to_owned()),
        CpuQuantity::from_str("100Ki").unwrap_err()
    );
}

#[test]
fn add_test() {
    let expected = MemoryQuantity::from_str("640Ki").unwrap();
    let a = MemoryQuantity::from_str("512Ki").unwrap();
    let b = MemoryQuantity::from_str("128Ki").unwrap();
    assert_eq!(expected, a + b);

    let expected = MemoryQuantity::from_str("2560Ki").unwrap();
    let a = MemoryQuantity::from_str("512Ki").unwrap();
    let b = MemoryQuantity::from_str("2Mi").unwrap();
    assert_eq!(expected, a + b);
}

#[test]
fn display_test() {
    let a = MemoryQuantity::from_str("1Gi").unwrap();
    let b = MemoryQuantity::from_str("2Gi").unwrap();
    assert_eq!("3Gi", format!("{}", a + b));

    let a = MemoryQuantity::from_str("500GB").unwrap();
    let b = MemoryQuantity::from_str("500gb").unwrap();
    assert_eq!("1TB", format!("{}", a + b));

    let a = MemoryQuantity::from_str("128Mi").unwrap();
    let b = MemoryQuantity::from_str("2Gi").unwrap();
    assert_eq!("2176Mi", format!("{}", a + b));

    let a = MemoryQuantity::from_str("15").unwrap();
    let b = MemoryQuantity::from_str("5Mi").unwrap();
    assert_eq!("5242895B", format!("{}", a + b));

    let a = CpuQuantity::from_str("366455n").unwrap();
    let b = CpuQuantity::from_str("15m").unwrap();
    assert_eq!("15366455n", format!("{}", a + b));
    assert_eq!("15m", format!("{}", (a + b).millicores()));
}

#[test]
fn ord_test() {
    let small = CpuQuantity::from_str("250m").unwrap();
    let large = CpuQuantity::from_str("1").unwrap();
    assert!(small < large);

    let small = MemoryQuantity::from_str("900Mi").unwrap();
    let large = MemoryQuantity::from_str("1Gi").unwrap();
    assert!(small < large);
}
