//! Integration tests for byte encoding
//!
//! Tests the byte-width, range, and list-recursion laws plus the exact
//! big-endian images of representative values.

use nbtgen_codec::encode;
use nbtgen_foundation::{ElementKind, Error, Type, Value};

fn scalar(kind: ElementKind) -> Type {
    Type::Scalar(kind)
}

// =============================================================================
// Byte-Width Law
// =============================================================================

#[test]
fn encoded_length_equals_byte_width() {
    let cases = [
        (ElementKind::Int8, Value::Int(-5)),
        (ElementKind::Int16, Value::Int(300)),
        (ElementKind::Int32, Value::Int(-70_000)),
        (ElementKind::Int64, Value::Int(i64::MAX)),
        (ElementKind::Float, Value::Float(0.25)),
        (ElementKind::Double, Value::Float(-0.25)),
    ];
    for (kind, value) in cases {
        let bytes = encode(&value, &scalar(kind)).unwrap();
        assert_eq!(bytes.len(), kind.byte_width().unwrap(), "kind {kind}");
    }
}

// =============================================================================
// Range Law
// =============================================================================

#[test]
fn int8_upper_bound() {
    let bytes = encode(&Value::Int(127), &scalar(ElementKind::Int8)).unwrap();
    assert_eq!(bytes, vec![0x7f]);
    assert_eq!(i8::from_be_bytes([bytes[0]]), 127);

    assert!(matches!(
        encode(&Value::Int(128), &scalar(ElementKind::Int8)),
        Err(Error::OutOfRange {
            value: 128,
            kind: ElementKind::Int8,
        })
    ));
}

#[test]
fn int16_bounds() {
    assert!(encode(&Value::Int(32_767), &scalar(ElementKind::Int16)).is_ok());
    assert!(encode(&Value::Int(-32_768), &scalar(ElementKind::Int16)).is_ok());
    assert!(encode(&Value::Int(32_768), &scalar(ElementKind::Int16)).is_err());
    assert!(encode(&Value::Int(-32_769), &scalar(ElementKind::Int16)).is_err());
}

#[test]
fn int32_bounds() {
    let max = i64::from(i32::MAX);
    assert!(encode(&Value::Int(max), &scalar(ElementKind::Int32)).is_ok());
    assert!(encode(&Value::Int(max + 1), &scalar(ElementKind::Int32)).is_err());
}

// =============================================================================
// Exact Images
// =============================================================================

#[test]
fn negative_integral_images_are_twos_complement() {
    assert_eq!(
        encode(&Value::Int(-2), &scalar(ElementKind::Int16)).unwrap(),
        vec![0xff, 0xfe]
    );
    assert_eq!(
        encode(&Value::Int(-1), &scalar(ElementKind::Int64)).unwrap(),
        vec![0xff; 8]
    );
}

#[test]
fn float_images_are_ieee754_big_endian() {
    assert_eq!(
        encode(&Value::Float(1.5), &scalar(ElementKind::Float)).unwrap(),
        vec![0x3f, 0xc0, 0x00, 0x00]
    );
    assert_eq!(
        encode(&Value::Float(1.0), &scalar(ElementKind::Double)).unwrap(),
        vec![0x3f, 0xf0, 0, 0, 0, 0, 0, 0]
    );
}

#[test]
fn string_image_is_bare_utf8() {
    let bytes = encode(&Value::from("héllo"), &scalar(ElementKind::String)).unwrap();
    assert_eq!(bytes, "héllo".as_bytes());
}

// =============================================================================
// List Recursion
// =============================================================================

#[test]
fn list_image_is_concatenation_of_elements() {
    let ty = Type::list(scalar(ElementKind::Int16));
    let list = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

    let whole = encode(&list, &ty).unwrap();
    assert_eq!(whole, vec![0x00, 0x01, 0x00, 0x02, 0x00, 0x03]);

    let mut concatenated = Vec::new();
    for item in list.as_list().unwrap() {
        concatenated.extend(encode(item, &scalar(ElementKind::Int16)).unwrap());
    }
    assert_eq!(whole, concatenated);
}

#[test]
fn empty_list_encodes_to_nothing() {
    let ty = Type::list(scalar(ElementKind::Int64));
    assert!(encode(&Value::List(Vec::new()), &ty).unwrap().is_empty());
}

#[test]
fn list_element_range_errors_propagate() {
    let ty = Type::list(scalar(ElementKind::Int8));
    let list = Value::List(vec![Value::Int(1), Value::Int(500)]);
    assert!(matches!(
        encode(&list, &ty),
        Err(Error::OutOfRange { value: 500, .. })
    ));
}

// =============================================================================
// Shape Mismatches
// =============================================================================

#[test]
fn mismatched_shapes_are_rejected() {
    assert!(matches!(
        encode(&Value::from("oops"), &scalar(ElementKind::Int8)),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        encode(&Value::Int(1), &scalar(ElementKind::String)),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        encode(&Value::Int(1), &Type::list(scalar(ElementKind::Int8))),
        Err(Error::TypeMismatch { .. })
    ));
}
