//! Deterministic big-endian encoding of typed values.

use nbtgen_foundation::{ElementKind, Error, Result, Type, Value};

/// Encodes `value` as the big-endian byte image of `ty`.
///
/// Pure and referentially transparent: identical `(value, ty)` pairs
/// always produce byte-identical output.
///
/// - Integral kinds encode as two's-complement signed big-endian of
///   exactly the kind's byte width.
/// - Float kinds encode as IEEE-754 big-endian, 4 bytes for `float` and
///   8 for `double`; integer values are promoted.
/// - Strings encode as raw UTF-8 with no length prefix or terminator.
/// - Lists encode as the concatenation of their elements' encodings in
///   order, with no count or separator; length bookkeeping belongs to
///   whatever consumes the stream.
///
/// # Errors
///
/// Fails with [`Error::OutOfRange`] when an integer does not fit its
/// kind's signed width, and with [`Error::TypeMismatch`] when the
/// value's shape does not match `ty`.
pub fn encode(value: &Value, ty: &Type) -> Result<Vec<u8>> {
    match ty {
        Type::Scalar(kind) => encode_scalar(value, *kind, ty),
        Type::List(inner) => {
            let items = value
                .as_list()
                .ok_or_else(|| Error::type_mismatch(ty, value.kind_name()))?;
            let mut bytes = Vec::new();
            for item in items {
                bytes.extend(encode(item, inner)?);
            }
            Ok(bytes)
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn encode_scalar(value: &Value, kind: ElementKind, ty: &Type) -> Result<Vec<u8>> {
    let mismatch = || Error::type_mismatch(ty, value.kind_name());
    match kind {
        ElementKind::Int8 => {
            let n = value.as_int().ok_or_else(mismatch)?;
            let v = i8::try_from(n).map_err(|_| Error::out_of_range(n, kind))?;
            Ok(v.to_be_bytes().to_vec())
        }
        ElementKind::Int16 => {
            let n = value.as_int().ok_or_else(mismatch)?;
            let v = i16::try_from(n).map_err(|_| Error::out_of_range(n, kind))?;
            Ok(v.to_be_bytes().to_vec())
        }
        ElementKind::Int32 => {
            let n = value.as_int().ok_or_else(mismatch)?;
            let v = i32::try_from(n).map_err(|_| Error::out_of_range(n, kind))?;
            Ok(v.to_be_bytes().to_vec())
        }
        ElementKind::Int64 => {
            let n = value.as_int().ok_or_else(mismatch)?;
            Ok(n.to_be_bytes().to_vec())
        }
        ElementKind::Float => {
            let n = value.as_number().ok_or_else(mismatch)?;
            Ok((n as f32).to_be_bytes().to_vec())
        }
        ElementKind::Double => {
            let n = value.as_number().ok_or_else(mismatch)?;
            Ok(n.to_be_bytes().to_vec())
        }
        ElementKind::String => {
            let s = value.as_str().ok_or_else(mismatch)?;
            Ok(s.as_bytes().to_vec())
        }
    }
}
