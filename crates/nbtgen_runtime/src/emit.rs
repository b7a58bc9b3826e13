//! C++ header emission for loaded documents.
//!
//! String templating over an already-validated [`Document`]: every type
//! is resolved, every value normalized, and every stream reference
//! registered by the time rendering starts.

use nbtgen_codec::cpp_literal;
use nbtgen_document::Document;
use nbtgen_foundation::{ElementKind, Result, Type, Value, ValueRegistry};

/// Bytes rendered per line in emitted byte arrays.
const BYTES_PER_LINE: usize = 12;

/// Renders one document as C++ header text.
///
/// Values become `constexpr` declarations in declaration order; streams
/// become byte arrays concatenating their members' encoded images, with
/// a size constant and a member layout comment.
///
/// # Errors
///
/// Fails with [`nbtgen_foundation::Error::NotRegistered`] if a stream
/// member is missing from the registry. The driver registers every
/// local value before rendering, so this only fires on caller misuse.
pub fn render_header(stem: &str, document: &Document, registry: &ValueRegistry) -> Result<String> {
    let mut out = String::new();

    out.push_str("#pragma once\n");
    out.push_str(&format!("// Generated by nbtgen from {stem}. Do not edit.\n\n"));

    out.push_str("#include <cstddef>\n");
    out.push_str("#include <cstdint>\n");
    if document.ctype.scalar_root() == ElementKind::String {
        out.push_str("#include <string_view>\n");
    }
    for include in &document.includes {
        out.push_str(&format!("#include {include}\n"));
    }
    out.push('\n');

    for (name, value) in &document.values {
        out.push_str(&declare_value(name, value, &document.ctype));
    }
    if !document.values.is_empty() && !document.streams.is_empty() {
        out.push('\n');
    }

    for (name, stream) in &document.streams {
        let mut bytes = Vec::new();
        let mut layout = Vec::new();
        for member in &stream.values {
            let entry = registry.lookup(member)?;
            layout.push((member.as_str(), bytes.len(), entry.bytes.len()));
            bytes.extend_from_slice(&entry.bytes);
        }

        if stream.incomplete {
            out.push_str(&format!("// stream `{name}` (incomplete)\n"));
        } else {
            out.push_str(&format!("// stream `{name}`\n"));
        }
        for (member, offset, len) in layout {
            out.push_str(&format!("//   {member}: {len} byte(s) at offset {offset}\n"));
        }
        if bytes.is_empty() {
            out.push_str(&format!(
                "inline constexpr const unsigned char* {name}_bytes = nullptr;\n"
            ));
        } else {
            out.push_str(&format!(
                "inline constexpr unsigned char {name}_bytes[] = {{\n{}}};\n",
                format_bytes(&bytes)
            ));
        }
        out.push_str(&format!(
            "inline constexpr std::size_t {name}_size = {};\n\n",
            bytes.len()
        ));
    }

    Ok(out)
}

/// One `constexpr` declaration for a plain value.
fn declare_value(name: &str, value: &Value, ctype: &Type) -> String {
    match ctype {
        Type::Scalar(kind) => {
            format!("constexpr {} {name} = {};\n", kind.cpp_name(), cpp_literal(value))
        }
        Type::List(_) => {
            let root = ctype.scalar_root().cpp_name();
            let count = leaf_count(value);
            if count == 0 {
                format!("constexpr const {root}* {name} = nullptr;\n")
            } else {
                format!(
                    "constexpr {root} {name}[{count}] = {{{}}};\n",
                    cpp_literal(value)
                )
            }
        }
    }
}

/// Number of scalar leaves in a value (lists flatten recursively).
fn leaf_count(value: &Value) -> usize {
    match value {
        Value::List(items) => items.iter().map(leaf_count).sum(),
        _ => 1,
    }
}

/// Hex-formats a byte image, [`BYTES_PER_LINE`] to a line.
fn format_bytes(bytes: &[u8]) -> String {
    let mut out = String::new();
    for chunk in bytes.chunks(BYTES_PER_LINE) {
        out.push_str("    ");
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("0x{byte:02x},"));
        }
        out.push('\n');
    }
    out
}
