//! Dataset generation driver.
//!
//! Discovers dataset descriptions in an input directory, loads them in
//! numeric-prefix order, registers each document's encoded values, and
//! emits one C++ header per description. Processing is strictly
//! sequential: a document may only reference values from documents with
//! a lower prefix.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use nbtgen_codec::encode;
use nbtgen_document::{LoadedDocument, load};
use nbtgen_foundation::ValueRegistry;

use crate::emit::render_header;

/// Errors produced while driving dataset generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Filesystem failure while reading or writing.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// The path being read or written.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },

    /// An input file is not valid YAML.
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        /// The offending input file.
        path: PathBuf,
        /// The parser's complaint.
        #[source]
        source: serde_yaml::Error,
    },

    /// A document failed to load or encode.
    #[error("failed to process {path}: {source}")]
    Document {
        /// The offending input file.
        path: PathBuf,
        /// The core error.
        #[source]
        source: nbtgen_foundation::Error,
    },
}

impl GenerateError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn document(path: &Path, source: nbtgen_foundation::Error) -> Self {
        Self::Document {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A discovered description file with its ordering prefix.
struct OrderedFile {
    order: u64,
    path: PathBuf,
}

/// Generates headers for every dataset description in `input_dir`.
///
/// Descriptions are `*.yml`/`*.yaml` files whose stem starts with a
/// numeric prefix followed by `_` (e.g. `01_biomes.yml`); they are
/// processed in ascending prefix order so earlier documents populate the
/// registry before later documents validate their streams. Files without
/// the prefix are skipped with a warning.
///
/// # Errors
///
/// Stops at the first document-fatal failure; documents already
/// processed keep their generated headers and registrations.
pub fn generate(input_dir: &Path, output_dir: &Path) -> Result<(), GenerateError> {
    info!(
        "building dataset from {} into {}",
        input_dir.display(),
        output_dir.display()
    );

    let files = discover(input_dir)?;
    fs::create_dir_all(output_dir).map_err(|err| GenerateError::io(output_dir, err))?;

    let mut registry = ValueRegistry::new();
    for file in &files {
        let stem = file
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output = output_dir.join(format!("{stem}.hpp"));
        process_file(&file.path, &output, &stem, &mut registry)?;
    }

    info!("generated {} header(s)", files.len());
    Ok(())
}

/// Collects description files, ordered by numeric prefix.
fn discover(input_dir: &Path) -> Result<Vec<OrderedFile>, GenerateError> {
    let entries = fs::read_dir(input_dir).map_err(|err| GenerateError::io(input_dir, err))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| GenerateError::io(input_dir, err))?;
        let path = entry.path();
        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext == "yml" || ext == "yaml");
        if !is_yaml {
            continue;
        }
        match numeric_prefix(&path) {
            Some(order) => files.push(OrderedFile { order, path }),
            None => warn!(
                "skipping {} (file stem has no numeric prefix)",
                path.display()
            ),
        }
    }

    files.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.path.cmp(&b.path)));
    Ok(files)
}

/// Ordering prefix of a description file: the digits before the first
/// `_` in its stem.
fn numeric_prefix(path: &Path) -> Option<u64> {
    let stem = path.file_stem()?.to_str()?;
    let (prefix, _) = stem.split_once('_')?;
    prefix.parse().ok()
}

/// Loads, encodes, registers, and emits a single description file.
fn process_file(
    input: &Path,
    output: &Path,
    stem: &str,
    registry: &mut ValueRegistry,
) -> Result<(), GenerateError> {
    info!("processing {} -> {}", input.display(), output.display());

    let text = fs::read_to_string(input).map_err(|err| GenerateError::io(input, err))?;
    let tree: serde_yaml::Value = serde_yaml::from_str(&text).map_err(|err| GenerateError::Yaml {
        path: input.to_path_buf(),
        source: err,
    })?;

    let LoadedDocument {
        document,
        diagnostics,
    } = load(&tree, registry).map_err(|err| GenerateError::document(input, err))?;
    for diagnostic in &diagnostics {
        warn!("{}: {diagnostic}", input.display());
    }

    // Encode every value before registering any, so a failed document
    // leaves no partial registrations behind.
    let mut encoded = Vec::with_capacity(document.values.len());
    for (name, value) in &document.values {
        let bytes =
            encode(value, &document.ctype).map_err(|err| GenerateError::document(input, err))?;
        encoded.push((name.clone(), value.clone(), bytes));
    }
    for (name, value, bytes) in encoded {
        registry.register(name, document.ctype.clone(), value, bytes);
    }

    let header = render_header(stem, &document, registry)
        .map_err(|err| GenerateError::document(input, err))?;
    fs::write(output, header).map_err(|err| GenerateError::io(output, err))?;
    debug!("wrote {}", output.display());

    Ok(())
}
