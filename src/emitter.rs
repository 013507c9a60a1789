//! Table emitter: render the generated Rust lookup module and write it to
//! disk without ever leaving a truncated artifact at the destination.
//!
//! Rendering walks the table in row order only, so identical input produces
//! byte-identical output.

use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::table::{StaticTable, UNKNOWN_SYMBOL};

/// Errors produced by the emitter.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("manifest serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Name of the enum declared in the generated module.
pub const GENERATED_ENUM: &str = "HpackStaticHeaderKey";

/// Render the complete generated module: do-not-edit banner, the symbol
/// enum (sentinel = 0, rows bound to their wire indices), both lookup
/// tables, and the two total accessors.
#[must_use]
pub fn render_module(table: &StaticTable) -> String {
    let mut out = String::new();
    let len = table.len();

    out.push_str(
        "// @generated by hpackgen from the HPACK static table spec.\n\
         // Regenerate with `hpackgen` instead of editing by hand.\n\
         \n\
         //! HPACK static header table (RFC 7541 Appendix A): symbols, lookup\n\
         //! tables, and total accessors. Index 0 is the \"not a static-table\n\
         //! hit\" sentinel.\n\
         \n\
         #![allow(non_camel_case_types)]\n\
         \n",
    );

    // --- Symbol enum ---
    out.push_str(
        "/// Symbolic tag for one static-table entry; the discriminant is the\n\
         /// HPACK wire index.\n\
         #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]\n\
         #[repr(u16)]\n",
    );
    out.push_str(&format!("pub enum {GENERATED_ENUM} {{\n"));
    out.push_str(&format!("    {UNKNOWN_SYMBOL} = 0,\n"));
    for (row, sym) in table.rows().iter().zip(table.symbols()) {
        out.push_str(&format!("    {} = {},\n", sym.symbol, row.index));
    }
    out.push_str("}\n\n");

    // --- Forward table: wire index → (name, value) ---
    out.push_str("/// Wire index → (name, value), in table order.\n");
    out.push_str(&format!(
        "pub static HPACK_STATIC_TABLE_INDEX_TO_KV: [({GENERATED_ENUM}, &str, &str); {len}] = [\n"
    ));
    for (row, sym) in table.rows().iter().zip(table.symbols()) {
        out.push_str(&format!(
            "    ({GENERATED_ENUM}::{}, {:?}, {:?}),\n",
            sym.symbol, row.name, row.value
        ));
    }
    out.push_str("];\n\n");

    // --- Reverse table: composite key → symbol ---
    out.push_str("/// Composite `name_value` key → symbolic tag.\n");
    out.push_str(&format!(
        "pub static HPACK_STATIC_TABLE_KEY_TO_INDEX: [(&str, {GENERATED_ENUM}); {len}] = [\n"
    ));
    for sym in table.symbols() {
        out.push_str(&format!(
            "    ({:?}, {GENERATED_ENUM}::{}),\n",
            sym.composite, sym.symbol
        ));
    }
    out.push_str("];\n\n");

    // --- Accessors ---
    out.push_str(&format!(
        "/// Exact-match (case-sensitive) lookup on the composite key;\n\
         /// [`{GENERATED_ENUM}::{UNKNOWN_SYMBOL}`] when no row matches.\n\
         pub fn get_index_from_key(key: &str, value: &str) -> {GENERATED_ENUM} {{\n\
         \x20   let composite = format!(\"{{key}}_{{value}}\");\n\
         \x20   HPACK_STATIC_TABLE_KEY_TO_INDEX\n\
         \x20       .iter()\n\
         \x20       .find(|(k, _)| *k == composite)\n\
         \x20       .map_or({GENERATED_ENUM}::{UNKNOWN_SYMBOL}, |&(_, index)| index)\n\
         }}\n\
         \n\
         /// (name, value) for a symbolic tag; `(\"\", \"\")` for the sentinel.\n\
         pub fn get_key_value_from_index(index: {GENERATED_ENUM}) -> (&'static str, &'static str) {{\n\
         \x20   match HPACK_STATIC_TABLE_INDEX_TO_KV.get((index as usize).wrapping_sub(1)) {{\n\
         \x20       Some(&(_, name, value)) => (name, value),\n\
         \x20       None => (\"\", \"\"),\n\
         \x20   }}\n\
         }}\n"
    ));

    out
}

/// Lowercase-hex SHA-256 of the rendered artifact.
#[must_use]
pub fn artifact_digest(contents: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Write `contents` to `path`, replacing any existing file. The write goes
/// to a temporary file in the destination directory which is synced and then
/// renamed over `path`, so a failure mid-write leaves the old artifact
/// untouched.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), EmitError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| EmitError::Io(e.error))?;
    Ok(())
}

/// Write the JSON manifest describing a generated artifact: generator name
/// and version, artifact file name, row count, and SHA-256 digest. Same
/// atomic-replace discipline as the artifact itself.
pub fn write_manifest(
    path: &Path,
    artifact_name: &str,
    rows: usize,
    contents: &str,
) -> Result<(), EmitError> {
    let manifest = serde_json::json!({
        "generator": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        },
        "artifact": artifact_name,
        "rows": rows,
        "sha256": artifact_digest(contents),
    });

    let mut body = serde_json::to_string_pretty(&manifest)?;
    body.push('\n');
    write_artifact(path, &body)
}
