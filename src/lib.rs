//! hpackgen — generator for the HPACK static header table lookup module (RFC 7541 Appendix A).
//!
//! This crate provides:
//! - **Table model** (`table`): `Row`, `StaticTable`, the embedded table spec, and the sentinel constants.
//! - **Parser** (`parser`): `parse_table(text)` turning the tab-separated spec into ordered rows.
//! - **Symbols** (`symbols`): `symbol_for` / `composite_key` and collision-checked `synthesize`.
//! - **Emitter** (`emitter`): `render_module`, atomic `write_artifact`, and the JSON manifest.
//! - **Generator CLI** (binary `hpackgen`): regenerate the module, optionally from a custom spec/config.
//!
//! See [README.md](README.md) for usage and the shape of the generated module.

#[cfg(feature = "serde")]
pub mod config;
pub mod emitter;
pub mod parser;
pub mod symbols;
pub mod table;

#[cfg(feature = "serde")]
pub use config::{ConfigError, GenConfig, DEFAULT_OUTPUT};
pub use emitter::{artifact_digest, render_module, write_artifact, write_manifest, EmitError};
pub use parser::{parse_table, ParseError};
pub use symbols::{composite_key, symbol_for, synthesize, RowSymbol, SymbolError};
pub use table::{
    Row, StaticTable, TableError, STATIC_TABLE_LEN, STATIC_TABLE_SPEC, SYMBOL_PREFIX,
    UNKNOWN_INDEX, UNKNOWN_SYMBOL,
};
