//! Symbol synthesis: map each (name, value) row to a unique `HTTP2_HEADER_*`
//! symbol and a composite reverse-lookup key, rejecting collisions.

use std::collections::HashMap;

use thiserror::Error;

use crate::table::{Row, SYMBOL_PREFIX};

/// Errors produced by symbol synthesis.
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("rows {first} and {second} both canonicalize to symbol {symbol}")]
    SymbolCollision {
        symbol: String,
        first: u16,
        second: u16,
    },
    #[error("rows {first} and {second} share composite key {key:?}")]
    KeyCollision { key: String, first: u16, second: u16 },
}

/// Symbol and composite key derived from one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSymbol {
    /// Unique symbolic tag, e.g. `HTTP2_HEADER_METHOD_GET`.
    pub symbol: String,
    /// Reverse-lookup key, e.g. `:method_GET`.
    pub composite: String,
}

/// Canonicalize a header name: `-` → `_`, strip the pseudo-header `:`,
/// uppercase. `:method` → `METHOD`.
fn canonical_name(name: &str) -> String {
    name.replace('-', "_").replace(':', "").to_uppercase()
}

/// Canonicalize a header value: `-` → `_`, strip `/`, `.` → `_`, strip `,`,
/// spaces → `_`, uppercase. `gzip, deflate` → `GZIP_DEFLATE`.
fn canonical_value(value: &str) -> String {
    value
        .replace('-', "_")
        .replace('/', "")
        .replace('.', "_")
        .replace(',', "")
        .replace(' ', "_")
        .to_uppercase()
}

/// Synthesize the symbol for one (name, value) pair: prefixed canonical name,
/// with the canonical value appended by `_` when the value is non-empty.
#[must_use]
pub fn symbol_for(name: &str, value: &str) -> String {
    let mut symbol = String::from(SYMBOL_PREFIX);
    symbol.push_str(&canonical_name(name));
    if !value.is_empty() {
        symbol.push('_');
        symbol.push_str(&canonical_value(value));
    }
    symbol
}

/// The reverse-lookup key: raw name and value joined by `_`, exact case.
#[must_use]
pub fn composite_key(name: &str, value: &str) -> String {
    format!("{name}_{value}")
}

/// Synthesize symbols and composite keys for every row, enforcing global
/// uniqueness of both. Canonicalization is lossy (`x-y` and `x_y` collide),
/// so uniqueness must be checked, not assumed.
pub fn synthesize(rows: &[Row]) -> Result<Vec<RowSymbol>, SymbolError> {
    let mut out = Vec::with_capacity(rows.len());
    let mut seen_symbols: HashMap<String, u16> = HashMap::with_capacity(rows.len());
    let mut seen_keys: HashMap<String, u16> = HashMap::with_capacity(rows.len());

    for row in rows {
        let symbol = symbol_for(&row.name, &row.value);
        let composite = composite_key(&row.name, &row.value);

        if let Some(&first) = seen_symbols.get(&symbol) {
            return Err(SymbolError::SymbolCollision {
                symbol,
                first,
                second: row.index,
            });
        }
        if let Some(&first) = seen_keys.get(&composite) {
            return Err(SymbolError::KeyCollision {
                key: composite,
                first,
                second: row.index,
            });
        }

        seen_symbols.insert(symbol.clone(), row.index);
        seen_keys.insert(composite.clone(), row.index);
        out.push(RowSymbol { symbol, composite });
    }

    Ok(out)
}
