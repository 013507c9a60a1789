//! HPACK static table model: rows, constants, and the bidirectional lookup value.
//!
//! The table is RFC 7541 Appendix A: 61 fixed (name, value) entries addressed
//! by wire index 1..=61. Index 0 is reserved by the RFC and doubles here as the
//! "not a static-table hit" sentinel.

use std::collections::HashMap;

use thiserror::Error;

use crate::parser::{self, ParseError};
use crate::symbols::{self, RowSymbol, SymbolError};

/// Number of entries in the RFC 7541 static table.
pub const STATIC_TABLE_LEN: usize = 61;

/// Sentinel index returned for lookups that miss the table.
pub const UNKNOWN_INDEX: u16 = 0;

/// Namespace prefix for every synthesized symbol.
pub const SYMBOL_PREFIX: &str = "HTTP2_HEADER_";

/// Symbol bound to [`UNKNOWN_INDEX`] in the generated module.
pub const UNKNOWN_SYMBOL: &str = "HTTP2_HEADER_UNKNOWN";

/// The embedded table specification: one row per line,
/// `index<TAB>name[<TAB>value]`, indices 1..=61 in RFC order.
pub const STATIC_TABLE_SPEC: &str = "1\t:authority\t
2\t:method\tGET
3\t:method\tPOST
4\t:path\t/
5\t:path\t/index.html
6\t:scheme\thttp
7\t:scheme\thttps
8\t:status\t200
9\t:status\t204
10\t:status\t206
11\t:status\t304
12\t:status\t400
13\t:status\t404
14\t:status\t500
15\taccept-charset\t
16\taccept-encoding\tgzip, deflate
17\taccept-language\t
18\taccept-ranges\t
19\taccept\t
20\taccess-control-allow-origin\t
21\tage\t
22\tallow\t
23\tauthorization\t
24\tcache-control\t
25\tcontent-disposition\t
26\tcontent-encoding\t
27\tcontent-language\t
28\tcontent-length\t
29\tcontent-location\t
30\tcontent-range\t
31\tcontent-type\t
32\tcookie\t
33\tdate\t
34\tetag\t
35\texpect\t
36\texpires\t
37\tfrom\t
38\thost\t
39\tif-match\t
40\tif-modified-since\t
41\tif-none-match\t
42\tif-range\t
43\tif-unmodified-since\t
44\tlast-modified\t
45\tlink\t
46\tlocation\t
47\tmax-forwards\t
48\tproxy-authenticate\t
49\tproxy-authorization\t
50\trange\t
51\treferer\t
52\trefresh\t
53\tretry-after\t
54\tserver\t
55\tset-cookie\t
56\tstrict-transport-security\t
57\ttransfer-encoding\t
58\tuser-agent\t
59\tvary\t
60\tvia\t
61\twww-authenticate";

/// One parsed table row. `index` is the HPACK wire index (1-based); `value`
/// is empty for name-only entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub index: u16,
    pub name: String,
    pub value: String,
}

/// Errors from building a [`StaticTable`] out of spec text.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Symbol(#[from] SymbolError),
}

/// The completed table: rows in wire order, one synthesized symbol per row,
/// and the composite-key reverse map. Immutable once built.
#[derive(Debug, Clone)]
pub struct StaticTable {
    /// Rows in wire order; `rows[i].index == i + 1`.
    rows: Vec<Row>,
    /// Symbol + composite key for `rows[i]`.
    symbols: Vec<RowSymbol>,
    /// Composite key ("name_value") → wire index.
    key_to_index: HashMap<String, u16>,
}

impl StaticTable {
    /// Parse spec text, synthesize symbols, and build both lookup directions.
    /// Fails on any malformed row, index gap, or symbol/key collision.
    pub fn from_spec(text: &str) -> Result<Self, TableError> {
        let rows = parser::parse_table(text)?;
        let symbols = symbols::synthesize(&rows)?;

        let mut key_to_index = HashMap::with_capacity(rows.len());
        for (row, sym) in rows.iter().zip(&symbols) {
            key_to_index.insert(sym.composite.clone(), row.index);
        }

        Ok(StaticTable {
            rows,
            symbols,
            key_to_index,
        })
    }

    /// Build the table from the embedded RFC 7541 specification.
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_spec(STATIC_TABLE_SPEC)
    }

    /// Wire index for an exact (name, value) match, [`UNKNOWN_INDEX`] on miss.
    /// Matching is on the composite key, exact-string and case-sensitive.
    #[must_use]
    pub fn lookup_by_key(&self, name: &str, value: &str) -> u16 {
        let key = symbols::composite_key(name, value);
        self.key_to_index.get(&key).copied().unwrap_or(UNKNOWN_INDEX)
    }

    /// (name, value) for a wire index; `("", "")` for the sentinel or any
    /// index outside the table.
    #[must_use]
    pub fn lookup_by_index(&self, index: u16) -> (&str, &str) {
        match self.rows.get((index as usize).wrapping_sub(1)) {
            Some(row) => (row.name.as_str(), row.value.as_str()),
            None => ("", ""),
        }
    }

    /// Synthesized symbol for a wire index; [`UNKNOWN_SYMBOL`] for the
    /// sentinel or any index outside the table.
    #[must_use]
    pub fn symbol_of(&self, index: u16) -> &str {
        match self.symbols.get((index as usize).wrapping_sub(1)) {
            Some(sym) => sym.symbol.as_str(),
            None => UNKNOWN_SYMBOL,
        }
    }

    /// Rows in wire order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Symbols in wire order (parallel to [`StaticTable::rows`]).
    #[must_use]
    pub fn symbols(&self) -> &[RowSymbol] {
        &self.symbols
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
