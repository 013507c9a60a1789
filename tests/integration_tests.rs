//! Integration tests: round-trip the whole table through both lookup
//! directions the way an HPACK codec would, then generate the artifact to
//! disk and check what a consumer build would see.

use hpackgen::{emitter, StaticTable, UNKNOWN_INDEX, UNKNOWN_SYMBOL};

/// For every row, index → (name, value) reproduces the source row exactly.
#[test]
fn round_trip_by_index() {
    let table = StaticTable::builtin().unwrap();
    for row in table.rows() {
        let (name, value) = table.lookup_by_index(row.index);
        assert_eq!((name, value), (row.name.as_str(), row.value.as_str()));
    }
}

/// For every row, (name, value) → index reproduces the wire index exactly.
#[test]
fn round_trip_by_key() {
    let table = StaticTable::builtin().unwrap();
    for row in table.rows() {
        assert_eq!(table.lookup_by_key(&row.name, &row.value), row.index);
    }
}

/// Lookups that miss the table return the sentinel, never an error.
#[test]
fn sentinel_behavior() {
    let table = StaticTable::builtin().unwrap();

    assert_eq!(table.lookup_by_key("not-a-real-header", ""), UNKNOWN_INDEX);
    assert_eq!(table.lookup_by_index(UNKNOWN_INDEX), ("", ""));
    assert_eq!(table.lookup_by_index(62), ("", ""));
    assert_eq!(table.symbol_of(UNKNOWN_INDEX), UNKNOWN_SYMBOL);
    assert_eq!(table.symbol_of(200), UNKNOWN_SYMBOL);

    // Only the exact literal value registered for a name matches.
    assert_eq!(table.lookup_by_key("accept-encoding", "br"), UNKNOWN_INDEX);
    assert_eq!(
        table.lookup_by_key("accept-encoding", "gzip, deflate"),
        16
    );
}

/// Known RFC 7541 wire indices: `:method GET` at index 2, `:authority`
/// name-only at index 1.
#[test]
fn known_wire_indices() {
    let table = StaticTable::builtin().unwrap();

    let idx = table.lookup_by_key(":method", "GET");
    assert_eq!(idx, 2);
    assert_eq!(table.symbol_of(idx), "HTTP2_HEADER_METHOD_GET");
    assert_eq!(table.lookup_by_index(idx), (":method", "GET"));

    let idx = table.lookup_by_key(":authority", "");
    assert_eq!(idx, 1);
    assert_eq!(table.symbol_of(idx), "HTTP2_HEADER_AUTHORITY");
}

/// Generate the artifact into a temp tree and check what the consuming
/// codec's build would pick up.
#[test]
fn generate_artifact_end_to_end() {
    let table = StaticTable::builtin().unwrap();
    let module = emitter::render_module(&table);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hpack_static_table.rs");
    emitter::write_artifact(&path, &module).unwrap();

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, module);
    assert!(on_disk.contains("HTTP2_HEADER_METHOD_GET = 2,"));
    assert!(on_disk.contains("HTTP2_HEADER_UNKNOWN = 0,"));

    // Regenerating over the first artifact is byte-identical.
    emitter::write_artifact(&path, &emitter::render_module(&table)).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), on_disk);
}
