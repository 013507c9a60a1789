//! Minimal example: build the static table, look a few entries up in both
//! directions, then generate the lookup module into a temp directory.
//!
//! Run: cargo run --example generate_and_lookup

use hpackgen::{emitter, StaticTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let table = StaticTable::builtin()?;

    println!("rows: {}", table.len());
    println!(
        ":method GET -> index {} ({})",
        table.lookup_by_key(":method", "GET"),
        table.symbol_of(table.lookup_by_key(":method", "GET"))
    );
    println!("index 16 -> {:?}", table.lookup_by_index(16));
    println!(
        "accept-encoding br -> index {} (not in the table)",
        table.lookup_by_key("accept-encoding", "br")
    );

    let module = emitter::render_module(&table);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("hpack_static_table.rs");
    emitter::write_artifact(&path, &module)?;
    println!("wrote {} ({} bytes)", path.display(), module.len());
    println!("sha256: {}", emitter::artifact_digest(&module));

    Ok(())
}
