//! hpackgen: regenerate the HPACK static header table lookup module.
//!
//! Input: the embedded RFC 7541 table spec, or a spec file via --table/--config.
//! Output: one generated Rust module, plus an optional JSON manifest carrying
//! the artifact's SHA-256 digest.

use std::path::{Path, PathBuf};

use clap::Parser;

use hpackgen::{emitter, GenConfig, StaticTable};

#[derive(Debug, Parser)]
#[command(
    name = "hpackgen",
    version,
    about = "Generate the HPACK static header table lookup module (RFC 7541 Appendix A)"
)]
struct Cli {
    /// Read the table spec from a file instead of the embedded RFC 7541 table.
    #[arg(long, value_name = "PATH")]
    table: Option<PathBuf>,

    /// Destination of the generated module.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Load generator options from a TOML config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also write `<output>.manifest.json` next to the artifact.
    #[arg(long)]
    manifest: bool,

    /// Parse, synthesize, and render only; report row count and digest, write nothing.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            GenConfig::load(path).map_err(|e| format!("load {}: {}", path.display(), e))?
        }
        None => GenConfig::default(),
    };

    // CLI flags override the config file.
    if let Some(table) = cli.table {
        config.table = Some(table);
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if cli.manifest {
        config.manifest = true;
    }

    let spec = match &config.table {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("read {}: {}", path.display(), e))?,
        None => hpackgen::STATIC_TABLE_SPEC.to_string(),
    };

    let table = StaticTable::from_spec(&spec)?;
    let module = emitter::render_module(&table);

    if cli.check {
        eprintln!(
            "ok: {} rows, sha256 {}",
            table.len(),
            emitter::artifact_digest(&module)
        );
        return Ok(());
    }

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    emitter::write_artifact(&config.output, &module)?;
    eprintln!("wrote {} ({} bytes)", config.output.display(), module.len());

    if config.manifest {
        let manifest_path = manifest_path(&config.output);
        let artifact_name = config
            .output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        emitter::write_manifest(&manifest_path, &artifact_name, table.len(), &module)?;
        eprintln!("wrote {}", manifest_path.display());
    }

    Ok(())
}

/// `<output>.manifest.json`, e.g. `generated/hpack_static_table.rs.manifest.json`.
fn manifest_path(output: &Path) -> PathBuf {
    let mut os = output.as_os_str().to_os_string();
    os.push(".manifest.json");
    PathBuf::from(os)
}
