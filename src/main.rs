use clap::{Parser, ValueEnum};
use dimblob::{ArrayBlobReader, Decoded, Element, ReadOptions};
use std::path::{Path, PathBuf};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DType {
    F32,
    I32,
}

/// Decode a shape-prefixed array blob and report what it contains
#[derive(Parser, Debug)]
#[command(name = "dimblob")]
#[command(version)]
struct Cli {
    /// Blob file to read
    #[arg(default_value = "dataset.bin")]
    path: PathBuf,

    /// Payload element type
    #[arg(long, value_enum, default_value = "f32")]
    dtype: DType,

    /// Fail if the file has bytes left over after the payload
    #[arg(long)]
    strict: bool,

    /// Refuse files larger than this many bytes
    #[arg(long)]
    max_file_size: Option<u64>,
}

fn report<T: Element>(reader: &ArrayBlobReader, path: &Path) -> anyhow::Result<()> {
    let decoded: Decoded<T> = reader.read(path).inspect_err(|e| {
        if e.is_truncated() {
            error!(path = %path.display(), "blob is shorter than its header declares");
        }
    })?;
    println!("{}", decoded.report());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = ReadOptions::new().strict(cli.strict);
    if let Some(limit) = cli.max_file_size {
        options = options.max_file_size(limit);
    }
    let reader = ArrayBlobReader::new(options);

    match cli.dtype {
        DType::F32 => report::<f32>(&reader, &cli.path),
        DType::I32 => report::<i32>(&reader, &cli.path),
    }
}
