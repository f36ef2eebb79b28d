//! File chunking example.
//!
//! Run with:
//!     cargo run --example chunk_file -- /path/to/file
//!
//! Set `RUST_LOG=rabinrs=debug` to see session events.

use std::env;
use std::fs::File;

use rabinrs::{ChunkConfig, ChunkIter, chunk_from_path};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Chunking file: {}\n", path);

    // Smaller chunks than the default so short files still split
    let config = ChunkConfig::new(
        8 * 1024 - 1, // mask: ~8 KiB average
        2 * 1024,     // min: 2 KiB
        64 * 1024,    // max: 64 KiB
    )?;

    let mut total_chunks = 0;
    let mut total_bytes = 0;

    for chunk in ChunkIter::new(File::open(&path)?, config)? {
        let chunk = chunk?;
        total_chunks += 1;
        total_bytes += chunk.len();

        let hash = chunk.hash.map(|h| h.to_hex()).unwrap_or_default();
        println!(
            "Chunk {}: offset={:>10}, len={:>8}, hash={}",
            total_chunks,
            chunk.start(),
            chunk.len(),
            hash
        );
    }

    // Lengths only, no chunk data kept
    let lengths = chunk_from_path(&path, config)?;
    assert_eq!(lengths.len(), total_chunks);

    println!("\nTotal: {} chunks, {} bytes", total_chunks, total_bytes);
    if total_chunks > 0 {
        println!("Average chunk size: {} bytes", total_bytes / total_chunks);
    }

    Ok(())
}
