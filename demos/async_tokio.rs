//! Async chunking example with tokio.
//!
//! Chunks several files concurrently, each on its own task.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- file1 file2 ...

use std::env;

use futures_util::StreamExt;
use rabinrs::{ChunkConfig, chunk_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        paths.push("Cargo.toml".to_string());
    }

    println!("Processing {} files concurrently...\n", paths.len());

    let config = ChunkConfig::default()
        .with_avg_size(8 * 1024)
        .with_min_size(2 * 1024);

    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| tokio::spawn(process_file(path, config)))
        .collect();

    for handle in handles {
        let (path, chunk_count, total_bytes) = handle.await??;
        println!("{}: {} chunks, {} bytes", path, chunk_count, total_bytes);
    }

    Ok(())
}

async fn process_file(
    path: String,
    config: ChunkConfig,
) -> Result<(String, usize, usize), Box<dyn std::error::Error + Send + Sync>> {
    let file = tokio::fs::File::open(&path).await?;
    let mut stream = chunk_async(file.compat(), config)?;

    let mut chunk_count = 0;
    let mut total_bytes = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        chunk_count += 1;
        total_bytes += chunk.len();
    }

    Ok((path, chunk_count, total_bytes))
}
