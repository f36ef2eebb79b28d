// Integration tests for the async stream adapter (feature = "async-io")

#![cfg(feature = "async-io")]

mod common;

use std::io::Write;

use futures_util::StreamExt;
use rabinrs::{ChunkConfig, chunk_async, chunk_from_buffer};
use tokio_util::compat::TokioAsyncReadCompatExt;

use common::splitmix_bytes;

#[tokio::test]
async fn test_tokio_file_matches_buffer() {
    let data = splitmix_bytes(0x5EED, 1 << 20);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&data).unwrap();

    let reader = tokio::fs::File::open(file.path()).await.unwrap();
    let chunks: Vec<_> = chunk_async(reader.compat(), ChunkConfig::default())
        .unwrap()
        .collect()
        .await;

    let lengths: Vec<u64> = chunks
        .into_iter()
        .map(|c| c.map(|c| c.len() as u64))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        lengths,
        chunk_from_buffer(&data, ChunkConfig::default()).unwrap()
    );
}

#[tokio::test]
async fn test_offsets_are_contiguous() {
    let data = splitmix_bytes(3, 200_000);
    let config = ChunkConfig::new(1023, 256, 4096).unwrap();

    let reader: &[u8] = &data;
    let mut stream = chunk_async(reader, config).unwrap();

    let mut expected = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.unwrap();
        assert_eq!(chunk.start(), expected);
        expected = chunk.end();
    }
    assert_eq!(expected, data.len() as u64);
}
