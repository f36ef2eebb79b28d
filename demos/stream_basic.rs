//! Streaming session example.
//!
//! Feeds a stream in uneven pieces and shows that the boundaries do not
//! depend on how the input was split.
//!
//! Run with:
//!     cargo run --example stream_basic

use rabinrs::{ChunkConfig, Chunker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data: Vec<u8> = (0..1_000_000u64)
        .map(|i| (i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 56) as u8)
        .collect();

    let config = ChunkConfig::default()
        .with_avg_size(16 * 1024)
        .with_min_size(4 * 1024);

    // One call
    let mut whole = Chunker::new(config)?;
    whole.feed(&data)?;
    let expected = whole.finalize()?;

    // Ragged pieces, as they might arrive from a socket
    let mut chunker = Chunker::new(config)?;
    let mut rest = &data[..];
    let mut step = 1;
    while !rest.is_empty() {
        let (piece, tail) = rest.split_at(step.min(rest.len()));
        chunker.feed(piece)?;
        rest = tail;
        step = step * 3 % 10_007 + 1;
    }

    println!(
        "Fed {} bytes, {} chunks so far, {} bytes pending",
        chunker.total_consumed(),
        chunker.lengths().len(),
        chunker.current_length()
    );

    let lengths = chunker.finalize()?;
    assert_eq!(lengths, expected);

    for (i, len) in lengths.iter().enumerate() {
        println!("Chunk {}: {} bytes", i, len);
    }
    println!(
        "\nTotal: {} chunks, {} bytes",
        lengths.len(),
        lengths.iter().sum::<u64>()
    );

    // The session is closed now
    if let Err(e) = chunker.feed(b"late") {
        println!("{}", e);
    }

    Ok(())
}
