#![no_main]

use libfuzzer_sys::fuzz_target;
use rabinrs::{ChunkConfig, Chunker};

fuzz_target!(|input: (u8, Vec<u8>)| {
    let (split, data) = input;

    let configs = [
        // Tiny chunks
        ChunkConfig::new(15, 4, 64).unwrap(),
        // Single-byte window
        ChunkConfig::new(255, 32, 1024).unwrap().with_window_size(1),
        // min == max == 0: every byte is a chunk
        ChunkConfig::new(1, 0, 0).unwrap(),
        // Default config
        ChunkConfig::default(),
    ];

    for config in configs {
        let mut whole = Chunker::new(config).unwrap();
        whole.feed(&data).unwrap();
        let lengths = whole.finalize().unwrap();

        // Verify: total bytes match input, no empty chunks
        assert_eq!(lengths.iter().sum::<u64>(), data.len() as u64);
        assert!(lengths.iter().all(|&len| len > 0));

        // Verify: cuts made while feeding respect the bounds
        if let Some((_, cut)) = lengths.split_last() {
            for &len in cut {
                assert!(len > config.min_size());
                assert!(len <= config.max_size() + 1);
            }
        }

        // Verify: splitting the input does not move boundaries
        let step = split as usize + 1;
        let mut pieces = Chunker::new(config).unwrap();
        for piece in data.chunks(step) {
            pieces.feed(piece).unwrap();
        }
        assert_eq!(pieces.finalize().unwrap(), lengths);
    }
});
