#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use rabinrs::{ChunkConfig, ChunkIter, chunk_from_buffer};

fuzz_target!(|data: Vec<u8>| {
    let config = ChunkConfig::new(63, 16, 512).unwrap();
    let expected = chunk_from_buffer(&data, config).unwrap();

    let mut rebuilt = Vec::with_capacity(data.len());
    let mut lengths = Vec::new();
    for chunk in ChunkIter::new(Cursor::new(&data), config).unwrap() {
        let chunk = chunk.unwrap();

        // Verify: offsets are contiguous and hashes present
        assert_eq!(chunk.offset, rebuilt.len() as u64);
        assert!(chunk.hash.is_some());

        lengths.push(chunk.len() as u64);
        rebuilt.extend_from_slice(&chunk.data);
    }

    // Verify: same boundaries as the session, same bytes as the input
    assert_eq!(lengths, expected);
    assert_eq!(rebuilt, data);
});
