#![no_main]

use libfuzzer_sys::fuzz_target;
use splitter_layout::{PercentBounds, resize_pair};

fuzz_target!(|data: &[u8]| {
    // Byte 0 picks the pair size split, byte 1 the delta, bytes 2..6 the bounds.
    if data.len() < 6 {
        return;
    }
    let left = f64::from(data[0]) / 255.0 * 100.0;
    let delta = (f64::from(data[1]) - 127.5) * 1.5;
    let bound = |byte: u8| f64::from(byte) / 255.0 * 60.0;
    let bounds = [
        PercentBounds {
            min: bound(data[2]),
            max: bound(data[2]) + bound(data[3]) + 40.0,
        },
        PercentBounds {
            min: bound(data[4]),
            max: bound(data[4]) + bound(data[5]) + 40.0,
        },
    ];
    let sizes = [left, 100.0 - left];

    let out = resize_pair(&sizes, 0, delta, &bounds);
    assert!(out.iter().all(|size| size.is_finite()), "non-finite output {out:?}");
    if bounds[0].min + bounds[1].min <= 100.0 {
        assert!((out[0] + out[1] - 100.0).abs() < 1e-9, "pair total drifted {out:?}");
        assert!(out[0] >= bounds[0].min - 1e-9 && out[1] >= bounds[1].min - 1e-9);
    } else {
        assert_eq!(out, vec![bounds[0].min, bounds[1].min]);
    }
});
