//! Timestamp accuracy against the live system clock

use std::thread;
use std::time::Duration;

use crate::tests::test_utils::wall_clock_ms;
use crate::*;

#[test]
fn test_timestamp_reflects_wall_clock() {
    let generator = Snowgen::new(1, 1).unwrap();
    let epoch = generator.config.epoch();

    let before = wall_clock_ms(epoch);
    let ts = generator.extract.timestamp(generator.next_id().unwrap());
    let after = wall_clock_ms(epoch);

    assert!(
        ts >= before && ts <= after + 10,
        "Timestamp {ts} outside wall-clock window [{before}, {after}]"
    );
}

#[test]
fn test_timestamp_advances_with_real_sleep() {
    let generator = Snowgen::new(1, 1).unwrap();
    let ts1 = generator.extract.timestamp(generator.next_id().unwrap());
    thread::sleep(Duration::from_millis(100));
    let ts2 = generator.extract.timestamp(generator.next_id().unwrap());

    let diff = ts2 - ts1;
    assert!(
        (80..=200).contains(&diff),
        "Expected ~100ms, got {}ms",
        diff
    );
}

#[test]
fn test_timestamps_across_generator_restart() {
    let g1 = Snowgen::new(1, 1).unwrap();
    let ts1 = g1.extract.timestamp(g1.next_id().unwrap());
    thread::sleep(Duration::from_millis(50));

    let g2 = Snowgen::new(1, 1).unwrap();
    let ts2 = g2.extract.timestamp(g2.next_id().unwrap());

    assert!(ts2 > ts1 && ts2 - ts1 >= 40, "Expected ~50ms diff");
}

#[test]
fn test_unix_timestamp_restores_epoch() {
    let generator = Snowgen::new(1, 1).unwrap();
    let id = generator.next_id().unwrap();

    assert_eq!(
        generator.extract.unix_timestamp(id),
        generator.extract.timestamp(id) + generator.config.epoch()
    );
}
