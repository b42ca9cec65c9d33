//! Sequence counting and overflow behavior on a hand-driven clock

use std::thread;
use std::time::Duration;

use crate::tests::test_utils::{manual_generator, TEST_EPOCH};

#[test]
fn test_sequence_increments_within_millisecond() {
    let (generator, _clock) = manual_generator(TEST_EPOCH + 5);

    for expected_seq in 0..10u16 {
        let id = generator.next_id().unwrap();
        let (ts, _, _, seq) = generator.extract.decompose(id);
        assert_eq!(ts, 5);
        assert_eq!(seq, expected_seq);
    }
}

#[test]
fn test_sequence_resets_on_new_millisecond() {
    let (generator, clock) = manual_generator(TEST_EPOCH + 5);

    for _ in 0..3 {
        generator.next_id().unwrap();
    }

    clock.advance(1);
    let id = generator.next_id().unwrap();
    let (ts, _, _, seq) = generator.extract.decompose(id);
    assert_eq!(ts, 6);
    assert_eq!(seq, 0, "Sequence did not restart from 0 on timestamp change");
}

#[test]
fn test_sequence_skips_no_values_before_wrap() {
    let (generator, _clock) = manual_generator(TEST_EPOCH + 5);

    // The full sequence space of one millisecond, in order
    for expected_seq in 0..=4095u16 {
        let id = generator.next_id().unwrap();
        assert_eq!(generator.extract.sequence(id), expected_seq);
    }
}

#[test]
fn test_sequence_wrap_waits_for_next_millisecond() {
    let (generator, clock) = manual_generator(TEST_EPOCH + 5);

    for _ in 0..=4095 {
        generator.next_id().unwrap();
    }

    // The 4097th id must block until the clock advances
    let ticker = {
        let clock = clock.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            clock.advance(1);
        })
    };

    let id = generator.next_id().unwrap();
    ticker.join().unwrap();

    let (ts, _, _, seq) = generator.extract.decompose(id);
    assert_eq!(ts, 6, "Id should carry the advanced millisecond");
    assert_eq!(seq, 0, "Sequence should resume at 0 after the wait");
}

#[test]
fn test_distant_clock_jump_forward_resets_sequence() {
    let (generator, clock) = manual_generator(TEST_EPOCH + 5);

    for _ in 0..100 {
        generator.next_id().unwrap();
    }

    clock.advance(10_000);
    let id = generator.next_id().unwrap();
    assert_eq!(generator.extract.timestamp(id), 10_005);
    assert_eq!(generator.extract.sequence(id), 0);
}
