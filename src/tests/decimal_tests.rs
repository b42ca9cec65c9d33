//! Decimal text surface over generated ids

use crate::tests::test_utils::{manual_generator, TEST_EPOCH};
use crate::{decimal, Snowgen, SnowgenError};

#[test]
fn test_next_id_string_round_trips() {
    let generator = Snowgen::new(2, 4).unwrap();

    let rendered = generator.next_id_string().unwrap();
    assert!(rendered.len() <= decimal::MAX_LEN);

    let id = decimal::decode(&rendered).unwrap();
    assert_eq!(generator.extract.worker(id), 2);
    assert_eq!(generator.extract.datacenter(id), 4);
}

#[test]
fn test_next_id_into_known_vector() {
    let (generator, _clock) = manual_generator(TEST_EPOCH + 123);

    let mut buf = [0u8; decimal::MIN_BUFFER_LEN];
    let len = generator.next_id_into(&mut buf).unwrap();
    assert_eq!(&buf[..len], b"516321280");
}

#[test]
fn test_next_id_into_rejects_short_buffer_without_issuing() {
    let (generator, _clock) = manual_generator(TEST_EPOCH + 123);

    let mut short = [0u8; decimal::MAX_LEN];
    let err = generator.next_id_into(&mut short).unwrap_err();
    assert!(matches!(
        err,
        SnowgenError::InvalidParams { param: "buffer", .. }
    ));

    // The rejected call must not have burned a sequence number
    let id = generator.next_id().unwrap();
    assert_eq!(generator.extract.sequence(id), 0);
}

#[test]
fn test_rendered_ids_sort_like_their_integers() {
    let generator = Snowgen::new(1, 1).unwrap();

    let a = generator.next_id().unwrap();
    let b = generator.next_id().unwrap();
    assert!(b > a);
    assert_eq!(decimal::decode(&decimal::encode(a)).unwrap(), a);
    assert_eq!(decimal::decode(&decimal::encode(b)).unwrap(), b);
}
