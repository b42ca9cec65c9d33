use crate::*;

#[test]
fn test_wait_next_millis_progresses() {
    let generator = Snowgen::new(1, 1).unwrap();
    let from = generator.now_since_epoch().unwrap();
    let next = generator.wait_next_millis(from);
    assert!(next > from);
}

#[test]
fn test_wait_next_millis_progresses_no_spin() {
    let cfg = SnowgenConfig::builder()
        .enable_spin(false)
        .spin_loops(0)
        .spin_yield_every(0)
        .build();
    let generator = Snowgen::with_config(1, 1, cfg).unwrap();
    let from = generator.now_since_epoch().unwrap();
    let next = generator.wait_next_millis(from);
    assert!(next > from);
}
