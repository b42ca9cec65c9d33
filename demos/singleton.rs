use snowgen::{decimal, global};

fn main() {
    // Wire the process-wide generator exactly once
    global::initialize(1, 0).unwrap();

    for _ in 0..3 {
        println!("id: {}", global::next_id().unwrap());
    }

    // Render into a caller-owned buffer (at least 21 bytes)
    let mut buf = [0u8; decimal::MIN_BUFFER_LEN];
    let shared = global::instance().unwrap();
    let len = shared.next_id_into(&mut buf).unwrap();
    println!("buffered: {}", std::str::from_utf8(&buf[..len]).unwrap());

    // A second initialize is rejected rather than re-configuring
    assert!(global::initialize(2, 0).is_err());
    println!("re-initialization rejected, identity stays worker 1");
}
