use rand::{rng, Rng};
use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use snowgen::Snowgen;

/// Each worker thread owns its own generator handle with its own worker id,
/// assigned by the spawning code; no shared or thread-local state.
fn main() {
    let mut handles = vec![];

    for worker_id in 0..4u8 {
        handles.push(thread::spawn(move || {
            let generator = Snowgen::new(worker_id, 1).unwrap();
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.next_id().unwrap();
                let (ts, _, worker, seq) = generator.extract.decompose(id);

                println!("Worker {worker} generated id #{i}: {id} (ts={ts}, seq={seq})");

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    // Collect all generated IDs
    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());

    let mut ids: Vec<_> = all_ids.into_iter().collect();
    ids.sort_unstable();
    for i in 1..ids.len() {
        assert!(ids[i] > ids[i - 1], "IDs not strictly increasing!");
    }
    println!("All IDs are unique across worker identities!");
}
