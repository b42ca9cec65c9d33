use chrono::{DateTime, Utc};
use snowgen::Snowgen;

fn main() {
    // Create a generator as worker 7 in datacenter 3
    let generator = Snowgen::new(7, 3).unwrap();

    // Generate some IDs
    let id1 = generator.next_id().unwrap();
    let id2 = generator.next_id().unwrap();
    let id3 = generator.next_id().unwrap();

    println!("Generated IDs (guaranteed to be increasing):");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Or extract components individually
    let ts = generator.extract.timestamp(id3);
    let datacenter = generator.extract.datacenter(id3);
    let worker = generator.extract.worker(id3);
    let seq = generator.extract.sequence(id3);
    println!("\nComponents of ID3 (extracted individually):");
    println!("  Timestamp: {ts} ms since epoch");
    println!("  Datacenter ID: {datacenter}");
    println!("  Worker ID: {worker}");
    println!("  Sequence: {seq}");
}

fn print_id(id: u64, generator: &Snowgen) {
    let (since_epoch, datacenter, worker, sequence) = generator.extract.decompose(id);
    let timestamp = generator.extract.unix_timestamp(id);
    let datetime = DateTime::<Utc>::from_timestamp_millis(timestamp as i64).unwrap();

    println!(
        "  ID: {id}, Timestamp: {since_epoch}, Human date: {datetime}, Datacenter: {datacenter}, Worker: {worker}, Sequence: {sequence}"
    );
}
