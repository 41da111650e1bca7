use runlength::{encode, RleVec, RunEncoder};

/// Encodes a fixed sequence three ways and prints the runs.
///
/// Usage: cargo run --example encode
fn main() {
    let numbers = vec![0, 0, 3, 3, 3, 3, 3, 2, 0, 0, 0, 6, 6];

    // Pull-based: the consumer drives the encoder
    println!("=== Pulled runs ===");
    for run in encode(numbers.iter().copied()) {
        println!("({}, {})", run.value(), run.count());
    }

    // Push-based: the producer feeds values in
    println!("\n=== Pushed runs ===");
    let mut encoder = RunEncoder::new();
    for &n in &numbers {
        if let Some(run) = encoder.push(n) {
            println!("({}, {})", run.value(), run.count());
        }
    }
    if let Some(run) = encoder.finish() {
        println!("({}, {})", run.value(), run.count());
    }

    // Owned sequence with statistics
    let seq: RleVec<i32> = numbers.into_iter().collect();
    let stats = seq.stats();
    println!("\n=== Statistics ===");
    println!("Input length: {}", stats.input_length);
    println!("Runs: {}", stats.num_runs);
    println!("Longest run: {}", stats.longest_run);
    println!("Compression ratio: {:.2}%", stats.compression_ratio());
}
