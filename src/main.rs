use coin_seg_benchmark::run_benchmark;

fn main() {
    if let Err(e) = run_benchmark() {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
