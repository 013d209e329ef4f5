fn main() {
    if let Err(e) = reflectscope_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
