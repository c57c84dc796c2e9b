fn main() {
    if let Err(e) = xsdscope_cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
