//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = pairup_cli::run() {
        eprintln!("pairup: {err}");
        std::process::exit(1);
    }
}
