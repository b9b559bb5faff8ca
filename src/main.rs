// Module declarations
mod cli;
mod toc;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
