//! Help command.

/// One-line usage text.
pub const USAGE: &str = "Usage: mergelog generate";

/// Runs the help command.
pub fn run() {
    println!("{USAGE}");
}
