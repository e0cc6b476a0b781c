/// Display version information
pub fn display_version() {
    println!("Gas Tally v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Self and total gas accounting for Lotus execution traces.");
}
