// ============================================================================
// Square Root Usage Example
// ============================================================================
//
// Run with: RUST_LOG=trace cargo run --example sqrt_usage --features logging

use sd59x18::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== SD59x18 Square Root Example ===\n");

    let inputs = [
        "0",
        "1",
        "2",
        "16",
        "3.141592653589793238",
        "1e-18",
        "57896044618658097711785492504343953926634.992332820282019729",
        "57896044618658097711785492504343953926634.992332820282019730",
        "-1",
    ];

    for input in inputs {
        let x: SD59x18 = match input.parse() {
            Ok(x) => x,
            Err(e) => {
                println!("{input}: could not parse ({e})");
                continue;
            },
        };

        match x.sqrt() {
            Ok(root) => println!("sqrt({x}) = {root}"),
            Err(NumericError::NegativeInput) => println!("sqrt({x}) rejected: negative input"),
            Err(NumericError::Overflow) => println!("sqrt({x}) rejected: result out of range"),
            Err(e) => println!("sqrt({x}) failed: {e}"),
        }
    }

    println!("\nChecking raw and typed surfaces agree...");
    for x in [SD59x18::E, SD59x18::PI, SD59x18::MAX_WHOLE, SD59x18::MAX] {
        match check_sqrt(x.raw()) {
            Ok(outcome) => println!("  {x}: agree ({outcome:?})"),
            Err(divergence) => println!("  {divergence}"),
        }
    }
}
