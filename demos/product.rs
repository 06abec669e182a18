// SPDX-FileCopyrightText: 2025 Matthew Milner <matterhorn103@proton.me>
// SPDX-License-Identifier: MIT

//! Multiplies two measurements and prints the result with its error.
//!
//! Further values can be given on the command line in the form
//! `(value+-error)`; they are multiplied in as well. Run with
//! `RUST_LOG=debug` to see why an argument was rejected.

use gaussprop::{ValueWithErrorF64, make_value};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let a = make_value(5.0_f64, 0.3_f64);
    let b = make_value(2.0_f64, 0.2_f64);
    let mut product = a * b;
    println!("a*b={product}");

    for arg in std::env::args().skip(1) {
        match arg.parse::<ValueWithErrorF64>() {
            Ok(n) => {
                product *= n;
                tracing::info!(factor = %n, "multiplied in");
            }
            Err(e) => tracing::warn!("skipping argument: {e}"),
        }
    }
    println!("product={product}");
}
