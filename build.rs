use std::env;

fn main() {
    // Reported by `schemefinder version`
    println!(
        "cargo:rustc-env=SCHEMEFINDER_RUST_VERSION={}",
        env::var("RUSTC_VERSION").unwrap_or_else(|_| "unknown".to_string())
    );
    println!(
        "cargo:rustc-env=SCHEMEFINDER_TARGET={}",
        env::var("TARGET").unwrap_or_else(|_| "unknown".to_string())
    );
    println!("cargo:rerun-if-env-changed=RUSTC_VERSION");
}
