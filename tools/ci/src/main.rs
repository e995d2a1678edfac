use xshell::{cmd, Shell};

fn main() {
    // Results depend on the local default toolchain
    let sh = Shell::new().expect("Could not open a shell.");

    // See if any code needs to be formatted
    cmd!(sh, "cargo fmt --all -- --check")
        .run()
        .expect("Please run `cargo fmt --all` to format your code.");

    // See if clippy has any complaints.
    cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings")
        .run()
        .expect("Please fix `cargo clippy` errors.");

    // Unit, integration and doc tests of the deadzone library
    cmd!(sh, "cargo test --package thumbstick-deadzones")
        .run()
        .expect("Please fix failing tests.");

    // Make sure the benchmarks still build
    cmd!(sh, "cargo bench --package thumbstick-deadzones --no-run")
        .run()
        .expect("Please fix the benchmarks.");
}
