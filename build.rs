fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds (`cargo test`) have no ESP-IDF toolchain to describe.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
