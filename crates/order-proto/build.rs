//! Regenerates `src/generated/order_system.rs` from `proto/order_system.proto`.
//!
//! Code generation only runs with the `codegen` feature, so ordinary builds
//! use the checked-in output and do not need `protoc`:
//!
//! ```bash
//! cargo build -p order-proto --features codegen
//! ```

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/order_system.proto");
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "codegen")]
    generate()?;

    Ok(())
}

#[cfg(feature = "codegen")]
fn generate() -> Result<(), Box<dyn std::error::Error>> {
    use std::path::PathBuf;

    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let proto_dir = crate_root.join("proto");
    let proto_file = proto_dir.join("order_system.proto");

    tonic_build::configure()
        .build_client(true)
        .build_server(true)
        .out_dir(crate_root.join("src/generated"))
        .compile_protos(&[proto_file], &[proto_dir])?;
    Ok(())
}
