//! Build script for compiling Protocol Buffer definitions.
//!
//! Generated code is placed in `$OUT_DIR` and included via `tonic::include_proto!`.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=../../proto/biblio_lending.proto");
    println!("cargo:rerun-if-changed=../../proto");

    // Server for the service, client for the `client` binary
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["../../proto/biblio_lending.proto"], &["../../proto"])?;

    Ok(())
}
