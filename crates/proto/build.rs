//! Build script for hashgraph-proto.
//!
//! The crate ships pre-generated bindings in src/generated/. Setting
//! `HASHGRAPH_REGENERATE_PROTO` rebuilds them from proto/hashgraph/services.proto
//! with tonic-prost-build, which requires `protoc` on the PATH.

use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Declare custom cfg for conditional compilation
    println!("cargo::rustc-check-cfg=cfg(use_pregenerated_proto)");
    println!("cargo::rerun-if-env-changed=HASHGRAPH_REGENERATE_PROTO");

    let proto_path = Path::new("../../proto/hashgraph/services.proto");

    if std::env::var_os("HASHGRAPH_REGENERATE_PROTO").is_some() && proto_path.exists() {
        println!("cargo::rerun-if-changed=../../proto/hashgraph/services.proto");

        tonic_prost_build::configure()
            .build_server(true)
            .build_client(false)
            .emit_rerun_if_changed(true)
            .compile_protos(&["../../proto/hashgraph/services.proto"], &["../../proto"])?;
    } else {
        println!("cargo::rustc-cfg=use_pregenerated_proto");
    }

    Ok(())
}
