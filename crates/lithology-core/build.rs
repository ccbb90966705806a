/// Builds the gRPC client and server code for `lithology.proto` and
/// `health.proto` using `tonic-prost-build`.
///
/// The generated module is emitted into `OUT_DIR` together with an encoded
/// file descriptor set (`lithology_descriptor.bin`), which the server
/// registers with gRPC reflection.
///
/// # Files and Paths
///
/// - Proto files: `proto/lithology.proto`, `proto/health.proto`
/// - Includes: `proto/`
///
/// # Panics
///
/// Panics if code generation fails, which aborts the build with the protoc
/// diagnostics.
///
/// # Output
///
/// Generated code is accessible via:
///
/// ```rust,ignore
/// pub mod proto {
///     tonic::include_proto!("lithology");
/// }
///
/// pub mod health {
///     tonic::include_proto!("grpc.health.v1");
/// }
/// ```
use std::env;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let descriptor_path = out_dir.join("lithology_descriptor.bin");

    let mut config = tonic_prost_build::Config::new();
    config.file_descriptor_set_path(&descriptor_path);

    let protos = ["proto/lithology.proto", "proto/health.proto"];
    for proto in protos {
        println!("cargo:rerun-if-changed={proto}");
    }

    tonic_prost_build::configure()
        .compile_with_config(config, &protos, &["proto"])
        .unwrap();
}
