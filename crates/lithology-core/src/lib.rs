#![doc = include_str!("../README.md")]

pub mod client;
mod common;
pub use common::*;

/// Generated protobuf messages and gRPC stubs for `lithology.proto`.
pub mod proto {
    tonic::include_proto!("lithology");

    /// Encoded file descriptor set, used to serve gRPC reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("lithology_descriptor");
}

/// Generated `grpc.health.v1` messages and stubs. The encoded descriptors
/// are part of [`proto::FILE_DESCRIPTOR_SET`].
pub mod health {
    tonic::include_proto!("grpc.health.v1");

    pub use health_check_response::ServingStatus;
}
