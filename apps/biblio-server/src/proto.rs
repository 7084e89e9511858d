//! Generated gRPC code for the lending protocol.
//!
//! This module includes the Rust code generated from `proto/biblio_lending.proto`.
//!
//! ## Services Available
//! - `LendingServiceServer` - Server side, implemented in [`crate::services`]
//! - `LendingServiceClient` - Client stubs, used by the `client` binary

tonic::include_proto!("biblio.lending.v1");
