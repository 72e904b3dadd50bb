//! Lift-Core
//!
//! Wire types and the gRPC client of the Liftbridge `proto.API` service,
//! generated from `proto/api.proto` at build time.

pub mod proto {
    include!("proto/proto.rs");
}

pub use proto::api_client::ApiClient;
