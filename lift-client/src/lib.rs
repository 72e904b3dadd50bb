//! Lift-Client
//!
//! Lift-Client -- a session oriented client for the Liftbridge streaming broker

mod client;
pub use client::{LiftClient, LiftClientBuilder, MessageStream};

pub mod errors;

mod message;
pub use message::{Ack, Message};

mod metadata;
pub use metadata::{BrokerInfo, EventTimestamps, Metadata, PartitionInfo, StreamInfo};

mod options;
pub use options::{
    AckPolicy, MessageOptions, PauseOptions, ReadonlyOptions, StartPosition, StreamOptions,
    SubscriptionOptions,
};
