use std::collections::HashMap;

use lift_core::proto;

/// The acknowledgement a publisher waits for before the broker answers.
///
/// Variants:
/// - `Leader`: the partition leader has written the message to its log.
/// - `All`: every replica in the ISR has written the message.
/// - `None`: the broker does not send an ack at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AckPolicy {
    #[default]
    Leader,
    All,
    None,
}

impl From<AckPolicy> for proto::AckPolicy {
    fn from(policy: AckPolicy) -> Self {
        match policy {
            AckPolicy::Leader => proto::AckPolicy::Leader,
            AckPolicy::All => proto::AckPolicy::All,
            AckPolicy::None => proto::AckPolicy::None,
        }
    }
}

/// Options applied when a stream is created. Zero values defer to the broker defaults.
#[derive(Debug, Clone, Default)]
pub struct StreamOptions {
    pub group: Option<String>,
    pub partitions: Option<u32>,
    pub replication_factor: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    pub ack_policy: AckPolicy,
    pub key: Option<Vec<u8>>,
    pub headers: HashMap<String, Vec<u8>>,
    pub partition: i32,
}

/// Pauses the listed partitions, or every partition when the list is empty.
#[derive(Debug, Clone, Default)]
pub struct PauseOptions {
    pub partitions: Vec<i32>,
    pub resume_all: bool,
}

/// Sets the listed partitions readonly, or every partition when the list is empty.
#[derive(Debug, Clone, Default)]
pub struct ReadonlyOptions {
    pub partitions: Vec<i32>,
    pub readonly: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StartPosition {
    #[default]
    NewOnly,
    Earliest,
    Latest,
    Offset(i64),
}

#[derive(Debug, Clone, Default)]
pub struct SubscriptionOptions {
    pub partition: i32,
    pub start_position: StartPosition,
    pub read_isr_replica: bool,
}

impl SubscriptionOptions {
    pub(crate) fn into_request(self, stream: &str) -> proto::SubscribeRequest {
        let (start_position, start_offset) = match self.start_position {
            StartPosition::NewOnly => (proto::StartPosition::NewOnly, 0),
            StartPosition::Earliest => (proto::StartPosition::Earliest, 0),
            StartPosition::Latest => (proto::StartPosition::Latest, 0),
            StartPosition::Offset(offset) => (proto::StartPosition::Offset, offset),
        };

        proto::SubscribeRequest {
            stream: stream.to_string(),
            partition: self.partition,
            start_position: start_position as i32,
            start_offset,
            read_isr_replica: self.read_isr_replica,
            ..Default::default()
        }
    }
}
