use std::collections::HashMap;

use lift_core::proto;

/// A message received from a stream partition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    // offset of the message within its partition, assigned by the broker
    pub offset: i64,
    pub key: Vec<u8>,
    // opaque payload
    pub value: Vec<u8>,
    // nanoseconds since the epoch
    pub timestamp: i64,
    pub stream: String,
    pub partition: i32,
    pub subject: String,
    pub headers: HashMap<String, Vec<u8>>,
}

impl From<proto::Message> for Message {
    fn from(message: proto::Message) -> Self {
        Message {
            offset: message.offset,
            key: message.key,
            value: message.value,
            timestamp: message.timestamp,
            stream: message.stream,
            partition: message.partition,
            subject: message.subject,
            headers: message.headers,
        }
    }
}

/// Acknowledgement returned by the partition leader for a published message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub stream: String,
    pub partition_subject: String,
    pub offset: i64,
    pub commit_timestamp: i64,
}

impl From<proto::Ack> for Ack {
    fn from(ack: proto::Ack) -> Self {
        Ack {
            stream: ack.stream,
            partition_subject: ack.partition_subject,
            offset: ack.offset,
            commit_timestamp: ack.commit_timestamp,
        }
    }
}
