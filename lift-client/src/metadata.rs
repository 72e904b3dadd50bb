use chrono::{DateTime, Utc};
use std::fmt::{self, Display, Formatter};

use lift_core::proto;

/// A snapshot of the cluster as reported by the broker that served the request.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub brokers: Vec<BrokerInfo>,
    // sorted by stream name
    pub streams: Vec<StreamInfo>,
    // local time at which the snapshot was received
    pub last_updated: DateTime<Utc>,
}

impl Metadata {
    pub(crate) fn from_response(response: proto::FetchMetadataResponse) -> Self {
        let brokers = response.brokers.into_iter().map(BrokerInfo::from).collect();

        let mut streams: Vec<StreamInfo> = response
            .stream_metadata
            .into_iter()
            .map(StreamInfo::from)
            .collect();
        streams.sort_by(|a, b| a.name.cmp(&b.name));

        Metadata {
            brokers,
            streams,
            last_updated: Utc::now(),
        }
    }

    /// Addresses of every broker known to the cluster.
    pub fn addrs(&self) -> Vec<String> {
        self.brokers.iter().map(BrokerInfo::addr).collect()
    }

    pub fn broker(&self, id: &str) -> Option<&BrokerInfo> {
        self.brokers.iter().find(|broker| broker.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerInfo {
    pub id: String,
    pub host: String,
    pub port: i32,
    pub partition_count: i32,
    pub leader_count: i32,
}

impl BrokerInfo {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Display for BrokerInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.addr())
    }
}

impl From<proto::Broker> for BrokerInfo {
    fn from(broker: proto::Broker) -> Self {
        BrokerInfo {
            id: broker.id,
            host: broker.host,
            port: broker.port,
            partition_count: broker.partition_count,
            leader_count: broker.leader_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StreamInfo {
    pub name: String,
    pub subject: String,
    pub creation_time: Option<DateTime<Utc>>,
    // sorted by partition id
    pub partitions: Vec<PartitionInfo>,
}

impl From<proto::StreamMetadata> for StreamInfo {
    fn from(stream: proto::StreamMetadata) -> Self {
        let mut partitions: Vec<PartitionInfo> = stream
            .partitions
            .into_values()
            .map(PartitionInfo::from)
            .collect();
        partitions.sort_by_key(|partition| partition.id);

        StreamInfo {
            name: stream.name,
            subject: stream.subject,
            creation_time: from_unix_nanos(stream.creation_timestamp),
            partitions,
        }
    }
}

/// Replication and state of a single partition. Brokers are referenced by id.
#[derive(Debug, Clone)]
pub struct PartitionInfo {
    pub id: i32,
    pub leader: String,
    pub replicas: Vec<String>,
    pub isr: Vec<String>,
    pub high_watermark: i64,
    pub newest_offset: i64,
    pub paused: bool,
    pub readonly: bool,
    pub messages_received_timestamps: EventTimestamps,
    pub pause_timestamps: EventTimestamps,
    pub readonly_timestamps: EventTimestamps,
}

impl From<proto::PartitionMetadata> for PartitionInfo {
    fn from(partition: proto::PartitionMetadata) -> Self {
        PartitionInfo {
            id: partition.id,
            leader: partition.leader,
            replicas: partition.replicas,
            isr: partition.isr,
            high_watermark: partition.high_watermark,
            newest_offset: partition.newest_offset,
            paused: partition.paused,
            readonly: partition.readonly,
            messages_received_timestamps: partition.messages_received_timestamps.into(),
            pause_timestamps: partition.pause_timestamps.into(),
            readonly_timestamps: partition.readonly_timestamps.into(),
        }
    }
}

/// First and latest time a partition event happened, `None` when it never did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventTimestamps {
    pub first: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
}

impl From<Option<proto::PartitionEventTimestamps>> for EventTimestamps {
    fn from(timestamps: Option<proto::PartitionEventTimestamps>) -> Self {
        match timestamps {
            Some(ts) => EventTimestamps {
                first: from_unix_nanos(ts.first_timestamp),
                latest: from_unix_nanos(ts.latest_timestamp),
            },
            None => EventTimestamps::default(),
        }
    }
}

fn from_unix_nanos(nanos: i64) -> Option<DateTime<Utc>> {
    if nanos <= 0 {
        return None;
    }
    Some(DateTime::from_timestamp_nanos(nanos))
}
