//! A broker held in memory, used to drive the commands in unit tests.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::{mapref::entry::Entry, DashMap};
use futures::StreamExt;
use std::sync::Arc;
use tonic::Status;

use lift_client::{
    errors::ClientError, Ack, AckPolicy, BrokerInfo, EventTimestamps, Message, MessageOptions,
    MessageStream, Metadata, PartitionInfo, PauseOptions, ReadonlyOptions, StreamInfo,
    StreamOptions, SubscriptionOptions,
};

use crate::broker::{BrokerSession, Connector};

type ClientResult<T> = std::result::Result<T, ClientError>;
type ErrorFactory = fn() -> ClientError;

const BROKER_ID: &str = "broker-1";

#[derive(Debug, Clone, Default)]
struct StreamRecord {
    subject: String,
    partitions: u32,
    messages: Vec<Message>,
    paused: Option<(Vec<i32>, bool)>,
    readonly: Option<(Vec<i32>, bool)>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Reachability {
    #[default]
    Reachable,
    Refusing,
    Hanging,
}

/// Both the connector and the session. Clones share the same streams and cursors.
#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryBroker {
    streams: Arc<DashMap<String, StreamRecord>>,
    cursors: Arc<DashMap<(String, String, i32), i64>>,
    connections: Arc<DashMap<String, usize>>,
    reachability: Reachability,
    create_error: Option<ErrorFactory>,
    subscribe_error: Option<ErrorFactory>,
    delivery_error: Option<ErrorFactory>,
}

impl InMemoryBroker {
    pub(crate) fn new() -> Self {
        InMemoryBroker::default()
    }

    /// Every connection attempt is refused.
    pub(crate) fn unreachable(mut self) -> Self {
        self.reachability = Reachability::Refusing;
        self
    }

    /// Connection attempts never complete.
    pub(crate) fn hanging(mut self) -> Self {
        self.reachability = Reachability::Hanging;
        self
    }

    pub(crate) fn fail_create_with(mut self, error: ErrorFactory) -> Self {
        self.create_error = Some(error);
        self
    }

    pub(crate) fn fail_subscribe_with(mut self, error: ErrorFactory) -> Self {
        self.subscribe_error = Some(error);
        self
    }

    /// Subscriptions yield `error` once the stored messages are delivered.
    /// Without it they stay open and idle.
    pub(crate) fn fail_delivery_with(mut self, error: ErrorFactory) -> Self {
        self.delivery_error = Some(error);
        self
    }

    pub(crate) fn with_stream(self, name: &str, partitions: u32) -> Self {
        self.streams.insert(
            name.to_string(),
            StreamRecord {
                subject: name.to_string(),
                partitions,
                ..Default::default()
            },
        );
        self
    }

    /// Appends a message to partition 0 of an existing stream.
    pub(crate) fn with_message(self, stream: &str, value: impl Into<Vec<u8>>) -> Self {
        if let Some(mut record) = self.streams.get_mut(stream) {
            let offset = record.messages.len() as i64;
            record.messages.push(Message {
                offset,
                value: value.into(),
                stream: stream.to_string(),
                ..Default::default()
            });
        }
        self
    }

    /// Addresses that were dialled, whether or not the connection succeeded.
    pub(crate) fn dialled(&self) -> Vec<String> {
        let mut addresses: Vec<String> =
            self.connections.iter().map(|entry| entry.key().clone()).collect();
        addresses.sort();
        addresses
    }

    pub(crate) fn has_stream(&self, name: &str) -> bool {
        self.streams.contains_key(name)
    }

    pub(crate) fn stream_subject(&self, name: &str) -> Option<String> {
        self.streams.get(name).map(|record| record.subject.clone())
    }

    pub(crate) fn partition_count(&self, name: &str) -> Option<u32> {
        self.streams.get(name).map(|record| record.partitions)
    }

    pub(crate) fn messages(&self, name: &str) -> Vec<Message> {
        self.streams
            .get(name)
            .map(|record| record.messages.clone())
            .unwrap_or_default()
    }

    pub(crate) fn paused(&self, name: &str) -> Option<(Vec<i32>, bool)> {
        self.streams.get(name).and_then(|record| record.paused.clone())
    }

    pub(crate) fn readonly(&self, name: &str) -> Option<(Vec<i32>, bool)> {
        self.streams
            .get(name)
            .and_then(|record| record.readonly.clone())
    }

    fn check_partition(&self, stream: &str, partition: i32) -> ClientResult<()> {
        let record = self
            .streams
            .get(stream)
            .ok_or_else(|| ClientError::NotFound("no such stream".to_string()))?;
        if partition < 0 || partition as u32 >= record.partitions {
            return Err(ClientError::NotFound("no such partition".to_string()));
        }
        Ok(())
    }
}

fn partition_info(id: i32, record: &StreamRecord) -> PartitionInfo {
    let newest_offset = record
        .messages
        .iter()
        .filter(|message| message.partition == id)
        .count() as i64
        - 1;

    PartitionInfo {
        id,
        leader: BROKER_ID.to_string(),
        replicas: vec![BROKER_ID.to_string()],
        isr: vec![BROKER_ID.to_string()],
        high_watermark: newest_offset,
        newest_offset,
        paused: record.paused.is_some(),
        readonly: record.readonly.as_ref().is_some_and(|(_, readonly)| *readonly),
        messages_received_timestamps: EventTimestamps::default(),
        pause_timestamps: EventTimestamps::default(),
        readonly_timestamps: EventTimestamps::default(),
    }
}

#[async_trait]
impl Connector for InMemoryBroker {
    type Session = InMemoryBroker;

    async fn connect(&self, address: &str) -> ClientResult<InMemoryBroker> {
        *self.connections.entry(address.to_string()).or_insert(0) += 1;
        match self.reachability {
            Reachability::Reachable => Ok(self.clone()),
            Reachability::Refusing => Err(ClientError::Status(Status::unavailable(
                "connection refused",
            ))),
            Reachability::Hanging => futures::future::pending().await,
        }
    }
}

#[async_trait]
impl BrokerSession for InMemoryBroker {
    async fn create_stream(
        &self,
        subject: &str,
        name: &str,
        options: &StreamOptions,
    ) -> ClientResult<()> {
        if let Some(error) = self.create_error {
            return Err(error());
        }
        match self.streams.entry(name.to_string()) {
            Entry::Occupied(_) => Err(ClientError::StreamExists),
            Entry::Vacant(entry) => {
                entry.insert(StreamRecord {
                    subject: subject.to_string(),
                    partitions: options.partitions.unwrap_or(1),
                    ..Default::default()
                });
                Ok(())
            }
        }
    }

    async fn delete_stream(&self, name: &str) -> ClientResult<()> {
        self.streams
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ClientError::NotFound("no such stream".to_string()))
    }

    async fn set_stream_readonly(
        &self,
        name: &str,
        options: &ReadonlyOptions,
    ) -> ClientResult<()> {
        let mut record = self
            .streams
            .get_mut(name)
            .ok_or_else(|| ClientError::NotFound("no such stream".to_string()))?;
        record.readonly = Some((options.partitions.clone(), options.readonly));
        Ok(())
    }

    async fn pause_stream(&self, name: &str, options: &PauseOptions) -> ClientResult<()> {
        let mut record = self
            .streams
            .get_mut(name)
            .ok_or_else(|| ClientError::NotFound("no such stream".to_string()))?;
        record.paused = Some((options.partitions.clone(), options.resume_all));
        Ok(())
    }

    async fn publish(
        &self,
        stream: &str,
        value: Vec<u8>,
        options: &MessageOptions,
    ) -> ClientResult<Option<Ack>> {
        self.check_partition(stream, options.partition)?;
        let mut record = self
            .streams
            .get_mut(stream)
            .ok_or_else(|| ClientError::NotFound("no such stream".to_string()))?;

        let offset = record.messages.len() as i64;
        let subject = record.subject.clone();
        record.messages.push(Message {
            offset,
            key: options.key.clone().unwrap_or_default(),
            value,
            stream: stream.to_string(),
            partition: options.partition,
            subject: subject.clone(),
            headers: options.headers.clone(),
            ..Default::default()
        });

        Ok(match options.ack_policy {
            AckPolicy::None => None,
            _ => Some(Ack {
                stream: stream.to_string(),
                partition_subject: subject,
                offset,
                commit_timestamp: 0,
            }),
        })
    }

    async fn subscribe(
        &self,
        name: &str,
        options: SubscriptionOptions,
    ) -> ClientResult<MessageStream> {
        if let Some(error) = self.subscribe_error {
            return Err(error());
        }
        self.check_partition(name, options.partition)?;

        let backlog: Vec<ClientResult<Message>> = self
            .messages(name)
            .into_iter()
            .filter(|message| message.partition == options.partition)
            .map(Ok)
            .collect();

        let tail = match self.delivery_error {
            Some(error) => futures::stream::once(async move { Err(error()) }).boxed(),
            None => futures::stream::pending().boxed(),
        };

        Ok(futures::stream::iter(backlog).chain(tail).boxed())
    }

    async fn fetch_metadata(&self) -> ClientResult<Metadata> {
        let mut streams: Vec<StreamInfo> = self
            .streams
            .iter()
            .map(|entry| StreamInfo {
                name: entry.key().clone(),
                subject: entry.subject.clone(),
                creation_time: None,
                partitions: (0..entry.partitions as i32)
                    .map(|id| partition_info(id, entry.value()))
                    .collect(),
            })
            .collect();
        streams.sort_by(|a, b| a.name.cmp(&b.name));

        let partition_count = streams.iter().map(|s| s.partitions.len() as i32).sum();
        Ok(Metadata {
            brokers: vec![BrokerInfo {
                id: BROKER_ID.to_string(),
                host: "127.0.0.1".to_string(),
                port: 9292,
                partition_count,
                leader_count: partition_count,
            }],
            streams,
            last_updated: Utc::now(),
        })
    }

    async fn fetch_partition_metadata(
        &self,
        stream: &str,
        partition: i32,
    ) -> ClientResult<PartitionInfo> {
        self.check_partition(stream, partition)?;
        self.streams
            .get(stream)
            .map(|record| partition_info(partition, record.value()))
            .ok_or_else(|| ClientError::NotFound("no such stream".to_string()))
    }

    async fn set_cursor(
        &self,
        cursor_id: &str,
        stream: &str,
        partition: i32,
        offset: i64,
    ) -> ClientResult<()> {
        self.check_partition(stream, partition)?;
        self.cursors.insert(
            (cursor_id.to_string(), stream.to_string(), partition),
            offset,
        );
        Ok(())
    }

    async fn fetch_cursor(
        &self,
        cursor_id: &str,
        stream: &str,
        partition: i32,
    ) -> ClientResult<i64> {
        self.check_partition(stream, partition)?;
        Ok(self
            .cursors
            .get(&(cursor_id.to_string(), stream.to_string(), partition))
            .map(|offset| *offset)
            .unwrap_or(-1))
    }
}
