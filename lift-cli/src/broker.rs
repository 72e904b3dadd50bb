use async_trait::async_trait;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use lift_client::{
    errors::ClientError, Ack, LiftClient, MessageOptions, MessageStream, Metadata, PartitionInfo,
    PauseOptions, ReadonlyOptions, StreamOptions, SubscriptionOptions,
};

use crate::config::Settings;
use crate::errors::CliError;

type ClientResult<T> = std::result::Result<T, ClientError>;

/// The broker operations the commands are built from.
#[async_trait]
pub(crate) trait BrokerSession: Send + Sync {
    async fn create_stream(
        &self,
        subject: &str,
        name: &str,
        options: &StreamOptions,
    ) -> ClientResult<()>;

    async fn delete_stream(&self, name: &str) -> ClientResult<()>;

    async fn set_stream_readonly(&self, name: &str, options: &ReadonlyOptions)
        -> ClientResult<()>;

    async fn pause_stream(&self, name: &str, options: &PauseOptions) -> ClientResult<()>;

    async fn publish(
        &self,
        stream: &str,
        value: Vec<u8>,
        options: &MessageOptions,
    ) -> ClientResult<Option<Ack>>;

    async fn subscribe(
        &self,
        stream: &str,
        options: SubscriptionOptions,
    ) -> ClientResult<MessageStream>;

    async fn fetch_metadata(&self) -> ClientResult<Metadata>;

    async fn fetch_partition_metadata(
        &self,
        stream: &str,
        partition: i32,
    ) -> ClientResult<PartitionInfo>;

    async fn set_cursor(
        &self,
        cursor_id: &str,
        stream: &str,
        partition: i32,
        offset: i64,
    ) -> ClientResult<()>;

    async fn fetch_cursor(&self, cursor_id: &str, stream: &str, partition: i32)
        -> ClientResult<i64>;
}

/// Opens broker sessions. A single attempt per call.
#[async_trait]
pub(crate) trait Connector: Send + Sync {
    type Session: BrokerSession;

    async fn connect(&self, address: &str) -> ClientResult<Self::Session>;
}

/// Connects over gRPC with `LiftClient`.
#[derive(Debug, Clone, Default)]
pub(crate) struct LiftConnector {
    connect_timeout: Option<Duration>,
    tls_ca: Option<PathBuf>,
}

impl LiftConnector {
    pub(crate) fn new(settings: &Settings) -> Self {
        LiftConnector {
            connect_timeout: Some(settings.setup_timeout),
            tls_ca: settings.tls_ca.clone(),
        }
    }
}

#[async_trait]
impl Connector for LiftConnector {
    type Session = LiftClient;

    async fn connect(&self, address: &str) -> ClientResult<LiftClient> {
        let mut builder = LiftClient::builder().address(address);
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(ca) = &self.tls_ca {
            builder = builder.with_tls(ca);
        }
        builder.build().await
    }
}

#[async_trait]
impl BrokerSession for LiftClient {
    async fn create_stream(
        &self,
        subject: &str,
        name: &str,
        options: &StreamOptions,
    ) -> ClientResult<()> {
        LiftClient::create_stream(self, subject, name, options).await
    }

    async fn delete_stream(&self, name: &str) -> ClientResult<()> {
        LiftClient::delete_stream(self, name).await
    }

    async fn set_stream_readonly(
        &self,
        name: &str,
        options: &ReadonlyOptions,
    ) -> ClientResult<()> {
        LiftClient::set_stream_readonly(self, name, options).await
    }

    async fn pause_stream(&self, name: &str, options: &PauseOptions) -> ClientResult<()> {
        LiftClient::pause_stream(self, name, options).await
    }

    async fn publish(
        &self,
        stream: &str,
        value: Vec<u8>,
        options: &MessageOptions,
    ) -> ClientResult<Option<Ack>> {
        LiftClient::publish(self, stream, value, options).await
    }

    async fn subscribe(
        &self,
        stream: &str,
        options: SubscriptionOptions,
    ) -> ClientResult<MessageStream> {
        LiftClient::subscribe(self, stream, options).await
    }

    async fn fetch_metadata(&self) -> ClientResult<Metadata> {
        LiftClient::fetch_metadata(self).await
    }

    async fn fetch_partition_metadata(
        &self,
        stream: &str,
        partition: i32,
    ) -> ClientResult<PartitionInfo> {
        LiftClient::fetch_partition_metadata(self, stream, partition).await
    }

    async fn set_cursor(
        &self,
        cursor_id: &str,
        stream: &str,
        partition: i32,
        offset: i64,
    ) -> ClientResult<()> {
        LiftClient::set_cursor(self, cursor_id, stream, partition, offset).await
    }

    async fn fetch_cursor(
        &self,
        cursor_id: &str,
        stream: &str,
        partition: i32,
    ) -> ClientResult<i64> {
        LiftClient::fetch_cursor(self, cursor_id, stream, partition).await
    }
}

/// Opens a session to `address`. The session is released when the returned value is dropped.
pub(crate) async fn connect_to_endpoint<C: Connector>(
    connector: &C,
    address: &str,
) -> Result<C::Session, CliError> {
    info!(address, "connecting to broker");
    connector
        .connect(address)
        .await
        .map_err(|source| CliError::ConnectionFailed {
            address: address.to_string(),
            source,
        })
}

/// Runs `operation` under the setup deadline.
pub(crate) async fn with_deadline<T, F>(
    timeout: Duration,
    operation: &'static str,
    future: F,
) -> Result<T, CliError>
where
    F: Future<Output = Result<T, CliError>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(CliError::Timeout { operation, timeout }),
    }
}
