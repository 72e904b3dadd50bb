use futures::stream::{BoxStream, StreamExt};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint, Uri};
use tracing::{debug, info};

use lift_core::{proto, ApiClient};

use crate::{
    errors::{status_to_client_error, ClientError, Result},
    message::{Ack, Message},
    metadata::{Metadata, PartitionInfo},
    options::{MessageOptions, PauseOptions, ReadonlyOptions, StreamOptions, SubscriptionOptions},
};

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Messages delivered by a subscription, in partition order.
pub type MessageStream = BoxStream<'static, Result<Message>>;

/// A session with one Liftbridge server.
///
/// Every call is a single RPC over the session channel; nothing is retried.
/// The channel is closed when the last clone of the client is dropped.
#[derive(Debug, Clone)]
pub struct LiftClient {
    address: String,
    api: ApiClient<Channel>,
}

impl LiftClient {
    pub fn builder() -> LiftClientBuilder {
        LiftClientBuilder::default()
    }

    /// Connects to the server at `address` (`host:port` or a full URL) with default options.
    pub async fn connect(address: &str) -> Result<Self> {
        LiftClient::builder().address(address).build().await
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Creates a stream bound to a subject.
    ///
    /// Fails with `ClientError::StreamExists` when a stream with that name already exists.
    pub async fn create_stream(
        &self,
        subject: &str,
        name: &str,
        options: &StreamOptions,
    ) -> Result<()> {
        let request = proto::CreateStreamRequest {
            subject: subject.to_string(),
            name: name.to_string(),
            group: options.group.clone().unwrap_or_default(),
            replication_factor: wire_count(options.replication_factor),
            partitions: wire_count(options.partitions),
        };

        self.api
            .clone()
            .create_stream(request)
            .await
            .map_err(status_to_client_error)?;
        Ok(())
    }

    pub async fn delete_stream(&self, name: &str) -> Result<()> {
        let request = proto::DeleteStreamRequest {
            name: name.to_string(),
        };

        self.api
            .clone()
            .delete_stream(request)
            .await
            .map_err(status_to_client_error)?;
        Ok(())
    }

    pub async fn pause_stream(&self, name: &str, options: &PauseOptions) -> Result<()> {
        let request = proto::PauseStreamRequest {
            name: name.to_string(),
            partitions: options.partitions.clone(),
            resume_all: options.resume_all,
        };

        self.api
            .clone()
            .pause_stream(request)
            .await
            .map_err(status_to_client_error)?;
        Ok(())
    }

    pub async fn set_stream_readonly(&self, name: &str, options: &ReadonlyOptions) -> Result<()> {
        let request = proto::SetStreamReadonlyRequest {
            name: name.to_string(),
            partitions: options.partitions.clone(),
            readonly: options.readonly,
        };

        self.api
            .clone()
            .set_stream_readonly(request)
            .await
            .map_err(status_to_client_error)?;
        Ok(())
    }

    /// Publishes one message and waits for the ack requested by `options.ack_policy`.
    ///
    /// Returns `None` when the policy asks for no ack.
    pub async fn publish(
        &self,
        stream: &str,
        value: Vec<u8>,
        options: &MessageOptions,
    ) -> Result<Option<Ack>> {
        let ack_policy: proto::AckPolicy = options.ack_policy.into();
        let request = proto::PublishRequest {
            key: options.key.clone().unwrap_or_default(),
            value,
            stream: stream.to_string(),
            partition: options.partition,
            headers: options.headers.clone(),
            ack_policy: ack_policy as i32,
            ..Default::default()
        };

        let response = self
            .api
            .clone()
            .publish(request)
            .await
            .map_err(status_to_client_error)?
            .into_inner();

        Ok(response.ack.map(Ack::from))
    }

    /// Subscribes to one partition of a stream.
    ///
    /// The server acknowledges a new subscription with an empty message or rejects it
    /// with an error status; this call returns once that first frame has been read.
    pub async fn subscribe(
        &self,
        stream: &str,
        options: SubscriptionOptions,
    ) -> Result<MessageStream> {
        let request = options.into_request(stream);
        let partition = request.partition;

        let mut inbound = self
            .api
            .clone()
            .subscribe(request)
            .await
            .map_err(status_to_client_error)?
            .into_inner();

        match inbound.message().await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(ClientError::StreamClosed),
            Err(status) => return Err(status_to_client_error(status)),
        }
        debug!(stream, partition, "subscription acknowledged by the server");

        let messages = inbound
            .map(|item| item.map(Message::from).map_err(status_to_client_error))
            .chain(futures::stream::once(async { Err(ClientError::StreamClosed) }));

        Ok(messages.boxed())
    }

    pub async fn fetch_metadata(&self) -> Result<Metadata> {
        let response = self
            .api
            .clone()
            .fetch_metadata(proto::FetchMetadataRequest::default())
            .await
            .map_err(status_to_client_error)?
            .into_inner();

        Ok(Metadata::from_response(response))
    }

    pub async fn fetch_partition_metadata(
        &self,
        stream: &str,
        partition: i32,
    ) -> Result<PartitionInfo> {
        let request = proto::FetchPartitionMetadataRequest {
            stream: stream.to_string(),
            partition,
        };

        let response = self
            .api
            .clone()
            .fetch_partition_metadata(request)
            .await
            .map_err(status_to_client_error)?
            .into_inner();

        response
            .metadata
            .map(PartitionInfo::from)
            .ok_or_else(|| ClientError::InvalidResponse("missing partition metadata".to_string()))
    }

    pub async fn set_cursor(
        &self,
        cursor_id: &str,
        stream: &str,
        partition: i32,
        offset: i64,
    ) -> Result<()> {
        let request = proto::SetCursorRequest {
            stream: stream.to_string(),
            partition,
            cursor_id: cursor_id.to_string(),
            offset,
        };

        self.api
            .clone()
            .set_cursor(request)
            .await
            .map_err(status_to_client_error)?;
        Ok(())
    }

    /// Returns the offset stored for the cursor, `-1` if it was never set.
    pub async fn fetch_cursor(&self, cursor_id: &str, stream: &str, partition: i32) -> Result<i64> {
        let request = proto::FetchCursorRequest {
            stream: stream.to_string(),
            partition,
            cursor_id: cursor_id.to_string(),
        };

        let response = self
            .api
            .clone()
            .fetch_cursor(request)
            .await
            .map_err(status_to_client_error)?
            .into_inner();

        Ok(response.offset)
    }
}

/// A builder for configuring and connecting a `LiftClient`.
#[derive(Debug, Clone, Default)]
pub struct LiftClientBuilder {
    address: String,
    connect_timeout: Option<Duration>,
    tls_ca: Option<PathBuf>,
}

impl LiftClientBuilder {
    /// Sets the server address, either `host:port` or a full `http(s)://` URL.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Verifies the server certificate against the given CA and switches to `https`.
    pub fn with_tls(mut self, ca_cert: impl AsRef<Path>) -> Self {
        self.tls_ca = Some(ca_cert.as_ref().to_path_buf());
        self
    }

    /// Opens the channel. A single attempt is made.
    pub async fn build(self) -> Result<LiftClient> {
        let uri = endpoint_url(&self.address, self.tls_ca.is_some()).parse::<Uri>()?;
        info!("Establishing new RPC connection to {}", uri);

        let mut endpoint = Endpoint::from(uri)
            .tcp_nodelay(true)
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT));

        if let Some(ca_path) = &self.tls_ca {
            let ca_pem = tokio::fs::read(ca_path).await?;
            let tls = ClientTlsConfig::new().ca_certificate(Certificate::from_pem(ca_pem));
            endpoint = endpoint.tls_config(tls)?;
        }

        let channel = endpoint.connect().await?;

        Ok(LiftClient {
            address: self.address,
            api: ApiClient::new(channel),
        })
    }
}

// Zero leaves the choice to the server; counts beyond the wire range saturate
fn wire_count(count: Option<u32>) -> i32 {
    count.map_or(0, |v| i32::try_from(v).unwrap_or(i32::MAX))
}

// Accept either a full URL (http/https) or host:port; default the scheme from the TLS setting
fn endpoint_url(address: &str, tls: bool) -> String {
    if address.starts_with("http://") || address.starts_with("https://") {
        return address.to_string();
    }
    let scheme = if tls { "https" } else { "http" };
    format!("{}://{}", scheme, address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_address_gets_a_scheme() {
        assert_eq!(endpoint_url("127.0.0.1:9292", false), "http://127.0.0.1:9292");
        assert_eq!(endpoint_url("broker:9292", true), "https://broker:9292");
    }

    #[test]
    fn full_urls_are_kept() {
        assert_eq!(endpoint_url("https://broker:9292", false), "https://broker:9292");
        assert_eq!(endpoint_url("http://broker:9292", true), "http://broker:9292");
    }

    #[test]
    fn stream_counts_never_wrap_negative() {
        assert_eq!(wire_count(None), 0);
        assert_eq!(wire_count(Some(3)), 3);
        assert_eq!(wire_count(Some(3_000_000_000)), i32::MAX);
    }

    #[tokio::test]
    async fn invalid_address_is_rejected_before_connecting() {
        let result = LiftClient::connect("not a valid address").await;
        assert!(matches!(result, Err(ClientError::InvalidAddress(_))));
    }
}
