use futures::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use lift_client::{errors::ClientError, Message, StartPosition, StreamOptions, SubscriptionOptions};

use crate::broker::{connect_to_endpoint, with_deadline, BrokerSession, Connector};
use crate::config::Settings;
use crate::errors::CliError;
use crate::streams::ensure_stream_created;

/// Receives the messages of a subscription in delivery order.
pub(crate) trait MessageHandler {
    /// An error ends the subscription.
    fn handle(&mut self, message: &Message) -> Result<(), CliError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    Setup,
    Streaming,
    Terminated,
}

/// The stream partition a session reads, and whether to create the stream first.
#[derive(Debug, Clone)]
pub(crate) struct SubscriptionTarget {
    pub(crate) stream: String,
    pub(crate) subject: Option<String>,
    pub(crate) create_stream: bool,
    pub(crate) partition: i32,
}

/// A subscription from connection to termination.
///
/// Setup (connect, optional creation) runs under the settings deadline. Streaming has no
/// deadline and ends on the first delivery error, a handler error or cancellation.
/// Cancellation ends the session successfully.
pub(crate) struct SubscriptionSession<'a, C> {
    connector: &'a C,
    settings: &'a Settings,
    target: SubscriptionTarget,
    state: SessionState,
}

impl<'a, C: Connector> SubscriptionSession<'a, C> {
    pub(crate) fn new(connector: &'a C, settings: &'a Settings, target: SubscriptionTarget) -> Self {
        SubscriptionSession {
            connector,
            settings,
            target,
            state: SessionState::Setup,
        }
    }

    pub(crate) fn state(&self) -> SessionState {
        self.state
    }

    pub(crate) async fn run<H: MessageHandler>(
        &mut self,
        handler: &mut H,
        shutdown: &CancellationToken,
    ) -> Result<(), CliError> {
        let result = self.run_phases(handler, shutdown).await;
        self.transition(SessionState::Terminated);
        result
    }

    async fn run_phases<H: MessageHandler>(
        &mut self,
        handler: &mut H,
        shutdown: &CancellationToken,
    ) -> Result<(), CliError> {
        let session = with_deadline(self.settings.setup_timeout, "subscription setup", self.setup())
            .await?;

        self.transition(SessionState::Streaming);
        // Cancelling the streaming token never reaches the caller's token.
        let streaming = shutdown.child_token();
        let result = self.stream(&session, handler, &streaming).await;
        streaming.cancel();
        result
    }

    async fn setup(&self) -> Result<C::Session, CliError> {
        let session = connect_to_endpoint(self.connector, &self.settings.address).await?;
        if self.target.create_stream {
            ensure_stream_created(
                &session,
                &self.target.stream,
                self.target.subject.as_deref(),
                &StreamOptions::default(),
            )
            .await?;
        }
        Ok(session)
    }

    async fn stream<H: MessageHandler>(
        &self,
        session: &C::Session,
        handler: &mut H,
        cancelled: &CancellationToken,
    ) -> Result<(), CliError> {
        let stream = &self.target.stream;
        let options = SubscriptionOptions {
            partition: self.target.partition,
            start_position: StartPosition::Earliest,
            ..Default::default()
        };

        let mut messages = tokio::select! {
            _ = cancelled.cancelled() => {
                info!(stream = %stream, "subscription cancelled before it was opened");
                return Ok(());
            }
            opened = session.subscribe(stream, options) => {
                opened.map_err(|source| CliError::SubscriptionFailed {
                    stream: stream.clone(),
                    source,
                })?
            }
        };
        info!(stream = %stream, partition = self.target.partition, "subscribed");

        loop {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    info!(stream = %stream, "subscription cancelled");
                    return Ok(());
                }
                next = messages.next() => match next {
                    Some(Ok(message)) => handler.handle(&message)?,
                    Some(Err(source)) => {
                        debug!(stream = %stream, error = %source, "subscription ended with an error");
                        return Err(CliError::DeliveryError {
                            stream: stream.clone(),
                            source,
                        });
                    }
                    None => {
                        return Err(CliError::DeliveryError {
                            stream: stream.clone(),
                            source: ClientError::StreamClosed,
                        });
                    }
                }
            }
        }
    }

    fn transition(&mut self, next: SessionState) {
        debug!(stream = %self.target.stream, from = ?self.state, to = ?next, "subscription state");
        self.state = next;
    }
}
