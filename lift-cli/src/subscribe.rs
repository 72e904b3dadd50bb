use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use tokio_util::sync::CancellationToken;

use lift_client::Message;

use crate::activity::ActivityHandler;
use crate::broker::Connector;
use crate::config::{Settings, ACTIVITY_STREAM_NAME};
use crate::errors::CliError;
use crate::session::{MessageHandler, SubscriptionSession, SubscriptionTarget};
use crate::streams::{partition_index, StreamArgs, MAX_PARTITION_INDEX};

#[derive(Debug, Args)]
pub(crate) struct Subscribe {
    #[command(flatten)]
    pub(crate) target: StreamArgs,

    #[arg(
        long,
        short = 'p',
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(..=MAX_PARTITION_INDEX),
        help = "Partition to subscribe to"
    )]
    pub(crate) partition: u32,
}

/// Prints each message value as text.
pub(crate) struct PrintHandler<W> {
    out: W,
}

impl<W: Write> PrintHandler<W> {
    pub(crate) fn new(out: W) -> Self {
        PrintHandler { out }
    }
}

impl<W: Write> MessageHandler for PrintHandler<W> {
    fn handle(&mut self, message: &Message) -> Result<(), CliError> {
        writeln!(
            self.out,
            "Received message with data: {}, offset: {}",
            String::from_utf8_lossy(&message.value),
            message.offset
        )?;
        Ok(())
    }
}

pub(crate) async fn handle_subscribe<C: Connector, W: Write>(
    subscribe: Subscribe,
    connector: &C,
    settings: &Settings,
    shutdown: &CancellationToken,
    out: &mut W,
) -> Result<()> {
    let target = SubscriptionTarget {
        stream: subscribe.target.stream,
        subject: subscribe.target.subject,
        create_stream: subscribe.target.create_stream,
        partition: partition_index(subscribe.partition),
    };

    SubscriptionSession::new(connector, settings, target)
        .run(&mut PrintHandler::new(out), shutdown)
        .await
        .context("stream subscription failed")
}

pub(crate) async fn handle_subscribe_activity_stream<C: Connector, W: Write>(
    connector: &C,
    settings: &Settings,
    shutdown: &CancellationToken,
    out: &mut W,
) -> Result<()> {
    let target = SubscriptionTarget {
        stream: ACTIVITY_STREAM_NAME.to_string(),
        subject: None,
        create_stream: false,
        partition: 0,
    };

    SubscriptionSession::new(connector, settings, target)
        .run(&mut ActivityHandler::new(out), shutdown)
        .await
        .context("activity stream subscription failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::tests::pause_event;
    use crate::testing::InMemoryBroker;
    use lift_client::errors::ClientError;
    use tonic::Status;

    fn subscribe(stream: &str, create_stream: bool) -> Subscribe {
        Subscribe {
            target: StreamArgs {
                stream: stream.to_string(),
                subject: None,
                create_stream,
            },
            partition: 0,
        }
    }

    #[tokio::test]
    async fn prints_each_message() {
        let broker = InMemoryBroker::new()
            .with_stream("foo", 1)
            .with_message("foo", "hello")
            .with_message("foo", "world")
            .fail_delivery_with(|| ClientError::StreamClosed);
        let settings = Settings::new("broker:9292");
        let mut out = Vec::new();

        let err = handle_subscribe(
            subscribe("foo", false),
            &broker,
            &settings,
            &CancellationToken::new(),
            &mut out,
        )
        .await
        .expect_err("stream closed");

        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Received message with data: hello, offset: 0\nReceived message with data: world, offset: 1\n"
        );
        assert!(format!("{:#}", err)
            .starts_with("stream subscription failed: delivery failed for stream foo"));
    }

    #[tokio::test]
    async fn missing_stream_reports_the_subscription_prefix() {
        let broker = InMemoryBroker::new();
        let settings = Settings::new("broker:9292");

        let err = handle_subscribe(
            subscribe("missing", false),
            &broker,
            &settings,
            &CancellationToken::new(),
            &mut Vec::new(),
        )
        .await
        .expect_err("stream does not exist");

        assert_eq!(
            format!("{:#}", err),
            "stream subscription failed: unable to subscribe to stream missing: not found: no such stream"
        );
    }

    #[tokio::test]
    async fn activity_stream_survives_invalid_messages() {
        let broker = InMemoryBroker::new()
            .with_stream(ACTIVITY_STREAM_NAME, 1)
            .with_message(ACTIVITY_STREAM_NAME, vec![0xff, 0xff])
            .with_message(ACTIVITY_STREAM_NAME, pause_event("foo", vec![1], true))
            .fail_delivery_with(|| ClientError::Status(Status::unavailable("shutting down")));
        let settings = Settings::new("broker:9292");
        let mut out = Vec::new();

        let err = handle_subscribe_activity_stream(
            &broker,
            &settings,
            &CancellationToken::new(),
            &mut out,
        )
        .await
        .expect_err("broker went away");

        let printed = String::from_utf8(out).expect("utf8");
        assert_eq!(printed.lines().count(), 2);
        assert!(printed.ends_with(
            "op: PAUSE_STREAM, stream: foo, partitions: [1], resumeAll: true, offset: 1\n"
        ));
        assert!(format!("{:#}", err).starts_with("activity stream subscription failed"));
    }

    #[tokio::test]
    async fn activity_stream_without_the_stream_fails() {
        let broker = InMemoryBroker::new();
        let settings = Settings::new("broker:9292");

        let err = handle_subscribe_activity_stream(
            &broker,
            &settings,
            &CancellationToken::new(),
            &mut Vec::new(),
        )
        .await
        .expect_err("activity stream disabled");

        assert!(format!("{:#}", err).starts_with(
            "activity stream subscription failed: unable to subscribe to stream __activity"
        ));
        assert!(!broker.has_stream(ACTIVITY_STREAM_NAME));
    }
}
