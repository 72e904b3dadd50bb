use anyhow::{Context, Result};
use clap::Args;
use std::collections::HashMap;
use std::io::Write;
use tracing::debug;

use lift_client::{AckPolicy, MessageOptions};

use crate::broker::{with_deadline, BrokerSession, Connector};
use crate::config::{Settings, DEFAULT_ACK_POLICY, DEFAULT_MESSAGE_VALUE};
use crate::errors::CliError;
use crate::streams::{open_session, partition_index, StreamArgs, MAX_PARTITION_INDEX};

#[derive(Debug, Args)]
pub(crate) struct Publish {
    #[command(flatten)]
    pub(crate) target: StreamArgs,

    #[arg(
        long,
        short = 'm',
        default_value = DEFAULT_MESSAGE_VALUE,
        help = "Send a message with a string VALUE"
    )]
    pub(crate) message: String,

    #[arg(
        long,
        short = 'k',
        default_value = DEFAULT_ACK_POLICY,
        help = r#"Ack policy, valid values are "leader", "all" or "none""#
    )]
    pub(crate) ack_policy: String,

    #[arg(long, help = "Message key")]
    pub(crate) key: Option<String>,

    #[arg(
        long = "header",
        value_parser = parse_headers,
        help = "Message headers in the form 'key:value'. Example: 'key1:value1,key2:value2'"
    )]
    pub(crate) headers: Vec<HashMap<String, String>>,

    #[arg(
        long,
        short = 'p',
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(..=MAX_PARTITION_INDEX),
        help = "Partition to publish to"
    )]
    pub(crate) partition: u32,
}

/// Maps the command line token to an ack policy. Only exact lowercase names are accepted.
pub(crate) fn resolve_ack_policy(token: &str) -> Result<AckPolicy, CliError> {
    match token {
        "leader" => Ok(AckPolicy::Leader),
        "all" => Ok(AckPolicy::All),
        "none" => Ok(AckPolicy::None),
        other => Err(CliError::InvalidAckPolicy(other.to_string())),
    }
}

fn parse_headers(val: &str) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();
    for pair in val.split(',') {
        let mut split = pair.splitn(2, ':');
        let key = split
            .next()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or("Invalid format: missing key")?
            .to_string();
        let value = split
            .next()
            .ok_or("Invalid format: missing value")?
            .trim()
            .to_string();
        map.insert(key, value);
    }
    Ok(map)
}

pub(crate) async fn handle_publish<C: Connector, W: Write>(
    publish: Publish,
    connector: &C,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    // Rejected before any connection is made.
    let ack_policy = resolve_ack_policy(&publish.ack_policy).context("publication failed")?;

    let options = MessageOptions {
        ack_policy,
        key: publish.key.map(String::into_bytes),
        // later occurrences of a key win
        headers: publish
            .headers
            .into_iter()
            .flatten()
            .map(|(key, value)| (key, value.into_bytes()))
            .collect(),
        partition: partition_index(publish.partition),
    };
    let target = &publish.target;
    let value = publish.message.into_bytes();

    let ack = with_deadline(settings.setup_timeout, "publication", async {
        let client = open_session(connector, settings, target).await?;
        client
            .publish(&target.stream, value, &options)
            .await
            .map_err(|source| CliError::RequestFailed {
                stream: target.stream.clone(),
                source,
            })
    })
    .await
    .context("publication failed")?;

    match ack {
        Some(ack) => {
            debug!(stream = %target.stream, offset = ack.offset, "publication acknowledged");
            writeln!(
                out,
                "Message published to stream {} at offset {}",
                target.stream, ack.offset
            )?;
        }
        None => writeln!(out, "Message published to stream {}", target.stream)?,
    }
    Ok(())
}
