use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;

use crate::broker::{connect_to_endpoint, with_deadline, BrokerSession, Connector};
use crate::config::{Settings, DEFAULT_CURSOR_ID, DEFAULT_STREAM_NAME};
use crate::errors::CliError;
use crate::streams::{open_session, partition_index, StreamArgs, MAX_PARTITION_INDEX};

#[derive(Debug, Args)]
pub(crate) struct SetCursor {
    #[command(flatten)]
    pub(crate) target: StreamArgs,

    #[arg(long, short = 'i', default_value = DEFAULT_CURSOR_ID, help = "Cursor ID")]
    pub(crate) cursor_id: String,

    #[arg(
        long,
        short = 'p',
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(..=MAX_PARTITION_INDEX),
        help = "Partition of the cursor"
    )]
    pub(crate) partition: u32,

    #[arg(
        long,
        short = 'o',
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Offset to store"
    )]
    pub(crate) offset: i64,
}

#[derive(Debug, Args)]
pub(crate) struct FetchCursor {
    #[arg(long, short = 's', default_value = DEFAULT_STREAM_NAME, help = "Use STREAM")]
    pub(crate) stream: String,

    #[arg(long, short = 'i', default_value = DEFAULT_CURSOR_ID, help = "Cursor ID")]
    pub(crate) cursor_id: String,

    #[arg(
        long,
        short = 'p',
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(..=MAX_PARTITION_INDEX),
        help = "Partition of the cursor"
    )]
    pub(crate) partition: u32,
}

pub(crate) async fn handle_set_cursor<C: Connector, W: Write>(
    set_cursor: SetCursor,
    connector: &C,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let target = &set_cursor.target;
    let cursor_id = &set_cursor.cursor_id;
    let partition = partition_index(set_cursor.partition);

    with_deadline(settings.setup_timeout, "set cursor", async {
        let client = open_session(connector, settings, target).await?;
        client
            .set_cursor(cursor_id, &target.stream, partition, set_cursor.offset)
            .await
            .map_err(|source| CliError::CursorOperationFailed {
                cursor_id: cursor_id.clone(),
                stream: target.stream.clone(),
                partition,
                source,
            })
    })
    .await
    .context("setting cursor failed")?;

    writeln!(
        out,
        "Cursor {} set to offset {} on stream {} partition {}",
        cursor_id, set_cursor.offset, target.stream, partition
    )?;
    Ok(())
}

/// Prints `offset: -1` for a cursor that was never set.
pub(crate) async fn handle_fetch_cursor<C: Connector, W: Write>(
    fetch_cursor: FetchCursor,
    connector: &C,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let stream = &fetch_cursor.stream;
    let cursor_id = &fetch_cursor.cursor_id;
    let partition = partition_index(fetch_cursor.partition);

    let offset = with_deadline(settings.setup_timeout, "fetch cursor", async {
        let client = connect_to_endpoint(connector, &settings.address).await?;
        client
            .fetch_cursor(cursor_id, stream, partition)
            .await
            .map_err(|source| CliError::CursorOperationFailed {
                cursor_id: cursor_id.clone(),
                stream: stream.clone(),
                partition,
                source,
            })
    })
    .await
    .context("fetching cursor failed")?;

    writeln!(out, "offset: {}", offset)?;
    Ok(())
}
