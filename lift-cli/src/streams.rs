use anyhow::{Context, Result};
use clap::{ArgAction, Args};
use std::io::Write;
use tracing::{debug, info};

use lift_client::{errors::ClientError, PauseOptions, ReadonlyOptions, StreamOptions};

use crate::broker::{connect_to_endpoint, with_deadline, BrokerSession, Connector};
use crate::config::{Settings, DEFAULT_STREAM_NAME};
use crate::errors::CliError;

/// Highest partition index accepted on the command line.
pub(crate) const MAX_PARTITION_INDEX: i64 = i32::MAX as i64;

/// The stream a command targets, and whether it may be created first.
#[derive(Debug, Clone, Args)]
pub(crate) struct StreamArgs {
    #[arg(long, short = 's', default_value = DEFAULT_STREAM_NAME, help = "Use STREAM")]
    pub(crate) stream: String,

    #[arg(
        long,
        short = 'u',
        help = "Subject name to use when creating the stream [default: same as the stream name]"
    )]
    pub(crate) subject: Option<String>,

    #[arg(long, short = 'c', help = "Create the stream if it doesn't exist")]
    pub(crate) create_stream: bool,
}

#[derive(Debug, Args)]
pub(crate) struct Create {
    #[arg(long, short = 's', default_value = DEFAULT_STREAM_NAME, help = "Use STREAM")]
    pub(crate) stream: String,

    #[arg(
        long,
        short = 'u',
        help = "Subject name to use when creating the stream [default: same as the stream name]"
    )]
    pub(crate) subject: Option<String>,

    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(..=MAX_PARTITION_INDEX),
        help = "Number of partitions of the new stream [default: broker setting]"
    )]
    pub(crate) partition_count: Option<u32>,

    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(..=MAX_PARTITION_INDEX),
        help = "Replication factor of the new stream [default: broker setting]"
    )]
    pub(crate) replication_factor: Option<u32>,
}

#[derive(Debug, Args)]
pub(crate) struct SetReadonly {
    #[command(flatten)]
    pub(crate) target: StreamArgs,

    #[arg(
        long,
        short = 'r',
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        help = "Set the stream as readonly, `--readonly false` makes it writable again"
    )]
    pub(crate) readonly: bool,

    #[arg(
        long,
        short = 'p',
        value_delimiter = ',',
        value_parser = clap::value_parser!(u32).range(..=MAX_PARTITION_INDEX),
        help = "Targeted partitions [default: all partitions]"
    )]
    pub(crate) partitions: Vec<u32>,
}

#[derive(Debug, Args)]
pub(crate) struct Pause {
    #[command(flatten)]
    pub(crate) target: StreamArgs,

    #[arg(
        long,
        short = 'r',
        help = "Resume all partitions if one of them is published to instead of resuming only that partition"
    )]
    pub(crate) resume_all: bool,

    #[arg(
        long,
        short = 'p',
        value_delimiter = ',',
        value_parser = clap::value_parser!(u32).range(..=MAX_PARTITION_INDEX),
        help = "Targeted partitions [default: all partitions]"
    )]
    pub(crate) partitions: Vec<u32>,
}

#[derive(Debug, Args)]
pub(crate) struct Delete {
    #[command(flatten)]
    pub(crate) target: StreamArgs,
}

/// What `ensure_stream_created` found on the broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnsureOutcome {
    Created,
    AlreadyExists,
}

/// Requests creation of `stream`, treating an existing stream as success.
///
/// An empty or missing subject defaults to the stream name.
pub(crate) async fn ensure_stream_created<S: BrokerSession + ?Sized>(
    session: &S,
    stream: &str,
    subject: Option<&str>,
    options: &StreamOptions,
) -> Result<EnsureOutcome, CliError> {
    let subject = subject.filter(|s| !s.is_empty()).unwrap_or(stream);

    match session.create_stream(subject, stream, options).await {
        Ok(()) => {
            info!(stream, subject, "stream created");
            Ok(EnsureOutcome::Created)
        }
        Err(ClientError::StreamExists) => {
            debug!(stream, "stream already exists");
            Ok(EnsureOutcome::AlreadyExists)
        }
        Err(source) => Err(CliError::StreamCreationFailed {
            stream: stream.to_string(),
            source,
        }),
    }
}

/// Connects and, when requested, makes sure the target stream exists.
pub(crate) async fn open_session<C: Connector>(
    connector: &C,
    settings: &Settings,
    target: &StreamArgs,
) -> Result<C::Session, CliError> {
    let session = connect_to_endpoint(connector, &settings.address).await?;
    if target.create_stream {
        ensure_stream_created(
            &session,
            &target.stream,
            target.subject.as_deref(),
            &StreamOptions::default(),
        )
        .await?;
    }
    Ok(session)
}

/// Narrows partition indices to the wire width, keeping length and order.
/// Indices are range checked at parse time so the conversion never saturates in practice.
pub(crate) fn to_partition_indices(values: &[u32]) -> Vec<i32> {
    values.iter().copied().map(partition_index).collect()
}

pub(crate) fn partition_index(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

pub(crate) async fn handle_create<C: Connector, W: Write>(
    create: Create,
    connector: &C,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let options = StreamOptions {
        partitions: create.partition_count,
        replication_factor: create.replication_factor,
        ..Default::default()
    };

    let outcome = with_deadline(settings.setup_timeout, "stream creation", async {
        let client = connect_to_endpoint(connector, &settings.address).await?;
        ensure_stream_created(&client, &create.stream, create.subject.as_deref(), &options).await
    })
    .await
    .context("creation failed")?;

    match outcome {
        EnsureOutcome::Created => writeln!(out, "Stream created: {}", create.stream)?,
        EnsureOutcome::AlreadyExists => writeln!(out, "Stream already exists: {}", create.stream)?,
    }
    Ok(())
}

pub(crate) async fn handle_set_readonly<C: Connector, W: Write>(
    set_readonly: SetReadonly,
    connector: &C,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let target = &set_readonly.target;
    let options = ReadonlyOptions {
        partitions: to_partition_indices(&set_readonly.partitions),
        readonly: set_readonly.readonly,
    };

    with_deadline(settings.setup_timeout, "set readonly", async {
        let client = open_session(connector, settings, target).await?;
        client
            .set_stream_readonly(&target.stream, &options)
            .await
            .map_err(|source| CliError::RequestFailed {
                stream: target.stream.clone(),
                source,
            })
    })
    .await
    .context("set readonly failed")?;

    writeln!(
        out,
        "Stream {} readonly: {}",
        target.stream, set_readonly.readonly
    )?;
    Ok(())
}

pub(crate) async fn handle_pause<C: Connector, W: Write>(
    pause: Pause,
    connector: &C,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let target = &pause.target;
    let options = PauseOptions {
        partitions: to_partition_indices(&pause.partitions),
        resume_all: pause.resume_all,
    };

    with_deadline(settings.setup_timeout, "pause", async {
        let client = open_session(connector, settings, target).await?;
        client
            .pause_stream(&target.stream, &options)
            .await
            .map_err(|source| CliError::RequestFailed {
                stream: target.stream.clone(),
                source,
            })
    })
    .await
    .context("pause failed")?;

    writeln!(out, "Stream paused: {}", target.stream)?;
    Ok(())
}

pub(crate) async fn handle_delete<C: Connector, W: Write>(
    delete: Delete,
    connector: &C,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let target = &delete.target;

    with_deadline(settings.setup_timeout, "delete", async {
        let client = open_session(connector, settings, target).await?;
        client
            .delete_stream(&target.stream)
            .await
            .map_err(|source| CliError::RequestFailed {
                stream: target.stream.clone(),
                source,
            })
    })
    .await
    .context("delete failed")?;

    writeln!(out, "Stream deleted: {}", target.stream)?;
    Ok(())
}
