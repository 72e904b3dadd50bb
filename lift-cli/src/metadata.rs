use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use std::io::{self, Write};

use lift_client::{EventTimestamps, Metadata, PartitionInfo};

use crate::broker::{connect_to_endpoint, with_deadline, BrokerSession, Connector};
use crate::config::Settings;
use crate::errors::CliError;
use crate::streams::{open_session, partition_index, StreamArgs, MAX_PARTITION_INDEX};

#[derive(Debug, Args)]
pub(crate) struct PartitionMetadata {
    #[command(flatten)]
    pub(crate) target: StreamArgs,

    #[arg(
        long,
        short = 'p',
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(..=MAX_PARTITION_INDEX),
        help = "Partition to describe"
    )]
    pub(crate) partition: u32,
}

pub(crate) async fn handle_metadata<C: Connector, W: Write>(
    connector: &C,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let metadata = with_deadline(settings.setup_timeout, "metadata request", async {
        let client = connect_to_endpoint(connector, &settings.address).await?;
        client
            .fetch_metadata()
            .await
            .map_err(CliError::MetadataFetchFailed)
    })
    .await
    .context("metadata fetching failed")?;

    write_metadata(out, &metadata)?;
    Ok(())
}

pub(crate) async fn handle_partition_metadata<C: Connector, W: Write>(
    partition_metadata: PartitionMetadata,
    connector: &C,
    settings: &Settings,
    out: &mut W,
) -> Result<()> {
    let target = &partition_metadata.target;
    let partition = partition_index(partition_metadata.partition);

    let info = with_deadline(settings.setup_timeout, "partition metadata request", async {
        let client = open_session(connector, settings, target).await?;
        client
            .fetch_partition_metadata(&target.stream, partition)
            .await
            .map_err(CliError::MetadataFetchFailed)
    })
    .await
    .context("partition metadata fetching failed")?;

    write_partition_metadata(out, &info)?;
    Ok(())
}

fn broker_string(metadata: &Metadata, id: &str) -> String {
    metadata
        .broker(id)
        .map(ToString::to_string)
        .unwrap_or_else(|| id.to_string())
}

fn time_to_string(time: Option<DateTime<Utc>>) -> String {
    time.map_or_else(|| "never".to_string(), |t| t.to_string())
}

fn timestamps_to_string(timestamps: &EventTimestamps) -> String {
    format!(
        "first: {}, latest: {}",
        time_to_string(timestamps.first),
        time_to_string(timestamps.latest)
    )
}

pub(crate) fn write_metadata<W: Write>(out: &mut W, metadata: &Metadata) -> io::Result<()> {
    writeln!(out, "addresses:")?;
    for addr in metadata.addrs() {
        writeln!(out, " {}", addr)?;
    }
    writeln!(out, "brokers:")?;
    for broker in &metadata.brokers {
        writeln!(out, " {}", broker)?;
    }
    writeln!(out, "last updated:\n {}", metadata.last_updated)?;

    writeln!(out, "streams:")?;
    for stream in &metadata.streams {
        writeln!(out, " {} (subject: {})", stream.name, stream.subject)?;
        writeln!(out, "  partitions:")?;
        for partition in &stream.partitions {
            writeln!(out, "   {}", partition.id)?;
            writeln!(
                out,
                "    leader:\n     {}",
                broker_string(metadata, &partition.leader)
            )?;
            writeln!(out, "    ISRs:")?;
            for isr in &partition.isr {
                writeln!(out, "     {}", broker_string(metadata, isr))?;
            }
            writeln!(out, "    replicas:")?;
            for replica in &partition.replicas {
                writeln!(out, "     {}", broker_string(metadata, replica))?;
            }
        }
    }
    Ok(())
}

/// Brokers are printed by id, partition metadata carries no addresses.
pub(crate) fn write_partition_metadata<W: Write>(
    out: &mut W,
    partition: &PartitionInfo,
) -> io::Result<()> {
    writeln!(out, "{}", partition.id)?;
    writeln!(out, " leader:\n {}", partition.leader)?;
    writeln!(out, " ISRs:")?;
    for isr in &partition.isr {
        writeln!(out, "  {}", isr)?;
    }
    writeln!(out, " replicas:")?;
    for replica in &partition.replicas {
        writeln!(out, "  {}", replica)?;
    }
    writeln!(out, " high watermark:\n {}", partition.high_watermark)?;
    writeln!(out, " newest offset:\n {}", partition.newest_offset)?;
    writeln!(out, " paused:\n {}", partition.paused)?;
    writeln!(out, " read-only:\n {}", partition.readonly)?;
    writeln!(
        out,
        " message received timestamps:\n {}",
        timestamps_to_string(&partition.messages_received_timestamps)
    )?;
    writeln!(
        out,
        " pause timestamps:\n {}",
        timestamps_to_string(&partition.pause_timestamps)
    )?;
    writeln!(
        out,
        " read-only timestamps:\n {}",
        timestamps_to_string(&partition.readonly_timestamps)
    )?;
    Ok(())
}
