mod activity;
mod broker;
mod config;
mod cursors;
mod errors;
mod metadata;
mod publish;
mod session;
mod streams;
mod subscribe;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::info;

use broker::LiftConnector;
use config::{GlobalArgs, Settings};
use cursors::{FetchCursor, SetCursor};
use metadata::PartitionMetadata;
use publish::Publish;
use streams::{Create, Delete, Pause, SetReadonly};
use subscribe::Subscribe;

#[derive(Debug, Parser)]
#[command(name = "lift-cli")]
#[command(about = "Allows making requests to a Liftbridge server")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(alias = "c", about = "Creates a stream")]
    Create(Create),

    #[command(alias = "s", about = "Subscribes to a stream")]
    Subscribe(Subscribe),

    #[command(alias = "sas", about = "Subscribes to the activity stream")]
    SubscribeActivityStream,

    #[command(alias = "p", about = "Publishes to a stream")]
    Publish(Publish),

    #[command(alias = "r", about = "Sets a stream as readonly or writable")]
    SetReadonly(SetReadonly),

    #[command(alias = "u", about = "Pauses a stream")]
    Pause(Pause),

    #[command(alias = "d", about = "Deletes a stream")]
    Delete(Delete),

    #[command(alias = "m", about = "Displays metadata about the cluster")]
    Metadata,

    #[command(alias = "t", about = "Displays metadata about a stream partition")]
    PartitionMetadata(PartitionMetadata),

    #[command(alias = "e", about = "Sets a cursor")]
    SetCursor(SetCursor),

    #[command(alias = "f", about = "Fetches a cursor")]
    FetchCursor(FetchCursor),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from(cli.global);

    match run(cli.command, &settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, settings: &Settings) -> Result<()> {
    let connector = LiftConnector::new(settings);
    let mut out = std::io::stdout().lock();

    match command {
        Commands::Create(create) => {
            streams::handle_create(create, &connector, settings, &mut out).await
        }
        Commands::Subscribe(subscribe) => {
            let shutdown = shutdown_on_ctrl_c();
            subscribe::handle_subscribe(subscribe, &connector, settings, &shutdown, &mut out).await
        }
        Commands::SubscribeActivityStream => {
            let shutdown = shutdown_on_ctrl_c();
            subscribe::handle_subscribe_activity_stream(&connector, settings, &shutdown, &mut out)
                .await
        }
        Commands::Publish(publish) => {
            publish::handle_publish(publish, &connector, settings, &mut out).await
        }
        Commands::SetReadonly(set_readonly) => {
            streams::handle_set_readonly(set_readonly, &connector, settings, &mut out).await
        }
        Commands::Pause(pause) => streams::handle_pause(pause, &connector, settings, &mut out).await,
        Commands::Delete(delete) => {
            streams::handle_delete(delete, &connector, settings, &mut out).await
        }
        Commands::Metadata => metadata::handle_metadata(&connector, settings, &mut out).await,
        Commands::PartitionMetadata(partition_metadata) => {
            metadata::handle_partition_metadata(partition_metadata, &connector, settings, &mut out)
                .await
        }
        Commands::SetCursor(set_cursor) => {
            cursors::handle_set_cursor(set_cursor, &connector, settings, &mut out).await
        }
        Commands::FetchCursor(fetch_cursor) => {
            cursors::handle_fetch_cursor(fetch_cursor, &connector, settings, &mut out).await
        }
    }
}

// Only the streaming commands listen for Ctrl-C, the others keep the default signal behaviour.
fn shutdown_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let cancel = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, closing the subscription");
            cancel.cancel();
        }
    });
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definitions_are_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn aliases_resolve_to_their_commands() {
        let cli = Cli::try_parse_from(["lift-cli", "sas"]).expect("alias parses");
        assert!(matches!(cli.command, Commands::SubscribeActivityStream));

        let cli = Cli::try_parse_from(["lift-cli", "u", "-s", "foo", "-p", "2,0", "--resume-all"])
            .expect("pause parses");
        match cli.command {
            Commands::Pause(pause) => {
                assert_eq!(pause.target.stream, "foo");
                assert_eq!(pause.partitions, vec![2, 0]);
                assert!(pause.resume_all);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn global_options_apply_after_the_verb() {
        let cli = Cli::try_parse_from(["lift-cli", "metadata", "-a", "broker:1234", "--timeout", "7"])
            .expect("global options parse");
        let settings = Settings::from(cli.global);

        assert_eq!(settings.address, "broker:1234");
        assert_eq!(settings.setup_timeout, std::time::Duration::from_secs(7));
    }

    #[test]
    fn out_of_range_partitions_are_rejected() {
        let result = Cli::try_parse_from(["lift-cli", "pause", "--partitions", "1,2147483648"]);
        assert!(result.is_err());
    }

    #[test]
    fn stream_counts_beyond_the_wire_range_are_rejected() {
        for flag in ["--partition-count", "--replication-factor"] {
            let result = Cli::try_parse_from(["lift-cli", "create", flag, "3000000000"]);
            assert!(result.is_err(), "{} must be bounded", flag);
        }

        let cli = Cli::try_parse_from(["lift-cli", "create", "--partition-count", "2147483647"])
            .expect("largest count parses");
        match cli.command {
            Commands::Create(create) => assert_eq!(create.partition_count, Some(i32::MAX as u32)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn readonly_flag_accepts_an_explicit_value() {
        let cli = Cli::try_parse_from(["lift-cli", "set-readonly", "--readonly", "false"])
            .expect("parses");
        match cli.command {
            Commands::SetReadonly(set_readonly) => assert!(!set_readonly.readonly),
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["lift-cli", "r", "-r"]).expect("parses");
        match cli.command {
            Commands::SetReadonly(set_readonly) => assert!(set_readonly.readonly),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn negative_cursor_offsets_parse() {
        let cli = Cli::try_parse_from(["lift-cli", "e", "-o", "-1"]).expect("parses");
        match cli.command {
            Commands::SetCursor(set_cursor) => assert_eq!(set_cursor.offset, -1),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
