use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

pub(crate) const ACTIVITY_STREAM_NAME: &str = "__activity";

pub(crate) const DEFAULT_ADDRESS: &str = "127.0.0.1:9292";
pub(crate) const DEFAULT_STREAM_NAME: &str = "some-stream";
pub(crate) const DEFAULT_MESSAGE_VALUE: &str = "some-value";
pub(crate) const DEFAULT_CURSOR_ID: &str = "some-cursor";
pub(crate) const DEFAULT_ACK_POLICY: &str = "leader";
pub(crate) const DEFAULT_SETUP_TIMEOUT_SECS: u64 = 3;

/// Options shared by every command.
#[derive(Debug, Args)]
pub(crate) struct GlobalArgs {
    #[arg(
        long,
        short = 'a',
        global = true,
        env = "LIFTBRIDGE_ADDRESS",
        default_value = DEFAULT_ADDRESS,
        help = "Connect to the endpoint specified by ADDRESS"
    )]
    pub(crate) address: String,

    #[arg(
        long,
        global = true,
        env = "LIFTBRIDGE_TIMEOUT",
        default_value_t = DEFAULT_SETUP_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds allowed for connecting and for each administrative request"
    )]
    pub(crate) timeout: u64,

    #[arg(
        long,
        global = true,
        env = "LIFTBRIDGE_TLS_CA",
        help = "CA certificate used to verify the server, enables TLS"
    )]
    pub(crate) tls_ca: Option<PathBuf>,
}

/// Process wide settings, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) address: String,
    pub(crate) setup_timeout: Duration,
    pub(crate) tls_ca: Option<PathBuf>,
}

impl Settings {
    pub(crate) fn new(address: impl Into<String>) -> Self {
        Settings {
            address: address.into(),
            setup_timeout: Duration::from_secs(DEFAULT_SETUP_TIMEOUT_SECS),
            tls_ca: None,
        }
    }

    pub(crate) fn with_setup_timeout(mut self, timeout: Duration) -> Self {
        self.setup_timeout = timeout;
        self
    }
}

impl From<GlobalArgs> for Settings {
    fn from(args: GlobalArgs) -> Self {
        let mut settings =
            Settings::new(args.address).with_setup_timeout(Duration::from_secs(args.timeout));
        settings.tls_ca = args.tls_ca;
        settings
    }
}
