use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mc-ctl")]
#[command(about = "Restart a Minecraft server and verify it came back")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    #[command(flatten)]
    pub(crate) caller: CallerArgs,
}

/// Who is asking. Checked against the access policy before any command runs.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct CallerArgs {
    /// Role id held by the caller (repeatable)
    #[arg(long = "role", global = true)]
    pub(crate) roles: Vec<String>,

    /// Tenant (guild) id; defaults to the configured guild or 0
    #[arg(long, global = true)]
    pub(crate) tenant: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Restart the server and watch the log for startup
    Restart(RestartArgs),

    /// Show online players and version
    Status {
        /// Status host (default: configured status host, else RCON host)
        #[arg(long)]
        host: Option<String>,

        /// Status port (default: configured status port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Copy a mod jar into the server's mods directory
    Deploy {
        /// Jar file to deploy
        jar: PathBuf,

        /// File name in the mods directory (default: the jar's own name)
        #[arg(long)]
        name: Option<String>,

        /// Restart afterwards, watching for this jar to load
        #[arg(long)]
        restart: bool,
    },

    /// Show the last deployed mod for the tenant
    LastMod,

    /// Read commands from stdin, one per line, sharing state between them
    Shell,
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct RestartArgs {
    /// Only perform the restart; do not watch the log
    #[arg(long)]
    pub(crate) no_watch: bool,

    /// Ignore the last deployed mod and watch for generic startup
    #[arg(long, conflicts_with = "hint")]
    pub(crate) no_hint: bool,

    /// Artifact file name to watch for (default: last deployed mod)
    #[arg(long)]
    pub(crate) hint: Option<String>,

    /// Countdown seconds before stop (default: configured)
    #[arg(long)]
    pub(crate) countdown: Option<u64>,

    /// Startup watch timeout in seconds (default: configured)
    #[arg(long)]
    pub(crate) timeout: Option<u64>,
}

/// One line typed into `mc-ctl shell`. The caller is fixed when the shell
/// starts.
#[derive(Parser, Debug)]
#[command(name = "mc-ctl", no_binary_name = true)]
pub(crate) struct ShellLine {
    #[command(subcommand)]
    pub(crate) command: Commands,
}
