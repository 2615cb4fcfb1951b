use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotwatch::{cli, config, error, management};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeOptions),

    /// Open the Spotify consent page
    Auth,

    /// Add recent releases of the given artists to a playlist
    Check(CheckOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS (e.g. 0.0.0.0:3000)
    #[clap(long)]
    addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckOptions {
    /// User access token (scopes: playlist-read-private, playlist-modify-public)
    #[clap(long)]
    token: String,

    /// Number of days back a release still counts as new
    #[clap(long, default_value_t = 30)]
    days: u32,

    /// Playlist to add tracks to, created when missing
    #[clap(long, default_value = management::DEFAULT_PLAYLIST_NAME)]
    playlist: String,

    /// Artist names to check
    #[clap(required = true)]
    artists: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve(opt) => {
            let mut config = config::Config::from_env();
            if let Some(addr) = opt.addr {
                config.server_addr = addr;
            }
            cli::serve(Arc::new(config)).await
        }
        Command::Auth => cli::auth(Arc::new(config::Config::from_env())).await,
        Command::Check(opt) => {
            cli::check(
                Arc::new(config::Config::from_env()),
                opt.token,
                opt.days,
                opt.playlist,
                opt.artists,
            )
            .await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
