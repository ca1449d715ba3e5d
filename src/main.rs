use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodpick::{cli, config, logging, types::MoodSelection, utils, warning};

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
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Interactive session (default)
    Play,

    /// Pick one song for a mood and print it
    Pick(PickOptions),

    /// List the moods and their track lists
    Moods,

    /// Run the link-aggregation proxy
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PickOptions {
    /// feel-good, nostalgic, energetic or random
    #[clap(default_value = "random", value_parser = utils::parse_mood_selection)]
    pub mood: MoodSelection,

    /// Share the result after picking
    #[clap(long)]
    pub share: bool,

    /// Open the embedded player in a browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    logging::init_logging();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment, using defaults. Err: {}", e);
    }

    let settings = Arc::new(config::Settings::from_env());
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => cli::play(settings).await,
        Command::Pick(opt) => cli::pick(settings, opt.mood, opt.share, opt.open).await,
        Command::Moods => cli::moods(&settings),
        Command::Serve => cli::serve(&settings).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
