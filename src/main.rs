//! topicdeck command-line front end over the history and favorites state.
//!
//! Loads settings, hydrates state from the configured backend, applies one
//! command, and saves before exiting. The `config` command edits the
//! settings file instead and never touches the stored lists.

use clap::{Parser, Subcommand};

use topicdeck::app::App;
use topicdeck::managers::favorites_manager::FavoritesManagerTrait;
use topicdeck::managers::history_manager::HistoryManagerTrait;
use topicdeck::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use topicdeck::types::errors::SettingsError;
use topicdeck::types::settings::DeckSettings;
use topicdeck::types::topic::Topic;

/// topicdeck - recent topics and favorites
#[derive(Parser, Debug)]
#[command(name = "topicdeck")]
#[command(version)]
#[command(about = "Recent topics and favorites with local persistence", long_about = None)]
struct Args {
    /// Path to the settings file (default: platform config dir)
    #[arg(long)]
    settings: Option<String>,

    /// Set the logging level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

/// Fields identifying a topic on the command line.
#[derive(clap::Args, Debug)]
struct TopicArgs {
    #[arg(long)]
    id: String,
    #[arg(long, default_value = "")]
    category: String,
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
}

impl From<TopicArgs> for Topic {
    fn from(args: TopicArgs) -> Self {
        Topic {
            id: args.id,
            category: args.category,
            title: args.title,
            description: args.description,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    State(StateCommand),
    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Commands that load, change and save the stored lists.
#[derive(Subcommand, Debug)]
enum StateCommand {
    /// Print history and favorites
    List,
    /// Record a topic as viewed
    View(TopicArgs),
    /// Pin a topic
    Favorite(TopicArgs),
    /// Pin or unpin a topic
    Toggle(TopicArgs),
    /// Unpin a topic by id
    Unfavorite { id: String },
    /// Empty the history list
    ClearHistory,
    /// Empty the favorites list
    ClearFavorites,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the settings file path and its current values
    Show,
    /// Set one top-level field, e.g. `config set history_capacity 20`
    Set {
        key: String,
        /// JSON value; anything that is not valid JSON is taken as a string
        value: String,
    },
    /// Restore default settings
    Reset,
}

fn init_logging(default_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(engine: &mut SettingsEngine) -> DeckSettings {
    match engine.load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(
                path = %engine.get_config_path(),
                error = %e,
                "failed to load settings; using defaults"
            );
            DeckSettings::default()
        }
    }
}

fn parse_setting_value(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}

fn run_config(engine: &mut SettingsEngine, action: ConfigAction) -> Result<(), SettingsError> {
    match action {
        ConfigAction::Show => {
            engine.load()?;
        }
        ConfigAction::Set { key, value } => {
            engine.load()?;
            engine.set_value(&key, parse_setting_value(&value))?;
            tracing::info!(key = %key, "setting updated");
        }
        ConfigAction::Reset => {
            engine.reset()?;
            tracing::info!("settings reset to defaults");
        }
    }

    let json = serde_json::to_string_pretty(engine.get_settings()).map_err(|e| {
        SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
    })?;
    println!("# {}", engine.get_config_path());
    println!("{}", json);
    Ok(())
}

fn print_state(app: &App) {
    println!("History ({}/{}):", app.history.len(), app.history.capacity());
    for entry in app.history.entries() {
        println!(
            "  {:>15}  {}  [{}] {}",
            entry.timestamp, entry.topic.id, entry.topic.category, entry.topic.title
        );
    }
    println!("Favorites ({}):", app.favorites.len());
    for favorite in app.favorites.entries() {
        println!(
            "  {:>15}  {}  [{}] {}",
            favorite.added_at, favorite.topic.id, favorite.topic.category, favorite.topic.title
        );
    }
}

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut engine = SettingsEngine::new(args.settings);
    let command = match args.command {
        Command::State(command) => command,
        Command::Config { action } => {
            if let Err(e) = run_config(&mut engine, action) {
                tracing::error!(path = %engine.get_config_path(), error = %e, "config command failed");
                std::process::exit(1);
            }
            return;
        }
    };

    let settings = load_settings(&mut engine);
    let mut app = App::from_settings(settings);
    app.start();

    match command {
        StateCommand::List => {
            print_state(&app);
            return;
        }
        StateCommand::View(topic) => app.history.add(topic.into()),
        StateCommand::Favorite(topic) => app.favorites.add(topic.into()),
        StateCommand::Toggle(topic) => app.favorites.toggle(topic.into()),
        StateCommand::Unfavorite { id } => app.favorites.remove(&id),
        StateCommand::ClearHistory => app.history.clear(),
        StateCommand::ClearFavorites => app.favorites.clear(),
    }

    print_state(&app);
    app.shutdown();
}
