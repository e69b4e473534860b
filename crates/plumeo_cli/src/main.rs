//! Command-line driver over `plumeo_core`.
//!
//! # Responsibility
//! - Stand in for the rendering surface: dispatch one command, print effects.
//! - Keep output deterministic for local sanity checks.
//!
//! Like counts live only for the duration of one invocation.

use clap::{Parser, Subcommand};
use plumeo_core::{
    open_session, AppConfig, Command, Effect, ReadingListView, StoriesView, StoryCard,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Plumeo story browser
#[derive(Parser)]
#[command(name = "plumeo", version, about = "Browse, search and save Plumeo stories")]
struct Cli {
    /// SQLite file holding the reading list (in-memory when omitted)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, default_value_t = plumeo_core::default_log_level().to_string())]
    log_level: String,

    /// Print effects as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print core ping and version
    Ping,
    /// Show every story
    List,
    /// Case-insensitive search over title, author and genre
    Search { query: String },
    /// Show stories of one genre (exact match)
    Genre { name: String },
    /// List genre chips
    Genres,
    /// Save or unsave a story
    Save { id: String },
    /// Show the reading list
    ReadingList,
    /// Like a story
    Like {
        id: String,
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Commands::Ping = cli.command {
        println!("plumeo_core ping={}", plumeo_core::ping());
        println!("plumeo_core version={}", plumeo_core::core_version());
        return Ok(());
    }

    let config = AppConfig {
        db_path: cli.db,
        log_level: cli.log_level,
        log_dir: cli.log_dir,
    };
    let mut app = open_session(&config).map_err(|err| err.to_string())?;
    let stories_only = matches!(cli.command, Commands::List);
    let genres_only = matches!(cli.command, Commands::Genres);

    let effects = match cli.command {
        Commands::Ping => Vec::new(),
        Commands::List | Commands::Genres => app.start(),
        Commands::Search { query } => dispatch(&mut app, Command::Search(query))?,
        Commands::Genre { name } => dispatch(&mut app, Command::SelectGenre(name))?,
        Commands::Save { id } => {
            if !app.state().catalog.contains(&id) {
                log::warn!("event=cli_save module=cli status=warn reason=unknown_story story_id={id}");
            }
            dispatch(&mut app, Command::ToggleSave(id))?
        }
        Commands::ReadingList => vec![Effect::RenderReadingList(app.reading_list_view())],
        Commands::Like { id, times } => {
            let mut effects = Vec::new();
            for _ in 0..times {
                effects = dispatch(&mut app, Command::Like(id.clone()))?;
            }
            effects
        }
    };

    let wanted: Vec<&Effect> = effects
        .iter()
        .filter(|effect| {
            if stories_only {
                matches!(effect, Effect::RenderStories(_))
            } else if genres_only {
                matches!(effect, Effect::RenderGenreChips(_))
            } else {
                true
            }
        })
        .collect();

    if cli.json {
        let json = serde_json::to_string_pretty(&wanted).map_err(|err| err.to_string())?;
        println!("{json}");
    } else {
        for effect in wanted {
            print_effect(effect);
        }
    }
    Ok(())
}

fn dispatch<S: plumeo_core::KeyValueStore>(
    app: &mut plumeo_core::App<S>,
    command: Command,
) -> Result<Vec<Effect>, String> {
    app.dispatch(command).map_err(|err| err.to_string())
}

fn print_effect(effect: &Effect) {
    match effect {
        Effect::RenderStories(view) => print_stories(view),
        Effect::RenderReadingList(view) => print_reading_list(view),
        Effect::RenderGenreChips(genres) => {
            for genre in genres {
                println!("[{genre}]");
            }
        }
        Effect::UpdateLike(outcome) => println!("{} ♥ {}", outcome.story_id, outcome.likes),
        Effect::ShowSections { route, .. } => println!("route={route}"),
        Effect::ShowAuthModal(view) => println!("{}", view.title),
        Effect::HideAuthModal => {}
    }
}

fn print_stories(view: &StoriesView) {
    println!("== Stories");
    print_cards(&view.cards, view.empty_message);
}

fn print_reading_list(view: &ReadingListView) {
    println!("== Reading list");
    print_cards(&view.cards, view.empty_message);
}

fn print_cards(cards: &[StoryCard], empty_message: Option<&str>) {
    if let Some(message) = empty_message {
        println!("{message}");
        return;
    }
    for card in cards {
        println!(
            "[{:<2}] {} by {} • {} | ♥ {} | {} ({})",
            card.thumb,
            card.title,
            card.author,
            card.genre,
            card.likes,
            card.save_label.as_str(),
            card.story_id
        );
        println!("     {}", card.excerpt);
    }
}
