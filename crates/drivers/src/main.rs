mod config;
mod logging;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use config::AppConfig;
use folio_adapters::{
    builtin_studio_content, present_catalog_summary, present_columns, present_lightbox,
    write_catalog_json, SystemClock, TracingInquirySink,
};
use folio_application::{GalleryController, NavKey, SiteSession};
use folio_domain::ImageCatalog;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Photography portfolio viewer")]
struct Cli {
    /// TOML configuration file (defaults to ./folio.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Open the portfolio window
    Ui {
        /// Location to open first, e.g. "/gallery?category=nature"
        #[arg(long, default_value = "/")]
        route: String,
    },
    /// Print image counts per category
    Catalog,
    /// Print the gallery columns and optionally drive the lightbox
    Gallery {
        #[arg(long)]
        category: Option<String>,
        /// Flat position of the image to open
        #[arg(long)]
        open: Option<usize>,
        /// Keys to replay while open: right, left, escape
        #[arg(long, num_args = 1..)]
        keys: Vec<String>,
    },
    /// Write the active catalog as JSON
    Export { output: PathBuf },
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };
    logging::init_logging(&config.log_filter);

    let command = cli.command.unwrap_or(Command::Ui {
        route: "/".to_string(),
    });
    match run_command(command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            error!("{msg}");
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn load_catalog(config: &AppConfig) -> Result<ImageCatalog, CommandError> {
    let source = config.catalog_source();
    info!(source = %source.describe(), "loading catalog");
    source
        .load_catalog()
        .map_err(|error| CommandError::Runtime(format!("catalog load failed: {error}")))
}

fn run_command(command: Command, config: &AppConfig) -> Result<(), CommandError> {
    match command {
        Command::Ui { route } => {
            let catalog = Rc::new(load_catalog(config)?);
            let studio = builtin_studio_content()
                .map_err(|error| CommandError::Runtime(error.to_string()))?;
            let mut site = SiteSession::new(
                catalog,
                studio,
                Box::new(TracingInquirySink),
                &SystemClock,
                config.splash_ms,
            );
            site.navigate(&route);
            ui::launch_window(site, config.window_size).map_err(CommandError::Runtime)
        }
        Command::Catalog => {
            let catalog = load_catalog(config)?;
            println!("{}", present_catalog_summary(&catalog));
            Ok(())
        }
        Command::Gallery {
            category,
            open,
            keys,
        } => {
            let keys = parse_keys(&keys)?;
            let catalog = Rc::new(load_catalog(config)?);
            let mut gallery = GalleryController::new(catalog, category.as_deref());
            println!("category\t{}", gallery.active_category());
            println!("{}", present_columns(gallery.columns()));

            for line in lightbox_transcript(&mut gallery, open, &keys)? {
                println!("{line}");
            }
            Ok(())
        }
        Command::Export { output } => {
            let catalog = load_catalog(config)?;
            write_catalog_json(&catalog, &output)
                .map_err(|error| CommandError::Runtime(format!("export failed: {error}")))?;
            println!("catalog written to {}", output.display());
            Ok(())
        }
    }
}

/// Opens the lightbox at flat position `open` (if given), then replays
/// `keys`, recording the lightbox state before the first key and after each.
fn lightbox_transcript(
    gallery: &mut GalleryController,
    open: Option<usize>,
    keys: &[NavKey],
) -> Result<Vec<String>, CommandError> {
    if let Some(index) = open {
        if !gallery.open_at(index) {
            return Err(CommandError::Usage(format!(
                "no image at position {index} in {} ({} images)",
                gallery.active_category(),
                gallery.current_images().len()
            )));
        }
    }
    let total = gallery.current_images().len();
    let mut lines = vec![present_lightbox(gallery.lightbox(), total)];
    for key in keys {
        gallery.handle_key(*key);
        lines.push(present_lightbox(gallery.lightbox(), total));
    }
    Ok(lines)
}

fn parse_keys(tokens: &[String]) -> Result<Vec<NavKey>, CommandError> {
    tokens
        .iter()
        .map(|token| {
            NavKey::parse(token).ok_or_else(|| CommandError::Usage(format!("unknown key: {token}")))
        })
        .collect()
}
