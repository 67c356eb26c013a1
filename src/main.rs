//! Prefix Dictionary - Main entrypoint.
//!
//! Loads configuration, initializes logging, reads the word list and then
//! either runs the interactive query session or answers a single lookup.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use prefix_dict_lib::config::{ConfigLoader, DictConfig, LogConfig, Validate, ENV_PREFIX};
use prefix_dict_lib::data_structures::LookupRequest;
use prefix_dict_lib::dictionary::{Dictionary, Page};
use prefix_dict_lib::error::{report_error, set_error_reporter, ErrorContext, TracingErrorReporter};
use prefix_dict_lib::session::{write_lookup, Session};

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "prefix_dict", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to the word list, one word per line (overrides dictionary.path)
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Read queries from stdin and print every page of matching words
    Repl {
        /// Words per page (overrides lookup.page_size)
        #[clap(long, value_parser)]
        page_size: Option<usize>,
    },

    /// Print a single page of words for a prefix
    Query {
        /// Prefix every returned word starts with
        prefix: String,

        /// Last word of the previous page; empty starts from the beginning
        #[clap(long, default_value = "")]
        cursor: String,

        /// Maximum number of words (defaults to lookup.page_size)
        #[clap(long, value_parser, allow_hyphen_values = true)]
        limit: Option<i64>,

        /// Print the page as a JSON object
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. `RUST_LOG` wins over the configured level.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log.level))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());
    if log.json {
        registry.with(fmt_layer.json()).try_init()?;
    } else {
        registry.with(fmt_layer).try_init()?;
    }
    Ok(())
}

/// Reports an error through the global reporter and exits with status 1.
fn fail(context: ErrorContext) -> ! {
    report_error(context);
    process::exit(1)
}

/// Streams the configured word list into a dictionary.
fn load_dictionary(config: &DictConfig) -> anyhow::Result<Dictionary> {
    let path = config
        .dictionary
        .require_path()
        .context("specify the word list with --dictionary or dictionary.path")?;

    Ok(
        Dictionary::from_path(path, config.dictionary.ingest_options()).unwrap_or_else(|err| {
            fail(ErrorContext::new(err, "ingest").with_details(path.display().to_string()))
        }),
    )
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let mut config = config_loader.load().context("Configuration error")?;

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Some(path) = args.dictionary {
        config.dictionary.path = Some(path);
    }

    match args.command.unwrap_or(Command::Repl { page_size: None }) {
        Command::Repl { page_size } => {
            if let Some(page_size) = page_size {
                config.lookup.page_size = page_size;
                config.lookup.validate()?;
            }
            let dictionary = load_dictionary(&config)?;

            let stdin = io::stdin();
            let stdout = io::stdout();
            let summary =
                Session::new(&dictionary, config.lookup.page_size).run(stdin.lock(), stdout.lock())?;
            info!(?summary, "Input closed");
            Ok(())
        }
        Command::Query {
            prefix,
            cursor,
            limit,
            json,
        } => {
            let dictionary = load_dictionary(&config)?;
            let limit = limit.unwrap_or_else(|| i64::try_from(config.lookup.page_size).unwrap_or(i64::MAX));
            let request = LookupRequest::new(prefix, Some(cursor), limit);

            let words = dictionary
                .lookup(&request)
                .unwrap_or_else(|err| fail(ErrorContext::new(err, "query")));

            let page = Page { number: 1, words };
            let mut stdout = io::stdout().lock();
            write_lookup(&mut stdout, &page, json)?;
            stdout.flush()?;
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = DictConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .context("Failed to serialize config")?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
