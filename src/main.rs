use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use reputation::config::Config;
use reputation::output;
use reputation::pipeline::{self, BulkOptions};
use reputation::reviews::ReviewCollection;
use reputation::sentiment::KeywordClassifier;
use reputation::topics::{LdaTopicModeler, TopicLabeler};

/// Reputation: sentiment and topic analysis for customer reviews.
///
/// Classifies reviews by sentiment, clusters an upload into labeled topics,
/// and summarizes how sentiment moves over time and across sources.
#[derive(Parser)]
#[command(name = "reputation", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single review
    Analyze {
        /// The review text
        text: String,
    },

    /// Analyze a CSV upload (requires a ReviewText column)
    Bulk {
        /// Path to the CSV file
        file: PathBuf,

        /// Only analyze reviews from this source (repeatable)
        #[arg(long = "source")]
        sources: Vec<String>,

        /// Number of topics to fit
        #[arg(long)]
        topics: Option<usize>,

        /// Words used to describe and label each topic
        #[arg(long)]
        top_words: Option<usize>,

        /// Gibbs sampling sweeps for the topic model
        #[arg(long)]
        iterations: Option<usize>,

        /// Random seed for the topic model
        #[arg(long)]
        seed: Option<u64>,

        /// Rows shown in the data preview
        #[arg(long)]
        preview: Option<usize>,

        /// Print the full report as JSON instead of the terminal summary
        #[arg(long, conflicts_with = "csv")]
        json: bool,

        /// Print the annotated table as CSV instead of the terminal summary
        #[arg(long)]
        csv: bool,
    },

    /// Show the sentiment and topic keyword tables in priority order
    Rules,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json and --csv output stays clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reputation=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { text } => {
            let classifier = KeywordClassifier::default();
            match pipeline::single::analyze(&classifier, &text) {
                Some(label) => output::terminal::display_single(label),
                None => println!(
                    "{} Please enter some review text to analyze.",
                    "Warning:".yellow()
                ),
            }
        }

        Commands::Bulk {
            file,
            sources,
            topics,
            top_words,
            iterations,
            seed,
            preview,
            json,
            csv,
        } => {
            let mut config = Config::load()?;
            if let Some(n) = topics {
                config.topics.n_topics = n;
            }
            if let Some(n) = top_words {
                config.topics.n_top_words = n;
            }
            if let Some(n) = iterations {
                config.topics.iterations = n;
            }
            if let Some(s) = seed {
                config.topics.seed = s;
            }
            if let Some(n) = preview {
                config.preview_rows = n;
            }

            let collection = ReviewCollection::from_path(&file)?;
            info!(
                rows = collection.len(),
                topics = config.topics.n_topics,
                "Starting bulk analysis"
            );

            let options = BulkOptions {
                source_filter: sources,
                keyword_count: config.keyword_count,
                show_progress: !(json || csv),
            };
            let modeler = LdaTopicModeler::new(config.topics);
            let report =
                pipeline::bulk::run(&collection, &KeywordClassifier::default(), &modeler, &options)?;

            if json {
                output::write_json(&report, io::stdout().lock())?;
            } else if csv {
                output::write_csv(&report, io::stdout().lock())?;
            } else {
                output::terminal::display_report(&report, config.preview_rows);
            }
        }

        Commands::Rules => {
            output::terminal::display_rules(&KeywordClassifier::default(), &TopicLabeler::default());
        }
    }

    Ok(())
}
