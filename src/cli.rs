use clap::{Parser, Subcommand};
use anyhow::{Context, Result};
use tracing::{error, info};

use suffix_tally::config::{AppConfig, DEFAULT_CONFIG_FILE};
use suffix_tally::engine::Engine;
use suffix_tally::engine::config::EnumerationStrategy;
use suffix_tally::history::History;
use suffix_tally::record::ResultRecord;
use suffix_tally::storage::FileHistoryStore;

/// Used when `compute` is given neither text nor a file.
const DEFAULT_TEXT: &str = "Abracadabra";

#[derive(Parser)]
#[command(name = "suffix-tally")]
#[command(about = "Count word suffixes and rank the most frequent triads")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, help = "Config file path")]
    config: Option<String>,

    #[arg(long, help = "History file path (overrides config)")]
    history: Option<String>,

    #[arg(long, help = "Output as JSON")]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the suffix table for a text
    Compute {
        text: Option<String>,
        #[arg(long, help = "Read the text from a file")]
        file: Option<String>,
        #[arg(long, help = "Do not add the result to history")]
        no_save: bool,
        #[arg(long, help = "Enumerate suffixes of a word in a loop instead of one task each")]
        sequential: bool,
    },
    /// Inspect or clear past results
    History {
        #[command(subcommand)]
        history_cmd: HistoryCommands,
    },
    /// Write a default config file
    GenerateConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
        output: String,
    },
}

#[derive(Subcommand)]
enum HistoryCommands {
    List,
    Show { id: String },
    Clear,
}

/// The text to compute over, or `None` when it is empty. Touches neither
/// config nor history.
fn resolve_text(text: Option<String>, file: Option<String>) -> Result<Option<String>> {
    let text = match (text, file) {
        (_, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path))?,
        (Some(text), None) => text,
        (None, None) => DEFAULT_TEXT.to_string(),
    };
    Ok(Some(text).filter(|t| !t.is_empty()))
}

async fn open_history(
    config_path: Option<&str>,
    history_override: Option<String>,
) -> Result<(AppConfig, History<FileHistoryStore>)> {
    let mut config = AppConfig::load_or_create(config_path)?;
    if let Some(history) = history_override {
        config.history_path = history.into();
    }
    config.ensure_directories()?;

    let store = FileHistoryStore::new(&config.history_path);
    let history = History::load(store, config.max_history_entries).await?;
    Ok((config, history))
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenerateConfig { output } => {
            AppConfig::default().save(&output)?;
            if cli.json {
                println!("{}", serde_json::json!({"config": output}));
            } else {
                println!("✅ Config written to {}", output);
            }
        }
        Commands::Compute { text, file, no_save, sequential } => {
            let Some(text) = resolve_text(text, file)? else {
                if cli.json {
                    println!("{}", serde_json::json!({"error": "empty text"}));
                } else {
                    eprintln!("❌ Nothing to compute: text is empty");
                }
                return Ok(());
            };

            let (config, mut history) = open_history(cli.config.as_deref(), cli.history).await?;

            let mut engine_config = config.engine.clone();
            if sequential {
                engine_config.strategy = EnumerationStrategy::Sequential;
            }
            let engine = Engine::new(engine_config);

            let result = match engine.compute(&text).await {
                Ok(result) => result,
                Err(e) => {
                    error!("Computation failed: {}", e);
                    if cli.json {
                        println!("{}", serde_json::json!({"error": e.to_string()}));
                    } else {
                        eprintln!("❌ Computation failed: {}", e);
                    }
                    return Err(e.into());
                }
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }

            if !no_save {
                history.record(result).await?;
                info!("History now holds {} entries", history.len());
            }
        }
        Commands::History { history_cmd } => {
            let (_, mut history) = open_history(cli.config.as_deref(), cli.history).await?;
            match history_cmd {
                HistoryCommands::List => {
                    if cli.json {
                        let list: Vec<_> = history.entries().iter()
                            .map(|e| serde_json::json!({"id": e.id, "text": e.text}))
                            .collect();
                        println!("{}", serde_json::to_string_pretty(&list)?);
                    } else {
                        println!("🕘 Search History");
                        println!("================");
                        if history.is_empty() {
                            println!("(empty)");
                        }
                        for entry in history.entries() {
                            println!("{}  {}", entry.id, first_line(&entry.text));
                        }
                    }
                }
                HistoryCommands::Show { id } => {
                    let entry = history.get(&id)
                        .ok_or_else(|| anyhow::anyhow!("No history entry with id {}", id))?;
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(entry)?);
                    } else {
                        print_result(entry);
                    }
                }
                HistoryCommands::Clear => {
                    let removed = history.len();
                    history.clear().await?;
                    if cli.json {
                        println!("{}", serde_json::json!({"cleared": removed}));
                    } else {
                        println!("🧹 Cleared {} history entries", removed);
                    }
                }
            }
        }
    }

    Ok(())
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

fn print_result(result: &ResultRecord) {
    println!("🔤 Suffix array for: {}", first_line(&result.text));
    println!("   Id: {}", result.id);
    println!("   Distinct suffixes: {}", result.suffixes.len());
    println!("   Total occurrences: {}", result.total_occurrences());
    println!();

    println!("Top triads");
    println!("==========");
    if result.top_triads.is_empty() {
        println!("(none)");
    }
    for (rank, triad) in result.top_triads.iter().enumerate() {
        let count = result.counts.get(triad).copied().unwrap_or(0);
        println!("{:>2}. {}  ×{}", rank + 1, triad, count);
    }
    println!();

    println!("Suffixes");
    println!("========");
    for suffix in &result.suffixes {
        let count = result.counts.get(suffix).copied().unwrap_or(0);
        let time = result.search_times.get(suffix).copied().unwrap_or_default();
        println!("{}  ×{}  {:?}", suffix, count, time);
    }
}
