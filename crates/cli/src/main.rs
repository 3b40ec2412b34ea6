use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use stratus_core::{Config, FeedTailer, TaskEntry, TaskFeed};
use stratus_ui::{App, DEFAULT_EXPORT_WIDTH, PanelOptions, SnapshotWriter, TranscriptRenderer};

/// Stratus - a transcript panel for autonomous-agent sessions
#[derive(Parser, Debug)]
#[command(name = "stratus")]
#[command(about = "A terminal transcript panel for autonomous-agent sessions", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to stratus.toml (default: ./stratus.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive transcript panel
    Start {
        /// Task feed file (JSONL, one task record per line)
        #[arg(short, long, value_name = "PATH")]
        feed: Option<PathBuf>,

        /// Tail the feed file for appended records
        #[arg(long)]
        follow: bool,

        /// Header title (overrides the config)
        #[arg(short, long, value_name = "TITLE")]
        title: Option<String>,

        /// Take the full terminal height
        #[arg(long)]
        fullscreen: bool,

        /// Enable the header save action
        #[arg(long)]
        save: bool,
    },
    /// Render a feed to transcript text without the UI
    Export {
        /// Task feed file (JSONL)
        #[arg(short, long, value_name = "PATH")]
        feed: PathBuf,

        /// Copy to the clipboard instead of writing the snapshot file
        #[arg(long)]
        copy: bool,

        /// Directory to write the snapshot into (default: current directory)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.verbose)?;
    let _log_guard = stratus_core::init_logging(Some(config.logging.clone().into()))
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    match cli.command {
        Commands::Start { feed, follow, title, fullscreen, save } => {
            cmd_start(config, feed, follow, title, fullscreen, save)
        }
        Commands::Export { feed, copy, out } => cmd_export(config, feed, copy, out),
    }
}

/// Load config from an explicit path (required to exist) or the default
/// location (falling back to defaults when absent)
fn load_config(path: Option<&Path>, verbose: bool) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => {
            let default_path = PathBuf::from("stratus.toml");
            if default_path.exists() {
                Config::from_file(&default_path).context("failed to load stratus.toml")
            } else {
                if verbose {
                    println!("{} No stratus.toml found, using defaults", "Info:".blue().bold());
                }
                Ok(Config::default())
            }
        }
    }
}

fn cmd_start(
    config: Config, feed: Option<PathBuf>, follow: bool, title: Option<String>, fullscreen: bool, save: bool,
) -> Result<()> {
    let mut options = PanelOptions::from(&config.panel);
    if title.is_some() {
        options.title = title;
    }
    if fullscreen {
        options.fullscreen = true;
    }

    let (entries, offset) = match &feed {
        Some(path) => {
            let task_feed = TaskFeed::from_path(path)
                .with_context(|| format!("failed to read feed {}", path.display()))?;
            let offset = task_feed.offset();
            (task_feed.into_entries(), offset)
        }
        None => (Vec::new(), 0),
    };

    let mut app = App::new(entries, options);

    if let Some(directory) = config.export.directory {
        app = app.with_export_directory(directory);
    }

    if save {
        app = app.with_save_callback(Box::new(|format| {
            tracing::info!(format, "save requested");
        }));
    }

    app = app.with_run_callback(make_run_callback(feed.clone()));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build runtime")?;

    runtime.block_on(async move {
        if follow && let Some(path) = feed {
            let rx = FeedTailer::new(path, offset).spawn(app.cancel_token());
            app = app.with_feed_updates(rx);
        }

        app.run().await.context("panel terminated abnormally")
    })
}

/// Build the run callback for the empty-state example prompts
///
/// With a feed file present, a started task record is appended so a
/// follow-mode panel picks the new agent up immediately; otherwise the
/// request is only logged.
fn make_run_callback(feed: Option<PathBuf>) -> stratus_ui::RunCallback {
    let mut next_id: usize = 0;

    Box::new(move |name, goal| {
        tracing::info!(name, goal, "starting example agent");

        if let Some(path) = &feed {
            next_id += 1;
            let entry = TaskEntry::new(format!("example-{}", next_id), goal);
            if let Err(e) = append_task(path, &entry) {
                tracing::warn!(error = %e, "failed to append example task to feed");
            }
        }
    })
}

/// Append one task record to a JSONL feed file
fn append_task(path: &Path, entry: &TaskEntry) -> Result<()> {
    use std::io::Write;

    let line = serde_json::to_string(entry)?;
    let mut file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

fn cmd_export(config: Config, feed: PathBuf, copy: bool, out: Option<PathBuf>) -> Result<()> {
    let entries = TaskFeed::from_path(&feed)
        .with_context(|| format!("failed to read feed {}", feed.display()))?
        .into_entries();

    let width = DEFAULT_EXPORT_WIDTH.saturating_sub(2) as usize;
    let text = TranscriptRenderer::new(&entries).plain_text(width);

    if text.is_empty() {
        println!("{} Nothing to export", "Info:".blue().bold());
        return Ok(());
    }

    if copy {
        if stratus_ui::copy_text(&text) {
            println!("{} Copied transcript to clipboard", "Success:".green().bold());
        } else {
            eprintln!("{} No clipboard available", "Warning:".yellow().bold());
        }
        return Ok(());
    }

    let directory = out
        .or(config.export.directory)
        .unwrap_or_else(|| PathBuf::from("."));
    let path = SnapshotWriter::new(directory)
        .write(&text)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{} Wrote {}", "Success:".green().bold(), path.display());
    Ok(())
}
