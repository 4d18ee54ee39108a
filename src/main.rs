mod app;
mod config;
mod packing;
mod theme;
mod ui;
mod view;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "packing-list")]
#[command(version)]
#[command(about = "Show what is packed and what still needs to go in the bag")]
#[command(group(ArgGroup::new("output").args(["print", "markup", "json"])))]
struct Args {
    /// Print the list as plain text and exit
    #[arg(short, long)]
    print: bool,

    /// Print the list as HTML-like markup and exit
    #[arg(short, long)]
    markup: bool,

    /// Print the display tree as JSON and exit
    #[arg(short, long)]
    json: bool,

    /// Read config from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the one-shot outputs stay clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    let mut stdout = io::stdout().lock();
    if print_once(&args, &config, &mut stdout)? {
        return Ok(());
    }
    drop(stdout);

    run_tui(config).await
}

/// Handle `--print`, `--markup` and `--json`. Returns false when none was given.
fn print_once(args: &Args, config: &AppConfig, out: &mut impl Write) -> Result<bool> {
    let tree = packing::packing_list();

    let rendered = if args.print {
        tracing::info!("printing plain text");
        tree.to_plain_text(&config.bullet)
    } else if args.markup {
        tracing::info!("printing markup");
        tree.to_markup()
    } else if args.json {
        tracing::info!("printing json");
        serde_json::to_string_pretty(&tree).context("Failed to serialize display tree")?
    } else {
        return Ok(false);
    };

    writeln!(out, "{}", rendered).context("Failed to write to stdout")?;
    out.flush().context("Failed to write to stdout")?;
    Ok(true)
}

async fn run_tui(config: AppConfig) -> Result<()> {
    tracing::info!("starting terminal view");

    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let setup = || -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if let Some(heading) = app.tree.heading() {
            execute!(stdout, SetTitle(heading))?;
        }
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    };
    let mut terminal = setup_or_restore(setup, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        disable_raw_mode()?;
        Ok(())
    })?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Run `setup`; if it fails, run `restore` before handing back the setup error
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            if let Err(restore_err) = restore() {
                tracing::warn!("Failed to restore terminal: {}", restore_err);
            }
            Err(e)
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}
