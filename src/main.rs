use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use risewatch::data::parse_observation;
use risewatch::ui::{Theme, ThemeChoice};
use risewatch::{events, export, ui, App, Settings, ValueLog};

#[derive(Parser, Debug)]
#[command(name = "risewatch")]
#[command(about = "Log round outcomes and watch their mean, trend and alerts", version)]
struct Args {
    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the CSV export
    #[arg(long)]
    export_path: Option<PathBuf>,

    /// Values to start the session with (comma separated)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Vec<String>,

    /// Print a JSON summary of the values and exit
    #[arg(long, conflicts_with = "export")]
    summary: bool,

    /// Write the values to the CSV export and exit
    #[arg(short, long)]
    export: bool,

    /// Colour theme
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let interactive = !args.summary && !args.export;

    init_logging(args.log_file.as_deref(), interactive)?;

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(path) = args.export_path {
        settings.export_path = path;
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }

    let log = seed_log(&args.values)?;

    // Non-interactive modes
    if args.summary {
        let summary = export::summary_json(&log, &settings.thresholds);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    if args.export {
        let rows = export::write_csv(&settings.export_path, &log)
            .with_context(|| format!("exporting to {}", settings.export_path.display()))?;
        println!("Exported {} values to {}", rows, settings.export_path.display());
        return Ok(());
    }

    let app = App::new(
        settings.thresholds,
        settings.export_path,
        Theme::from_choice(settings.theme),
    )
    .with_log(log);

    run_tui(app)
}

/// Initialise tracing.
///
/// The TUI owns stdout, so interactive sessions only log when a file is
/// given. Non-interactive modes fall back to stderr.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
            .compact()
            .init();
    } else if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .compact()
            .init();
    }

    Ok(())
}

/// Parse `--values` into a log; any bad entry aborts startup.
fn seed_log(raw: &[String]) -> Result<ValueLog> {
    let values = raw
        .iter()
        .map(|s| parse_observation(s))
        .collect::<risewatch::Result<Vec<f64>>>()
        .context("parsing --values")?;
    Ok(ValueLog::from_values(values))
}

/// Run the TUI until the user quits
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    info!(rounds = app.log.len(), "session started");

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(rounds = app.log.len(), "session ended");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll with a short timeout so status messages expire on time
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }
    }

    Ok(())
}
