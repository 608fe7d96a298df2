//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`input`]: The value entry box with inline error
//! - [`summary`]: Mean with tier colour and the alert banner
//! - [`chart`]: Trend line with the mean reference line
//! - [`history`]: Colour-coded table of all observations
//! - [`common`]: Shared components (header, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Input (input::render)                │
//! ├─────────────────────────┬────────────┤
//! │ Summary (summary)       │ History    │
//! ├─────────────────────────┤ (history)  │
//! │ Trend (chart)           │            │
//! ├─────────────────────────┴────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top: common::render_help
//! ```
//!
//! While the log is empty the body shows a placeholder instead.

pub mod chart;
pub mod common;
pub mod history;
pub mod input;
pub mod summary;
pub mod theme;

pub use theme::{Theme, ThemeChoice};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal width for usable display.
pub const MIN_WIDTH: u16 = 50;
/// Minimum terminal height for usable display.
pub const MIN_HEIGHT: u16 = 16;

/// Width of the history column.
const HISTORY_WIDTH: u16 = 22;

/// Draw the whole screen for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5)
            .intersection(area);
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(3), // Input box
        Constraint::Min(8),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    input::render(frame, app, chunks[1]);

    // Stats are recomputed from the full log on every frame
    match app.stats() {
        Ok(stats) => {
            let columns =
                Layout::horizontal([Constraint::Min(28), Constraint::Length(HISTORY_WIDTH)])
                    .split(chunks[2]);
            let left = Layout::vertical([
                Constraint::Length(4), // Mean and alert
                Constraint::Min(4),    // Trend chart
            ])
            .split(columns[0]);

            summary::render(frame, app, &stats, left[0]);
            chart::render(frame, app, stats.mean, left[1]);
            history::render(frame, app, columns[1]);
        }
        Err(_) => summary::render_placeholder(frame, app, chunks[2]),
    }

    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}
