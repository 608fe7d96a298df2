//! History table rendering.
//!
//! Lists every observation in chronological order, each row tinted by its
//! row class.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::data::format_value;

/// Render the history table.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![Cell::from("#"), Cell::from("Value")])
        .height(1)
        .style(app.theme.header);

    let rows: Vec<Row> = app
        .log
        .all()
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(format_value(v)),
            ])
            .style(app.theme.row_style(app.row_class(v)))
        })
        .collect();

    let widths = [Constraint::Length(5), Constraint::Fill(1)];

    let position_info = if app.log.is_empty() {
        String::new()
    } else {
        format!(" [{}/{}]", app.selected_row + 1, app.log.len())
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" History{} ", position_info))
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if !app.log.is_empty() {
        state.select(Some(app.selected_row.min(app.log.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
