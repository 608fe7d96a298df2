//! Trend chart rendering.
//!
//! Plots every observation by round with a horizontal reference line at
//! the mean.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use crate::app::App;

/// Fraction of the value range added above and below the plotted data.
const Y_MARGIN: f64 = 0.1;

/// Build `(round, value)` points; rounds are 1-based to match the table.
pub fn points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| ((i + 1) as f64, *v))
        .collect()
}

/// X and Y bounds covering all values and the mean, never zero-width.
pub fn bounds(values: &[f64], mean: f64) -> ([f64; 2], [f64; 2]) {
    let x_max = (values.len() as f64).max(2.0);

    let (lo, hi) = values
        .iter()
        .fold((mean, mean), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let lo = lo.min(0.0);
    let span = (hi - lo).max(1.0);

    ([1.0, x_max], [lo, hi + span * Y_MARGIN])
}

/// Render the chart for the given mean.
pub fn render(frame: &mut Frame, app: &App, mean: f64, area: Rect) {
    let values = app.log.all();
    let data = points(values);
    let (x_bounds, y_bounds) = bounds(values, mean);
    let mean_line = [(x_bounds[0], mean), (x_bounds[1], mean)];

    let datasets = vec![
        Dataset::default()
            .name("Value")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.chart_line))
            .data(&data),
        Dataset::default()
            .name(format!("Mean ({:.2})", mean))
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.chart_mean))
            .data(&mean_line),
    ];

    let axis_style = Style::default().fg(app.theme.border);
    let label_style = Style::default().add_modifier(Modifier::DIM);

    let x_axis = Axis::default()
        .title("Rounds")
        .style(axis_style)
        .bounds(x_bounds)
        .labels(vec![
            Span::styled(format!("{}", x_bounds[0] as usize), label_style),
            Span::styled(format!("{}", x_bounds[1] as usize), label_style),
        ]);

    let y_axis = Axis::default()
        .title("Value")
        .style(axis_style)
        .bounds(y_bounds)
        .labels(vec![
            Span::styled(format!("{:.1}", y_bounds[0]), label_style),
            Span::styled(format!("{:.1}", mean), label_style),
            Span::styled(format!("{:.1}", y_bounds[1]), label_style),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Trend ")
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopRight));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_numbered_from_one() {
        assert_eq!(points(&[1.5, 2.5]), vec![(1.0, 1.5), (2.0, 2.5)]);
    }

    #[test]
    fn bounds_cover_values_and_mean() {
        let (x, y) = bounds(&[1.0, 5.0, 3.0], 3.0);
        assert_eq!(x, [1.0, 3.0]);
        assert_eq!(y[0], 0.0);
        assert!(y[1] > 5.0);
    }

    #[test]
    fn single_value_has_non_degenerate_bounds() {
        let (x, y) = bounds(&[2.0], 2.0);
        assert!(x[1] > x[0]);
        assert!(y[1] > y[0]);
    }

    #[test]
    fn negative_values_extend_lower_bound() {
        let (_, y) = bounds(&[-1.0, 2.0], 0.5);
        assert_eq!(y[0], -1.0);
    }
}
