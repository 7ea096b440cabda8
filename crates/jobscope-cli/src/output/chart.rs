use jobscope_core::BarChart;

use super::table::{TableOptions, paint, truncate_text};

const LABEL_WIDTH_CAP: usize = 32;
const DEFAULT_BAR_WIDTH: usize = 40;
const MIN_BAR_WIDTH: usize = 10;
const BAR_COLOR: &str = "36";

/// Render a horizontal text bar chart, one line per bar, in chart order.
#[must_use]
pub fn render_bar_chart(chart: &BarChart, options: TableOptions) -> String {
    if chart.is_empty() {
        return String::new();
    }

    let label_width = chart
        .bars
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(0)
        .min(LABEL_WIDTH_CAP);
    let values = chart
        .bars
        .iter()
        .map(|bar| format_value(bar.value))
        .collect::<Vec<_>>();
    let value_width = values.iter().map(String::len).max().unwrap_or(0);

    // label, " | ", bar, " ", value
    let bar_width = options.max_width.map_or(DEFAULT_BAR_WIDTH, |max| {
        max.saturating_sub(label_width + value_width + 4)
            .clamp(MIN_BAR_WIDTH, DEFAULT_BAR_WIDTH)
    });
    let max_value = chart.max_value();

    chart
        .bars
        .iter()
        .zip(values)
        .map(|(bar, value)| {
            let label = truncate_text(&bar.label, label_width);
            let cells = bar_length(bar.value, max_value, bar_width);
            let fill = "█".repeat(cells);
            let fill = if options.color && !fill.is_empty() {
                paint(&fill, BAR_COLOR)
            } else {
                fill
            };
            let gap = " ".repeat(bar_width - cells);
            format!("{label:<label_width$} | {fill}{gap} {value:>value_width$}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar_length(value: f64, max_value: f64, width: usize) -> usize {
    if max_value <= 0.0 || value <= 0.0 || !value.is_finite() {
        return 0;
    }
    let scaled = (value / max_value * width as f64).round() as usize;
    scaled.clamp(1, width)
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
