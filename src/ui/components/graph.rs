//! Static ascii line chart.

use crate::ui::core::{Command, Component, Message};

/// Series shown by the demo graph.
pub const DEMO_SERIES: [f64; 15] = [3.0, 4.0, 9.0, 6.0, 2.0, 4.0, 5.0, 8.0, 5.0, 10.0, 2.0, 7.0, 2.0, 5.0, 6.0];

pub struct Graph {
    data: Vec<f64>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::with_data(DEMO_SERIES.to_vec())
    }

    pub fn with_data(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

impl Component for Graph {
    fn update(&mut self, _msg: &Message) -> Command {
        Command::None
    }

    fn view(&self) -> String {
        plot(&self.data)
    }
}

/// Plot `series` as a line chart, one row per unit between min and max.
///
/// Rows are labelled on a y axis; each column after the axis is the step from
/// one value to the next, drawn with box-drawing characters. NaN and infinite
/// values are skipped.
pub fn plot(series: &[f64]) -> String {
    let series: Vec<f64> = series.iter().copied().filter(|v| v.is_finite()).collect();
    if series.is_empty() {
        return String::new();
    }

    let (min, max) = series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let interval = (max - min).abs();
    let height = if interval >= 1.0 { interval.round() } else { 1.0 };
    let ratio = if interval > 0.0 { height / interval } else { 1.0 };

    let min2 = (min * ratio).round() as i64;
    let max2 = (max * ratio).round() as i64;
    let rows = (max2 - min2).max(0) as usize;
    let cols = series.len().saturating_sub(1);

    let precision = if max.abs().max(min.abs()).log10() > 2.0 { 0 } else { 2 };
    let label_width = format!("{:.*}", precision, max)
        .len()
        .max(format!("{:.*}", precision, min).len());

    let scaled = |v: f64| ((v * ratio).round() as i64 - min2) as usize;
    let mut grid = vec![vec![' '; cols]; rows + 1];
    let mut axis = vec!['┤'; rows + 1];
    axis[rows - scaled(series[0])] = '┼';

    for x in 0..cols {
        let y0 = scaled(series[x]);
        let y1 = scaled(series[x + 1]);
        if y0 == y1 {
            grid[rows - y0][x] = '─';
            continue;
        }
        if y0 > y1 {
            grid[rows - y1][x] = '╰';
            grid[rows - y0][x] = '╮';
        } else {
            grid[rows - y1][x] = '╭';
            grid[rows - y0][x] = '╯';
        }
        for y in y0.min(y1) + 1..y0.max(y1) {
            grid[rows - y][x] = '│';
        }
    }

    let mut lines = Vec::with_capacity(rows + 1);
    for (r, row) in grid.iter().enumerate() {
        let magnitude = if rows > 0 {
            max - r as f64 * interval / rows as f64
        } else {
            max
        };
        let cells: String = row.iter().collect();
        let line = format!("{:>w$.p$} {}{}", magnitude, axis[r], cells, w = label_width, p = precision);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
