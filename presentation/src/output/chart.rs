//! Text charts for quiz results
//!
//! A [`ResultChart`] is drawn when a result is rendered and lives in a
//! [`ChartSlot`] until it is released: on reset, when the next result is
//! drawn, or when the slot is dropped.

use colored::Colorize;
use compass_domain::{Axis, AxisCatalog, InterpretedAxis};

/// Chart coordinates run from `-CHART_SCALE` to `+CHART_SCALE`
pub const CHART_SCALE: f64 = 10.0;

const GRID_COLS: usize = 21;
const GRID_ROWS: usize = 11;

/// A drawn chart that holds resources until released
pub trait Chart {
    fn lines(&self) -> &[String];

    /// Free whatever the chart holds. Called exactly once per chart.
    fn release(&mut self);
}

/// Owns at most one live chart
pub struct ChartSlot<C: Chart> {
    current: Option<C>,
}

impl<C: Chart> ChartSlot<C> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Replace the live chart, releasing the previous one first.
    pub fn show(&mut self, chart: C) -> &C {
        self.release();
        self.current.insert(chart)
    }

    pub fn release(&mut self) {
        if let Some(mut chart) = self.current.take() {
            chart.release();
        }
    }

    pub fn current(&self) -> Option<&C> {
        self.current.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }
}

impl<C: Chart> Default for ChartSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Chart> Drop for ChartSlot<C> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Quadrant chart (economic x social) plus one bar per axis
#[derive(Debug, Default)]
pub struct ResultChart {
    lines: Vec<String>,
}

impl ResultChart {
    /// Draw the charts for a set of interpreted axes.
    ///
    /// `bar_width` is the number of cells of each axis bar.
    pub fn draw(axes: &[InterpretedAxis], bar_width: usize) -> Self {
        let mut lines = Vec::new();

        let find = |axis: Axis| axes.iter().find(|a| a.axis == axis.as_str());
        if let (Some(economic), Some(social)) = (find(Axis::Economic), find(Axis::Social))
            && let Some(grid) = quadrant(economic.normalized, social.normalized)
        {
            lines.extend(grid);
            lines.push(String::new());
        }

        let label_width = axes
            .iter()
            .filter_map(|a| AxisCatalog::poles_of(&a.axis))
            .map(|(neg, _)| neg.chars().count())
            .max()
            .unwrap_or(0);
        for axis in axes {
            lines.push(axis_bar(axis, bar_width, label_width));
        }

        Self { lines }
    }
}

impl Chart for ResultChart {
    fn lines(&self) -> &[String] {
        &self.lines
    }

    fn release(&mut self) {
        self.lines = Vec::new();
    }
}

fn to_cell(value: f64, cells: usize) -> usize {
    let clamped = value.clamp(-CHART_SCALE, CHART_SCALE);
    let ratio = (clamped + CHART_SCALE) / (2.0 * CHART_SCALE);
    (ratio * (cells - 1) as f64).round() as usize
}

/// Plot one point on the economic (x) / social (y) plane.
///
/// Returns `None` when either coordinate is not a number.
pub fn quadrant(x: f64, y: f64) -> Option<Vec<String>> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    let (left, right) = Axis::Economic.poles();
    let (bottom, top) = Axis::Social.poles();

    let col = to_cell(x, GRID_COLS);
    // Row 0 is the top of the chart
    let row = GRID_ROWS - 1 - to_cell(y, GRID_ROWS);
    let mid_col = GRID_COLS / 2;
    let mid_row = GRID_ROWS / 2;
    let pad = " ".repeat(left.chars().count() + 1);

    let mut lines = Vec::with_capacity(GRID_ROWS + 2);
    lines.push(format!("{}{:^width$}", pad, top.dimmed(), width = GRID_COLS));
    for r in 0..GRID_ROWS {
        let mut line = String::new();
        for c in 0..GRID_COLS {
            let cell = if r == row && c == col {
                "●".yellow().bold().to_string()
            } else if r == mid_row && c == mid_col {
                "┼".to_string()
            } else if r == mid_row {
                "─".to_string()
            } else if c == mid_col {
                "│".to_string()
            } else {
                "·".dimmed().to_string()
            };
            line.push_str(&cell);
        }
        if r == mid_row {
            lines.push(format!("{} {} {}", left.dimmed(), line, right.dimmed()));
        } else {
            lines.push(format!("{}{}", pad, line));
        }
    }
    lines.push(format!("{}{:^width$}", pad, bottom.dimmed(), width = GRID_COLS));
    Some(lines)
}

/// One horizontal bar: `State [-----●-----] Market  +3`
pub fn axis_bar(axis: &InterpretedAxis, cells: usize, label_width: usize) -> String {
    let cells = cells.max(3);
    let (neg, pos) = AxisCatalog::poles_of(&axis.axis).unwrap_or(("-", "+"));

    let marker = axis
        .normalized
        .is_finite()
        .then(|| to_cell(axis.normalized, cells));
    let mid = cells / 2;
    let bar: String = (0..cells)
        .map(|c| {
            if Some(c) == marker {
                "●".yellow().bold().to_string()
            } else if c == mid {
                "┊".to_string()
            } else if marker.is_some() {
                "─".to_string()
            } else {
                "·".dimmed().to_string()
            }
        })
        .collect();

    format!(
        "{:>lw$} [{}] {:<lw$} {:>5}  {}",
        neg,
        bar,
        pos,
        axis.formatted,
        axis.label.bold(),
        lw = label_width
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingChart {
        released: Rc<Cell<usize>>,
    }

    impl Chart for CountingChart {
        fn lines(&self) -> &[String] {
            &[]
        }

        fn release(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn counting(counter: &Rc<Cell<usize>>) -> CountingChart {
        CountingChart {
            released: counter.clone(),
        }
    }

    #[test]
    fn test_next_render_releases_previous_chart() {
        let counter = Rc::new(Cell::new(0));
        let mut slot = ChartSlot::new();

        slot.show(counting(&counter));
        assert_eq!(counter.get(), 0);
        slot.show(counting(&counter));
        assert_eq!(counter.get(), 1);
        assert!(slot.is_occupied());
    }

    #[test]
    fn test_reset_releases_chart_once() {
        let counter = Rc::new(Cell::new(0));
        let mut slot = ChartSlot::new();

        slot.show(counting(&counter));
        slot.release();
        slot.release();
        assert_eq!(counter.get(), 1);
        assert!(!slot.is_occupied());
    }

    #[test]
    fn test_drop_releases_chart() {
        let counter = Rc::new(Cell::new(0));
        {
            let mut slot = ChartSlot::new();
            slot.show(counting(&counter));
        }
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_to_cell_bounds() {
        assert_eq!(to_cell(-10.0, 21), 0);
        assert_eq!(to_cell(0.0, 21), 10);
        assert_eq!(to_cell(10.0, 21), 20);
        assert_eq!(to_cell(99.0, 21), 20);
    }

    #[test]
    fn test_quadrant_needs_both_scores() {
        assert!(quadrant(f64::NAN, 1.0).is_none());
        let grid = quadrant(10.0, 10.0).unwrap();
        assert_eq!(grid.len(), GRID_ROWS + 2);
    }

    #[test]
    fn test_result_chart_skips_quadrant_without_social() {
        let axes = vec![InterpretedAxis::new("economic", 4.0)];
        let chart = ResultChart::draw(&axes, 21);
        assert_eq!(chart.lines().len(), 1);
        assert!(chart.lines()[0].contains("+4"));

        let axes = vec![
            InterpretedAxis::new("economic", 4.0),
            InterpretedAxis::new("social", -2.0),
        ];
        let chart = ResultChart::draw(&axes, 21);
        assert_eq!(chart.lines().len(), GRID_ROWS + 2 + 1 + 2);
    }

    #[test]
    fn test_release_clears_lines() {
        let mut chart = ResultChart::draw(&[InterpretedAxis::new("method", 1.0)], 11);
        chart.release();
        assert!(chart.lines().is_empty());
    }
}
