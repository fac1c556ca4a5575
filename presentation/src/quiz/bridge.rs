//! Console implementation of the presentation bridge

use crate::config::OutputConfig;
use crate::output::chart::{Chart, ChartSlot, ResultChart};
use crate::output::console::{ConsoleFormatter, DEFAULT_WIDTH};
use compass_application::{ErrorKind, PresentationBridge};
use compass_domain::{AnswerMap, InterpretedAxis, OutputFormat, Page, Profile, ResultKey};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

/// Cells of an axis bar on a normal terminal
const BAR_CELLS: usize = 21;
/// Cells of an axis bar on a wide terminal
const WIDE_BAR_CELLS: usize = 31;

/// Renders the quiz to a terminal (or any writer)
pub struct ConsolePresentation {
    output: OutputConfig,
    width: usize,
    out: Mutex<Box<dyn Write + Send>>,
    // Keeps stdout a single JSON document in JSON mode
    errors: Mutex<Box<dyn Write + Send>>,
    charts: Mutex<ChartSlot<ResultChart>>,
    // JSON output waits for the key so result and key print as one document
    pending_json: Mutex<Option<(Vec<InterpretedAxis>, Profile)>>,
}

impl ConsolePresentation {
    pub fn new(output: OutputConfig) -> Self {
        Self::with_writer(output, Box::new(std::io::stdout()))
    }

    pub fn with_writer(output: OutputConfig, out: Box<dyn Write + Send>) -> Self {
        Self {
            output,
            width: DEFAULT_WIDTH,
            out: Mutex::new(out),
            errors: Mutex::new(Box::new(std::io::stderr())),
            charts: Mutex::new(ChartSlot::new()),
            pending_json: Mutex::new(None),
        }
    }

    /// Where errors go when results are printed as JSON
    pub fn with_error_writer(mut self, errors: Box<dyn Write + Send>) -> Self {
        self.errors = Mutex::new(errors);
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.clamp(40, 120);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether a chart is currently held for the displayed result
    pub fn has_live_chart(&self) -> bool {
        lock(&self.charts).is_occupied()
    }

    fn write(&self, text: &str) {
        Self::write_to(&self.out, text);
    }

    fn write_to(target: &Mutex<Box<dyn Write + Send>>, text: &str) {
        let mut out = lock(target);
        // A closed stream leaves nothing to report to
        let _ = writeln!(out, "{}", text);
        let _ = out.flush();
    }

    fn bar_cells(&self) -> usize {
        if self.width >= 100 {
            WIDE_BAR_CELLS
        } else {
            BAR_CELLS
        }
    }
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

impl PresentationBridge for ConsolePresentation {
    fn render_question_page(&self, page: &Page, answers: &AnswerMap) {
        self.write(&ConsoleFormatter::format_page(page, answers, self.width));
    }

    fn render_progress(&self, page_index: usize, page_count: usize) {
        self.write(&ConsoleFormatter::format_progress(page_index, page_count));
    }

    fn render_result(&self, axes: &[InterpretedAxis], profile: &Profile) {
        match self.output.format {
            OutputFormat::Json => {
                *lock(&self.pending_json) = Some((axes.to_vec(), profile.clone()));
            }
            OutputFormat::Summary => {
                lock(&self.charts).release();
                self.write(&ConsoleFormatter::format_summary(axes, profile, self.width));
            }
            OutputFormat::Full => {
                let text = if self.output.charts {
                    let mut slot = lock(&self.charts);
                    let chart = slot.show(ResultChart::draw(axes, self.bar_cells()));
                    ConsoleFormatter::format_result(axes, profile, Some(chart.lines()), self.width)
                } else {
                    lock(&self.charts).release();
                    ConsoleFormatter::format_result(axes, profile, None, self.width)
                };
                self.write(&text);
            }
        }
    }

    fn render_result_key(&self, key: Option<&ResultKey>) {
        if self.output.format == OutputFormat::Json {
            if let Some((axes, profile)) = lock(&self.pending_json).take() {
                self.write(&ConsoleFormatter::format_json(&axes, &profile, key));
            }
            return;
        }
        self.write(&ConsoleFormatter::format_key(key));
    }

    fn render_error(&self, kind: ErrorKind, message: &str) {
        let text = ConsoleFormatter::format_error(kind, message);
        if self.output.format == OutputFormat::Json {
            Self::write_to(&self.errors, &text);
        } else {
            self.write(&text);
        }
    }

    fn clear_result(&self) {
        lock(&self.charts).release();
        *lock(&self.pending_json) = None;
    }
}
