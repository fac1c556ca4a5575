//! Console output formatter for quiz pages and results

use colored::Colorize;
use compass_application::ErrorKind;
use compass_domain::core::string::{truncate, wrap};
use compass_domain::{
    AnswerMap, AxisCatalog, InterpretedAxis, LikertValue, LongDescription, Page, Profile,
    ResultKey,
};
use serde_json::json;

/// Default text width when the terminal size is unknown
pub const DEFAULT_WIDTH: usize = 80;

/// Formats quiz pages and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one page of questions with the answers recorded so far
    pub fn format_page(page: &Page, answers: &AnswerMap, width: usize) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header(&page.label()));
        for line in wrap(&AxisCatalog::description_of(&page.axis), width) {
            output.push_str(&format!("{}\n", line.dimmed()));
        }
        output.push('\n');

        let text_width = width.saturating_sub(12).max(20);
        for (i, question) in page.questions.iter().enumerate() {
            let mark = match answers.get(question.id()) {
                Some(value) => format!("[{:>2}]", value.to_string()).green().bold(),
                None => "[  ]".dimmed(),
            };
            let mut lines = wrap(question.text(), text_width).into_iter();
            output.push_str(&format!(
                "{:>3}. {} {}\n",
                i + 1,
                mark,
                lines.next().unwrap_or_default()
            ));
            for line in lines {
                output.push_str(&format!("          {}\n", line));
            }
        }

        output.push('\n');
        output.push_str(&format!("{}\n", Self::scale_legend().dimmed()));
        output
    }

    /// `-2 Strongly disagree | -1 Disagree | ...`
    pub fn scale_legend() -> String {
        LikertValue::all()
            .iter()
            .map(|v| format!("{} {}", v, v.label()))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// `Page 2 of 5 [=====-----]`
    pub fn format_progress(page_index: usize, page_count: usize) -> String {
        const BAR: usize = 20;
        let filled = if page_count == 0 {
            0
        } else {
            ((page_index + 1) * BAR).div_ceil(page_count).min(BAR)
        };
        format!(
            "{} [{}{}]",
            format!("Page {} of {}", page_index + 1, page_count).cyan().bold(),
            "=".repeat(filled).cyan(),
            "-".repeat(BAR - filled).dimmed()
        )
    }

    /// Format the complete result
    pub fn format_result(
        axes: &[InterpretedAxis],
        profile: &Profile,
        chart: Option<&[String]>,
        width: usize,
    ) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Your Result", width));
        output.push('\n');
        output.push_str(&Self::format_profile_heading(profile, width));

        if let Some(lines) = chart
            && !lines.is_empty()
        {
            output.push_str(&Self::section_header("Where you stand"));
            for line in lines {
                output.push_str(&format!("  {}\n", line));
            }
        }

        if !axes.is_empty() {
            output.push_str(&Self::section_header("Axes"));
            for axis in axes {
                output.push_str(&format!(
                    "\n{} {}\n",
                    format!("── {} ──", axis.label).yellow().bold(),
                    axis.formatted.bold()
                ));
                for line in wrap(axis.interpretation, width.saturating_sub(2)) {
                    output.push_str(&format!("  {}\n", line));
                }
                if let Some(tendency) = profile.axis_tendencies.get(&axis.axis) {
                    for line in wrap(tendency, width.saturating_sub(2)) {
                        output.push_str(&format!("  {}\n", line.italic()));
                    }
                }
                if let Some(detail) = profile.description_for_axis(&axis.axis) {
                    for line in wrap(detail, width.saturating_sub(2)) {
                        output.push_str(&format!("  {}\n", line.dimmed()));
                    }
                }
            }
        }

        if let Some(LongDescription::Text(text)) = &profile.description_long {
            output.push_str(&Self::section_header("About this profile"));
            for paragraph in text.split("\n\n") {
                for line in wrap(paragraph, width) {
                    output.push_str(&format!("{}\n", line));
                }
                output.push('\n');
            }
        }

        for (title, references) in profile.reference_groups() {
            output.push_str(&format!("\n{}\n", format!("{}:", title).cyan().bold()));
            for reference in references {
                output.push_str(&format!("  * {}\n", reference.display()));
            }
        }

        output.push_str(&Self::footer(width));
        output
    }

    /// Format label, short description and scores only (concise output)
    pub fn format_summary(axes: &[InterpretedAxis], profile: &Profile, width: usize) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Profile:".cyan().bold(),
            profile.display_label().bold()
        ));
        if let Some(short) = &profile.description_short {
            output.push_str(&format!("{}\n", truncate(short, width.saturating_mul(2))));
        }
        output.push('\n');

        let label_width = axes
            .iter()
            .map(|a| a.label.chars().count())
            .max()
            .unwrap_or(0);
        for axis in axes {
            output.push_str(&format!(
                "  {:<lw$}  {:>5}\n",
                axis.label,
                axis.formatted,
                lw = label_width
            ));
        }
        output
    }

    /// Format as JSON
    pub fn format_json(
        axes: &[InterpretedAxis],
        profile: &Profile,
        key: Option<&ResultKey>,
    ) -> String {
        let value = json!({
            "result_key": key.map(ResultKey::as_str),
            "profile": profile,
            "axes": axes,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the retrieval key, or that none is available
    pub fn format_key(key: Option<&ResultKey>) -> String {
        match key {
            Some(key) => format!(
                "{} {}\n{}",
                "Result key:".cyan().bold(),
                key.as_str().green().bold(),
                "Keep this key to look your result up again with /key or --key.".dimmed()
            ),
            None => format!("{}", "No result key available for this result.".dimmed()),
        }
    }

    /// Format a failure or warning
    pub fn format_error(kind: ErrorKind, message: &str) -> String {
        let hint = match kind {
            ErrorKind::MalformedQuestionSet => "The quiz could not start. Check the service and try again.",
            ErrorKind::Submission => "Your answers are kept. Type `next` to submit again.",
            ErrorKind::Persistence => "Your result is shown above but was not saved.",
            ErrorKind::InvalidKeyFormat => "Keys look like IDEO-AB12-CD34.",
            ErrorKind::NotFound => "Check the key and try again.",
        };
        let title = if kind.is_warning() {
            "Warning:".yellow().bold()
        } else {
            "Error:".red().bold()
        };
        format!("{} {}\n{}", title, message, hint.dimmed())
    }

    fn format_profile_heading(profile: &Profile, width: usize) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Profile:".cyan().bold(),
            profile.display_label().bold()
        ));
        if let Some(tagline) = &profile.tagline {
            output.push_str(&format!("{}\n", tagline.italic()));
        }
        if let Some(short) = &profile.description_short {
            output.push('\n');
            for line in wrap(short, width) {
                output.push_str(&format!("{}\n", line));
            }
        }
        output
    }

    fn header(title: &str, width: usize) -> String {
        let line = "=".repeat(width);
        format!(
            "{}\n{:^width$}\n{}",
            line.cyan(),
            title.bold(),
            line.cyan(),
            width = width
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer(width: usize) -> String {
        format!("\n{}\n", "=".repeat(width).cyan())
    }
}
