//! Pages: questions grouped by axis

use super::question::Question;
use crate::axis::catalog::AxisCatalog;
use serde::Serialize;

/// One axis worth of questions, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub axis: String,
    pub questions: Vec<Question>,
}

impl Page {
    pub fn label(&self) -> String {
        AxisCatalog::label_of(&self.axis)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at a 1-based position, as shown to the user.
    pub fn question_at(&self, position: usize) -> Option<&Question> {
        position
            .checked_sub(1)
            .and_then(|index| self.questions.get(index))
    }
}

/// Group questions into pages.
///
/// Canonical axes come first in canonical order, followed by unrecognized
/// axes in the order they were first seen. Questions keep their relative
/// order within each page.
pub fn build_pages(questions: &[Question]) -> Vec<Page> {
    let mut discovered: Vec<Page> = Vec::new();

    for question in questions {
        match discovered.iter_mut().find(|p| p.axis == question.axis()) {
            Some(page) => page.questions.push(question.clone()),
            None => discovered.push(Page {
                axis: question.axis().to_string(),
                questions: vec![question.clone()],
            }),
        }
    }

    // Stable sort keeps first-seen order among unrecognized axes.
    discovered.sort_by_key(|page| AxisCatalog::canonical_rank(&page.axis).unwrap_or(usize::MAX));
    discovered
}
