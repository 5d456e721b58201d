//! Discrete previous/next navigation between frame-marked sections.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Viewport-relative vertical extent of one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    /// True when the section spans the top edge of the viewport.
    pub fn straddles_viewport_top(&self) -> bool {
        self.top <= 0.0 && self.bottom > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerDirection {
    Previous,
    Next,
}

/// Ordered sections, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameSequence {
    sections: Vec<SectionBounds>,
}

impl FrameSequence {
    pub fn new(sections: Vec<SectionBounds>) -> Self {
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.sections
            .iter()
            .position(SectionBounds::straddles_viewport_top)
    }

    /// Index of the section to scroll to, or `None` at either end.
    pub fn adjacent(&self, direction: PagerDirection) -> Option<usize> {
        let current = self.current_index()?;
        match direction {
            PagerDirection::Previous => current.checked_sub(1),
            PagerDirection::Next => Some(current + 1).filter(|idx| *idx < self.sections.len()),
        }
    }
}
