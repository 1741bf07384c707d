//! Manual page breaks
//!
//! `<rowBreaks>` and `<colBreaks>` hold one `<brk>` per forced break. Each list
//! is a set: positions are unique, and only membership matters.

use crate::{MAX_COLS, MAX_ROWS};

/// Which axis a break list applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakAxis {
    /// Breaks between rows (`<rowBreaks>`)
    Row,
    /// Breaks between columns (`<colBreaks>`)
    Column,
}

impl BreakAxis {
    /// Default `max` attribute for a break on this axis: a row break spans
    /// every column and a column break spans every row.
    pub fn span_max(self) -> u32 {
        match self {
            BreakAxis::Row => MAX_COLS as u32 - 1,
            BreakAxis::Column => MAX_ROWS - 1,
        }
    }
}

/// A single `<brk>` node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakNode {
    /// Break position (0-based row or column index)
    pub id: u32,
    /// First cell of the break span on the other axis
    pub min: u32,
    /// Last cell of the break span on the other axis
    pub max: u32,
    /// Manually inserted break
    pub manual: bool,
}

/// A `<rowBreaks>` or `<colBreaks>` node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageBreaks {
    axis: BreakAxis,
    breaks: Vec<BreakNode>,
}

impl PageBreaks {
    /// Create an empty break list for an axis
    pub fn new(axis: BreakAxis) -> Self {
        Self {
            axis,
            breaks: Vec::new(),
        }
    }

    /// Create a break list from existing nodes (as read from a document)
    pub fn from_nodes(axis: BreakAxis, breaks: Vec<BreakNode>) -> Self {
        Self { axis, breaks }
    }

    /// The axis this list applies to
    pub fn axis(&self) -> BreakAxis {
        self.axis
    }

    /// The `<brk>` nodes in document order
    pub fn nodes(&self) -> &[BreakNode] {
        &self.breaks
    }

    /// Check if a break exists at `position`
    pub fn is_broken(&self, position: u32) -> bool {
        self.breaks.iter().any(|b| b.id == position)
    }

    /// Add a manual break at `position`; no-op if one already exists
    pub fn set_break(&mut self, position: u32) {
        if self.is_broken(position) {
            return;
        }
        self.breaks.push(BreakNode {
            id: position,
            min: 0,
            max: self.axis.span_max(),
            manual: true,
        });
    }

    /// Remove the break at `position`; no-op if absent
    pub fn remove_break(&mut self, position: u32) {
        self.breaks.retain(|b| b.id != position);
    }

    /// Snapshot of all break positions, or None if there are none
    pub fn all_breaks(&self) -> Option<Vec<u32>> {
        if self.breaks.is_empty() {
            return None;
        }
        Some(self.breaks.iter().map(|b| b.id).collect())
    }

    /// Number of breaks
    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    /// Check if there are no breaks
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// Number of manual breaks (the `manualBreakCount` attribute)
    pub fn manual_count(&self) -> usize {
        self.breaks.iter().filter(|b| b.manual).count()
    }
}
