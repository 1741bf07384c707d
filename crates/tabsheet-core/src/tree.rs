//! The worksheet document tree
//!
//! [`WorksheetTree`] mirrors the SpreadsheetML `<worksheet>` element: one field
//! per child the worksheet model reads or writes. Optional children are
//! `None` when absent from the document. The XLSX crate parses into and
//! serializes from this tree; the worksheet model only mutates it.

use crate::breaks::{BreakAxis, PageBreaks};
use crate::column::{Col, Cols};
use crate::defaults::SheetDefaults;
use crate::header_footer::HeaderFooterNode;
use crate::margins::PageMargins;
use crate::row::SheetData;
use crate::views::{Selection, SheetView, SheetViews};

/// The `<pageSetUpPr>` node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSetUpPr {
    /// Show automatic page breaks
    pub auto_page_breaks: bool,
    /// Scale the print area to fit the page
    pub fit_to_page: bool,
}

impl Default for PageSetUpPr {
    fn default() -> Self {
        Self {
            auto_page_breaks: true,
            fit_to_page: false,
        }
    }
}

/// The `<sheetPr>` node
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetPr {
    /// Tab color as an ARGB hex string
    pub tab_color: Option<String>,
    pub page_set_up_pr: Option<PageSetUpPr>,
}

/// The `<sheetFormatPr>` node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetFormatPr {
    /// Default column width in characters
    pub default_col_width: Option<f64>,
    /// Default row height in points
    pub default_row_height: f64,
    /// Default row height was set explicitly
    pub custom_height: bool,
    /// Base column width in characters
    pub base_col_width: Option<u32>,
}

impl Default for SheetFormatPr {
    fn default() -> Self {
        Self {
            default_col_width: None,
            default_row_height: 15.0,
            custom_height: false,
            base_col_width: None,
        }
    }
}

/// A parsed `<worksheet>` element
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorksheetTree {
    pub sheet_pr: Option<SheetPr>,
    pub sheet_views: Option<SheetViews>,
    pub sheet_format_pr: Option<SheetFormatPr>,
    pub cols: Option<Cols>,
    pub sheet_data: SheetData,
    pub page_margins: Option<PageMargins>,
    pub header_footer: Option<HeaderFooterNode>,
    pub row_breaks: Option<PageBreaks>,
    pub col_breaks: Option<PageBreaks>,
}

impl WorksheetTree {
    /// A bare `<worksheet>` with an empty `<sheetData>` and nothing else
    pub fn empty() -> Self {
        Self {
            sheet_pr: None,
            sheet_views: None,
            sheet_format_pr: None,
            cols: None,
            sheet_data: SheetData::new(),
            page_margins: None,
            header_footer: None,
            row_breaks: None,
            col_breaks: None,
        }
    }

    /// The tree for a brand new worksheet
    pub fn with_defaults(defaults: &SheetDefaults) -> Self {
        let mut view = SheetView::new(0);
        view.zoom_scale = Some(defaults.zoom_scale);
        view.selections.push(Selection {
            active_cell: Some(defaults.active_cell.clone()),
            ..Default::default()
        });

        let cols = defaults
            .initial_column_spans
            .iter()
            .map(|&(min, max)| Col::range(min, max).with_width(defaults.initial_column_width))
            .collect();

        Self {
            sheet_pr: Some(SheetPr {
                tab_color: None,
                page_set_up_pr: Some(PageSetUpPr::default()),
            }),
            sheet_views: Some(SheetViews { views: vec![view] }),
            sheet_format_pr: Some(SheetFormatPr {
                default_col_width: Some(defaults.default_column_width),
                default_row_height: defaults.default_row_height,
                custom_height: true,
                base_col_width: None,
            }),
            cols: Some(Cols { cols }),
            sheet_data: SheetData::new(),
            page_margins: Some(defaults.margins),
            header_footer: Some(HeaderFooterNode::default()),
            row_breaks: Some(PageBreaks::new(BreakAxis::Row)),
            col_breaks: Some(PageBreaks::new(BreakAxis::Column)),
        }
    }

    /// The `<pageSetUpPr>` node, created if missing
    pub fn page_set_up_pr_mut(&mut self) -> &mut PageSetUpPr {
        self.sheet_pr
            .get_or_insert_with(SheetPr::default)
            .page_set_up_pr
            .get_or_insert_with(PageSetUpPr::default)
    }

    /// The `<sheetFormatPr>` node, created if missing
    pub fn sheet_format_pr_mut(&mut self) -> &mut SheetFormatPr {
        self.sheet_format_pr.get_or_insert_with(SheetFormatPr::default)
    }

    /// The break list for an axis, if present
    pub fn breaks(&self, axis: BreakAxis) -> Option<&PageBreaks> {
        match axis {
            BreakAxis::Row => self.row_breaks.as_ref(),
            BreakAxis::Column => self.col_breaks.as_ref(),
        }
    }

    /// The break list for an axis, created if missing
    pub fn breaks_mut(&mut self, axis: BreakAxis) -> &mut PageBreaks {
        let slot = match axis {
            BreakAxis::Row => &mut self.row_breaks,
            BreakAxis::Column => &mut self.col_breaks,
        };
        slot.get_or_insert_with(|| PageBreaks::new(axis))
    }
}

impl Default for WorksheetTree {
    fn default() -> Self {
        Self::with_defaults(&SheetDefaults::default())
    }
}
