//! Worksheet type

use crate::breaks::{BreakAxis, PageBreaks};
use crate::capabilities::{
    DrawingCanvas, MergedRegions, Outline, PaneLayout, PrintOptions, SheetProtection,
};
use crate::defaults::SheetDefaults;
use crate::error::{Error, Result};
use crate::header_footer::{HeaderFooter, HeaderFooterKind, HeaderFooterMut, HeaderFooterNode};
use crate::margins::{Margin, PageMargins};
use crate::row::{Row, RowMut, RowStore, Rows};
use crate::tree::{PageSetUpPr, WorksheetTree};
use crate::views::SheetView;
use crate::{DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT, MAX_COLS, MAX_ROWS, MAX_ROW_HEIGHT};

/// A worksheet (single sheet in a workbook)
///
/// The worksheet owns its document tree and the row index built over it.
/// All row changes go through the worksheet so the two stay aligned; layout
/// settings are read and written directly on the matching tree node.
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Backing document tree
    tree: WorksheetTree,
    /// Row index over `tree.sheet_data`
    rows: RowStore,
}

impl Worksheet {
    /// Create a new worksheet with the given name and default layout
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_defaults(name, &SheetDefaults::default())
    }

    /// Create a new worksheet using explicit construction defaults
    pub fn with_defaults<S: Into<String>>(name: S, defaults: &SheetDefaults) -> Self {
        let name = name.into();
        log::debug!("creating worksheet '{}'", name);
        Self {
            name,
            tree: WorksheetTree::with_defaults(defaults),
            rows: RowStore::default(),
        }
    }

    /// Wrap an existing document tree, indexing its rows once
    pub fn from_tree<S: Into<String>>(name: S, tree: WorksheetTree) -> Self {
        let name = name.into();
        let rows = RowStore::hydrate(&tree.sheet_data);
        log::debug!(
            "loaded worksheet '{}' with {} rows",
            name,
            rows.physical_count()
        );
        Self { name, tree, rows }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// The backing document tree
    pub fn tree(&self) -> &WorksheetTree {
        &self.tree
    }

    /// Consume the worksheet, returning its document tree
    pub fn into_tree(self) -> WorksheetTree {
        self.tree
    }

    // ==================== Rows ====================

    /// Create an empty row, replacing any existing row with the same number
    pub fn create_row(&mut self, row_num: u32) -> Result<RowMut<'_>> {
        if row_num >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row_num, MAX_ROWS - 1));
        }
        Ok(self
            .rows
            .create_or_replace(&mut self.tree.sheet_data, row_num))
    }

    /// Get a row by number
    pub fn row(&self, row_num: u32) -> Option<Row<'_>> {
        self.rows.get(&self.tree.sheet_data, row_num)
    }

    /// Get a mutable row by number
    pub fn row_mut(&mut self, row_num: u32) -> Option<RowMut<'_>> {
        self.rows.get_mut(&mut self.tree.sheet_data, row_num)
    }

    /// Remove the row with the given number, returning how many rows were removed
    ///
    /// More than one row is removed only when the loaded document repeated a
    /// row number.
    pub fn remove_row(&mut self, row_num: u32) -> usize {
        self.rows.remove(&mut self.tree.sheet_data, row_num)
    }

    /// Iterate rows in ascending row order
    pub fn rows(&self) -> Rows<'_> {
        self.rows.iter(&self.tree.sheet_data)
    }

    /// Number of the first row, or None if the sheet has no rows
    pub fn first_row_num(&self) -> Option<u32> {
        self.rows.first_row_num()
    }

    /// Number of the last row, or None if the sheet has no rows
    pub fn last_row_num(&self) -> Option<u32> {
        self.rows.last_row_num()
    }

    /// Number of rows actually present
    pub fn physical_row_count(&self) -> usize {
        self.rows.physical_count()
    }

    /// The row index
    pub fn row_store(&self) -> &RowStore {
        &self.rows
    }

    // ==================== Page breaks ====================

    /// The break list for an axis, if the document has one
    pub fn page_breaks(&self, axis: BreakAxis) -> Option<&PageBreaks> {
        self.tree.breaks(axis)
    }

    /// Check for a manual break after `row`
    pub fn is_row_broken(&self, row: u32) -> bool {
        self.tree
            .breaks(BreakAxis::Row)
            .map_or(false, |b| b.is_broken(row))
    }

    /// Add a manual break after `row`
    pub fn set_row_break(&mut self, row: u32) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        self.tree.breaks_mut(BreakAxis::Row).set_break(row);
        Ok(())
    }

    /// Remove the manual break after `row`
    pub fn remove_row_break(&mut self, row: u32) {
        if let Some(breaks) = self.tree.row_breaks.as_mut() {
            breaks.remove_break(row);
        }
    }

    /// All row breaks, or None if there are none
    pub fn row_breaks(&self) -> Option<Vec<u32>> {
        self.tree.breaks(BreakAxis::Row).and_then(|b| b.all_breaks())
    }

    /// Check for a manual break after `col`
    pub fn is_column_broken(&self, col: u16) -> bool {
        self.tree
            .breaks(BreakAxis::Column)
            .map_or(false, |b| b.is_broken(col as u32))
    }

    /// Add a manual break after `col`
    pub fn set_column_break(&mut self, col: u16) -> Result<()> {
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u32, MAX_COLS as u32 - 1));
        }
        self.tree.breaks_mut(BreakAxis::Column).set_break(col as u32);
        Ok(())
    }

    /// Remove the manual break after `col`
    pub fn remove_column_break(&mut self, col: u16) {
        if let Some(breaks) = self.tree.col_breaks.as_mut() {
            breaks.remove_break(col as u32);
        }
    }

    /// All column breaks, or None if there are none
    pub fn column_breaks(&self) -> Option<Vec<u16>> {
        self.tree
            .breaks(BreakAxis::Column)
            .and_then(|b| b.all_breaks())
            .map(|ids| ids.into_iter().filter_map(|id| u16::try_from(id).ok()).collect())
    }

    // ==================== Margins ====================

    /// Get a page margin in inches
    pub fn margin(&self, margin: Margin) -> f64 {
        self.tree.page_margins.unwrap_or_default().get(margin)
    }

    /// Set a page margin in inches
    pub fn set_margin(&mut self, margin: Margin, value: f64) {
        self.tree
            .page_margins
            .get_or_insert_with(PageMargins::default)
            .set(margin, value);
    }

    /// Get a page margin by legacy id (0 = left ... 5 = footer)
    pub fn margin_by_id(&self, id: i16) -> Result<f64> {
        Ok(self.margin(Margin::try_from(id)?))
    }

    /// Set a page margin by legacy id (0 = left ... 5 = footer)
    pub fn set_margin_by_id(&mut self, id: i16, value: f64) -> Result<()> {
        self.set_margin(Margin::try_from(id)?, value);
        Ok(())
    }

    // ==================== Headers and footers ====================

    /// View of one header or footer string
    pub fn header_footer(&self, kind: HeaderFooterKind) -> HeaderFooter<'_> {
        HeaderFooter::new(self.tree.header_footer.as_ref(), kind)
    }

    /// Mutable view of one header or footer string
    pub fn header_footer_mut(&mut self, kind: HeaderFooterKind) -> HeaderFooterMut<'_> {
        let node = self
            .tree
            .header_footer
            .get_or_insert_with(HeaderFooterNode::default);
        HeaderFooterMut::new(node, kind)
    }

    /// The header (same as the odd-page header)
    pub fn header(&self) -> HeaderFooter<'_> {
        self.odd_header()
    }

    /// Mutable header (same as the odd-page header)
    pub fn header_mut(&mut self) -> HeaderFooterMut<'_> {
        self.header_footer_mut(HeaderFooterKind::OddHeader)
    }

    pub fn odd_header(&self) -> HeaderFooter<'_> {
        self.header_footer(HeaderFooterKind::OddHeader)
    }

    pub fn even_header(&self) -> HeaderFooter<'_> {
        self.header_footer(HeaderFooterKind::EvenHeader)
    }

    pub fn first_header(&self) -> HeaderFooter<'_> {
        self.header_footer(HeaderFooterKind::FirstHeader)
    }

    /// The footer (same as the odd-page footer)
    pub fn footer(&self) -> HeaderFooter<'_> {
        self.odd_footer()
    }

    /// Mutable footer (same as the odd-page footer)
    pub fn footer_mut(&mut self) -> HeaderFooterMut<'_> {
        self.header_footer_mut(HeaderFooterKind::OddFooter)
    }

    pub fn odd_footer(&self) -> HeaderFooter<'_> {
        self.header_footer(HeaderFooterKind::OddFooter)
    }

    pub fn even_footer(&self) -> HeaderFooter<'_> {
        self.header_footer(HeaderFooterKind::EvenFooter)
    }

    pub fn first_footer(&self) -> HeaderFooter<'_> {
        self.header_footer(HeaderFooterKind::FirstFooter)
    }

    // ==================== Views ====================

    /// The default (last) sheet view
    pub fn default_view(&self) -> Option<&SheetView> {
        self.tree.sheet_views.as_ref()?.default_view()
    }

    /// Whether the sheet tab is selected in the default view
    pub fn is_tab_selected(&self) -> bool {
        self.tree
            .sheet_views
            .as_ref()
            .map_or(false, |v| v.is_tab_selected())
    }

    /// Select or deselect the sheet tab in every view
    pub fn set_tab_selected(&mut self, selected: bool) {
        if let Some(views) = self.tree.sheet_views.as_mut() {
            views.set_tab_selected(selected);
        }
    }

    // ==================== Columns ====================

    /// Column width in characters (falls back to the sheet default)
    pub fn column_width(&self, col: u16) -> f64 {
        self.tree
            .cols
            .as_ref()
            .and_then(|c| c.width(col))
            .unwrap_or_else(|| self.default_column_width())
    }

    /// Set a column width in characters
    pub fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        Self::validate_column(col)?;
        self.tree.cols.get_or_insert_with(Default::default).set_width(col, width);
        Ok(())
    }

    /// Check if a column is hidden
    pub fn is_column_hidden(&self, col: u16) -> bool {
        self.tree.cols.as_ref().map_or(false, |c| c.is_hidden(col))
    }

    /// Hide or show a column
    pub fn set_column_hidden(&mut self, col: u16, hidden: bool) -> Result<()> {
        Self::validate_column(col)?;
        self.tree.cols.get_or_insert_with(Default::default).set_hidden(col, hidden);
        Ok(())
    }

    fn validate_column(col: u16) -> Result<()> {
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u32, MAX_COLS as u32 - 1));
        }
        Ok(())
    }

    // ==================== Sheet format ====================

    /// Default column width in characters
    pub fn default_column_width(&self) -> f64 {
        self.tree
            .sheet_format_pr
            .as_ref()
            .and_then(|f| f.default_col_width)
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Set the default column width in characters
    pub fn set_default_column_width(&mut self, width: f64) {
        self.tree.sheet_format_pr_mut().default_col_width = Some(width);
    }

    /// Default row height in twips (1/20 of a point)
    ///
    /// Heights read from a file outside `0..=MAX_ROW_HEIGHT` are clamped.
    pub fn default_row_height(&self) -> u16 {
        let points = self.default_row_height_in_points();
        let points = if points.is_nan() {
            DEFAULT_ROW_HEIGHT
        } else {
            points.clamp(0.0, MAX_ROW_HEIGHT)
        };
        (points * 20.0).round() as u16
    }

    /// Set the default row height in twips (1/20 of a point)
    pub fn set_default_row_height(&mut self, twips: u16) -> Result<()> {
        self.set_default_row_height_in_points(twips as f64 / 20.0)
    }

    /// Default row height in points
    pub fn default_row_height_in_points(&self) -> f64 {
        self.tree
            .sheet_format_pr
            .as_ref()
            .map_or(DEFAULT_ROW_HEIGHT, |f| f.default_row_height)
    }

    /// Set the default row height in points
    pub fn set_default_row_height_in_points(&mut self, points: f64) -> Result<()> {
        if !(0.0..=MAX_ROW_HEIGHT).contains(&points) {
            return Err(Error::InvalidArgument(format!(
                "row height must be between 0 and {} points, got {}",
                MAX_ROW_HEIGHT, points
            )));
        }
        let format = self.tree.sheet_format_pr_mut();
        format.default_row_height = points;
        format.custom_height = true;
        Ok(())
    }

    // ==================== Page setup ====================

    fn page_set_up_pr(&self) -> PageSetUpPr {
        self.tree
            .sheet_pr
            .as_ref()
            .and_then(|p| p.page_set_up_pr)
            .unwrap_or_default()
    }

    /// Whether automatic page breaks are shown
    pub fn autobreaks(&self) -> bool {
        self.page_set_up_pr().auto_page_breaks
    }

    /// Show or hide automatic page breaks
    pub fn set_autobreaks(&mut self, value: bool) {
        self.tree.page_set_up_pr_mut().auto_page_breaks = value;
    }

    /// Whether printing scales the sheet to fit the page
    pub fn fit_to_page(&self) -> bool {
        self.page_set_up_pr().fit_to_page
    }

    /// Scale (or stop scaling) the sheet to fit the page when printing
    pub fn set_fit_to_page(&mut self, value: bool) {
        self.tree.page_set_up_pr_mut().fit_to_page = value;
    }
}

impl MergedRegions for Worksheet {}
impl Outline for Worksheet {}
impl PrintOptions for Worksheet {}
impl PaneLayout for Worksheet {}
impl DrawingCanvas for Worksheet {}
impl SheetProtection for Worksheet {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CellRange, CellValue};
    use crate::row::{RowNode, SheetData};
    use crate::views::{SheetView, SheetViews};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new("Test");
        assert_eq!(ws.name(), "Test");
        assert_eq!(ws.physical_row_count(), 0);
        assert_eq!(ws.first_row_num(), None);
        assert_eq!(ws.last_row_num(), None);
    }

    #[test]
    fn test_default_sizing() {
        let mut ws = Worksheet::new("Test");
        assert_eq!(ws.default_column_width(), 13.0);
        assert_eq!(ws.default_row_height(), 300);
        assert_eq!(ws.default_row_height_in_points(), 15.0);

        ws.set_default_row_height(400).unwrap();
        assert_eq!(ws.default_row_height_in_points(), 20.0);
        ws.set_default_column_width(9.5);
        assert_eq!(ws.default_column_width(), 9.5);
    }

    #[test]
    fn test_default_row_height_bounds() {
        let mut ws = Worksheet::new("Test");
        ws.set_default_row_height_in_points(409.0).unwrap();
        assert_eq!(ws.default_row_height(), 8180);

        for points in [409.5, -1.0, f64::NAN, f64::INFINITY] {
            assert!(ws.set_default_row_height_in_points(points).is_err());
        }
        assert!(ws.set_default_row_height(u16::MAX).is_err());
        assert_eq!(ws.default_row_height_in_points(), 409.0);

        // Out-of-range heights that arrive through the tree are clamped
        ws.tree.sheet_format_pr_mut().default_row_height = 5000.0;
        assert_eq!(ws.default_row_height(), 8180);
        ws.tree.sheet_format_pr_mut().default_row_height = -3.0;
        assert_eq!(ws.default_row_height(), 0);
        ws.tree.sheet_format_pr_mut().default_row_height = f64::NAN;
        assert_eq!(ws.default_row_height(), 300);
    }

    #[test]
    fn test_column_breaks_ignore_ids_outside_columns() {
        let mut ws = Worksheet::new("Test");
        ws.set_column_break(3).unwrap();
        ws.tree
            .col_breaks
            .as_mut()
            .unwrap()
            .set_break(70_000);
        assert_eq!(ws.column_breaks(), Some(vec![3]));
    }

    #[test]
    fn test_create_rows_in_order() {
        let mut ws = Worksheet::new("Test");
        ws.create_row(9).unwrap();
        ws.create_row(2).unwrap();
        ws.create_row(5).unwrap();

        let nums: Vec<u32> = ws.rows().map(|r| r.row_num()).collect();
        assert_eq!(nums, vec![2, 5, 9]);
        let tree_nums: Vec<u32> = ws.tree().sheet_data.rows.iter().map(|r| r.row_num).collect();
        assert_eq!(tree_nums, nums);
    }

    #[test]
    fn test_recreate_row_discards_cells() {
        let mut ws = Worksheet::new("Test");
        ws.create_row(3).unwrap().set_cell_value(0, "keep?");
        assert_eq!(
            ws.row(3).unwrap().cell(0).unwrap().value,
            CellValue::String("keep?".into())
        );

        ws.create_row(3).unwrap();
        assert_eq!(ws.physical_row_count(), 1);
        assert!(ws.row(3).unwrap().cell(0).is_none());
    }

    #[test]
    fn test_create_row_out_of_bounds() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.create_row(MAX_ROWS).is_err());
        assert_eq!(ws.physical_row_count(), 0);
    }

    #[test]
    fn test_physical_count_with_gap() {
        let mut ws = Worksheet::new("Test");
        ws.create_row(2).unwrap();
        ws.create_row(9).unwrap();
        assert_eq!(ws.physical_row_count(), 2);
        assert_eq!(ws.first_row_num(), Some(2));
        assert_eq!(ws.last_row_num(), Some(9));
    }

    #[test]
    fn test_remove_row() {
        let mut ws = Worksheet::new("Test");
        ws.create_row(1).unwrap();
        ws.create_row(2).unwrap();

        assert_eq!(ws.remove_row(1), 1);
        assert!(ws.row(1).is_none());
        assert_eq!(ws.remove_row(1), 0);
        assert_eq!(ws.tree().sheet_data.rows.len(), 1);
    }

    #[test]
    fn test_loaded_rows_are_indexed() {
        let mut tree = WorksheetTree::empty();
        tree.sheet_data = SheetData {
            rows: vec![RowNode::new(0), RowNode::new(4)],
        };
        let mut ws = Worksheet::from_tree("Loaded", tree);
        assert_eq!(ws.physical_row_count(), 2);

        ws.create_row(2).unwrap();
        let nums: Vec<u32> = ws.rows().map(|r| r.row_num()).collect();
        assert_eq!(nums, vec![0, 2, 4]);
    }

    #[test]
    fn test_row_breaks() {
        let mut ws = Worksheet::new("Test");
        assert_eq!(ws.row_breaks(), None);

        ws.set_row_break(10).unwrap();
        ws.set_row_break(10).unwrap();
        ws.set_row_break(20).unwrap();
        assert_eq!(ws.row_breaks(), Some(vec![10, 20]));
        assert!(ws.is_row_broken(20));
        assert!(!ws.is_column_broken(20));

        ws.remove_row_break(10);
        ws.remove_row_break(11);
        assert_eq!(ws.row_breaks(), Some(vec![20]));
    }

    #[test]
    fn test_column_breaks() {
        let mut ws = Worksheet::new("Test");
        ws.set_column_break(4).unwrap();
        assert!(ws.is_column_broken(4));
        assert_eq!(ws.column_breaks(), Some(vec![4]));
        assert!(ws.row_breaks().is_none());

        assert!(ws.set_column_break(MAX_COLS).is_err());

        ws.remove_column_break(4);
        assert_eq!(ws.column_breaks(), None);
    }

    #[test]
    fn test_breaks_on_sheet_without_break_nodes() {
        let mut ws = Worksheet::from_tree("Bare", WorksheetTree::empty());
        assert!(!ws.is_row_broken(1));
        ws.remove_row_break(1);
        assert!(ws.tree().row_breaks.is_none());

        ws.set_row_break(1).unwrap();
        assert!(ws.is_row_broken(1));
    }

    #[test]
    fn test_margins_independent() {
        let mut ws = Worksheet::new("Test");
        for (i, margin) in Margin::ALL.iter().enumerate() {
            ws.set_margin(*margin, i as f64 + 0.5);
        }
        for (i, margin) in Margin::ALL.iter().enumerate() {
            assert_eq!(ws.margin(*margin), i as f64 + 0.5);
        }

        ws.set_margin(Margin::Left, 3.0);
        assert_eq!(ws.margin(Margin::Left), 3.0);
        assert_eq!(ws.margin(Margin::Right), 1.5);
    }

    #[test]
    fn test_margin_by_id() {
        let mut ws = Worksheet::new("Test");
        ws.set_margin_by_id(2, 0.75).unwrap();
        assert_eq!(ws.margin_by_id(2).unwrap(), 0.75);
        assert_eq!(ws.margin(Margin::Top), 0.75);
        assert_eq!(ws.margin(Margin::Bottom), 0.0);

        assert!(matches!(ws.margin_by_id(6), Err(Error::InvalidMargin(_))));
        assert!(ws.set_margin_by_id(-1, 1.0).is_err());
    }

    #[test]
    fn test_header_aliases_odd() {
        let mut ws = Worksheet::new("Test");
        ws.header_mut().set_center("Budget");
        ws.footer_mut().set_text("&RPage &P");
        ws.header_footer_mut(HeaderFooterKind::FirstHeader).set_left("Cover");

        assert_eq!(ws.odd_header().center(), "Budget");
        assert_eq!(ws.header().text(), ws.odd_header().text());
        assert_eq!(ws.odd_footer().right(), "Page &P");
        assert_eq!(ws.first_header().left(), "Cover");
        assert_eq!(ws.even_header().text(), "");
        assert_eq!(ws.even_footer().text(), "");
        assert_eq!(ws.first_footer().text(), "");
    }

    #[test]
    fn test_default_view_and_tab_selection() {
        let mut tree = WorksheetTree::empty();
        tree.sheet_views = Some(SheetViews {
            views: vec![SheetView::new(0), SheetView::new(1), SheetView::new(2)],
        });
        let mut ws = Worksheet::from_tree("Views", tree);

        assert_eq!(ws.default_view().unwrap().workbook_view_id, 2);
        assert!(!ws.is_tab_selected());

        ws.set_tab_selected(true);
        let views = &ws.tree().sheet_views.as_ref().unwrap().views;
        assert!(views.iter().all(|v| v.tab_selected));
        assert!(ws.is_tab_selected());
    }

    #[test]
    fn test_no_views() {
        let mut ws = Worksheet::from_tree("Bare", WorksheetTree::empty());
        assert!(ws.default_view().is_none());
        ws.set_tab_selected(true);
        assert!(!ws.is_tab_selected());
    }

    #[test]
    fn test_column_properties() {
        let mut ws = Worksheet::new("Test");
        assert_eq!(ws.column_width(0), 13.0);
        assert_eq!(ws.column_width(10), 13.0);

        ws.set_column_width(1, 25.0).unwrap();
        assert_eq!(ws.column_width(0), 13.0);
        assert_eq!(ws.column_width(1), 25.0);

        ws.set_column_hidden(7, true).unwrap();
        assert!(ws.is_column_hidden(7));
        assert!(!ws.is_column_hidden(6));
        assert!(ws.set_column_width(MAX_COLS, 1.0).is_err());
    }

    #[test]
    fn test_page_setup_flags() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.autobreaks());
        assert!(!ws.fit_to_page());

        ws.set_autobreaks(false);
        ws.set_fit_to_page(true);
        assert!(!ws.autobreaks());
        assert!(ws.fit_to_page());
    }

    #[test]
    fn test_unimplemented_capabilities_leave_tree_alone() {
        let mut ws = Worksheet::new("Test");
        ws.create_row(0).unwrap();
        let before = ws.tree().clone();

        let range = CellRange::parse("A1:B2").unwrap();
        assert!(ws.add_merged_region(range).unwrap_err().is_unimplemented());
        assert!(ws.merged_region_count().unwrap_err().is_unimplemented());
        assert!(ws.group_rows(0, 3).unwrap_err().is_unimplemented());
        assert!(ws.set_print_gridlines(true).unwrap_err().is_unimplemented());
        assert!(ws.create_freeze_pane(1, 1, 1, 1).unwrap_err().is_unimplemented());
        assert!(ws.create_drawing().unwrap_err().is_unimplemented());
        assert!(ws.protect_sheet("secret").unwrap_err().is_unimplemented());

        assert_eq!(ws.tree(), &before);
    }
}
