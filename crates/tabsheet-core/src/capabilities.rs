//! Worksheet capabilities without an implementation yet
//!
//! Each trait groups one feature area of the broader worksheet API. Every
//! method has a default body that returns [`Error::Unimplemented`] and leaves
//! the document untouched, so [`Worksheet`](crate::Worksheet) can declare the
//! full surface today while a real implementation overrides a trait later.

use crate::cell::CellRange;
use crate::error::{Error, Result};

/// Merged cell regions
pub trait MergedRegions {
    /// Merge a range, returning the index of the new region
    fn add_merged_region(&mut self, _range: CellRange) -> Result<usize> {
        Err(Error::Unimplemented("merged regions"))
    }

    /// The region at `index`
    fn merged_region(&self, _index: usize) -> Result<CellRange> {
        Err(Error::Unimplemented("merged regions"))
    }

    /// Number of merged regions
    fn merged_region_count(&self) -> Result<usize> {
        Err(Error::Unimplemented("merged regions"))
    }

    /// Remove the region at `index`
    fn remove_merged_region(&mut self, _index: usize) -> Result<()> {
        Err(Error::Unimplemented("merged regions"))
    }
}

/// Row and column outline grouping
pub trait Outline {
    fn group_rows(&mut self, _from: u32, _to: u32) -> Result<()> {
        Err(Error::Unimplemented("row grouping"))
    }

    fn ungroup_rows(&mut self, _from: u32, _to: u32) -> Result<()> {
        Err(Error::Unimplemented("row grouping"))
    }

    fn set_row_group_collapsed(&mut self, _row: u32, _collapsed: bool) -> Result<()> {
        Err(Error::Unimplemented("row grouping"))
    }

    fn group_columns(&mut self, _from: u16, _to: u16) -> Result<()> {
        Err(Error::Unimplemented("column grouping"))
    }

    fn ungroup_columns(&mut self, _from: u16, _to: u16) -> Result<()> {
        Err(Error::Unimplemented("column grouping"))
    }

    fn set_column_group_collapsed(&mut self, _col: u16, _collapsed: bool) -> Result<()> {
        Err(Error::Unimplemented("column grouping"))
    }

    /// Summary rows appear below detail rows
    fn row_sums_below(&self) -> Result<bool> {
        Err(Error::Unimplemented("outline summary placement"))
    }

    /// Summary columns appear right of detail columns
    fn row_sums_right(&self) -> Result<bool> {
        Err(Error::Unimplemented("outline summary placement"))
    }
}

/// Print and display flags
pub trait PrintOptions {
    fn print_gridlines(&self) -> Result<bool> {
        Err(Error::Unimplemented("print options"))
    }

    fn set_print_gridlines(&mut self, _print: bool) -> Result<()> {
        Err(Error::Unimplemented("print options"))
    }

    fn horizontally_center(&self) -> Result<bool> {
        Err(Error::Unimplemented("print options"))
    }

    fn set_horizontally_center(&mut self, _center: bool) -> Result<()> {
        Err(Error::Unimplemented("print options"))
    }

    fn vertically_center(&self) -> Result<bool> {
        Err(Error::Unimplemented("print options"))
    }

    fn set_vertically_center(&mut self, _center: bool) -> Result<()> {
        Err(Error::Unimplemented("print options"))
    }

    fn display_formulas(&self) -> Result<bool> {
        Err(Error::Unimplemented("display options"))
    }

    fn set_display_formulas(&mut self, _show: bool) -> Result<()> {
        Err(Error::Unimplemented("display options"))
    }

    fn display_row_col_headings(&self) -> Result<bool> {
        Err(Error::Unimplemented("display options"))
    }

    fn set_display_row_col_headings(&mut self, _show: bool) -> Result<()> {
        Err(Error::Unimplemented("display options"))
    }
}

/// Frozen and split panes, zoom and scroll position
pub trait PaneLayout {
    fn create_freeze_pane(
        &mut self,
        _col_split: u16,
        _row_split: u32,
        _leftmost_col: u16,
        _top_row: u32,
    ) -> Result<()> {
        Err(Error::Unimplemented("freeze panes"))
    }

    fn create_split_pane(&mut self, _x_split: u32, _y_split: u32) -> Result<()> {
        Err(Error::Unimplemented("split panes"))
    }

    fn set_zoom(&mut self, _numerator: u32, _denominator: u32) -> Result<()> {
        Err(Error::Unimplemented("zoom"))
    }

    fn show_in_pane(&mut self, _top_row: u32, _left_col: u16) -> Result<()> {
        Err(Error::Unimplemented("scroll position"))
    }
}

/// Drawings and automatic sizing
pub trait DrawingCanvas {
    /// Create the drawing layer, returning its relationship id
    fn create_drawing(&mut self) -> Result<String> {
        Err(Error::Unimplemented("drawings"))
    }

    fn auto_size_column(&mut self, _col: u16) -> Result<()> {
        Err(Error::Unimplemented("column auto-sizing"))
    }
}

/// Sheet protection
pub trait SheetProtection {
    fn protect_sheet(&mut self, _password: &str) -> Result<()> {
        Err(Error::Unimplemented("sheet protection"))
    }

    fn is_protected(&self) -> Result<bool> {
        Err(Error::Unimplemented("sheet protection"))
    }
}
