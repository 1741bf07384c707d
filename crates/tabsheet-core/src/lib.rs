//! # tabsheet-core
//!
//! Worksheet model for the tabsheet spreadsheet library.
//!
//! A [`Worksheet`] wraps one parsed worksheet document ([`WorksheetTree`]) and
//! keeps it consistent while it is edited:
//! - rows are kept in ascending row-number order, with the row index and the
//!   document's `<sheetData>` aligned position for position
//! - manual row and column page breaks behave as sets
//! - the six page margins are read and written one at a time
//! - header/footer accessors are views over one shared `<headerFooter>` node
//! - the last `<sheetView>` is the default view; tab selection applies to all
//!
//! ## Example
//!
//! ```rust
//! use tabsheet_core::{Margin, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.create_row(4).unwrap().set_cell_value(0, "Total");
//! sheet.create_row(1).unwrap();
//! assert_eq!(sheet.first_row_num(), Some(1));
//! assert_eq!(sheet.last_row_num(), Some(4));
//!
//! sheet.set_row_break(4).unwrap();
//! sheet.set_margin(Margin::Left, 0.5);
//! sheet.header_mut().set_center("Budget");
//! ```

pub mod breaks;
pub mod capabilities;
pub mod cell;
pub mod column;
pub mod defaults;
pub mod error;
pub mod header_footer;
pub mod margins;
pub mod row;
pub mod tree;
pub mod views;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use breaks::{BreakAxis, BreakNode, PageBreaks};
pub use capabilities::{
    DrawingCanvas, MergedRegions, Outline, PaneLayout, PrintOptions, SheetProtection,
};
pub use cell::{CellAddress, CellNode, CellRange, CellValue};
pub use column::{Col, Cols};
pub use defaults::SheetDefaults;
pub use error::{Error, Result};
pub use header_footer::{HeaderFooter, HeaderFooterKind, HeaderFooterMut, HeaderFooterNode, Sections};
pub use margins::{Margin, PageMargins};
pub use row::{Row, RowMut, RowNode, RowStore, Rows, SheetData};
pub use tree::{PageSetUpPr, SheetFormatPr, SheetPr, WorksheetTree};
pub use views::{Selection, SheetView, SheetViews};
pub use workbook::{Workbook, WorkbookSettings};
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Column width used when neither the column nor the sheet sets one
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// Row height in points used when the sheet sets none
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Largest row height in points
pub const MAX_ROW_HEIGHT: f64 = 409.0;
