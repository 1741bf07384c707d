//! # tabsheet-xlsx
//!
//! XLSX (Office Open XML) reader and writer for tabsheet.
//!
//! The package readers and writers move whole [`Workbook`](tabsheet_core::Workbook)s
//! in and out of `.xlsx` archives. [`read_worksheet_xml`] and
//! [`write_worksheet_xml`] work on a single `<worksheet>` part and are the
//! bridge between the XML document and a [`WorksheetTree`](tabsheet_core::WorksheetTree).

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use reader::{read_worksheet_xml, XlsxReader};
pub use writer::{write_worksheet_xml, XlsxWriter};
