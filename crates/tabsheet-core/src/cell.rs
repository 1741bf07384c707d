//! Cell addresses and the cell nodes stored inside a row
//!
//! Cell semantics (formulas, styles, number formats) live outside this crate.
//! A row only needs to carry its cells so that they can be written back out
//! verbatim and discarded when the row is replaced.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A cell address in A1 notation (e.g. "A1", "XFD1048576")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// `$` markers are accepted and ignored.
    ///
    /// # Examples
    /// ```
    /// use tabsheet_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B3").unwrap();
    /// assert_eq!(addr.row, 2);
    /// assert_eq!(addr.col, 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let cleaned: String = s.chars().filter(|c| *c != '$').collect();
        let split = cleaned
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(cleaned.len());
        let (letters, digits) = cleaned.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let col = Self::letters_to_column(letters)?;
        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Excel rows are 1-based, we use 0-based internally
        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }
        let row = row - 1;
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        Ok(Self { row, col })
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u16) -> String {
        let mut letters = Vec::new();
        let mut n = col as u32 + 1;

        while n > 0 {
            n -= 1;
            letters.push((n % 26) as u8 + b'A');
            n /= 26;
        }

        letters.iter().rev().map(|b| *b as char).collect()
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if col > MAX_COLS as u32 {
                return Err(Error::ColumnOutOfBounds(col - 1, MAX_COLS as u32 - 1));
            }
        }

        Ok((col - 1) as u16)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row + 1)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g. "A1:C3")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Top-left cell
    pub start: CellAddress,
    /// Bottom-right cell
    pub end: CellAddress,
}

impl CellRange {
    /// Create a range, normalizing the corners
    pub fn new(a: CellAddress, b: CellAddress) -> Self {
        Self {
            start: CellAddress::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellAddress::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Parse "A1:C3" (a single cell such as "B2" is a 1x1 range)
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((a, b)) => Ok(Self::new(CellAddress::parse(a)?, CellAddress::parse(b)?)),
            None => {
                let cell = CellAddress::parse(s)?;
                Ok(Self::new(cell, cell))
            }
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// The value held by a cell node
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// No value
    #[default]
    Empty,
    /// Numeric value
    Number(f64),
    /// Text value
    String(String),
    /// Boolean value
    Boolean(bool),
}

impl CellValue {
    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Get as number if numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice if text
    pub fn as_string(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as bool if boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

/// A `<c>` node inside a row
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellNode {
    /// Column index (0-based)
    pub col: u16,
    /// Cell value
    pub value: CellValue,
    /// Style index, carried through untouched
    pub style_index: Option<u32>,
}

impl CellNode {
    /// Create a new cell node with no style
    pub fn new<V: Into<CellValue>>(col: u16, value: V) -> Self {
        Self {
            col,
            value: value.into(),
            style_index: None,
        }
    }
}
