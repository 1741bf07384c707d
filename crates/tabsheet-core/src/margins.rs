//! Page margins
//!
//! The `<pageMargins>` node carries six distances in inches. [`Margin`] names
//! them; every read or write touches exactly one field.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One of the six page margins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Margin {
    Left,
    Right,
    Top,
    Bottom,
    Header,
    Footer,
}

impl Margin {
    /// All margins, in legacy id order
    pub const ALL: [Margin; 6] = [
        Margin::Left,
        Margin::Right,
        Margin::Top,
        Margin::Bottom,
        Margin::Header,
        Margin::Footer,
    ];

    /// Legacy numeric id (0 = left ... 5 = footer)
    pub fn id(self) -> i16 {
        match self {
            Margin::Left => 0,
            Margin::Right => 1,
            Margin::Top => 2,
            Margin::Bottom => 3,
            Margin::Header => 4,
            Margin::Footer => 5,
        }
    }

    /// Attribute name in `<pageMargins>`
    pub fn as_str(self) -> &'static str {
        match self {
            Margin::Left => "left",
            Margin::Right => "right",
            Margin::Top => "top",
            Margin::Bottom => "bottom",
            Margin::Header => "header",
            Margin::Footer => "footer",
        }
    }
}

impl TryFrom<i16> for Margin {
    type Error = Error;

    fn try_from(id: i16) -> Result<Self> {
        Margin::ALL
            .iter()
            .copied()
            .find(|m| m.id() == id)
            .ok_or_else(|| Error::InvalidMargin(id.to_string()))
    }
}

impl FromStr for Margin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Margin::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidMargin(s.to_string()))
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `<pageMargins>` node, distances in inches
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub header: f64,
    pub footer: f64,
}

impl PageMargins {
    /// Read one margin
    pub fn get(&self, margin: Margin) -> f64 {
        match margin {
            Margin::Left => self.left,
            Margin::Right => self.right,
            Margin::Top => self.top,
            Margin::Bottom => self.bottom,
            Margin::Header => self.header,
            Margin::Footer => self.footer,
        }
    }

    /// Write one margin, leaving the other five untouched
    pub fn set(&mut self, margin: Margin, value: f64) {
        let field = match margin {
            Margin::Left => &mut self.left,
            Margin::Right => &mut self.right,
            Margin::Top => &mut self.top,
            Margin::Bottom => &mut self.bottom,
            Margin::Header => &mut self.header,
            Margin::Footer => &mut self.footer,
        };
        *field = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_touches_one_field() {
        for margin in Margin::ALL {
            let mut margins = PageMargins::default();
            margins.set(margin, 1.25);

            for other in Margin::ALL {
                let expected = if other == margin { 1.25 } else { 0.0 };
                assert_eq!(margins.get(other), expected, "{} after setting {}", other, margin);
            }
        }
    }

    #[test]
    fn test_left_does_not_change_right() {
        let mut margins = PageMargins {
            right: 0.7,
            ..Default::default()
        };
        margins.set(Margin::Left, 2.0);
        assert_eq!(margins.left, 2.0);
        assert_eq!(margins.right, 0.7);
    }

    #[test]
    fn test_margin_from_id() {
        assert_eq!(Margin::try_from(0).unwrap(), Margin::Left);
        assert_eq!(Margin::try_from(5).unwrap(), Margin::Footer);
        assert!(matches!(Margin::try_from(6), Err(Error::InvalidMargin(_))));
        assert!(matches!(Margin::try_from(-1), Err(Error::InvalidMargin(_))));
    }

    #[test]
    fn test_margin_from_name() {
        assert_eq!("Top".parse::<Margin>().unwrap(), Margin::Top);
        assert_eq!(" header ".parse::<Margin>().unwrap(), Margin::Header);
        assert!("gutter".parse::<Margin>().is_err());
    }
}
