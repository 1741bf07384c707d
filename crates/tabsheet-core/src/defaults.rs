//! Construction-time defaults for new worksheets

use crate::margins::PageMargins;

/// Defaults applied when a worksheet is created from scratch
///
/// Loaded worksheets keep whatever their document says; these values only
/// shape the tree built for a brand new sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetDefaults {
    /// Default column width in characters
    pub default_column_width: f64,
    /// Default row height in points
    pub default_row_height: f64,
    /// Zoom percentage of the initial view
    pub zoom_scale: u32,
    /// Active cell of the initial view
    pub active_cell: String,
    /// Width given to the initial column spans
    pub initial_column_width: f64,
    /// Initial column spans as 0-based `(min, max)` pairs
    pub initial_column_spans: Vec<(u16, u16)>,
    /// Initial page margins
    pub margins: PageMargins,
}

impl Default for SheetDefaults {
    fn default() -> Self {
        Self {
            default_column_width: 13.0,
            default_row_height: 15.0,
            zoom_scale: 100,
            active_cell: "A1".to_string(),
            initial_column_width: 13.0,
            initial_column_spans: vec![(0, 1), (2, 2), (3, 3)],
            margins: PageMargins::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let d = SheetDefaults::default();
        assert_eq!(d.default_column_width, 13.0);
        assert_eq!(d.default_row_height, 15.0);
        assert_eq!(d.margins, PageMargins::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_uses_defaults() {
        let d: SheetDefaults = serde_json::from_str(r#"{"zoom_scale": 150}"#).unwrap();
        assert_eq!(d.zoom_scale, 150);
        assert_eq!(d.default_column_width, 13.0);
    }
}
