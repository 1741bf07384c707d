//! Column properties
//!
//! `<cols>` stores column settings as spans (`min..=max`). Reads find the span
//! covering a column; writes first split that span so that changing one column
//! never changes its neighbours.

/// A `<col>` node: settings shared by a span of columns
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Col {
    /// Start column index (0-based)
    pub min: u16,
    /// End column index (inclusive)
    pub max: u16,
    /// Width in characters (None = default)
    pub width: Option<f64>,
    /// Width was set explicitly
    pub custom_width: bool,
    /// Hidden
    pub hidden: bool,
    /// Best fit (auto-sized)
    pub best_fit: bool,
    /// Outline level, carried through untouched
    pub outline_level: u8,
    /// Style index, carried through untouched
    pub style_index: Option<u32>,
}

impl Col {
    /// Create settings for a single column
    pub fn single(index: u16) -> Self {
        Self::range(index, index)
    }

    /// Create settings for a range of columns
    pub fn range(min: u16, max: u16) -> Self {
        Self {
            min,
            max,
            width: None,
            custom_width: false,
            hidden: false,
            best_fit: false,
            outline_level: 0,
            style_index: None,
        }
    }

    /// Set a custom width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self.custom_width = true;
        self
    }

    /// Set hidden
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Check if this span covers `col`
    pub fn contains(&self, col: u16) -> bool {
        self.min <= col && col <= self.max
    }

    fn with_bounds(&self, min: u16, max: u16) -> Self {
        Self {
            min,
            max,
            ..self.clone()
        }
    }
}

/// The `<cols>` node
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cols {
    /// Spans, ordered by `min` and non-overlapping
    pub cols: Vec<Col>,
}

impl Cols {
    /// Create an empty column list
    pub fn new() -> Self {
        Self::default()
    }

    /// The span covering `col`, if any
    pub fn column(&self, col: u16) -> Option<&Col> {
        self.cols.iter().find(|c| c.contains(col))
    }

    /// Settings for exactly `col`, splitting or creating a span as needed
    pub fn column_mut(&mut self, col: u16) -> &mut Col {
        let index = match self.cols.iter().position(|c| c.contains(col)) {
            Some(index) => self.isolate(index, col),
            None => {
                let index = self
                    .cols
                    .iter()
                    .position(|c| c.min > col)
                    .unwrap_or(self.cols.len());
                self.cols.insert(index, Col::single(col));
                index
            }
        };
        &mut self.cols[index]
    }

    /// Split the span at `index` so that `col` has its own entry; returns its index
    fn isolate(&mut self, index: usize, col: u16) -> usize {
        let span = self.cols[index].clone();
        if span.min == col && span.max == col {
            return index;
        }

        let mut pieces = Vec::with_capacity(3);
        if span.min < col {
            pieces.push(span.with_bounds(span.min, col - 1));
        }
        let target = index + pieces.len();
        pieces.push(span.with_bounds(col, col));
        if col < span.max {
            pieces.push(span.with_bounds(col + 1, span.max));
        }

        self.cols.remove(index);
        for (offset, piece) in pieces.into_iter().enumerate() {
            self.cols.insert(index + offset, piece);
        }
        target
    }

    /// Custom width of `col`, if one is set
    pub fn width(&self, col: u16) -> Option<f64> {
        self.column(col).and_then(|c| c.width)
    }

    /// Whether `col` is hidden
    pub fn is_hidden(&self, col: u16) -> bool {
        self.column(col).map_or(false, |c| c.hidden)
    }

    /// Set the width of one column
    pub fn set_width(&mut self, col: u16, width: f64) {
        let entry = self.column_mut(col);
        entry.width = Some(width);
        entry.custom_width = true;
    }

    /// Hide or show one column
    pub fn set_hidden(&mut self, col: u16, hidden: bool) {
        self.column_mut(col).hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_by_span() {
        let cols = Cols {
            cols: vec![Col::range(0, 1).with_width(13.0), Col::single(4).with_hidden(true)],
        };
        assert_eq!(cols.width(1), Some(13.0));
        assert_eq!(cols.width(2), None);
        assert!(cols.is_hidden(4));
        assert!(!cols.is_hidden(0));
    }

    #[test]
    fn test_set_width_splits_span() {
        let mut cols = Cols {
            cols: vec![Col::range(0, 4).with_width(10.0)],
        };
        cols.set_width(2, 20.0);

        let bounds: Vec<(u16, u16)> = cols.cols.iter().map(|c| (c.min, c.max)).collect();
        assert_eq!(bounds, vec![(0, 1), (2, 2), (3, 4)]);
        assert_eq!(cols.width(1), Some(10.0));
        assert_eq!(cols.width(2), Some(20.0));
        assert_eq!(cols.width(3), Some(10.0));
    }

    #[test]
    fn test_split_at_span_edges() {
        let mut cols = Cols {
            cols: vec![Col::range(0, 1)],
        };
        cols.set_hidden(0, true);
        let bounds: Vec<(u16, u16)> = cols.cols.iter().map(|c| (c.min, c.max)).collect();
        assert_eq!(bounds, vec![(0, 0), (1, 1)]);
        assert!(cols.is_hidden(0));
        assert!(!cols.is_hidden(1));
    }

    #[test]
    fn test_new_column_inserted_in_order() {
        let mut cols = Cols {
            cols: vec![Col::single(1), Col::single(5)],
        };
        cols.set_width(3, 8.0);
        cols.set_width(9, 8.0);
        let mins: Vec<u16> = cols.cols.iter().map(|c| c.min).collect();
        assert_eq!(mins, vec![1, 3, 5, 9]);
    }
}
