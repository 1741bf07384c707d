//! Row nodes and the row store
//!
//! The `<sheetData>` node owns the durable row nodes. [`RowStore`] keeps the
//! in-memory row index that mirrors it: position `i` of the index always
//! describes position `i` of [`SheetData::rows`]. Every row mutation goes
//! through the store so that both sequences change together.
//!
//! Lookups are linear scans in index order. Rows are kept in ascending
//! row-number order, so insertion stops at the first larger row number.

use crate::cell::{CellNode, CellValue};

/// The `<sheetData>` node: the worksheet's row list
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetData {
    /// Row nodes in document order
    pub rows: Vec<RowNode>,
}

impl SheetData {
    /// Create an empty row list
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh row node at `index` and return it
    fn insert_new_row(&mut self, index: usize, row_num: u32) -> &mut RowNode {
        self.rows.insert(index, RowNode::new(row_num));
        &mut self.rows[index]
    }

    /// Remove the row node at `index`
    fn remove_row(&mut self, index: usize) -> RowNode {
        self.rows.remove(index)
    }
}

/// A `<row>` node
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowNode {
    /// Row index (0-based)
    pub row_num: u32,
    /// Custom height in points (None = default)
    pub height: Option<f64>,
    /// Row is hidden
    pub hidden: bool,
    /// Cells, ordered by column
    pub cells: Vec<CellNode>,
}

impl RowNode {
    /// Create an empty row node
    pub fn new(row_num: u32) -> Self {
        Self {
            row_num,
            height: None,
            hidden: false,
            cells: Vec::new(),
        }
    }
}

/// Read-only view of a stored row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    node: &'a RowNode,
}

impl<'a> Row<'a> {
    pub(crate) fn new(node: &'a RowNode) -> Self {
        Self { node }
    }

    /// Row index (0-based)
    pub fn row_num(&self) -> u32 {
        self.node.row_num
    }

    /// Custom height in points, if any
    pub fn height(&self) -> Option<f64> {
        self.node.height
    }

    /// Whether the row is hidden
    pub fn is_hidden(&self) -> bool {
        self.node.hidden
    }

    /// Cells in column order
    pub fn cells(&self) -> &'a [CellNode] {
        &self.node.cells
    }

    /// Get a cell by column index
    pub fn cell(&self, col: u16) -> Option<&'a CellNode> {
        self.node.cells.iter().find(|c| c.col == col)
    }

    /// Number of cells in the row
    pub fn cell_count(&self) -> usize {
        self.node.cells.len()
    }

    /// The backing tree node
    pub fn node(&self) -> &'a RowNode {
        self.node
    }
}

/// Mutable view of a stored row
///
/// The row number is fixed: moving a row would break the store's ordering.
#[derive(Debug)]
pub struct RowMut<'a> {
    node: &'a mut RowNode,
}

impl<'a> RowMut<'a> {
    pub(crate) fn new(node: &'a mut RowNode) -> Self {
        Self { node }
    }

    /// Row index (0-based)
    pub fn row_num(&self) -> u32 {
        self.node.row_num
    }

    /// Set the custom height in points (None = default)
    pub fn set_height(&mut self, height: Option<f64>) {
        self.node.height = height;
    }

    /// Hide or show the row
    pub fn set_hidden(&mut self, hidden: bool) {
        self.node.hidden = hidden;
    }

    /// Set a cell value, keeping cells ordered by column
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, col: u16, value: V) {
        let value = value.into();
        match self.node.cells.binary_search_by_key(&col, |c| c.col) {
            Ok(pos) => self.node.cells[pos].value = value,
            Err(pos) => self.node.cells.insert(pos, CellNode::new(col, value)),
        }
    }

    /// Remove a cell, returning it if present
    pub fn clear_cell(&mut self, col: u16) -> Option<CellNode> {
        let pos = self.node.cells.iter().position(|c| c.col == col)?;
        Some(self.node.cells.remove(pos))
    }

    /// Read-only view of the same row
    pub fn as_row(&self) -> Row<'_> {
        Row::new(&*self.node)
    }
}

/// In-memory row index, aligned position for position with [`SheetData`]
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    row_nums: Vec<u32>,
}

impl RowStore {
    /// Build the index by scanning the row list once
    pub fn hydrate(data: &SheetData) -> Self {
        let row_nums: Vec<u32> = data.rows.iter().map(|r| r.row_num).collect();

        if row_nums.windows(2).any(|w| w[0] >= w[1]) {
            log::warn!(
                "sheetData rows are not in strictly ascending order ({} rows); keeping document order",
                row_nums.len()
            );
        }

        Self { row_nums }
    }

    /// Create a row, replacing any existing row with the same number
    ///
    /// An existing row is replaced in place by an empty node. Otherwise the new
    /// row goes before the first row with a larger number, or at the end.
    pub(crate) fn create_or_replace<'a>(
        &mut self,
        data: &'a mut SheetData,
        row_num: u32,
    ) -> RowMut<'a> {
        debug_assert_eq!(self.row_nums.len(), data.rows.len());

        let mut index = 0;
        for &existing in &self.row_nums {
            if existing == row_num {
                log::debug!("replacing row {} at position {}", row_num, index);
                data.rows[index] = RowNode::new(row_num);
                return RowMut::new(&mut data.rows[index]);
            }
            if existing > row_num {
                break;
            }
            index += 1;
        }

        self.row_nums.insert(index, row_num);
        RowMut::new(data.insert_new_row(index, row_num))
    }

    /// Position of the first row with the given number
    pub fn position(&self, row_num: u32) -> Option<usize> {
        self.row_nums.iter().position(|&n| n == row_num)
    }

    /// Get a row by number
    pub fn get<'a>(&self, data: &'a SheetData, row_num: u32) -> Option<Row<'a>> {
        self.position(row_num).map(|i| Row::new(&data.rows[i]))
    }

    /// Get a mutable row by number
    pub(crate) fn get_mut<'a>(&self, data: &'a mut SheetData, row_num: u32) -> Option<RowMut<'a>> {
        self.position(row_num)
            .map(move |i| RowMut::new(&mut data.rows[i]))
    }

    /// Remove every row with the given number, returning how many were removed
    pub(crate) fn remove(&mut self, data: &mut SheetData, row_num: u32) -> usize {
        debug_assert_eq!(self.row_nums.len(), data.rows.len());

        let mut removed = 0;
        let mut index = 0;
        while index < self.row_nums.len() {
            if self.row_nums[index] == row_num {
                self.row_nums.remove(index);
                data.remove_row(index);
                removed += 1;
            } else {
                index += 1;
            }
        }

        if removed > 1 {
            log::warn!("removed {} rows sharing row number {}", removed, row_num);
        } else if removed == 1 {
            log::debug!("removed row {}", row_num);
        }
        removed
    }

    /// Iterate rows in index order
    pub fn iter<'a>(&self, data: &'a SheetData) -> Rows<'a> {
        debug_assert_eq!(self.row_nums.len(), data.rows.len());
        Rows {
            inner: data.rows.iter(),
        }
    }

    /// Number of the first row, or None if the store is empty
    pub fn first_row_num(&self) -> Option<u32> {
        self.row_nums.first().copied()
    }

    /// Number of the last row, or None if the store is empty
    pub fn last_row_num(&self) -> Option<u32> {
        self.row_nums.last().copied()
    }

    /// Number of rows actually present (gaps in numbering are not counted)
    pub fn physical_count(&self) -> usize {
        self.row_nums.len()
    }

    /// Check if the store holds no rows
    pub fn is_empty(&self) -> bool {
        self.row_nums.is_empty()
    }

    /// Row numbers in index order
    pub fn row_nums(&self) -> &[u32] {
        &self.row_nums
    }
}

/// Iterator over stored rows
///
/// Lazy and cheap to clone; call [`RowStore::iter`] again for a fresh pass.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    inner: std::slice::Iter<'a, RowNode>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Row::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Rows<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Row::new)
    }
}

impl ExactSizeIterator for Rows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(nums: &[u32]) -> (RowStore, SheetData) {
        let mut data = SheetData::new();
        let mut store = RowStore::default();
        for &n in nums {
            store.create_or_replace(&mut data, n);
        }
        (store, data)
    }

    #[test]
    fn test_insert_keeps_ascending_order() {
        let (store, data) = store_with(&[5, 1, 9, 3]);
        let nums: Vec<u32> = store.iter(&data).map(|r| r.row_num()).collect();
        assert_eq!(nums, vec![1, 3, 5, 9]);
        assert_eq!(store.row_nums(), &[1, 3, 5, 9]);
    }

    #[test]
    fn test_replace_discards_cells() {
        let (mut store, mut data) = store_with(&[2, 4]);
        store
            .get_mut(&mut data, 4)
            .unwrap()
            .set_cell_value(0, "old");
        assert_eq!(store.get(&data, 4).unwrap().cell_count(), 1);

        let row = store.create_or_replace(&mut data, 4);
        assert_eq!(row.row_num(), 4);

        assert_eq!(store.physical_count(), 2);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(store.get(&data, 4).unwrap().cell_count(), 0);
    }

    #[test]
    fn test_empty_store() {
        let store = RowStore::default();
        assert_eq!(store.first_row_num(), None);
        assert_eq!(store.last_row_num(), None);
        assert_eq!(store.physical_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_physical_count_ignores_gaps() {
        let (store, _) = store_with(&[2, 9]);
        assert_eq!(store.physical_count(), 2);
        assert_eq!(store.first_row_num(), Some(2));
        assert_eq!(store.last_row_num(), Some(9));
    }

    #[test]
    fn test_remove() {
        let (mut store, mut data) = store_with(&[1, 2, 3]);
        assert_eq!(store.remove(&mut data, 2), 1);
        assert_eq!(store.row_nums(), &[1, 3]);
        assert_eq!(data.rows.iter().map(|r| r.row_num).collect::<Vec<_>>(), vec![1, 3]);

        // Absent row is a no-op
        assert_eq!(store.remove(&mut data, 7), 0);
        assert_eq!(store.physical_count(), 2);
    }

    #[test]
    fn test_remove_duplicates_from_document() {
        let data_rows = vec![RowNode::new(1), RowNode::new(4), RowNode::new(4), RowNode::new(6)];
        let mut data = SheetData { rows: data_rows };
        let mut store = RowStore::hydrate(&data);

        assert_eq!(store.remove(&mut data, 4), 2);
        assert_eq!(store.row_nums(), &[1, 6]);
        assert_eq!(data.rows.iter().map(|r| r.row_num).collect::<Vec<_>>(), vec![1, 6]);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let (store, data) = store_with(&[3, 1]);
        let rows = store.iter(&data);
        let first_pass: Vec<u32> = rows.clone().map(|r| r.row_num()).collect();
        let second_pass: Vec<u32> = rows.map(|r| r.row_num()).collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(store.iter(&data).len(), 2);
    }

    #[test]
    fn test_row_mut_cells_sorted() {
        let (mut store, mut data) = store_with(&[0]);
        let mut row = store.get_mut(&mut data, 0).unwrap();
        row.set_cell_value(3, 1.5);
        row.set_cell_value(1, true);
        row.set_cell_value(3, 2.5);

        let row = store.get(&data, 0).unwrap();
        let cols: Vec<u16> = row.cells().iter().map(|c| c.col).collect();
        assert_eq!(cols, vec![1, 3]);
        assert_eq!(row.cell(3).unwrap().value.as_number(), Some(2.5));
    }
}
