//! Sheet views
//!
//! `<sheetViews>` may list several `<sheetView>` entries. When more than one
//! targets the same workbook window, the last one is loaded and the others
//! are discarded, so the last entry is the default view. Tab selection is a
//! property of the sheet, so it is written to every entry.

/// A `<selection>` node
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// Pane the selection belongs to (e.g. "bottomRight")
    pub pane: Option<String>,
    /// Active cell in A1 notation
    pub active_cell: Option<String>,
    /// Selected ranges
    pub sqref: Option<String>,
}

/// A `<sheetView>` node
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetView {
    /// Index of the workbook window this view belongs to
    pub workbook_view_id: u32,
    /// Sheet tab is selected
    pub tab_selected: bool,
    /// Zoom percentage
    pub zoom_scale: Option<u32>,
    /// Show grid lines (None = application default)
    pub show_grid_lines: Option<bool>,
    /// Top-left visible cell
    pub top_left_cell: Option<String>,
    /// Selections
    pub selections: Vec<Selection>,
}

impl SheetView {
    /// Create a view for a workbook window
    pub fn new(workbook_view_id: u32) -> Self {
        Self {
            workbook_view_id,
            ..Default::default()
        }
    }
}

/// The `<sheetViews>` node
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetViews {
    pub views: Vec<SheetView>,
}

impl SheetViews {
    /// Create an empty view list
    pub fn new() -> Self {
        Self::default()
    }

    /// The default view: the last entry, or None if there are none
    pub fn default_view(&self) -> Option<&SheetView> {
        self.views.last()
    }

    /// Mutable access to the default view
    pub fn default_view_mut(&mut self) -> Option<&mut SheetView> {
        self.views.last_mut()
    }

    /// Whether the default view has its tab selected
    pub fn is_tab_selected(&self) -> bool {
        self.default_view().map_or(false, |v| v.tab_selected)
    }

    /// Set the tab-selected flag on every view
    pub fn set_tab_selected(&mut self, selected: bool) {
        for view in &mut self.views {
            view.tab_selected = selected;
        }
    }

    /// Append a view and return it
    pub fn add_view(&mut self, view: SheetView) -> &mut SheetView {
        self.views.push(view);
        let last = self.views.len() - 1;
        &mut self.views[last]
    }
}
