//! Workbook type - owns the worksheets
//!
//! A worksheet does not point back at its workbook; the relation is the
//! workbook holding the sheet. Removing a sheet from the workbook ends its
//! life unless the caller keeps the returned value.

use crate::defaults::SheetDefaults;
use crate::error::{Error, Result};
use crate::tree::WorksheetTree;
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (spreadsheet document)
#[derive(Debug, Clone)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Workbook settings
    settings: WorkbookSettings,
    /// Active sheet index
    active_sheet: usize,
}

impl Workbook {
    /// Create a new empty workbook with one worksheet
    pub fn new() -> Self {
        let mut wb = Self::empty();
        let sheet = wb.new_sheet("Sheet1");
        wb.worksheets.push(sheet);
        wb.sync_tab_selection();
        wb
    }

    /// Create an empty workbook with no worksheets
    pub fn empty() -> Self {
        Self::with_settings(WorkbookSettings::default())
    }

    /// Create an empty workbook with explicit settings
    pub fn with_settings(settings: WorkbookSettings) -> Self {
        Self {
            worksheets: Vec::new(),
            settings,
            active_sheet: 0,
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get a mutable worksheet by name
    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheets.iter_mut().find(|ws| ws.name() == name)
    }

    /// Get the index of a worksheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Iterate over all worksheets mutably
    pub fn worksheets_mut(&mut self) -> impl Iterator<Item = &mut Worksheet> {
        self.worksheets.iter_mut()
    }

    /// Add a new worksheet with a generated name
    pub fn add_worksheet(&mut self) -> Result<usize> {
        let name = self.generate_sheet_name("Sheet");
        self.add_worksheet_with_name(&name)
    }

    /// Add a new worksheet with the specified name
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.validate_sheet_name(name)?;
        let sheet = self.new_sheet(name);
        self.worksheets.push(sheet);
        Ok(self.worksheets.len() - 1)
    }

    /// Add a worksheet backed by a loaded document tree
    pub fn add_loaded_worksheet(&mut self, name: &str, tree: WorksheetTree) -> Result<usize> {
        self.validate_sheet_name(name)?;
        self.worksheets.push(Worksheet::from_tree(name, tree));
        Ok(self.worksheets.len() - 1)
    }

    /// Remove a worksheet by index
    pub fn remove_worksheet(&mut self, index: usize) -> Result<Worksheet> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }

        let worksheet = self.worksheets.remove(index);

        // Adjust active sheet index
        if self.worksheets.is_empty() {
            self.active_sheet = 0;
        } else if self.active_sheet >= self.worksheets.len() {
            self.active_sheet = self.worksheets.len() - 1;
        } else if self.active_sheet > index {
            self.active_sheet -= 1;
        }
        self.sync_tab_selection();

        Ok(worksheet)
    }

    /// Copy a worksheet's document into a new sheet appended at the end
    ///
    /// The copy is named "<name> (2)", "<name> (3)", ... and is never the
    /// selected tab.
    pub fn clone_worksheet(&mut self, index: usize) -> Result<usize> {
        let source = self
            .worksheets
            .get(index)
            .ok_or(Error::SheetOutOfBounds(index, self.worksheets.len()))?;

        let name = self.generate_clone_name(source.name());
        let mut copy = Worksheet::from_tree(name, source.tree().clone());
        copy.set_tab_selected(false);

        self.worksheets.push(copy);
        Ok(self.worksheets.len() - 1)
    }

    /// Rename a worksheet
    pub fn rename_worksheet(&mut self, index: usize, new_name: &str) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        self.validate_sheet_name_excluding(new_name, Some(index))?;
        self.worksheets[index].set_name(new_name);
        Ok(())
    }

    /// Get the active sheet index
    pub fn active_sheet(&self) -> usize {
        self.active_sheet
    }

    /// Set the active sheet index; only that sheet's tab is selected
    pub fn set_active_sheet(&mut self, index: usize) -> Result<()> {
        if index >= self.worksheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.worksheets.len()));
        }
        self.active_sheet = index;
        self.sync_tab_selection();
        Ok(())
    }

    /// Get workbook settings
    pub fn settings(&self) -> &WorkbookSettings {
        &self.settings
    }

    /// Get mutable workbook settings
    pub fn settings_mut(&mut self) -> &mut WorkbookSettings {
        &mut self.settings
    }

    fn new_sheet(&self, name: &str) -> Worksheet {
        Worksheet::with_defaults(name, &self.settings.sheet_defaults)
    }

    fn sync_tab_selection(&mut self) {
        let active = self.active_sheet;
        for (i, ws) in self.worksheets.iter_mut().enumerate() {
            ws.set_tab_selected(i == active);
        }
    }

    /// Validate a sheet name
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        self.validate_sheet_name_excluding(name, None)
    }

    /// Validate a sheet name, optionally excluding a sheet from the duplicate check
    fn validate_sheet_name_excluding(
        &self,
        name: &str,
        exclude_index: Option<usize>,
    ) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        // Case-insensitive
        let name_lower = name.to_lowercase();
        let duplicate = self
            .worksheets
            .iter()
            .enumerate()
            .any(|(i, ws)| Some(i) != exclude_index && ws.name().to_lowercase() == name_lower);
        if duplicate {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }

    /// Generate a unique "<prefix>N" sheet name
    fn generate_sheet_name(&self, prefix: &str) -> String {
        let mut n = self.worksheets.len() + 1;
        loop {
            let name = format!("{}{}", prefix, n);
            if self.validate_sheet_name(&name).is_ok() {
                return name;
            }
            n += 1;
        }
    }

    /// Generate a unique "<base> (N)" name for a copied sheet
    fn generate_clone_name(&self, base: &str) -> String {
        let mut n = 2;
        loop {
            let suffix = format!(" ({})", n);
            let room = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
            let stem: String = base.chars().take(room).collect();
            let name = format!("{}{}", stem, suffix);
            if self.validate_sheet_name(&name).is_ok() {
                return name;
            }
            n += 1;
        }
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

/// Workbook-level settings
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorkbookSettings {
    /// Date system: false = 1900 (Windows), true = 1904 (Mac)
    pub date_1904: bool,
    /// Defaults for sheets created through this workbook
    pub sheet_defaults: SheetDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workbook() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.worksheet(0).unwrap().name(), "Sheet1");
        assert!(wb.worksheet(0).unwrap().is_tab_selected());
    }

    #[test]
    fn test_add_worksheets() {
        let mut wb = Workbook::new();

        let idx = wb.add_worksheet().unwrap();
        assert_eq!(idx, 1);
        assert_eq!(wb.worksheet(1).unwrap().name(), "Sheet2");

        let idx = wb.add_worksheet_with_name("Data").unwrap();
        assert_eq!(idx, 2);
        assert_eq!(wb.sheet_index("Data"), Some(2));
    }

    #[test]
    fn test_duplicate_name() {
        let mut wb = Workbook::new();
        assert!(matches!(
            wb.add_worksheet_with_name("SHEET1"),
            Err(Error::DuplicateSheetName(_))
        ));
    }

    #[test]
    fn test_invalid_sheet_name() {
        let mut wb = Workbook::new();
        assert!(wb.add_worksheet_with_name("").is_err());
        assert!(wb.add_worksheet_with_name("Sheet/1").is_err());
        assert!(wb.add_worksheet_with_name("Sheet[1]").is_err());

        let long_name = "A".repeat(MAX_SHEET_NAME_LEN + 1);
        assert!(wb.add_worksheet_with_name(&long_name).is_err());
    }

    #[test]
    fn test_sheet_defaults_from_settings() {
        let mut settings = WorkbookSettings::default();
        settings.sheet_defaults.default_column_width = 20.0;
        let mut wb = Workbook::with_settings(settings);

        let idx = wb.add_worksheet_with_name("Wide").unwrap();
        assert_eq!(wb.worksheet(idx).unwrap().default_column_width(), 20.0);
    }

    #[test]
    fn test_active_sheet_selects_one_tab() {
        let mut wb = Workbook::new();
        wb.add_worksheet().unwrap();
        wb.add_worksheet().unwrap();

        wb.set_active_sheet(2).unwrap();
        let selected: Vec<bool> = wb.worksheets().map(|ws| ws.is_tab_selected()).collect();
        assert_eq!(selected, vec![false, false, true]);

        assert!(wb.set_active_sheet(3).is_err());
    }

    #[test]
    fn test_remove_worksheet_adjusts_active() {
        let mut wb = Workbook::new();
        wb.add_worksheet().unwrap();
        wb.add_worksheet().unwrap();
        wb.set_active_sheet(2).unwrap();

        let removed = wb.remove_worksheet(0).unwrap();
        assert_eq!(removed.name(), "Sheet1");
        assert_eq!(wb.active_sheet(), 1);
        assert!(wb.worksheet(1).unwrap().is_tab_selected());

        assert!(wb.remove_worksheet(5).is_err());
    }

    #[test]
    fn test_clone_worksheet() {
        let mut wb = Workbook::new();
        {
            let ws = wb.worksheet_mut(0).unwrap();
            ws.create_row(4).unwrap().set_cell_value(0, 1.0);
            ws.set_row_break(4).unwrap();
        }

        let idx = wb.clone_worksheet(0).unwrap();
        let copy = wb.worksheet(idx).unwrap();
        assert_eq!(copy.name(), "Sheet1 (2)");
        assert_eq!(copy.last_row_num(), Some(4));
        assert!(copy.is_row_broken(4));
        assert!(!copy.is_tab_selected());

        // The copy is independent of the source
        wb.worksheet_mut(idx).unwrap().remove_row(4);
        assert_eq!(wb.worksheet(0).unwrap().physical_row_count(), 1);

        let idx = wb.clone_worksheet(0).unwrap();
        assert_eq!(wb.worksheet(idx).unwrap().name(), "Sheet1 (3)");
    }

    #[test]
    fn test_rename_worksheet() {
        let mut wb = Workbook::new();
        wb.add_worksheet_with_name("Data").unwrap();
        wb.rename_worksheet(0, "sheet1").unwrap();
        assert!(wb.rename_worksheet(0, "data").is_err());
        assert!(wb.rename_worksheet(9, "X").is_err());
    }
}
