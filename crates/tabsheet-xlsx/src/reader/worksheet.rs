//! `<worksheet>` part parsing
//!
//! Builds a [`WorksheetTree`] from one worksheet part. Only the children the
//! worksheet model knows about are kept; everything else is skipped. Row and
//! column positions are 1-based in the XML and 0-based in the tree; break ids
//! are copied as written.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use tabsheet_core::{
    BreakAxis, BreakNode, CellAddress, CellNode, CellValue, Col, Cols, HeaderFooterKind,
    HeaderFooterNode, PageBreaks, PageMargins, PageSetUpPr, RowNode, Selection, SheetFormatPr,
    SheetPr, SheetView, SheetViews, WorksheetTree, MAX_COLS, MAX_ROWS,
};

use super::decode_excel_escapes;
use crate::error::{XlsxError, XlsxResult};

/// Parse a worksheet part into a tree
///
/// `shared_strings` resolves cells of type `s`; pass an empty slice when the
/// package has no shared string table.
pub fn read_worksheet_xml<R: BufRead>(
    reader: R,
    shared_strings: &[String],
) -> XlsxResult<WorksheetTree> {
    let mut xml_reader = Reader::from_reader(reader);
    xml_reader.trim_text(true);

    let mut parser = WorksheetParser::new(shared_strings);
    let mut buf = Vec::new();

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => parser.start(&e, false)?,
            Ok(Event::Empty(e)) => {
                parser.start(&e, true)?;
                parser.end(e.local_name().as_ref())?;
            }
            Ok(Event::End(e)) => parser.end(e.local_name().as_ref())?,
            Ok(Event::Text(e)) => {
                if parser.wants_text() {
                    let text = e.unescape()?;
                    parser.text(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if !parser.saw_worksheet {
        return Err(XlsxError::InvalidFormat(
            "worksheet part has no <worksheet> root".into(),
        ));
    }

    Ok(parser.tree)
}

/// Where character data currently goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextTarget {
    Value,
    InlineText,
    HeaderFooter(HeaderFooterKind),
}

/// The `<c>` element being read
#[derive(Debug, Default)]
struct PendingCell {
    col: u16,
    cell_type: Option<String>,
    style_index: Option<u32>,
    raw: Option<String>,
    inline: Option<String>,
}

struct WorksheetParser<'s> {
    tree: WorksheetTree,
    shared_strings: &'s [String],
    saw_worksheet: bool,
    in_sheet_pr: bool,
    in_inline_str: bool,
    cell: Option<PendingCell>,
    next_row: u32,
    next_col: u16,
    breaks: Option<(BreakAxis, Vec<BreakNode>)>,
    text_target: Option<TextTarget>,
    text: String,
}

impl<'s> WorksheetParser<'s> {
    fn new(shared_strings: &'s [String]) -> Self {
        Self {
            tree: WorksheetTree::empty(),
            shared_strings,
            saw_worksheet: false,
            in_sheet_pr: false,
            in_inline_str: false,
            cell: None,
            next_row: 0,
            next_col: 0,
            breaks: None,
            text_target: None,
            text: String::new(),
        }
    }

    fn wants_text(&self) -> bool {
        self.text_target.is_some()
    }

    fn text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn start(&mut self, e: &BytesStart, empty: bool) -> XlsxResult<()> {
        match e.local_name().as_ref() {
            b"worksheet" => self.saw_worksheet = true,
            b"sheetPr" => {
                self.in_sheet_pr = !empty;
                self.tree.sheet_pr = Some(SheetPr::default());
            }
            b"tabColor" if self.in_sheet_pr => {
                if let Some(sheet_pr) = self.tree.sheet_pr.as_mut() {
                    sheet_pr.tab_color = attr_string(e, b"rgb");
                }
            }
            b"pageSetUpPr" if self.in_sheet_pr => {
                let mut pr = PageSetUpPr::default();
                for (key, value) in attributes(e) {
                    match key.as_slice() {
                        b"autoPageBreaks" => pr.auto_page_breaks = parse_bool(&value),
                        b"fitToPage" => pr.fit_to_page = parse_bool(&value),
                        _ => {}
                    }
                }
                if let Some(sheet_pr) = self.tree.sheet_pr.as_mut() {
                    sheet_pr.page_set_up_pr = Some(pr);
                }
            }
            b"sheetViews" => self.tree.sheet_views = Some(SheetViews::new()),
            b"sheetView" => {
                let mut view = SheetView::new(0);
                for (key, value) in attributes(e) {
                    match key.as_slice() {
                        b"workbookViewId" => view.workbook_view_id = parse_or(&value, 0),
                        b"tabSelected" => view.tab_selected = parse_bool(&value),
                        b"zoomScale" => view.zoom_scale = value.parse().ok(),
                        b"showGridLines" => view.show_grid_lines = Some(parse_bool(&value)),
                        b"topLeftCell" => view.top_left_cell = Some(value),
                        _ => {}
                    }
                }
                self.tree
                    .sheet_views
                    .get_or_insert_with(SheetViews::new)
                    .add_view(view);
            }
            b"selection" => {
                let mut selection = Selection::default();
                for (key, value) in attributes(e) {
                    match key.as_slice() {
                        b"pane" => selection.pane = Some(value),
                        b"activeCell" => selection.active_cell = Some(value),
                        b"sqref" => selection.sqref = Some(value),
                        _ => {}
                    }
                }
                if let Some(view) = self
                    .tree
                    .sheet_views
                    .as_mut()
                    .and_then(|views| views.views.last_mut())
                {
                    view.selections.push(selection);
                }
            }
            b"sheetFormatPr" => {
                let mut pr = SheetFormatPr::default();
                for (key, value) in attributes(e) {
                    match key.as_slice() {
                        b"defaultColWidth" => pr.default_col_width = value.parse().ok(),
                        b"defaultRowHeight" => {
                            pr.default_row_height = parse_or(&value, pr.default_row_height)
                        }
                        b"customHeight" => pr.custom_height = parse_bool(&value),
                        b"baseColWidth" => pr.base_col_width = value.parse().ok(),
                        _ => {}
                    }
                }
                self.tree.sheet_format_pr = Some(pr);
            }
            b"cols" => self.tree.cols = Some(Cols::new()),
            b"col" => {
                let col = read_col(e)?;
                self.tree.cols.get_or_insert_with(Cols::new).cols.push(col);
            }
            b"row" => {
                let row = self.read_row(e)?;
                self.next_row = row.row_num + 1;
                self.next_col = 0;
                self.tree.sheet_data.rows.push(row);
            }
            b"c" => {
                let cell = self.read_cell(e)?;
                self.next_col = cell.col + 1;
                self.cell = Some(cell);
            }
            b"v" if self.cell.is_some() => self.begin_text(TextTarget::Value),
            b"is" if self.cell.is_some() => self.in_inline_str = true,
            b"t" if self.in_inline_str => self.begin_text(TextTarget::InlineText),
            b"pageMargins" => {
                let mut margins = PageMargins::default();
                for (key, value) in attributes(e) {
                    let target = match key.as_slice() {
                        b"left" => &mut margins.left,
                        b"right" => &mut margins.right,
                        b"top" => &mut margins.top,
                        b"bottom" => &mut margins.bottom,
                        b"header" => &mut margins.header,
                        b"footer" => &mut margins.footer,
                        _ => continue,
                    };
                    *target = parse_number(&key, &value)?;
                }
                self.tree.page_margins = Some(margins);
            }
            b"headerFooter" => {
                let mut node = HeaderFooterNode::default();
                for (key, value) in attributes(e) {
                    match key.as_slice() {
                        b"differentOddEven" => node.different_odd_even = parse_bool(&value),
                        b"differentFirst" => node.different_first = parse_bool(&value),
                        _ => {}
                    }
                }
                self.tree.header_footer = Some(node);
            }
            b"rowBreaks" => self.breaks = Some((BreakAxis::Row, Vec::new())),
            b"colBreaks" => self.breaks = Some((BreakAxis::Column, Vec::new())),
            b"brk" => {
                let node = read_break(e)?;
                if let Some((axis, nodes)) = self.breaks.as_mut() {
                    let limit = match axis {
                        BreakAxis::Row => MAX_ROWS,
                        BreakAxis::Column => MAX_COLS as u32,
                    };
                    if node.id < limit {
                        nodes.push(node);
                    } else {
                        log::warn!("{:?} break id {} out of range; skipping", axis, node.id);
                    }
                }
            }
            other => {
                let name = String::from_utf8_lossy(other);
                if let Some(kind) = HeaderFooterKind::from_element_name(&name) {
                    if self.tree.header_footer.is_some() {
                        self.begin_text(TextTarget::HeaderFooter(kind));
                    }
                }
            }
        }
        Ok(())
    }

    fn end(&mut self, name: &[u8]) -> XlsxResult<()> {
        match name {
            b"sheetPr" => self.in_sheet_pr = false,
            b"v" => {
                if self.text_target == Some(TextTarget::Value) {
                    let text = self.take_text();
                    if let Some(cell) = self.cell.as_mut() {
                        cell.raw = Some(text);
                    }
                }
            }
            b"t" => {
                if self.text_target == Some(TextTarget::InlineText) {
                    let text = self.take_text();
                    if let Some(cell) = self.cell.as_mut() {
                        cell.inline.get_or_insert_with(String::new).push_str(&text);
                    }
                }
            }
            b"is" => self.in_inline_str = false,
            b"c" => {
                if let Some(pending) = self.cell.take() {
                    let cell = self.resolve_cell(pending)?;
                    if let Some(row) = self.tree.sheet_data.rows.last_mut() {
                        row.cells.push(cell);
                    } else {
                        log::warn!("cell outside of any row; skipping");
                    }
                }
            }
            b"rowBreaks" | b"colBreaks" => {
                if let Some((axis, nodes)) = self.breaks.take() {
                    let breaks = PageBreaks::from_nodes(axis, nodes);
                    match axis {
                        BreakAxis::Row => self.tree.row_breaks = Some(breaks),
                        BreakAxis::Column => self.tree.col_breaks = Some(breaks),
                    }
                }
            }
            other => {
                if let Some(TextTarget::HeaderFooter(kind)) = self.text_target {
                    if other == kind.element_name().as_bytes() {
                        let text = self.take_text();
                        if let Some(node) = self.tree.header_footer.as_mut() {
                            *node.slot_mut(kind) = Some(text);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn begin_text(&mut self, target: TextTarget) {
        self.text_target = Some(target);
        self.text.clear();
    }

    fn take_text(&mut self) -> String {
        self.text_target = None;
        std::mem::take(&mut self.text)
    }

    fn read_row(&self, e: &BytesStart) -> XlsxResult<RowNode> {
        let mut row_num = self.next_row;
        let mut ht = None;
        let mut custom_height = false;
        let mut hidden = false;

        for (key, value) in attributes(e) {
            match key.as_slice() {
                b"r" => {
                    let r: u32 = parse_number(&key, &value)?;
                    row_num = r.checked_sub(1).ok_or_else(|| {
                        XlsxError::Parse(format!("row number must be at least 1, got {}", r))
                    })?;
                }
                b"ht" => ht = value.parse::<f64>().ok(),
                b"customHeight" => custom_height = parse_bool(&value),
                b"hidden" => hidden = parse_bool(&value),
                _ => {}
            }
        }

        if row_num >= MAX_ROWS {
            return Err(XlsxError::Parse(format!(
                "row {} exceeds the sheet limit of {} rows",
                row_num as u64 + 1,
                MAX_ROWS
            )));
        }

        let mut row = RowNode::new(row_num);
        // Excel writes ht on every row; only a custom height belongs to the row
        if custom_height {
            row.height = ht;
        }
        row.hidden = hidden;
        Ok(row)
    }

    fn read_cell(&self, e: &BytesStart) -> XlsxResult<PendingCell> {
        let mut cell = PendingCell {
            col: self.next_col,
            ..Default::default()
        };

        for (key, value) in attributes(e) {
            match key.as_slice() {
                b"r" => {
                    let address = CellAddress::parse(&value)
                        .map_err(|err| XlsxError::Parse(format!("cell reference: {}", err)))?;
                    cell.col = address.col;
                }
                b"t" => cell.cell_type = Some(value),
                b"s" => cell.style_index = value.parse().ok(),
                _ => {}
            }
        }

        if cell.col >= MAX_COLS {
            return Err(XlsxError::Parse(format!(
                "cell column {} exceeds the sheet limit of {} columns",
                cell.col as u32 + 1,
                MAX_COLS
            )));
        }
        Ok(cell)
    }

    fn resolve_cell(&self, pending: PendingCell) -> XlsxResult<CellNode> {
        let value = match (pending.cell_type.as_deref(), pending.raw) {
            (Some("inlineStr"), _) => pending
                .inline
                .map(|s| CellValue::String(decode_excel_escapes(&s)))
                .unwrap_or(CellValue::Empty),
            (_, None) => CellValue::Empty,
            (Some("s"), Some(raw)) => {
                let index: usize = parse_number(b"v", &raw)?;
                let s = self.shared_strings.get(index).ok_or_else(|| {
                    XlsxError::Parse(format!(
                        "shared string index {} out of range ({} strings)",
                        index,
                        self.shared_strings.len()
                    ))
                })?;
                CellValue::String(s.clone())
            }
            (Some("b"), Some(raw)) => CellValue::Boolean(parse_bool(&raw)),
            (Some("str") | Some("e"), Some(raw)) => CellValue::String(decode_excel_escapes(&raw)),
            (_, Some(raw)) => match raw.parse::<f64>() {
                Ok(n) => CellValue::Number(n),
                Err(_) => {
                    log::warn!("non-numeric value {:?} in numeric cell; keeping text", raw);
                    CellValue::String(raw)
                }
            },
        };

        Ok(CellNode {
            col: pending.col,
            value,
            style_index: pending.style_index,
        })
    }
}

fn read_col(e: &BytesStart) -> XlsxResult<Col> {
    let mut min = None;
    let mut max = None;
    let mut col = Col::single(0);

    for (key, value) in attributes(e) {
        match key.as_slice() {
            b"min" => min = Some(parse_number::<u16>(&key, &value)?),
            b"max" => max = Some(parse_number::<u16>(&key, &value)?),
            b"width" => col.width = value.parse().ok(),
            b"customWidth" => col.custom_width = parse_bool(&value),
            b"hidden" => col.hidden = parse_bool(&value),
            b"bestFit" => col.best_fit = parse_bool(&value),
            b"outlineLevel" => col.outline_level = parse_or(&value, 0),
            b"style" => col.style_index = value.parse().ok(),
            _ => {}
        }
    }

    let min = min.ok_or_else(|| XlsxError::Parse("<col> without min".into()))?;
    let max = max.unwrap_or(min);
    if min == 0 || max < min {
        return Err(XlsxError::Parse(format!(
            "invalid column span {}..{}",
            min, max
        )));
    }
    col.min = min - 1;
    col.max = max - 1;
    Ok(col)
}

fn read_break(e: &BytesStart) -> XlsxResult<BreakNode> {
    let mut node = BreakNode {
        id: 0,
        min: 0,
        max: 0,
        manual: false,
    };
    let mut id = None;

    for (key, value) in attributes(e) {
        match key.as_slice() {
            b"id" => id = Some(parse_number::<u32>(&key, &value)?),
            b"min" => node.min = parse_or(&value, 0),
            b"max" => node.max = parse_or(&value, 0),
            b"man" => node.manual = parse_bool(&value),
            _ => {}
        }
    }

    node.id = id.ok_or_else(|| XlsxError::Parse("<brk> without id".into()))?;
    Ok(node)
}

/// All attributes of an element as owned key/value pairs
fn attributes(e: &BytesStart) -> Vec<(Vec<u8>, String)> {
    e.attributes()
        .flatten()
        .filter_map(|attr| {
            let value = attr.unescape_value().ok()?.into_owned();
            Some((attr.key.as_ref().to_vec(), value))
        })
        .collect()
}

fn attr_string(e: &BytesStart, name: &[u8]) -> Option<String> {
    attributes(e)
        .into_iter()
        .find(|(key, _)| key.as_slice() == name)
        .map(|(_, value)| value)
}

fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn parse_or<T: std::str::FromStr>(value: &str, fallback: T) -> T {
    value.parse().unwrap_or(fallback)
}

fn parse_number<T: std::str::FromStr>(key: &[u8], value: &str) -> XlsxResult<T> {
    value.trim().parse().map_err(|_| {
        XlsxError::Parse(format!(
            "invalid value {:?} for attribute {}",
            value,
            String::from_utf8_lossy(key)
        ))
    })
}
