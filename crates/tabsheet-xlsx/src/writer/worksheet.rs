//! `<worksheet>` part serialization

use tabsheet_core::{
    CellAddress, CellNode, CellValue, Col, HeaderFooterKind, HeaderFooterNode, PageBreaks,
    PageMargins, RowNode, SheetFormatPr, SheetPr, SheetViews, WorksheetTree,
};

use super::escape_xml;

/// Serialize a tree as a complete worksheet part
///
/// Children are written in schema order; absent optional children are
/// omitted. Style indices are not written.
pub fn write_worksheet_xml(tree: &WorksheetTree) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    if let Some(sheet_pr) = &tree.sheet_pr {
        write_sheet_pr(&mut xml, sheet_pr);
    }

    xml.push_str(&format!("\n    <dimension ref=\"{}\"/>", dimension_ref(tree)));

    if let Some(views) = &tree.sheet_views {
        write_sheet_views(&mut xml, views);
    }
    if let Some(format) = &tree.sheet_format_pr {
        write_sheet_format_pr(&mut xml, format);
    }
    if let Some(cols) = &tree.cols {
        if !cols.cols.is_empty() {
            xml.push_str("\n    <cols>");
            for col in &cols.cols {
                write_col(&mut xml, col);
            }
            xml.push_str("\n    </cols>");
        }
    }

    if tree.sheet_data.rows.is_empty() {
        xml.push_str("\n    <sheetData/>");
    } else {
        xml.push_str("\n    <sheetData>");
        for row in &tree.sheet_data.rows {
            write_row(&mut xml, row);
        }
        xml.push_str("\n    </sheetData>");
    }

    if let Some(margins) = &tree.page_margins {
        write_page_margins(&mut xml, margins);
    }
    if let Some(node) = &tree.header_footer {
        write_header_footer(&mut xml, node);
    }
    if let Some(breaks) = &tree.row_breaks {
        write_breaks(&mut xml, "rowBreaks", breaks);
    }
    if let Some(breaks) = &tree.col_breaks {
        write_breaks(&mut xml, "colBreaks", breaks);
    }

    xml.push_str("\n</worksheet>");
    xml
}

/// Used range as an A1 reference, "A1" for a sheet without cells
fn dimension_ref(tree: &WorksheetTree) -> String {
    let rows = &tree.sheet_data.rows;
    let cols = rows.iter().flat_map(|r| r.cells.iter().map(|c| c.col));
    let (Some(min_col), Some(max_col)) = (cols.clone().min(), cols.max()) else {
        return "A1".to_string();
    };

    let occupied = rows.iter().filter(|r| !r.cells.is_empty()).map(|r| r.row_num);
    let min_row = occupied.clone().min().unwrap_or(0);
    let max_row = occupied.max().unwrap_or(0);

    let start = CellAddress::new(min_row, min_col);
    let end = CellAddress::new(max_row, max_col);
    if start == end {
        start.to_a1_string()
    } else {
        format!("{}:{}", start.to_a1_string(), end.to_a1_string())
    }
}

fn write_sheet_pr(xml: &mut String, sheet_pr: &SheetPr) {
    if sheet_pr.tab_color.is_none() && sheet_pr.page_set_up_pr.is_none() {
        xml.push_str("\n    <sheetPr/>");
        return;
    }

    xml.push_str("\n    <sheetPr>");
    if let Some(color) = &sheet_pr.tab_color {
        xml.push_str(&format!("<tabColor rgb=\"{}\"/>", escape_xml(color)));
    }
    if let Some(pr) = &sheet_pr.page_set_up_pr {
        xml.push_str("<pageSetUpPr");
        if !pr.auto_page_breaks {
            xml.push_str(" autoPageBreaks=\"0\"");
        }
        if pr.fit_to_page {
            xml.push_str(" fitToPage=\"1\"");
        }
        xml.push_str("/>");
    }
    xml.push_str("</sheetPr>");
}

fn write_sheet_views(xml: &mut String, views: &SheetViews) {
    if views.views.is_empty() {
        return;
    }

    xml.push_str("\n    <sheetViews>");
    for view in &views.views {
        xml.push_str("\n        <sheetView");
        if view.tab_selected {
            xml.push_str(" tabSelected=\"1\"");
        }
        if let Some(show) = view.show_grid_lines {
            xml.push_str(&format!(" showGridLines=\"{}\"", bool_attr(show)));
        }
        if let Some(cell) = &view.top_left_cell {
            xml.push_str(&format!(" topLeftCell=\"{}\"", escape_xml(cell)));
        }
        if let Some(zoom) = view.zoom_scale {
            xml.push_str(&format!(" zoomScale=\"{}\"", zoom));
        }
        xml.push_str(&format!(" workbookViewId=\"{}\"", view.workbook_view_id));

        if view.selections.is_empty() {
            xml.push_str("/>");
            continue;
        }

        xml.push('>');
        for selection in &view.selections {
            xml.push_str("<selection");
            if let Some(pane) = &selection.pane {
                xml.push_str(&format!(" pane=\"{}\"", escape_xml(pane)));
            }
            if let Some(cell) = &selection.active_cell {
                xml.push_str(&format!(" activeCell=\"{}\"", escape_xml(cell)));
            }
            if let Some(sqref) = &selection.sqref {
                xml.push_str(&format!(" sqref=\"{}\"", escape_xml(sqref)));
            }
            xml.push_str("/>");
        }
        xml.push_str("</sheetView>");
    }
    xml.push_str("\n    </sheetViews>");
}

fn write_sheet_format_pr(xml: &mut String, format: &SheetFormatPr) {
    xml.push_str("\n    <sheetFormatPr");
    if let Some(base) = format.base_col_width {
        xml.push_str(&format!(" baseColWidth=\"{}\"", base));
    }
    if let Some(width) = format.default_col_width {
        xml.push_str(&format!(" defaultColWidth=\"{}\"", width));
    }
    xml.push_str(&format!(" defaultRowHeight=\"{}\"", format.default_row_height));
    if format.custom_height {
        xml.push_str(" customHeight=\"1\"");
    }
    xml.push_str("/>");
}

fn write_col(xml: &mut String, col: &Col) {
    xml.push_str(&format!("\n        <col min=\"{}\" max=\"{}\"", col.min + 1, col.max + 1));
    if let Some(width) = col.width {
        xml.push_str(&format!(" width=\"{}\"", width));
    }
    if col.hidden {
        xml.push_str(" hidden=\"1\"");
    }
    if col.best_fit {
        xml.push_str(" bestFit=\"1\"");
    }
    if col.custom_width {
        xml.push_str(" customWidth=\"1\"");
    }
    if col.outline_level > 0 {
        xml.push_str(&format!(" outlineLevel=\"{}\"", col.outline_level));
    }
    xml.push_str("/>");
}

fn write_row(xml: &mut String, row: &RowNode) {
    xml.push_str(&format!("\n        <row r=\"{}\"", row.row_num + 1));
    if let Some(height) = row.height {
        xml.push_str(&format!(" ht=\"{}\" customHeight=\"1\"", height));
    }
    if row.hidden {
        xml.push_str(" hidden=\"1\"");
    }

    if row.cells.is_empty() {
        xml.push_str("/>");
        return;
    }

    xml.push('>');
    for cell in &row.cells {
        write_cell(xml, row.row_num, cell);
    }
    xml.push_str("</row>");
}

fn write_cell(xml: &mut String, row_num: u32, cell: &CellNode) {
    let reference = CellAddress::new(row_num, cell.col).to_a1_string();
    match &cell.value {
        CellValue::Empty => {
            xml.push_str(&format!("<c r=\"{}\"/>", reference));
        }
        CellValue::Number(n) => {
            xml.push_str(&format!("<c r=\"{}\"><v>{}</v></c>", reference, n));
        }
        CellValue::Boolean(b) => {
            xml.push_str(&format!(
                "<c r=\"{}\" t=\"b\"><v>{}</v></c>",
                reference,
                bool_attr(*b)
            ));
        }
        CellValue::String(s) => {
            xml.push_str(&format!(
                "<c r=\"{}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
                reference,
                escape_xml(s)
            ));
        }
    }
}

fn write_page_margins(xml: &mut String, margins: &PageMargins) {
    xml.push_str(&format!(
        "\n    <pageMargins left=\"{}\" right=\"{}\" top=\"{}\" bottom=\"{}\" header=\"{}\" footer=\"{}\"/>",
        margins.left, margins.right, margins.top, margins.bottom, margins.header, margins.footer
    ));
}

fn write_header_footer(xml: &mut String, node: &HeaderFooterNode) {
    xml.push_str("\n    <headerFooter");
    if node.different_odd_even {
        xml.push_str(" differentOddEven=\"1\"");
    }
    if node.different_first {
        xml.push_str(" differentFirst=\"1\"");
    }

    let parts: Vec<(HeaderFooterKind, &str)> = HeaderFooterKind::ALL
        .iter()
        .filter_map(|&kind| node.slot(kind).as_deref().map(|text| (kind, text)))
        .collect();

    if parts.is_empty() {
        xml.push_str("/>");
        return;
    }

    xml.push('>');
    for (kind, text) in parts {
        let name = kind.element_name();
        xml.push_str(&format!("<{}>{}</{}>", name, escape_xml(text), name));
    }
    xml.push_str("</headerFooter>");
}

fn write_breaks(xml: &mut String, element: &str, breaks: &PageBreaks) {
    xml.push_str(&format!(
        "\n    <{} count=\"{}\" manualBreakCount=\"{}\"",
        element,
        breaks.len(),
        breaks.manual_count()
    ));

    if breaks.is_empty() {
        xml.push_str("/>");
        return;
    }

    xml.push('>');
    for brk in breaks.nodes() {
        xml.push_str(&format!("<brk id=\"{}\"", brk.id));
        if brk.min > 0 {
            xml.push_str(&format!(" min=\"{}\"", brk.min));
        }
        xml.push_str(&format!(" max=\"{}\"", brk.max));
        if brk.manual {
            xml.push_str(" man=\"1\"");
        }
        xml.push_str("/>");
    }
    xml.push_str(&format!("</{}>", element));
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
