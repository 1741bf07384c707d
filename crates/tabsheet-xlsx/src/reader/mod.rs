//! XLSX reader

mod worksheet;

pub use worksheet::read_worksheet_xml;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use tabsheet_core::{Workbook, WorkbookSettings};

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// Excel uses this format to encode characters XML cannot carry directly:
/// - `_x000d_` = CR (carriage return)
/// - `_x000a_` = LF (line feed)
/// - `_x005f_` = Underscore (escaped underscore)
fn decode_excel_escapes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("_x") {
        result.push_str(&rest[..pos]);
        let candidate = &rest[pos..];
        let decoded = candidate
            .get(2..6)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .filter(|_| candidate.as_bytes().get(6) == Some(&b'_'))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32);

        match decoded {
            Some(c) => {
                result.push(c);
                rest = &candidate[7..];
            }
            None => {
                result.push('_');
                rest = &candidate[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// XLSX file reader
pub struct XlsxReader;

impl XlsxReader {
    /// Read a workbook from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Workbook> {
        let file = File::open(path)?;
        Self::read(file)
    }

    /// Read a workbook from a reader
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<Workbook> {
        Self::read_with_settings(reader, WorkbookSettings::default())
    }

    /// Read a workbook, using `settings` for sheets added after loading
    pub fn read_with_settings<R: Read + Seek>(
        reader: R,
        settings: WorkbookSettings,
    ) -> XlsxResult<Workbook> {
        let mut archive = zip::ZipArchive::new(reader)?;

        // Verify this is an XLSX file
        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let shared_strings = Self::read_shared_strings(&mut archive)?;
        let info = Self::read_workbook_xml(&mut archive)?;
        let sheet_paths = Self::read_workbook_rels(&mut archive)?;

        let mut workbook = Workbook::with_settings(settings);
        workbook.settings_mut().date_1904 = info.date_1904;

        for (name, r_id) in &info.sheets {
            let Some(path) = sheet_paths.get(r_id) else {
                log::warn!("sheet {:?} has no worksheet relationship {}; skipping", name, r_id);
                continue;
            };

            let file = archive
                .by_name(path)
                .map_err(|_| XlsxError::MissingPart(path.clone()))?;
            let tree = read_worksheet_xml(BufReader::new(file), &shared_strings)?;
            log::debug!(
                "read sheet {:?} from {} ({} rows)",
                name,
                path,
                tree.sheet_data.rows.len()
            );
            workbook.add_loaded_worksheet(name, tree)?;
        }

        // Ensure at least one sheet exists
        if workbook.is_empty() {
            workbook.add_worksheet()?;
        } else if let Some(active) = info.active_tab {
            if active < workbook.sheet_count() {
                workbook.set_active_sheet(active)?;
            }
        }

        Ok(workbook)
    }

    /// Read the shared strings table
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<String>> {
        let mut strings = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => return Ok(strings), // No shared strings is valid
        };

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut current_string = String::new();
        let mut in_si = false;
        let mut in_t = false;
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current_string.clear();
                    }
                    b"rPh" => in_phonetic = true,
                    b"t" if in_si && !in_phonetic => in_t = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.local_name().as_ref() == b"si" => {
                    strings.push(String::new());
                }
                Ok(Event::End(e)) => match e.local_name().as_ref() {
                    b"si" => {
                        strings.push(decode_excel_escapes(&current_string));
                        current_string.clear();
                        in_si = false;
                    }
                    b"rPh" => in_phonetic = false,
                    b"t" => in_t = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_t => {
                    current_string.push_str(&e.unescape()?);
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(strings)
    }

    /// Read workbook.xml for sheet names, rIds and workbook properties
    fn read_workbook_xml<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<WorkbookInfo> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut info = WorkbookInfo::default();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) => match e.local_name().as_ref() {
                    b"sheet" => {
                        let mut name = None;
                        let mut r_id = None;

                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"name" => {
                                    name = attr.unescape_value().ok().map(|s| s.to_string());
                                }
                                b"r:id" => {
                                    r_id = attr.unescape_value().ok().map(|s| s.to_string());
                                }
                                _ => {}
                            }
                        }

                        if let (Some(name), Some(r_id)) = (name, r_id) {
                            info.sheets.push((name, r_id));
                        }
                    }
                    b"workbookPr" => {
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"date1904" {
                                info.date_1904 = attr
                                    .unescape_value()
                                    .map_or(false, |s| s.as_ref() == "1" || s.as_ref() == "true");
                            }
                        }
                    }
                    b"workbookView" => {
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"activeTab" {
                                info.active_tab = attr
                                    .unescape_value()
                                    .ok()
                                    .and_then(|s| s.parse::<usize>().ok());
                            }
                        }
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(info)
    }

    /// Read workbook.xml.rels to get sheet file paths
    fn read_workbook_rels<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, String>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.local_name().as_ref() == b"Relationship" =>
                {
                    let mut id = None;
                    let mut target = None;
                    let mut rel_type = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Id" => {
                                id = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"Target" => {
                                target = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"Type" => {
                                rel_type = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    // Only include worksheet relationships
                    if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                        if rel_type.ends_with("/worksheet") {
                            rels.insert(id, resolve_part_path(&target));
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }
}

/// What the reader needs from workbook.xml
#[derive(Debug, Default)]
struct WorkbookInfo {
    /// (name, relationship id) in tab order
    sheets: Vec<(String, String)>,
    active_tab: Option<usize>,
    date_1904: bool,
}

/// Resolve a relationship target from workbook.xml.rels to a zip entry name
fn resolve_part_path(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{}", target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_decode_excel_escapes() {
        assert_eq!(decode_excel_escapes("a_x000d_b"), "a\rb");
        assert_eq!(decode_excel_escapes("_x000A_"), "\n");
        assert_eq!(decode_excel_escapes("x_x005f_y"), "x_y");
        assert_eq!(decode_excel_escapes("plain_text"), "plain_text");
        assert_eq!(decode_excel_escapes("_x00_"), "_x00_");
        assert_eq!(decode_excel_escapes("trailing_x"), "trailing_x");
    }

    #[test]
    fn test_resolve_part_path() {
        assert_eq!(resolve_part_path("worksheets/sheet1.xml"), "xl/worksheets/sheet1.xml");
        assert_eq!(resolve_part_path("/xl/worksheets/sheet2.xml"), "xl/worksheets/sheet2.xml");
    }

    fn minimal_package(sheet_xml: &[u8], workbook_xml: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let cursor = Cursor::new(&mut buf);
            let mut zip = zip::ZipWriter::new(cursor);
            let options = zip::write::SimpleFileOptions::default();

            zip.start_file("[Content_Types].xml", options).unwrap();
            zip.write_all(br#"<?xml version="1.0"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#).unwrap();

            zip.start_file("xl/workbook.xml", options).unwrap();
            zip.write_all(workbook_xml).unwrap();

            zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
            zip.write_all(br#"<?xml version="1.0"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="/xl/worksheets/sheet2.xml"/></Relationships>"#).unwrap();

            zip.start_file("xl/sharedStrings.xml", options).unwrap();
            zip.write_all(br#"<?xml version="1.0"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><si><t>Hello</t></si><si><r><t>Rich</t></r><r><t>Text</t></r></si></sst>"#).unwrap();

            zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
            zip.write_all(sheet_xml).unwrap();

            zip.start_file("xl/worksheets/sheet2.xml", options).unwrap();
            zip.write_all(br#"<?xml version="1.0"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetViews><sheetView workbookViewId="0"/></sheetViews><sheetData/></worksheet>"#).unwrap();

            zip.finish().unwrap();
        }
        buf
    }

    #[test]
    fn test_read_package() {
        let bytes = minimal_package(
            br#"<?xml version="1.0"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetViews><sheetView tabSelected="1" workbookViewId="0"/></sheetViews><sheetData><row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c></row></sheetData></worksheet>"#,
            br#"<?xml version="1.0"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><workbookPr date1904="1"/><bookViews><workbookView activeTab="1"/></bookViews><sheets><sheet name="Data" sheetId="1" r:id="rId1"/><sheet name="Notes" sheetId="2" r:id="rId2"/></sheets></workbook>"#,
        );

        let workbook = XlsxReader::read(Cursor::new(bytes)).unwrap();

        assert_eq!(workbook.sheet_count(), 2);
        assert!(workbook.settings().date_1904);
        assert_eq!(workbook.active_sheet(), 1);

        let data = workbook.worksheet_by_name("Data").unwrap();
        let row = data.row(0).unwrap();
        assert_eq!(row.cell(0).unwrap().value.as_string(), Some("Hello"));
        assert_eq!(row.cell(1).unwrap().value.as_string(), Some("RichText"));
        // activeTab wins over the tabSelected flags in the parts
        assert!(!data.is_tab_selected());
        assert!(workbook.worksheet(1).unwrap().is_tab_selected());
    }

    #[test]
    fn test_read_rejects_non_package() {
        let mut buf = Vec::new();
        {
            let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
            zip.start_file("hello.txt", zip::write::SimpleFileOptions::default())
                .unwrap();
            zip.write_all(b"hi").unwrap();
            zip.finish().unwrap();
        }

        let result = XlsxReader::read(Cursor::new(buf));
        assert!(matches!(result, Err(XlsxError::InvalidFormat(_))));
    }
}
