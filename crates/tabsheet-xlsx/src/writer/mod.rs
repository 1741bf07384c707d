//! XLSX writer

mod worksheet;

pub use worksheet::write_worksheet_xml;

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use crate::error::{XlsxError, XlsxResult};
use tabsheet_core::Workbook;

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(workbook, file)
    }

    /// Write a workbook to a writer
    pub fn write<W: Write + Seek>(workbook: &Workbook, writer: W) -> XlsxResult<()> {
        if workbook.is_empty() {
            return Err(XlsxError::InvalidFormat(
                "a workbook needs at least one worksheet".into(),
            ));
        }

        let mut zip = zip::ZipWriter::new(writer);

        Self::write_content_types(&mut zip, workbook)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_workbook_xml(&mut zip, workbook)?;
        Self::write_workbook_rels(&mut zip, workbook)?;
        Self::write_styles_xml(&mut zip)?;

        for (i, sheet) in workbook.worksheets().enumerate() {
            let options = zip::write::SimpleFileOptions::default();
            zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)?;
            zip.write_all(write_worksheet_xml(sheet.tree()).as_bytes())?;
            log::debug!(
                "wrote sheet '{}' ({} rows)",
                sheet.name(),
                sheet.physical_row_count()
            );
        }

        zip.finish()?;
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        // Add an override for each worksheet
        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/workbook.xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        if workbook.settings().date_1904 {
            content.push_str("\n    <workbookPr date1904=\"1\"/>");
        }
        content.push_str(&format!(
            "\n    <bookViews><workbookView activeTab=\"{}\"/></bookViews>\n    <sheets>",
            workbook.active_sheet()
        ));

        for (i, sheet) in workbook.worksheets().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape_xml(sheet.name()),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/_rels/workbook.xml.rels", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        // Styles relationship
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
            workbook.sheet_count() + 1
        ));

        content.push_str("\n</Relationships>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Minimal stylesheet with the single default cell format
    fn write_styles_xml<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/styles.xml", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>
    <fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>
    <borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>
    <cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>
    <cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>
    <cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>
</styleSheet>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// Escape special XML characters in text and attribute values
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("<tag attr=\"x\">"), "&lt;tag attr=&quot;x&quot;&gt;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_write_package_parts() {
        let mut workbook = Workbook::new();
        workbook.add_worksheet_with_name("R&D").unwrap();
        workbook.set_active_sheet(1).unwrap();

        let mut buf = Vec::new();
        XlsxWriter::write(&workbook, Cursor::new(&mut buf)).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(buf)).unwrap();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/styles.xml",
            "xl/worksheets/sheet1.xml",
            "xl/worksheets/sheet2.xml",
        ] {
            assert!(archive.by_name(part).is_ok(), "missing {}", part);
        }

        let mut workbook_xml = String::new();
        archive
            .by_name("xl/workbook.xml")
            .unwrap()
            .read_to_string(&mut workbook_xml)
            .unwrap();
        assert!(workbook_xml.contains(r#"<sheet name="R&amp;D" sheetId="2" r:id="rId2"/>"#));
        assert!(workbook_xml.contains(r#"activeTab="1""#));
    }

    #[test]
    fn test_write_rejects_empty_workbook() {
        let result = XlsxWriter::write(&Workbook::empty(), Cursor::new(Vec::new()));
        assert!(matches!(result, Err(XlsxError::InvalidFormat(_))));
    }
}
