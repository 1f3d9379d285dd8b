//! Raw sheet reader used to check generated fixtures.
//!
//! calamine trims trailing empty rows from a range, so blank-row fixtures are
//! checked against the sheet XML directly: every `<c>` element counts, with or
//! without a value.

#![allow(dead_code)]

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::error::Error;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

pub type TestResult<T> = Result<T, Box<dyn Error>>;

/// Decoded contents of a generated workbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWorkbook {
    pub sheet_names: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn read_file(path: &Path) -> TestResult<RawWorkbook> {
    read_bytes(&std::fs::read(path)?)
}

pub fn read_bytes(bytes: &[u8]) -> TestResult<RawWorkbook> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let workbook_xml = read_entry(&mut archive, "xl/workbook.xml")?
        .ok_or("xl/workbook.xml is missing")?;
    let sheet_xml = read_entry(&mut archive, "xl/worksheets/sheet1.xml")?
        .ok_or("xl/worksheets/sheet1.xml is missing")?;
    let shared_strings = match read_entry(&mut archive, "xl/sharedStrings.xml")? {
        Some(xml) => parse_shared_strings(&xml)?,
        None => Vec::new(),
    };

    Ok(RawWorkbook {
        sheet_names: parse_sheet_names(&workbook_xml)?,
        rows: parse_rows(&sheet_xml, &shared_strings)?,
    })
}

/// Raw XML of the first worksheet.
pub fn sheet_xml(bytes: &[u8]) -> TestResult<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    Ok(read_entry(&mut archive, "xl/worksheets/sheet1.xml")?
        .ok_or("xl/worksheets/sheet1.xml is missing")?)
}

/// Decodes an arbitrary worksheet XML body; used to check the reader itself.
pub fn parse_sheet_xml(xml: &str, shared_strings: &[String]) -> TestResult<Vec<Vec<String>>> {
    parse_rows(xml, shared_strings)
}

fn read_entry(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> TestResult<Option<String>> {
    match archive.by_name(name) {
        Ok(mut file) => {
            let mut xml = String::new();
            file.read_to_string(&mut xml)?;
            Ok(Some(xml))
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn attr(e: &BytesStart, key: &[u8]) -> TestResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(String::from_utf8(attr.value.into_owned())?));
        }
    }
    Ok(None)
}

fn parse_sheet_names(xml: &str) -> TestResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut names = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"sheet" => {
                if let Some(name) = attr(&e, b"name")? {
                    names.push(name);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(names)
}

fn parse_shared_strings(xml: &str) -> TestResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut strings = Vec::new();
    let mut current = String::new();
    let mut in_t = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"si" => current.clear(),
                b"t" => in_t = true,
                _ => {}
            },
            Event::Text(t) if in_t => current.push_str(&t.unescape()?),
            Event::End(e) => match e.name().as_ref() {
                b"t" => in_t = false,
                b"si" => strings.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(strings)
}

/// Splits an A1 reference into 0-based (row, col).
pub fn parse_cell_ref(cell_ref: &str) -> TestResult<(usize, usize)> {
    let split = cell_ref
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| format!("bad cell reference: {cell_ref}"))?;
    let (letters, digits) = cell_ref.split_at(split);

    let col = letters
        .bytes()
        .fold(0usize, |acc, b| acc * 26 + usize::from(b - b'A' + 1))
        - 1;
    let row = digits.parse::<usize>()? - 1;
    Ok((row, col))
}

/// Makes sure the row named by a `<row r="N">` element exists, even with no cells.
fn touch_row(rows: &mut Vec<Vec<String>>, e: &BytesStart) -> TestResult<()> {
    if let Some(r) = attr(e, b"r")? {
        let row = r.parse::<usize>()? - 1;
        if rows.len() <= row {
            rows.resize(row + 1, Vec::new());
        }
    }
    Ok(())
}

struct PendingCell {
    row: usize,
    col: usize,
    kind: Option<String>,
    value: String,
}

fn parse_rows(xml: &str, shared_strings: &[String]) -> TestResult<Vec<Vec<String>>> {
    let mut reader = Reader::from_str(xml);
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut pending: Option<PendingCell> = None;
    let mut in_value = false;

    let place = |rows: &mut Vec<Vec<String>>, cell: PendingCell| -> TestResult<()> {
        let value = match cell.kind.as_deref() {
            Some("s") if !cell.value.is_empty() => shared_strings
                .get(cell.value.parse::<usize>()?)
                .cloned()
                .ok_or("shared string index out of range")?,
            _ => cell.value,
        };
        if rows.len() <= cell.row {
            rows.resize(cell.row + 1, Vec::new());
        }
        let row = &mut rows[cell.row];
        if row.len() <= cell.col {
            row.resize(cell.col + 1, String::new());
        }
        row[cell.col] = value;
        Ok(())
    };

    loop {
        match reader.read_event()? {
            Event::Empty(e) if e.name().as_ref() == b"c" => {
                let cell_ref = attr(&e, b"r")?.ok_or("cell without reference")?;
                let (row, col) = parse_cell_ref(&cell_ref)?;
                place(
                    &mut rows,
                    PendingCell {
                        row,
                        col,
                        kind: attr(&e, b"t")?,
                        value: String::new(),
                    },
                )?;
            }
            Event::Empty(e) if e.name().as_ref() == b"row" => {
                // an empty <row/> still occupies its row number
                touch_row(&mut rows, &e)?;
            }
            Event::Start(e) => match e.name().as_ref() {
                b"row" => touch_row(&mut rows, &e)?,
                b"c" => {
                    let cell_ref = attr(&e, b"r")?.ok_or("cell without reference")?;
                    let (row, col) = parse_cell_ref(&cell_ref)?;
                    pending = Some(PendingCell {
                        row,
                        col,
                        kind: attr(&e, b"t")?,
                        value: String::new(),
                    });
                }
                b"v" | b"t" => in_value = true,
                _ => {}
            },
            Event::Text(t) if in_value => {
                if let Some(cell) = pending.as_mut() {
                    cell.value.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"v" | b"t" => in_value = false,
                b"c" => {
                    if let Some(cell) = pending.take() {
                        place(&mut rows, cell)?;
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(rows)
}
