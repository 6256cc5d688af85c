//! End-to-end tests for the write path (create -> save -> read back -> verify)

use std::path::PathBuf;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use relay_sheets::codec::{Destination, SourceBook};
use relay_sheets::{
    read_cell, read_column, read_excel, read_row, read_titles, write_excel, CellValue, Error,
    FieldValue, RowValues, Workbook,
};

fn temp_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn person(name: &str, age: f64) -> RowValues {
    RowValues::from([
        ("name".to_string(), FieldValue::from(name)),
        ("age".to_string(), FieldValue::from(age)),
    ])
}

#[test]
fn header_and_body_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "people.xlsx");

    let rows = vec![person("Ann", 30.0), person("Bo", 25.0)];
    write_excel(&path, "people", &["name", "age"], &rows).unwrap();

    assert_eq!(read_titles(&path, 0).unwrap(), vec!["name", "age"]);
    assert_eq!(read_row(&path, 0, 1).unwrap(), vec!["Ann", "30"]);
    assert_eq!(read_row(&path, 0, 2).unwrap(), vec!["Bo", "25"]);
    assert_eq!(read_excel(&path, Some(0)).unwrap(), "nameageAnn30Bo25");
}

#[test]
fn value_dispatch_by_field_type() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "types.xlsx");

    let joined = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let rows = vec![RowValues::from([
        ("name".to_string(), FieldValue::from("Ann")),
        ("age".to_string(), FieldValue::from(30.0)),
        ("active".to_string(), FieldValue::from(true)),
        ("joined".to_string(), FieldValue::from(joined)),
        ("notes".to_string(), FieldValue::Null),
    ])];
    write_excel(
        &path,
        "types",
        &["name", "age", "active", "joined", "notes"],
        &rows,
    )
    .unwrap();

    assert_eq!(read_cell(&path, 0, 1, 0).unwrap(), "Ann");
    // numeric 30.0 reads back as "30", not "30.0"
    assert_eq!(read_cell(&path, 0, 1, 1).unwrap(), "30");
    assert_eq!(read_cell(&path, 0, 1, 2).unwrap(), "true");
    assert_eq!(read_cell(&path, 0, 1, 3).unwrap(), "2024-03-01 00:00:00");
    // a null value leaves its cell unset
    assert_eq!(read_row(&path, 0, 1).unwrap().len(), 4);
}

#[test]
fn duplicate_title_creates_no_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "dup.xlsx");

    match write_excel(&path, "s", &["name", "age", "name"], &[]) {
        Err(Error::Model(relay_sheets_core::Error::DuplicateTitle(t))) => assert_eq!(t, "name"),
        other => panic!("expected DuplicateTitle, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn unknown_row_key_creates_no_file() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "unknown.xlsx");

    let rows = vec![RowValues::from([(
        "height".to_string(),
        FieldValue::from(180.0),
    )])];
    match write_excel(&path, "s", &["name", "age"], &rows) {
        Err(Error::Model(relay_sheets_core::Error::UnknownColumn(k))) => assert_eq!(k, "height"),
        other => panic!("expected UnknownColumn, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn empty_document_reads_as_empty_string() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "empty.xlsx");

    write_excel(&path, "blank", &[], &[]).unwrap();
    assert_eq!(read_excel(&path, Some(0)).unwrap(), "");
    assert_eq!(read_titles(&path, 0).unwrap(), Vec::<String>::new());
}

#[test]
fn all_sheets_concatenate_in_order() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "multi.xlsx");

    let mut wb = Workbook::new();
    let alpha = wb.add_sheet("alpha").unwrap();
    alpha.set_cell(0, 0, CellValue::text("a1"));
    alpha.set_cell(2, 3, CellValue::number(7.0));
    let beta = wb.add_sheet("beta").unwrap();
    beta.set_cell(0, 0, CellValue::text("b1"));
    wb.add_sheet("gamma").unwrap();

    let mut dest = Destination::create(&path).unwrap();
    dest.write_workbook(&wb).unwrap();
    dest.save().unwrap();

    let names = SourceBook::open(&path).unwrap().sheet_names();
    assert_eq!(names, vec!["alpha", "beta", "gamma"]);

    let all = read_excel(&path, None).unwrap();
    let joined: String = (0..3)
        .map(|i| read_excel(&path, Some(i)).unwrap())
        .collect();
    assert_eq!(all, joined);
    assert_eq!(all, "a17b1");
}

#[test]
fn read_column_walks_present_rows() {
    let dir = TempDir::new().unwrap();
    let path = temp_path(&dir, "col.xlsx");

    let rows = vec![person("Ann", 30.0), person("Bo", 25.0)];
    write_excel(&path, "people", &["name", "age"], &rows).unwrap();

    assert_eq!(read_column(&path, 0, 0).unwrap(), vec!["name", "Ann", "Bo"]);
    assert_eq!(read_column(&path, 0, 1).unwrap(), vec!["age", "30", "25"]);
}

#[test]
fn unreadable_paths_fail_with_typed_errors() {
    assert!(matches!(
        read_excel("notes.txt", None),
        Err(Error::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        read_excel("", None),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        read_excel("no_extension", None),
        Err(Error::InvalidArgument(_))
    ));

    // allow-listed extension but no file behind it
    let dir = TempDir::new().unwrap();
    let missing = temp_path(&dir, "missing.xlsx");
    assert!(matches!(
        read_excel(&missing, None),
        Err(Error::Read(_) | Error::Io(_))
    ));
}

#[test]
fn write_dispatch_ignores_the_read_allow_list() {
    let dir = TempDir::new().unwrap();

    // exactly "xls" selects the legacy variant, which has no serializer
    let legacy = temp_path(&dir, "out.xls");
    assert!(matches!(
        write_excel(&legacy, "s", &["name"], &[]),
        Err(Error::UnsupportedFormat { .. })
    ));
    assert!(!legacy.exists());

    // any other token goes to the modern writer, even non-spreadsheet ones
    let odd = temp_path(&dir, "out.txt");
    write_excel(&odd, "s", &["name"], &[]).unwrap();
    assert!(odd.exists());
}
