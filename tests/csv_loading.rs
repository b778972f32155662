use csvstat::ingestion::csv::{load_csv_from_path, load_csv_from_reader, reader_builder};
use csvstat::ingestion::{load_from_path, LoadOptions};
use csvstat::ErrorKind;

#[test]
fn load_sample_from_path() {
    let ds = load_csv_from_path("tests/fixtures/sample.csv", b',').unwrap();

    assert_eq!(ds.schema.columns, vec!["id", "value", "category", "amount"]);
    assert_eq!(ds.row_count(), 10);
    assert_eq!(ds.rows[0], vec!["1", "100", "A", "50.5"]);
    assert_eq!(ds.rows[9], vec!["10", "160", "C", "72.0"]);
}

#[test]
fn quoted_fields_and_ragged_rows() {
    let ds = load_from_path("tests/fixtures/quoted_ragged.csv", &LoadOptions::default()).unwrap();
    assert_eq!(ds.row_count(), 3);

    let first = ds.record(0).unwrap();
    assert_eq!(first.get("name"), Some("Lovelace, Ada"));
    assert_eq!(first.get("city"), Some("London\nUK"));

    // Short row padded, long row cut to the header.
    assert_eq!(ds.rows[1], vec!["Turing", "Wilmslow", ""]);
    assert_eq!(ds.rows[2], vec!["Hopper", "Arlington", "91"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_from_path("tests/fixtures/does_not_exist.csv", &LoadOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn csv_writer_round_trip_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round_trip.csv");

    let rows: Vec<Vec<String>> = (0..25)
        .map(|i| {
            vec![
                i.to_string(),
                format!("name {i}, with comma"),
                format!("\"quoted\" {i}\nsecond line"),
                String::new(),
            ]
        })
        .collect();

    let mut wtr = csv::Writer::from_path(&path).unwrap();
    wtr.write_record(["id", "name", "note", "empty"]).unwrap();
    for row in &rows {
        wtr.write_record(row).unwrap();
    }
    wtr.flush().unwrap();
    drop(wtr);

    let ds = load_csv_from_path(&path, b',').unwrap();
    assert_eq!(ds.row_count(), rows.len());
    assert_eq!(ds.rows, rows);
}

#[test]
fn semicolon_delimited_reader() {
    let mut rdr = reader_builder(b';').from_reader("id;label\n1;a,b\n".as_bytes());
    let ds = load_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(ds.record(0).unwrap().get("label"), Some("a,b"));
}
