use super::*;
use std::io::Cursor;

const SAMPLE_LOG: &str = "\
Logger v2.1 serial 0042
DateTime,Time (sec),Volts (V),Amps (mA)
2024-09-16 15:56:10,0,3.71,12.5
2024-09-16 15:56:11,1,3.71,12.7
2024-09-16 15:56:12,2,3.70,40.0
2024-09-16 15:56:13,3,3.70,12.6
";

fn load(text: &str, options: &LoadOptions) -> Result<SampleTable, LoadError> {
    load_samples_from_reader(Cursor::new(text), options)
}

#[test]
fn test_load_default_layout() {
    let table = load(SAMPLE_LOG, &LoadOptions::default()).unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(table.times(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(table.currents(), vec![12.5, 12.7, 40.0, 12.6]);
    assert_eq!(table.wall_clock_span_s(), Some(3.0));
}

#[test]
fn test_max_rows_caps_data_rows() {
    let options = LoadOptions {
        max_rows: Some(2),
        ..Default::default()
    };
    let table = load(SAMPLE_LOG, &options).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.currents(), vec![12.5, 12.7]);
}

#[test]
fn test_max_rows_above_available_is_fine() {
    let options = LoadOptions {
        max_rows: Some(12990),
        ..Default::default()
    };
    let table = load(SAMPLE_LOG, &options).unwrap();
    assert_eq!(table.len(), 4);
}

#[test]
fn test_skip_rows_zero() {
    let text = "DateTime,Time (sec),Amps (mA)\n2024-09-16 15:56:10,0,1\n";
    let options = LoadOptions {
        skip_rows: 0,
        ..Default::default()
    };
    let table = load(text, &options).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn test_latin1_metadata_line_is_skipped() {
    let mut bytes = b"Logger temp 25\xb0C\n".to_vec();
    bytes.extend_from_slice(
        b"DateTime,Time (sec),Amps (mA)\n\
          2024-09-16 15:56:10,0,4.0\n\
          2024-09-16 15:56:11,1,6.0\n",
    );

    let table = load_samples_from_reader(Cursor::new(bytes), &LoadOptions::default()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.charge_mas().unwrap(), 5.0);
}

#[test]
fn test_skip_rows_past_end() {
    let options = LoadOptions {
        skip_rows: 3,
        ..Default::default()
    };
    let err = load("one\ntwo\n", &options).unwrap_err();
    assert!(matches!(err, LoadError::MissingHeader { skipped: 3 }));
}

#[test]
fn test_missing_current_column() {
    let text = "meta\nDateTime,Time (sec),Volts (V)\n2024-09-16 15:56:10,0,3.7\n";
    let err = load(text, &LoadOptions::default()).unwrap_err();
    match err {
        LoadError::MissingColumn(name) => assert_eq!(name, "Amps (mA)"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_custom_schema_and_delimiter() {
    let text = "ts;t;i\n2024-09-16 15:56:10;0;5\n2024-09-16 15:56:20;10;7\n";
    let options = LoadOptions {
        skip_rows: 0,
        delimiter: b';',
        schema: ColumnSchema {
            timestamp: "ts".to_string(),
            time: "t".to_string(),
            current: "i".to_string(),
        },
        ..Default::default()
    };
    let table = load(text, &options).unwrap();
    assert_eq!(table.currents(), vec![5.0, 7.0]);
    assert_eq!(table.time_span_s(), Some(10.0));
}

#[test]
fn test_non_numeric_current() {
    let text = "meta\nDateTime,Time (sec),Amps (mA)\n\
                2024-09-16 15:56:10,0,1.0\n\
                2024-09-16 15:56:11,1,n/a\n";
    let err = load(text, &LoadOptions::default()).unwrap_err();
    match err {
        LoadError::InvalidNumber { row, column, value } => {
            assert_eq!(row, 2);
            assert_eq!(column, "Amps (mA)");
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_nan_is_rejected() {
    let text = "meta\nDateTime,Time (sec),Amps (mA)\n2024-09-16 15:56:10,NaN,1.0\n";
    let err = load(text, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidNumber { row: 1, .. }));
}

#[test]
fn test_bad_timestamp() {
    let text = "meta\nDateTime,Time (sec),Amps (mA)\nnot-a-date,0,1.0\n";
    let err = load(text, &LoadOptions::default()).unwrap_err();
    match err {
        LoadError::InvalidTimestamp { row, value } => {
            assert_eq!(row, 1);
            assert_eq!(value, "not-a-date");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_explicit_timestamp_format() {
    let text = "meta\nDateTime,Time (sec),Amps (mA)\n16.09.2024 15:56:10,0,1.0\n";
    let options = LoadOptions {
        timestamp_format: Some("%d.%m.%Y %H:%M:%S".to_string()),
        ..Default::default()
    };
    let table = load(text, &options).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn test_short_row() {
    let text = "meta\nDateTime,Time (sec),Amps (mA)\n2024-09-16 15:56:10,0\n";
    let err = load(text, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::MissingField { row: 1, .. }));
}

#[test]
fn test_header_only() {
    let text = "meta\nDateTime,Time (sec),Amps (mA)\n";
    let table = load(text, &LoadOptions::default()).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_backwards_time_is_kept() {
    let text = "meta\nDateTime,Time (sec),Amps (mA)\n\
                2024-09-16 15:56:10,5,1.0\n\
                2024-09-16 15:56:11,4,1.0\n";
    let table = load(text, &LoadOptions::default()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.backwards_steps(), 1);
}

#[test]
fn test_missing_file() {
    let err = load_samples("/nonexistent/AMP.CSV", &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_non_utf8_data_row_is_csv_error() {
    let bytes = b"meta\nDateTime,Time (sec),Amps (mA)\n2024-09-16 15:56:10,0,1\xff\n".to_vec();
    let err = load_samples_from_reader(Cursor::new(bytes), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Csv(_)));
}
