use std::io::Cursor;

use rstest::rstest;

use super::table::{
    PloidyRecord,
    TableParseError,
    TableReader,
};

#[test]
fn test_parse_record() {
    let record: PloidyRecord = "chr1 100 200 M 1".parse().unwrap();
    assert_eq!(record.region.seqname(), "chr1");
    assert_eq!(record.region.start(), 100);
    assert_eq!(record.region.end(), 200);
    assert_eq!(record.sex, "M");
    assert_eq!(record.ploidy, 1);
}

#[test]
fn test_parse_record_repeated_whitespace() {
    let record: PloidyRecord = "  chrX \t 1   60000\tM  1 ".parse().unwrap();
    assert_eq!(record.region.seqname(), "chrX");
    assert_eq!(record.region.start(), 1);
    assert_eq!(record.region.end(), 60000);
    assert_eq!(record.sex, "M");
    assert_eq!(record.ploidy, 1);
}

#[test]
fn test_parse_record_ignores_trailing_fields() {
    let record: PloidyRecord = "chr1 100 200 M 1 leftover text".parse().unwrap();
    assert_eq!(record.ploidy, 1);
}

#[rstest]
#[case("")]
#[case("chr1")]
#[case("chr1 100")]
#[case("chr1 100 200")]
#[case("chr1 100 200 M")]
fn test_parse_record_wrong_field_count(#[case] line: &str) {
    let err = line.parse::<PloidyRecord>().unwrap_err();
    assert_eq!(err, TableParseError::WrongFieldCount(line.trim().to_owned()));
}

#[rstest]
#[case("chr1 x 200 M 1")]
#[case("chr1 100 y M 1")]
#[case("chr1 -5 200 M 1")]
#[case("chr1 300 200 M 1")]
fn test_parse_record_invalid_bounds(#[case] line: &str) {
    let err = line.parse::<PloidyRecord>().unwrap_err();
    assert_eq!(err, TableParseError::InvalidBounds(line.to_owned()));
}

#[rstest]
#[case("chr1 100 200 M x")]
#[case("chr1 100 200 M 2.5")]
#[case("chr1 100 200 M -1")]
fn test_parse_record_invalid_ploidy(#[case] line: &str) {
    let err = line.parse::<PloidyRecord>().unwrap_err();
    assert_eq!(err, TableParseError::InvalidPloidy(line.to_owned()));
}

#[test]
fn test_table_reader_skips_blank_lines() {
    let input = "chr1 100 200 M 1\n\n   \nchr1 150 250 F 3\n";
    let records: Vec<_> = TableReader::new(Cursor::new(input))
        .collect::<anyhow::Result<_>>()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sex, "M");
    assert_eq!(records[1].sex, "F");
}

#[test]
fn test_table_reader_handles_crlf() {
    let input = "chr1 100 200 M 1\r\nchr1 150 250 F 3\r\n";
    let records: Vec<_> = TableReader::new(Cursor::new(input))
        .collect::<anyhow::Result<_>>()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].region.end(), 250);
}

#[test]
fn test_table_reader_error_names_line() {
    let input = "chr1 100 200 M 1\nchr2 1 50 F 2\nchr3 100\n";
    let mut reader = TableReader::new(Cursor::new(input));

    assert!(reader.next().unwrap().is_ok());
    assert!(reader.next().unwrap().is_ok());

    let err = reader.next().unwrap().unwrap_err();
    assert!(err.to_string().contains("line 3"));
    assert_eq!(
        err.downcast_ref::<TableParseError>(),
        Some(&TableParseError::WrongFieldCount("chr3 100".to_owned()))
    );
}

#[test]
fn test_table_reader_empty_input() {
    let mut reader = TableReader::new(Cursor::new(""));
    assert!(reader.next().is_none());
}
