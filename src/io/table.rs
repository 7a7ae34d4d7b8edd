use std::io::BufRead;
use std::str::FromStr;

use anyhow::Context;
use thiserror::Error;

use crate::data_structs::typedef::{
    PloidyType,
    PosType,
};
use crate::data_structs::Region;

/// Failure modes when parsing a single ploidy table line.
///
/// The variants keep the offending line text so that a load failure can be
/// reported with line-accurate diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableParseError {
    /// Fewer than the five `CHROM START END SEX PLOIDY` fields.
    #[error("expected 5 fields `CHROM START END SEX PLOIDY`, could not parse: {0}")]
    WrongFieldCount(String),
    /// START/END missing numeric form, or START > END.
    #[error("could not parse interval bounds: {0}")]
    InvalidBounds(String),
    /// PLOIDY is not a base-10 non-negative integer.
    #[error("could not parse ploidy: {0}")]
    InvalidPloidy(String),
}

/// One parsed `CHROM START END SEX PLOIDY` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PloidyRecord {
    pub region: Region,
    pub sex:    String,
    pub ploidy: PloidyType,
}

impl FromStr for PloidyRecord {
    type Err = TableParseError;

    /// Parses a whitespace-delimited table line. Arbitrary repeated
    /// whitespace between fields is accepted; fields after PLOIDY are
    /// ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.split_whitespace();
        let (chrom, start, end, sex, ploidy) = match (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) {
            (Some(c), Some(s), Some(e), Some(x), Some(p)) => (c, s, e, x, p),
            _ => {
                return Err(TableParseError::WrongFieldCount(
                    line.trim().to_owned(),
                ))
            },
        };

        let start: PosType = start
            .parse()
            .map_err(|_| TableParseError::InvalidBounds(line.trim().to_owned()))?;
        let end: PosType = end
            .parse()
            .map_err(|_| TableParseError::InvalidBounds(line.trim().to_owned()))?;
        if start > end {
            return Err(TableParseError::InvalidBounds(line.trim().to_owned()));
        }

        let ploidy: PloidyType = ploidy
            .parse()
            .map_err(|_| TableParseError::InvalidPloidy(line.trim().to_owned()))?;

        Ok(Self {
            region: Region::new(chrom.to_owned(), start, end),
            sex: sex.to_owned(),
            ploidy,
        })
    }
}

/// Streaming reader over a ploidy table.
///
/// Yields one [`PloidyRecord`] per non-blank line; parse failures carry the
/// 1-based line number and abort iteration at the caller's discretion (the
/// loaders in this crate treat the first error as fatal).
pub struct TableReader<R> {
    reader:  R,
    line_no: usize,
    buf:     String,
}

impl<R: BufRead> TableReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// 1-based number of the last line read.
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for TableReader<R> {
    type Item = anyhow::Result<PloidyRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {},
                Err(e) => {
                    return Some(
                        Err(e).context("failed to read ploidy table line"),
                    )
                },
            }
            self.line_no += 1;
            let line = self.buf.trim();
            if line.is_empty() {
                continue;
            }
            return Some(
                line.parse::<PloidyRecord>()
                    .with_context(|| format!("ploidy table line {}", self.line_no)),
            );
        }
    }
}
