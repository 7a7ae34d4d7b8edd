//! Input parsing for ploidy region tables.
//!
//! A table is line-oriented text where every non-blank line holds the
//! whitespace-delimited fields `CHROM START END SEX PLOIDY`. Parsing a line
//! either yields a complete [`PloidyRecord`] or fails with a
//! [`TableParseError`] naming the offending line; there is no
//! skip-and-continue mode.

pub mod table;

pub use table::{
    PloidyRecord,
    TableParseError,
    TableReader,
};

#[cfg(test)]
mod tests;
