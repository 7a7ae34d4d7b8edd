use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use super::typedef::{
    PosType,
    SeqName,
};

/// A genomic region: a sequence name with a half-open `[start, end)`
/// interval.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    seqname: SeqName,
    start:   PosType,
    end:     PosType,
}

impl Region {
    /// Creates a new `Region`.
    pub fn new(
        seqname: SeqName,
        start: PosType,
        end: PosType,
    ) -> Self {
        assert!(
            start <= end,
            "Start position must be less than or equal to end position"
        );
        Self {
            seqname,
            start,
            end,
        }
    }

    /// Returns the sequence name.
    pub fn seqname(&self) -> &str {
        &self.seqname
    }

    /// Returns the start position (inclusive).
    pub fn start(&self) -> PosType {
        self.start
    }

    /// Returns the end position (exclusive).
    pub fn end(&self) -> PosType {
        self.end
    }

    /// Returns the length of the region.
    pub fn length(&self) -> PosType {
        self.end - self.start
    }

    /// Checks whether `pos` falls inside the half-open interval.
    pub fn contains(
        &self,
        pos: PosType,
    ) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Decomposes the region into its seqname and interval bounds.
    pub fn into_parts(self) -> (SeqName, PosType, PosType) {
        (self.seqname, self.start, self.end)
    }
}

impl Display for Region {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.seqname, self.start, self.end)
    }
}
