//! Ploidy configuration and point-query resolution.
//!
//! [`PloidyMap`] owns the sex registry and the region index, and answers
//! "what ploidy applies at this coordinate" for every registered sex. It is
//! built once from a table file or an inline preset string and queried
//! read-only afterwards; all query methods take `&self`, so a loaded map can
//! be shared across threads.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::{
    PloidyType,
    PosType,
    SexId,
};
use crate::data_structs::{
    RegionIntervalMap,
    SexRegistry,
};
use crate::io::table::{
    PloidyRecord,
    TableReader,
};

/// Interval payload: which sex a region rule applies to and the ploidy it
/// assigns there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SexPloidy {
    pub sex:    SexId,
    pub ploidy: PloidyType,
}

/// Result of resolving the ploidy at a single genomic position.
///
/// Holds one ploidy per registered sex (indexed by [`SexId`]) plus the
/// min/max ploidy applicable at the queried point. The min/max reflect only
/// overlapping non-default entries; when every overlapping entry carries the
/// default ploidy (or nothing overlaps at all), min and max both equal the
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPloidy {
    sex_ploidy: Vec<PloidyType>,
    min:        PloidyType,
    max:        PloidyType,
}

impl ResolvedPloidy {
    /// Ploidy per sex, indexed by [`SexId`].
    pub fn sex_ploidy(&self) -> &[PloidyType] {
        &self.sex_ploidy
    }

    /// Ploidy of one sex, or `None` for an unregistered id.
    pub fn of_sex(
        &self,
        sex: SexId,
    ) -> Option<PloidyType> {
        self.sex_ploidy.get(sex).copied()
    }

    /// Minimum ploidy applicable at the queried point.
    pub fn min(&self) -> PloidyType {
        self.min
    }

    /// Maximum ploidy applicable at the queried point.
    pub fn max(&self) -> PloidyType {
        self.max
    }

    pub fn into_parts(self) -> (Vec<PloidyType>, PloidyType, PloidyType) {
        (self.sex_ploidy, self.min, self.max)
    }
}

/// Region- and sex-aware ploidy configuration.
///
/// Wherever no rule overlaps a point, every sex gets the default ploidy.
/// Overlapping rules override the default per sex; rules that explicitly
/// repeat the default are treated as pass-through and never erase an
/// earlier override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PloidyMap {
    default: PloidyType,
    min:     PloidyType,
    max:     PloidyType,
    sexes:   SexRegistry,
    regions: RegionIntervalMap<SexPloidy>,
}

impl PloidyMap {
    /// Creates an empty configuration where `default` applies everywhere.
    pub fn new(default: PloidyType) -> Self {
        Self {
            default,
            min: default,
            max: default,
            sexes: SexRegistry::new(),
            regions: RegionIntervalMap::new(),
        }
    }

    /// Loads a configuration from a ploidy table file.
    ///
    /// An unreadable file is a recoverable error; any malformed line aborts
    /// the whole load with a message naming the line. There is no partial
    /// success.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        default: PloidyType,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| {
            format!("failed to open ploidy table {}", path.display())
        })?;

        let mut map = Self::new(default);
        for record in TableReader::new(BufReader::new(file)) {
            map.insert_record(record?);
        }
        debug!(
            "loaded {} ploidy regions ({} sexes) from {}",
            map.regions.n_intervals(),
            map.sexes.len(),
            path.display()
        );
        Ok(map)
    }

    /// Loads a configuration from an inline preset string of
    /// newline/carriage-return separated table lines, e.g. a canned
    /// karyotype preset.
    pub fn from_preset_str(
        presets: &str,
        default: PloidyType,
    ) -> anyhow::Result<Self> {
        let mut map = Self::new(default);
        for line in presets.lines().map(str::trim).filter(|l| !l.is_empty()) {
            map.insert_line(line)?;
        }
        debug!(
            "loaded {} ploidy regions ({} sexes) from preset string",
            map.regions.n_intervals(),
            map.sexes.len(),
        );
        Ok(map)
    }

    /// Parses and inserts a single `CHROM START END SEX PLOIDY` line.
    ///
    /// The line is fully parsed before any state changes, so a failed line
    /// leaves the registry and the region index untouched.
    pub fn insert_line(
        &mut self,
        line: &str,
    ) -> anyhow::Result<()> {
        let record: PloidyRecord = line.trim().parse()?;
        self.insert_record(record);
        Ok(())
    }

    /// Registers the record's sex label, folds its ploidy into the global
    /// min/max and stores the entry in the region index.
    pub fn insert_record(
        &mut self,
        record: PloidyRecord,
    ) {
        let PloidyRecord {
            region,
            sex,
            ploidy,
        } = record;
        let sex = self.sexes.get_or_create(&sex);
        // An entry equal to the default cannot move min or max.
        self.min = self.min.min(ploidy);
        self.max = self.max.max(ploidy);
        self.regions.insert(region, SexPloidy { sex, ploidy });
    }

    /// Resolves the ploidy at `pos` on `seqname` for every registered sex.
    ///
    /// Overlapping entries are applied in the index's start-sorted
    /// enumeration order; when several non-default entries for the same sex
    /// overlap the point, the last one enumerated wins. That tie-break is
    /// implementation-defined, not a portable guarantee. An unknown
    /// chromosome is treated identically to "no overlap".
    pub fn resolve(
        &self,
        seqname: &str,
        pos: PosType,
    ) -> ResolvedPloidy {
        let mut sex_ploidy = vec![self.default; self.sexes.len()];
        let mut seen: Option<(PloidyType, PloidyType)> = None;

        for entry in self.regions.find_point(seqname, pos) {
            if entry.ploidy == self.default {
                continue;
            }
            sex_ploidy[entry.sex] = entry.ploidy;
            seen = match seen {
                Some((lo, hi)) => {
                    Some((lo.min(entry.ploidy), hi.max(entry.ploidy)))
                },
                None => Some((entry.ploidy, entry.ploidy)),
            };
        }

        let (min, max) = seen.unwrap_or((self.default, self.default));
        ResolvedPloidy {
            sex_ploidy,
            min,
            max,
        }
    }

    /// Overlap-existence fast path: does any region entry cover `pos`?
    ///
    /// No resolution work is performed.
    pub fn contains(
        &self,
        seqname: &str,
        pos: PosType,
    ) -> bool {
        self.regions.overlaps(seqname, pos)
    }

    /// The ploidy assumed wherever no override applies.
    pub fn default_ploidy(&self) -> PloidyType {
        self.default
    }

    /// Smallest ploidy applicable anywhere, the default included. A
    /// load-time aggregate, independent of any query point.
    pub fn global_min_ploidy(&self) -> PloidyType {
        self.min
    }

    /// Largest ploidy applicable anywhere, the default included.
    pub fn global_max_ploidy(&self) -> PloidyType {
        self.max
    }

    /// Number of registered sexes; sizes the vector returned by
    /// [`resolve`](Self::resolve).
    pub fn sex_count(&self) -> usize {
        self.sexes.len()
    }

    /// Label registered under `id`, or `None` outside `[0, sex_count())`.
    pub fn label_of(
        &self,
        id: SexId,
    ) -> Option<&str> {
        self.sexes.label_of(id)
    }

    /// Id of `label`, or `None` when it was never registered.
    pub fn id_of(
        &self,
        label: &str,
    ) -> Option<SexId> {
        self.sexes.id_of(label)
    }

    /// Registers a sex outside the load phase, e.g. one referenced by a
    /// caller but absent from the table. Idempotent.
    pub fn register_sex(
        &mut self,
        label: &str,
    ) -> SexId {
        self.sexes.get_or_create(label)
    }

    /// Read-only view of the sex registry.
    pub fn sexes(&self) -> &SexRegistry {
        &self.sexes
    }

    /// Read-only view of the region index.
    pub fn regions(&self) -> &RegionIntervalMap<SexPloidy> {
        &self.regions
    }
}
