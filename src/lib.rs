//! # ploidy-map
//!
//! `ploidy-map` resolves the expected chromosome copy number ("ploidy") at a
//! genomic coordinate, given a per-region, per-sex override table and a
//! global default. Variant-calling pipelines use it to decide, for example,
//! that chrY has ploidy 0 in females and 1 in males while autosomes default
//! to ploidy 2.
//!
//! A ploidy table is whitespace-delimited text with one rule per line:
//!
//! ```text
//! CHROM  START  END  SEX  PLOIDY
//! ```
//!
//! where `[START, END)` is a half-open interval. Rules are loaded either from
//! a file ([`PloidyMap::from_path`]) or from an inline preset string
//! ([`PloidyMap::from_preset_str`]); sex labels are open-ended and interned
//! in first-seen order. A point query returns the ploidy for every registered
//! sex together with the min/max ploidy applicable at that point.
//!
//! ## Structure
//!
//! * [`data_structs`]: the building blocks — [`Region`] coordinates, the
//!   [`SexRegistry`] label interner and the [`RegionIntervalMap`] interval
//!   index (per-chromosome [`rust_lapper::Lapper`]s).
//! * [`io`]: line/record parsing for ploidy tables ([`TableReader`],
//!   [`PloidyRecord`], [`TableParseError`]).
//! * [`ploidy`]: the [`PloidyMap`] configuration and its query surface.
//!
//! ## Usage
//!
//! ```
//! use ploidy_map::prelude::*;
//!
//! let grch37 = "
//!     X   1        60000      M  1
//!     X   2699521  154931043  M  1
//!     Y   1        59373566   M  1
//!     Y   1        59373566   F  0
//!     MT  1        16569      M  1
//!     MT  1        16569      F  1
//! ";
//! let ploidy = PloidyMap::from_preset_str(grch37, 2).unwrap();
//!
//! let m = ploidy.id_of("M").unwrap();
//! let f = ploidy.id_of("F").unwrap();
//!
//! let at = ploidy.resolve("Y", 2655180);
//! assert_eq!(at.of_sex(m), Some(1));
//! assert_eq!(at.of_sex(f), Some(0));
//! assert_eq!((at.min(), at.max()), (0, 1));
//!
//! // Autosomes fall back to the default for every sex.
//! let at = ploidy.resolve("7", 1_000_000);
//! assert_eq!(at.sex_ploidy(), &[2, 2]);
//! ```
//!
//! [`Region`]: data_structs::Region
//! [`SexRegistry`]: data_structs::SexRegistry
//! [`RegionIntervalMap`]: data_structs::RegionIntervalMap
//! [`TableReader`]: io::table::TableReader
//! [`PloidyRecord`]: io::table::PloidyRecord
//! [`TableParseError`]: io::table::TableParseError
//! [`PloidyMap`]: ploidy::PloidyMap

pub mod data_structs;
pub mod io;
pub mod ploidy;
pub mod prelude;
