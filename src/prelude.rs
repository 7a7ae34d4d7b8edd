pub use crate::data_structs::typedef::{
    PloidyType,
    PosType,
    SexId,
};
pub use crate::data_structs::{
    Region,
    RegionIntervalMap,
    SexRegistry,
};
pub use crate::io::table::{
    PloidyRecord,
    TableParseError,
    TableReader,
};
pub use crate::ploidy::{
    PloidyMap,
    ResolvedPloidy,
    SexPloidy,
};
