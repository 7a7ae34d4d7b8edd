/// Sequence (chromosome) name.
pub type SeqName = String;

/// Genomic position.
pub type PosType = u32;

/// Chromosome copy number at a locus.
pub type PloidyType = u8;

/// Dense sex id, assigned in first-seen order starting from 0.
pub type SexId = usize;
