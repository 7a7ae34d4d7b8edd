use hashbrown::HashMap;
use itertools::Itertools;
use rust_lapper::{
    Interval,
    Lapper,
};
use serde::de::DeserializeOwned;
use serde::{
    Deserialize,
    Serialize,
};

use super::region::Region;
use super::typedef::{
    PosType,
    SeqName,
};

/// Per-chromosome interval index with a payload attached to every region.
///
/// Overlap queries enumerate matching payloads in the index's start-sorted
/// order. Queries against an empty map or an unknown chromosome yield an
/// empty result, never an error.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(bound = "V: Serialize + DeserializeOwned")]
pub struct RegionIntervalMap<V>
where
    V: Sync + Send + Eq + Clone, {
    inner: HashMap<SeqName, Lapper<PosType, V>>,
}

impl<V> Default for RegionIntervalMap<V>
where
    V: Sync + Send + Eq + Clone,
{
    fn default() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }
}

impl<V> From<HashMap<SeqName, Lapper<PosType, V>>> for RegionIntervalMap<V>
where
    V: Sync + Send + Eq + Clone,
{
    fn from(value: HashMap<SeqName, Lapper<PosType, V>>) -> Self {
        Self { inner: value }
    }
}

impl<V> FromIterator<(Region, V)> for RegionIntervalMap<V>
where
    V: Sync + Send + Eq + Clone,
{
    fn from_iter<T: IntoIterator<Item = (Region, V)>>(iter: T) -> Self {
        let multimap = iter
            .into_iter()
            .map(|(region, v)| {
                let key = region.seqname().to_owned();
                (key, (region, v))
            })
            .into_group_map();

        let mut inner = HashMap::with_capacity(multimap.len());
        for (chr, kv_pairs) in multimap.into_iter() {
            let imap = Lapper::new(
                kv_pairs
                    .into_iter()
                    .map(|(region, v)| {
                        Interval {
                            start: region.start(),
                            stop:  region.end(),
                            val:   v,
                        }
                    })
                    .collect_vec(),
            );
            inner.insert(chr, imap);
        }

        Self { inner }
    }
}

impl<V> RegionIntervalMap<V>
where
    V: Sync + Send + Eq + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &HashMap<SeqName, Lapper<PosType, V>> {
        &self.inner
    }

    pub fn into_inner(self) -> HashMap<SeqName, Lapper<PosType, V>> {
        self.inner
    }

    /// Total number of stored intervals across all chromosomes.
    pub fn n_intervals(&self) -> usize {
        self.inner.values().map(|v| v.len()).sum()
    }

    /// Number of chromosomes with at least one stored interval.
    pub fn n_chr(&self) -> usize {
        self.inner.len()
    }

    pub fn chr_names(&self) -> Vec<SeqName> {
        self.inner.keys().cloned().collect()
    }

    pub fn insert(
        &mut self,
        key: Region,
        value: V,
    ) {
        let (seqname, start, stop) = key.into_parts();
        let imap = self
            .inner
            .entry(seqname)
            .or_insert_with(|| Lapper::new(vec![]));
        imap.insert(Interval {
            start,
            stop,
            val: value,
        });
    }

    /// Payloads of all intervals overlapping `[start, stop)` on `seqname`,
    /// in start-sorted order.
    pub fn find(
        &self,
        seqname: &str,
        start: PosType,
        stop: PosType,
    ) -> Vec<&V> {
        self.inner
            .get(seqname)
            .map(|imap| imap.find(start, stop).map(|e| &e.val).collect_vec())
            .unwrap_or_default()
    }

    /// Payloads of all intervals containing the point `pos`.
    pub fn find_point(
        &self,
        seqname: &str,
        pos: PosType,
    ) -> Vec<&V> {
        self.find(seqname, pos, pos.saturating_add(1))
    }

    /// Whether any interval contains the point `pos`.
    pub fn overlaps(
        &self,
        seqname: &str,
        pos: PosType,
    ) -> bool {
        self.inner
            .get(seqname)
            .map(|imap| {
                imap.find(pos, pos.saturating_add(1)).next().is_some()
            })
            .unwrap_or(false)
    }
}
