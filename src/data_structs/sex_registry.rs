use hashbrown::HashMap;
use serde::{
    Deserialize,
    Serialize,
};

use super::typedef::{
    SeqName,
    SexId,
};

/// Bidirectional mapping between sex labels and dense integer ids.
///
/// Ids are contiguous from 0, assigned in first-seen order and never reused
/// or reassigned. Labels are case-sensitive and unique per id. The registry
/// is append-only; once a configuration is loaded it is queried read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SexRegistry {
    labels: Vec<SeqName>,
    ids:    HashMap<SeqName, SexId>,
}

impl SexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `label`, registering it under the next sequential
    /// id if it has not been seen before.
    pub fn get_or_create(
        &mut self,
        label: &str,
    ) -> SexId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_owned());
        self.ids.insert(label.to_owned(), id);
        id
    }

    /// Pure lookup; never registers.
    pub fn id_of(
        &self,
        label: &str,
    ) -> Option<SexId> {
        self.ids.get(label).copied()
    }

    /// Returns the label registered under `id`, or `None` when `id` is
    /// outside `[0, len)`.
    pub fn label_of(
        &self,
        id: SexId,
    ) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Number of registered sexes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in id order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
