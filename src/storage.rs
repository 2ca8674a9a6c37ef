/// Domain list storage for chrome.storage.sync

use crate::domain_data::DomainRecord;
use crate::error::SwitchError;
use serde::{Deserialize, Serialize};

/// Ordered list of domains, stored as a bare JSON array
///
/// Order is significant: index 0 is bound to the first keyboard shortcut.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct DomainList {
    pub domains: Vec<DomainRecord>,
}

impl DomainList {
    pub fn new() -> Self {
        DomainList {
            domains: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DomainRecord> {
        self.domains.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DomainRecord> {
        self.domains.iter()
    }

    /// Insert or replace by name. Returns true when an existing record was replaced.
    pub fn upsert(&mut self, record: DomainRecord) -> bool {
        match self.domains.iter_mut().find(|d| d.name == record.name) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => {
                self.domains.push(record);
                false
            }
        }
    }

    pub fn delete_at(&mut self, index: usize) -> Result<DomainRecord, SwitchError> {
        if index >= self.domains.len() {
            return Err(SwitchError::IndexOutOfRange {
                index,
                len: self.domains.len(),
            });
        }
        Ok(self.domains.remove(index))
    }

    /// True if a record with a different name already points at the same URL
    pub fn url_collision(&self, record: &DomainRecord) -> bool {
        self.domains
            .iter()
            .any(|d| d.url == record.url && d.name != record.name)
    }
}

impl From<Vec<DomainRecord>> for DomainList {
    fn from(domains: Vec<DomainRecord>) -> Self {
        DomainList { domains }
    }
}

/// Backing key-value store for the domain list
pub trait DomainStore {
    /// Current list; empty if nothing was stored yet
    async fn get(&self) -> Result<DomainList, SwitchError>;

    /// Replace the whole stored list
    async fn set(&self, list: &DomainList) -> Result<(), SwitchError>;
}
