/// Data structures for Domain Switcher
use serde::{Deserialize, Serialize};

use crate::domain::normalize_domain_url;
use crate::error::SwitchError;

/// A named domain the user can switch to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainRecord {
    pub name: String,
    pub url: String,
}

impl DomainRecord {
    /// Build a record from form input, trimming the name and normalizing the URL
    pub fn from_input(name: &str, raw_url: &str) -> Result<DomainRecord, SwitchError> {
        let name = name.trim();
        if name.is_empty() || raw_url.trim().is_empty() {
            return Err(SwitchError::MissingInput);
        }

        Ok(DomainRecord {
            name: name.to_string(),
            url: normalize_domain_url(raw_url)?,
        })
    }
}

/// The bits of the active browser tab that switching needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabInfo {
    pub id: i32,
    /// None when the extension may not read the tab's URL
    #[serde(default)]
    pub url: Option<String>,
}
