/// Domain operations: save, delete, switch and keyboard shortcuts
///
/// Each operation reads the list, transforms it and writes it back as one
/// awaited sequence. The store gives no transactional guarantee; a write
/// always replaces the whole list.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::COMMAND_PREFIX;
use crate::domain::rewrite_url;
use crate::domain_data::{DomainRecord, TabInfo};
use crate::error::SwitchError;
use crate::storage::{DomainList, DomainStore};

static SHORTCUT_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{}(\d+)$", regex::escape(COMMAND_PREFIX)))
        .expect("shortcut command pattern is valid")
});

/// Access to the active browser tab
pub trait TabController {
    async fn active_tab(&self) -> Result<TabInfo, SwitchError>;

    async fn navigate(&self, tab_id: i32, url: &str) -> Result<(), SwitchError>;
}

/// Result of a successful save
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub record: DomainRecord,
    /// An existing record with the same name was replaced
    pub replaced: bool,
    /// Another name already points at this URL (warning only)
    pub url_collision: bool,
}

pub async fn load_domains<S: DomainStore>(store: &S) -> Result<DomainList, SwitchError> {
    store.get().await
}

/// Validate form input and upsert it into the stored list
pub async fn save_domain<S: DomainStore>(
    store: &S,
    name: &str,
    raw_url: &str,
) -> Result<SaveOutcome, SwitchError> {
    let record = DomainRecord::from_input(name, raw_url)?;

    let mut list = store.get().await?;
    let url_collision = list.url_collision(&record);
    if url_collision {
        log::warn!("{} already exists with a different name", record.url);
    }

    let replaced = list.upsert(record.clone());
    store.set(&list).await?;

    log::info!(
        "{} domain {} -> {}",
        if replaced { "Updated" } else { "Added" },
        record.name,
        record.url
    );

    Ok(SaveOutcome {
        record,
        replaced,
        url_collision,
    })
}

pub async fn delete_domain<S: DomainStore>(
    store: &S,
    index: usize,
) -> Result<DomainRecord, SwitchError> {
    let mut list = store.get().await?;
    let removed = list.delete_at(index)?;
    store.set(&list).await?;

    log::info!("Deleted domain {}", removed.name);
    Ok(removed)
}

/// Parse "switch-domain-N" into the zero-based index N-1
pub fn shortcut_index(command: &str) -> Result<usize, SwitchError> {
    let digits = SHORTCUT_COMMAND
        .captures(command)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| SwitchError::UnknownCommand(command.to_string()))?
        .as_str();

    // Well-formed but too large for usize: no list can be that long
    let position: usize = digits.parse().unwrap_or(usize::MAX);

    position
        .checked_sub(1)
        .ok_or(SwitchError::IndexOutOfRange { index: 0, len: 0 })
}

/// Target URL bound to a keyboard command
pub fn resolve_shortcut(command: &str, list: &DomainList) -> Result<String, SwitchError> {
    let index = shortcut_index(command).map_err(|err| match err {
        SwitchError::IndexOutOfRange { index, .. } => SwitchError::IndexOutOfRange {
            index,
            len: list.len(),
        },
        other => other,
    })?;

    list.get(index)
        .map(|record| record.url.clone())
        .ok_or(SwitchError::IndexOutOfRange {
            index,
            len: list.len(),
        })
}

/// Point the active tab at `target`, keeping its path, query and fragment
pub async fn switch_active_tab<T: TabController>(
    tabs: &T,
    target: &str,
) -> Result<String, SwitchError> {
    let tab = tabs.active_tab().await?;
    let current_url = tab
        .url
        .as_deref()
        .ok_or_else(|| SwitchError::InvalidUrl("current tab URL is not readable".to_string()))?;
    let new_url = rewrite_url(current_url, target)?;
    tabs.navigate(tab.id, &new_url).await?;

    log::info!("Switched tab {} to {}", tab.id, new_url);
    Ok(new_url)
}

/// Handle a keyboard command end to end
pub async fn run_shortcut<S: DomainStore, T: TabController>(
    store: &S,
    tabs: &T,
    command: &str,
) -> Result<String, SwitchError> {
    let list = store.get().await?;
    let target = resolve_shortcut(command, &list)?;
    switch_active_tab(tabs, &target).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn record(name: &str, url: &str) -> DomainRecord {
        DomainRecord {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    struct FakeTabs {
        active: Option<TabInfo>,
        navigations: RefCell<Vec<(i32, String)>>,
    }

    impl FakeTabs {
        fn on(url: &str) -> Self {
            FakeTabs {
                active: Some(TabInfo {
                    id: 42,
                    url: Some(url.to_string()),
                }),
                navigations: RefCell::new(Vec::new()),
            }
        }

        fn none() -> Self {
            FakeTabs {
                active: None,
                navigations: RefCell::new(Vec::new()),
            }
        }
    }

    impl TabController for FakeTabs {
        async fn active_tab(&self) -> Result<TabInfo, SwitchError> {
            self.active.clone().ok_or(SwitchError::NoActiveTab)
        }

        async fn navigate(&self, tab_id: i32, url: &str) -> Result<(), SwitchError> {
            self.navigations.borrow_mut().push((tab_id, url.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_load_domains_empty_store() {
        let store = MemoryStore::default();
        let list = block_on(load_domains(&store)).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_save_domain_appends() {
        let store = MemoryStore::with(vec![record("Prod", "https://prod.example.com")]);

        let outcome = block_on(save_domain(&store, "Local", "localhost:3000")).unwrap();

        assert!(!outcome.replaced);
        assert!(!outcome.url_collision);
        assert_eq!(outcome.record, record("Local", "http://localhost:3000"));
        assert_eq!(store.list.borrow().len(), 2);
        assert_eq!(store.writes.get(), 1);
    }

    #[test]
    fn test_save_domain_replaces_by_name() {
        let store = MemoryStore::with(vec![
            record("Prod", "https://prod.example.com"),
            record("Staging", "https://staging.example.com"),
        ]);

        let outcome = block_on(save_domain(&store, "Prod", "https://prod2.example.com/")).unwrap();

        assert!(outcome.replaced);
        let list = store.list.borrow();
        assert_eq!(list.len(), 2);
        assert_eq!(list.domains[0], record("Prod", "https://prod2.example.com"));
    }

    #[test]
    fn test_save_domain_warns_on_collision() {
        let store = MemoryStore::with(vec![record("Prod", "https://prod.example.com")]);

        let outcome = block_on(save_domain(&store, "Production", "prod.example.com")).unwrap();

        assert!(outcome.url_collision);
        assert_eq!(store.list.borrow().len(), 2);
    }

    #[test]
    fn test_save_domain_rejects_input_before_storage() {
        let store = MemoryStore {
            fail_reads: true,
            ..Default::default()
        };

        assert_eq!(
            block_on(save_domain(&store, "  ", "example.com")),
            Err(SwitchError::MissingInput)
        );
        assert!(matches!(
            block_on(save_domain(&store, "Bad", "not a url")),
            Err(SwitchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_save_domain_storage_failure() {
        let store = MemoryStore {
            fail_writes: true,
            ..Default::default()
        };

        assert!(matches!(
            block_on(save_domain(&store, "Prod", "prod.example.com")),
            Err(SwitchError::Storage(_))
        ));
        assert!(store.list.borrow().is_empty());
    }

    #[test]
    fn test_delete_domain() {
        let store = MemoryStore::with(vec![
            record("A", "https://a.example.com"),
            record("B", "https://b.example.com"),
            record("C", "https://c.example.com"),
        ]);

        let removed = block_on(delete_domain(&store, 0)).unwrap();

        assert_eq!(removed.name, "A");
        let list = store.list.borrow();
        assert_eq!(list.len(), 2);
        assert_eq!(list.domains[0].name, "B");
        assert_eq!(list.domains[1].name, "C");
    }

    #[test]
    fn test_delete_domain_out_of_range_does_not_write() {
        let store = MemoryStore::with(vec![record("A", "https://a.example.com")]);

        assert_eq!(
            block_on(delete_domain(&store, 1)),
            Err(SwitchError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(store.writes.get(), 0);
    }

    #[test]
    fn test_shortcut_index() {
        assert_eq!(shortcut_index("switch-domain-1"), Ok(0));
        assert_eq!(shortcut_index("switch-domain-3"), Ok(2));
        assert!(matches!(shortcut_index("switch-domain-0"), Err(SwitchError::IndexOutOfRange { .. })));
        assert!(matches!(shortcut_index("switch-domain-"), Err(SwitchError::UnknownCommand(_))));
        assert!(matches!(shortcut_index("switch-domain-x"), Err(SwitchError::UnknownCommand(_))));
        assert!(matches!(shortcut_index("switch-domain--1"), Err(SwitchError::UnknownCommand(_))));
        assert!(matches!(shortcut_index("_execute_action"), Err(SwitchError::UnknownCommand(_))));
        assert!(matches!(shortcut_index("switch-domain-1x"), Err(SwitchError::UnknownCommand(_))));
        assert!(matches!(shortcut_index("xswitch-domain-1"), Err(SwitchError::UnknownCommand(_))));
    }

    #[test]
    fn test_resolve_shortcut_huge_index() {
        let one = DomainList::from(vec![record("Prod", "https://prod.example.com")]);

        assert!(matches!(
            resolve_shortcut("switch-domain-99999999999999999999999", &one),
            Err(SwitchError::IndexOutOfRange { len: 1, .. })
        ));
    }

    #[test]
    fn test_resolve_shortcut() {
        let list = DomainList::from(vec![
            record("Prod", "https://prod.example.com"),
            record("Staging", "https://staging.example.com"),
        ]);

        assert_eq!(
            resolve_shortcut("switch-domain-2", &list),
            Ok("https://staging.example.com".to_string())
        );
    }

    #[test]
    fn test_resolve_shortcut_out_of_range() {
        let one = DomainList::from(vec![record("Prod", "https://prod.example.com")]);

        assert_eq!(
            resolve_shortcut("switch-domain-2", &one),
            Err(SwitchError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(matches!(
            resolve_shortcut("switch-domain-1", &DomainList::new()),
            Err(SwitchError::IndexOutOfRange { .. })
        ));
        assert!(matches!(
            resolve_shortcut("switch-domain-0", &one),
            Err(SwitchError::IndexOutOfRange { index: 0, len: 1 })
        ));
    }

    #[test]
    fn test_switch_active_tab() {
        let tabs = FakeTabs::on("https://staging.example.com/path?q=1#frag");

        let new_url = block_on(switch_active_tab(&tabs, "https://prod.example.com")).unwrap();

        assert_eq!(new_url, "https://prod.example.com/path?q=1#frag");
        assert_eq!(
            *tabs.navigations.borrow(),
            vec![(42, "https://prod.example.com/path?q=1#frag".to_string())]
        );
    }

    #[test]
    fn test_switch_active_tab_invalid_current_url() {
        let tabs = FakeTabs::on("not a url");

        assert!(matches!(
            block_on(switch_active_tab(&tabs, "https://prod.example.com")),
            Err(SwitchError::InvalidUrl(_))
        ));
        assert!(tabs.navigations.borrow().is_empty());
    }

    #[test]
    fn test_switch_active_tab_unreadable_url() {
        let tabs = FakeTabs {
            active: Some(TabInfo { id: 5, url: None }),
            navigations: RefCell::new(Vec::new()),
        };

        assert!(matches!(
            block_on(switch_active_tab(&tabs, "https://prod.example.com")),
            Err(SwitchError::InvalidUrl(_))
        ));
        assert!(tabs.navigations.borrow().is_empty());
    }

    #[test]
    fn test_run_shortcut_end_to_end() {
        let store = MemoryStore::with(vec![record("Prod", "https://prod.example.com")]);
        let tabs = FakeTabs::on("https://staging.example.com/path?q=1#frag");

        let new_url = block_on(run_shortcut(&store, &tabs, "switch-domain-1")).unwrap();

        assert_eq!(new_url, "https://prod.example.com/path?q=1#frag");
        assert_eq!(store.writes.get(), 0);
    }

    #[test]
    fn test_run_shortcut_errors() {
        let store = MemoryStore::with(vec![record("Prod", "https://prod.example.com")]);

        assert_eq!(
            block_on(run_shortcut(&store, &FakeTabs::none(), "switch-domain-1")),
            Err(SwitchError::NoActiveTab)
        );

        let tabs = FakeTabs::on("https://staging.example.com/");
        assert!(matches!(
            block_on(run_shortcut(&store, &tabs, "switch-domain-3")),
            Err(SwitchError::IndexOutOfRange { index: 2, len: 1 })
        ));
        assert!(tabs.navigations.borrow().is_empty());

        let failing = MemoryStore {
            fail_reads: true,
            ..Default::default()
        };
        assert!(matches!(
            block_on(run_shortcut(&failing, &tabs, "switch-domain-1")),
            Err(SwitchError::Storage(_))
        ));
    }
}
