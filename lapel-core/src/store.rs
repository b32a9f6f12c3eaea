//! The single owner of the current configuration.
//!
//! The URL and storage only ever hold derived copies. At start-up the store
//! resolves its value as URL > storage > default; afterwards every `set`
//! rewrites both channels synchronously.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::codec;
use crate::constants::STORAGE_KEY;
use crate::error::Result;
use crate::model::{ConfigPatch, LapelConfig};
use crate::stored;

/// Read/replace access to the page's query string.
pub trait QueryChannel {
    /// Current search string, with or without the leading `?`.
    fn search(&self) -> String;
    /// Replaces the search string in place, without adding a history entry.
    fn replace_search(&mut self, search: &str);
}

/// A string key-value store that may refuse reads and writes.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Where the resolved initial configuration came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Url,
    Storage,
    Default,
}

pub struct ConfigStore<Q, S> {
    current: LapelConfig,
    source: ConfigSource,
    query: Q,
    storage: S,
    storage_key: String,
}

impl<Q: QueryChannel, S: KeyValueStorage> ConfigStore<Q, S> {
    /// Resolves the initial configuration using the default storage key.
    pub fn resolve(query: Q, storage: S) -> Self {
        Self::resolve_with_key(query, storage, STORAGE_KEY)
    }

    pub fn resolve_with_key(query: Q, mut storage: S, storage_key: &str) -> Self {
        let (current, source) = match codec::decode_query(&query.search()) {
            Ok(from_url) => {
                // The URL wins and is propagated to storage straight away.
                write_storage(&mut storage, storage_key, &from_url);
                (from_url, ConfigSource::Url)
            }
            Err(url_err) => {
                debug!("no usable configuration in url: {url_err}");
                match read_storage(&storage, storage_key) {
                    Some(from_storage) => (from_storage, ConfigSource::Storage),
                    None => (LapelConfig::default(), ConfigSource::Default),
                }
            }
        };
        debug!(?source, pattern = %current.pattern, "initial configuration resolved");
        ConfigStore {
            current,
            source,
            query,
            storage,
            storage_key: storage_key.to_string(),
        }
    }

    pub fn get(&self) -> &LapelConfig {
        &self.current
    }

    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Replaces the current value with `current ⊕ patch`, then rewrites the
    /// URL and storage. Storage failures are logged and ignored.
    pub fn set(&mut self, patch: ConfigPatch) -> &LapelConfig {
        let next = self.current.merged(patch);
        self.current = next;
        self.publish();
        &self.current
    }

    /// Writes the current value to the URL and storage without changing it.
    /// The page calls this once after mounting so a default or stored
    /// configuration also shows up in the address bar.
    pub fn publish(&mut self) {
        let search = codec::merge_into_query(&self.query.search(), &self.current);
        self.query.replace_search(&search);
        write_storage(&mut self.storage, &self.storage_key, &self.current);
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn read_storage<S: KeyValueStorage>(storage: &S, key: &str) -> Option<LapelConfig> {
    let payload = match storage.get_item(key) {
        Ok(Some(p)) => p,
        Ok(None) => return None,
        Err(e) => {
            warn!("treating storage as empty: {e}");
            return None;
        }
    };
    match stored::from_payload(&payload) {
        Ok(c) => Some(c),
        Err(e) => {
            debug!("ignoring stored configuration: {e}");
            None
        }
    }
}

fn write_storage<S: KeyValueStorage>(storage: &mut S, key: &str, config: &LapelConfig) {
    let result = stored::to_payload(config).and_then(|p| storage.set_item(key, &p));
    if let Err(e) = result {
        warn!("configuration not persisted: {e}");
    }
}

/// In-memory query channel, used off the browser and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryQuery {
    pub search: String,
    pub replacements: usize,
}

impl MemoryQuery {
    pub fn new(search: &str) -> Self {
        MemoryQuery {
            search: search.to_string(),
            replacements: 0,
        }
    }
}

impl QueryChannel for MemoryQuery {
    fn search(&self) -> String {
        self.search.clone()
    }

    fn replace_search(&mut self, search: &str) {
        self.search = search.to_string();
        self.replacements += 1;
    }
}

/// In-memory storage. Clones share the same map so tests can inspect writes
/// after handing the storage to a store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn with_item(key: &str, value: &str) -> Self {
        let s = MemoryStorage::default();
        s.items.borrow_mut().insert(key.to_string(), value.to_string());
        s
    }

    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.item(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LapelError;
    use crate::model::{LapelModel, TrimColor};

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(LapelError::StorageUnavailable("private mode".into()))
        }
        fn set_item(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(LapelError::StorageUnavailable("quota exceeded".into()))
        }
    }

    #[test]
    fn unreadable_storage_falls_back_to_default() {
        let store = ConfigStore::resolve(MemoryQuery::new(""), BrokenStorage);
        assert_eq!(store.get(), &LapelConfig::default());
        assert_eq!(store.source(), ConfigSource::Default);
    }

    #[test]
    fn failed_writes_do_not_abort_the_update() {
        let mut store = ConfigStore::resolve(MemoryQuery::new(""), BrokenStorage);
        let next = store.set(ConfigPatch::model(LapelModel::Peak)).clone();
        assert_eq!(next.model, LapelModel::Peak);
        assert!(store.query().search.contains("model=peak"));
    }

    #[test]
    fn corrupt_payload_is_ignored() {
        let storage = MemoryStorage::with_item(STORAGE_KEY, "{not json");
        let store = ConfigStore::resolve(MemoryQuery::new(""), storage);
        assert_eq!(store.source(), ConfigSource::Default);
    }

    #[test]
    fn set_rewrites_url_and_storage_every_time() {
        let storage = MemoryStorage::default();
        let mut store = ConfigStore::resolve(MemoryQuery::new("?lang=en"), storage.clone());
        store.set(ConfigPatch::trim_color(TrimColor::Charcoal));
        store.set(ConfigPatch::pattern("geo04"));

        assert_eq!(store.query().replacements, 2);
        assert!(store.query().search.starts_with("lang=en&"));
        let from_url = codec::decode_query(&store.query().search).unwrap();
        assert_eq!(&from_url, store.get());
        let saved = stored::from_payload(&storage.item(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(&saved, store.get());
    }

    #[test]
    fn custom_storage_key_is_respected() {
        let storage = MemoryStorage::default();
        let mut store =
            ConfigStore::resolve_with_key(MemoryQuery::new(""), storage.clone(), "other");
        store.set(ConfigPatch::default());
        assert!(storage.item("other").is_some());
        assert!(storage.item(STORAGE_KEY).is_none());
    }
}
