use super::{
    MySqlRdbmsSpecifics, OracleRdbmsSpecifics, SharedDialect, SqlServerRdbmsSpecifics,
};
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

const LOG_TARGET: &str = "jdbcdslog::dialect";

/// How a driver-name hint was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No hint given; nothing changed
    Skipped,
    /// The lower-cased hint was already a key
    ExactHit,
    /// The hint contains a known key; the hint is now memoized under it
    Matched { token: String },
    /// Nothing matched; the hint is memoized under the current dialect
    Frozen,
}

/// Insertion-ordered table plus the currently active strategy
#[derive(Debug)]
struct DialectTable {
    entries: Vec<(String, SharedDialect)>,
    index: HashMap<String, usize>,
    active: SharedDialect,
}

impl DialectTable {
    fn get(&self, key: &str) -> Option<&SharedDialect> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    fn insert(&mut self, key: String, dialect: SharedDialect) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = dialect,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, dialect));
            }
        }
    }

    /// First key, in insertion order, contained in `driver`
    fn find_token(&self, driver: &str) -> Option<(String, SharedDialect)> {
        self.entries
            .iter()
            .find(|(key, _)| driver.contains(key.as_str()))
            .map(|(key, dialect)| (key.clone(), Arc::clone(dialect)))
    }
}

/// Maps driver identifiers to dialect strategies
///
/// Keys are stored lower-case so the table behaves as a case-insensitive
/// cache. The table and the active dialect share one lock: resolutions are
/// serialized and readers always observe a consistent pair.
#[derive(Debug)]
pub struct DialectRegistry {
    state: RwLock<DialectTable>,
}

impl DialectRegistry {
    /// Registry holding a single entry, which is also the active dialect
    pub fn new(default_key: &str, default_dialect: SharedDialect) -> Self {
        let mut table = DialectTable {
            entries: Vec::new(),
            index: HashMap::new(),
            active: Arc::clone(&default_dialect),
        };
        table.insert(default_key.to_lowercase(), default_dialect);
        Self {
            state: RwLock::new(table),
        }
    }

    /// Seeded with `oracle` (active), `mysql` and `sqlserver`, in that order
    pub fn with_defaults() -> Self {
        let registry = Self::new("oracle", Arc::new(OracleRdbmsSpecifics));
        registry.register("mysql", Arc::new(MySqlRdbmsSpecifics));
        registry.register("sqlserver", Arc::new(SqlServerRdbmsSpecifics));
        // further vendors are seeded here
        registry
    }

    /// Add or replace a seed entry; does not change the active dialect
    pub fn register(&self, key: &str, dialect: SharedDialect) {
        self.write().insert(key.to_lowercase(), dialect);
    }

    /// Select the active dialect for a driver name
    ///
    /// An exact (case-insensitive) key wins. Otherwise the first key in
    /// insertion order that occurs inside the lower-cased name is chosen and
    /// the name is memoized under it. If none occurs, the name is memoized
    /// under the current active dialect, which stays unchanged.
    pub fn resolve(&self, driver_name: Option<&str>) -> Resolution {
        let Some(driver_name) = driver_name.filter(|name| !name.is_empty()) else {
            return Resolution::Skipped;
        };
        let key = driver_name.to_lowercase();
        let mut table = self.write();

        if let Some(dialect) = table.get(&key).cloned() {
            table.active = dialect;
            debug!(target: LOG_TARGET, "Driver '{}' resolved to {}", driver_name, table.active.name());
            return Resolution::ExactHit;
        }

        match table.find_token(&key) {
            Some((token, dialect)) => {
                table.active = Arc::clone(&dialect);
                table.insert(key, dialect);
                debug!(
                    target: LOG_TARGET,
                    "Driver '{}' matched token '{}', using {}",
                    driver_name,
                    token,
                    table.active.name()
                );
                Resolution::Matched { token }
            }
            None => {
                let current = Arc::clone(&table.active);
                table.insert(key, current);
                debug!(
                    target: LOG_TARGET,
                    "Driver '{}' is unknown, keeping {}",
                    driver_name,
                    table.active.name()
                );
                Resolution::Frozen
            }
        }
    }

    pub fn active(&self) -> SharedDialect {
        Arc::clone(&self.read().active)
    }

    /// Look up a key (case-insensitive) without touching the active dialect
    pub fn get(&self, key: &str) -> Option<SharedDialect> {
        self.read().get(&key.to_lowercase()).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.read().index.contains_key(&key.to_lowercase())
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.read().entries.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    // A panic mid-resolution leaves the table consistent (every mutation is a
    // single insert or assignment), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, DialectTable> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DialectTable> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
