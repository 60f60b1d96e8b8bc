//! The persistence collaborator.
//!
//! Two calls, both best-effort: `load` once per collection at startup,
//! `save` after every committed change. Implementations swallow their own
//! failures; the in-memory store stays authoritative either way.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Evaluations,
    SurgicalReports,
}

impl CollectionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKey::Evaluations => "evaluations",
            CollectionKey::SurgicalReports => "surgicalReports",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            CollectionKey::Evaluations => "evaluations.json",
            CollectionKey::SurgicalReports => "surgicalReports.json",
        }
    }
}

pub trait Persistence: Send + Sync {
    /// The serialized collection, or `None` when absent or unreadable.
    fn load(&self, key: CollectionKey) -> Option<String>;

    /// Best-effort write; implementations log and swallow failures.
    fn save(&self, key: CollectionKey, payload: &str);
}

/// JSON file per collection under a directory, typically the platform
/// config dir. Writes go through a temp file and rename for atomicity.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The default per-user location (`<config dir>/kardex`). `None` when
    /// the platform exposes no config directory.
    pub fn default_location() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("kardex"))
    }

    fn path(&self, key: CollectionKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

impl Persistence for FileStore {
    fn load(&self, key: CollectionKey) -> Option<String> {
        let path = self.path(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read collection");
                None
            }
        }
    }

    fn save(&self, key: CollectionKey, payload: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            tracing::warn!(dir = %self.dir.display(), error = %e, "failed to create store dir");
            return;
        }

        let path = self.path(key);
        let tmp_path = self.dir.join(format!("{}.tmp", key.file_name()));
        if let Err(e) = std::fs::write(&tmp_path, payload.as_bytes()) {
            tracing::warn!(path = %tmp_path.display(), error = %e, "failed to write collection");
            return;
        }
        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to persist collection");
            return;
        }
        tracing::info!(path = %path.display(), "collection saved");
    }
}

/// In-memory persistence for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: Mutex<HashMap<CollectionKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self, key: CollectionKey) -> Option<String> {
        self.cells.lock().unwrap().get(&key).cloned()
    }

    /// Seed a collection, e.g. with corrupt data in tests.
    pub fn seed(&self, key: CollectionKey, payload: &str) {
        self.cells.lock().unwrap().insert(key, payload.to_string());
    }
}

impl Persistence for MemoryStore {
    fn load(&self, key: CollectionKey) -> Option<String> {
        self.contents(key)
    }

    fn save(&self, key: CollectionKey, payload: &str) {
        self.cells.lock().unwrap().insert(key, payload.to_string());
    }
}
