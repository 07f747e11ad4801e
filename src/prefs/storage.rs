//! Storage backends for preferences.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::core::AcademyError;

use super::Preferences;

/// Where preferences are persisted.
pub trait PreferenceStorage {
    /// Stored preferences, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<Preferences>, AcademyError>;

    fn save(&self, prefs: &Preferences) -> Result<(), AcademyError>;
}

/// In-memory storage, for tests and sessions that must not persist.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<Preferences>>,
}

impl MemoryStorage {
    /// Storage that already holds `prefs`.
    pub fn with(prefs: Preferences) -> Self {
        Self {
            slot: RefCell::new(Some(prefs)),
        }
    }

    /// Last saved value.
    pub fn saved(&self) -> Option<Preferences> {
        self.slot.borrow().clone()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Preferences>, AcademyError> {
        Ok(self.saved())
    }

    fn save(&self, prefs: &Preferences) -> Result<(), AcademyError> {
        *self.slot.borrow_mut() = Some(prefs.clone());
        Ok(())
    }
}

/// Preferences stored as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Preferences>, AcademyError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, prefs: &Preferences) -> Result<(), AcademyError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(prefs)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
