//! UI preferences with change notification and persistence.
//!
//! Preferences are loaded once when the store opens, changed through the
//! store, and written back to storage after every change that actually
//! alters them.
//!
//! # Example
//!
//! ```
//! use academy::prefs::*;
//!
//! let mut store = PreferenceStore::open(MemoryStorage::default());
//! store.toggle_theme().unwrap();
//! assert_eq!(store.get().theme, Theme::Dark);
//! ```

mod storage;

pub use storage::{JsonFileStorage, MemoryStorage, PreferenceStorage};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AcademyConfig, AcademyError};

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Persisted UI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub locale: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sidebar_collapsed: false,
            locale: "es-ES".into(),
        }
    }
}

impl Preferences {
    /// Defaults for a new user of the academy described by `config`.
    pub fn from_config(config: &AcademyConfig) -> Self {
        Self {
            locale: config.locale.clone(),
            ..Self::default()
        }
    }
}

/// Handle returned by [`PreferenceStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Preferences)>;

/// Owner of the current preferences.
pub struct PreferenceStore<S: PreferenceStorage> {
    storage: S,
    current: Preferences,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: PreferenceStorage> PreferenceStore<S> {
    /// Load preferences from `storage`, falling back to
    /// [`Preferences::default`] when none are stored or the stored data
    /// cannot be read. Never fails; read errors are logged.
    pub fn open(storage: S) -> Self {
        Self::open_with_defaults(storage, Preferences::default())
    }

    /// Like [`PreferenceStore::open`], with `defaults` used when nothing is
    /// stored or the stored data cannot be read.
    pub fn open_with_defaults(storage: S, defaults: Preferences) -> Self {
        let current = match storage.load() {
            Ok(Some(prefs)) => prefs,
            Ok(None) => defaults,
            Err(err) => {
                warn!(error = %err, "stored preferences unreadable, using defaults");
                defaults
            }
        };
        Self {
            storage,
            current,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> &Preferences {
        &self.current
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Register a listener called after every persisted change.
    pub fn subscribe(&mut self, listener: impl Fn(&Preferences) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        self.listeners.len() != before
    }

    /// Apply `change`; persist and notify only if the preferences differ.
    ///
    /// On a storage error the in-memory value is left unchanged.
    /// Returns whether anything changed.
    pub fn update(&mut self, change: impl FnOnce(&mut Preferences)) -> Result<bool, AcademyError> {
        let mut next = self.current.clone();
        change(&mut next);
        if next == self.current {
            return Ok(false);
        }

        self.storage.save(&next)?;
        debug!(theme = ?next.theme, sidebar_collapsed = next.sidebar_collapsed, locale = %next.locale, "preferences saved");
        self.current = next;
        for (_, listener) in &self.listeners {
            listener(&self.current);
        }
        Ok(true)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<bool, AcademyError> {
        self.update(|p| p.theme = theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, AcademyError> {
        self.update(|p| p.theme = p.theme.toggled())?;
        Ok(self.current.theme)
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) -> Result<bool, AcademyError> {
        self.update(|p| p.sidebar_collapsed = collapsed)
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) -> Result<bool, AcademyError> {
        let locale = locale.into();
        if locale.trim().is_empty() {
            return Err(AcademyError::Preferences("locale must not be empty".into()));
        }
        self.update(|p| p.locale = locale)
    }
}
