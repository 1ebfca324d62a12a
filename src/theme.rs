//! Theme preference: current value, persistence and change notification.
//!
//! The current theme lives in a [`ThemeStore`], persisted through a
//! [`KeyValueStore`] (browser `localStorage` under `hydrate`). Anything that
//! depends on the theme registers with [`ThemeStore::subscribe`]; the DOM
//! installer registers the `<html data-theme>` mirror first, so later
//! subscribers (the navbar) already see the new CSS variables.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A refused write (private browsing, quota) is
//! logged and the in-page switch still happens.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::consts::DEFAULT_THEME;
use crate::error::{Error, Result};

/// A named visual mode selecting a set of CSS variables.
///
/// The set of themes belongs to the page markup (`light`, `dark` and
/// `night-light` on the stock page), so any trimmed, non-empty name is
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Theme(String);

impl Theme {
    /// Attribute and storage value for this theme.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self(DEFAULT_THEME.to_owned())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("theme name is empty")]
pub struct EmptyTheme;

impl FromStr for Theme {
    type Err = EmptyTheme;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() { Err(EmptyTheme) } else { Ok(Self(s.to_owned())) }
    }
}

impl TryFrom<String> for Theme {
    type Error = EmptyTheme;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Whether a theme button carrying `button_value` should be highlighted.
#[must_use]
pub fn is_active(button_value: Option<&str>, current: &Theme) -> bool {
    button_value.is_some_and(|v| v.trim() == current.as_str())
}

/// Durable string key-value storage.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the backing store refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory [`KeyValueStore`], used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, like storage in some private modes.
    #[must_use]
    pub fn read_only() -> Self {
        Self { items: RefCell::default(), read_only: true }
    }

    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::Storage("store is read-only".into()));
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

type Subscriber = Box<dyn Fn(&Theme)>;

/// Owner of the current theme.
pub struct ThemeStore<S> {
    storage: S,
    key: String,
    current: Theme,
    subscribers: Vec<Subscriber>,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Resolve the starting theme.
    ///
    /// A stored preference wins, then the document-root attribute, then
    /// `default`. Unreadable or blank values fall through.
    pub fn load(storage: S, key: &str, root_attr: Option<&str>, default: Theme) -> Self {
        let stored = match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme: reading {key:?} failed: {err}");
                None
            }
        };
        let current = [stored.as_deref(), root_attr]
            .into_iter()
            .flatten()
            .find_map(|raw| match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    log::debug!("theme: ignoring {err}");
                    None
                }
            })
            .unwrap_or(default);
        Self { storage, key: key.to_owned(), current, subscribers: Vec::new() }
    }

    #[must_use]
    pub fn get(&self) -> &Theme {
        &self.current
    }

    /// Switch to `theme`, persist it and notify subscribers in registration order.
    pub fn set(&mut self, theme: Theme) {
        if let Err(err) = self.storage.set_item(&self.key, theme.as_str()) {
            log::warn!("theme: could not persist {theme}: {err}");
        }
        self.current = theme;
        for subscriber in &self.subscribers {
            subscriber(&self.current);
        }
    }

    /// Register `f` to run after every [`ThemeStore::set`].
    pub fn subscribe(&mut self, f: impl Fn(&Theme) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{LocalStorage, install};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Document, Element, Window};

    use super::{KeyValueStore, Theme, ThemeStore, is_active};
    use crate::config::Config;
    use crate::consts::{ACTIVE_CLASS, THEME_ATTR, THEME_BUTTON_SELECTOR};
    use crate::dom;
    use crate::error::{Error, Result};

    /// Browser `localStorage`, or nothing when the page may not use it.
    pub struct LocalStorage(Option<web_sys::Storage>);

    impl LocalStorage {
        #[must_use]
        pub fn from_window(window: &Window) -> Self {
            match window.local_storage() {
                Ok(storage) => Self(storage),
                Err(e) => {
                    log::warn!("theme: {}", Error::js("local_storage", &e));
                    Self(None)
                }
            }
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            let Some(storage) = &self.0 else {
                return Ok(None);
            };
            storage.get_item(key).map_err(|e| Error::js("storage.get_item", &e))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            let Some(storage) = &self.0 else {
                return Err(Error::Storage("localStorage unavailable".into()));
            };
            storage
                .set_item(key, value)
                .map_err(|e| Error::js("storage.set_item", &e))
        }
    }

    fn mirror(root: &Element, buttons: &[Element], theme: &Theme) -> Result<()> {
        dom::set_attr(root, THEME_ATTR, theme.as_str())?;
        for button in buttons {
            let active = is_active(button.get_attribute(THEME_ATTR).as_deref(), theme);
            dom::set_class(button, ACTIVE_CLASS, active)?;
        }
        Ok(())
    }

    /// Load the theme, mirror it onto the page and wire the theme buttons.
    pub fn install(window: &Window, document: &Document, config: &Config) -> Result<Rc<RefCell<ThemeStore<LocalStorage>>>> {
        let root = document.document_element().ok_or(Error::NoDocument)?;
        let buttons = dom::query_all(document, THEME_BUTTON_SELECTOR)?;

        let mut store = ThemeStore::load(
            LocalStorage::from_window(window),
            &config.storage_key,
            root.get_attribute(THEME_ATTR).as_deref(),
            config.default_theme.clone(),
        );
        mirror(&root, &buttons, store.get())?;
        log::debug!("theme: starting with {} ({} buttons)", store.get(), buttons.len());

        let (mirror_root, mirror_buttons) = (root.clone(), buttons.clone());
        store.subscribe(move |theme| {
            if let Err(err) = mirror(&mirror_root, &mirror_buttons, theme) {
                log::warn!("theme: applying {theme} failed: {err}");
            }
        });

        let store = Rc::new(RefCell::new(store));
        for button in &buttons {
            let store = Rc::clone(&store);
            let source = button.clone();
            dom::listen(button, "click", move |_| {
                let raw = source.get_attribute(THEME_ATTR).unwrap_or_default();
                match raw.parse::<Theme>() {
                    Ok(theme) => store.borrow_mut().set(theme),
                    Err(err) => log::debug!("theme: button without a value, {err}"),
                }
            })?;
        }
        Ok(store)
    }
}
