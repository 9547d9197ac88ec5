//! Persisted session token storage.
//!
//! The token lives under one key in exactly one of two browser stores:
//! `localStorage` (survives restarts, used for "remember me") or
//! `sessionStorage` (cleared when the tab closes). Selection, restore
//! fallback, and clear-both logic all live in [`CredentialStores`] so no
//! call site duplicates it. Browser access requires the `hydrate` feature;
//! the free functions at the bottom fall back to no-ops elsewhere.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

/// Storage key shared by both stores.
pub const TOKEN_KEY: &str = "token";

/// A single place a token can be persisted to.
pub trait TokenStore {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// The durable/session-scoped store pair with the selection logic.
pub struct CredentialStores<D, S> {
    pub durable: D,
    pub session: S,
}

impl<D: TokenStore, S: TokenStore> CredentialStores<D, S> {
    /// Read back a previously persisted token: durable store first, then
    /// the session-scoped store. Empty strings count as absent.
    pub fn restore(&self) -> Option<String> {
        self.durable
            .read()
            .filter(|token| !token.is_empty())
            .or_else(|| self.session.read().filter(|token| !token.is_empty()))
    }

    /// Persist the token into exactly one store, clearing the other so at
    /// most one copy ever exists.
    pub fn persist(&self, token: &str, remember: bool) {
        if remember {
            self.durable.write(token);
            self.session.clear();
        } else {
            self.session.write(token);
            self.durable.clear();
        }
    }

    /// Remove the token from both stores.
    pub fn clear(&self) {
        self.durable.clear();
        self.session.clear();
    }
}

/// In-memory store backing unit tests.
#[derive(Debug, Default)]
pub struct MemoryStore(std::cell::RefCell<Option<String>>);

impl MemoryStore {
    pub fn value(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

impl TokenStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn write(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

/// Which browser store a [`BrowserStore`] wraps.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug)]
pub enum StorageScope {
    /// `localStorage` — survives browser restarts.
    Durable,
    /// `sessionStorage` — cleared when the tab closes.
    Tab,
}

/// Token store over `web_sys` storage. Absent storage (disabled cookies,
/// no window) degrades to reads returning `None` and writes doing nothing.
#[cfg(feature = "hydrate")]
pub struct BrowserStore {
    scope: StorageScope,
}

#[cfg(feature = "hydrate")]
impl BrowserStore {
    pub fn new(scope: StorageScope) -> Self {
        Self { scope }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.scope {
            StorageScope::Durable => window.local_storage(),
            StorageScope::Tab => window.session_storage(),
        }
        .ok()
        .flatten()
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for BrowserStore {
    fn read(&self) -> Option<String> {
        self.storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn write(&self, token: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(feature = "hydrate")]
fn browser() -> CredentialStores<BrowserStore, BrowserStore> {
    CredentialStores {
        durable: BrowserStore::new(StorageScope::Durable),
        session: BrowserStore::new(StorageScope::Tab),
    }
}

/// Read any persisted token at startup. No network call.
pub fn restore_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        browser().restore()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly issued token into the store selected by `remember`.
pub fn persist_token(token: &str, remember: bool) {
    #[cfg(feature = "hydrate")]
    {
        browser().persist(token, remember);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, remember);
    }
}

/// Drop the token from both stores (logout).
pub fn clear_tokens() {
    #[cfg(feature = "hydrate")]
    {
        browser().clear();
    }
}
