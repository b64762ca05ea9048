//! In-memory collaborator doubles for service tests.
//!
//! Each store is a map behind a mutex, mirroring the real contracts
//! closely enough that the services cannot tell the difference. The
//! menu store additionally counts `save` calls so tests can assert the
//! exactly-one-persist property.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::profanity::{ProfanityChecker, ProfanityError};
use crate::store::{MenuGroupStore, MenuStore, ProductStore, StoreResult};
use bistro_core::{Menu, MenuGroup, Product};

// =============================================================================
// Products
// =============================================================================

#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    inner: Arc<Mutex<HashMap<String, Product>>>,
}

impl InMemoryProductStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        let store = Self::default();
        {
            let mut inner = store.inner.lock().unwrap();
            for product in products {
                inner.insert(product.id.clone(), product);
            }
        }
        store
    }

    pub fn get(&self, id: &str) -> Option<Product> {
        self.inner.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self.inner.lock().unwrap().get(id).cloned())
    }

    async fn find_all_by_id_in(&self, ids: &[String]) -> StoreResult<Vec<Product>> {
        let inner = self.inner.lock().unwrap();
        // Each existing product at most once, missing ids silently absent.
        Ok(inner
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.inner.lock().unwrap().values().cloned().collect())
    }

    async fn save(&self, product: &Product) -> StoreResult<Product> {
        self.inner
            .lock()
            .unwrap()
            .insert(product.id.clone(), product.clone());
        Ok(product.clone())
    }
}

// =============================================================================
// Menu Groups
// =============================================================================

#[derive(Clone, Default)]
pub struct InMemoryMenuGroupStore {
    inner: Arc<Mutex<HashMap<String, MenuGroup>>>,
}

impl InMemoryMenuGroupStore {
    pub fn with_groups(groups: Vec<MenuGroup>) -> Self {
        let store = Self::default();
        {
            let mut inner = store.inner.lock().unwrap();
            for group in groups {
                inner.insert(group.id.clone(), group);
            }
        }
        store
    }
}

#[async_trait]
impl MenuGroupStore for InMemoryMenuGroupStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<MenuGroup>> {
        Ok(self.inner.lock().unwrap().get(id).cloned())
    }
}

// =============================================================================
// Menus
// =============================================================================

#[derive(Clone, Default)]
pub struct InMemoryMenuStore {
    inner: Arc<Mutex<HashMap<String, Menu>>>,
    save_calls: Arc<AtomicUsize>,
}

impl InMemoryMenuStore {
    pub fn with_menus(menus: Vec<Menu>) -> Self {
        let store = Self::default();
        {
            let mut inner = store.inner.lock().unwrap();
            for menu in menus {
                inner.insert(menu.id.clone(), menu);
            }
        }
        store
    }

    pub fn get(&self, id: &str) -> Option<Menu> {
        self.inner.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MenuStore for InMemoryMenuStore {
    async fn find_all_by_product_id(&self, product_id: &str) -> StoreResult<Vec<Menu>> {
        let inner = self.inner.lock().unwrap();
        let mut menus: Vec<Menu> = inner
            .values()
            .filter(|m| m.line_items.iter().any(|li| li.product_id == product_id))
            .cloned()
            .collect();
        // Deterministic order keeps test output stable.
        menus.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(menus)
    }

    async fn save(&self, menu: &Menu) -> StoreResult<Menu> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .lock()
            .unwrap()
            .insert(menu.id.clone(), menu.clone());
        Ok(menu.clone())
    }
}

// =============================================================================
// Profanity
// =============================================================================

/// Screens against a fixed banned-word list, no network involved.
#[derive(Clone, Default)]
pub struct StubProfanityChecker {
    banned: Vec<String>,
}

impl StubProfanityChecker {
    /// A checker that accepts every name.
    pub fn clean() -> Self {
        Self::default()
    }

    /// A checker that flags any name containing one of the words.
    pub fn banning(words: &[&str]) -> Self {
        StubProfanityChecker {
            banned: words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[async_trait]
impl ProfanityChecker for StubProfanityChecker {
    async fn contains_profanity(&self, text: &str) -> Result<bool, ProfanityError> {
        Ok(self.banned.iter().any(|w| text.contains(w.as_str())))
    }
}
