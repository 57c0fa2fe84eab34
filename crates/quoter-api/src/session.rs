//! In-memory storage for work-in-progress quote forms.
//!
//! Each browser session owns exactly one form, keyed by the session id
//! carried in the wizard cookie. Data is not persisted and is lost when
//! the process exits.

use std::collections::HashMap;
use std::sync::Arc;

use quoter_core::QuoteForm;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    forms: Arc<RwLock<HashMap<String, QuoteForm>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&self, id: &str) -> Option<QuoteForm> {
        self.forms.read().await.get(id).cloned()
    }

    pub async fn save(&self, id: &str, form: QuoteForm) {
        self.forms.write().await.insert(id.to_string(), form);
    }

    pub async fn clear(&self, id: &str) {
        self.forms.write().await.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let store = SessionStore::new();
        let mut form = QuoteForm::default();
        form.product.product_name = "Flyer".to_string();

        store.save("session-1", form).await;

        let loaded = store.load("session-1").await.unwrap();
        assert_eq!(loaded.product.product_name, "Flyer");
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new();
        store.save("a", QuoteForm::default()).await;

        assert!(store.load("a").await.is_some());
        assert!(store.load("b").await.is_none());
    }

    #[tokio::test]
    async fn clear_removes_the_form() {
        let store = SessionStore::new();
        store.save("a", QuoteForm::default()).await;
        store.clear("a").await;

        assert!(store.load("a").await.is_none());
    }
}
