//! Process-wide store of live menus keyed by message id.
//!
//! The map lock is the only place menus are inserted or removed. Each menu sits behind
//! its own mutex, which serializes every mutation of that menu (dispatch and sweep alike).
use super::state::Menu;
use crate::error::MenuError;
use serenity::model::id::MessageId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub type MenuHandle = Arc<Mutex<Menu>>;

#[derive(Default)]
pub struct MenuRegistry {
    menus: RwLock<HashMap<MessageId, MenuHandle>>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a menu under its message id. An existing entry is never replaced.
    pub async fn register(&self, menu: Menu) -> Result<MenuHandle, MenuError> {
        let id = menu.message_id();
        let mut menus = self.menus.write().await;
        if menus.contains_key(&id) {
            return Err(MenuError::DuplicateMessage(id));
        }
        let handle = Arc::new(Mutex::new(menu));
        menus.insert(id, handle.clone());
        Ok(handle)
    }

    pub async fn lookup(&self, id: MessageId) -> Option<MenuHandle> {
        self.menus.read().await.get(&id).cloned()
    }

    pub async fn remove(&self, id: MessageId) -> Option<MenuHandle> {
        self.menus.write().await.remove(&id)
    }

    /// Removes `id` only while it still maps to `handle`.
    pub async fn remove_handle(&self, id: MessageId, handle: &MenuHandle) -> bool {
        let mut menus = self.menus.write().await;
        match menus.get(&id) {
            Some(current) if Arc::ptr_eq(current, handle) => {
                menus.remove(&id);
                true
            }
            _ => false,
        }
    }

    /// A point-in-time copy of all entries; the menus themselves stay shared.
    pub async fn snapshot(&self) -> Vec<(MessageId, MenuHandle)> {
        self.menus
            .read()
            .await
            .iter()
            .map(|(id, handle)| (*id, handle.clone()))
            .collect()
    }

    pub async fn contains(&self, id: MessageId) -> bool {
        self.menus.read().await.contains_key(&id)
    }

    pub async fn len(&self) -> usize {
        self.menus.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.menus.read().await.is_empty()
    }
}
