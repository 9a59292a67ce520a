use crate::modules::accounts::core::account::Account;
use crate::modules::accounts::core::email::NormalizedEmail;
use crate::shared::infrastructure::account_store::{AccountStore, AccountStoreError};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<NormalizedEmail, Account>>,
    calls: AtomicUsize,
    delay_create_ms: AtomicU64,
    offline: bool,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Delays `create` before it takes the write lock, widening race windows in tests.
    pub fn set_delay_create_ms(&self, ms: u64) {
        self.delay_create_ms.store(ms, Ordering::SeqCst);
    }

    /// Number of port calls served so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }

    fn enter(&self) -> Result<(), AccountStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(AccountStoreError::Backend("Account store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn exists(&self, email: &NormalizedEmail) -> Result<bool, AccountStoreError> {
        self.enter()?;
        Ok(self.accounts.read().await.contains_key(email))
    }

    async fn create(&self, account: Account) -> Result<(), AccountStoreError> {
        self.enter()?;
        let delay = self.delay_create_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.accounts.write().await;
        match guard.entry(account.email.clone()) {
            Entry::Occupied(entry) => Err(AccountStoreError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(account);
                Ok(())
            }
        }
    }

    async fn find(&self, email: &NormalizedEmail) -> Result<Option<Account>, AccountStoreError> {
        self.enter()?;
        Ok(self.accounts.read().await.get(email).cloned())
    }
}
