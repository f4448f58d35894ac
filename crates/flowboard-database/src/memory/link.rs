//! In-memory [`LinkStore`] backed by `dashmap`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use flowboard_core::error::AppError;
use flowboard_core::result::AppResult;
use flowboard_core::traits::{Clock, SystemClock};
use flowboard_core::types::LinkId;
use flowboard_entity::link::{AccessLink, LinkScope, NewAccessLink, ResourceRef};

use crate::store::LinkStore;

/// A stored link plus its insertion sequence, which gives listing a
/// stable store-native order.
#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    link: AccessLink,
}

/// In-memory link store.
#[derive(Debug, Clone)]
pub struct MemoryLinkStore {
    links: Arc<DashMap<LinkId, Entry>>,
    next_seq: Arc<AtomicU64>,
    clock: Arc<dyn Clock>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryLinkStore {
    /// Create an empty store stamping `created_at` from the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store stamping `created_at` from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            links: Arc::new(DashMap::new()),
            next_seq: Arc::new(AtomicU64::new(0)),
            clock,
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent operation fail as if the backend were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored links across all resources.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the store holds no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    fn check_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::persistence("Link store is unavailable"));
        }
        Ok(())
    }
}

impl Default for MemoryLinkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn insert(&self, new: &NewAccessLink) -> AppResult<AccessLink> {
        self.check_available()?;

        let link = AccessLink {
            id: LinkId::new(),
            scope: new.resource.scope(),
            resource_id: new.resource.uuid(),
            role: new.role,
            password_hash: new.password_hash.clone(),
            expires_at: new.expires_at,
            created_at: self.clock.now(),
            created_by: new.created_by,
        };
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.links.insert(
            link.id,
            Entry {
                seq,
                link: link.clone(),
            },
        );

        debug!(link_id = %link.id, resource = %new.resource, "Stored link in memory");
        Ok(link)
    }

    async fn list_for_resource(&self, resource: ResourceRef) -> AppResult<Vec<AccessLink>> {
        self.check_available()?;

        let mut entries: Vec<Entry> = self
            .links
            .iter()
            .filter(|e| e.link.resource() == resource)
            .map(|e| e.value().clone())
            .collect();
        entries.sort_by_key(|e| e.seq);
        Ok(entries.into_iter().map(|e| e.link).collect())
    }

    async fn find(&self, scope: LinkScope, id: LinkId) -> AppResult<Option<AccessLink>> {
        self.check_available()?;

        Ok(self
            .links
            .get(&id)
            .filter(|e| e.link.scope == scope)
            .map(|e| e.link.clone()))
    }

    async fn delete(&self, resource: ResourceRef, id: LinkId) -> AppResult<bool> {
        self.check_available()?;

        Ok(self
            .links
            .remove_if(&id, |_, e| e.link.resource() == resource)
            .is_some())
    }
}
