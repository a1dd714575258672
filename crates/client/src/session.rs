//! In-memory session store for the bearer token and active tenant.
//!
//! The backend scopes every request by `Authorization: Bearer` and
//! `X-Tenant-ID`; this holds both between calls. Interior mutability so one
//! client can be shared across tasks.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use facturo_core::TenantId;

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    tenant_id: Option<TenantId>,
}

/// Shared token/tenant storage, cleared on logout or on a 401 response.
#[derive(Debug, Default)]
pub struct Session {
    inner: RwLock<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>, tenant_id: Option<TenantId>) {
        let mut state = self.write();
        state.token = Some(token.into());
        state.tenant_id = tenant_id;
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn tenant_id(&self) -> Option<TenantId> {
        self.read().tenant_id
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    pub fn clear(&self) {
        let mut state = self.write();
        state.token = None;
        state.tenant_id = None;
    }

    // A poisoned lock only means a writer panicked mid-update; the state is
    // plain data, so recover it rather than propagate the panic.
    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner.write().unwrap_or_else(|p| p.into_inner())
    }
}
