//! Breadcrumb sinks.
//!
//! The middleware never looks a collector up from global state: the hub is
//! passed in when the middleware is built. Anything that can accept a
//! [`Breadcrumb`] from many in-flight requests at once can be a hub.
//!
//! | Hub | Use |
//! |---|---|
//! | [`TracingHub`] | Emit each breadcrumb as a structured `tracing` event. |
//! | [`MemoryHub`] | Keep breadcrumbs in memory; drain them in batches or assert on them in tests. |
//! | any `Fn(Breadcrumb)` | Forward to your own collector. |

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::breadcrumb::Breadcrumb;

/// A process-wide sink for breadcrumbs.
///
/// Called concurrently from every request the middleware instruments. No
/// ordering is promised between breadcrumbs from different requests.
pub trait Hub: Send + Sync + 'static {
    fn add_breadcrumb(&self, breadcrumb: Breadcrumb);
}

impl<F> Hub for F
where
    F: Fn(Breadcrumb) + Send + Sync + 'static,
{
    fn add_breadcrumb(&self, breadcrumb: Breadcrumb) {
        self(breadcrumb)
    }
}

// ── TracingHub ────────────────────────────────────────────────────────────────

/// Emits every breadcrumb as an `INFO` event on the `crumbs::breadcrumb` target.
///
/// The event carries the category, the message and the serialized JSON payload
/// in `data`, so a JSON log pipeline can ship it as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingHub;

impl Hub for TracingHub {
    fn add_breadcrumb(&self, breadcrumb: Breadcrumb) {
        match breadcrumb.to_json() {
            Ok(data) => tracing::info!(
                target: "crumbs::breadcrumb",
                category = %breadcrumb.category(),
                data = %data,
                "{}",
                breadcrumb.message(),
            ),
            Err(e) => tracing::warn!(
                target: "crumbs::breadcrumb",
                category = %breadcrumb.category(),
                "breadcrumb could not be serialized: {e}",
            ),
        }
    }
}

// ── MemoryHub ─────────────────────────────────────────────────────────────────

/// In-memory breadcrumb store.
///
/// Clones share the same storage: keep one clone, hand the other to the
/// middleware, read back what was recorded.
///
/// ```rust
/// use crumbs::{Hub, MemoryHub};
///
/// let hub = MemoryHub::new();
/// let recorder = hub.clone();
/// # let _: &dyn Hub = &hub;
/// assert!(recorder.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryHub {
    breadcrumbs: Arc<Mutex<Vec<Breadcrumb>>>,
}

impl MemoryHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.lock().clone()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Breadcrumb> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic elsewhere while holding the lock leaves the Vec itself valid.
    fn lock(&self) -> MutexGuard<'_, Vec<Breadcrumb>> {
        self.breadcrumbs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Hub for MemoryHub {
    fn add_breadcrumb(&self, breadcrumb: Breadcrumb) {
        self.lock().push(breadcrumb);
    }
}
