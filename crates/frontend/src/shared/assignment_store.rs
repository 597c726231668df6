//! Observable store for the driver assignment record.
//!
//! One record lives under a single storage key. Views call [`AssignmentStore::subscribe`]
//! on mount: the callback runs once with the current record, then again on
//! every [`set`](AssignmentStore::set) in this tab and on every storage event
//! coming from other tabs. Dropping the returned [`Subscription`] detaches
//! the callback.

use contracts::domain::a003_driver_assignment::{AssignPolicy, AssignedOrder, AssignmentRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

// ============================================================================
// Backends
// ============================================================================

/// Raw string storage behind the store
pub trait AssignmentBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
}

/// `window.localStorage`
pub struct LocalStorageBackend;

impl AssignmentBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| "localStorage is not available".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("localStorage write failed: {:?}", e))
    }
}

/// In-memory map, for tests and for hosts without localStorage
#[derive(Default)]
pub struct MemoryBackend {
    items: Mutex<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let backend = Self::new();
        if let Ok(mut items) = backend.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        backend
    }

    /// Backend whose writes always fail
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }
}

impl AssignmentBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        if self.read_only {
            return Err("storage is read-only".to_string());
        }
        let mut items = self.items.lock().map_err(|e| e.to_string())?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// Store
// ============================================================================

type Listener = Arc<dyn Fn(&AssignmentRecord) + Send + Sync>;

struct StoreInner {
    backend: Box<dyn AssignmentBackend>,
    key: String,
    policy: AssignPolicy,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

/// Shared handle, cheap to clone into closures and context
#[derive(Clone)]
pub struct AssignmentStore {
    inner: Arc<StoreInner>,
}

impl AssignmentStore {
    pub fn new(backend: impl AssignmentBackend + 'static, key: &str, policy: AssignPolicy) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                backend: Box::new(backend),
                key: key.to_string(),
                policy,
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn key(&self) -> &str {
        &self.inner.key
    }

    pub fn policy(&self) -> AssignPolicy {
        self.inner.policy
    }

    /// Current record. Missing or malformed data reads as `None`.
    pub fn get(&self) -> Option<AssignmentRecord> {
        let raw = self.inner.backend.read(&self.inner.key)?;
        match AssignmentRecord::from_json(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::error!(
                    "Failed to parse stored assignment under '{}': {}",
                    self.inner.key,
                    e
                );
                None
            }
        }
    }

    /// Ids of every order in the current record
    pub fn assigned_ids(&self) -> std::collections::HashSet<String> {
        self.get()
            .map(|record| record.assigned_ids())
            .unwrap_or_default()
    }

    /// Persist `record` and notify this tab's subscribers.
    ///
    /// A failed write is logged; subscribers still get the in-memory record.
    pub fn set(&self, record: AssignmentRecord) {
        match record.to_json() {
            Ok(json) => {
                if let Err(e) = self.inner.backend.write(&self.inner.key, &json) {
                    log::error!("Failed to persist assignment for {}: {}", record.driver_id, e);
                }
            }
            Err(e) => log::error!("Failed to serialize assignment: {}", e),
        }
        self.publish(&record);
    }

    /// Assign `orders` to `driver_id` under the configured write policy and
    /// return the stored record
    pub fn assign(&self, driver_id: &str, orders: Vec<AssignedOrder>) -> AssignmentRecord {
        let existing = self.get();
        let record =
            AssignmentRecord::combine(existing.as_ref(), driver_id, orders, self.inner.policy);
        log::info!(
            "Assigning {} order(s) to {} ({})",
            record.order_count(),
            driver_id,
            self.inner.policy.code()
        );
        self.set(record.clone());
        record
    }

    /// Run every subscriber with `record`
    pub fn publish(&self, record: &AssignmentRecord) {
        // Callbacks may subscribe or read the store, so run them unlocked
        let listeners: Vec<Listener> = match self.inner.listeners.lock() {
            Ok(list) => list.iter().map(|(_, f)| f.clone()).collect(),
            Err(_) => return,
        };
        for listener in listeners {
            listener(record);
        }
    }

    /// Register `callback`. It runs immediately when a record is already
    /// stored, then on every later publish.
    #[must_use = "dropping the subscription detaches the callback"]
    pub fn subscribe(
        &self,
        callback: impl Fn(&AssignmentRecord) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let listener: Listener = Arc::new(callback);
        if let Ok(mut list) = self.inner.listeners.lock() {
            list.push((id, listener.clone()));
        }
        if let Some(record) = self.get() {
            listener(&record);
        }
        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Storage event from another tab. Events for other keys, removals and
    /// malformed values are ignored.
    pub fn handle_storage_event(&self, key: Option<String>, new_value: Option<String>) {
        if key.as_deref() != Some(self.inner.key.as_str()) {
            return;
        }
        let Some(raw) = new_value else {
            return;
        };
        match AssignmentRecord::from_json(&raw) {
            Ok(record) => self.publish(&record),
            Err(e) => log::error!("Ignoring malformed assignment from another tab: {}", e),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }
}

/// Handle returned by [`AssignmentStore::subscribe`]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            if let Ok(mut list) = inner.listeners.lock() {
                list.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_driver::DriverRoster;
    use contracts::domain::a002_driver::Driver;
    use contracts::enums::DriverStatus;

    const KEY: &str = "driverAssignments";

    fn store(policy: AssignPolicy) -> AssignmentStore {
        AssignmentStore::new(MemoryBackend::new(), KEY, policy)
    }

    fn ids(record: &AssignmentRecord) -> Vec<String> {
        record.orders.iter().map(|o| o.id.clone()).collect()
    }

    fn driver(id: &str) -> Driver {
        Driver {
            id: id.to_string(),
            name: "Raj Kumar".to_string(),
            phone: String::new(),
            location: String::new(),
            status: DriverStatus::Active,
            assigned_orders: 0,
            total_deliveries: 0,
            rating: 4.8,
        }
    }

    #[test]
    fn test_malformed_data_reads_as_empty() {
        for raw in ["", "{", "not json", "[1,2]", "{\"orders\":[]}", "null"] {
            let s = AssignmentStore::new(MemoryBackend::with_item(KEY, raw), KEY, AssignPolicy::Merge);
            assert_eq!(s.get(), None, "input: {raw}");
            assert!(s.assigned_ids().is_empty());
        }
    }

    #[test]
    fn test_merge_assign_deduplicates() {
        let s = store(AssignPolicy::Merge);
        s.assign("D-1001", vec![AssignedOrder::with_id("O1")]);
        s.assign("D-1001", vec![AssignedOrder::with_id("O2")]);
        assert_eq!(ids(&s.get().unwrap()), vec!["O1", "O2"]);

        s.assign("D-1001", vec![AssignedOrder::with_id("O1")]);
        assert_eq!(ids(&s.get().unwrap()), vec!["O1", "O2"]);
    }

    #[test]
    fn test_replace_assign_overwrites() {
        let s = store(AssignPolicy::Replace);
        s.assign("D-1001", vec![AssignedOrder::with_id("O1")]);
        s.assign("D-1001", vec![AssignedOrder::with_id("O2")]);
        assert_eq!(ids(&s.get().unwrap()), vec!["O2"]);
    }

    #[test]
    fn test_other_driver_replaces_slot() {
        let s = store(AssignPolicy::Merge);
        s.assign("D-1001", vec![AssignedOrder::with_id("O1")]);
        s.assign("D-1002", vec![AssignedOrder::with_id("O2")]);
        let record = s.get().unwrap();
        assert_eq!(record.driver_id, "D-1002");
        assert_eq!(ids(&record), vec!["O2"]);
    }

    #[test]
    fn test_broadcast_updates_every_view() {
        let s = store(AssignPolicy::Merge);
        let views: Vec<Arc<Mutex<DriverRoster>>> = (0..2)
            .map(|_| Arc::new(Mutex::new(DriverRoster::new(vec![driver("D-1001")]))))
            .collect();
        let _subs: Vec<Subscription> = views
            .iter()
            .map(|view| {
                let view = view.clone();
                s.subscribe(move |record| {
                    view.lock().unwrap().apply_assignment(record);
                })
            })
            .collect();

        let record = AssignmentRecord::from_json(r#"{"driverId":"D-1001","orders":[{"id":"O1"}]}"#).unwrap();
        s.publish(&record);

        for view in &views {
            assert_eq!(view.lock().unwrap().find("D-1001").unwrap().assigned_orders, 1);
        }
        // Publishing alone does not touch storage
        assert_eq!(s.get(), None);
    }

    #[test]
    fn test_late_subscriber_reads_current_record() {
        let s = store(AssignPolicy::Merge);
        s.assign("D-1001", vec![AssignedOrder::with_id("O1"), AssignedOrder::with_id("O2")]);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in_cb = seen.clone();
        let _sub = s.subscribe(move |record| {
            seen_in_cb.lock().unwrap().push(record.order_count());
        });
        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }

    #[test]
    fn test_subscribe_without_record_does_not_fire() {
        let s = store(AssignPolicy::Merge);
        let calls = Arc::new(AtomicU64::new(0));
        let calls_in_cb = calls.clone();
        let _sub = s.subscribe(move |_| {
            calls_in_cb.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let s = store(AssignPolicy::Merge);
        let calls = Arc::new(AtomicU64::new(0));
        let calls_in_cb = calls.clone();
        let sub = s.subscribe(move |_| {
            calls_in_cb.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(s.subscriber_count(), 1);

        s.assign("D-1001", vec![AssignedOrder::with_id("O1")]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        drop(sub);
        assert_eq!(s.subscriber_count(), 0);
        s.assign("D-1001", vec![AssignedOrder::with_id("O2")]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_write_still_notifies() {
        let s = AssignmentStore::new(MemoryBackend::read_only(), KEY, AssignPolicy::Merge);
        let last = Arc::new(Mutex::new(None));
        let last_in_cb = last.clone();
        let _sub = s.subscribe(move |record| {
            *last_in_cb.lock().unwrap() = Some(record.driver_id.clone());
        });

        s.assign("D-1003", vec![AssignedOrder::with_id("O1")]);
        assert_eq!(last.lock().unwrap().as_deref(), Some("D-1003"));
        assert_eq!(s.get(), None);
    }

    #[test]
    fn test_storage_event_filtering() {
        let s = store(AssignPolicy::Merge);
        let calls = Arc::new(AtomicU64::new(0));
        let calls_in_cb = calls.clone();
        let _sub = s.subscribe(move |_| {
            calls_in_cb.fetch_add(1, Ordering::SeqCst);
        });

        let payload = r#"{"driverId":"D-1001","orders":[{"id":"O1"}]}"#.to_string();
        s.handle_storage_event(Some("other".to_string()), Some(payload.clone()));
        s.handle_storage_event(Some(KEY.to_string()), None);
        s.handle_storage_event(Some(KEY.to_string()), Some("{oops".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        s.handle_storage_event(Some(KEY.to_string()), Some(payload));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
