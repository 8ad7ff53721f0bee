//! Listener registry with per event class filters.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::event::{CallIf, Event, EventClass};

/// Callback receiving the events of a device manager.
pub type EventListener = dyn Fn(&Arc<dyn Event>) + Send + Sync;

static NEXT_ADDED_STAMP: AtomicU64 = AtomicU64::new(1);

/// A registered listener.
///
/// The listener itself is held weakly: dropping the last strong reference
/// unregisters it the next time the registry is touched.
pub struct ListenerEntry {
    listener: Weak<EventListener>,
    added_stamp: u64,
    call_if: Option<CallIf>,
    // Indexed like the owning manager's event classes. `None` means "always".
    class_call_ifs: Vec<Option<CallIf>>,
    removed: AtomicBool,
}

impl ListenerEntry {
    fn new(listener: &Arc<EventListener>, call_if: Option<CallIf>, classes: &[EventClass]) -> Self {
        let class_call_ifs = classes
            .iter()
            .map(|class| {
                call_if
                    .as_ref()
                    .map(|call_if| call_if.simplify(*class))
                    .filter(|simplified| !simplified.is_true())
            })
            .collect();
        Self {
            listener: Arc::downgrade(listener),
            added_stamp: NEXT_ADDED_STAMP.fetch_add(1, Ordering::Relaxed),
            call_if,
            class_call_ifs,
            removed: AtomicBool::new(false),
        }
    }

    /// Unique, increasing with registration order.
    pub fn added_stamp(&self) -> u64 {
        self.added_stamp
    }

    /// The filter as passed on registration.
    pub fn call_if(&self) -> Option<&CallIf> {
        self.call_if.as_ref()
    }

    /// The simplified filter for the event class at `class_index`.
    pub fn class_call_if(&self, class_index: usize) -> Option<&CallIf> {
        self.class_call_ifs.get(class_index).and_then(Option::as_ref)
    }

    pub fn is_removed(&self) -> bool {
        self.removed.load(Ordering::Acquire)
    }

    fn is_listener(&self, listener: &Weak<EventListener>) -> bool {
        Weak::ptr_eq(&self.listener, listener)
    }

    /// Delivers `event` if the filter of its class lets it through.
    ///
    /// Returns `false` if the listener is gone or the filter rejected the
    /// event. Panics of the listener are not caught.
    pub fn handle_event_call_if(&self, class_index: usize, event: &Arc<dyn Event>) -> bool {
        debug_assert!(
            class_index < self.class_call_ifs.len(),
            "event class index {class_index} out of range"
        );
        if self.is_removed() {
            return false;
        }
        let Some(listener) = self.listener.upgrade() else {
            self.removed.store(true, Ordering::Release);
            return false;
        };
        if let Some(call_if) = self.class_call_if(class_index) {
            if !call_if.evaluate(event.as_ref()) {
                return false;
            }
        }
        listener(event);
        true
    }
}

impl fmt::Debug for ListenerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerEntry")
            .field("added_stamp", &self.added_stamp)
            .field("call_if", &self.call_if)
            .field("removed", &self.is_removed())
            .finish()
    }
}

/// Ordered, copy-on-write list of listeners.
///
/// Dispatch iterates a snapshot, registration and removal swap in a new list.
#[derive(Default)]
pub struct ListenerRegistry {
    entries: RwLock<Arc<Vec<Arc<ListenerEntry>>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current listeners in registration order.
    pub fn snapshot(&self) -> Arc<Vec<Arc<ListenerEntry>>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `false` if `listener` is already registered.
    pub fn add(
        &self,
        listener: &Arc<EventListener>,
        call_if: Option<CallIf>,
        classes: &[EventClass],
    ) -> bool {
        let weak = Arc::downgrade(listener);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.iter().any(|entry| entry.is_listener(&weak) && !entry.is_removed()) {
            return false;
        }
        let mut updated: Vec<Arc<ListenerEntry>> = entries
            .iter()
            .filter(|entry| !entry.is_removed() && entry.listener.strong_count() > 0)
            .cloned()
            .collect();
        updated.push(Arc::new(ListenerEntry::new(listener, call_if, classes)));
        *entries = Arc::new(updated);
        true
    }

    /// Returns `false` if `listener` wasn't registered.
    pub fn remove(&self, listener: &Arc<EventListener>) -> bool {
        let weak = Arc::downgrade(listener);
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let Some(found) = entries
            .iter()
            .find(|entry| entry.is_listener(&weak) && !entry.is_removed())
        else {
            return false;
        };
        // Snapshots held by an ongoing dispatch must skip it too.
        found.removed.store(true, Ordering::Release);
        let updated: Vec<Arc<ListenerEntry>> = entries
            .iter()
            .filter(|entry| !entry.is_removed() && entry.listener.strong_count() > 0)
            .cloned()
            .collect();
        *entries = Arc::new(updated);
        true
    }

    pub fn len(&self) -> usize {
        self.snapshot()
            .iter()
            .filter(|entry| !entry.is_removed() && entry.listener.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::capability::{CapabilityClass, CapabilityId};

    #[derive(Debug)]
    struct Ping(EventClass);

    impl Event for Ping {
        fn class(&self) -> EventClass {
            self.0
        }
        fn time_usec(&self) -> i64 {
            0
        }
        fn capability_id(&self) -> CapabilityId {
            CapabilityId::next()
        }
        fn capability_class(&self) -> CapabilityClass {
            CapabilityClass::Key
        }
    }

    const CLASSES: &[EventClass] = &[EventClass::DeviceMgmt, EventClass::Key];

    fn counting_listener(counter: &Arc<Mutex<u32>>) -> Arc<EventListener> {
        let counter = counter.clone();
        Arc::new(move |_event: &Arc<dyn Event>| {
            *counter.lock().unwrap() += 1;
        })
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = ListenerRegistry::new();
        let counter = Arc::new(Mutex::new(0));
        let listener = counting_listener(&counter);
        assert!(registry.add(&listener, None, CLASSES));
        assert!(!registry.add(&listener, None, CLASSES));
        assert_eq!(registry.len(), 1);
        assert!(registry.remove(&listener));
        assert!(!registry.remove(&listener));
        assert!(registry.is_empty());
    }

    #[test]
    fn stamps_follow_registration_order() {
        let registry = ListenerRegistry::new();
        let counter = Arc::new(Mutex::new(0));
        let first = counting_listener(&counter);
        let second = counting_listener(&counter);
        registry.add(&first, None, CLASSES);
        registry.add(&second, None, CLASSES);
        let snapshot = registry.snapshot();
        assert!(snapshot[0].added_stamp() < snapshot[1].added_stamp());
    }

    #[test]
    fn filters_are_simplified_per_class() {
        let registry = ListenerRegistry::new();
        let counter = Arc::new(Mutex::new(0));
        let listener = counting_listener(&counter);
        registry.add(
            &listener,
            Some(CallIf::EventClass(EventClass::DeviceMgmt)),
            CLASSES,
        );
        let entry = registry.snapshot()[0].clone();
        assert!(matches!(
            entry.call_if(),
            Some(CallIf::EventClass(EventClass::DeviceMgmt))
        ));
        assert!(entry.class_call_if(0).is_none());
        assert!(matches!(entry.class_call_if(1), Some(CallIf::False)));

        let key_event: Arc<dyn Event> = Arc::new(Ping(EventClass::Key));
        assert!(!entry.handle_event_call_if(1, &key_event));
        let mgmt_event: Arc<dyn Event> = Arc::new(Ping(EventClass::DeviceMgmt));
        assert!(entry.handle_event_call_if(0, &mgmt_event));
        assert_eq!(*counter.lock().unwrap(), 1);
    }

    #[test]
    fn dropped_listener_is_pruned() {
        let registry = ListenerRegistry::new();
        let counter = Arc::new(Mutex::new(0));
        let listener = counting_listener(&counter);
        registry.add(&listener, None, CLASSES);
        let entry = registry.snapshot()[0].clone();
        drop(listener);
        assert!(registry.is_empty());

        let event: Arc<dyn Event> = Arc::new(Ping(EventClass::Key));
        assert!(!entry.handle_event_call_if(1, &event));
        assert!(entry.is_removed());
        assert_eq!(*counter.lock().unwrap(), 0);
    }

    #[test]
    fn removed_entry_in_snapshot_is_skipped() {
        let registry = ListenerRegistry::new();
        let counter = Arc::new(Mutex::new(0));
        let listener = counting_listener(&counter);
        registry.add(&listener, None, CLASSES);
        let snapshot = registry.snapshot();
        registry.remove(&listener);

        let event: Arc<dyn Event> = Arc::new(Ping(EventClass::Key));
        assert!(!snapshot[0].handle_event_call_if(1, &event));
        assert_eq!(*counter.lock().unwrap(), 0);
    }
}
