//! Device managers.
//!
//! A device manager tracks the devices of one backend (or, as a
//! [`ParentDeviceManager`], of several), hands out its manager capabilities
//! and notifies registered listeners about events.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};
use std::time::Instant;

use once_cell::sync::Lazy;
use thiserror::Error;

mod basic;
mod listener;
mod parent;
mod std_manager;

pub use basic::{BasicDeviceManager, EventClassPolicy};
pub use listener::{EventListener, ListenerEntry, ListenerRegistry};
pub use parent::ParentDeviceManager;
pub use std_manager::StdDeviceManager;

use crate::capability::{CapabilityClass, CapabilityId, DeviceMgmtCapability, ManagerCapability};
use crate::device::{Device, DeviceId};
use crate::event::{CallIf, EventClass};

/// Process unique identity of a device manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManagerId(u64);

static NEXT_MANAGER_ID: AtomicU64 = AtomicU64::new(1);

impl ManagerId {
    pub(crate) fn next() -> Self {
        ManagerId(NEXT_MANAGER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("a parent device manager needs at least one child")]
    NoChildren,
    #[error("device manager {0} has no device management capability")]
    MissingDeviceMgmt(ManagerId),
    #[error("device manager {0} already has a parent")]
    AlreadyHasParent(ManagerId),
    #[error("device manager {0} was passed more than once")]
    DuplicateChild(ManagerId),
}

static TIME_ANCHOR: Lazy<Instant> = Lazy::new(Instant::now);

/// Monotonic time in microseconds, anchored when the first manager is
/// created (or at the first call, if that comes earlier).
pub fn now_time_microseconds() -> i64 {
    i64::try_from(TIME_ANCHOR.elapsed().as_micros()).unwrap_or(i64::MAX)
}

pub(crate) fn start_clock() {
    Lazy::force(&TIME_ANCHOR);
}

/// Position of a manager within a parent/child hierarchy.
///
/// Holds a weak reference to the manager itself, so that trait provided
/// methods can hand out `Arc<dyn DeviceManager>` for it, and a weak reference
/// to its parent. Parents own their children, never the other way around.
pub struct HierarchyLink {
    me: Weak<dyn DeviceManager>,
    parent: RwLock<Weak<ParentDeviceManager>>,
}

impl HierarchyLink {
    pub fn new(me: Weak<dyn DeviceManager>) -> Self {
        Self {
            me,
            parent: RwLock::new(Weak::new()),
        }
    }

    pub fn me(&self) -> &Weak<dyn DeviceManager> {
        &self.me
    }

    pub fn parent(&self) -> Option<Arc<ParentDeviceManager>> {
        self.parent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .upgrade()
    }

    pub fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    /// The topmost ancestor, or the manager itself if it has no parent.
    pub fn root(&self) -> Option<Arc<dyn DeviceManager>> {
        match self.parent() {
            Some(parent) => parent.root(),
            None => self.me.upgrade(),
        }
    }

    /// Returns `false` if a live parent is already set.
    pub(crate) fn set_parent(&self, parent: Weak<ParentDeviceManager>) -> bool {
        let mut current = self.parent.write().unwrap_or_else(PoisonError::into_inner);
        if current.strong_count() > 0 {
            return false;
        }
        *current = parent;
        true
    }
}

impl fmt::Debug for HierarchyLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HierarchyLink")
            .field("alive", &(self.me.strong_count() > 0))
            .field("parent", &self.parent().map(|parent| parent.manager_id()))
            .finish()
    }
}

/// Common interface of all device managers.
pub trait DeviceManager: Send + Sync {
    fn manager_id(&self) -> ManagerId;

    fn hierarchy(&self) -> &HierarchyLink;

    fn device(&self, id: DeviceId) -> Option<Arc<dyn Device>>;

    fn devices(&self) -> Vec<Arc<dyn Device>>;

    fn devices_with_capability_class(&self, class: CapabilityClass) -> Vec<Arc<dyn Device>>;

    /// Manager capability classes. Always contains [`CapabilityClass::DeviceMgmt`].
    fn capability_classes(&self) -> Vec<CapabilityClass>;

    /// Capability classes the devices of this manager can have.
    fn device_capability_classes(&self) -> Vec<CapabilityClass>;

    fn capability(&self, class: CapabilityClass) -> Option<ManagerCapability>;

    fn capability_by_id(&self, id: CapabilityId) -> Option<ManagerCapability>;

    fn event_classes(&self) -> Vec<EventClass>;

    fn is_event_class_enabled(&self, class: EventClass) -> bool;

    /// Enables an event class supported but not enabled at construction.
    fn enable_event_class(&self, class: EventClass);

    /// Returns `false` if the listener is already registered.
    fn add_event_listener(&self, listener: &Arc<EventListener>, call_if: Option<CallIf>) -> bool;

    /// Returns `false` if the listener wasn't registered.
    fn remove_event_listener(&self, listener: &Arc<EventListener>) -> bool;

    fn device_mgmt_capability(&self) -> Option<Arc<DeviceMgmtCapability>> {
        self.capability(CapabilityClass::DeviceMgmt)?
            .as_device_mgmt()
            .cloned()
    }

    fn has_capability_class(&self, class: CapabilityClass) -> bool {
        self.capability_classes().contains(&class)
    }

    fn parent(&self) -> Option<Arc<ParentDeviceManager>> {
        self.hierarchy().parent()
    }

    fn root(&self) -> Option<Arc<dyn DeviceManager>> {
        self.hierarchy().root()
    }
}

impl fmt::Debug for dyn DeviceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceManager")
            .field("id", &self.manager_id())
            .field("hierarchy", self.hierarchy())
            .finish()
    }
}
