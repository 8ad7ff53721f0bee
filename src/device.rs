use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use crate::capability::CapabilityClass;
use crate::manager::DeviceManager;

/// Process unique id of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(i32);

static NEXT_DEVICE_ID: AtomicI32 = AtomicI32::new(1);

impl DeviceId {
    /// Allocates a fresh id. Backends call this once per device they create.
    pub fn next() -> Self {
        DeviceId(NEXT_DEVICE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A connected input device, created and owned by a concrete backend.
pub trait Device: Send + Sync + fmt::Debug {
    fn id(&self) -> DeviceId;

    fn name(&self) -> String;

    /// The manager the device is attached to, if it is still alive.
    fn device_manager(&self) -> Option<Arc<dyn DeviceManager>>;

    /// Device capability classes (never manager capabilities).
    fn capability_classes(&self) -> Vec<CapabilityClass>;

    fn has_capability_class(&self, class: CapabilityClass) -> bool {
        self.capability_classes().contains(&class)
    }
}
