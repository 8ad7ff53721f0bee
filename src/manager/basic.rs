use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::listener::{EventListener, ListenerEntry, ListenerRegistry};
use crate::capability::CapabilityClass;
use crate::device::{Device, DeviceId};
use crate::event::{CallIf, EventClass};

/// Which of the supported event classes start out enabled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventClassPolicy {
    #[default]
    EnableAll,
    EnableOnly(Vec<EventClass>),
    EnableAllExcept(Vec<EventClass>),
}

impl EventClassPolicy {
    pub fn enables(&self, class: EventClass) -> bool {
        match self {
            EventClassPolicy::EnableAll => true,
            EventClassPolicy::EnableOnly(classes) => classes.contains(&class),
            EventClassPolicy::EnableAllExcept(classes) => !classes.contains(&class),
        }
    }
}

/// Bookkeeping shared by concrete device managers: supported classes, event
/// class enable flags, listeners and the device table.
///
/// Event classes are addressed by their index in the list passed to
/// [`BasicDeviceManager::new`], which lets dispatch check enablement and pick
/// a listener's filter without any lookup.
pub struct BasicDeviceManager {
    capability_classes: Vec<CapabilityClass>,
    device_capability_classes: Vec<CapabilityClass>,
    event_classes: Vec<EventClass>,
    enabled: Vec<AtomicBool>,
    listeners: ListenerRegistry,
    devices: RwLock<BTreeMap<DeviceId, Arc<dyn Device>>>,
}

impl BasicDeviceManager {
    pub fn new(
        capability_classes: Vec<CapabilityClass>,
        device_capability_classes: Vec<CapabilityClass>,
        event_classes: Vec<EventClass>,
        policy: &EventClassPolicy,
    ) -> Self {
        debug_assert!(
            capability_classes
                .iter()
                .all(|class| class.is_device_manager_capability()),
            "manager capability classes expected"
        );
        debug_assert!(
            device_capability_classes
                .iter()
                .all(|class| !class.is_device_manager_capability()),
            "device capability classes expected"
        );
        let mut event_classes = event_classes;
        let mut seen = Vec::with_capacity(event_classes.len());
        event_classes.retain(|class| {
            let fresh = !seen.contains(class);
            seen.push(*class);
            fresh
        });
        let enabled = event_classes
            .iter()
            .map(|class| AtomicBool::new(policy.enables(*class)))
            .collect();
        Self {
            capability_classes,
            device_capability_classes,
            event_classes,
            enabled,
            listeners: ListenerRegistry::new(),
            devices: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn capability_classes(&self) -> &[CapabilityClass] {
        &self.capability_classes
    }

    pub fn device_capability_classes(&self) -> &[CapabilityClass] {
        &self.device_capability_classes
    }

    pub fn event_classes(&self) -> &[EventClass] {
        &self.event_classes
    }

    pub fn event_class_index(&self, class: EventClass) -> Option<usize> {
        self.event_classes.iter().position(|supported| *supported == class)
    }

    pub fn is_event_class_enabled(&self, class: EventClass) -> bool {
        self.event_class_index(class)
            .is_some_and(|index| self.is_event_class_index_enabled(index))
    }

    pub fn is_event_class_index_enabled(&self, index: usize) -> bool {
        self.enabled
            .get(index)
            .is_some_and(|enabled| enabled.load(Ordering::Acquire))
    }

    /// Unsupported classes are ignored. There is no way back to disabled.
    pub fn enable_event_class(&self, class: EventClass) {
        let Some(index) = self.event_class_index(class) else {
            debug!(%class, "ignoring unsupported event class");
            return;
        };
        if !self.enabled[index].swap(true, Ordering::AcqRel) {
            debug!(%class, "event class enabled");
        }
    }

    pub fn add_event_listener(&self, listener: &Arc<EventListener>, call_if: Option<CallIf>) -> bool {
        self.listeners.add(listener, call_if, &self.event_classes)
    }

    pub fn remove_event_listener(&self, listener: &Arc<EventListener>) -> bool {
        self.listeners.remove(listener)
    }

    pub fn listeners(&self) -> Arc<Vec<Arc<ListenerEntry>>> {
        self.listeners.snapshot()
    }

    /// Returns `false` if a device with the same id is already present.
    pub fn add_device(&self, device: Arc<dyn Device>) -> bool {
        let mut devices = self.devices.write().unwrap_or_else(PoisonError::into_inner);
        if devices.contains_key(&device.id()) {
            return false;
        }
        devices.insert(device.id(), device);
        true
    }

    /// Returns the removed device, `None` if it wasn't present.
    pub fn remove_device(&self, id: DeviceId) -> Option<Arc<dyn Device>> {
        self.devices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
    }

    pub fn device(&self, id: DeviceId) -> Option<Arc<dyn Device>> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    pub fn devices(&self) -> Vec<Arc<dyn Device>> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    pub fn devices_with_capability_class(&self, class: CapabilityClass) -> Vec<Arc<dyn Device>> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|device| device.has_capability_class(class))
            .cloned()
            .collect()
    }
}
