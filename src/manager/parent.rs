use std::fmt;
use std::sync::{Arc, Weak};

use tracing::info;

use super::listener::EventListener;
use super::{DeviceManager, HierarchyLink, ManagerError, ManagerId};
use crate::capability::{CapabilityClass, CapabilityId, DeviceMgmtCapability, ManagerCapability};
use crate::device::{Device, DeviceId};
use crate::event::{CallIf, EventClass};

fn push_unique<T: PartialEq>(set: &mut Vec<T>, items: impl IntoIterator<Item = T>) {
    for item in items {
        if !set.contains(&item) {
            set.push(item);
        }
    }
}

/// Device manager combining several child managers.
///
/// Queries are answered from the union of the children. Enabling event
/// classes and registering listeners is forwarded to every child. The
/// children send their device management events with the capability of the
/// root of the hierarchy, so listeners see a single source.
pub struct ParentDeviceManager {
    id: ManagerId,
    link: HierarchyLink,
    children: Vec<Arc<dyn DeviceManager>>,
    capability: Arc<DeviceMgmtCapability>,
}

impl ParentDeviceManager {
    pub fn create(children: Vec<Arc<dyn DeviceManager>>) -> Result<Arc<Self>, ManagerError> {
        if children.is_empty() {
            return Err(ManagerError::NoChildren);
        }
        for (index, child) in children.iter().enumerate() {
            let child_id = child.manager_id();
            if !child.has_capability_class(CapabilityClass::DeviceMgmt) {
                return Err(ManagerError::MissingDeviceMgmt(child_id));
            }
            if child.hierarchy().has_parent() {
                return Err(ManagerError::AlreadyHasParent(child_id));
            }
            if children[..index]
                .iter()
                .any(|other| other.manager_id() == child_id)
            {
                return Err(ManagerError::DuplicateChild(child_id));
            }
        }
        let parent = Arc::new_cyclic(|me: &Weak<ParentDeviceManager>| {
            let me: Weak<dyn DeviceManager> = me.clone();
            Self {
                id: ManagerId::next(),
                link: HierarchyLink::new(me),
                children,
                capability: DeviceMgmtCapability::new(),
            }
        });
        for child in &parent.children {
            let attached = child.hierarchy().set_parent(Arc::downgrade(&parent));
            debug_assert!(attached, "child got a parent concurrently");
        }
        info!(
            manager = %parent.id,
            children = parent.children.len(),
            "parent device manager created"
        );
        Ok(parent)
    }

    pub fn children(&self) -> &[Arc<dyn DeviceManager>] {
        &self.children
    }

    fn checked_capability(&self) -> &Arc<DeviceMgmtCapability> {
        self.capability.set_device_manager(self.link.me());
        &self.capability
    }
}

impl DeviceManager for ParentDeviceManager {
    fn manager_id(&self) -> ManagerId {
        self.id
    }

    fn hierarchy(&self) -> &HierarchyLink {
        &self.link
    }

    fn device(&self, id: DeviceId) -> Option<Arc<dyn Device>> {
        self.children.iter().find_map(|child| child.device(id))
    }

    fn devices(&self) -> Vec<Arc<dyn Device>> {
        self.children.iter().flat_map(|child| child.devices()).collect()
    }

    fn devices_with_capability_class(&self, class: CapabilityClass) -> Vec<Arc<dyn Device>> {
        self.children
            .iter()
            .flat_map(|child| child.devices_with_capability_class(class))
            .collect()
    }

    fn capability_classes(&self) -> Vec<CapabilityClass> {
        let mut classes = vec![CapabilityClass::DeviceMgmt];
        for child in &self.children {
            push_unique(&mut classes, child.capability_classes());
        }
        classes
    }

    fn device_capability_classes(&self) -> Vec<CapabilityClass> {
        let mut classes = Vec::new();
        for child in &self.children {
            push_unique(&mut classes, child.device_capability_classes());
        }
        classes
    }

    fn capability(&self, class: CapabilityClass) -> Option<ManagerCapability> {
        if class == CapabilityClass::DeviceMgmt {
            return Some(ManagerCapability::DeviceMgmt(self.checked_capability().clone()));
        }
        self.children.iter().find_map(|child| child.capability(class))
    }

    fn capability_by_id(&self, id: CapabilityId) -> Option<ManagerCapability> {
        if id == self.capability.id() {
            return Some(ManagerCapability::DeviceMgmt(self.checked_capability().clone()));
        }
        self.children.iter().find_map(|child| child.capability_by_id(id))
    }

    fn event_classes(&self) -> Vec<EventClass> {
        let mut classes = Vec::new();
        for child in &self.children {
            push_unique(&mut classes, child.event_classes());
        }
        classes
    }

    fn is_event_class_enabled(&self, class: EventClass) -> bool {
        self.children
            .iter()
            .any(|child| child.is_event_class_enabled(class))
    }

    fn enable_event_class(&self, class: EventClass) {
        for child in &self.children {
            child.enable_event_class(class);
        }
    }

    fn add_event_listener(&self, listener: &Arc<EventListener>, call_if: Option<CallIf>) -> bool {
        let mut added = false;
        for child in &self.children {
            added |= child.add_event_listener(listener, call_if.clone());
        }
        added
    }

    fn remove_event_listener(&self, listener: &Arc<EventListener>) -> bool {
        let mut removed = false;
        for child in &self.children {
            removed |= child.remove_event_listener(listener);
        }
        removed
    }
}

impl fmt::Debug for ParentDeviceManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParentDeviceManager")
            .field("id", &self.id)
            .field("capability", &self.capability)
            .field(
                "children",
                &self
                    .children
                    .iter()
                    .map(|child| child.manager_id())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
