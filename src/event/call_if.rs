//! Listener filters.
//!
//! A [`CallIf`] decides whether an event is delivered to a listener. When a
//! listener is registered its filter is simplified once per event class the
//! manager supports, so that at dispatch time most filters collapse to
//! "always" (skipped) or "never".

use std::fmt;
use std::ops::Not;
use std::sync::Arc;

use super::{Event, EventClass};
use crate::capability::{CapabilityClass, CapabilityId};

type EventPredicate = dyn Fn(&dyn Event) -> bool + Send + Sync;

#[derive(Clone)]
pub enum CallIf {
    True,
    False,
    And(Box<CallIf>, Box<CallIf>),
    Or(Box<CallIf>, Box<CallIf>),
    Not(Box<CallIf>),
    /// The event is of the given class.
    EventClass(EventClass),
    /// The event was generated by a capability of the given class.
    CapabilityClass(CapabilityClass),
    CapabilityId(CapabilityId),
    /// The event was generated by a device manager capability.
    DeviceManagerCapability,
    Function(Arc<EventPredicate>),
}

impl CallIf {
    pub fn function(f: impl Fn(&dyn Event) -> bool + Send + Sync + 'static) -> Self {
        CallIf::Function(Arc::new(f))
    }

    pub fn and(self, other: CallIf) -> Self {
        CallIf::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: CallIf) -> Self {
        CallIf::Or(Box::new(self), Box::new(other))
    }

    pub fn evaluate(&self, event: &dyn Event) -> bool {
        match self {
            CallIf::True => true,
            CallIf::False => false,
            CallIf::And(first, second) => first.evaluate(event) && second.evaluate(event),
            CallIf::Or(first, second) => first.evaluate(event) || second.evaluate(event),
            CallIf::Not(inner) => !inner.evaluate(event),
            CallIf::EventClass(class) => event.class() == *class,
            CallIf::CapabilityClass(class) => event.capability_class() == *class,
            CallIf::CapabilityId(id) => event.capability_id() == *id,
            CallIf::DeviceManagerCapability => {
                event.capability_class().is_device_manager_capability()
            }
            CallIf::Function(predicate) => predicate(event),
        }
    }

    /// Folds the filter for events of `class`.
    pub fn simplify(&self, class: EventClass) -> CallIf {
        match self {
            CallIf::EventClass(wanted) => {
                if *wanted == class {
                    CallIf::True
                } else {
                    CallIf::False
                }
            }
            CallIf::And(first, second) => {
                match (first.simplify(class), second.simplify(class)) {
                    (CallIf::True, other) | (other, CallIf::True) => other,
                    (CallIf::False, _) | (_, CallIf::False) => CallIf::False,
                    (first, second) => first.and(second),
                }
            }
            CallIf::Or(first, second) => match (first.simplify(class), second.simplify(class)) {
                (CallIf::False, other) | (other, CallIf::False) => other,
                (CallIf::True, _) | (_, CallIf::True) => CallIf::True,
                (first, second) => first.or(second),
            },
            CallIf::Not(inner) => match inner.simplify(class) {
                CallIf::True => CallIf::False,
                CallIf::False => CallIf::True,
                CallIf::Not(double) => *double,
                other => !other,
            },
            other => other.clone(),
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, CallIf::True)
    }
}

impl Not for CallIf {
    type Output = CallIf;

    fn not(self) -> CallIf {
        CallIf::Not(Box::new(self))
    }
}

impl fmt::Debug for CallIf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallIf::True => f.write_str("True"),
            CallIf::False => f.write_str("False"),
            CallIf::And(first, second) => f.debug_tuple("And").field(first).field(second).finish(),
            CallIf::Or(first, second) => f.debug_tuple("Or").field(first).field(second).finish(),
            CallIf::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
            CallIf::EventClass(class) => f.debug_tuple("EventClass").field(class).finish(),
            CallIf::CapabilityClass(class) => {
                f.debug_tuple("CapabilityClass").field(class).finish()
            }
            CallIf::CapabilityId(id) => f.debug_tuple("CapabilityId").field(id).finish(),
            CallIf::DeviceManagerCapability => f.write_str("DeviceManagerCapability"),
            CallIf::Function(_) => f.write_str("Function(..)"),
        }
    }
}
