//! Named observer fan-out with per-observer failure isolation.

use super::error::{ObserverError, RegistryError};
use super::notification::Notification;
use super::observer::Observer;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use tracing::{trace, warn};

/// Introspection entry returned by [`ObserverRegistry::list`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObserverInfo {
    pub name: String,
    pub kind: String,
}

/// An observer that failed to handle a notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub observer: String,
    /// Kind of the notification that failed
    pub kind: &'static str,
    pub error: ObserverError,
}

/// Outcome of delivering one notification to every observer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Observers that handled the notification successfully
    pub delivered: usize,
    pub failures: Vec<DeliveryFailure>,
}

impl DeliveryReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fold the outcome of a later delivery into this one.
    pub fn absorb(&mut self, other: DeliveryReport) {
        self.delivered += other.delivered;
        self.failures.extend(other.failures);
    }
}

struct Subscription {
    name: String,
    observer: Box<dyn Observer>,
}

/// Observers keyed by unique name, notified in subscription order.
#[derive(Default)]
pub struct ObserverRegistry {
    subscriptions: Vec<Subscription>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer` under `name`.
    ///
    /// Names are unique; subscribing a taken name fails instead of
    /// replacing the existing observer.
    pub fn subscribe(
        &mut self,
        name: impl Into<String>,
        observer: impl Observer + 'static,
    ) -> Result<(), RegistryError> {
        self.subscribe_boxed(name, Box::new(observer))
    }

    /// Register an already boxed observer.
    pub fn subscribe_boxed(
        &mut self,
        name: impl Into<String>,
        observer: Box<dyn Observer>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(RegistryError::DuplicateObserverName(name));
        }
        self.subscriptions.push(Subscription { name, observer });
        Ok(())
    }

    /// Detach the observer registered under `name`, handing it back.
    ///
    /// Returns `None` if no such observer is subscribed.
    pub fn unsubscribe(&mut self, name: &str) -> Option<Box<dyn Observer>> {
        let index = self.subscriptions.iter().position(|s| s.name == name)?;
        Some(self.subscriptions.remove(index).observer)
    }

    /// Names and kinds of the subscribed observers, in subscription order.
    pub fn list(&self) -> Vec<ObserverInfo> {
        self.subscriptions
            .iter()
            .map(|s| ObserverInfo {
                name: s.name.clone(),
                kind: s.observer.kind().to_string(),
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.subscriptions.iter().any(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Deliver `notification` to every observer, in subscription order.
    ///
    /// An observer that returns an error or panics is logged and recorded
    /// in the report; delivery continues with the next observer.
    pub fn dispatch(&mut self, notification: &Notification) -> DeliveryReport {
        let mut report = DeliveryReport::default();

        for subscription in &mut self.subscriptions {
            let observer = &mut subscription.observer;
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| observer.notify(notification)));

            let error = match outcome {
                Ok(Ok(())) => {
                    trace!(observer = %subscription.name, kind = notification.name(), "delivered");
                    report.delivered += 1;
                    continue;
                }
                Ok(Err(error)) => error,
                Err(payload) => ObserverError::Panicked(panic_message(payload.as_ref())),
            };

            warn!(
                observer = %subscription.name,
                kind = notification.name(),
                %error,
                "observer failed to handle notification"
            );
            report.failures.push(DeliveryFailure {
                observer: subscription.name.clone(),
                kind: notification.name(),
                error,
            });
        }

        report
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.subscriptions.iter().map(|s| &s.name))
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
