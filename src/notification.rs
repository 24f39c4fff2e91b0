//! Diagnostics collected while encoding.
//!
//! The encoder never fails on a well-formed [`Document`](crate::Document):
//! records it cannot write are skipped and reported here instead, optionally
//! tagged with the handle of the record concerned. Notifications never change
//! the emitted DXF.

use crate::types::Handle;
use std::fmt;

/// What kind of skip a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// A recognized record kind with no encoder (`POLYLINE`, `VERTEX`, ...).
    NotImplemented,
    /// Input the DXF output has no place for, such as an unknown header key.
    NotSupported,
    /// A value that was written differently than configured, or not at all.
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotImplemented => "not implemented",
            Self::NotSupported => "not supported",
            Self::Warning => "warning",
        };
        f.write_str(label)
    }
}

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    /// Handle of the record concerned, when there is one
    pub handle: Option<Handle>,
    pub message: String,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            handle: None,
            message: message.into(),
        }
    }

    /// A notification about the record with the given handle.
    pub fn for_record(
        notification_type: NotificationType,
        handle: &Handle,
        message: impl Into<String>,
    ) -> Self {
        Self {
            handle: Some(handle.clone()),
            ..Self::new(notification_type, message)
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.handle {
            Some(handle) => write!(f, "{} [{}]: {}", self.notification_type, handle, self.message),
            None => write!(f, "{}: {}", self.notification_type, self.message),
        }
    }
}

/// Ordered list of diagnostics from one encode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Record a notification that is not tied to a record.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.push(Notification::new(notification_type, message));
    }

    /// Record a notification about one record.
    pub fn notify_record(
        &mut self,
        notification_type: NotificationType,
        handle: &Handle,
        message: impl Into<String>,
    ) {
        self.push(Notification::for_record(notification_type, handle, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Notifications of one kind, in the order they were recorded.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Notifications about the record with the given handle.
    pub fn for_handle<'a>(&'a self, handle: &'a Handle) -> impl Iterator<Item = &'a Notification> {
        self.items
            .iter()
            .filter(move |n| n.handle.as_ref() == Some(handle))
    }
}

impl Extend<Notification> for NotificationCollection {
    fn extend<T: IntoIterator<Item = Notification>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
