//! Assembly diagnostics.
//!
//! Nothing that happens while folding an event stream is fatal. Records that
//! arrive out of protocol, composites that are cut short and (optionally)
//! records that are accepted but unused are collected as [`Notification`]
//! items. After reading, inspect [`Drawing::notifications`].
//!
//! [`Drawing::notifications`]: crate::Drawing::notifications

use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// A record arrived without the composite it belongs to, or would
    /// overflow the count its composite declared. The record was discarded.
    ProtocolViolation,
    /// A composite entity was interrupted or the stream ended before it
    /// collected everything it declared.
    Incomplete,
    /// A record kind that is accepted but not turned into an entity.
    Ignored,
    /// A read error that was recovered from in failsafe mode.
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProtocolViolation => write!(f, "ProtocolViolation"),
            Self::Incomplete => write!(f, "Incomplete"),
            Self::Ignored => write!(f, "Ignored"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single diagnostic produced while assembling.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// The category.
    pub notification_type: NotificationType,
    /// DXF name of the record involved (`"VERTEX"`, `"SPLINE"`, ...).
    pub record: &'static str,
    /// A human-readable description.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(
        notification_type: NotificationType,
        record: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            notification_type,
            record,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.notification_type, self.record, self.message)
    }
}

/// Ordered notifications, in emission order.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(
        &mut self,
        notification_type: NotificationType,
        record: &'static str,
        message: impl Into<String>,
    ) {
        self.items
            .push(Notification::new(notification_type, record, message));
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

    /// All notifications of one category.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| n.notification_type == nt)
            .collect()
    }

    /// Number of notifications of one category.
    pub fn count_of(&self, nt: NotificationType) -> usize {
        self.items
            .iter()
            .filter(|n| n.notification_type == nt)
            .count()
    }

    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    pub fn into_vec(self) -> Vec<Notification> {
        self.items
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
