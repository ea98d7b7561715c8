//! Notification-list entries for the "Alertas Recientes" panel.

use serde::{Deserialize, Serialize};

use crate::display::NoticeKind;

/// A row in a notification list: kind glyph, title, timestamp, description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    /// Display timestamp, already formatted.
    pub time: String,
    pub description: String,
    pub kind: NoticeKind,
}
