//! Toast elements driven by a [`ToastNotifier`](crate::notifier::ToastNotifier).

use std::collections::BTreeSet;

use tracing::trace;

use crate::toast::{Category, HIDDEN_MARKERS, VISIBLE_MARKERS};

pub const CONTAINER_ID: &str = "toast-component";
pub const TITLE_ID: &str = "toast-title";
pub const MESSAGE_ID: &str = "toast-message";
pub const ICON_ID: &str = "toast-icon";

/// Text-bearing elements of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Title,
    Message,
    Icon,
}

impl Slot {
    pub fn id(self) -> &'static str {
        match self {
            Slot::Title => TITLE_ID,
            Slot::Message => MESSAGE_ID,
            Slot::Icon => ICON_ID,
        }
    }
}

pub trait ToastSurface {
    fn set_text(&mut self, slot: Slot, text: &str);

    /// Adds style markers to the container.
    fn add_markers(&mut self, markers: &[&str]);

    /// Removes style markers from the container. Absent markers are ignored.
    fn remove_markers(&mut self, markers: &[&str]);
}

impl<S: ToastSurface + ?Sized> ToastSurface for &mut S {
    fn set_text(&mut self, slot: Slot, text: &str) {
        (**self).set_text(slot, text)
    }

    fn add_markers(&mut self, markers: &[&str]) {
        (**self).add_markers(markers)
    }

    fn remove_markers(&mut self, markers: &[&str]) {
        (**self).remove_markers(markers)
    }
}

/// In-memory toast elements, rendered by [`crate::overlay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastElements {
    title: String,
    message: String,
    icon: String,
    markers: BTreeSet<String>,
}

impl ToastElements {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            icon: String::new(),
            markers: HIDDEN_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn text(&self, slot: Slot) -> &str {
        match slot {
            Slot::Title => &self.title,
            Slot::Message => &self.message,
            Slot::Icon => &self.icon,
        }
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    #[cfg(test)]
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }

    /// Whether the container is in the visible style state.
    pub fn is_shown(&self) -> bool {
        VISIBLE_MARKERS.iter().all(|m| self.has_marker(m))
            && !HIDDEN_MARKERS.iter().any(|m| self.has_marker(m))
    }

    /// The category whose markers are fully applied, if exactly one is.
    pub fn category(&self) -> Option<Category> {
        let mut applied = Category::ALL
            .into_iter()
            .filter(|c| c.markers().iter().all(|m| self.has_marker(m)));

        match (applied.next(), applied.next()) {
            (Some(category), None) => Some(category),
            _ => None,
        }
    }
}

impl Default for ToastElements {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastSurface for ToastElements {
    fn set_text(&mut self, slot: Slot, text: &str) {
        trace!(element = slot.id(), text, "set text");
        let target = match slot {
            Slot::Title => &mut self.title,
            Slot::Message => &mut self.message,
            Slot::Icon => &mut self.icon,
        };
        target.clear();
        target.push_str(text);
    }

    fn add_markers(&mut self, markers: &[&str]) {
        trace!(element = CONTAINER_ID, ?markers, "add markers");
        self.markers.extend(markers.iter().map(|m| m.to_string()));
    }

    fn remove_markers(&mut self, markers: &[&str]) {
        trace!(element = CONTAINER_ID, ?markers, "remove markers");
        for marker in markers {
            self.markers.remove(*marker);
        }
    }
}
