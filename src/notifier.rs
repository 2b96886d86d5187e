use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::surface::{Slot, ToastSurface};
use crate::toast::{CATEGORY_MARKERS, Category, HIDDEN_MARKERS, Toast, VISIBLE_MARKERS};

pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(3000);

/// How hide timers armed by earlier `show` calls are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPolicy {
    /// Only the timer from the most recent `show` may hide the toast.
    #[default]
    Restart,
    /// Every armed timer hides the toast when it fires.
    Overlap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// A one-shot deferred hide, armed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTimer {
    ticket: u64,
    delay: Duration,
}

impl HideTimer {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug)]
pub struct ToastNotifier<S> {
    surface: S,
    visibility: Visibility,
    toast: Option<Toast>,
    hide_delay: Duration,
    policy: TimerPolicy,
    next_ticket: u64,
    // Ticket of the timer allowed to hide under `TimerPolicy::Restart`.
    armed: Option<u64>,
}

impl<S: ToastSurface> ToastNotifier<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            visibility: Visibility::Hidden,
            toast: None,
            hide_delay: DEFAULT_HIDE_DELAY,
            policy: TimerPolicy::default(),
            next_ticket: 0,
            armed: None,
        }
    }

    pub fn with_config(surface: S, config: &Config) -> Self {
        let mut notifier = Self::new(surface);
        notifier.configure(config.hide_delay(), config.timer_policy);
        notifier
    }

    /// Applies to timers returned from later `show` calls only.
    pub fn configure(&mut self, hide_delay: Duration, policy: TimerPolicy) {
        self.hide_delay = hide_delay;
        self.policy = policy;
    }

    pub fn show(
        &mut self,
        title: impl AsRef<str>,
        message: impl Into<String>,
        category: Category,
    ) -> HideTimer {
        self.show_toast(Toast::new(title, message.into(), category))
    }

    pub fn success(&mut self, title: impl AsRef<str>, message: impl Into<String>) -> HideTimer {
        self.show(title, message, Category::Success)
    }

    pub fn error(&mut self, title: impl AsRef<str>, message: impl Into<String>) -> HideTimer {
        self.show(title, message, Category::Error)
    }

    /// Overwrites the slot with `toast`, makes it visible and returns the
    /// timer that will hide it.
    pub fn show_toast(&mut self, toast: Toast) -> HideTimer {
        self.surface.set_text(Slot::Title, &toast.title);
        self.surface.set_text(Slot::Message, &toast.message);

        self.surface.remove_markers(&CATEGORY_MARKERS);
        self.surface.add_markers(toast.category.markers());
        self.surface.set_text(Slot::Icon, toast.category.glyph());

        self.surface.remove_markers(&HIDDEN_MARKERS);
        self.surface.add_markers(&VISIBLE_MARKERS);
        self.visibility = Visibility::Visible;

        let timer = HideTimer {
            ticket: self.next_ticket,
            delay: self.hide_delay,
        };
        self.next_ticket += 1;
        self.armed = Some(timer.ticket);

        debug!(
            title = %toast.title,
            category = %toast.category,
            ticket = timer.ticket(),
            "showing toast"
        );
        self.toast = Some(toast);

        timer
    }

    pub fn hide(&mut self) {
        self.armed = None;
        if self.visibility == Visibility::Hidden {
            return;
        }

        self.surface.remove_markers(&VISIBLE_MARKERS);
        self.surface.add_markers(&HIDDEN_MARKERS);
        self.visibility = Visibility::Hidden;
        debug!(title = ?self.toast.as_ref().map(|t| &t.title), "toast hidden");
    }

    /// Handles a fired timer. Returns whether the timer hid the toast.
    pub fn expire(&mut self, timer: HideTimer) -> bool {
        let live = match self.policy {
            TimerPolicy::Restart => self.armed == Some(timer.ticket),
            TimerPolicy::Overlap => true,
        };

        if !live {
            debug!(ticket = timer.ticket(), "ignoring superseded hide timer");
            return false;
        }

        let was_visible = self.is_visible();
        self.hide();
        was_visible
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    #[cfg(test)]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The most recently shown toast, kept after it is hidden.
    #[cfg(test)]
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    #[cfg(test)]
    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }

    #[cfg(test)]
    pub fn policy(&self) -> TimerPolicy {
        self.policy
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::ToastElements;
    use crate::toast::{ERROR_MARKERS, SUCCESS_MARKERS};

    fn notifier() -> ToastNotifier<ToastElements> {
        ToastNotifier::new(ToastElements::new())
    }

    #[test]
    fn starts_hidden() {
        let notifier = notifier();
        assert_eq!(notifier.visibility(), Visibility::Hidden);
        assert!(notifier.toast().is_none());
        assert!(!notifier.surface().is_shown());
    }

    #[test]
    fn show_success_fills_elements() {
        let mut notifier = notifier();
        let timer = notifier.show("Saved", "Your changes were saved", Category::Success);

        let elements = notifier.surface();
        assert_eq!(elements.text(Slot::Title), "Saved");
        assert_eq!(elements.text(Slot::Message), "Your changes were saved");
        assert_eq!(elements.text(Slot::Icon), "✅");
        assert!(SUCCESS_MARKERS.iter().all(|m| elements.has_marker(m)));
        assert!(!ERROR_MARKERS.iter().any(|m| elements.has_marker(m)));
        assert!(elements.is_shown());
        assert!(notifier.is_visible());
        assert_eq!(timer.delay(), Duration::from_millis(3000));
    }

    #[test]
    fn show_error_applies_negative_markers() {
        let mut notifier = notifier();
        notifier.show("Failed", "Could not save", Category::Error);

        let elements = notifier.surface();
        assert_eq!(elements.text(Slot::Icon), "❌");
        assert!(ERROR_MARKERS.iter().all(|m| elements.has_marker(m)));
        assert!(!SUCCESS_MARKERS.iter().any(|m| elements.has_marker(m)));
        assert_eq!(elements.category(), Some(Category::Error));
    }

    #[test]
    fn reshow_switches_category_cleanly() {
        let mut notifier = notifier();
        notifier.error("Failed", "Could not save");
        notifier.success("Saved", "Retry worked");

        let elements = notifier.surface();
        assert_eq!(elements.category(), Some(Category::Success));
        assert_eq!(elements.text(Slot::Icon), "✅");
        assert_eq!(elements.text(Slot::Message), "Retry worked");
        assert_eq!(notifier.toast().map(|t| t.category), Some(Category::Success));
    }

    #[test]
    fn text_is_kept_verbatim() {
        let mut notifier = notifier();
        let title = "  <b>Spaces & markup</b> ";
        let message = "line one\nline two ✨";
        notifier.success(title, message);

        assert_eq!(notifier.surface().text(Slot::Title), title);
        assert_eq!(notifier.surface().text(Slot::Message), message);
    }

    #[test]
    fn hide_restores_hidden_markers() {
        let mut notifier = notifier();
        notifier.success("Saved", "ok");
        notifier.hide();

        let elements = notifier.surface();
        assert!(!notifier.is_visible());
        assert!(!elements.is_shown());
        assert!(HIDDEN_MARKERS.iter().all(|m| elements.has_marker(m)));
        assert!(!VISIBLE_MARKERS.iter().any(|m| elements.has_marker(m)));
        // content and category stay until the next show
        assert_eq!(elements.text(Slot::Title), "Saved");
        assert_eq!(elements.category(), Some(Category::Success));
    }

    #[test]
    fn hide_is_idempotent() {
        let mut notifier = notifier();
        notifier.hide();
        assert_eq!(notifier.surface(), &ToastElements::new());

        notifier.success("Saved", "ok");
        notifier.hide();
        let once = notifier.surface().clone();
        notifier.hide();
        assert_eq!(notifier.surface(), &once);
        assert_eq!(notifier.visibility(), Visibility::Hidden);
    }

    #[test]
    fn timer_expiry_hides() {
        let mut notifier = notifier();
        let timer = notifier.success("Saved", "Your changes were saved");

        assert!(notifier.expire(timer));
        assert!(!notifier.is_visible());
        assert!(!notifier.expire(timer));
    }

    #[test]
    fn tickets_increase() {
        let mut notifier = notifier();
        let first = notifier.success("a", "a");
        let second = notifier.success("b", "b");
        assert!(second.ticket() > first.ticket());
    }

    #[test]
    fn restart_policy_ignores_superseded_timer() {
        let mut notifier = notifier();
        let first = notifier.success("first", "one");
        let second = notifier.error("second", "two");

        assert!(!notifier.expire(first));
        assert!(notifier.is_visible());
        assert_eq!(notifier.surface().text(Slot::Title), "second");

        assert!(notifier.expire(second));
        assert!(!notifier.is_visible());
    }

    #[test]
    fn restart_policy_disarms_on_manual_hide() {
        let mut notifier = notifier();
        let timer = notifier.success("Saved", "ok");
        notifier.hide();

        assert!(!notifier.expire(timer));
        assert!(!notifier.is_visible());
    }

    #[test]
    fn overlap_policy_lets_any_timer_hide() {
        let mut notifier = notifier();
        notifier.configure(DEFAULT_HIDE_DELAY, TimerPolicy::Overlap);

        let first = notifier.success("first", "one");
        let second = notifier.success("second", "two");

        assert!(notifier.expire(first));
        assert!(!notifier.is_visible());
        // the late timer finds the toast already hidden
        assert!(!notifier.expire(second));
        assert!(!notifier.is_visible());
    }

    #[test]
    fn configured_delay_is_used_for_new_timers() {
        let config = Config {
            hide_delay_ms: 1500,
            timer_policy: TimerPolicy::Overlap,
        };
        let mut notifier = ToastNotifier::with_config(ToastElements::new(), &config);

        assert_eq!(notifier.policy(), TimerPolicy::Overlap);
        assert_eq!(notifier.success("a", "b").delay(), Duration::from_millis(1500));
    }

    #[test]
    fn drives_borrowed_surface() {
        let mut elements = ToastElements::new();
        {
            let mut notifier = ToastNotifier::new(&mut elements);
            notifier.error("Failed", "Could not save");
        }
        assert!(elements.is_shown());
        assert_eq!(elements.text(Slot::Icon), "❌");
    }
}
