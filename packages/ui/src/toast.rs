use std::time::Duration;

use dioxus::prelude::*;

const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub message: String,
    pub kind: ToastKind,
}

impl ToastMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }
}

/// A timer may only dismiss the toast it was started for; a replacement
/// raised meanwhile keeps its own full display time.
fn timer_owns_toast(shown: Option<&ToastMessage>, started_for: &ToastMessage) -> bool {
    shown == Some(started_for)
}

/// Transient top-right notification. Auto-dismisses.
#[component]
pub fn Toast(mut message: Signal<Option<ToastMessage>>) -> Element {
    use_effect(move || {
        if let Some(current) = message() {
            spawn(async move {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(DISMISS_AFTER).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(DISMISS_AFTER).await;
                let owns = timer_owns_toast(message.peek().as_ref(), &current);
                if owns {
                    message.set(None);
                }
            });
        }
    });

    if let Some(toast) = message() {
        let kind_class = match toast.kind {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        };
        rsx! {
            div { class: "{kind_class}", "{toast.message}" }
        }
    } else {
        rsx! {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_dismisses_its_own_toast() {
        let shown = ToastMessage::success("Subscribed successfully!");
        assert!(timer_owns_toast(Some(&shown), &shown.clone()));
    }

    #[test]
    fn stale_timer_leaves_a_newer_toast_alone() {
        let first = ToastMessage::success("Subscribed successfully!");
        let second = ToastMessage::error("Unsubscribe failed");
        assert!(!timer_owns_toast(Some(&second), &first));
        assert!(!timer_owns_toast(None, &first));
    }
}
