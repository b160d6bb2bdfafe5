//! Session state and hooks for the UI.
//!
//! The single source of truth for "am I logged in, and am I an admin".
//! Identity is derived from the backend's identity-check endpoint and is
//! only trusted briefly: it is revalidated on every route change and on a
//! fixed polling interval while the application is open.

use api::{ApiClient, Identity};
use dioxus::prelude::*;

/// How long a confirmed identity stays fresh before the poll revalidates it.
pub const REFRESH_INTERVAL_SECS: u64 = 10;

/// Displayed identity for the current tab.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub username: Option<String>,
    pub is_admin: bool,
    /// True until the first identity check completes.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            username: None,
            is_admin: false,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            username: Some(identity.username.clone()),
            is_admin: identity.is_admin(),
            loading: false,
        }
    }

    /// The normal anonymous state. Not an error.
    pub fn logged_out() -> Self {
        Self {
            username: None,
            is_admin: false,
            loading: false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn show_subscriptions_link(&self) -> bool {
        self.is_logged_in()
    }

    pub fn show_admin_link(&self) -> bool {
        self.is_logged_in() && self.is_admin
    }
}

/// Decides whether a refresh may start and whether its result may still be
/// applied once it completes. Refreshes are serialized through `begin`;
/// `invalidate` (login/logout) orphans everything started earlier.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct RefreshCoordinator {
    epoch: u32,
    in_flight: bool,
}

impl RefreshCoordinator {
    /// Returns the epoch this refresh runs under, or `None` while another
    /// refresh holds the gate.
    fn begin(&mut self) -> Option<u32> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(self.epoch)
    }

    /// Ends the refresh started at `started_at`. Returns whether its result
    /// still belongs to the current identity. An orphaned refresh (epoch
    /// moved) no longer owns the gate, so it must not release it.
    fn finish(&mut self, started_at: u32) -> bool {
        if started_at != self.epoch {
            return false;
        }
        self.in_flight = false;
        true
    }

    /// Releases the gate without applying a result. The cancellation path:
    /// a refresh dropped mid-flight must leave the gate open for the next
    /// trigger.
    fn release(&mut self, started_at: u32) {
        if started_at == self.epoch {
            self.in_flight = false;
        }
    }

    /// Identity changed hands. In-flight refreshes become orphans and the
    /// gate reopens immediately.
    fn invalidate(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.in_flight = false;
    }
}

/// Releases the refresh gate when the owning future is dropped before it
/// reaches `finish` (route-change resources cancel mid-await).
struct GateGuard {
    coordinator: Signal<RefreshCoordinator>,
    started_at: u32,
    armed: bool,
}

impl GateGuard {
    fn new(coordinator: Signal<RefreshCoordinator>, started_at: u32) -> Self {
        Self {
            coordinator,
            started_at,
            armed: true,
        }
    }

    /// Normal completion: close out the refresh and report whether its
    /// result may be applied.
    fn finish(mut self) -> bool {
        self.armed = false;
        let started_at = self.started_at;
        let mut coordinator = self.coordinator;
        coordinator.with_mut(|c| c.finish(started_at))
    }
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        if self.armed {
            let started_at = self.started_at;
            let mut coordinator = self.coordinator;
            coordinator.with_mut(|c| c.release(started_at));
        }
    }
}

/// Handle to the session store. Copy; safe to move into event handlers.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    state: Signal<SessionState>,
    coordinator: Signal<RefreshCoordinator>,
}

impl SessionHandle {
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    /// Revalidate identity. Failures are silent: absence of identity is the
    /// normal logged-out state. Concurrent calls are serialized by skipping
    /// while one is in flight; a call cancelled mid-await reopens the gate
    /// through the guard's drop.
    pub async fn refresh(&self) {
        let mut state = self.state;
        let mut coordinator = self.coordinator;
        let Some(started_at) = coordinator.with_mut(RefreshCoordinator::begin) else {
            return;
        };
        let gate = GateGuard::new(coordinator, started_at);

        let result = ApiClient::new().check_auth().await;

        if gate.finish() {
            match result {
                Ok(identity) => state.set(SessionState::from_identity(&identity)),
                Err(err) => {
                    tracing::debug!("identity check failed: {err}");
                    state.set(SessionState::logged_out());
                }
            }
        }
    }

    /// Persist a freshly issued token and derive identity from it. Any
    /// refresh mid-flight with the old token is orphaned.
    pub async fn login(&self, token: &str) {
        api::token::set(token);
        let mut coordinator = self.coordinator;
        coordinator.with_mut(RefreshCoordinator::invalidate);
        self.refresh().await;
    }

    /// Erase the token, clear displayed identity, and reload the page so no
    /// per-user view state survives across identities.
    pub fn logout(&self) {
        api::token::clear();
        let mut coordinator = self.coordinator;
        coordinator.with_mut(RefreshCoordinator::invalidate);
        let mut state = self.state;
        state.set(SessionState::logged_out());
        reload_page();
    }
}

fn reload_page() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

/// Get the session handle from context.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that owns session state. Wrap the router with it; the
/// shell layout triggers the route-change refresh, this component owns the
/// mount-time check and the polling loop.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(SessionState::default);
    let coordinator = use_signal(RefreshCoordinator::default);
    let handle = use_context_provider(|| SessionHandle { state, coordinator });

    // Initial identity check on mount
    let _ = use_resource(move || async move {
        handle.refresh().await;
    });

    // Poll while the app is open; logins/logouts from other tabs show up here
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(REFRESH_INTERVAL_SECS))
                    .await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(REFRESH_INTERVAL_SECS)).await;

                handle.refresh().await;
            }
        });
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_maps_admin_role() {
        let identity = Identity { username: "alice".into(), role: "admin".into() };
        let state = SessionState::from_identity(&identity);
        assert_eq!(state.username.as_deref(), Some("alice"));
        assert!(state.is_admin);
        assert!(!state.loading);
    }

    #[test]
    fn non_admin_role_is_plain_user() {
        let identity = Identity { username: "bob".into(), role: "user".into() };
        let state = SessionState::from_identity(&identity);
        assert!(state.is_logged_in());
        assert!(!state.show_admin_link());
        assert!(state.show_subscriptions_link());
    }

    #[test]
    fn logged_out_state_shows_no_gated_links() {
        let state = SessionState::logged_out();
        assert!(!state.show_subscriptions_link());
        assert!(!state.show_admin_link());
        assert!(!state.loading);
    }

    #[test]
    fn initial_state_is_loading() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(!state.is_logged_in());
    }

    #[test]
    fn refreshes_serialize_through_the_gate() {
        let mut coordinator = RefreshCoordinator::default();
        let started_at = coordinator.begin().unwrap();
        assert_eq!(coordinator.begin(), None);
        assert!(coordinator.finish(started_at));
        assert!(coordinator.begin().is_some());
    }

    #[test]
    fn cancelled_refresh_reopens_the_gate() {
        // A refresh dropped mid-await (route change restarting the shell
        // resource) must not leave the gate closed for every later trigger.
        let mut coordinator = RefreshCoordinator::default();
        let started_at = coordinator.begin().unwrap();
        coordinator.release(started_at);
        assert!(coordinator.begin().is_some());
    }

    #[test]
    fn logout_during_refresh_discards_its_result() {
        let mut coordinator = RefreshCoordinator::default();
        let started_at = coordinator.begin().unwrap();
        coordinator.invalidate();
        // The stale result must not be applied...
        assert!(!coordinator.finish(started_at));
        // ...and the next refresh starts immediately.
        assert!(coordinator.begin().is_some());
    }

    #[test]
    fn orphaned_refresh_cannot_release_a_successors_gate() {
        let mut coordinator = RefreshCoordinator::default();
        let old = coordinator.begin().unwrap();
        coordinator.invalidate();
        let current = coordinator.begin().unwrap();
        // The orphan completes (or is dropped) while the new refresh runs.
        assert!(!coordinator.finish(old));
        coordinator.release(old);
        assert_eq!(coordinator.begin(), None);
        assert!(coordinator.finish(current));
    }
}
