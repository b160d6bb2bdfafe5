//! The one persisted piece of client state: the bearer token.
//!
//! Stored in browser localStorage under [`TOKEN_KEY`]. The API client reads
//! it; only the session handle writes it. On non-wasm targets (tests) a
//! process-local cell stands in for localStorage.

pub const TOKEN_KEY: &str = "access_token";

#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
pub fn get() -> Option<String> {
    storage()?.get_item(TOKEN_KEY).ok()?
}

#[cfg(target_arch = "wasm32")]
pub fn set(token: &str) {
    if let Some(storage) = storage() {
        if let Err(err) = storage.set_item(TOKEN_KEY, token) {
            tracing::warn!("failed to persist token: {err:?}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn clear() {
    if let Some(storage) = storage() {
        if let Err(err) = storage.remove_item(TOKEN_KEY) {
            tracing::warn!("failed to erase token: {err:?}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;

    thread_local! {
        pub(super) static TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get() -> Option<String> {
    native::TOKEN.with(|cell| cell.borrow().clone())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set(token: &str) {
    native::TOKEN.with(|cell| *cell.borrow_mut() = Some(token.to_string()));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear() {
    native::TOKEN.with(|cell| *cell.borrow_mut() = None);
}
