//! # API crate — typed REST client for the PriceWatch backend
//!
//! Every call the frontend makes to the backend goes through [`ApiClient`].
//! The client is a thin wrapper around `reqwest`: it attaches the bearer
//! token from browser storage, normalizes failure statuses into [`Error`],
//! and returns parsed JSON. It never mutates session state itself.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] with one method per backend operation |
//! | [`configs`] | Marketplace-configuration JSON parsing and structural validation |
//! | [`error`] | [`Error`] taxonomy (`Unauthenticated`, `NotFound`, `RequestFailed`, `MalformedInput`, transport) |
//! | [`models`] | Wire types (`Product`, `Identity`, `SubscriptionPage`, ...) |
//! | [`token`] | The single persisted localStorage key holding the bearer token |

pub mod client;
pub mod configs;
pub mod error;
pub mod models;
pub mod token;

pub use client::ApiClient;
pub use configs::{config_template_json, parse_config_input};
pub use error::Error;
pub use models::{
    Identity, MarketplaceConfig, MarketplaceField, MarketplaceShort, Period, PricePoint, Product,
    SubscribeOutcome, SubscriptionPage, TokenResponse,
};
