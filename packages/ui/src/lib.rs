//! This crate contains all shared UI for the workspace.

mod fetch;
pub use fetch::FetchState;

mod session;
pub use session::{use_session, SessionHandle, SessionProvider, SessionState, REFRESH_INTERVAL_SECS};

mod toast;
pub use toast::{Toast, ToastKind, ToastMessage};

mod subscription_card;
pub use subscription_card::{percent_change_label, truncate_name, SubscriptionCard};

mod price_chart;
pub use price_chart::PriceChart;
