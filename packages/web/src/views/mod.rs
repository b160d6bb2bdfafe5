mod home;
pub use home::Home;

mod product;
pub use product::ProductPage;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod subscriptions;
pub use subscriptions::Subscriptions;

mod marketplace_configs;
pub use marketplace_configs::MarketplaceConfigs;

mod config_edit;
pub use config_edit::EditMarketplaceConfig;

mod config_new;
pub use config_new::NewMarketplaceConfig;

mod not_found;
pub use not_found::NotFound;
