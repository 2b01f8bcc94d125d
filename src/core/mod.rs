pub mod app;
pub mod config;
pub mod constants;
pub mod history;
pub mod membership;
pub mod message;
pub mod preferences;
pub mod random;
pub mod range;
pub mod responses;
pub mod session;
pub mod settings;
pub mod smart_match;
