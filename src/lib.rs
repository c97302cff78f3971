pub mod api;
pub mod messages;
pub mod pages;
pub mod risk_prediction;
pub mod server;
pub mod utils;
