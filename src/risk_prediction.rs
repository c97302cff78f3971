pub mod classifier;
pub mod risk_prediction;
pub mod risk_prediction_utils;
