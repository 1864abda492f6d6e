// Shared utilities
//
// - token_estimation: outline token budgeting

pub mod token_estimation;

pub use token_estimation::TokenEstimator;
