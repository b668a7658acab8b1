//! Application-level configuration.
//!
//! - [`RelayParams`] — fixed parameters of every upstream completion call

pub mod relay_params;

pub use relay_params::RelayParams;
