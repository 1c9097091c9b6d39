//! Common types and traits for validated aggregates

pub mod data_error_info;
pub mod errors_changed;

// Re-exports
pub use data_error_info::{DataErrorInfo, NotifyDataErrorInfo};
pub use errors_changed::{ErrorsChanged, ErrorsChangedArgs, SubscriptionId};
