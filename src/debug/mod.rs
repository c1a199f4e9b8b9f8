//! Debug utilities for `waterui-anchor`.
//!
//! Constraint building is silent unless a subscriber is installed. The core
//! crates emit through `tracing`:
//!
//! - `warn`: a relation was built from a scaled or offset left-hand item,
//! - `debug`: edge pinning was refused, a batch finished activating,
//! - `trace`: each constraint as it is activated.

pub mod logging;

pub use logging::{install_tracing, log_level, set_log_level};
