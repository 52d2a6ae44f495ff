//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Gateway operations and provider transport produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms via the metrics facade)
//!
//! Consumers:
//!     → stderr subscriber installed by the binary
//!     → any metrics recorder installed by the embedding application
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder itself
//! - Metrics are no-ops until a recorder exists

pub mod logging;
pub mod metrics;
