//! Decaying valuations: values that lose a fixed fraction per calendar day.

pub mod bounded;
pub mod declining;
pub mod retention;

pub use bounded::BoundedDecliningValuation;
pub use declining::DecliningValuation;
pub use retention::{elapsed_days, retention_factor};
