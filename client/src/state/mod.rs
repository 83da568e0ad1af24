//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`registry`, `session`, `toast`) so pages and
//! components can depend on small focused models.

pub mod registry;
pub mod session;
pub mod toast;
