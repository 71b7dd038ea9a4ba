//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and command handlers.

pub mod notifications;

pub use notifications::NotificationService;
