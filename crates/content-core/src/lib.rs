//! # Content Core
//!
//! The domain layer of the content factory.
//! Posts, the scheduled-post index, the calendar grid and the application
//! state reducer live here, with no infrastructure dependencies.

pub mod calendar;
pub mod domain;
pub mod error;
pub mod ports;
pub mod state;

pub use error::DomainError;
pub use state::{Action, Transition, Workspace};
