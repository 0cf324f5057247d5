//! # Quill Core
//!
//! The domain layer of the Quill post service.
//! This crate holds the `Post` model, the repository port and the
//! application service, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
