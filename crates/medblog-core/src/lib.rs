//! # MedBlog Core
//!
//! The domain layer of the MedBlog backend: entities, the typed repository
//! ports the data client must implement, and the services that assemble
//! public and admin views from them.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod listing;
pub mod ports;
pub mod services;
pub mod text;

pub use error::{DomainError, RepoError};
