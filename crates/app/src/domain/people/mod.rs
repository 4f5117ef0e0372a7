//! People
//!
//! Buyer identities. Collaborators are keyed by their registry matricula,
//! customers by their hosted identity account; both kinds share one table so
//! orders reference a single buyer entity.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::PeopleServiceError;
pub use service::*;
