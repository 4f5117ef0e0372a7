//! Shared application domain and persistence modules.

pub mod database;
pub mod domain;
pub mod identity;

#[cfg(test)]
mod test;

mod uuids;
