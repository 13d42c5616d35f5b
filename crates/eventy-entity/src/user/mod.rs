//! User (buyer/organizer) entities.

pub mod model;

pub use model::{CreateUser, User};
