//! HTTP handlers, grouped by resource.

pub mod event;
pub mod health;
pub mod ticket;
pub mod user;
