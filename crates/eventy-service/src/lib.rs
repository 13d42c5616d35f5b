//! # eventy-service
//!
//! Business logic services for Eventy. Services orchestrate repositories
//! and own the transaction boundaries; no ticket state is ever held in
//! process memory across requests.

pub mod availability;
pub mod event;
pub mod inventory;
pub mod lifecycle;
pub mod purchase;
pub mod user;
