//! Concrete repository implementations.
//!
//! Methods that must participate in a caller-owned transaction take a
//! `&mut PgConnection` executor instead of using the pool, so a service
//! can group several statements into one atomic unit of work.

pub mod event;
pub mod sold_ticket;
pub mod ticket;
pub mod user;

pub use event::EventRepository;
pub use sold_ticket::SoldTicketRepository;
pub use ticket::TicketRepository;
pub use user::UserRepository;
