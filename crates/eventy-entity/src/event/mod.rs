//! Event aggregate: the event row plus its dates, zones, and social media.

pub mod date;
pub mod model;
pub mod social;
pub mod zone;

pub use date::{EventDate, NewEventDate};
pub use model::{Event, EventDetails, NewEvent};
pub use social::{EventSocialMedia, NewEventSocialMedia};
pub use zone::{EventZone, NewEventZone};
