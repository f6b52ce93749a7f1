//! Wire boundary for hosting matches: frames inbound bytes into 4-byte
//! event records and dispatches them onto per-client games.

pub use self::{event::*, frame::*, lobby::*};

mod event;
mod frame;
mod lobby;
