//! Game logic: inputs, the round state machine and sessions of rounds
//!
//! Nothing here touches a terminal; front ends translate their own events
//! into [`Input`] and render from the read-only projections of [`Round`].

mod input;
mod round;
mod session;

pub use input::Input;
pub use round::{Cell, Event, Phase, Round, RoundError, apply_input};
pub use session::{Message, Session, Statistics, Tone};
