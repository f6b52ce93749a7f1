//! Game logic: configuration, piece selection, and the tick-driven match
//! state.
//!
//! A typical match runs like this:
//!
//! 1. Build a [`GameConfig`] and a [`Randomizer`].
//! 2. Create a [`GameState`]; the first piece spawns immediately.
//! 3. Feed player input through [`GameState::key_down`].
//! 4. Call [`GameState::tick`] at a fixed cadence; gravity, lock delay,
//!    and the line-clear freeze all advance on ticks.
//! 5. Stop once [`GameState::is_alive`] turns false.
//!
//! The board always carries the falling piece and its shadow projection
//! painted in, so hosts can render straight from [`GameState::cell`].

pub use self::{config::*, randomizer::*, state::*};

mod config;
mod kicks;
mod randomizer;
mod state;
