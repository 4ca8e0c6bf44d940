//! Game rules for noughts and crosses.
//!
//! Pure functions over board snapshots, separated from board storage
//! so they compose with any frontend.

pub mod win;

pub use win::evaluate;
