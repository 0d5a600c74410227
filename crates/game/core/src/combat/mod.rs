//! Combat arithmetic.
//!
//! Pure, side-effect free helpers shared by the boss and player phases. The
//! engine decides *when* these apply; this module only computes amounts.
//!
//! # Core Functions
//!
//! - `reduce_physical`: Flat and capped reduction of a physical hit
//! - `percent_of`: Integer percentage, truncating toward zero
//! - `absorb`: Split a hit between a guard and whatever passes through

pub mod damage;

pub use damage::{absorb, percent_of, reduce_physical};
