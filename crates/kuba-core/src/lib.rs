//! Core types for the Kuba marble game.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Cell`] and [`Color`] for marble representation
//! - [`Coord`] and [`Direction`] for board geometry
//! - [`Board`], the fixed 7x7 grid with its canonical starting layout and a
//!   plain-text layout format for tests and diagnostics

mod board;
mod cell;
mod color;
mod coord;
mod direction;

pub use board::{Board, LayoutError, BOARD_SIZE};
pub use cell::Cell;
pub use color::Color;
pub use coord::Coord;
pub use direction::Direction;
