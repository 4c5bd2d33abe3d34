//! Nokia AC09892 (9925794) ISO keyboard, rewired to a blackpill.
//!
//! The PCB's 34-pin connector exposes an 8 × 16 switch matrix and three
//! LEDs. Scan lines are reordered so the keymap reads like the physical
//! board; see [`matrix`] for the wiring and [`layout`] for the grid.

#![cfg_attr(not(test), no_std)]

pub mod connector;
pub mod keymap;
pub mod layout;
pub mod leds;
pub mod matrix;

pub use layout::{LayoutVariant, NokiaLayout, Switch};
