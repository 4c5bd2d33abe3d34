#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod keyboard;
pub mod matrix;

pub use error::Error;
pub use heapless::Vec;
pub use keymatrix_macros::keymap;

#[cfg(feature = "defmt")]
mod log {
    pub use defmt::{debug, warn};
}

#[cfg(not(feature = "defmt"))]
mod log {
    pub use ::log::{debug, warn};
}
