//! Utilities shared by the lazy merge adaptors.

mod cursor;
mod pin;

pub(crate) use cursor::RoundCursor;
pub(crate) use pin::get_pin_mut_from_vec;
