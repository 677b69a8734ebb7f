//! # addrfill-core
//!
//! Filling in address forms from place selections.

pub mod autofill;
pub mod fields;
pub mod form;
pub mod util;

pub mod entities {
    pub use addrfill_entities::{address::*, country::*, field::*, place::*};
}
