mod address_fields;
mod field;

pub use self::{address_fields::*, field::*};
