#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # addrfill-entities
//!
//! Reusable, agnostic domain entities for entering postal addresses
//! with the help of a place autocomplete provider.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod country;
pub mod field;
pub mod place;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
