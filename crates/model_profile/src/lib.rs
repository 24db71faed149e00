#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]
#![allow(clippy::manual_range_contains)]

//! User profile API data types.

pub use model::{Role, UserId, ValidationError, ValidationErrors};

pub mod profile;

pub use profile::*;
