//! # Library Crate Root
//!
//! This file (`lib.rs`) serves as the root of the library crate.
//! Its primary purpose is to declare the module structure of the application,
//! making various parts of the application accessible under a common crate namespace.

pub mod cli;
pub mod core;
pub mod utils;
