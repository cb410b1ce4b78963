pub(crate) mod commands;
pub(crate) mod display;
pub mod scan;
pub(crate) mod types;
