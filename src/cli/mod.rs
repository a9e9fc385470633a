//! Command-line front end over the library helpers

pub mod dispatcher;
pub mod main_types;
