//! Output formatting for the command-line front end

pub mod table;

pub use table::{FqdnRow, SizeRow, TableDisplay};
