pub mod cluster;
pub mod entry;
pub mod error;
pub mod filter_short;
pub mod link_matrix;
pub mod repeat_filter;
pub mod split;
#[macro_use]
extern crate log;
