pub mod hicpart_commands;
pub mod pipeline;
