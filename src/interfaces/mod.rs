//! Readers and writers at the edge of the crate: puzzle files, command
//! scripts and the text board.

pub mod csv;
pub mod json;
pub mod text;
