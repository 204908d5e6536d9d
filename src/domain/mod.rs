//! Domain types: puzzle definitions, grids, cursor state and the ports the
//! application layer talks to.

pub mod cursor;
pub mod grid;
pub mod player;
pub mod ports;
pub mod puzzle;
