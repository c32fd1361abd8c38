pub mod common;
pub mod map;
pub mod matches;
pub mod player;
pub mod venue;
