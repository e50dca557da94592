pub mod graph;
pub mod time;
