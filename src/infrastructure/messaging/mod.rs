pub mod graph;
pub mod in_memory;
