pub mod bfs;
pub mod brute_force;
pub mod dijkstra;
pub mod path;
pub mod queue;
pub mod validation;
