pub mod nav;
pub mod skill_graph;
pub mod terminal;
