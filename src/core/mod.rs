pub mod container;
pub mod roster;
