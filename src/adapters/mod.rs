// Adapters layer: concrete collaborators for the roster ports (printing).

pub mod printer;
