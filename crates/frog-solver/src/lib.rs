//! Jumping frogs puzzle solver.
//!
//! This crate runs an exhaustive breadth-first search over the positions of
//! the classic seven-slot frogs puzzle and reports every move sequence that
//! swaps the two groups of frogs. Fruitless branches of the search tree are
//! released as soon as they are exhausted.

pub mod error;
pub mod moves;
pub mod printer;
pub mod puzzle;
pub mod solver;
pub mod tree;

// Re-export main types
pub use error::{PathError, SolveError};
pub use moves::{generate, legal_moves, Move, MoveKind};
pub use printer::{describe_step, print_path, SolutionPath, Step};
pub use puzzle::{Arrangement, FrogKind, Token};
pub use solver::{search, solve_all, SearchStats, SolverConfig, SolverResult};
pub use tree::{NodeId, SearchTree};
