//! **maze_pathing** carves perfect mazes with the recursive backtracker and finds routes
//! through them with breadth first or depth first search, reporting each step to a
//! `Renderer` so the work can be animated.

// `error_chain!` recurses deeply.
#![recursion_limit = "1024"]

pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod pathing;
pub mod renderers;
pub mod units;
