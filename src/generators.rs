use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cells::{CoordinateSmallVec, GridCoordinate};
use crate::grid::Grid;
use crate::renderers::{Renderer, VisualState};

/// Apply the recursive backtracker maze generation algorithm to a grid.
///
/// A random walk that only steps onto unvisited cells, carving a passage with each step.
/// When the walk reaches a cell with no unvisited neighbours it backtracks along its own
/// trail (an explicit stack, not the call stack) until it finds a cell that still has one.
/// It starts at `(0, 0)` and stops once it has backtracked all the way out, by which time
/// every cell has been visited exactly once. The passages form a spanning tree: a perfect
/// maze with exactly one route between any two cells.
///
/// Expects a grid with every wall standing and no cell visited. Cells are left marked as
/// visited; call `reset_visitation` before reusing the flags.
///
/// The renderer sees each cell as `Exploring` when carved into and `Settled` when
/// backtracked out of.
pub fn recursive_backtracker<R, V>(grid: &mut Grid, rng: &mut R, renderer: &mut V)
    where R: Rng,
          V: Renderer
{
    let start = GridCoordinate::new(0, 0);
    let mut stack = Vec::with_capacity(grid.size());
    let mut carved = 0;

    grid.mark_visited(start);
    renderer.on_cell_visited(start, VisualState::Exploring);
    stack.push(start);

    while let Some(&current) = stack.last() {

        let unvisited_neighbours = grid.neighbours(current)
            .into_iter()
            .filter(|neighbour| !grid.is_visited(*neighbour))
            .collect::<CoordinateSmallVec>();

        if let Some(&next) = unvisited_neighbours.choose(rng) {
            grid.remove_wall(current, next);
            grid.mark_visited(next);
            carved += 1;
            trace!("Carved {} -> {}", current, next);
            renderer.on_cell_visited(next, VisualState::Exploring);
            stack.push(next);
        } else {
            let _ = stack.pop();
            renderer.on_cell_visited(current, VisualState::Settled);
        }
    }

    debug!("Recursive backtracker carved {} passages over {} cells", carved, grid.size());
}

/// Stand walls back up across `count` randomly chosen passages, leaving a maze that is no
/// longer perfect: some cells get cut off from others. Useful for seeing searches fail.
///
/// Returns how many walls were rebuilt, which is less than `count` when the maze has
/// fewer passages than that.
pub fn rebuild_random_walls<R: Rng>(grid: &mut Grid, count: usize, rng: &mut R) -> usize {
    let passages = grid.iter_links().collect::<Vec<_>>();
    let chosen = passages.choose_multiple(rng, count).cloned().collect::<Vec<_>>();

    for &(a, b) in &chosen {
        trace!("Rebuilding wall between {} and {}", a, b);
        grid.add_wall(a, b);
    }

    debug!("Rebuilt {} of {} requested walls", chosen.len(), count);
    chosen.len()
}
