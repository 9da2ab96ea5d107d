//! Breadth first and depth first path searches over the passages of a maze.
//!
//! Both are the same traversal (`Traversal`) differing only in the order cells leave the
//! frontier: first in first out for breadth first, last in first out for depth first.

use std::collections::VecDeque;
use std::fmt;

use bit_set::BitSet;
use fnv::FnvHashMap;
use itertools::Itertools;
use log::{debug, trace};

use crate::cells::GridCoordinate;
use crate::grid::Grid;
use crate::renderers::{Renderer, VisualState};

/// The discovered but not yet visited cells of a traversal.
/// The same cell may be added more than once; later copies are skipped when taken.
pub trait Frontier: Default {
    fn push(&mut self, coord: GridCoordinate);
    fn take(&mut self) -> Option<GridCoordinate>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Queue frontier, giving a breadth first search.
#[derive(Debug, Clone, Default)]
pub struct Fifo(VecDeque<GridCoordinate>);

impl Frontier for Fifo {
    #[inline]
    fn push(&mut self, coord: GridCoordinate) {
        self.0.push_back(coord);
    }

    #[inline]
    fn take(&mut self) -> Option<GridCoordinate> {
        self.0.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Stack frontier, giving a depth first search.
#[derive(Debug, Clone, Default)]
pub struct Lifo(Vec<GridCoordinate>);

impl Frontier for Lifo {
    #[inline]
    fn push(&mut self, coord: GridCoordinate) {
        self.0.push(coord);
    }

    #[inline]
    fn take(&mut self) -> Option<GridCoordinate> {
        self.0.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// What a single `Traversal::step` did.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum TraversalStep {
    /// Visited a new cell that is not the end; there may be more to do.
    Visited(GridCoordinate),
    /// Visited the end cell. Further steps do nothing.
    Reached(GridCoordinate),
    /// The frontier ran dry without reaching the end. Further steps do nothing.
    Exhausted,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
enum Status {
    Running,
    Reached,
    Exhausted,
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub struct SearchResult {
    /// True only when the search actually arrived at the end cell.
    pub found: bool,
    /// Start to end inclusive, empty when nothing was found.
    pub path: Vec<GridCoordinate>,
    /// Every cell in the order it was visited, start first.
    pub visit_order: Vec<GridCoordinate>,
}

impl SearchResult {
    /// Number of passages walked along the path.
    pub fn path_length(&self) -> Option<usize> {
        if self.found {
            Some(self.path.len() - 1)
        } else {
            None
        }
    }
}

/// One search in progress: the frontier, the visited set and the parent links.
///
/// The search advances a visit at a time through `step`, so a host can animate it or stop
/// between any two steps. `finish` turns whatever state has been reached into a result.
pub struct Traversal<'g, F: Frontier> {
    grid: &'g Grid,
    start: GridCoordinate,
    end: GridCoordinate,
    frontier: F,
    visited: BitSet,
    parents: FnvHashMap<GridCoordinate, GridCoordinate>,
    visit_order: Vec<GridCoordinate>,
    status: Status,
}

impl<'g, F: Frontier> fmt::Debug for Traversal<'g, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Traversal :: start: {}, end: {}, frontier: {}, visited: {}, status: {:?}",
               self.start,
               self.end,
               self.frontier.len(),
               self.visit_order.len(),
               self.status)
    }
}

impl<'g, F: Frontier> Traversal<'g, F> {
    /// # Panics
    ///
    /// If `start` or `end` is off the grid.
    pub fn new(grid: &'g Grid, start: GridCoordinate, end: GridCoordinate) -> Traversal<'g, F> {
        for &coord in &[start, end] {
            assert!(grid.is_valid_coordinate(coord),
                    "search coordinate {} is outside of the {}x{} grid",
                    coord,
                    grid.width().0,
                    grid.height().0);
        }

        let mut frontier = F::default();
        frontier.push(start);

        Traversal {
            grid,
            start,
            end,
            frontier,
            visited: BitSet::with_capacity(grid.size()),
            parents: FnvHashMap::with_capacity_and_hasher(grid.size(), Default::default()),
            visit_order: Vec::new(),
            status: Status::Running,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status != Status::Running
    }

    pub fn visit_order(&self) -> &[GridCoordinate] {
        &self.visit_order
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Take cells off the frontier until one that has not been visited turns up, then visit
    /// it: report it as `Exploring`, stop if it is the end, otherwise add its open unvisited
    /// neighbours to the frontier and report it as `Settled`.
    pub fn step<V: Renderer>(&mut self, renderer: &mut V) -> TraversalStep {
        match self.status {
            Status::Reached => return TraversalStep::Reached(self.end),
            Status::Exhausted => return TraversalStep::Exhausted,
            Status::Running => {}
        }

        let current = loop {
            match self.frontier.take() {
                Some(coord) => {
                    if !self.visited.contains(self.index(coord)) {
                        break coord;
                    }
                }
                None => {
                    self.status = Status::Exhausted;
                    return TraversalStep::Exhausted;
                }
            }
        };

        let current_index = self.index(current);
        self.visited.insert(current_index);
        self.visit_order.push(current);
        trace!("Visiting {}", current);
        renderer.on_cell_visited(current, VisualState::Exploring);

        if current == self.end {
            self.status = Status::Reached;
            return TraversalStep::Reached(current);
        }

        for neighbour in self.grid.neighbours(current).into_iter() {
            let unvisited = !self.visited.contains(self.index(neighbour));
            if unvisited && self.grid.is_open(current, neighbour) {
                self.frontier.push(neighbour);
                // The first discovery is the one that counts; in a breadth first search it is
                // the one on a shortest path.
                self.parents.entry(neighbour).or_insert(current);
            }
        }

        renderer.on_cell_visited(current, VisualState::Settled);
        TraversalStep::Visited(current)
    }

    /// Step until the end is reached or the frontier is exhausted, then `finish`.
    pub fn run<V: Renderer>(mut self, renderer: &mut V) -> SearchResult {
        while let TraversalStep::Visited(_) = self.step(renderer) {}
        self.finish(renderer)
    }

    /// Build the result from the current state. A traversal stopped before reaching the end
    /// reports nothing found. The renderer sees each path cell as `FinalPath` and then the
    /// completion.
    pub fn finish<V: Renderer>(self, renderer: &mut V) -> SearchResult {
        let path = if self.status == Status::Reached {
            self.reconstruct_path()
        } else {
            None
        };
        let found = path.is_some();
        let path = path.unwrap_or_else(Vec::new);

        for &coord in &path {
            renderer.on_cell_visited(coord, VisualState::FinalPath);
        }
        renderer.on_search_complete(found, &path);

        debug!("Search {} -> {}: found: {}, path cells: {}, visited cells: {}",
               self.start,
               self.end,
               found,
               path.len(),
               self.visit_order.len());
        trace!("Path: {}", path.iter().join(" -> "));

        SearchResult {
            found,
            path,
            visit_order: self.visit_order,
        }
    }

    /// Walk the parent links back from the end to the start.
    fn reconstruct_path(&self) -> Option<Vec<GridCoordinate>> {
        let mut path = vec![self.end];
        let mut current = self.end;
        while current != self.start {
            current = *self.parents.get(&current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// Row-major index into the visited set. Only called with coordinates already known
    /// to be on the grid.
    #[inline]
    fn index(&self, coord: GridCoordinate) -> usize {
        coord.y as usize * self.grid.width().0 + coord.x as usize
    }
}

/// Breadth first search. The path found is a shortest one.
///
/// # Panics
///
/// If `start` or `end` is off the grid.
pub fn bfs<V: Renderer>(grid: &Grid,
                        start: GridCoordinate,
                        end: GridCoordinate,
                        renderer: &mut V)
                        -> SearchResult {
    Traversal::<Fifo>::new(grid, start, end).run(renderer)
}

/// Depth first search. Finds a path whenever one exists, not necessarily the shortest.
///
/// # Panics
///
/// If `start` or `end` is off the grid.
pub fn dfs<V: Renderer>(grid: &Grid,
                        start: GridCoordinate,
                        end: GridCoordinate,
                        renderer: &mut V)
                        -> SearchResult {
    Traversal::<Lifo>::new(grid, start, end).run(renderer)
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SearchStrategy {
    BreadthFirst,
    DepthFirst,
}

impl SearchStrategy {
    pub fn search<V: Renderer>(self,
                               grid: &Grid,
                               start: GridCoordinate,
                               end: GridCoordinate,
                               renderer: &mut V)
                               -> SearchResult {
        match self {
            SearchStrategy::BreadthFirst => bfs(grid, start, end, renderer),
            SearchStrategy::DepthFirst => dfs(grid, start, end, renderer),
        }
    }
}

impl Default for SearchStrategy {
    fn default() -> SearchStrategy {
        SearchStrategy::BreadthFirst
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SearchStrategy::BreadthFirst => write!(f, "breadth first"),
            SearchStrategy::DepthFirst => write!(f, "depth first"),
        }
    }
}
