use std::fmt;

use crate::cells::{Cell, CompassPrimary, CoordinateOptionSmallVec, CoordinateSmallVec,
                   GridCoordinate, Walls};
use crate::errors::*;
use crate::grid_dimensions::GridDimensions;
use crate::grid_iterators::{CellIter, RowIter};
use crate::units::{Height, Width};

/// A rectangular lattice of cells, each with four walls, stored row-major.
///
/// The grid only answers adjacency questions. Which neighbours matter (unvisited ones
/// while carving, open ones while searching) is decided by the algorithm asking.
pub struct Grid {
    cells: Vec<Cell>,
    dimensions: GridDimensions,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: width: {:?}, height: {:?}, passages: {:?}",
               self.dimensions.width(),
               self.dimensions.height(),
               self.links_count())
    }
}

impl Grid {
    /// A grid with every wall standing and no cell visited.
    pub fn new(dimensions: GridDimensions) -> Grid {
        let cells = CellIter::new(dimensions).map(Cell::new).collect();
        Grid {
            cells,
            dimensions,
        }
    }

    pub fn with_size(width: Width, height: Height) -> Result<Grid> {
        Ok(Grid::new(GridDimensions::new(width, height)?))
    }


    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.dimensions.width()
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.dimensions.height()
    }

    pub fn cell(&self, coord: GridCoordinate) -> Option<&Cell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    /// Cells to the left, right, top and bottom (in that order) that lie within the grid.
    /// Walls are not considered.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::NEIGHBOUR_ORDER
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    pub fn neighbours_at_directions(&self,
                                    coord: GridCoordinate,
                                    dirs: &[CompassPrimary])
                                    -> CoordinateOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(coord, *direction))
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction)
             .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// Is there a passage between two cells? False for cells that are not adjacent or not
    /// on the grid.
    pub fn is_open(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        match (a.direction_to(b), self.cell(a), self.cell(b)) {
            (Some(dir), Some(cell_a), Some(_)) => cell_a.walls.is_open(dir),
            _ => false,
        }
    }

    pub fn is_neighbour_open(&self, coord: GridCoordinate, direction: CompassPrimary) -> bool {
        self.neighbour_at_direction(coord, direction)
            .map_or(false, |neighbour_coord| self.is_open(coord, neighbour_coord))
    }

    /// Carve a passage between two adjacent cells, clearing the facing wall on both.
    ///
    /// # Panics
    ///
    /// If either coordinate is off the grid or the cells are not adjacent.
    pub fn remove_wall(&mut self, a: GridCoordinate, b: GridCoordinate) {
        self.set_wall_between(a, b, false);
    }

    /// Put back the wall between two adjacent cells.
    ///
    /// # Panics
    ///
    /// If either coordinate is off the grid or the cells are not adjacent.
    pub fn add_wall(&mut self, a: GridCoordinate, b: GridCoordinate) {
        self.set_wall_between(a, b, true);
    }

    /// Clear the visited flag on every cell. Walls are left alone.
    pub fn reset_visitation(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    /// Clear visits and stand every wall back up, ready for carving a fresh maze.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
            cell.walls = Walls::all_standing();
        }
    }

    /// # Panics
    ///
    /// If the coordinate is off the grid.
    #[inline]
    pub fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.cells[self.index_of(coord)].visited
    }

    /// # Panics
    ///
    /// If the coordinate is off the grid.
    #[inline]
    pub fn mark_visited(&mut self, coord: GridCoordinate) {
        let index = self.index_of(coord);
        self.cells[index].visited = true;
    }

    /// Cells that are joined to a particular cell by a passage.
    pub fn links(&self, coord: GridCoordinate) -> Option<CoordinateSmallVec> {
        if self.is_valid_coordinate(coord) {
            Some(self.neighbours(coord)
                     .into_iter()
                     .filter(|neighbour| self.is_open(coord, *neighbour))
                     .collect())
        } else {
            None
        }
    }

    /// Number of passages (adjacent cell pairs with the wall between them removed).
    pub fn links_count(&self) -> usize {
        self.iter_links().count()
    }

    /// Each passage exactly once, as `(cell, cell to its right or below)`.
    pub fn iter_links(&self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + '_ {
        self.iter().flat_map(move |coord| {
            self.neighbours_at_directions(coord, &[CompassPrimary::East, CompassPrimary::South])
                .into_iter()
                .flatten()
                .filter(move |neighbour| self.is_open(coord, *neighbour))
                .map(move |neighbour| (coord, neighbour))
        })
    }

    /// `iter_links` as zero based row-major cell indices.
    pub fn iter_link_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_links().map(move |(a, b)| (self.index_of(a), self.index_of(b)))
    }

    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        self.dimensions.grid_coordinate_to_index(coord)
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.dimensions)
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        self.dimensions.is_valid_coordinate(coord)
    }

    /// Recoverable bounds check for coordinates that come from outside the program.
    #[inline]
    pub fn check_coordinate(&self, coord: GridCoordinate) -> Result<()> {
        self.dimensions.check_coordinate(coord)
    }

    #[inline]
    fn index_of(&self, coord: GridCoordinate) -> usize {
        match self.grid_coordinate_to_index(coord) {
            Some(index) => index,
            None => panic!("coordinate {} is outside of the {}x{} grid",
                           coord,
                           self.width().0,
                           self.height().0),
        }
    }

    fn set_wall_between(&mut self, a: GridCoordinate, b: GridCoordinate, standing: bool) {
        let dir = match a.direction_to(b) {
            Some(dir) => dir,
            None => panic!("cells {} and {} are not adjacent", a, b),
        };
        let (a_index, b_index) = (self.index_of(a), self.index_of(b));
        self.cells[a_index].walls.set(dir, standing);
        self.cells[b_index].walls.set(dir.opposite(), standing);
    }
}
