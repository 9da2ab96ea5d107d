use smallvec::SmallVec;
use std::fmt;

use crate::units::{ColumnIndex, RowIndex, Width};

/// Position of a cell: `x` is the column, `y` the row, `(0, 0)` is the top left.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;
pub type CoordinateOptionSmallVec = SmallVec<[Option<GridCoordinate>; 4]>;

impl GridCoordinate {
    pub fn new(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_width: Width) -> GridCoordinate {
        let Width(width) = row_width;
        let x = index % width;
        let y = index / width;

        GridCoordinate::new(x as u32, y as u32)
    }

    #[inline]
    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> GridCoordinate {
        let (ColumnIndex(col), RowIndex(row)) = (col_index, row_index);
        GridCoordinate::new(col as u32, row as u32)
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable. Grid bounds are not checked here.
    pub fn offset(self, dir: CompassPrimary) -> Option<GridCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => y.checked_sub(1).map(|y| GridCoordinate { x, y }),
            CompassPrimary::South => y.checked_add(1).map(|y| GridCoordinate { x, y }),
            CompassPrimary::East => x.checked_add(1).map(|x| GridCoordinate { x, y }),
            CompassPrimary::West => x.checked_sub(1).map(|x| GridCoordinate { x, y }),
        }
    }

    /// The direction of `other` as seen from `self`, if the two are orthogonally adjacent.
    ///
    /// Worked out from the sign of `(other.x - self.x, other.y - self.y)`, exactly one
    /// component of which is nonzero (and of magnitude 1) for adjacent cells.
    pub fn direction_to(self, other: GridCoordinate) -> Option<CompassPrimary> {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        match (dx, dy) {
            (1, 0) => Some(CompassPrimary::East),
            (-1, 0) => Some(CompassPrimary::West),
            (0, 1) => Some(CompassPrimary::South),
            (0, -1) => Some(CompassPrimary::North),
            _ => None,
        }
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// North is the top wall of a cell, South the bottom, West the left and East the right.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    /// The order neighbours are enumerated in: left, right, top, bottom.
    pub const NEIGHBOUR_ORDER: [CompassPrimary; 4] = [CompassPrimary::West,
                                                      CompassPrimary::East,
                                                      CompassPrimary::North,
                                                      CompassPrimary::South];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

/// The four wall flags of a cell, `true` meaning the wall is standing.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Walls {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Walls {
    pub fn all_standing() -> Walls {
        Walls {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }

    #[inline]
    pub fn is_standing(&self, side: CompassPrimary) -> bool {
        match side {
            CompassPrimary::North => self.top,
            CompassPrimary::South => self.bottom,
            CompassPrimary::West => self.left,
            CompassPrimary::East => self.right,
        }
    }

    #[inline]
    pub fn is_open(&self, side: CompassPrimary) -> bool {
        !self.is_standing(side)
    }

    pub(crate) fn set(&mut self, side: CompassPrimary, standing: bool) {
        let wall = match side {
            CompassPrimary::North => &mut self.top,
            CompassPrimary::South => &mut self.bottom,
            CompassPrimary::West => &mut self.left,
            CompassPrimary::East => &mut self.right,
        };
        *wall = standing;
    }
}

impl Default for Walls {
    fn default() -> Walls {
        Walls::all_standing()
    }
}

/// One square of the maze. Identity is the coordinate; a grid never holds two cells
/// with the same coordinate.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    pub(crate) coord: GridCoordinate,
    pub(crate) visited: bool,
    pub(crate) walls: Walls,
}

impl Cell {
    pub fn new(coord: GridCoordinate) -> Cell {
        Cell {
            coord,
            visited: false,
            walls: Walls::all_standing(),
        }
    }

    #[inline]
    pub fn coordinate(&self) -> GridCoordinate {
        self.coord
    }

    /// Set by maze generation. Path searches keep their own visited set.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub fn walls(&self) -> &Walls {
        &self.walls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stop_at_the_representable_edge() {
        let origin = GridCoordinate::new(0, 0);
        assert_eq!(origin.offset(CompassPrimary::North), None);
        assert_eq!(origin.offset(CompassPrimary::West), None);
        assert_eq!(origin.offset(CompassPrimary::East), Some(GridCoordinate::new(1, 0)));
        assert_eq!(origin.offset(CompassPrimary::South), Some(GridCoordinate::new(0, 1)));

        let far_corner = GridCoordinate::new(u32::MAX, u32::MAX);
        assert_eq!(far_corner.offset(CompassPrimary::East), None);
        assert_eq!(far_corner.offset(CompassPrimary::South), None);
    }

    #[test]
    fn direction_between_adjacent_cells() {
        let gc = |x, y| GridCoordinate::new(x, y);
        let centre = gc(1, 1);
        assert_eq!(centre.direction_to(gc(2, 1)), Some(CompassPrimary::East));
        assert_eq!(centre.direction_to(gc(0, 1)), Some(CompassPrimary::West));
        assert_eq!(centre.direction_to(gc(1, 0)), Some(CompassPrimary::North));
        assert_eq!(centre.direction_to(gc(1, 2)), Some(CompassPrimary::South));

        // diagonals, self and distant cells are not adjacent
        assert_eq!(centre.direction_to(gc(2, 2)), None);
        assert_eq!(centre.direction_to(centre), None);
        assert_eq!(centre.direction_to(gc(3, 1)), None);
    }

    #[test]
    fn direction_and_offset_agree() {
        let centre = GridCoordinate::new(5, 5);
        for dir in CompassPrimary::NEIGHBOUR_ORDER.iter() {
            let neighbour = centre.offset(*dir).unwrap();
            assert_eq!(centre.direction_to(neighbour), Some(*dir));
            assert_eq!(neighbour.direction_to(centre), Some(dir.opposite()));
        }
    }

    #[test]
    fn row_major_index_conversion() {
        let w = Width(3);
        assert_eq!(GridCoordinate::from_row_major_index(0, w), GridCoordinate::new(0, 0));
        assert_eq!(GridCoordinate::from_row_major_index(2, w), GridCoordinate::new(2, 0));
        assert_eq!(GridCoordinate::from_row_major_index(4, w), GridCoordinate::new(1, 1));
        assert_eq!(GridCoordinate::from_row_major_index(8, w), GridCoordinate::new(2, 2));
    }

    #[test]
    fn new_cells_have_every_wall_standing() {
        let cell = Cell::new(GridCoordinate::new(0, 0));
        assert!(!cell.is_visited());
        for dir in CompassPrimary::NEIGHBOUR_ORDER.iter() {
            assert!(cell.walls().is_standing(*dir));
        }
    }

    #[test]
    fn wall_flags_map_to_compass_sides() {
        let mut walls = Walls::default();
        walls.set(CompassPrimary::North, false);
        walls.set(CompassPrimary::East, false);
        assert!(!walls.top);
        assert!(!walls.right);
        assert!(walls.bottom);
        assert!(walls.left);
        assert!(walls.is_open(CompassPrimary::North));
        assert!(walls.is_standing(CompassPrimary::West));
    }
}
