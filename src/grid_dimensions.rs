use error_chain::bail;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::units::{Height, NodesCount, Width};

/// Width and height of a rectangular grid, both at least 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridDimensions {
    width: Width,
    height: Height,
}

impl GridDimensions {
    pub fn new(width: Width, height: Height) -> Result<GridDimensions> {
        let (Width(w), Height(h)) = (width, height);
        // Coordinates are u32 so each side has to fit in one.
        if w == 0 || h == 0 || w > u32::MAX as usize || h > u32::MAX as usize {
            bail!(ErrorKind::InvalidGridDimensions(w, h));
        }
        if w.checked_mul(h).is_none() {
            bail!(ErrorKind::InvalidGridDimensions(w, h));
        }

        Ok(GridDimensions { width, height })
    }

    #[inline(always)]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.width.0 * self.height.0)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    /// Convert a grid coordinate to a one dimensional row-major index in the range 0..size.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }

    pub fn check_coordinate(&self, coord: GridCoordinate) -> Result<()> {
        if self.is_valid_coordinate(coord) {
            Ok(())
        } else {
            Err(ErrorKind::CoordinateOutOfBounds(coord, self.width.0, self.height.0).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: usize, h: usize) -> GridDimensions {
        GridDimensions::new(Width(w), Height(h)).expect("valid dimensions")
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        for &(w, h) in &[(0, 0), (0, 5), (5, 0)] {
            match GridDimensions::new(Width(w), Height(h)) {
                Err(Error(ErrorKind::InvalidGridDimensions(ew, eh), _)) => {
                    assert_eq!((ew, eh), (w, h));
                }
                other => panic!("expected invalid dimensions error, got {:?}", other),
            }
        }
    }

    #[test]
    fn single_cell_dimensions_are_accepted() {
        let d = dims(1, 1);
        assert_eq!(d.size(), NodesCount(1));
        assert_eq!(dims(4, 3).size(), NodesCount(12));
    }

    #[test]
    fn coordinate_index_mapping() {
        let d = dims(3, 2);
        let gc = |x, y| GridCoordinate::new(x, y);
        assert_eq!(d.grid_coordinate_to_index(gc(0, 0)), Some(0));
        assert_eq!(d.grid_coordinate_to_index(gc(2, 0)), Some(2));
        assert_eq!(d.grid_coordinate_to_index(gc(0, 1)), Some(3));
        assert_eq!(d.grid_coordinate_to_index(gc(2, 1)), Some(5));
        assert_eq!(d.grid_coordinate_to_index(gc(3, 0)), None);
        assert_eq!(d.grid_coordinate_to_index(gc(0, 2)), None);
        assert_eq!(d.grid_coordinate_to_index(gc(u32::MAX, u32::MAX)), None);
    }

    #[test]
    fn check_coordinate_reports_the_grid_size() {
        let d = dims(2, 2);
        assert!(d.check_coordinate(GridCoordinate::new(1, 1)).is_ok());
        let err = d.check_coordinate(GridCoordinate::new(2, 0)).unwrap_err();
        assert_eq!(err.to_string(), "coordinate (2, 0) is outside of the 2x2 grid");
    }
}
