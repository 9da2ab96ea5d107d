use std::fmt;

use crate::cells::GridCoordinate;
use crate::grid_dimensions::GridDimensions;
use crate::units::{ColumnIndex, Height, RowIndex, Width};

/// Row-major walk over every coordinate of a grid.
#[derive(Clone)]
pub struct CellIter {
    dimensions: GridDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub(crate) fn new(dimensions: GridDimensions) -> CellIter {
        CellIter {
            dimensions,
            current_cell_number: 0,
            cells_count: dimensions.size().0,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number,
                                                             self.dimensions.width());
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

/// Yields each row of the grid, top to bottom, as a vec of coordinates.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_row: usize,
    row_width: Width,
    rows_count: Height,
}

impl RowIter {
    pub(crate) fn new(dimensions: GridDimensions) -> RowIter {
        RowIter {
            current_row: 0,
            row_width: dimensions.width(),
            rows_count: dimensions.height(),
        }
    }
}

impl ExactSizeIterator for RowIter {}
impl Iterator for RowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let Height(count) = self.rows_count;
        if self.current_row < count {
            let Width(length) = self.row_width;
            let row_index = RowIndex(self.current_row);
            let coords = (0..length)
                .map(|i| GridCoordinate::from_row_column_indices(ColumnIndex(i), row_index))
                .collect();
            self.current_row += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows_count.0 - self.current_row;
        (remaining, Some(remaining))
    }
}
