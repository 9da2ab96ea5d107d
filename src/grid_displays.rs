use std::fmt;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::grid::Grid;
use crate::units::{Height, Width};

/// Supplies the text drawn inside each cell when a grid is rendered as text.
pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: GridCoordinate) -> String {
        String::from("   ")
    }
}

/// Marks the start and end of a search, leaving every other cell blank.
#[derive(Debug, Copy, Clone)]
pub struct StartEndPointsDisplay {
    start: GridCoordinate,
    end: GridCoordinate,
}
impl StartEndPointsDisplay {
    pub fn new(start: GridCoordinate, end: GridCoordinate) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if coord == self.start {
            String::from(" S ")
        } else if coord == self.end {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

struct EmptyDisplay;
impl GridDisplay for EmptyDisplay {}

/// Box drawing text of the maze, filling cell bodies from `displayer`.
pub fn render_grid(grid: &Grid, displayer: &dyn GridDisplay) -> String {
    const WALL_L: &str = "╴";
    const WALL_R: &str = "╶";
    const WALL_U: &str = "╵";
    const WALL_D: &str = "╷";
    const WALL_LR_3: &str = "───";
    const WALL_LR: &str = "─";
    const WALL_UD: &str = "│";
    const WALL_LD: &str = "┐";
    const WALL_RU: &str = "└";
    const WALL_LU: &str = "┘";
    const WALL_RD: &str = "┌";
    const WALL_LRU: &str = "┴";
    const WALL_LRD: &str = "┬";
    const WALL_LRUD: &str = "┼";
    const WALL_RUD: &str = "├";
    const WALL_LUD: &str = "┤";

    let Width(columns_count) = grid.width();
    let Height(rows_count) = grid.height();

    // Start by special case rendering the text for the north most boundary
    let mut output = String::from(WALL_RD);
    for index in 0..columns_count {
        let coord = GridCoordinate::new(index as u32, 0);
        output.push_str(WALL_LR_3);
        let is_east_open = grid.is_neighbour_open(coord, CompassPrimary::East);
        if is_east_open {
            output.push_str(WALL_LR);
        } else if index == columns_count - 1 {
            output.push_str(WALL_LD);
        } else {
            output.push_str(WALL_LRD);
        }
    }
    output.push('\n');

    for (index_row, row) in grid.iter_row().enumerate() {

        let is_last_row = index_row == (rows_count - 1);

        // The west most boundary of the row is a special case.
        // The top section of each cell was drawn by the previous row.
        let mut row_middle_section_render = String::from(WALL_UD);
        let mut row_bottom_section_render = String::new();

        for (index_column, cell_coord) in row.into_iter().enumerate() {

            let is_first_column = index_column == 0;
            let is_last_column = index_column == (columns_count - 1);
            let east_open = grid.is_neighbour_open(cell_coord, CompassPrimary::East);
            let south_open = grid.is_neighbour_open(cell_coord, CompassPrimary::South);

            // Each cell uses the southern wall of the cell above as its northern wall, so
            // only the body, the eastern boundary and the southern boundary are drawn here.
            row_middle_section_render.push_str(&displayer.render_cell_body(cell_coord));
            row_middle_section_render.push_str(if east_open { " " } else { WALL_UD });

            if is_first_column {
                row_bottom_section_render = if is_last_row {
                    String::from(WALL_RU)
                } else if south_open {
                    String::from(WALL_UD)
                } else {
                    String::from(WALL_RUD)
                };
            }
            row_bottom_section_render.push_str(if south_open { "   " } else { WALL_LR_3 });

            let corner = match (is_last_row, is_last_column) {
                (true, true) => WALL_LU,
                (true, false) => if east_open { WALL_LR } else { WALL_LRU },
                (false, true) => if south_open { WALL_UD } else { WALL_LUD },
                (false, false) => {
                    let access_se_from_east =
                        grid.neighbour_at_direction(cell_coord, CompassPrimary::East)
                            .map_or(false,
                                    |c| grid.is_neighbour_open(c, CompassPrimary::South));
                    let access_se_from_south =
                        grid.neighbour_at_direction(cell_coord, CompassPrimary::South)
                            .map_or(false,
                                    |c| grid.is_neighbour_open(c, CompassPrimary::East));
                    let show_right_section = !access_se_from_east;
                    let show_down_section = !access_se_from_south;
                    let show_up_section = !east_open;
                    let show_left_section = !south_open;

                    match (show_left_section,
                           show_right_section,
                           show_up_section,
                           show_down_section) {
                        (true, true, true, true) => WALL_LRUD,
                        (true, true, true, false) => WALL_LRU,
                        (true, true, false, true) => WALL_LRD,
                        (true, false, true, true) => WALL_LUD,
                        (false, true, true, true) => WALL_RUD,
                        (true, true, false, false) => WALL_LR,
                        (false, false, true, true) => WALL_UD,
                        (false, true, true, false) => WALL_RU,
                        (true, false, false, true) => WALL_LD,
                        (true, false, true, false) => WALL_LU,
                        (false, true, false, true) => WALL_RD,
                        (true, false, false, false) => WALL_L,
                        (false, true, false, false) => WALL_R,
                        (false, false, true, false) => WALL_U,
                        (false, false, false, true) => WALL_D,
                        _ => " ",
                    }
                }
            };

            row_bottom_section_render.push_str(corner);
        }

        output.push_str(&row_middle_section_render);
        output.push('\n');
        output.push_str(&row_bottom_section_render);
        output.push('\n');
    }

    output
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_grid(self, &EmptyDisplay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gc(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    #[test]
    fn closed_single_cell() {
        let g = Grid::with_size(Width(1), Height(1)).unwrap();
        assert_eq!(g.to_string(), "┌───┐\n│   │\n└───┘\n");
    }

    #[test]
    fn open_passage_has_no_wall_glyph() {
        let mut g = Grid::with_size(Width(2), Height(1)).unwrap();
        g.remove_wall(gc(0, 0), gc(1, 0));
        assert_eq!(g.to_string(), "┌───────┐\n│       │\n└───────┘\n");
    }

    #[test]
    fn vertical_passage() {
        let mut g = Grid::with_size(Width(1), Height(2)).unwrap();
        g.remove_wall(gc(0, 0), gc(0, 1));
        assert_eq!(g.to_string(), "┌───┐\n│   │\n│   │\n│   │\n└───┘\n");
    }

    #[test]
    fn markers_fill_cell_bodies() {
        let mut g = Grid::with_size(Width(3), Height(1)).unwrap();
        g.remove_wall(gc(0, 0), gc(1, 0));
        g.remove_wall(gc(1, 0), gc(2, 0));
        let text = render_grid(&g, &StartEndPointsDisplay::new(gc(0, 0), gc(2, 0)));
        assert!(text.contains("│ S       E │"), "unexpected rendering:\n{}", text);
    }

    #[test]
    fn start_end_display_leaves_other_cells_blank() {
        let display = StartEndPointsDisplay::new(gc(0, 0), gc(1, 1));
        assert_eq!(display.render_cell_body(gc(0, 0)), " S ");
        assert_eq!(display.render_cell_body(gc(1, 1)), " E ");
        assert_eq!(display.render_cell_body(gc(1, 0)), "   ");
    }
}
