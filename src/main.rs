use crossterm::tty::IsTty;
use docopt::Docopt;
use log::{info, warn};
use serde_derive::Deserialize;
use maze_pathing::{
    cells::GridCoordinate,
    config::{MazeConfig, MazeConfigBuilder},
    generators,
    grid::Grid,
    pathing::SearchStrategy,
    renderers::{NullRenderer, TextRenderer},
    units::{Height, Width},
};
use std::{
    fs::File,
    io,
    io::prelude::*,
    time::Duration,
};

const USAGE: &str = "Maze Pathing

Carve a perfect maze with the recursive backtracker, then search it for a path.

Usage:
    maze_driver -h | --help
    maze_driver [bfs|dfs] [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--start-x=<x> --start-y=<y>] [--end-x=<x> --end-y=<y>] [--animate] [--delay-ms=<ms>] [--block-passages=<n>] [--save-edges=<path>] [--text-out=<path>]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 20].
    --grid-height=<h>      The grid height in a w*h grid [default: 20].
    --seed=<s>             Seed for the maze generator. Random if not given; the seed used is logged.
    --start-x=<x>          x coordinate of the path start [default: 0].
    --start-y=<y>          y coordinate of the path start [default: 0].
    --end-x=<x>            x coordinate of the path end. Defaults to the right most column.
    --end-y=<y>            y coordinate of the path end. Defaults to the bottom row.
    --animate              Redraw the maze after every search step.
    --delay-ms=<ms>        Pause between animation frames in milliseconds [default: 50].
    --block-passages=<n>   Randomly choose n passages to wall up again, which can leave the end unreachable.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --text-out=<path>      Write the searched maze to a file instead of the terminal.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_bfs: bool,
    cmd_dfs: bool,
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_start_x: u32,
    flag_start_y: u32,
    flag_end_x: Option<u32>,
    flag_end_y: Option<u32>,
    flag_animate: bool,
    flag_delay_ms: u64,
    flag_block_passages: Option<usize>,
    flag_save_edges: String,
    flag_text_out: String,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::error_chain;
    error_chain! {

        links {
            Maze(::maze_pathing::errors::Error, ::maze_pathing::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let config = maze_config(&args)?;
    let mut rng = config.rng();
    let mut maze_grid = config.grid();

    generators::recursive_backtracker(&mut maze_grid, &mut rng, &mut NullRenderer);
    maze_grid.reset_visitation();
    info!("Carved a {}x{} maze with {} passages",
          maze_grid.width().0,
          maze_grid.height().0,
          maze_grid.links_count());

    if let Some(wall_count) = args.flag_block_passages {
        let rebuilt = generators::rebuild_random_walls(&mut maze_grid, wall_count, &mut rng);
        info!("Walled up {} passages", rebuilt);
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze_grid, &args.flag_save_edges)?;
    }

    let out: Box<dyn Write> = if args.flag_text_out.is_empty() {
        Box::new(io::stdout())
    } else {
        Box::new(File::create(&args.flag_text_out)
            .chain_err(|| format!("Failed to create text output file {}", args.flag_text_out))?)
    };

    let mut renderer = TextRenderer::new(&maze_grid, out).mark_start_end(config.start(), config.end());
    if args.flag_animate {
        let to_terminal = args.flag_text_out.is_empty() && io::stdout().is_tty();
        renderer = renderer.animated(config.step_delay()).clear_between_frames(to_terminal);
    }

    info!("Searching {} -> {} {}", config.start(), config.end(), config.strategy());
    let result = config.strategy().search(&maze_grid, config.start(), config.end(), &mut renderer);

    if result.found {
        info!("Visited {} cells to find a path of {} steps",
              result.visit_order.len(),
              result.path.len() - 1);
    } else {
        warn!("No path from {} to {} after visiting {} cells",
              config.start(),
              config.end(),
              result.visit_order.len());
    }

    Ok(())
}

fn maze_config(args: &MazeArgs) -> Result<MazeConfig> {
    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let strategy = if args.cmd_dfs {
        SearchStrategy::DepthFirst
    } else {
        SearchStrategy::BreadthFirst
    };

    // Pick the seed here rather than leaving it to the rng so that it can be logged and the
    // same maze carved again.
    let seed = args.flag_seed.unwrap_or_else(rand::random);
    info!("Maze seed: {}", seed);

    let start = GridCoordinate::new(args.flag_start_x, args.flag_start_y);
    let end = match (args.flag_end_x, args.flag_end_y) {
        (None, None) => None,
        (end_x, end_y) => {
            let last_x = width.saturating_sub(1) as u32;
            let last_y = height.saturating_sub(1) as u32;
            Some(GridCoordinate::new(end_x.unwrap_or(last_x), end_y.unwrap_or(last_y)))
        }
    };

    let config = MazeConfigBuilder::new(Width(width), Height(height))
        .seed(Some(seed))
        .strategy(strategy)
        .step_delay(Duration::from_millis(args.flag_delay_ms))
        .start(Some(start))
        .end(end)
        .build()?;

    Ok(config)
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze_grid: &Grid, file_path: &str) -> Result<()> {

    let mut graph_data = format!("{} {}\n", maze_grid.size(), maze_grid.links_count());

    for (index_a, index_b) in maze_grid.iter_link_indices() {
        graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    info!("Saved maze passages to {}", file_path);

    Ok(())
}
