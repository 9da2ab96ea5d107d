use std::time::Duration;

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_dimensions::GridDimensions;
use crate::pathing::SearchStrategy;
use crate::units::{Height, Width};

/// Everything needed to carve one maze and search it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    dimensions: GridDimensions,
    seed: Option<u64>,
    step_delay: Duration,
    strategy: SearchStrategy,
    start: GridCoordinate,
    end: GridCoordinate,
}

impl MazeConfig {
    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Pause between animation frames. Only renderers use this; the algorithms never wait.
    #[inline]
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    #[inline]
    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> GridCoordinate {
        self.end
    }

    /// A grid of the configured size with every wall standing.
    pub fn grid(&self) -> Grid {
        Grid::new(self.dimensions)
    }

    /// The generator's random source: seeded when a seed is configured, otherwise from the
    /// operating system.
    pub fn rng(&self) -> XorShiftRng {
        match self.seed {
            Some(seed) => XorShiftRng::seed_from_u64(seed),
            None => XorShiftRng::from_entropy(),
        }
    }
}

/// Builds a `MazeConfig`, checking the grid size and that the start and end lie on it.
///
/// Unless set, the start is the top left cell and the end the bottom right one.
#[derive(Debug, Clone)]
pub struct MazeConfigBuilder {
    width: Width,
    height: Height,
    seed: Option<u64>,
    step_delay: Duration,
    strategy: SearchStrategy,
    start: Option<GridCoordinate>,
    end: Option<GridCoordinate>,
}

impl MazeConfigBuilder {
    pub fn new(width: Width, height: Height) -> MazeConfigBuilder {
        MazeConfigBuilder {
            width,
            height,
            seed: None,
            step_delay: Duration::from_millis(50),
            strategy: SearchStrategy::default(),
            start: None,
            end: None,
        }
    }

    pub fn seed(mut self, seed: Option<u64>) -> MazeConfigBuilder {
        self.seed = seed;
        self
    }

    pub fn step_delay(mut self, step_delay: Duration) -> MazeConfigBuilder {
        self.step_delay = step_delay;
        self
    }

    pub fn strategy(mut self, strategy: SearchStrategy) -> MazeConfigBuilder {
        self.strategy = strategy;
        self
    }

    pub fn start(mut self, start: Option<GridCoordinate>) -> MazeConfigBuilder {
        self.start = start;
        self
    }

    pub fn end(mut self, end: Option<GridCoordinate>) -> MazeConfigBuilder {
        self.end = end;
        self
    }

    pub fn build(self) -> Result<MazeConfig> {
        let dimensions = GridDimensions::new(self.width, self.height)?;

        let bottom_right = GridCoordinate::new(self.width.0 as u32 - 1, self.height.0 as u32 - 1);
        let start = self.start.unwrap_or_else(|| GridCoordinate::new(0, 0));
        let end = self.end.unwrap_or(bottom_right);
        dimensions.check_coordinate(start).chain_err(|| "invalid search start")?;
        dimensions.check_coordinate(end).chain_err(|| "invalid search end")?;

        Ok(MazeConfig {
            dimensions,
            seed: self.seed,
            step_delay: self.step_delay,
            strategy: self.strategy,
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_search_corner_to_corner() {
        let config = MazeConfigBuilder::new(Width(4), Height(3)).build().unwrap();
        assert_eq!(config.start(), GridCoordinate::new(0, 0));
        assert_eq!(config.end(), GridCoordinate::new(3, 2));
        assert_eq!(config.strategy(), SearchStrategy::BreadthFirst);
        assert_eq!(config.seed(), None);
        assert_eq!(config.grid().size(), 12);
    }

    #[test]
    fn degenerate_sizes_are_rejected() {
        assert!(MazeConfigBuilder::new(Width(0), Height(3)).build().is_err());
        assert!(MazeConfigBuilder::new(Width(3), Height(0)).build().is_err());
    }

    #[test]
    fn off_grid_endpoints_are_rejected() {
        let err = MazeConfigBuilder::new(Width(3), Height(3))
            .end(Some(GridCoordinate::new(3, 0)))
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid search end");
        match *err.kind() {
            ErrorKind::Msg(_) => {}
            ref other => panic!("unexpected error kind {:?}", other),
        }
        assert!(err.iter().any(|cause| cause.to_string().contains("outside of the 3x3 grid")));

        assert!(MazeConfigBuilder::new(Width(3), Height(3))
            .start(Some(GridCoordinate::new(0, 7)))
            .build()
            .is_err());
    }

    #[test]
    fn seeded_rngs_repeat() {
        let config = MazeConfigBuilder::new(Width(5), Height(5))
            .seed(Some(8))
            .strategy(SearchStrategy::DepthFirst)
            .step_delay(Duration::from_millis(0))
            .build()
            .unwrap();
        let first = config.rng().gen::<u64>();
        let second = config.rng().gen::<u64>();
        assert_eq!(first, second);
        assert_eq!(config.strategy(), SearchStrategy::DepthFirst);
        assert_eq!(config.step_delay(), Duration::from_millis(0));
    }
}
