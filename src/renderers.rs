//! Visualisation hooks. The generator and the path searches report each step to a
//! `Renderer`; what is drawn and how fast is entirely up to the implementation.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use fnv::FnvHashMap;
use log::warn;

use crate::cells::GridCoordinate;
use crate::grid::Grid;
use crate::grid_displays::{render_grid, GridDisplay, StartEndPointsDisplay};

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum VisualState {
    /// Just reached: carved into during generation or taken off the frontier during a search.
    Exploring,
    /// Finished with: backtracked out of, or fully expanded.
    Settled,
    /// Part of the reconstructed path.
    FinalPath,
}

/// Receives synchronous callbacks as the algorithms run. The algorithm carries on once a
/// callback returns.
pub trait Renderer {
    fn on_cell_visited(&mut self, _cell: GridCoordinate, _state: VisualState) {}

    /// Called once at the end of every search.
    fn on_search_complete(&mut self, _found: bool, _path: &[GridCoordinate]) {}
}

impl<'a, R: Renderer + ?Sized> Renderer for &'a mut R {
    fn on_cell_visited(&mut self, cell: GridCoordinate, state: VisualState) {
        (**self).on_cell_visited(cell, state)
    }

    fn on_search_complete(&mut self, found: bool, path: &[GridCoordinate]) {
        (**self).on_search_complete(found, path)
    }
}

/// Ignores everything.
#[derive(Debug, Copy, Clone, Default)]
pub struct NullRenderer;
impl Renderer for NullRenderer {}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RenderEvent {
    CellVisited(GridCoordinate, VisualState),
    SearchComplete { found: bool, path: Vec<GridCoordinate> },
}

/// Keeps every callback in order, for replaying an animation later or inspecting in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    pub fn new() -> RecordingRenderer {
        RecordingRenderer::default()
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// The cells reported in a given state, in callback order.
    pub fn cells_in_state(&self, state: VisualState) -> Vec<GridCoordinate> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                RenderEvent::CellVisited(coord, s) if s == state => Some(coord),
                _ => None,
            })
            .collect()
    }

    pub fn completions(&self) -> Vec<(bool, &[GridCoordinate])> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                RenderEvent::SearchComplete { found, ref path } => Some((found, path.as_slice())),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn on_cell_visited(&mut self, cell: GridCoordinate, state: VisualState) {
        self.events.push(RenderEvent::CellVisited(cell, state));
    }

    fn on_search_complete(&mut self, found: bool, path: &[GridCoordinate]) {
        self.events.push(RenderEvent::SearchComplete {
            found,
            path: path.to_vec(),
        });
    }
}

/// Draws a search over a maze as box drawing text.
///
/// When animated, a frame is written after every callback followed by a pause of
/// `step_delay`, each one redrawn over the last unless `clear_between_frames(false)` is set
/// (for output that is not a terminal). Otherwise only the finished search is drawn.
pub struct TextRenderer<'g, W: Write> {
    grid: &'g Grid,
    out: W,
    animate: bool,
    clear_between_frames: bool,
    step_delay: Duration,
    states: FnvHashMap<GridCoordinate, VisualState>,
    markers: Option<StartEndPointsDisplay>,
    frames_drawn: usize,
}

impl<'g, W: Write> TextRenderer<'g, W> {
    pub fn new(grid: &'g Grid, out: W) -> TextRenderer<'g, W> {
        TextRenderer {
            grid,
            out,
            animate: false,
            clear_between_frames: true,
            step_delay: Duration::from_millis(0),
            states: FnvHashMap::default(),
            markers: None,
            frames_drawn: 0,
        }
    }

    pub fn animated(mut self, step_delay: Duration) -> Self {
        self.animate = true;
        self.step_delay = step_delay;
        self
    }

    pub fn mark_start_end(mut self, start: GridCoordinate, end: GridCoordinate) -> Self {
        self.markers = Some(StartEndPointsDisplay::new(start, end));
        self
    }

    pub fn clear_between_frames(mut self, clear: bool) -> Self {
        self.clear_between_frames = clear;
        self
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_frame(&mut self) {
        let clear = self.animate && self.clear_between_frames;
        if let Err(e) = self.write_frame(clear) {
            warn!("Failed to draw maze frame: {}", e);
            return;
        }
        self.frames_drawn += 1;
    }

    fn write_frame(&mut self, clear: bool) -> io::Result<()> {
        let text = render_grid(self.grid, &*self);
        if clear {
            self.out.queue(MoveTo(0, 0))?.queue(Clear(ClearType::All))?;
        }
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}

impl<'g, W: Write> GridDisplay for TextRenderer<'g, W> {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if let Some(ref markers) = self.markers {
            let marker = markers.render_cell_body(coord);
            if !marker.trim().is_empty() {
                return marker;
            }
        }
        match self.states.get(&coord) {
            Some(VisualState::Exploring) => String::from(" * "),
            Some(VisualState::Settled) => String::from(" ~ "),
            Some(VisualState::FinalPath) => String::from(" . "),
            None => String::from("   "),
        }
    }
}

impl<'g, W: Write> Renderer for TextRenderer<'g, W> {
    fn on_cell_visited(&mut self, cell: GridCoordinate, state: VisualState) {
        self.states.insert(cell, state);
        if self.animate {
            self.draw_frame();
            if self.step_delay > Duration::from_millis(0) {
                thread::sleep(self.step_delay);
            }
        }
    }

    fn on_search_complete(&mut self, found: bool, path: &[GridCoordinate]) {
        self.draw_frame();
        let summary = if found {
            format!("Path found: {} cells, {} steps", path.len(), path.len().saturating_sub(1))
        } else {
            String::from("No path found")
        };
        if let Err(e) = writeln!(self.out, "{}", summary) {
            warn!("Failed to write search summary: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Height, Width};

    fn gc(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    #[test]
    fn recording_keeps_callback_order() {
        let mut recorder = RecordingRenderer::new();
        recorder.on_cell_visited(gc(0, 0), VisualState::Exploring);
        recorder.on_cell_visited(gc(0, 0), VisualState::Settled);
        recorder.on_cell_visited(gc(1, 0), VisualState::Exploring);
        recorder.on_search_complete(true, &[gc(0, 0), gc(1, 0)]);

        assert_eq!(recorder.events().len(), 4);
        assert_eq!(recorder.cells_in_state(VisualState::Exploring), vec![gc(0, 0), gc(1, 0)]);
        assert_eq!(recorder.cells_in_state(VisualState::Settled), vec![gc(0, 0)]);
        assert_eq!(recorder.completions(), vec![(true, &[gc(0, 0), gc(1, 0)][..])]);

        recorder.clear();
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn renderers_can_be_passed_by_mutable_reference() {
        fn visit<R: Renderer>(mut renderer: R) {
            renderer.on_cell_visited(GridCoordinate::new(2, 3), VisualState::FinalPath);
        }
        let mut recorder = RecordingRenderer::new();
        visit(&mut recorder);
        assert_eq!(recorder.cells_in_state(VisualState::FinalPath), vec![gc(2, 3)]);
    }

    #[test]
    fn text_renderer_draws_the_finished_search_once() {
        let mut g = Grid::with_size(Width(2), Height(1)).unwrap();
        g.remove_wall(gc(0, 0), gc(1, 0));

        let mut renderer = TextRenderer::new(&g, Vec::new());
        renderer.on_cell_visited(gc(0, 0), VisualState::Exploring);
        renderer.on_cell_visited(gc(1, 0), VisualState::Exploring);
        renderer.on_cell_visited(gc(0, 0), VisualState::FinalPath);
        renderer.on_cell_visited(gc(1, 0), VisualState::FinalPath);
        renderer.on_search_complete(true, &[gc(0, 0), gc(1, 0)]);
        assert_eq!(renderer.frames_drawn(), 1);

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("│ .   . │"), "unexpected rendering:\n{}", text);
        assert!(text.ends_with("Path found: 2 cells, 1 steps\n"));
    }

    #[test]
    fn text_renderer_animation_draws_every_step() {
        let g = Grid::with_size(Width(2), Height(2)).unwrap();
        let mut renderer = TextRenderer::new(&g, Vec::new())
            .animated(Duration::from_millis(0))
            .mark_start_end(gc(0, 0), gc(1, 1));
        renderer.on_cell_visited(gc(0, 0), VisualState::Exploring);
        renderer.on_cell_visited(gc(0, 0), VisualState::Settled);
        renderer.on_search_complete(false, &[]);
        assert_eq!(renderer.frames_drawn(), 3);

        let mut redraw: Vec<u8> = Vec::new();
        redraw.queue(MoveTo(0, 0)).unwrap().queue(Clear(ClearType::All)).unwrap();
        let output = renderer.into_inner();
        assert!(output.starts_with(&redraw));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(" S "));
        assert!(text.contains(" E "));
        assert!(text.ends_with("No path found\n"));
    }

    #[test]
    fn animation_into_a_file_has_no_terminal_commands() {
        let g = Grid::with_size(Width(2), Height(2)).unwrap();
        let mut renderer = TextRenderer::new(&g, Vec::new())
            .animated(Duration::from_millis(0))
            .clear_between_frames(false);
        renderer.on_cell_visited(gc(0, 0), VisualState::Exploring);
        renderer.on_cell_visited(gc(1, 0), VisualState::Exploring);
        renderer.on_search_complete(false, &[]);
        assert_eq!(renderer.frames_drawn(), 3);

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(!text.contains('\x1b'), "escape sequence in output:\n{:?}", text);
        assert_eq!(text.matches('┌').count(), 3);
    }

    #[test]
    fn markers_take_precedence_over_search_state() {
        let g = Grid::with_size(Width(3), Height(1)).unwrap();
        let mut renderer = TextRenderer::new(&g, Vec::new()).mark_start_end(gc(0, 0), gc(2, 0));
        renderer.on_cell_visited(gc(0, 0), VisualState::Settled);
        renderer.on_cell_visited(gc(1, 0), VisualState::Settled);
        assert_eq!(renderer.render_cell_body(gc(0, 0)), " S ");
        assert_eq!(renderer.render_cell_body(gc(1, 0)), " ~ ");
        assert_eq!(renderer.render_cell_body(gc(2, 0)), " E ");
    }
}
