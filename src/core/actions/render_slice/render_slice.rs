use crate::core::actions::render_slice::ports::colour_map::ColourMap;
use crate::core::actions::render_slice::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::slice_budget::SliceBudget;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_params::ViewParameters;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

pub const PROGRESS_LINE_COLOUR: Colour = Colour::GREEN;

/// Top-left pixel of the next block to render.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ScanCursor {
    pub x: u32,
    pub y: u32,
}

impl ScanCursor {
    pub const START: Self = Self { x: 0, y: 0 };
}

/// The block cells of a canvas. Only whole blocks are scanned: a cell at `(x, y)` exists when
/// `x + block_size <= width` and `y + block_size <= height`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScanGrid {
    canvas: CanvasSize,
    block_size: u32,
}

impl ScanGrid {
    #[must_use]
    pub fn new(canvas: CanvasSize, block_size: u32) -> Self {
        Self {
            canvas,
            block_size: block_size.max(1),
        }
    }

    #[must_use]
    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.canvas.width() / self.block_size
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.canvas.height() / self.block_size
    }

    /// Width in pixels covered by whole blocks.
    #[must_use]
    pub fn scanned_width(&self) -> u32 {
        self.columns() * self.block_size
    }

    #[must_use]
    pub fn cell_count(&self) -> u64 {
        u64::from(self.columns()) * u64::from(self.rows())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    #[must_use]
    pub fn contains(&self, cursor: ScanCursor) -> bool {
        cursor.x % self.block_size == 0
            && cursor.y % self.block_size == 0
            && cursor.x / self.block_size < self.columns()
            && cursor.y / self.block_size < self.rows()
    }

    /// Cell after `cursor` in row-major order, or `None` past the last cell.
    #[must_use]
    pub fn next(&self, cursor: ScanCursor) -> Option<ScanCursor> {
        let next_x = cursor.x + self.block_size;
        if next_x / self.block_size < self.columns() {
            return Some(ScanCursor {
                x: next_x,
                y: cursor.y,
            });
        }

        let next = ScanCursor {
            x: 0,
            y: cursor.y + self.block_size,
        };

        self.contains(next).then_some(next)
    }

    /// Pixel row of the first block row that has no rendered cell yet when the scan resumes at
    /// `cursor`. Every such row is repainted later in the same frame.
    #[must_use]
    pub fn first_unrendered_row(&self, cursor: ScanCursor) -> Option<u32> {
        let row = if cursor.x == 0 {
            cursor.y
        } else {
            cursor.y + self.block_size
        };

        (row / self.block_size < self.rows()).then_some(row)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SliceOutcome {
    /// The budget ran out; the scan resumes at `next`.
    Yielded { next: ScanCursor, blocks: u64 },
    /// The last cell has been painted.
    Completed { blocks: u64 },
}

impl SliceOutcome {
    #[must_use]
    pub fn blocks(&self) -> u64 {
        match self {
            Self::Yielded { blocks, .. } | Self::Completed { blocks } => *blocks,
        }
    }
}

/// Paints block cells starting at `start` until `budget` is exhausted or the grid runs out.
///
/// Each cell is sampled once at its top-left pixel and filled with a single colour. The budget
/// is consulted after every block, so a slice always paints at least one block when the grid
/// has any. On yield a progress line is drawn across the first untouched block row.
pub fn render_slice<Alg, CMap, B>(
    buffer: &mut PixelBuffer,
    view: &ViewParameters,
    viewport: &Viewport,
    start: ScanCursor,
    algorithm: &Alg,
    colour_map: &CMap,
    budget: &B,
) -> SliceOutcome
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<u32>,
    B: SliceBudget,
{
    let canvas = buffer.canvas();
    let grid = ScanGrid::new(canvas, view.block_size());

    if !grid.contains(start) {
        return SliceOutcome::Completed { blocks: 0 };
    }

    let mut cursor = start;
    let mut blocks = 0;

    loop {
        let c = pixel_to_complex_coords(
            f64::from(cursor.x),
            f64::from(cursor.y),
            canvas,
            view,
            viewport,
        );
        let colour = colour_map.map(algorithm.compute(c));
        buffer.fill_block(cursor.x, cursor.y, grid.block_size(), colour);
        blocks += 1;

        let Some(next) = grid.next(cursor) else {
            return SliceOutcome::Completed { blocks };
        };

        if budget.is_exhausted() {
            if let Some(row) = grid.first_unrendered_row(next) {
                buffer.draw_horizontal_line(row, grid.scanned_width(), PROGRESS_LINE_COLOUR);
            }

            return SliceOutcome::Yielded { next, blocks };
        }

        cursor = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::slice_budget::Unlimited;
    use crate::core::data::complex::Complex;
    use std::cell::Cell;

    struct StubAlgorithm;

    impl FractalAlgorithm for StubAlgorithm {
        fn compute(&self, c: Complex) -> u32 {
            if c.real < 0.0 { 1 } else { 2 }
        }

        fn max_iterations(&self) -> u32 {
            2
        }
    }

    struct StubColourMap;

    impl ColourMap<u32> for StubColourMap {
        fn map(&self, value: u32) -> Colour {
            match value {
                1 => Colour::RED,
                _ => Colour::BLUE,
            }
        }

        fn display_name(&self) -> &str {
            "Stub"
        }
    }

    fn setup(width: u32, height: u32, block_size: u32) -> (PixelBuffer, ViewParameters, Viewport) {
        let canvas = CanvasSize::new(width, height).unwrap();
        let mut view = ViewParameters::default();
        view.set_pan(0.0, 0.0);
        view.set_resolution_factor(block_size);
        let viewport = Viewport::new(view.zoom(), canvas);

        (PixelBuffer::new(canvas), view, viewport)
    }

    fn count_budget(limit: u32) -> impl Fn() -> bool {
        let checks = Cell::new(0_u32);
        move || {
            checks.set(checks.get() + 1);
            checks.get() >= limit
        }
    }

    #[test]
    fn test_grid_only_contains_whole_blocks() {
        let grid = ScanGrid::new(CanvasSize::new(10, 7).unwrap(), 3);

        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cell_count(), 6);
        assert!(grid.contains(ScanCursor { x: 6, y: 3 }));
        assert!(!grid.contains(ScanCursor { x: 9, y: 0 }));
        assert!(!grid.contains(ScanCursor { x: 1, y: 0 }));
    }

    #[test]
    fn test_grid_next_walks_row_major() {
        let grid = ScanGrid::new(CanvasSize::new(4, 4).unwrap(), 2);

        let mut visited = vec![ScanCursor::START];
        while let Some(next) = grid.next(*visited.last().unwrap()) {
            visited.push(next);
        }

        assert_eq!(
            visited,
            vec![
                ScanCursor { x: 0, y: 0 },
                ScanCursor { x: 2, y: 0 },
                ScanCursor { x: 0, y: 2 },
                ScanCursor { x: 2, y: 2 },
            ]
        );
    }

    #[test]
    fn test_canvas_narrower_than_block_has_no_cells() {
        let grid = ScanGrid::new(CanvasSize::new(3, 20).unwrap(), 4);

        assert!(grid.is_empty());
        assert!(!grid.contains(ScanCursor::START));
    }

    #[test]
    fn test_unlimited_budget_completes_in_one_slice() {
        let (mut buffer, view, viewport) = setup(8, 6, 2);

        let outcome = render_slice(
            &mut buffer,
            &view,
            &viewport,
            ScanCursor::START,
            &StubAlgorithm,
            &StubColourMap,
            &Unlimited,
        );

        assert_eq!(outcome, SliceOutcome::Completed { blocks: 12 });
        assert_eq!(buffer.pixel(0, 0), Some(Colour::RED));
        assert_eq!(buffer.pixel(1, 1), Some(Colour::RED));
        assert_eq!(buffer.pixel(7, 5), Some(Colour::BLUE));
    }

    #[test]
    fn test_exhausted_budget_still_paints_one_block() {
        let (mut buffer, view, viewport) = setup(8, 8, 4);
        let exhausted = || true;

        let outcome = render_slice(
            &mut buffer,
            &view,
            &viewport,
            ScanCursor::START,
            &StubAlgorithm,
            &StubColourMap,
            &exhausted,
        );

        assert_eq!(
            outcome,
            SliceOutcome::Yielded {
                next: ScanCursor { x: 4, y: 0 },
                blocks: 1
            }
        );
        assert_eq!(buffer.pixel(3, 3), Some(Colour::RED));
        assert_eq!(buffer.pixel(4, 0), Some(Colour::BLACK));
    }

    #[test]
    fn test_yield_draws_progress_line_below_partial_row() {
        let (mut buffer, view, viewport) = setup(8, 8, 2);

        let outcome = render_slice(
            &mut buffer,
            &view,
            &viewport,
            ScanCursor::START,
            &StubAlgorithm,
            &StubColourMap,
            &count_budget(2),
        );

        assert_eq!(
            outcome,
            SliceOutcome::Yielded {
                next: ScanCursor { x: 4, y: 0 },
                blocks: 2
            }
        );
        assert_eq!(buffer.pixel(0, 0), Some(Colour::RED));
        assert_eq!(buffer.pixel(5, 2), Some(PROGRESS_LINE_COLOUR));
        assert_eq!(buffer.pixel(0, 2), Some(PROGRESS_LINE_COLOUR));
        assert_eq!(buffer.pixel(0, 1), Some(Colour::RED));
    }

    #[test]
    fn test_resumed_slices_match_single_slice() {
        let (mut whole, view, viewport) = setup(13, 10, 3);
        render_slice(
            &mut whole,
            &view,
            &viewport,
            ScanCursor::START,
            &StubAlgorithm,
            &StubColourMap,
            &Unlimited,
        );

        let (mut sliced, _, _) = setup(13, 10, 3);
        let mut cursor = ScanCursor::START;
        let mut slices = 0;
        loop {
            slices += 1;
            match render_slice(
                &mut sliced,
                &view,
                &viewport,
                cursor,
                &StubAlgorithm,
                &StubColourMap,
                &count_budget(1),
            ) {
                SliceOutcome::Yielded { next, .. } => cursor = next,
                SliceOutcome::Completed { .. } => break,
            }
        }

        assert_eq!(slices, 12);
        assert_eq!(sliced.buffer(), whole.buffer());
    }

    #[test]
    fn test_start_outside_grid_completes_without_painting() {
        let (mut buffer, view, viewport) = setup(4, 4, 2);
        let before = buffer.clone();

        let outcome = render_slice(
            &mut buffer,
            &view,
            &viewport,
            ScanCursor { x: 4, y: 0 },
            &StubAlgorithm,
            &StubColourMap,
            &Unlimited,
        );

        assert_eq!(outcome, SliceOutcome::Completed { blocks: 0 });
        assert_eq!(buffer.buffer(), before.buffer());
    }
}
