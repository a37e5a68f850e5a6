//! Engine-owned drawing surface.
//!
//! Simulations paint in a continuous logical coordinate space (pseudo-pixels)
//! while the canvas stores a grid of glyph cells the UI blits into the
//! terminal. Out-of-range plots are dropped silently; a collapsed viewport is
//! clamped to 1x1 so randomized positions never go NaN.

/// Logical pixels covered by one terminal cell.
pub const CELL_PX_W: f32 = 8.0;
pub const CELL_PX_H: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_dim(width),
            height: sanitize_dim(height),
        }
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Viewport for a terminal grid, one cell = 8x16 logical pixels.
#[must_use]
pub fn viewport_for_grid(cols: u16, rows: u16) -> Viewport {
    Viewport::new(f32::from(cols) * CELL_PX_W, f32::from(rows) * CELL_PX_H)
}

fn sanitize_dim(value: f32) -> f32 {
    if value.is_finite() && value >= 1.0 {
        value
    } else {
        1.0
    }
}

/// Semantic color role of a painted cell. The palette maps roles to concrete
/// colors at blit time, so the theme is consulted on every painted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    None,
    Drop,
    Ripple,
    Puddle,
    Flake,
    SnowBank,
    Sun,
    SunRay,
    Cloud,
    StormCloud,
    Bird,
    Mist,
    Streak,
    Grass,
    Bolt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub ink: Ink,
}

const BLANK: Cell = Cell {
    glyph: ' ',
    ink: Ink::None,
};

#[derive(Debug, Clone)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    viewport: Viewport,
    cells: Vec<Cell>,
    flash: f32,
}

impl Canvas {
    #[must_use]
    pub fn new(cols: u16, rows: u16, viewport: Viewport) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            viewport,
            cells: vec![BLANK; usize::from(cols) * usize::from(rows)],
            flash: 0.0,
        }
    }

    #[must_use]
    pub fn cols(&self) -> u16 {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn flash(&self) -> f32 {
        self.flash
    }

    pub fn set_flash(&mut self, level: f32) {
        self.flash = level.clamp(0.0, 1.0);
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
        self.flash = 0.0;
    }

    pub fn resize(&mut self, cols: u16, rows: u16, viewport: Viewport) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
        self.viewport = viewport;
        self.cells = vec![BLANK; usize::from(self.cols) * usize::from(self.rows)];
        self.flash = 0.0;
    }

    #[must_use]
    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[usize::from(row) * usize::from(self.cols) + usize::from(col)])
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, Cell)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let col = (i % usize::from(cols)) as u16;
            let row = (i / usize::from(cols)) as u16;
            (col, row, *cell)
        })
    }

    #[must_use]
    pub fn ink_count(&self, ink: Ink) -> usize {
        self.cells.iter().filter(|cell| cell.ink == ink).count()
    }

    fn cell_width(&self) -> f32 {
        self.viewport.width / f32::from(self.cols)
    }

    fn cell_height(&self) -> f32 {
        self.viewport.height / f32::from(self.rows)
    }

    fn index(&self, x: f32, y: f32) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        if x < 0.0 || y < 0.0 || x >= self.viewport.width || y >= self.viewport.height {
            return None;
        }
        let col = ((x / self.viewport.width) * f32::from(self.cols)) as usize;
        let row = ((y / self.viewport.height) * f32::from(self.rows)) as usize;
        let col = col.min(usize::from(self.cols) - 1);
        let row = row.min(usize::from(self.rows) - 1);
        Some(row * usize::from(self.cols) + col)
    }

    pub fn plot(&mut self, x: f32, y: f32, glyph: char, ink: Ink) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell { glyph, ink };
        }
    }

    /// Vertical span in logical coordinates, stepping one cell row at a time.
    pub fn vspan(&mut self, x: f32, y0: f32, y1: f32, glyph: char, ink: Ink) {
        let step = self.cell_height();
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let mut y = top;
        while y <= bottom {
            self.plot(x, y, glyph, ink);
            y += step;
        }
    }

    /// Horizontal span in logical coordinates.
    pub fn hspan(&mut self, x0: f32, x1: f32, y: f32, glyph: char, ink: Ink) {
        let step = self.cell_width();
        let (left, right) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let mut x = left;
        while x <= right {
            self.plot(x, y, glyph, ink);
            x += step;
        }
    }

    /// Straight stroke between two logical points.
    pub fn stroke(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, glyph: char, ink: Ink) {
        let dx = (x1 - x0) / self.cell_width();
        let dy = (y1 - y0) / self.cell_height();
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.plot(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t, glyph, ink);
        }
    }

    /// Filled disc with density falloff from the center; `levels` orders
    /// glyphs from densest to lightest.
    pub fn shaded_disc(&mut self, cx: f32, cy: f32, r: f32, levels: &[char], ink: Ink) {
        if levels.is_empty() || r <= 0.0 {
            return;
        }
        let cw = self.cell_width();
        let ch = self.cell_height();
        let col_min = ((cx - r) / cw).floor().max(0.0) as i32;
        let col_max = ((cx + r) / cw).ceil() as i32;
        let row_min = ((cy - r) / ch).floor().max(0.0) as i32;
        let row_max = ((cy + r) / ch).ceil() as i32;
        for row in row_min..=row_max {
            for col in col_min..=col_max {
                let x = (col as f32 + 0.5) * cw;
                let y = (row as f32 + 0.5) * ch;
                let dist = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt() / r;
                if dist <= 1.0 {
                    let level = ((dist * levels.len() as f32) as usize).min(levels.len() - 1);
                    self.plot(x, y, levels[level], ink);
                }
            }
        }
    }

    /// Elliptical outline, parametric sampling.
    pub fn ring(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, glyph: char, ink: Ink) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let circumference = (rx.max(ry) / self.cell_width()) * std::f32::consts::TAU;
        let steps = (circumference.ceil() as usize).clamp(8, 64);
        for i in 0..steps {
            let angle = i as f32 / steps as f32 * std::f32::consts::TAU;
            self.plot(cx + angle.cos() * rx, cy + angle.sin() * ry, glyph, ink);
        }
    }

    /// Fill a column from the bottom edge up to `height` logical pixels.
    pub fn fill_column_up(&mut self, x: f32, height: f32, glyph: char, ink: Ink) {
        if height <= 0.0 {
            return;
        }
        let top = (self.viewport.height - height).max(0.0);
        self.vspan(x, top, self.viewport.height - 0.001, glyph, ink);
    }
}
