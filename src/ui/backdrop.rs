#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::engine::{Canvas, Ink, VariantKind};
use crate::ui::theme::{Palette, ThemeMode};

/// Blits the engine canvas into the terminal buffer: vertical sky gradient,
/// glyph cells colored by ink role, and the lightning flash blended over the
/// background. The palette is resolved from the theme mode here, on every
/// render.
pub struct Backdrop<'a> {
    pub canvas: &'a Canvas,
    pub kind: Option<VariantKind>,
    pub mode: ThemeMode,
}

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = Palette::for_mode(self.mode);
        let (top, bottom) = palette.sky(self.kind);
        let flash = self.canvas.flash();
        let flash_color = color_to_rgb(palette.flash());

        for y in area.top()..area.bottom() {
            let t = gradient_ratio(area, y);
            let mut bg = lerp_rgb(color_to_rgb(top), color_to_rgb(bottom), t);
            if flash > 0.0 {
                bg = lerp_rgb(bg, flash_color, flash);
            }
            let bg = to_color(bg);
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ').set_bg(bg);
                }
            }
        }

        for (col, row, cell) in self.canvas.iter() {
            if cell.ink == Ink::None {
                continue;
            }
            let x = area.x.saturating_add(col);
            let y = area.y.saturating_add(row);
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            if let Some(buf_cell) = buf.cell_mut((x, y)) {
                let bg = buf_cell.bg;
                buf_cell
                    .set_symbol(&cell.glyph.to_string())
                    .set_fg(palette.ink(cell.ink))
                    .set_bg(bg);
            }
        }
    }
}

fn gradient_ratio(area: Rect, y: u16) -> f32 {
    if area.height <= 1 {
        0.0
    } else {
        f32::from(y - area.top()) / f32::from(area.height - 1)
    }
}

fn color_to_rgb(c: Color) -> (f32, f32, f32) {
    match c {
        Color::Rgb(r, g, b) => (f32::from(r), f32::from(g), f32::from(b)),
        Color::Black => (0., 0., 0.),
        Color::DarkGray => (85., 85., 85.),
        Color::Gray => (170., 170., 170.),
        Color::White => (255., 255., 255.),
        _ => (0., 0., 0.),
    }
}

fn lerp_rgb(a: (f32, f32, f32), b: (f32, f32, f32), t: f32) -> (f32, f32, f32) {
    (
        a.0 + (b.0 - a.0) * t,
        a.1 + (b.1 - a.1) * t,
        a.2 + (b.2 - a.2) * t,
    )
}

fn to_color(rgb: (f32, f32, f32)) -> Color {
    Color::Rgb(
        rgb.0.clamp(0.0, 255.0) as u8,
        rgb.1.clamp(0.0, 255.0) as u8,
        rgb.2.clamp(0.0, 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AnimationConfig, AnimationSession, Viewport};

    #[test]
    fn gradient_ratio_handles_single_row() {
        let area = Rect::new(0, 0, 80, 1);
        assert_eq!(gradient_ratio(area, 0), 0.0);
    }

    #[test]
    fn gradient_ratio_spans_zero_to_one() {
        let area = Rect::new(0, 0, 80, 10);
        assert_eq!(gradient_ratio(area, 0), 0.0);
        assert_eq!(gradient_ratio(area, 9), 1.0);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = lerp_rgb((0.0, 0.0, 0.0), (100.0, 100.0, 100.0), 0.5);
        assert_eq!(to_color(mid), Color::Rgb(50, 50, 50));
    }

    #[test]
    fn to_color_clamps_out_of_range_channels() {
        assert_eq!(to_color((300.0, -5.0, 128.0)), Color::Rgb(255, 0, 128));
    }

    #[test]
    fn blit_paints_background_and_glyphs() {
        let mut session = AnimationSession::new(
            Viewport::new(800.0, 600.0),
            40,
            12,
            AnimationConfig::default(),
        );
        session.start("Rain", 0);
        assert!(session.frame(100));

        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        Backdrop {
            canvas: session.canvas(),
            kind: session.variant(),
            mode: ThemeMode::Dark,
        }
        .render(area, &mut buf);

        // every cell has a background; at least one carries a rain glyph
        let mut glyphs = 0;
        for y in 0..12 {
            for x in 0..40 {
                let cell = &buf[(x, y)];
                assert_ne!(cell.bg, Color::Reset);
                if cell.symbol() != " " {
                    glyphs += 1;
                }
            }
        }
        assert!(glyphs > 0);
    }
}
