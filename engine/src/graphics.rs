use crate::console::{ConsoleBuffer, TextSurface};
use crate::surface::SurfaceSize;

pub type Color = [u8; 4];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Pixel box of the console cell at `(row, col)`.
    pub fn for_cell(row: u32, col: u32) -> Self {
        Self::new(col * CELL_W, row * CELL_H, CELL_W, CELL_H)
    }
}

// A tiny block font (no external deps).
const GLYPH_W: u32 = 3;
const GLYPH_H: u32 = 5;

/// Pixel box of one console cell: the glyph plus one pixel of spacing on the right and bottom.
pub const CELL_W: u32 = GLYPH_W + 1;
pub const CELL_H: u32 = GLYPH_H + 1;

/// Classic 16-entry text-mode palette, indexed by the nibbles of a cell color.
pub const PALETTE: [Color; 16] = [
    [0, 0, 0, 255],
    [0, 0, 170, 255],
    [0, 170, 0, 255],
    [0, 170, 170, 255],
    [170, 0, 0, 255],
    [170, 0, 170, 255],
    [170, 85, 0, 255],
    [170, 170, 170, 255],
    [85, 85, 85, 255],
    [85, 85, 255, 255],
    [85, 255, 85, 255],
    [85, 255, 255, 255],
    [255, 85, 85, 255],
    [255, 85, 255, 255],
    [255, 255, 85, 255],
    [255, 255, 255, 255],
];

pub fn palette_rgba(index: u8) -> Color {
    PALETTE[(index & 0x0F) as usize]
}

/// 2D drawing interface the presenters rasterize through.
pub trait Renderer2d {
    fn begin_frame(&mut self, size: SurfaceSize);

    /// Opaque fill.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_glyph(&mut self, x: u32, y: u32, ch: char, color: Color, scale: u32);
}

/// CPU renderer that draws into an RGBA frame buffer.
pub struct CpuRenderer<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
}

impl<'a> CpuRenderer<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self { frame, size }
    }
}

impl Renderer2d for CpuRenderer<'_> {
    fn begin_frame(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let width = self.size.width;
        let height = self.size.height;

        let max_x = rect.x.saturating_add(rect.w).min(width);
        let max_y = rect.y.saturating_add(rect.h).min(height);
        if rect.x >= max_x || rect.y >= max_y {
            return;
        }
        if self.frame.len() < self.size.rgba_len() {
            return;
        }

        let stride = width as usize * 4;
        let row_bytes = (max_x - rect.x) as usize * 4;
        let mut row_start = rect.y as usize * stride + rect.x as usize * 4;

        for _ in rect.y..max_y {
            let row = &mut self.frame[row_start..row_start + row_bytes];
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
            row_start += stride;
        }
    }

    fn draw_glyph(&mut self, x: u32, y: u32, ch: char, color: Color, scale: u32) {
        let scale = scale.max(1);
        for (row, bits) in glyph_rows(ch).into_iter().enumerate() {
            let py0 = y.saturating_add((row as u32).saturating_mul(scale));
            for col in 0..GLYPH_W {
                let mask = 1u8 << (GLYPH_W - 1 - col);
                if (bits & mask) == 0 {
                    continue;
                }
                let px0 = x.saturating_add(col.saturating_mul(scale));
                self.fill_rect(Rect::new(px0, py0, scale, scale), color);
            }
        }
    }
}

/// Rasterizes every console cell: background box from the high nibble, glyph in the
/// foreground color from the low nibble.
pub fn draw_console(gfx: &mut dyn Renderer2d, console: &ConsoleBuffer) {
    let cols = console.cols() as usize;
    for (idx, cell) in console.cells().iter().enumerate() {
        let rect = Rect::for_cell((idx / cols) as u32, (idx % cols) as u32);
        gfx.fill_rect(rect, palette_rgba(cell.color.bg()));
        if cell.ch != b' ' {
            gfx.draw_glyph(rect.x, rect.y, cell.ch as char, palette_rgba(cell.color.fg()), 1);
        }
    }
}

fn glyph_rows(ch: char) -> [u8; GLYPH_H as usize] {
    let c = ch.to_ascii_uppercase();
    match c {
        ' ' => [0; GLYPH_H as usize],

        // Digits
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],

        // Letters
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b111, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b111, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b111, 0b101, 0b111, 0b110, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],

        // Punctuation
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        ';' => [0b000, 0b010, 0b000, 0b010, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '(' => [0b010, 0b100, 0b100, 0b100, 0b010],
        ')' => [0b010, 0b001, 0b001, 0b001, 0b010],
        '[' => [0b110, 0b100, 0b100, 0b100, 0b110],
        ']' => [0b011, 0b001, 0b001, 0b001, 0b011],
        '<' => [0b001, 0b010, 0b100, 0b010, 0b001],
        '>' => [0b100, 0b010, 0b001, 0b010, 0b100],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b111, 0b001, 0b010, 0b000, 0b010],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '\\' => [0b100, 0b100, 0b010, 0b001, 0b001],
        '|' => [0b010, 0b010, 0b010, 0b010, 0b010],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '*' => [0b101, 0b010, 0b111, 0b010, 0b101],
        '#' => [0b101, 0b111, 0b101, 0b111, 0b101],
        '^' => [0b010, 0b101, 0b000, 0b000, 0b000],
        '~' => [0b000, 0b011, 0b110, 0b000, 0b000],
        '\'' => [0b010, 0b010, 0b000, 0b000, 0b000],
        '"' => [0b101, 0b101, 0b000, 0b000, 0b000],
        '`' => [0b100, 0b010, 0b000, 0b000, 0b000],

        _ => [0b111, 0b001, 0b010, 0b000, 0b010], // '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{BG_BLACK, BG_BLUE, Color as CellColor, FG_WHITE, FG_YELLOW};

    #[test]
    fn fill_rect_clips_to_surface() {
        let size = SurfaceSize::new(4, 4);
        let mut buf = vec![0u8; size.rgba_len()];
        let mut gfx = CpuRenderer::new(&mut buf, size);
        gfx.fill_rect(Rect::new(2, 2, 10, 10), [1, 2, 3, 255]);

        let px = |x: usize, y: usize| &buf[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];
        assert_eq!(px(3, 3), &[1, 2, 3, 255]);
        assert_eq!(px(1, 1), &[0, 0, 0, 0]);
    }

    #[test]
    fn draw_console_paints_background_and_glyph() {
        let mut console = ConsoleBuffer::new(1, 2);
        console.put_glyph(0, 0, '1', CellColor::new(FG_YELLOW, BG_BLUE));
        console.put_glyph(0, 1, ' ', CellColor::new(FG_WHITE, BG_BLACK));

        let size = SurfaceSize::for_console(1, 2);
        let mut buf = vec![0u8; size.rgba_len()];
        let mut gfx = CpuRenderer::new(&mut buf, size);
        draw_console(&mut gfx, &console);

        let px = |x: u32, y: u32| {
            let idx = ((y * size.width + x) * 4) as usize;
            [buf[idx], buf[idx + 1], buf[idx + 2], buf[idx + 3]]
        };
        // '1' has its middle column lit on the first row and the spacing column stays background.
        assert_eq!(px(1, 0), palette_rgba(FG_YELLOW));
        assert_eq!(px(3, 0), palette_rgba(BG_BLUE));
        assert_eq!(px(CELL_W + 1, 1), palette_rgba(BG_BLACK));
    }

    #[test]
    fn lowercase_folds_to_uppercase_glyphs() {
        assert_eq!(glyph_rows('a'), glyph_rows('A'));
        assert_eq!(glyph_rows('\u{1}'), glyph_rows('?'));
    }
}
