//! Character-cell display surface.
//!
//! A `ConsoleBuffer` is a fixed grid of `(char, color)` cells with a text cursor, the same model
//! a VGA text console or a curses screen exposes. Games draw into it through `TextSurface`; a
//! presenter (the pixels window, a test, or a terminal dump) reads the cells back out.

pub const CONSOLE_ROWS: u16 = 25;
pub const CONSOLE_COLS: u16 = 80;

/// Attribute byte: low nibble is the foreground palette index, high nibble the background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8);

impl Color {
    pub const fn new(fg: u8, bg: u8) -> Self {
        Self((fg & 0x0F) | ((bg & 0x07) << 4))
    }

    pub const fn fg(self) -> u8 {
        self.0 & 0x0F
    }

    pub const fn bg(self) -> u8 {
        (self.0 >> 4) & 0x0F
    }
}

// Foreground palette.
pub const FG_BLACK: u8 = 0x0;
pub const FG_BLUE: u8 = 0x1;
pub const FG_GREEN: u8 = 0x2;
pub const FG_CYAN: u8 = 0x3;
pub const FG_RED: u8 = 0x4;
pub const FG_MAGENTA: u8 = 0x5;
pub const FG_BROWN: u8 = 0x6;
pub const FG_LIGHT_GRAY: u8 = 0x7;
pub const FG_DARK_GRAY: u8 = 0x8;
pub const FG_LIGHT_BLUE: u8 = 0x9;
pub const FG_LIGHT_GREEN: u8 = 0xA;
pub const FG_LIGHT_CYAN: u8 = 0xB;
pub const FG_LIGHT_RED: u8 = 0xC;
pub const FG_LIGHT_MAGENTA: u8 = 0xD;
pub const FG_YELLOW: u8 = 0xE;
pub const FG_WHITE: u8 = 0xF;

// Background palette (only the low eight entries).
pub const BG_BLACK: u8 = 0x0;
pub const BG_BLUE: u8 = 0x1;
pub const BG_GREEN: u8 = 0x2;
pub const BG_CYAN: u8 = 0x3;
pub const BG_RED: u8 = 0x4;
pub const BG_MAGENTA: u8 = 0x5;
pub const BG_BROWN: u8 = 0x6;
pub const BG_LIGHT_GRAY: u8 = 0x7;

pub const DEFAULT_TEXT_COLOR: Color = Color::new(FG_LIGHT_GRAY, BG_BLACK);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: u8,
    pub color: Color,
}

impl Cell {
    pub const fn blank(color: Color) -> Self {
        Self { ch: b' ', color }
    }
}

/// Narrow drawing interface used by game code.
///
/// Coordinates are signed so callers can pass computed positions without pre-checking; anything
/// outside the grid is ignored, as are characters outside printable ASCII.
pub trait TextSurface {
    fn rows(&self) -> u16;
    fn cols(&self) -> u16;

    fn put_glyph(&mut self, row: i32, col: i32, ch: char, color: Color);

    /// Moves the cursor. Returns `false` (and leaves the cursor alone) when out of bounds.
    fn set_cursor(&mut self, row: i32, col: i32) -> bool;
    fn cursor(&self) -> (u16, u16);

    fn set_text_color(&mut self, color: Color);
    fn text_color(&self) -> Color;

    fn clear(&mut self);
    fn write_str(&mut self, text: &str);
    fn read_cell(&self, row: i32, col: i32) -> Option<Cell>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleBuffer {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
    cursor_row: u16,
    cursor_col: u16,
    text_color: Color,
    clear_color: Color,
}

impl Default for ConsoleBuffer {
    fn default() -> Self {
        Self::new(CONSOLE_ROWS, CONSOLE_COLS)
    }
}

impl ConsoleBuffer {
    pub fn new(rows: u16, cols: u16) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: vec![Cell::blank(DEFAULT_TEXT_COLOR); rows as usize * cols as usize],
            cursor_row: 0,
            cursor_col: 0,
            text_color: DEFAULT_TEXT_COLOR,
            clear_color: DEFAULT_TEXT_COLOR,
        }
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row contents as text, trailing blanks included.
    pub fn row_text(&self, row: u16) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = self.index(row, 0);
        self.cells[start..start + self.cols as usize]
            .iter()
            .map(|cell| cell.ch as char)
            .collect()
    }

    /// Every row joined with `\n`, trailing blanks trimmed.
    pub fn to_text(&self) -> String {
        (0..self.rows)
            .map(|row| self.row_text(row).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index(&self, row: u16, col: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    fn in_bounds(&self, row: i32, col: i32) -> Option<(u16, u16)> {
        if row < 0 || col < 0 || row >= self.rows as i32 || col >= self.cols as i32 {
            return None;
        }
        Some((row as u16, col as u16))
    }

    fn scroll(&mut self) {
        let width = self.cols as usize;
        self.cells.copy_within(width.., 0);
        let last = self.index(self.rows - 1, 0);
        let blank = Cell::blank(self.clear_color);
        self.cells[last..].fill(blank);
    }

    fn newline(&mut self) {
        self.cursor_col = 0;
        if self.cursor_row + 1 >= self.rows {
            self.scroll();
        } else {
            self.cursor_row += 1;
        }
    }

    fn put_byte(&mut self, byte: u8) {
        match byte {
            b'\n' => self.newline(),
            b'\r' => self.cursor_col = 0,
            0x08 => {
                self.cursor_col = self.cursor_col.saturating_sub(1);
                let idx = self.index(self.cursor_row, self.cursor_col);
                self.cells[idx] = Cell::blank(self.text_color);
            }
            _ => {
                let idx = self.index(self.cursor_row, self.cursor_col);
                self.cells[idx] = Cell {
                    ch: byte,
                    color: self.text_color,
                };
                if self.cursor_col + 1 >= self.cols {
                    self.newline();
                } else {
                    self.cursor_col += 1;
                }
            }
        }
    }
}

impl TextSurface for ConsoleBuffer {
    fn rows(&self) -> u16 {
        self.rows
    }

    fn cols(&self) -> u16 {
        self.cols
    }

    fn put_glyph(&mut self, row: i32, col: i32, ch: char, color: Color) {
        let Some((row, col)) = self.in_bounds(row, col) else {
            return;
        };
        if !(ch.is_ascii_graphic() || ch == ' ') {
            return;
        }
        let idx = self.index(row, col);
        self.cells[idx] = Cell {
            ch: ch as u8,
            color,
        };
    }

    fn set_cursor(&mut self, row: i32, col: i32) -> bool {
        match self.in_bounds(row, col) {
            Some((row, col)) => {
                self.cursor_row = row;
                self.cursor_col = col;
                true
            }
            None => false,
        }
    }

    fn cursor(&self) -> (u16, u16) {
        (self.cursor_row, self.cursor_col)
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn text_color(&self) -> Color {
        self.text_color
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::blank(self.clear_color));
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    fn write_str(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' || ch == '\r' || ch == '\u{8}' || ch.is_ascii_graphic() || ch == ' ' {
                self.put_byte(ch as u8);
            }
        }
    }

    fn read_cell(&self, row: i32, col: i32) -> Option<Cell> {
        let (row, col) = self.in_bounds(row, col)?;
        Some(self.cells[self.index(row, col)])
    }
}
