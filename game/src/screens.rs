//! Screen art and the drawing routines that put game state on a `TextSurface`.

use engine::console::{
    BG_BLUE, BG_BROWN, BG_CYAN, BG_GREEN, BG_MAGENTA, BG_RED, Color, DEFAULT_TEXT_COLOR, FG_BLACK,
    FG_WHITE, FG_YELLOW, TextSurface,
};

use crate::animation::AnimationRegistry;
use crate::difficulty::Difficulty;
use crate::matrix::Grid;
use crate::session::GameSession;
use crate::shift::{display_col, display_row};

pub const TILE_ROWS: i32 = 5;
pub const TILE_COLS: i32 = 11;

pub const TITLE_HIGH_SCORE_POS: (i32, i32) = (1, 12);
pub const SCORE_POS: (i32, i32) = (3, 52);
pub const HIGH_SCORE_POS: (i32, i32) = (3, 64);
pub const GOAL_POS: (i32, i32) = (6, 57);
pub const GOAL_LABEL_POS: (i32, i32) = (7, 51);
pub const BANNER_ROW: i32 = 10;

pub const TITLE_SCREEN: &[&str] = &[
    "*=============================================================================*",
    "*High Score:                                                                  *",
    "*                                                                             *",
    "*                    #####    #####        ##    #####                        *",
    "*                   ##   ##  ##   ##     ####   ##   ##                       *",
    "*                       ##   ##   ##    ## ##    #####                        *",
    "*                     ##     ##   ##   #######  ##   ##                       *",
    "*                   #######   #####        ##    #####                        *",
    "*                                                                             *",
    "*                        ~ THE RETURN OF GAZOOL ~                             *",
    "*                                                                             *",
    "*    Gazool the tile-eater has crawled back out of the grid. Slide the tiles, *",
    "*    fuse equal numbers, and grow one tile big enough to scare it away.       *",
    "*                                                                             *",
    "*                                                                             *",
    "*                           [N]  New game                                     *",
    "*                           [I]  Instructions                                 *",
    "*                           [Q]  Quit                                         *",
    "*                                                                             *",
    "*                                                                             *",
    "*                                                                             *",
    "*                                                                             *",
    "*                                                                             *",
    "*                                                                             *",
    "*=============================================================================*",
];

pub const INSTRUCTIONS_SCREEN: &[&str] = &[
    "*=============================================================================*",
    "* HOW TO PLAY                                                                 *",
    "*                                                                             *",
    "* Every move slides all tiles on the board as far as they can go in one       *",
    "* direction. Two tiles with the same number that collide fuse into one tile   *",
    "* worth their sum, and the sum is added to your score. A tile fuses at most   *",
    "* once per move.                                                              *",
    "*                                                                             *",
    "* After every move that changes the board a new 2 or 4 appears on a random    *",
    "* empty cell. Reach the goal tile of your chosen difficulty to win. If the    *",
    "* board fills up and no two neighbours match, Gazool wins.                    *",
    "*                                                                             *",
    "* CONTROLS                                                                    *",
    "*                                                                             *",
    "*     W  or  UP ARROW       slide up                                          *",
    "*     A  or  LEFT ARROW     slide left                                        *",
    "*     S  or  DOWN ARROW     slide down                                        *",
    "*     D  or  RIGHT ARROW    slide right                                       *",
    "*     Q                     give up and return to the title                   *",
    "*                                                                             *",
    "*                                                                             *",
    "* Press Q to return to the title screen.                                      *",
    "*                                                                             *",
    "*                                                                             *",
    "*=============================================================================*",
];

pub const BOARD_BACKGROUND: &[&str] = &[
    "+-----------+-----------+-----------+-----------+ +-----------+-----------+",
    "|           |           |           |           | |   SCORE   |    TOP    |",
    "|           |           |           |           | +-----------+-----------+",
    "|           |           |           |           | |           |           |",
    "|           |           |           |           | +-----------+-----------+",
    "|           |           |           |           |",
    "+-----------+-----------+-----------+-----------+  Goal:",
    "|           |           |           |           |",
    "|           |           |           |           |",
    "|           |           |           |           |  W / UP      slide up",
    "|           |           |           |           |  A / LEFT    slide left",
    "|           |           |           |           |  S / DOWN    slide down",
    "+-----------+-----------+-----------+-----------+  D / RIGHT   slide right",
    "|           |           |           |           |  Q           quit round",
    "|           |           |           |           |",
    "|           |           |           |           |",
    "|           |           |           |           |",
    "|           |           |           |           |",
    "+-----------+-----------+-----------+-----------+",
    "|           |           |           |           |",
    "|           |           |           |           |",
    "|           |           |           |           |",
    "|           |           |           |           |",
    "|           |           |           |           |",
    "+-----------+-----------+-----------+-----------+",
];

pub const VICTORY_BANNER: &[&str] = &[
    "+-----------------------------------------------+",
    "|                                               |",
    "|      YOU WIN! Gazool flees from the grid.     |",
    "|                                               |",
    "|         Press Q to return to the title.       |",
    "|                                               |",
    "+-----------------------------------------------+",
];

pub const DEFEAT_BANNER: &[&str] = &[
    "+-----------------------------------------------+",
    "|                                               |",
    "|     NO MOVES LEFT. Gazool eats your tiles.    |",
    "|                                               |",
    "|         Press Q to return to the title.       |",
    "|                                               |",
    "+-----------------------------------------------+",
];

const VICTORY_COLOR: Color = Color::new(FG_YELLOW, BG_BLUE);
const DEFEAT_COLOR: Color = Color::new(FG_WHITE, BG_RED);

/// Background color per tile value; values of 64 and up share the last entry.
pub fn tile_color(value: u32) -> Color {
    let bg = match value {
        2 => BG_BROWN,
        4 => BG_CYAN,
        8 => BG_BLUE,
        16 => BG_GREEN,
        32 => BG_RED,
        _ => BG_MAGENTA,
    };
    Color::new(FG_BLACK, bg)
}

/// Difficulty menu, built from the level table.
pub fn difficulty_screen() -> Vec<String> {
    let mut lines = vec![
        format!("*{}*", "=".repeat(77)),
        String::new(),
        "   CHOOSE YOUR OPPONENT".to_string(),
        String::new(),
        "   The bigger the creature, the bigger the tile you need to build.".to_string(),
        String::new(),
    ];
    for level in Difficulty::ALL {
        lines.push(format!(
            "      [{}]  {:<24}{:>6}",
            level.digit(),
            level.label(),
            level.winning_tile()
        ));
    }
    lines.push(String::new());
    lines.push("   Press a digit to begin.".to_string());
    lines
}

/// Clears the surface and writes `lines` from the top-left, one per row.
pub fn draw_background<S: AsRef<str>>(surface: &mut dyn TextSurface, lines: &[S]) {
    surface.set_text_color(DEFAULT_TEXT_COLOR);
    surface.clear();
    write_lines(surface, 0, lines);
}

fn write_lines<S: AsRef<str>>(surface: &mut dyn TextSurface, row: i32, lines: &[S]) {
    if !surface.set_cursor(row, 0) {
        return;
    }
    let text = lines.iter().map(|line| line.as_ref()).collect::<Vec<&str>>().join("\n");
    surface.write_str(&text);
}

pub fn draw_number(surface: &mut dyn TextSurface, (row, col): (i32, i32), value: u32) {
    let color = surface.text_color();
    for (i, ch) in value.to_string().chars().enumerate() {
        surface.put_glyph(row, col + i as i32, ch, color);
    }
}

fn draw_text_at(surface: &mut dyn TextSurface, (row, col): (i32, i32), text: &str) {
    let color = surface.text_color();
    for (i, ch) in text.chars().enumerate() {
        surface.put_glyph(row, col + i as i32, ch, color);
    }
}

/// Paints one tile: 5 rows by 11 columns in the tile color, value right-aligned mid-tile.
pub fn draw_block(surface: &mut dyn TextSurface, row: i32, col: i32, value: u32) {
    let color = tile_color(value);
    let label = format!("  {value:>4}     ");
    for dr in 0..TILE_ROWS {
        for dc in 0..TILE_COLS {
            let ch = if dr == TILE_ROWS / 2 {
                label.as_bytes().get(dc as usize).map_or(' ', |&b| b as char)
            } else {
                ' '
            };
            surface.put_glyph(row + dr, col + dc, ch, color);
        }
    }
}

pub fn draw_title(surface: &mut dyn TextSurface, high_score: u32) {
    draw_background(surface, TITLE_SCREEN);
    draw_number(surface, TITLE_HIGH_SCORE_POS, high_score);
}

pub fn draw_instructions(surface: &mut dyn TextSurface) {
    draw_background(surface, INSTRUCTIONS_SCREEN);
}

pub fn draw_difficulty(surface: &mut dyn TextSurface) {
    draw_background(surface, &difficulty_screen());
}

fn draw_grid_tiles(surface: &mut dyn TextSurface, grid: &Grid) {
    for (r, row) in grid.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            if value != 0 {
                draw_block(surface, display_row(r) as i32, display_col(c) as i32, value);
            }
        }
    }
}

fn draw_frame_chrome(surface: &mut dyn TextSurface, session: &GameSession) {
    draw_background(surface, BOARD_BACKGROUND);
    draw_number(surface, SCORE_POS, session.score.current());
    draw_number(surface, HIGH_SCORE_POS, session.score.high());
    draw_number(surface, GOAL_POS, session.winning_tile());
    draw_text_at(surface, GOAL_LABEL_POS, session.difficulty.label());
}

/// Static board: background, scores and every tile.
pub fn draw_board(surface: &mut dyn TextSurface, session: &GameSession) {
    draw_frame_chrome(surface, session);
    draw_grid_tiles(surface, session.board.cells());
}

/// One animation frame: the cells that stay put, then every live slide at its current position.
pub fn draw_animation_frame(surface: &mut dyn TextSurface, session: &GameSession) {
    draw_frame_chrome(surface, session);
    draw_grid_tiles(surface, &session.shadow);
    draw_sliding_blocks(surface, &session.animations);
}

fn draw_sliding_blocks(surface: &mut dyn TextSurface, animations: &AnimationRegistry) {
    for block in animations.iter() {
        if let Some(value) = block.display_value() {
            draw_block(surface, block.row as i32, block.col as i32, value);
        }
    }
}

fn draw_banner(surface: &mut dyn TextSurface, lines: &[&str], color: Color) {
    let previous = surface.text_color();
    surface.set_text_color(color);
    write_lines(surface, BANNER_ROW, lines);
    surface.set_text_color(previous);
}

pub fn draw_victory(surface: &mut dyn TextSurface, session: &GameSession) {
    draw_board(surface, session);
    draw_banner(surface, VICTORY_BANNER, VICTORY_COLOR);
}

pub fn draw_defeat(surface: &mut dyn TextSurface, session: &GameSession) {
    draw_board(surface, session);
    draw_banner(surface, DEFEAT_BANNER, DEFEAT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use engine::console::{BG_BLACK, CONSOLE_COLS, CONSOLE_ROWS, ConsoleBuffer};

    fn fits(lines: &[impl AsRef<str>]) {
        assert!(lines.len() <= CONSOLE_ROWS as usize);
        for line in lines {
            assert!(line.as_ref().len() < CONSOLE_COLS as usize, "{:?}", line.as_ref());
        }
    }

    #[test]
    fn screen_art_fits_without_wrapping_or_scrolling() {
        fits(TITLE_SCREEN);
        fits(INSTRUCTIONS_SCREEN);
        fits(BOARD_BACKGROUND);
        fits(&difficulty_screen());
        fits(VICTORY_BANNER);
        fits(DEFEAT_BANNER);
    }

    #[test]
    fn title_shows_high_score_after_label() {
        let mut console = ConsoleBuffer::default();
        draw_title(&mut console, 1234);
        assert!(console.row_text(0).starts_with("*===="));
        assert!(console.row_text(1).starts_with("*High Score:1234"));
    }

    #[test]
    fn block_layout_centers_value_on_middle_row() {
        let mut console = ConsoleBuffer::default();
        draw_block(&mut console, 1, 13, 128);
        assert_eq!(&console.row_text(3)[13..24], "   128     ");
        let cell = console.read_cell(1, 13).expect("tile corner");
        assert_eq!(cell.color, tile_color(128));
        assert_eq!(cell.color.bg(), BG_MAGENTA);
        assert_eq!(console.read_cell(1, 24).map(|c| c.ch), Some(b' '));
    }

    #[test]
    fn tile_colors_follow_value_ladder() {
        assert_eq!(tile_color(2).bg(), BG_BROWN);
        assert_eq!(tile_color(4).bg(), BG_CYAN);
        assert_eq!(tile_color(8).bg(), BG_BLUE);
        assert_eq!(tile_color(16).bg(), BG_GREEN);
        assert_eq!(tile_color(32).bg(), BG_RED);
        assert_eq!(tile_color(2048).bg(), BG_MAGENTA);
        assert_ne!(tile_color(2).bg(), BG_BLACK);
    }

    #[test]
    fn board_draws_scores_and_tiles_in_their_cells() {
        let mut session = GameSession::new(0);
        session.board = Board::from_grid([[0, 0, 0, 2], [0; 4], [0; 4], [16, 0, 0, 0]]);
        session.score.update(36);
        let mut console = ConsoleBuffer::default();
        draw_board(&mut console, &session);

        assert_eq!(&console.row_text(3)[52..54], "36");
        assert_eq!(&console.row_text(3)[64..66], "36");
        assert_eq!(&console.row_text(3)[37..48], "     2     ");
        assert_eq!(&console.row_text(21)[1..12], "    16     ");
        assert_eq!(console.row_text(0).chars().next(), Some('+'));
    }

    #[test]
    fn banner_overlays_board_at_row_ten() {
        let session = GameSession::new(0);
        let mut console = ConsoleBuffer::default();
        draw_defeat(&mut console, &session);
        assert!(console.row_text(BANNER_ROW as u16 + 2).contains("NO MOVES LEFT"));
        assert_eq!(
            console.read_cell(BANNER_ROW, 0).map(|c| c.color),
            Some(DEFEAT_COLOR)
        );
        assert_eq!(console.text_color(), DEFAULT_TEXT_COLOR);
    }
}
