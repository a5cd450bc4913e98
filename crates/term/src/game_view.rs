//! GameView: maps a `SessionSnapshot` and the prompt into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: column numbers, the framed grid with row numbers on
//! its left, then the prompt, a status message and a key hint. The score panel
//! sits to the right of the grid when the terminal is wide enough.

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Candy;

/// Columns reserved left of the frame for row numbers.
const LABEL_W: u16 = 3;
/// Gap plus width of the score panel.
const PANEL_GAP: u16 = 3;
const PANEL_W: u16 = 12;
const PANEL_H: u16 = 11;
/// Rows under the frame: blank, prompt, message, hint.
const FOOTER_H: u16 = 4;

const BOARD_BG: Rgb = Rgb::new(25, 25, 35);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// The line being typed and the feedback for the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromptView<'a> {
    pub input: &'a str,
    /// Status line under the prompt, empty for none.
    pub message: &'a str,
    /// Render the message as an error.
    pub error: bool,
}

impl<'a> PromptView<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            message: "",
            error: false,
        }
    }

    pub fn with_message(mut self, message: &'a str, error: bool) -> Self {
        self.message = message;
        self.error = error;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal renderer for a game in progress.
pub struct GameView {
    /// Grid cell width in terminal columns (the digit is centered).
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Foreground color of a candy, one hue per digit.
pub fn candy_color(candy: Candy) -> Rgb {
    match candy.digit() {
        1 => Rgb::new(230, 80, 80),
        2 => Rgb::new(100, 220, 120),
        3 => Rgb::new(240, 220, 80),
        4 => Rgb::new(90, 140, 240),
        5 => Rgb::new(210, 120, 230),
        6 => Rgb::new(80, 220, 220),
        _ => Rgb::new(255, 165, 0),
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        prompt: &PromptView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let grid_w = snap.grid.width() as u16;
        let grid_h = snap.grid.height() as u16;
        let frame_w = grid_w * self.cell_w + 2;
        let frame_h = grid_h + 2;
        let block_w = LABEL_W + frame_w;
        let fits = |body_h: u16| viewport.height >= 1 + body_h + FOOTER_H;

        if viewport.width < block_w || !fits(frame_h) {
            let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
            fb.put_str_centered(0, viewport.height / 2, viewport.width, "Enlarge the terminal", style);
            return;
        }

        let with_panel =
            viewport.width >= block_w + PANEL_GAP + PANEL_W && fits(frame_h.max(PANEL_H));
        let (total_w, body_h) = if with_panel {
            (block_w + PANEL_GAP + PANEL_W, frame_h.max(PANEL_H))
        } else {
            (block_w, frame_h)
        };
        let block_h = 1 + body_h + FOOTER_H;
        let left = (viewport.width - total_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => (viewport.height - block_h) / 2,
            AnchorY::Top => 0,
        };
        let frame_x = left + LABEL_W;
        let frame_y = top + 1;

        self.draw_labels(fb, snap, frame_x, frame_y);
        draw_border(fb, frame_x, frame_y, frame_w, frame_h, CellStyle::default());
        fb.fill_rect(
            frame_x + 1,
            frame_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::default().on(BOARD_BG),
        );

        for row in 1..=snap.grid.height() {
            let cells = snap.grid.row(row).unwrap_or(&[]);
            for (i, cell) in cells.iter().enumerate() {
                let x = frame_x + 1 + i as u16 * self.cell_w + self.cell_w / 2;
                let y = frame_y + row as u16;
                match cell {
                    Some(candy) => {
                        let style = CellStyle::fg(candy_color(*candy)).on(BOARD_BG).bold();
                        fb.put_char(x, y, candy.symbol(), style);
                    }
                    None => {
                        let style = CellStyle::fg(Rgb::new(90, 90, 100)).on(BOARD_BG).dim();
                        fb.put_char(x, y, '·', style);
                    }
                }
            }
        }

        if with_panel {
            draw_side_panel(fb, snap, frame_x + frame_w + PANEL_GAP, frame_y);
        }

        draw_footer(fb, snap, prompt, left, frame_y + body_h + 1);

        if snap.game_over {
            let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
            fb.put_str_centered(frame_x, frame_y + frame_h / 2, frame_w, " GAME OVER ", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        prompt: &PromptView<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, prompt, viewport, &mut fb);
        fb
    }

    fn draw_labels(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, frame_x: u16, frame_y: u16) {
        let style = CellStyle::fg(Rgb::new(140, 140, 150));
        for column in 1..=snap.grid.width() as u16 {
            let x = frame_x + 1 + (column - 1) * self.cell_w + self.cell_w / 2;
            fb.put_u32(x, frame_y - 1, column as u32, style);
        }
        for row in 1..=snap.grid.height() as u16 {
            // Right-aligned in two columns, one blank before the frame.
            let x = if row < 10 { frame_x - 2 } else { frame_x - 3 };
            fb.put_u32(x, frame_y + row, row as u32, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) {
    let label = CellStyle::default().bold();
    let value = CellStyle::fg(Rgb::new(200, 200, 200));

    fb.put_str(x, y, "SCORE", label);
    fb.put_u32(x, y + 1, snap.total_score, value);

    fb.put_str(x, y + 3, "TURN", label);
    let cx = fb.put_str(x, y + 4, "+", value);
    fb.put_u32(cx, y + 4, snap.turn_score, value);

    fb.put_str(x, y + 6, "MULTIPLIER", label);
    let cx = fb.put_str(x, y + 7, "x", value);
    fb.put_u32(cx, y + 7, snap.multiplier, value);

    fb.put_str(x, y + 9, "MOVES", label);
    let cx = fb.put_u32(x, y + 10, snap.moves_left, value);
    let cx = fb.put_str(cx, y + 10, "/", value.dim());
    fb.put_u32(cx, y + 10, snap.max_moves, value.dim());
}

fn draw_footer(fb: &mut FrameBuffer, snap: &SessionSnapshot, prompt: &PromptView<'_>, x: u16, y: u16) {
    let prompt_style = CellStyle::fg(Rgb::new(120, 200, 255)).bold();
    let input_style = CellStyle::default();

    if snap.game_over {
        fb.put_str(x, y, "Press Enter to see your score", prompt_style);
    } else {
        let cx = fb.put_str(x, y, "move> ", prompt_style);
        let cx = fb.put_str(cx, y, prompt.input, input_style);
        fb.put_char(cx, y, '_', input_style.dim());
    }

    if !prompt.message.is_empty() {
        let style = if prompt.error {
            CellStyle::fg(Rgb::new(240, 100, 100))
        } else {
            CellStyle::fg(Rgb::new(150, 220, 150))
        };
        fb.put_str(x, y + 1, prompt.message, style);
    }

    let hint = CellStyle::fg(Rgb::new(120, 120, 120));
    fb.put_str(x, y + 2, "<row> <column> <W|A|S|D>   Esc: menu", hint);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, SessionSnapshot};

    fn snapshot(rows: &[&str]) -> SessionSnapshot {
        SessionSnapshot {
            grid: Grid::from_rows(rows).unwrap(),
            total_score: 1230,
            turn_score: 70,
            multiplier: 2,
            moves_left: 15,
            max_moves: 20,
            candy_count: 5,
            game_over: false,
        }
    }

    fn top_view() -> GameView {
        GameView::default().with_anchor_y(AnchorY::Top)
    }

    #[test]
    fn test_grid_rows_render_with_labels() {
        let snap = snapshot(&["123", "451", "2.3"]);
        let fb = top_view().render(&snap, &PromptView::default(), Viewport::new(60, 20));

        assert!(fb.row_text(0).contains(" 1  2  3"));
        assert!(fb.row_text(1).contains("┌─────────┐"));
        assert!(fb.row_text(2).contains(" 1 │ 1  2  3 │"));
        assert!(fb.row_text(3).contains(" 2 │ 4  5  1 │"));
        assert!(fb.row_text(4).contains(" 3 │ 2  ·  3 │"));
        assert!(fb.row_text(5).contains("└─────────┘"));
    }

    #[test]
    fn test_candies_are_colored_by_digit() {
        let snap = snapshot(&["12", "21"]);
        let fb = top_view().render(&snap, &PromptView::default(), Viewport::new(60, 20));

        let candies: Vec<_> = (0..fb.width())
            .filter_map(|x| fb.get(x, 2))
            .filter(|c| c.style.bg == BOARD_BG && c.ch.is_ascii_digit())
            .collect();
        assert_eq!(candies.len(), 2);
        assert_eq!(candies[0].style.fg, candy_color(Candy::new(1).unwrap()));
        assert_eq!(candies[1].style.fg, candy_color(Candy::new(2).unwrap()));
        assert_ne!(candies[0].style.fg, candies[1].style.fg);
    }

    #[test]
    fn test_side_panel_shows_score_turn_and_moves() {
        let snap = snapshot(&["123", "451", "213"]);
        let fb = top_view().render(&snap, &PromptView::default(), Viewport::new(60, 20));

        assert!(fb.contains_text("SCORE"));
        assert!(fb.contains_text("1230"));
        assert!(fb.contains_text("+70"));
        assert!(fb.contains_text("x2"));
        assert!(fb.contains_text("15/20"));
    }

    #[test]
    fn test_narrow_terminal_drops_side_panel() {
        let snap = snapshot(&["123", "451", "213"]);
        let fb = top_view().render(&snap, &PromptView::default(), Viewport::new(24, 20));
        assert!(!fb.contains_text("SCORE"));
        assert!(fb.contains_text("│ 1  2  3 │"));
    }

    #[test]
    fn test_prompt_and_message() {
        let snap = snapshot(&["123", "451", "213"]);
        let prompt = PromptView::new("2 3 d").with_message("invalid position (9, 9)", true);
        let fb = top_view().render(&snap, &prompt, Viewport::new(60, 20));

        assert!(fb.contains_text("move> 2 3 d_"));
        assert!(fb.contains_text("invalid position (9, 9)"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut snap = snapshot(&["12345", "23451", "34512"]);
        snap.game_over = true;
        let fb = top_view().render(&snap, &PromptView::default(), Viewport::new(60, 20));
        assert!(fb.contains_text("GAME OVER"));
        assert!(!fb.contains_text("move>"));
    }

    #[test]
    fn test_too_small_viewport() {
        let snap = snapshot(&["123", "451", "213"]);
        let fb = GameView::default().render(&snap, &PromptView::default(), Viewport::new(10, 4));
        assert!(fb.contains_text("Enlarge"));
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let snap = snapshot(&["123", "451", "213"]);
        let view = top_view();
        let mut fb = FrameBuffer::new(1, 1);
        view.render_into(&snap, &PromptView::default(), Viewport::new(50, 16), &mut fb);
        assert_eq!((fb.width(), fb.height()), (50, 16));
        assert_eq!(fb, view.render(&snap, &PromptView::default(), Viewport::new(50, 16)));
    }
}
