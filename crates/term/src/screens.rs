//! Full-screen text pages: main menu, rules, settings, final score, credits.
//!
//! A page is a boxed block of lines with an optional prompt underneath.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{PromptView, Viewport};
use crate::types::GameConfig;

const TITLE: &str = "N U M B E R   C R U S H";

const MENU: &[&str] = &[
    "1  Play",
    "2  Rules",
    "3  Settings",
    "4  Quit",
];

const RULES: &[&str] = &[
    "The board is filled with numbered candies.",
    "",
    "Each move swaps a candy with one of its four neighbors.",
    "Three or more identical candies in a row or a column",
    "form a run. Runs are removed, the candies above fall",
    "into the holes and new candies drop in from the top.",
    "This repeats until the board is stable again.",
    "",
    "Every removed candy is worth 10 points. At the end of",
    "the move, the points are multiplied by the number of",
    "runs removed during that move.",
    "",
    "A move is typed as  <row> <column> <direction>",
    "with the direction one of W (up), A (left), S (down)",
    "or D (right), for example  3 5 d",
    "",
    "The game ends when you have no moves left.",
];

const CREDITS: &[&str] = &[
    "developed by",
    "",
    "the NumberCrush team",
    "",
    "Thanks for playing!",
];

/// A titled page of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextScreen {
    title: String,
    lines: Vec<String>,
    /// Label in front of the typed line; `None` for pages without input.
    prompt: Option<String>,
    /// Shown under the box on pages without input.
    footer: String,
}

impl TextScreen {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
            prompt: None,
            footer: "Press Enter to continue".to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn main_menu() -> Self {
        Self::new(TITLE, owned(MENU)).with_prompt("choice> ")
    }

    pub fn rules() -> Self {
        Self::new("RULES", owned(RULES))
    }

    pub fn credits() -> Self {
        Self::new(TITLE, owned(CREDITS))
    }

    /// Current settings and how to change them.
    pub fn settings(config: &GameConfig) -> Self {
        let lines = vec![
            format!("width    = {}", config.width),
            format!("height   = {}", config.height),
            format!("candies  = {}", config.candy_count),
            format!("moves    = {}", config.max_moves),
            String::new(),
            "Type a setting name followed by its new value,".to_string(),
            "for example  height 15".to_string(),
            "Esc or an empty line goes back to the menu.".to_string(),
        ];
        Self::new("SETTINGS", lines).with_prompt("setting> ")
    }

    pub fn final_score(total_score: u32, moves_played: u32) -> Self {
        let lines = vec![
            format!("Your score: {}", total_score),
            format!("Moves played: {}", moves_played),
        ];
        Self::new("GAME OVER", lines)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, prompt: &PromptView<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let title_style = CellStyle::fg(Rgb::new(255, 200, 80)).bold();
        let text_style = CellStyle::default();
        let border_style = CellStyle::fg(Rgb::new(140, 140, 150));

        let text_w = self
            .lines
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0) as u16;
        let box_w = (text_w + 4).min(viewport.width);
        let box_h = (self.lines.len() as u16 + 4).min(viewport.height);
        // Box plus blank, prompt and message lines.
        let block_h = box_h + 3;

        let x = viewport.width.saturating_sub(box_w) / 2;
        let y = viewport.height.saturating_sub(block_h) / 2;

        draw_box(fb, x, y, box_w, box_h, border_style);
        fb.put_str_centered(x, y + 1, box_w, &self.title, title_style);
        for (i, line) in self.lines.iter().enumerate() {
            let ly = y + 3 + i as u16;
            if ly + 1 >= y + box_h {
                break;
            }
            fb.put_str(x + 2, ly, line, text_style);
        }

        let py = y + box_h + 1;
        match &self.prompt {
            Some(label) => {
                let cx = fb.put_str(x, py, label, CellStyle::fg(Rgb::new(120, 200, 255)).bold());
                let cx = fb.put_str(cx, py, prompt.input, text_style);
                fb.put_char(cx, py, '_', text_style.dim());
            }
            None => {
                fb.put_str(x, py, &self.footer, CellStyle::fg(Rgb::new(120, 120, 120)));
            }
        }

        if !prompt.message.is_empty() {
            let style = if prompt.error {
                CellStyle::fg(Rgb::new(240, 100, 100))
            } else {
                CellStyle::fg(Rgb::new(150, 220, 150))
            };
            fb.put_str(x, py + 1, prompt.message, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, prompt: &PromptView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(prompt, viewport, &mut fb);
        fb
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

fn draw_box(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
