//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, TileState};

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

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const FIELD_BG: Rgb = Rgb::new(24, 28, 24);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const FIELD: CellStyle = CellStyle::new(Rgb::new(70, 80, 70), FIELD_BG).dim();
const BODY: CellStyle = CellStyle::new(Rgb::new(120, 200, 90), FIELD_BG);
const HEAD: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(170, 240, 120)).bold();
const FRUIT: CellStyle = CellStyle::new(Rgb::new(230, 70, 70), FIELD_BG).bold();
const TITLE: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

/// Key bindings listed under "Controls".
const CONTROLS: [(&str, &str); 7] = [
    ("Up", "W / Up Arrow"),
    ("Down", "S / Down Arrow"),
    ("Left", "A / Left Arrow"),
    ("Right", "D / Right Arrow"),
    ("Pause / Resume", "P"),
    ("Start / Restart", "Enter"),
    ("Exit", "Esc"),
];

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps tiles roughly square with typical terminal glyphs.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Where the board frame landed inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        // Screen coordinates saturate; anything past u16::MAX is off-screen anyway.
        let board_w = clamp_u16(snap.width).saturating_mul(self.cell_w);
        let board_h = clamp_u16(snap.height).saturating_mul(self.cell_h);
        let (frame_w, frame_h) = (board_w.saturating_add(2), board_h.saturating_add(2));
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        draw_border(fb, frame);

        for y in 0..snap.height {
            for x in 0..snap.width {
                let tile = snap.tile(x, y);
                self.draw_tile(fb, frame, clamp_u16(x), clamp_u16(y), tile, snap.direction);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if let Some((title, hint)) = overlay_text(snap) {
            draw_overlay(fb, frame, title, hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: u16,
        y: u16,
        tile: TileState,
        heading: Option<Direction>,
    ) {
        let px = frame.x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w));
        let py = frame.y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h));

        match tile {
            TileState::Empty => fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', FIELD),
            TileState::SnakeBody => fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', BODY),
            TileState::Fruit => {
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', FRUIT);
                fb.put_char(px, py, '●', FRUIT);
            }
            TileState::SnakeHead => {
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', HEAD);
                fb.put_char(px, py, head_glyph(heading), HEAD);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = frame.y;
        fb.put_str(panel_x, y, "Snake Game", TITLE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "Statistics", LABEL);
        y = y.saturating_add(1);
        for (label, value) in [
            ("Total Score: ", snap.score),
            ("Fruit Eaten: ", snap.fruits_eaten),
            ("Fruit Score: ", snap.next_fruit_score),
        ] {
            let x = fb.put_str(panel_x, y, label, VALUE);
            fb.put_u32(x, y, value, VALUE);
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "Controls", LABEL);
        y = y.saturating_add(1);
        let dim = VALUE.dim();
        for (action, keys) in CONTROLS {
            if y >= viewport.height {
                break;
            }
            let x = fb.put_str(panel_x, y, action, VALUE);
            let x = fb.put_str(x, y, ": ", VALUE);
            fb.put_str(x, y, keys, dim);
            y = y.saturating_add(1);
        }
    }
}

/// Title and hint line for the current mode, if any overlay applies.
fn overlay_text(snap: &GameSnapshot) -> Option<(&'static str, &'static str)> {
    if snap.playable() {
        None
    } else if snap.new_game {
        Some(("Snake Game!", "Press Enter to Start"))
    } else if snap.game_over {
        Some(("Game Over!", "Press Enter to Restart"))
    } else {
        Some(("Paused", "Press P to Resume"))
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn head_glyph(heading: Option<Direction>) -> char {
    match heading {
        Some(Direction::North) => '▲',
        Some(Direction::South) => '▼',
        Some(Direction::East) => '▶',
        Some(Direction::West) => '◀',
        None => '■',
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

/// Two centered lines on a blank band across the middle of the board.
fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, title: &str, hint: &str) {
    let band_w = title.chars().count().max(hint.chars().count()) as u16 + 4;
    let mid_y = frame.y.saturating_add(frame.h / 2);
    let band_x = frame.x.saturating_add(frame.w.saturating_sub(band_w) / 2);
    fb.fill_rect(band_x, mid_y.saturating_sub(2), band_w, 5, ' ', VALUE);

    for (text, y, style) in [
        (title, mid_y.saturating_sub(1), TITLE),
        (hint, mid_y.saturating_add(1), VALUE),
    ] {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}
