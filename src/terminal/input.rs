//! Keyboard and mouse mapped onto the console's controls.
//!
//! Arrows are the D-pad, `wasd` the circle pad, `ijkl` the C-stick, Enter
//! and Backspace are A and B, `x`/`y` are X and Y, `q`/`e` are L and R,
//! `u`/`o` are ZL and ZR, Space is Select, Esc is Start and `h` is HOME.
//! `+`/`-` move the volume slider and `[`/`]` the 3D slider. Clicking the
//! bottom screen touches it.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::trace;

use super::display::ScreenLayout;
use crate::constants::{
    ANALOG_MAX, KEY_REPEAT_GAP_MS, MAX_VOLUME, SLIDER_STEP, VOLUME_STEP,
};
use crate::platform::{Hid, InputFrame, Keys, StickPosition, TouchPosition};

/// Console button for a key, if it has one.
pub fn map_key(code: KeyCode) -> Option<Keys> {
    let key = match code {
        KeyCode::Up => Keys::DUP,
        KeyCode::Down => Keys::DDOWN,
        KeyCode::Left => Keys::DLEFT,
        KeyCode::Right => Keys::DRIGHT,
        KeyCode::Enter => Keys::A,
        KeyCode::Backspace => Keys::B,
        KeyCode::Esc => Keys::START,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Keys::CPAD_UP,
            'a' => Keys::CPAD_LEFT,
            's' => Keys::CPAD_DOWN,
            'd' => Keys::CPAD_RIGHT,
            'i' => Keys::CSTICK_UP,
            'j' => Keys::CSTICK_LEFT,
            'k' => Keys::CSTICK_DOWN,
            'l' => Keys::CSTICK_RIGHT,
            'x' => Keys::X,
            'y' => Keys::Y,
            'q' => Keys::L,
            'e' => Keys::R,
            'u' => Keys::ZL,
            'o' => Keys::ZR,
            ' ' => Keys::SELECT,
            _ => return None,
        },
        _ => return None,
    };
    Some(key)
}

/// Turns key events into held/down button sets.
///
/// Terminals that report releases keep a key held until it is released.
/// Others only send presses (and auto-repeats), so a key counts as held
/// for `hold_window` after its last event.
#[derive(Debug)]
pub struct KeyTracker {
    hold_window: Duration,
    reports_releases: bool,
    last_event: HashMap<Keys, Instant>,
    fresh: Keys,
    previous: Keys,
}

impl KeyTracker {
    pub fn new(hold_window: Duration, reports_releases: bool) -> Self {
        Self {
            hold_window,
            reports_releases,
            last_event: HashMap::new(),
            fresh: Keys::NONE,
            previous: Keys::NONE,
        }
    }

    pub fn press(&mut self, key: Keys, now: Instant, repeat: bool) {
        let gap = Duration::from_millis(KEY_REPEAT_GAP_MS);
        let fresh = !repeat
            && self
                .last_event
                .get(&key)
                .map_or(true, |at| now.duration_since(*at) > gap);
        if fresh {
            self.fresh |= key;
        }
        self.last_event.insert(key, now);
    }

    pub fn release(&mut self, key: Keys) {
        self.last_event.remove(&key);
    }

    /// Close the frame at `now`: returns `(down, held)`.
    pub fn advance(&mut self, now: Instant) -> (Keys, Keys) {
        let window = self.hold_window;
        let releases = self.reports_releases;
        self.last_event
            .retain(|_, at| releases || now.duration_since(*at) <= window);

        let held = self
            .last_event
            .keys()
            .fold(Keys::NONE, |acc, key| acc | *key);
        let newly_held = Keys::from_bits(held.bits() & !self.previous.bits());
        let down = newly_held | (self.fresh & held);

        self.fresh = Keys::NONE;
        self.previous = held;
        (down, held)
    }
}

/// Per-frame events that are not button state.
#[derive(Debug, Default)]
struct Pending {
    home: bool,
    exit: bool,
}

/// Reads the terminal and produces one `InputFrame` per frame interval.
pub struct TerminalInput {
    keys: KeyTracker,
    frame_interval: Duration,
    layout: ScreenLayout,
    volume: u8,
    slider_3d: f32,
    touch: Option<TouchPosition>,
    pending: Pending,
}

impl TerminalInput {
    pub fn new(
        frame_interval: Duration,
        hold_window: Duration,
        reports_releases: bool,
        (width, height): (u16, u16),
    ) -> Self {
        Self {
            keys: KeyTracker::new(hold_window, reports_releases),
            frame_interval,
            layout: ScreenLayout::centered(Rect::new(0, 0, width, height)),
            volume: MAX_VOLUME / 2,
            slider_3d: 0.0,
            touch: None,
            pending: Pending::default(),
        }
    }

    fn apply(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) => self.apply_key(key, now),
            Event::Mouse(mouse) => self.apply_mouse(mouse),
            Event::Resize(width, height) => {
                self.layout = ScreenLayout::centered(Rect::new(0, 0, width, height));
            }
            _ => {}
        }
    }

    fn apply_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.pending.exit = true;
            return;
        }

        if key.kind == KeyEventKind::Release {
            if let Some(button) = map_key(key.code) {
                self.keys.release(button);
            }
            return;
        }

        if let Some(button) = map_key(key.code) {
            self.keys
                .press(button, now, key.kind == KeyEventKind::Repeat);
            return;
        }

        match key.code {
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.volume = self.volume.saturating_add(VOLUME_STEP).min(MAX_VOLUME);
            }
            KeyCode::Char('-') => self.volume = self.volume.saturating_sub(VOLUME_STEP),
            KeyCode::Char(']') => self.slider_3d = (self.slider_3d + SLIDER_STEP).min(1.0),
            KeyCode::Char('[') => self.slider_3d = (self.slider_3d - SLIDER_STEP).max(0.0),
            KeyCode::Char('h') | KeyCode::Char('H') => self.pending.home = true,
            other => trace!(key = ?other, "unmapped key"),
        }
    }

    fn apply_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                self.touch = self.layout.touch_at(mouse.column, mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => self.touch = None,
            _ => {}
        }
    }

    /// Close the current frame.
    fn sample(&mut self, now: Instant) -> InputFrame {
        let (mut down, mut held) = self.keys.advance(now);
        if self.touch.is_some() {
            held |= Keys::TOUCH;
            down |= Keys::TOUCH;
        }
        let pending = std::mem::take(&mut self.pending);

        InputFrame {
            down,
            held,
            circle_pad: stick(
                held,
                [Keys::CPAD_LEFT, Keys::CPAD_RIGHT, Keys::CPAD_UP, Keys::CPAD_DOWN],
            ),
            c_stick: stick(
                held,
                [
                    Keys::CSTICK_LEFT,
                    Keys::CSTICK_RIGHT,
                    Keys::CSTICK_UP,
                    Keys::CSTICK_DOWN,
                ],
            ),
            touch: self.touch,
            volume: self.volume,
            slider_3d: self.slider_3d,
            home: pending.home,
            exit_requested: pending.exit,
        }
    }
}

/// Full deflection toward each held direction; up is positive.
fn stick(held: Keys, [left, right, up, down]: [Keys; 4]) -> StickPosition {
    let axis = |neg: Keys, pos: Keys| {
        let mut v = 0;
        if held.intersects(pos) {
            v += ANALOG_MAX;
        }
        if held.intersects(neg) {
            v -= ANALOG_MAX;
        }
        v
    };
    StickPosition {
        dx: axis(left, right),
        dy: axis(down, up),
    }
}

impl Hid for TerminalInput {
    /// Collect events until the frame interval elapses.
    fn scan_input(&mut self) -> Result<InputFrame> {
        let deadline = Instant::now() + self.frame_interval;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            let ev = event::read()?;
            self.apply(ev, Instant::now());
        }
        Ok(self.sample(Instant::now()))
    }
}
