//! Terminal front end: draws frames with ratatui and reads input from
//! crossterm.
//!
//! - `display`: pixel-to-cell mapping and the frame widget
//! - `input`: key and mouse mapping onto console controls

mod display;
mod input;

pub use display::TerminalDisplay;
pub use input::TerminalInput;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::debug;

/// Raw mode, alternate screen and mouse capture for as long as it lives.
pub struct TerminalSession {
    keyboard_enhanced: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut session = Self {
            keyboard_enhanced: false,
        };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        if matches!(supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            session.keyboard_enhanced = true;
        }
        debug!(
            keyboard_enhanced = session.keyboard_enhanced,
            "terminal session started"
        );
        Ok(session)
    }

    /// Whether the terminal reports key releases.
    pub fn reports_key_releases(&self) -> bool {
        self.keyboard_enhanced
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            stdout,
            LeaveAlternateScreen,
            DisableMouseCapture,
            crossterm::cursor::Show
        );
        let _ = disable_raw_mode();
    }
}
