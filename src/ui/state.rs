//! Menu and button tester state machines.
//!
//! Pure: each takes one input frame and says what the app loop should do.

use super::page::Page;
use crate::platform::{InputFrame, Keys, TouchPosition};

/// What the main loop does after a menu input frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Continue,
    EnterButtonTester,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    page: Page,
    /// Whether user-specific values are shown. Toggled with Select.
    show_private: bool,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            page: Page::Kernel,
            show_private: true,
        }
    }
}

impl MenuState {
    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selection(&self) -> usize {
        self.page.index()
    }

    pub fn show_private(&self) -> bool {
        self.show_private
    }

    pub fn handle(&mut self, input: &InputFrame) -> MenuAction {
        if input.exit_requested {
            return MenuAction::Exit;
        }

        if input.down.intersects(Keys::DOWN) {
            self.page = self.page.next();
        } else if input.down.intersects(Keys::UP) {
            self.page = self.page.prev();
        }

        if input.down.contains(Keys::SELECT) {
            self.show_private = !self.show_private;
        }

        if input.down.contains(Keys::START)
            || (input.down.contains(Keys::A) && self.page == Page::Exit)
        {
            return MenuAction::Exit;
        }

        if input.lr_chord() && self.page != Page::Exit {
            return MenuAction::EnterButtonTester;
        }

        MenuAction::Continue
    }
}

/// What the tester loop does after an input frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TesterAction {
    Stay,
    Leave,
    Exit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonTester {
    last_touch: TouchPosition,
}

impl ButtonTester {
    pub fn last_touch(&self) -> TouchPosition {
        self.last_touch
    }

    pub fn handle(&mut self, input: &InputFrame) -> TesterAction {
        if input.exit_requested {
            return TesterAction::Exit;
        }
        if let Some(touch) = input.touch {
            self.last_touch = touch;
        }
        if input.lr_chord() {
            TesterAction::Leave
        } else {
            TesterAction::Stay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(down: Keys) -> InputFrame {
        InputFrame {
            down,
            held: down,
            ..Default::default()
        }
    }

    fn chord(held: Keys, down: Keys) -> InputFrame {
        InputFrame {
            down,
            held: held | down,
            ..Default::default()
        }
    }

    fn at(page: Page) -> MenuState {
        MenuState {
            page,
            ..Default::default()
        }
    }

    // ── navigation ────────────────────────────────────────────────

    #[test]
    fn down_and_up_move_the_selection() {
        let mut menu = MenuState::default();
        menu.handle(&press(Keys::DDOWN));
        assert_eq!(menu.page(), Page::System);
        menu.handle(&press(Keys::CPAD_UP));
        assert_eq!(menu.page(), Page::Kernel);
    }

    #[test]
    fn selection_wraps() {
        let mut menu = MenuState::default();
        menu.handle(&press(Keys::DUP));
        assert_eq!(menu.page(), Page::Exit);
        menu.handle(&press(Keys::DDOWN));
        assert_eq!(menu.page(), Page::Kernel);
    }

    #[test]
    fn down_wins_over_up() {
        let mut menu = MenuState::default();
        menu.handle(&press(Keys::DUP | Keys::DDOWN));
        assert_eq!(menu.page(), Page::System);
    }

    #[test]
    fn select_toggles_private_info() {
        let mut menu = MenuState::default();
        assert!(menu.show_private());
        menu.handle(&press(Keys::SELECT));
        assert!(!menu.show_private());
        menu.handle(&press(Keys::SELECT));
        assert!(menu.show_private());
    }

    // ── exit ──────────────────────────────────────────────────────

    #[test]
    fn start_exits_from_any_page() {
        assert_eq!(MenuState::default().handle(&press(Keys::START)), MenuAction::Exit);
        assert_eq!(at(Page::Wifi).handle(&press(Keys::START)), MenuAction::Exit);
    }

    #[test]
    fn a_exits_only_on_exit_page() {
        assert_eq!(at(Page::Exit).handle(&press(Keys::A)), MenuAction::Exit);
        assert_eq!(at(Page::Misc).handle(&press(Keys::A)), MenuAction::Continue);
    }

    #[test]
    fn a_after_moving_onto_exit_page_exits() {
        let mut menu = at(Page::Misc);
        assert_eq!(menu.handle(&press(Keys::DDOWN | Keys::A)), MenuAction::Exit);
    }

    #[test]
    fn host_quit_request_exits() {
        let input = InputFrame {
            exit_requested: true,
            ..Default::default()
        };
        assert_eq!(MenuState::default().handle(&input), MenuAction::Exit);
    }

    // ── button tester ─────────────────────────────────────────────

    #[test]
    fn lr_chord_enters_tester_in_either_order() {
        assert_eq!(
            MenuState::default().handle(&chord(Keys::L, Keys::R)),
            MenuAction::EnterButtonTester
        );
        assert_eq!(
            MenuState::default().handle(&chord(Keys::R, Keys::L)),
            MenuAction::EnterButtonTester
        );
    }

    #[test]
    fn holding_l_and_r_without_a_new_press_does_nothing() {
        let input = InputFrame {
            held: Keys::L | Keys::R,
            ..Default::default()
        };
        assert_eq!(MenuState::default().handle(&input), MenuAction::Continue);
    }

    #[test]
    fn chord_ignored_on_exit_page() {
        assert_eq!(at(Page::Exit).handle(&chord(Keys::L, Keys::R)), MenuAction::Continue);
    }

    #[test]
    fn tester_leaves_on_chord() {
        let mut tester = ButtonTester::default();
        assert_eq!(tester.handle(&press(Keys::A)), TesterAction::Stay);
        assert_eq!(tester.handle(&chord(Keys::R, Keys::L)), TesterAction::Leave);
    }

    #[test]
    fn tester_remembers_last_touch() {
        let mut tester = ButtonTester::default();
        tester.handle(&InputFrame {
            touch: Some(TouchPosition { px: 10, py: 20 }),
            ..Default::default()
        });
        tester.handle(&InputFrame::default());
        assert_eq!(tester.last_touch(), TouchPosition { px: 10, py: 20 });
    }

    #[test]
    fn tester_honours_host_quit() {
        let input = InputFrame {
            exit_requested: true,
            ..Default::default()
        };
        assert_eq!(ButtonTester::default().handle(&input), TesterAction::Exit);
    }
}
