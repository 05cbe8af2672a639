//! Application struct and frame loop.
//!
//! Owns the render context, theme and menu state. The platform, input
//! source and display are passed in, so the loop runs the same against the
//! terminal and against scripted test doubles.

use anyhow::Result;
use tracing::{debug, info};

use crate::constants::RAW_HOME_RELEASED;
use crate::monitor::InfoAggregator;
use crate::platform::{Hid, InputFrame, Platform};
use crate::ui::{
    renderer, ButtonTester, Display, MenuAction, MenuState, RenderContext, TesterAction, Theme,
};

/// Where the button tester reads the HOME button from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSource {
    /// The MCU's raw button state, re-read with the system state every frame.
    RawButtonState,
    /// HOME presses reported with the input frame. Used under Citra, which
    /// has no MCU.
    InputEvent,
}

impl HomeSource {
    pub fn for_citra(citra: bool) -> Self {
        if citra {
            HomeSource::InputEvent
        } else {
            HomeSource::RawButtonState
        }
    }

    fn pressed<P: Platform + ?Sized>(self, platform: &P, input: &InputFrame) -> bool {
        match self {
            HomeSource::RawButtonState => InfoAggregator::system_state_info(platform)
                .raw_button_state
                .is_some_and(|bits| bits & RAW_HOME_RELEASED == 0),
            HomeSource::InputEvent => input.home,
        }
    }
}

pub struct App {
    ctx: RenderContext,
    theme: Theme,
    menu: MenuState,
    home: HomeSource,
}

impl App {
    pub fn new(ctx: RenderContext, theme: Theme, home: HomeSource) -> Self {
        Self {
            ctx,
            theme,
            menu: MenuState::default(),
            home,
        }
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Run until the user exits.
    ///
    /// The snapshot is collected once up front; battery and other live
    /// values are sampled again for every frame.
    pub fn run<P: Platform + ?Sized>(
        &mut self,
        platform: &mut P,
        hid: &mut dyn Hid,
        display: &mut dyn Display,
    ) -> Result<()> {
        let snapshot = InfoAggregator::collect_all(platform);
        let is_new_model = snapshot.is_new_model();
        info!(is_new_model, "device information collected");

        loop {
            let input = hid.scan_input()?;
            match self.menu.handle(&input) {
                MenuAction::Exit => break,
                MenuAction::EnterButtonTester => {
                    if self.button_tester(platform, hid, display)? == TesterAction::Exit {
                        break;
                    }
                }
                MenuAction::Continue => {}
            }

            let live = InfoAggregator::sample_live(platform, is_new_model);
            let frame = renderer::main_menu(&mut self.ctx, &self.theme, &self.menu, &snapshot, &live);
            display.present(&frame)?;
        }

        info!("exit requested");
        Ok(())
    }

    /// HOME stays blocked for as long as the tester runs.
    fn button_tester<P: Platform + ?Sized>(
        &mut self,
        platform: &mut P,
        hid: &mut dyn Hid,
        display: &mut dyn Display,
    ) -> Result<TesterAction> {
        platform.set_home_allowed(false);
        debug!("button tester started");

        let outcome = self.tester_loop(platform, hid, display);

        platform.set_home_allowed(true);
        debug!(?outcome, "button tester finished");
        outcome
    }

    fn tester_loop<P: Platform + ?Sized>(
        &mut self,
        platform: &P,
        hid: &mut dyn Hid,
        display: &mut dyn Display,
    ) -> Result<TesterAction> {
        let mut tester = ButtonTester::default();
        loop {
            let input = hid.scan_input()?;
            match tester.handle(&input) {
                TesterAction::Stay => {
                    let home = self.home.pressed(platform, &input);
                    let frame = renderer::tester::render(
                        &mut self.ctx,
                        &self.theme,
                        &input,
                        tester.last_touch(),
                        home,
                    );
                    display.present(&frame)?;
                }
                action => return Ok(action),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crate::platform::emulated::ServiceEvent;
    use crate::platform::{
        startup_services, DeviceProfile, EmulatedPlatform, Keys, Service, TouchPosition,
    };
    use crate::ui::assets::Icon;
    use crate::ui::draw::{DrawCommand, Screen};
    use crate::ui::{Font, Frame, Page, Textures};

    /// Plays back a fixed list of frames, then asks to quit.
    struct ScriptedHid {
        frames: VecDeque<InputFrame>,
    }

    impl ScriptedHid {
        fn new(frames: Vec<InputFrame>) -> Self {
            Self {
                frames: frames.into(),
            }
        }
    }

    impl Hid for ScriptedHid {
        fn scan_input(&mut self) -> Result<InputFrame> {
            Ok(self.frames.pop_front().unwrap_or(InputFrame {
                exit_requested: true,
                ..Default::default()
            }))
        }
    }

    #[derive(Default)]
    struct RecordingDisplay {
        frames: Vec<Frame>,
    }

    impl Display for RecordingDisplay {
        fn present(&mut self, frame: &Frame) -> Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    impl RecordingDisplay {
        /// `true` for tester frames, `false` for menu frames.
        fn kinds(&self) -> Vec<bool> {
            let title = t!("tester.title").to_string();
            self.frames
                .iter()
                .map(|f| f.texts(Screen::Top).contains(&title.as_str()))
                .collect()
        }
    }

    fn press(down: Keys, held: Keys) -> InputFrame {
        InputFrame {
            down,
            held: held | down,
            ..Default::default()
        }
    }

    fn run(script: Vec<InputFrame>) -> (App, EmulatedPlatform, RecordingDisplay) {
        run_on(EmulatedPlatform::new(DeviceProfile::default()), false, script)
    }

    fn run_on(
        mut platform: EmulatedPlatform,
        citra: bool,
        script: Vec<InputFrame>,
    ) -> (App, EmulatedPlatform, RecordingDisplay) {
        let ctx = RenderContext::new(Font::packaged().unwrap(), Textures::load().unwrap());
        let home = HomeSource::for_citra(citra);
        let mut app = App::new(ctx, Theme::default(), home);
        let mut hid = ScriptedHid::new(script);
        let mut display = RecordingDisplay::default();
        app.run(&mut platform, &mut hid, &mut display).unwrap();
        (app, platform, display)
    }

    /// Run `script` on a platform with the startup services open, as
    /// `main` leaves it.
    fn run_started(profile: DeviceProfile, script: Vec<InputFrame>) -> RecordingDisplay {
        let citra = profile.citra;
        let mut platform = EmulatedPlatform::new(profile);
        for service in startup_services(citra) {
            platform.init_service(service).unwrap();
        }
        run_on(platform, citra, script).2
    }

    fn home_tint(frame: &Frame) -> Option<ratatui::style::Color> {
        frame.top.commands.iter().find_map(|c| match c {
            DrawCommand::Image {
                icon: Icon::BtnHome,
                tint,
                ..
            } => Some(*tint),
            _ => None,
        })?
    }

    /// Enter the tester, draw one frame with the `h` key down, then quit.
    fn tester_frame(profile: DeviceProfile) -> Frame {
        let display = run_started(
            profile,
            vec![
                press(Keys::R, Keys::L),
                InputFrame {
                    home: true,
                    ..Default::default()
                },
            ],
        );
        display.frames[0].clone()
    }

    #[test]
    fn start_exits_before_drawing() {
        let (_, platform, display) = run(vec![press(Keys::START, Keys::NONE)]);
        assert!(display.frames.is_empty());
        assert!(platform.open_services().is_empty());
    }

    #[test]
    fn quit_request_ends_the_loop() {
        let (app, _, display) = run(vec![]);
        assert!(display.frames.is_empty());
        assert_eq!(app.menu().page(), Page::Kernel);
    }

    #[test]
    fn one_frame_per_input() {
        let (app, _, display) = run(vec![
            press(Keys::DDOWN, Keys::NONE),
            InputFrame::default(),
            press(Keys::CPAD_DOWN, Keys::NONE),
        ]);
        assert_eq!(display.frames.len(), 3);
        assert_eq!(app.menu().page(), Page::Battery);
    }

    #[test]
    fn a_on_exit_page_quits() {
        let (app, _, display) = run(vec![
            press(Keys::DUP, Keys::NONE),
            press(Keys::A, Keys::NONE),
            press(Keys::DDOWN, Keys::NONE),
        ]);
        assert_eq!(display.frames.len(), 1);
        assert_eq!(app.menu().page(), Page::Exit);
    }

    #[test]
    fn select_toggles_private_values() {
        let (app, _, _) = run(vec![press(Keys::SELECT, Keys::NONE)]);
        assert!(!app.menu().show_private());
    }

    #[test]
    fn chord_enters_and_leaves_the_tester() {
        let (app, platform, display) = run(vec![
            press(Keys::L, Keys::NONE),
            press(Keys::R, Keys::L),
            press(Keys::NONE, Keys::L | Keys::R),
            InputFrame {
                touch: Some(TouchPosition { px: 40, py: 90 }),
                ..Default::default()
            },
            press(Keys::L, Keys::R),
            press(Keys::DDOWN, Keys::NONE),
        ]);
        assert_eq!(display.kinds(), vec![false, true, true, false, false]);
        assert_eq!(app.menu().page(), Page::System);
        assert!(platform.home_allowed());
    }

    #[test]
    fn tester_keeps_the_last_touch() {
        let (_, _, display) = run(vec![
            press(Keys::R, Keys::L),
            InputFrame {
                touch: Some(TouchPosition { px: 40, py: 90 }),
                ..Default::default()
            },
            InputFrame::default(),
        ]);
        assert_eq!(display.frames[1], display.frames[0]);
    }

    #[test]
    fn quit_inside_tester_ends_the_app() {
        let (_, platform, display) = run(vec![press(Keys::R, Keys::L)]);
        assert!(display.frames.is_empty());
        assert!(platform.home_allowed());
    }

    #[test]
    fn chord_is_ignored_on_exit_page() {
        let (app, _, display) = run(vec![
            press(Keys::DUP, Keys::NONE),
            press(Keys::R, Keys::L),
        ]);
        assert_eq!(display.kinds(), vec![false, false]);
        assert_eq!(app.menu().page(), Page::Exit);
    }

    #[test]
    fn home_follows_raw_button_state() {
        let theme = Theme::default();
        let released = tester_frame(DeviceProfile {
            raw_button_state: 0x2,
            ..Default::default()
        });
        assert_eq!(home_tint(&released), None);

        let pressed = tester_frame(DeviceProfile {
            raw_button_state: 0x0,
            ..Default::default()
        });
        assert_eq!(home_tint(&pressed), Some(theme.selector));
    }

    #[test]
    fn home_follows_input_under_citra() {
        let frame = tester_frame(DeviceProfile {
            citra: true,
            raw_button_state: 0x0,
            ..Default::default()
        });
        assert_eq!(home_tint(&frame), Some(Theme::default().selector));

        let display = run_started(
            DeviceProfile {
                citra: true,
                raw_button_state: 0x0,
                ..Default::default()
            },
            vec![press(Keys::R, Keys::L), InputFrame::default()],
        );
        assert_eq!(home_tint(&display.frames[0]), None);
    }

    #[test]
    fn snapshot_is_collected_once() {
        let (_, platform, _) = run(vec![
            press(Keys::DDOWN, Keys::NONE),
            press(Keys::DDOWN, Keys::NONE),
            press(Keys::DDOWN, Keys::NONE),
        ]);
        let am_inits = platform
            .service_log()
            .iter()
            .filter(|e| **e == ServiceEvent::Init(Service::Am))
            .count();
        assert_eq!(am_inits, 1);
    }
}
