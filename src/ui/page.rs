use super::assets::Icon;
use super::context::RenderContext;
use super::renderer::{info, storage, wifi};
use super::theme::Theme;
use crate::models::{LiveState, Snapshot};

/// Main menu pages, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Kernel,
    System,
    Battery,
    Nnid,
    Config,
    Hardware,
    Wifi,
    Storage,
    Misc,
    Exit,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Kernel,
        Page::System,
        Page::Battery,
        Page::Nnid,
        Page::Config,
        Page::Hardware,
        Page::Wifi,
        Page::Storage,
        Page::Misc,
        Page::Exit,
    ];

    pub fn index(&self) -> usize {
        match self {
            Page::Kernel => 0,
            Page::System => 1,
            Page::Battery => 2,
            Page::Nnid => 3,
            Page::Config => 4,
            Page::Hardware => 5,
            Page::Wifi => 6,
            Page::Storage => 7,
            Page::Misc => 8,
            Page::Exit => 9,
        }
    }

    pub fn next(&self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> String {
        match self {
            Page::Kernel => t!("menu.kernel"),
            Page::System => t!("menu.system"),
            Page::Battery => t!("menu.battery"),
            Page::Nnid => t!("menu.nnid"),
            Page::Config => t!("menu.config"),
            Page::Hardware => t!("menu.hardware"),
            Page::Wifi => t!("menu.wifi"),
            Page::Storage => t!("menu.storage"),
            Page::Misc => t!("menu.misc"),
            Page::Exit => t!("menu.exit"),
        }
        .to_string()
    }

    pub fn icon(&self) -> Icon {
        match self {
            Page::Kernel => Icon::MenuKernel,
            Page::System => Icon::MenuSystem,
            Page::Battery => Icon::MenuBattery,
            Page::Nnid => Icon::MenuNnid,
            Page::Config => Icon::MenuConfig,
            Page::Hardware => Icon::MenuHardware,
            Page::Wifi => Icon::MenuWifi,
            Page::Storage => Icon::MenuStorage,
            Page::Misc => Icon::MenuMisc,
            Page::Exit => Icon::MenuExit,
        }
    }

    /// Draw this page's body on the top screen.
    pub fn render(
        &self,
        ctx: &mut RenderContext,
        theme: &Theme,
        snapshot: &Snapshot,
        live: &LiveState,
        show_private: bool,
    ) {
        match self {
            Page::Kernel => info::kernel(ctx, theme, &snapshot.kernel, show_private),
            Page::System => info::system(ctx, theme, &snapshot.system, show_private),
            Page::Battery => info::battery(ctx, theme, &live.battery, &snapshot.system_state),
            Page::Nnid => info::nnid(ctx, theme, &snapshot.nnid, show_private),
            Page::Config => info::config(ctx, theme, &snapshot.config, live, show_private),
            Page::Hardware => info::hardware(
                ctx,
                theme,
                &snapshot.hardware,
                live,
                snapshot.is_new_model(),
            ),
            Page::Wifi => wifi::render(ctx, theme, &snapshot.wifi, show_private),
            Page::Storage => storage::render(ctx, theme, &snapshot.storage),
            Page::Misc => info::misc(ctx, theme, &snapshot.misc, live, show_private),
            Page::Exit => info::exit(ctx, theme),
        }
    }
}
