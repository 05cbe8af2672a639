pub mod assets;
mod context;
pub mod draw;
mod format;
mod page;
pub mod renderer;
mod state;
pub mod theme;

pub use assets::{Font, Textures};
pub use context::RenderContext;
pub use draw::{Display, Frame};
pub use page::Page;
pub use state::{ButtonTester, MenuAction, MenuState, TesterAction};
pub use theme::Theme;
