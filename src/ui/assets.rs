//! Packaged assets: font metrics and the icon sheet.
//!
//! Both are TOML documents embedded in the binary. The font may be replaced
//! by a user file; the icon sheet may not.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

const PACKAGED_FONT: &str = include_str!("../../assets/font.toml");
const PACKAGED_TEXTURES: &str = include_str!("../../assets/textures.toml");

/// Glyph metrics in pixels at text scale 1.0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Font {
    pub name: String,
    /// Width of one terminal column.
    pub advance: f32,
    pub line_height: f32,
    /// Extra factor applied when measuring, for fonts drawn larger than
    /// their nominal size.
    #[serde(default = "default_measure_scale")]
    pub measure_scale: f32,
}

fn default_measure_scale() -> f32 {
    1.0
}

impl Font {
    pub fn packaged() -> Result<Self> {
        toml::from_str(PACKAGED_FONT).context("packaged font metrics are invalid")
    }

    /// Load the user font, or the packaged one if `path` is unset, missing
    /// or invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            match Self::from_file(path) {
                Ok(font) => {
                    debug!(path = %path.display(), font = %font.name, "user font loaded");
                    return Ok(font);
                }
                Err(e) => warn!(error = %e, "falling back to packaged font"),
            }
        }
        Self::packaged()
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read font {}", path.display()))?;
        let font: Font = toml::from_str(&content)
            .with_context(|| format!("cannot parse font {}", path.display()))?;
        if font.advance <= 0.0 || font.line_height <= 0.0 {
            return Err(anyhow!("font {} has non-positive metrics", path.display()));
        }
        Ok(font)
    }

    pub fn text_width(&self, size: f32, text: &str) -> f32 {
        text.width() as f32 * self.advance * size * self.measure_scale
    }

    pub fn text_height(&self, size: f32) -> f32 {
        self.line_height * size * self.measure_scale
    }
}

/// Every icon the pages draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Banner,
    Drive,
    Volume,
    Cursor,
    MenuKernel,
    MenuSystem,
    MenuBattery,
    MenuNnid,
    MenuConfig,
    MenuHardware,
    MenuWifi,
    MenuStorage,
    MenuMisc,
    MenuExit,
    BtnL,
    BtnR,
    BtnZl,
    BtnZr,
    BtnA,
    BtnB,
    BtnX,
    BtnY,
    BtnStartSelect,
    BtnHome,
    BtnCpad,
    BtnDpad,
    BtnCstick,
}

impl Icon {
    pub const ALL: [Icon; 27] = [
        Icon::Banner,
        Icon::Drive,
        Icon::Volume,
        Icon::Cursor,
        Icon::MenuKernel,
        Icon::MenuSystem,
        Icon::MenuBattery,
        Icon::MenuNnid,
        Icon::MenuConfig,
        Icon::MenuHardware,
        Icon::MenuWifi,
        Icon::MenuStorage,
        Icon::MenuMisc,
        Icon::MenuExit,
        Icon::BtnL,
        Icon::BtnR,
        Icon::BtnZl,
        Icon::BtnZr,
        Icon::BtnA,
        Icon::BtnB,
        Icon::BtnX,
        Icon::BtnY,
        Icon::BtnStartSelect,
        Icon::BtnHome,
        Icon::BtnCpad,
        Icon::BtnDpad,
        Icon::BtnCstick,
    ];

    /// Table name in the icon sheet.
    pub fn key(&self) -> &'static str {
        match self {
            Icon::Banner => "banner",
            Icon::Drive => "drive",
            Icon::Volume => "volume",
            Icon::Cursor => "cursor",
            Icon::MenuKernel => "menu_kernel",
            Icon::MenuSystem => "menu_system",
            Icon::MenuBattery => "menu_battery",
            Icon::MenuNnid => "menu_nnid",
            Icon::MenuConfig => "menu_config",
            Icon::MenuHardware => "menu_hardware",
            Icon::MenuWifi => "menu_wifi",
            Icon::MenuStorage => "menu_storage",
            Icon::MenuMisc => "menu_misc",
            Icon::MenuExit => "menu_exit",
            Icon::BtnL => "btn_l",
            Icon::BtnR => "btn_r",
            Icon::BtnZl => "btn_zl",
            Icon::BtnZr => "btn_zr",
            Icon::BtnA => "btn_a",
            Icon::BtnB => "btn_b",
            Icon::BtnX => "btn_x",
            Icon::BtnY => "btn_y",
            Icon::BtnStartSelect => "btn_start_select",
            Icon::BtnHome => "btn_home",
            Icon::BtnCpad => "btn_cpad",
            Icon::BtnDpad => "btn_dpad",
            Icon::BtnCstick => "btn_cstick",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Texture {
    pub width: f32,
    pub height: f32,
    /// What the terminal prints in the icon's place.
    pub glyph: String,
}

/// The icon sheet, indexed by icon.
#[derive(Debug, Clone)]
pub struct Textures {
    sheet: HashMap<Icon, Texture>,
}

impl Textures {
    /// Parse the packaged icon sheet. Any missing icon is an error.
    pub fn load() -> Result<Self> {
        Self::from_toml_str(PACKAGED_TEXTURES)
    }

    fn from_toml_str(content: &str) -> Result<Self> {
        let mut raw: HashMap<String, Texture> =
            toml::from_str(content).context("icon sheet is invalid")?;
        let mut sheet = HashMap::with_capacity(Icon::ALL.len());
        for icon in Icon::ALL {
            let texture = raw
                .remove(icon.key())
                .ok_or_else(|| anyhow!("icon sheet has no entry for {}", icon.key()))?;
            sheet.insert(icon, texture);
        }
        Ok(Self { sheet })
    }

    pub fn get(&self, icon: Icon) -> &Texture {
        // every icon is checked in `from_toml_str`
        &self.sheet[&icon]
    }
}
