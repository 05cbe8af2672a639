use ratatui::style::Color;
use serde::Deserialize;

/// All available built-in theme names.
pub const BUILTIN_THEME_NAMES: &[&str] = &["default", "dusk"];

/// Data-driven theme: every color in one struct.
/// Constructed from built-in presets or loaded from TOML files.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,

    // ── Menu ─────────────────────────────────────────────────
    pub background: Color,
    pub status_bar: Color,
    pub menu_bar: Color,
    pub selector: Color,

    // ── Text ─────────────────────────────────────────────────
    pub title: Color,
    pub description: Color,

    // ── Button tester ────────────────────────────────────────
    pub tester_top_bg: Color,
    pub tester_bottom_bg: Color,
    pub tester_frame: Color,
    pub tester_panel: Color,
    pub tester_header: Color,
    pub tester_text: Color,
    pub slider_border: Color,
    pub slider_fill: Color,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────

    /// The console palette.
    pub fn default_dark() -> Self {
        Self {
            name: "default".to_string(),
            background: Color::Rgb(62, 62, 62),
            status_bar: Color::Rgb(44, 44, 44),
            menu_bar: Color::Rgb(52, 52, 52),
            selector: Color::Rgb(223, 74, 22),
            title: Color::Rgb(252, 252, 252),
            description: Color::Rgb(182, 182, 182),
            tester_top_bg: Color::Rgb(60, 61, 63),
            tester_bottom_bg: Color::Rgb(94, 39, 80),
            tester_frame: Color::Rgb(97, 101, 104),
            tester_panel: Color::Rgb(242, 241, 239),
            tester_header: Color::Rgb(66, 65, 61),
            tester_text: Color::Rgb(77, 76, 74),
            slider_border: Color::Rgb(219, 219, 219),
            slider_fill: Color::Rgb(241, 122, 74),
        }
    }

    /// Blue-grey variant with a teal selector.
    pub fn dusk() -> Self {
        Self {
            name: "dusk".to_string(),
            background: Color::Rgb(40, 44, 52),
            status_bar: Color::Rgb(30, 33, 39),
            menu_bar: Color::Rgb(36, 40, 47),
            selector: Color::Rgb(38, 166, 154),
            title: Color::Rgb(236, 239, 244),
            description: Color::Rgb(171, 178, 191),
            ..Self::default_dark()
        }
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_dark()),
            "dusk" => Some(Self::dusk()),
            _ => None,
        }
    }

    /// Load a custom theme from a TOML file, falling back to default for missing fields.
    pub fn from_toml_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let file: ThemeFile = toml::from_str(&content).ok()?;
        Some(
            file.into_theme(
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("custom"),
            ),
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// ── TOML deserialization for custom themes ──────────────────

/// Intermediate struct for parsing theme TOML files.
/// All fields are optional; missing fields inherit from the default theme.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    background: Option<String>,
    status_bar: Option<String>,
    menu_bar: Option<String>,
    selector: Option<String>,
    title: Option<String>,
    description: Option<String>,
    tester_top_bg: Option<String>,
    tester_bottom_bg: Option<String>,
    tester_frame: Option<String>,
    tester_panel: Option<String>,
    tester_header: Option<String>,
    tester_text: Option<String>,
    slider_border: Option<String>,
    slider_fill: Option<String>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Theme {
        let base = Theme::default_dark();
        Theme {
            name: name.to_string(),
            background: parse_color(&self.background).unwrap_or(base.background),
            status_bar: parse_color(&self.status_bar).unwrap_or(base.status_bar),
            menu_bar: parse_color(&self.menu_bar).unwrap_or(base.menu_bar),
            selector: parse_color(&self.selector).unwrap_or(base.selector),
            title: parse_color(&self.title).unwrap_or(base.title),
            description: parse_color(&self.description).unwrap_or(base.description),
            tester_top_bg: parse_color(&self.tester_top_bg).unwrap_or(base.tester_top_bg),
            tester_bottom_bg: parse_color(&self.tester_bottom_bg).unwrap_or(base.tester_bottom_bg),
            tester_frame: parse_color(&self.tester_frame).unwrap_or(base.tester_frame),
            tester_panel: parse_color(&self.tester_panel).unwrap_or(base.tester_panel),
            tester_header: parse_color(&self.tester_header).unwrap_or(base.tester_header),
            tester_text: parse_color(&self.tester_text).unwrap_or(base.tester_text),
            slider_border: parse_color(&self.slider_border).unwrap_or(base.slider_border),
            slider_fill: parse_color(&self.slider_fill).unwrap_or(base.slider_fill),
        }
    }
}

/// Parse a hex color string like "#FF8800" or "FF8800" into a ratatui Color.
fn parse_color(opt: &Option<String>) -> Option<Color> {
    let s = opt.as_ref()?;
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ── parse_color ───────────────────────────────────────────────

    #[test]
    fn parse_color_with_hash() {
        let c = parse_color(&Some("#DF4A16".to_string()));
        assert_eq!(c, Some(Color::Rgb(223, 74, 22)));
    }

    #[test]
    fn parse_color_without_hash() {
        let c = parse_color(&Some("df4a16".to_string()));
        assert_eq!(c, Some(Color::Rgb(223, 74, 22)));
    }

    #[test]
    fn parse_color_none() {
        assert_eq!(parse_color(&None), None);
    }

    #[test]
    fn parse_color_invalid_length() {
        assert_eq!(parse_color(&Some("#FFF".to_string())), None);
        assert_eq!(parse_color(&Some("#FFFFFFF".to_string())), None);
    }

    #[test]
    fn parse_color_invalid_hex() {
        assert_eq!(parse_color(&Some("#GGHHII".to_string())), None);
        // six bytes but not six ASCII digits
        assert_eq!(parse_color(&Some("ééé".to_string())), None);
    }

    // ── by_name ───────────────────────────────────────────────────

    #[test]
    fn by_name_all_builtins() {
        for &name in BUILTIN_THEME_NAMES {
            let theme = Theme::by_name(name);
            assert!(theme.is_some(), "Theme '{}' should exist", name);
            assert_eq!(theme.unwrap().name, name);
        }
    }

    #[test]
    fn by_name_case_insensitive() {
        assert!(Theme::by_name("DEFAULT").is_some());
        assert!(Theme::by_name("Dusk").is_some());
    }

    #[test]
    fn by_name_unknown() {
        assert!(Theme::by_name("nonexistent").is_none());
        assert!(Theme::by_name("").is_none());
    }

    // ── custom files ──────────────────────────────────────────────

    #[test]
    fn custom_theme_overrides_some_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orange.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "selector = \"#FF8800\"").unwrap();

        let theme = Theme::from_toml_file(&path).unwrap();
        assert_eq!(theme.name, "orange");
        assert_eq!(theme.selector, Color::Rgb(255, 136, 0));
        assert_eq!(theme.background, Theme::default_dark().background);
    }

    #[test]
    fn missing_custom_theme_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Theme::from_toml_file(&dir.path().join("nope.toml")).is_none());
    }

    #[test]
    fn default_is_default_dark() {
        let d = Theme::default();
        assert_eq!(d.name, "default");
    }
}
