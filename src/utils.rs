//! Shared utility functions used across modules.

use std::io::Write;

/// Truncate a string to `max_chars` characters, appending "..." if truncated.
///
/// Counts `char`s, so multi-byte text is never split inside a code point.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars > 3 {
        let mut out: String = s.chars().take(max_chars - 3).collect();
        out.push_str("...");
        out
    } else {
        s.chars().take(max_chars).collect()
    }
}

/// Detect whether the terminal can render CJK (double-width) characters.
///
/// Probes by writing a known CJK character and checking how many columns
/// the cursor advanced. Returns `true` if the terminal renders it as
/// 2 columns wide (proper CJK font), `false` if 1 or 0 (missing glyphs).
///
/// This must be called BEFORE entering the alternate screen.
pub fn detect_cjk_support() -> bool {
    if let Some(result) = probe_cjk_terminal() {
        return result;
    }
    check_locale_cjk()
}

/// Probe the terminal by writing a CJK character and measuring cursor advance.
fn probe_cjk_terminal() -> Option<bool> {
    use crossterm::{
        cursor,
        terminal::{disable_raw_mode, enable_raw_mode},
    };

    enable_raw_mode().ok()?;

    let result = (|| -> Option<bool> {
        let mut stdout = std::io::stdout();

        write!(stdout, "\x1B[s\x1B[999D").ok()?; // save + move to column 0
        stdout.flush().ok()?;
        let (base_col, _) = cursor::position().ok()?;

        // 日 = U+65E5, two columns wide when a CJK font is present
        write!(stdout, "\u{65E5}").ok()?;
        stdout.flush().ok()?;
        let (new_col, _) = cursor::position().ok()?;

        write!(stdout, "\x1B[u\x1B[K").ok()?; // restore + clear to end of line
        stdout.flush().ok()?;

        let advance = new_col.saturating_sub(base_col);
        Some(advance >= 2)
    })();

    let _ = disable_raw_mode();
    result
}

/// Fallback: check locale/environment for Chinese hints.
fn check_locale_cjk() -> bool {
    ["LANG", "LC_ALL", "LC_CTYPE"].iter().any(|var| {
        std::env::var(var)
            .map(|val| {
                let lower = val.to_lowercase();
                lower.starts_with("zh") || lower.contains("chinese") || lower.contains("cjk")
            })
            .unwrap_or(false)
    })
}

/// Pick the UI language: the requested one, unless it needs CJK glyphs the
/// terminal cannot draw.
pub fn resolve_language(requested: &str, cjk_supported: bool) -> &str {
    if requested == "zh" && !cjk_supported {
        "en"
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── truncate_str ──────────────────────────────────────────────

    #[test]
    fn truncate_str_short_string_unchanged() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn truncate_str_exact_length() {
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn truncate_str_needs_truncation() {
        assert_eq!(truncate_str("hello world", 8), "hello...");
    }

    #[test]
    fn truncate_str_max_len_3_or_less() {
        assert_eq!(truncate_str("abcdef", 3), "abc");
        assert_eq!(truncate_str("abcdef", 0), "");
    }

    #[test]
    fn truncate_str_counts_chars_not_bytes() {
        // 6 chars, 18 bytes
        assert_eq!(truncate_str("用户配置信息", 6), "用户配置信息");
        assert_eq!(truncate_str("用户配置信息", 5), "用户...");
    }

    #[test]
    fn truncate_str_caps_long_values() {
        let long = "x".repeat(300);
        let out = truncate_str(&long, 127);
        assert_eq!(out.chars().count(), 127);
        assert!(out.ends_with("..."));
    }

    // ── resolve_language ──────────────────────────────────────────

    #[test]
    fn chinese_falls_back_without_cjk() {
        assert_eq!(resolve_language("zh", false), "en");
        assert_eq!(resolve_language("zh", true), "zh");
        assert_eq!(resolve_language("en", false), "en");
    }
}
