// Author: Cinnamon Screensaver contributors
// License: MIT

use std::process::Stdio;

use tokio::process::Command;

use crate::core::error::SettingsError;
use crate::sdebug;

pub const SCREENSAVER_SCHEMA: &str = "org.cinnamon.desktop.screensaver";
pub const CUSTOM_SCREENSAVER_KEY: &str = "custom-screensaver-command";

/// Read the configured custom screensaver command ("" when unset).
pub async fn get_custom_screensaver() -> Result<String, SettingsError> {
    let output = Command::new("gsettings")
        .args(["get", SCREENSAVER_SCHEMA, CUSTOM_SCREENSAVER_KEY])
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(SettingsError::Unavailable)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SettingsError::Rejected(stderr.trim().to_string()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let raw = stdout.trim();
    sdebug!("Settings", "{}.{} = {}", SCREENSAVER_SCHEMA, CUSTOM_SCREENSAVER_KEY, raw);

    parse_gvariant_string(raw).ok_or_else(|| SettingsError::Malformed(raw.to_string()))
}

/// Decode a GVariant text-format string literal, as printed by
/// `gsettings get`: `'...'` or `"..."`, optionally `@s`-annotated,
/// with backslash escapes.
pub fn parse_gvariant_string(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let raw = raw.strip_prefix("@s ").map(str::trim_start).unwrap_or(raw);

    let mut chars = raw.chars();
    let quote = chars.next().filter(|c| *c == '\'' || *c == '"')?;

    let mut out = String::new();
    loop {
        let c = chars.next()?;
        if c == quote {
            break;
        }
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\u{7}'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            'u' => out.push(hex_char(&mut chars, 4)?),
            'U' => out.push(hex_char(&mut chars, 8)?),
            other => out.push(other),
        }
    }

    // Nothing may follow the closing quote.
    chars.as_str().trim().is_empty().then_some(out)
}

fn hex_char(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.len() != digits {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
}
