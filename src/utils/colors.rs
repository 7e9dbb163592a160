/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const CYAN: &str = "\x1b[36m";

/// Parse `#rgb` / `#rrggbb` into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.strip_prefix('#').filter(|h| h.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match h.len() {
        6 => Some((channel(&h[0..2])?, channel(&h[2..4])?, channel(&h[4..6])?)),
        3 => {
            let expand = |i: usize| channel(&h[i..i + 1]).map(|v| v * 17);
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

/// 24-bit foreground escape for a hex color; RESET when it cannot be parsed.
pub fn fg_hex(hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m"),
        None => RESET.to_string(),
    }
}

/// Paint `text` in the given hex color.
pub fn paint_hex(text: &str, hex: &str) -> String {
    format!("{}{text}{RESET}", fg_hex(hex))
}
