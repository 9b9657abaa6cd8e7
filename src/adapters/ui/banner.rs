//! Welcome banner: "MINDCHAT" in figlet's standard font, shaded top to bottom.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE: &str = "MINDCHAT";
/// Lavender (#b794f4) to sea green (#48bb78).
const TOP: [u8; 3] = [0xb7, 0x94, 0xf4];
const BOTTOM: [u8; 3] = [0x48, 0xbb, 0x78];

/// Figlet art for `text`, one entry per row. Empty if the font fails to load.
fn art_rows(text: &str) -> Vec<String> {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|figure| figure.to_string()))
        .map(|art| art.lines().map(str::to_owned).collect())
        .unwrap_or_default()
}

/// `rows` evenly spaced shades from `TOP` to `BOTTOM`, both ends included.
fn shades(rows: usize) -> Vec<Color> {
    let span = rows.saturating_sub(1).max(1) as f64;
    (0..rows)
        .map(|row| {
            let t = row as f64 / span;
            let [r, g, b]: [u8; 3] = std::array::from_fn(|c| {
                (f64::from(TOP[c]) + (f64::from(BOTTOM[c]) - f64::from(TOP[c])) * t).round() as u8
            });
            Color::Rgb { r, g, b }
        })
        .collect()
}

/// Prints the banner followed by the version and a `/help` hint.
pub fn print_welcome() {
    let mut out = stdout();
    let rows = art_rows(TITLE);
    for (row, shade) in rows.iter().zip(shades(rows.len())) {
        let _ = out.execute(SetForegroundColor(shade));
        let _ = out.execute(Print(format!("{row}\r\n")));
    }

    let [r, g, b] = BOTTOM;
    let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
    let _ = out.execute(Print(format!(
        "v{}  ·  type /help for commands\r\n",
        env!("CARGO_PKG_VERSION")
    )));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shades_span_both_ends() {
        let colors = shades(6);
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[0], Color::Rgb { r: 0xb7, g: 0x94, b: 0xf4 });
        assert_eq!(colors[5], Color::Rgb { r: 0x48, g: 0xbb, b: 0x78 });
        assert_eq!(shades(1), vec![Color::Rgb { r: 0xb7, g: 0x94, b: 0xf4 }]);
        assert!(shades(0).is_empty());
    }

    #[test]
    fn test_art_rows_render_title() {
        let rows = art_rows(TITLE);
        assert!(rows.len() > 1);
        assert!(rows.iter().any(|row| !row.trim().is_empty()));
    }
}
