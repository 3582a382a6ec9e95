use forkhandle::fmt::{Color, Palette, colorize, paint, strip_ansi};
use std::collections::HashMap;

#[test]
fn colorize_known_names() {
    assert_eq!(colorize("red", "x"), "\x1b[31mx\x1b[39m");
    assert_eq!(colorize("cyan", "file.css"), "\x1b[36mfile.css\x1b[39m");
    assert_eq!(colorize("grey", "t"), colorize("gray", "t"));
}

#[test]
fn colorize_unknown_name_is_noop() {
    assert_eq!(colorize("chartreuse", "x"), "x");
    assert_eq!(colorize("", "x"), "x");
    assert_eq!(colorize("Red", "x"), "x");
}

#[test]
fn colorize_empty_text_stays_empty() {
    assert_eq!(colorize("red", ""), "");
}

#[test]
fn every_listed_name_is_recognized() {
    for name in Color::NAMES {
        assert!(Color::is_named(name), "{name}");
    }
}

#[test]
fn from_hex_parses_and_rejects() {
    assert_eq!(Color::from_hex("#ff00aa"), Some(Color::Rgb(255, 0, 170)));
    assert_eq!(Color::from_hex("01a2ff"), Some(Color::Rgb(1, 162, 255)));
    assert_eq!(Color::from_hex("#fff"), None);
    assert_eq!(Color::from_hex("zz00aa"), None);
}

#[test]
fn rgb_paint_uses_true_color() {
    assert_eq!(paint("hi", Color::Rgb(1, 2, 3)), "\x1b[38;2;1;2;3mhi\x1b[39m");
}

#[test]
fn palette_overrides_only_recognized_names() {
    let mut table = HashMap::new();
    table.insert("red".to_string(), "#ff5555".to_string());
    table.insert("accent".to_string(), "#00ff00".to_string());
    table.insert("green".to_string(), "nope".to_string());
    let palette = Palette::from_table(&table);

    assert_eq!(palette.resolve("red"), Some(Color::Rgb(255, 85, 85)));
    assert_eq!(palette.resolve("green"), Some(Color::Green));
    assert_eq!(palette.resolve("accent"), None);
    assert_eq!(palette.colorize("accent", "x"), "x");
}

#[test]
fn strip_ansi_removes_sgr() {
    let colored = format!("{} {}", colorize("green", "✔"), colorize("cyan", "a.css"));
    assert_eq!(strip_ansi(&colored), "✔ a.css");
}
