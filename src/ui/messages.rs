use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tag(colour: Colour, icon: &str) -> String {
    colour.bold().paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(Colour::Red, ICON_ERR), msg);
}

/// Section header, e.g. `====================== Production (shift A)`
pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("====================== {msg}");
    println!("{}", Style::new().bold().fg(Colour::Blue).paint(line));
}
