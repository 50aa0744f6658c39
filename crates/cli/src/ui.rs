//! Styled terminal output
//!
//! Consistent result reporting for the menus: successes in green, errors in
//! red, listed items in yellow. `console` handles tty detection, so piped
//! output degrades to plain text.

use console::style;

/// Output surface for menu action results
#[derive(Debug, Default, Clone, Copy)]
pub struct Ui;

impl Ui {
    pub fn new() -> Self {
        Self
    }

    /// A completed action
    pub fn success(&self, message: &str) {
        println!("{} {message}", style("✓").green());
    }

    /// A failed action; never fatal to the session
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", style("✗").red());
    }

    /// A non-fatal caveat
    pub fn warning(&self, message: &str) {
        eprintln!("{} {message}", style("⚠").yellow());
    }

    /// Section heading above a listing
    pub fn heading(&self, message: &str) {
        println!("{}", style(message).green());
    }

    /// One item of a listing
    pub fn item(&self, message: &str) {
        println!("{}", style(message).yellow());
    }

    /// Destructive-action feedback
    pub fn destructive(&self, message: &str) {
        println!("{}", style(message).red());
    }

    /// Session banner
    pub fn banner(&self, message: &str) {
        println!("{}", style(message).cyan().bold());
    }
}
