use std::fmt::Display;

use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 48;
pub const PRINT_TARGET: &str = "argot::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str) {
    let title = format!(" {} ", msg.to_uppercase());
    let side = TOTAL_WIDTH.saturating_sub(title.len()) / 2;
    let sep = "═".repeat(side);

    print(&format!(
        "{}{}{}",
        sep.bright_black(),
        title.bright_green().bold(),
        sep.bright_black()
    ));
}

pub fn field(key: &str, value: impl Display) {
    print(&format!(
        "{}{} {}",
        key.bright_black(),
        ":".bright_black(),
        value.to_string().green().bold()
    ));
}

pub fn not_specified() {
    print(&format!("{}", "not specified".italic().bright_black()));
}
