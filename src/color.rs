//! ANSI colors for console diagnostics
//!
//! Color is cosmetic only; nothing parses this output.

pub const ANSI_RESET: &str = "\x1b[0m";
pub const ANSI_RED: &str = "\x1b[31m";
pub const ANSI_GREEN: &str = "\x1b[32m";
pub const ANSI_YELLOW: &str = "\x1b[33m";
pub const ANSI_MAGENTA: &str = "\x1b[35m";
pub const ANSI_CYAN: &str = "\x1b[36m";
pub const ANSI_WHITE: &str = "\x1b[37m";
pub const ANSI_GRAY: &str = "\x1b[90m";
pub const ANSI_BRIGHT_BLUE: &str = "\x1b[94m";
pub const ANSI_BOLD: &str = "\x1b[1m";

/// Print a line wrapped in the given color code
pub fn colored_println(message: &str, color: &str) {
    println!("{}{}{}", color, message, ANSI_RESET);
}
