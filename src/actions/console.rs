//! Console action implementation

use std::fmt;

use crate::core::{Action, Level};

/// The default output action: the formatted message, one line per call,
/// routed by severity. Fatal, Error, and Warn go to stderr; everything else
/// goes to stdout.
pub struct ConsoleAction {
    use_colors: bool,
}

impl ConsoleAction {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create a console action with severity tinting switched on or off.
    /// Tinting only takes effect when the `console` feature is enabled, and
    /// never changes the message content.
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn colors_enabled(&self) -> bool {
        cfg!(feature = "console") && self.use_colors
    }
}

impl Default for ConsoleAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for ConsoleAction {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
        #[cfg(feature = "console")]
        if self.use_colors {
            use colored::Colorize;
            let line = message.to_string().color(level.color_code()).to_string();
            if level.is_urgent() {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
            return;
        }

        if level.is_urgent() {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    }

    fn flush(&self) {
        use std::io::Write;
        // Both streams may have been written to.
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }

    fn name(&self) -> &str {
        "console"
    }
}
