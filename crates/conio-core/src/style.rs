//! Style names, escape sequences and message templates.
//!
//! ## Style Table
//!
//! | Group | Names |
//! |-------|-------|
//! | Foreground | `black` `red` `green` `yellow` `blue` `magenta` `cyan` `white` |
//! | Background | `bg_black` `bg_red` `bg_green` `bg_yellow` `bg_blue` `bg_magenta` `bg_cyan` `bg_white` |
//! | Attributes | `bold` `dim` `italic` `underline` `blink` `reverse` `hidden` |
//! | Reset | `reset` |
//!
//! ## Message Types
//!
//! | Label | Meaning | Color |
//! |-------|---------|-------|
//! | ` SUCCESS:` | Success | white on green, message green |
//! | `! WARNING:` | Warning | yellow, message uncolored |
//! | ` ERROR:` | Error | white on red, message red |

/// Name of the style every closing tag maps to.
pub const RESET: &str = "reset";

const STYLES: &[(&str, &str)] = &[
    // Colors
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
    // Background colors
    ("bg_black", "\x1b[40m"),
    ("bg_red", "\x1b[41m"),
    ("bg_green", "\x1b[42m"),
    ("bg_yellow", "\x1b[43m"),
    ("bg_blue", "\x1b[44m"),
    ("bg_magenta", "\x1b[45m"),
    ("bg_cyan", "\x1b[46m"),
    ("bg_white", "\x1b[47m"),
    // Formatting
    ("bold", "\x1b[1m"),
    ("dim", "\x1b[2m"),
    ("italic", "\x1b[3m"),
    ("underline", "\x1b[4m"),
    ("blink", "\x1b[5m"),
    ("reverse", "\x1b[7m"),
    ("hidden", "\x1b[8m"),
    // Reset
    (RESET, "\x1b[0m"),
];

/// Immutable mapping from style name to ANSI escape sequence.
///
/// Iteration order is fixed: foreground colors, background colors,
/// attributes, then `reset`.
#[derive(Debug, Clone, Copy)]
pub struct StyleTable {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleTable {
    /// The standard 24-entry table.
    pub fn new() -> Self {
        Self { entries: STYLES }
    }

    /// Escape sequence for a style name.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(style, _)| *style == name)
            .map(|(_, code)| *code)
    }

    /// Escape sequence that clears all styling.
    pub fn reset(&self) -> &'static str {
        self.get(RESET).unwrap_or("\x1b[0m")
    }

    /// All `(name, escape)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no styles.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Status message kinds with fixed, greppable labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// Operation completed successfully
    Success,
    /// Operation succeeded with caveats
    Warning,
    /// Operation failed
    Error,
}

impl MessageType {
    /// Returns the plain label text for this message type.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => " SUCCESS:",
            Self::Warning => "! WARNING:",
            Self::Error => " ERROR:",
        }
    }

    /// Compose the markup for a message of this type.
    ///
    /// # Example
    ///
    /// ```
    /// use conio_core::style::MessageType;
    ///
    /// assert_eq!(
    ///     MessageType::Warning.markup("disk almost full"),
    ///     "<yellow>! WARNING:</yellow> disk almost full"
    /// );
    /// ```
    pub fn markup(&self, message: &str) -> String {
        let label = self.label();
        match self {
            Self::Success => format!(
                "<bg_green><white>{}</white></bg_green> <green>{}</green>",
                label, message
            ),
            Self::Warning => format!("<yellow>{}</yellow> {}", label, message),
            Self::Error => format!(
                "<bg_red><white>{}</white></bg_red> <red>{}</red>",
                label, message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_all_styles() {
        let table = StyleTable::new();
        assert_eq!(table.len(), 24);
        assert_eq!(table.get("red"), Some("\x1b[31m"));
        assert_eq!(table.get("bg_white"), Some("\x1b[47m"));
        assert_eq!(table.get("reverse"), Some("\x1b[7m"));
        assert_eq!(table.get("hidden"), Some("\x1b[8m"));
        assert_eq!(table.reset(), "\x1b[0m");
        assert_eq!(table.get("purple"), None);
    }

    #[test]
    fn test_table_order() {
        let names: Vec<_> = StyleTable::new().iter().map(|(name, _)| name).collect();
        assert_eq!(names.first(), Some(&"black"));
        assert_eq!(names[8], "bg_black");
        assert_eq!(names[16], "bold");
        assert_eq!(names.last(), Some(&RESET));
    }

    #[test]
    fn test_message_templates() {
        assert_eq!(
            MessageType::Success.markup("Saved"),
            "<bg_green><white> SUCCESS:</white></bg_green> <green>Saved</green>"
        );
        assert_eq!(
            MessageType::Warning.markup("Careful"),
            "<yellow>! WARNING:</yellow> Careful"
        );
        assert_eq!(
            MessageType::Error.markup("Failed"),
            "<bg_red><white> ERROR:</white></bg_red> <red>Failed</red>"
        );
    }
}
