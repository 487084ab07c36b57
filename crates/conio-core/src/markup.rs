//! Style-tag markup rendering.
//!
//! Markup is ordinary text with `<style>...</any>` tags. Rendering has two
//! modes:
//!
//! - **styled**: every literal `<name>` of a known style becomes its escape
//!   sequence, then every closing tag `</...>`, whatever it names, becomes the
//!   reset sequence. Closing tags do not restore an outer style.
//! - **plain**: every `<...>` span is removed, known style or not.

use regex::{NoExpand, Regex};

use crate::style::StyleTable;

/// Converts markup into styled or plain text.
#[derive(Debug, Clone)]
pub struct Formatter {
    styles: StyleTable,
    tag_re: Regex,
    close_tag_re: Regex,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// Create a formatter over the standard style table.
    pub fn new() -> Self {
        Self::with_styles(StyleTable::new())
    }

    /// Create a formatter over a specific style table.
    pub fn with_styles(styles: StyleTable) -> Self {
        Self {
            styles,
            tag_re: Regex::new(r"<[^>]+>").expect("Invalid regex"),
            close_tag_re: Regex::new(r"</[^>]+>").expect("Invalid regex"),
        }
    }

    /// The style table used for styled rendering.
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Render markup, styled when `colors` is true and plain otherwise.
    pub fn render(&self, text: &str, colors: bool) -> String {
        if colors {
            self.styled(text)
        } else {
            self.plain(text)
        }
    }

    /// Replace style tags with escape sequences.
    ///
    /// # Example
    ///
    /// ```
    /// use conio_core::markup::Formatter;
    ///
    /// let formatter = Formatter::new();
    /// assert_eq!(formatter.styled("<red>x</red>"), "\x1b[31mx\x1b[0m");
    /// ```
    pub fn styled(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (name, code) in self.styles.iter() {
            let tag = format!("<{}>", name);
            if out.contains(&tag) {
                out = out.replace(&tag, code);
            }
        }

        self.close_tag_re
            .replace_all(&out, NoExpand(self.styles.reset()))
            .into_owned()
    }

    /// Remove every tag-shaped span.
    ///
    /// # Example
    ///
    /// ```
    /// use conio_core::markup::Formatter;
    ///
    /// let formatter = Formatter::new();
    /// assert_eq!(formatter.plain("<bold>Hi</bold> <x>there</y>"), "Hi there");
    /// ```
    pub fn plain(&self, text: &str) -> String {
        self.tag_re.replace_all(text, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_known_tag() {
        let formatter = Formatter::new();
        for (name, code) in StyleTable::new().iter() {
            let markup = format!("<{}>X</{}>", name, name);
            assert_eq!(formatter.styled(&markup), format!("{}X\x1b[0m", code));
        }
    }

    #[test]
    fn test_close_tags_always_reset() {
        let formatter = Formatter::new();
        assert_eq!(
            formatter.styled("<bold><red>a</red>b</bold>"),
            "\x1b[1m\x1b[31ma\x1b[0mb\x1b[0m"
        );
        assert_eq!(formatter.styled("x</anything>y"), "x\x1b[0my");
    }

    #[test]
    fn test_unknown_open_tag_left_alone_when_styled() {
        let formatter = Formatter::new();
        assert_eq!(formatter.styled("<purple>x</purple>"), "<purple>x\x1b[0m");
        assert_eq!(formatter.styled("a < b > c"), "a < b > c");
    }

    #[test]
    fn test_styled_replaces_every_occurrence() {
        let formatter = Formatter::new();
        assert_eq!(
            formatter.styled("<green>1</green> <green>2</green>"),
            "\x1b[32m1\x1b[0m \x1b[32m2\x1b[0m"
        );
    }

    #[test]
    fn test_plain_strips_all_tags() {
        let formatter = Formatter::new();
        assert_eq!(formatter.plain("<bg_red><white> ERROR:</white></bg_red>"), " ERROR:");
        assert_eq!(formatter.plain("<unknown>text</nope>"), "text");
        assert_eq!(formatter.plain("no tags here"), "no tags here");
        assert_eq!(formatter.plain("a <> b"), "a <> b");
    }

    #[test]
    fn test_plain_leaves_no_tag_spans() {
        let formatter = Formatter::new();
        let samples = [
            "<<red>x>",
            "<a<b>>c",
            "<red>1 < 2</red> and 3 > 2",
            "<<<>>>",
            "</></x><y>",
            "plain",
        ];
        for sample in samples {
            let out = formatter.plain(sample);
            assert!(
                !formatter.tag_re.is_match(&out),
                "{:?} rendered as {:?}",
                sample,
                out
            );
        }
    }

    #[test]
    fn test_render_switches_mode() {
        let formatter = Formatter::new();
        assert_eq!(formatter.render("<blue>x</blue>", true), "\x1b[34mx\x1b[0m");
        assert_eq!(formatter.render("<blue>x</blue>", false), "x");
    }
}
