// SPDX-License-Identifier: PMPL-1.0-or-later
//! Line-oriented report layout.
//!
//! All indentation and label alignment lives here. Reporters push sections,
//! fields and list items; the layout turns them into newline-terminated
//! lines.

use std::fmt::Display;

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

/// Width of the label column, wide enough for `"Disk usage: "`.
pub const LABEL_WIDTH: usize = 12;

/// Accumulates report lines at a current indentation level.
#[derive(Debug, Clone, Default)]
pub struct ReportLayout {
    lines: Vec<String>,
    level: usize,
}

impl ReportLayout {
    /// An empty layout starting at `level`.
    pub fn at_level(level: usize) -> Self {
        Self {
            lines: Vec::new(),
            level,
        }
    }

    /// Current nesting level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Push a line of free text at the current level.
    pub fn line(&mut self, text: impl Display) -> &mut Self {
        let indent = " ".repeat(self.level * INDENT_WIDTH);
        self.lines.push(format!("{indent}{text}"));
        self
    }

    /// Push `label:` padded to the label column, followed by `value`.
    pub fn field(&mut self, label: &str, value: impl Display) -> &mut Self {
        let label = format!("{label}:");
        self.line(format_args!("{label:<LABEL_WIDTH$}{value}"))
    }

    /// Push a section heading (`label:` with nothing after it).
    pub fn section(&mut self, label: &str) -> &mut Self {
        self.line(format_args!("{label}:"))
    }

    /// Push a bulleted list item.
    pub fn item(&mut self, text: impl Display) -> &mut Self {
        self.line(format_args!("* {text}"))
    }

    /// Run `build` one level deeper, then return to the current level.
    pub fn nested<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.level += 1;
        build(self);
        self.level -= 1;
        self
    }

    /// Like [`nested`](Self::nested) for builders that can fail.
    pub fn try_nested<F, E>(&mut self, build: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.level += 1;
        let result = build(self);
        self.level -= 1;
        result.map(|()| self)
    }

    /// Append lines already laid out elsewhere, unchanged.
    pub fn extend(&mut self, other: ReportLayout) -> &mut Self {
        self.lines.extend(other.lines);
        self
    }

    /// The accumulated lines, without terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join all lines, each terminated by a newline.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in self.lines {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_alignment() {
        let mut layout = ReportLayout::default();
        layout.field("Path", "<x>").field("Disk usage", "1.000KiB");
        assert_eq!(layout.lines(), ["Path:       <x>", "Disk usage: 1.000KiB"]);
    }

    #[test]
    fn test_nesting_indents_two_spaces_per_level() {
        let mut layout = ReportLayout::default();
        layout.section("Outer").nested(|l| {
            l.item("a").nested(|l| {
                l.line("deep");
            });
        });
        layout.line("back");
        assert_eq!(layout.lines(), ["Outer:", "  * a", "    deep", "back"]);
    }

    #[test]
    fn test_try_nested_restores_level_on_error() {
        let mut layout = ReportLayout::at_level(1);
        let result: Result<_, &str> = layout.try_nested(|_| Err("boom"));
        assert!(result.is_err());
        assert_eq!(layout.level(), 1);
    }

    #[test]
    fn test_finish_terminates_every_line() {
        let mut layout = ReportLayout::default();
        layout.line("a").line("b");
        assert_eq!(layout.finish(), "a\nb\n");
        assert_eq!(ReportLayout::default().finish(), "");
    }

    #[test]
    fn test_extend_keeps_foreign_indentation() {
        let mut inner = ReportLayout::at_level(2);
        inner.line("x");
        let mut outer = ReportLayout::default();
        outer.line("top").extend(inner);
        assert_eq!(outer.finish(), "top\n    x\n");
    }
}
