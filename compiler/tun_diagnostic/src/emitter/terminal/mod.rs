//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support:
//!
//! ```text
//! error[E2001]: unknown identifier `b`
//!  --> demo.tun:1:9
//!   |
//! 1 | let a = b
//!   |         ^ not found in this scope
//!   = note: ...
//! ```

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Source file a diagnostic's spans point into.
struct SourceContext<'s> {
    path: &'s str,
    text: &'s str,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support and source snippets.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'s>>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source file so labels render as `path:line:col` with the
    /// offending line underneath. Without it, labels show raw byte spans.
    #[must_use]
    pub fn with_source(mut self, path: &'s str, text: &'s str) -> Self {
        self.source = Some(SourceContext {
            path,
            text,
            lines: LineOffsetTable::build(text),
        });
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self) {
        self.write_colored("error", colors::ERROR);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn label_color(label: &Label) -> &'static str {
        if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        }
    }

    /// Render a label without source: `  --> 4..9: message`.
    fn write_bare_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
        self.write_colored(&label.message, Self::label_color(label));
        let _ = writeln!(self.writer);
    }

    /// Render a label against the source with a caret underline.
    fn write_snippet_label(&mut self, label: &Label) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        let (line, col) = source.lines.offset_to_line_col(source.text, label.span.start);
        let text: &'s str = source.lines.line_text(source.text, line).unwrap_or("");
        let path: &'s str = source.path;
        let span_chars = source
            .text
            .get(label.span.to_range())
            .map_or(0, |s| s.chars().count());

        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());
        let marker = if label.is_primary { "-->" } else { ":::" };
        let _ = writeln!(self.writer, "{pad}{marker} {path}:{line}:{col}");
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{gutter} | {text}");

        let start = (col as usize).saturating_sub(1);
        let width = span_chars
            .min(text.chars().count().saturating_sub(start))
            .max(1);
        let underline = if label.is_primary { "^" } else { "-" }.repeat(width);
        let color = Self::label_color(label);
        let _ = write!(self.writer, "{pad} | {}", " ".repeat(start));
        self.write_colored(&underline, color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }

    fn write_trailer(&mut self, kind: &str, color: &str, text: &str) {
        let _ = write!(self.writer, "  = ");
        self.write_colored(kind, color);
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_severity();
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            if self.source.is_some() {
                self.write_snippet_label(label);
            } else {
                self.write_bare_label(label);
            }
        }

        for note in &diagnostic.notes {
            self.write_trailer("note", colors::BOLD, note);
        }
        for help in &diagnostic.help {
            self.write_trailer("help", colors::HELP, help);
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests;
