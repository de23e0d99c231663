//! User-facing status output.

use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};

/// Status icons
pub struct Icons;

impl Icons {
    pub const CHECK: &'static str = "✓";
    pub const WARNING: &'static str = "⚠";

    /// Fallback ASCII versions
    pub const CHECK_ASCII: &'static str = "[ok]";
    pub const WARNING_ASCII: &'static str = "[warn]";
}

/// Icon context that handles unicode support detection
#[derive(Debug, Clone, Copy)]
pub struct IconContext {
    unicode: bool,
}

impl IconContext {
    pub fn new() -> Self {
        Self {
            unicode: detect_unicode_support(),
        }
    }

    pub fn unicode() -> Self {
        Self { unicode: true }
    }

    pub fn ascii() -> Self {
        Self { unicode: false }
    }

    pub fn check(&self) -> &'static str {
        if self.unicode { Icons::CHECK } else { Icons::CHECK_ASCII }
    }

    pub fn warning(&self) -> &'static str {
        if self.unicode { Icons::WARNING } else { Icons::WARNING_ASCII }
    }

    /// Emoji decorations are dropped entirely on ASCII terminals.
    pub fn decorate(&self, emoji: &str, text: &str) -> String {
        if self.unicode {
            format!("{emoji} {text}")
        } else {
            text.to_string()
        }
    }

    /// Like [`decorate`](Self::decorate), with the emoji after the text.
    pub fn decorate_suffix(&self, text: &str, emoji: &str) -> String {
        if self.unicode {
            format!("{text} {emoji}")
        } else {
            text.to_string()
        }
    }
}

impl Default for IconContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether stdout should be colored when the user expressed no preference.
///
/// Off when `NO_COLOR` is set or stdout is not a terminal.
pub fn auto_color() -> bool {
    color_for(env::var_os("NO_COLOR"), io::stdout().is_terminal())
}

fn color_for(no_color: Option<OsString>, is_terminal: bool) -> bool {
    no_color.is_none() && is_terminal
}

fn detect_unicode_support() -> bool {
    env::var("TERM")
        .map(|t| !t.contains("linux"))
        .unwrap_or(true)
        && env::var("LANG")
            .map(|l| l.to_uppercase().contains("UTF"))
            .unwrap_or(true)
}

/// Writes status lines for a human to read.
///
/// Write errors are ignored: console output never decides whether a
/// setup task succeeded.
pub struct Reporter {
    out: Box<dyn Write + Send>,
    icons: IconContext,
    color: bool,
}

impl Reporter {
    pub fn new(out: impl Write + Send + 'static, icons: IconContext, color: bool) -> Self {
        Self {
            out: Box::new(out),
            icons,
            color,
        }
    }

    /// Report to stdout with detected icon support.
    ///
    /// Pass [`auto_color()`] unless the user chose explicitly.
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), IconContext::new(), color)
    }

    pub fn icons(&self) -> &IconContext {
        &self.icons
    }

    /// Print a plain line.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}", text.as_ref());
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    /// Print a line prefixed with an emoji, if the terminal can show one.
    pub fn decorated(&mut self, emoji: &str, text: impl AsRef<str>) {
        let line = self.icons.decorate(emoji, text.as_ref());
        self.line(line);
    }

    pub fn decorated_suffix(&mut self, text: impl AsRef<str>, emoji: &str) {
        let line = self.icons.decorate_suffix(text.as_ref(), emoji);
        self.line(line);
    }

    /// Print a success line.
    pub fn success(&mut self, msg: impl AsRef<str>) {
        let glyph = self.paint(self.icons.check(), "32");
        self.line(format!("{glyph} {}", msg.as_ref()));
    }

    /// Print a warning line.
    pub fn warning(&mut self, msg: impl AsRef<str>) {
        let glyph = self.paint(self.icons.warning(), "33");
        self.line(format!("{glyph} {}", msg.as_ref()));
    }

    /// Print an indented detail line under a status line.
    pub fn detail(&mut self, text: impl AsRef<str>) {
        self.line(format!("  {}", text.as_ref()));
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}
