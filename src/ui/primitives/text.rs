use std::fmt;

use crossterm::style::{Color, Stylize};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl SemanticColor {
    fn color(&self) -> Color {
        match self {
            SemanticColor::Success => theme::colors::SUCCESS,
            SemanticColor::Error => theme::colors::ERROR,
            SemanticColor::Warning => theme::colors::WARNING,
            SemanticColor::Info => theme::colors::INFO,
            SemanticColor::Dim => theme::colors::DIM,
        }
    }
}

/// A run of text with an optional semantic color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    fn with_color(text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_color(text, SemanticColor::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_color(text, SemanticColor::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::with_color(text, SemanticColor::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::with_color(text, SemanticColor::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::with_color(text, SemanticColor::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color || (self.color.is_none() && !self.bold) {
            return self.text.clone();
        }

        let mut styled = self.text.as_str().stylize();
        if let Some(color) = self.color {
            styled = styled.with(color.color());
        }
        if self.bold {
            styled = styled.bold();
        }
        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_color_returns_plain_text() {
        let t = ColoredText::success("ok").bold();
        assert_eq!(t.render(false), "ok");
    }

    #[test]
    fn render_with_color_includes_ansi_escape() {
        let t = ColoredText::error("no");
        let rendered = t.render(true);
        assert!(rendered.contains("\u{1b}["));
    }

    #[test]
    fn plain_text_without_bold_is_unchanged() {
        assert_eq!(ColoredText::plain("x").render(true), "x");
    }
}
