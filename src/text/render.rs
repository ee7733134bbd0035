//! Terminal rendering of styled text.

use console::Style;

use super::attributes::Attributes;
use super::styled::StyledText;

impl Attributes {
    /// The closest terminal style for these attributes.
    ///
    /// Colors map to the ANSI 256-color palette. Bold fonts become bold
    /// text. Attributes a terminal cannot show (kerning, paragraph layout,
    /// shadows) are ignored.
    pub fn console_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(color) = self.foreground {
            style = style.color256(color.to_ansi256());
        }
        if let Some(color) = self.background {
            style = style.on_color256(color.to_ansi256());
        }
        if self.font.as_ref().is_some_and(|font| font.is_bold()) {
            style = style.bold();
        }
        if self.underline_style.is_some() {
            style = style.underlined();
        }
        if self.strikethrough_style.is_some() {
            style = style.strikethrough();
        }
        style
    }
}

impl StyledText {
    /// Renders the text with ANSI escape codes, one styled segment per run.
    ///
    /// Styling is forced on, regardless of whether the current output is a
    /// terminal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use garnish::text::StyledText;
    /// use garnish::Color;
    ///
    /// let warning = StyledText::plain("careful").with_color(Color::RED);
    /// assert!(warning.render_ansi().contains("\x1b[38;5;196m"));
    /// ```
    pub fn render_ansi(&self) -> String {
        let mut chars = self.text.chars();
        let mut out = String::with_capacity(self.text.len());
        for (range, attributes) in self.runs() {
            let segment: String = chars.by_ref().take(range.len()).collect();
            if attributes.is_plain() {
                out.push_str(&segment);
            } else {
                let style = attributes.console_style().force_styling(true);
                out.push_str(&style.apply_to(segment).to_string());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::text::{Font, FontWeight, LineStyle, StyledTextBuilder};

    #[test]
    fn test_plain_text_has_no_escapes() {
        let text = StyledText::plain("nothing fancy");
        assert_eq!(text.render_ansi(), "nothing fancy");
    }

    #[test]
    fn test_foreground_and_background() {
        let text = StyledTextBuilder::new("hi")
            .color(Color::RED)
            .background_color(Color::BLUE)
            .build();
        let output = text.render_ansi();
        assert!(output.contains("\x1b[38;5;196m"));
        assert!(output.contains("\x1b[48;5;21m"));
        assert!(output.contains("hi"));
    }

    #[test]
    fn test_decorations() {
        let text = StyledTextBuilder::new("x")
            .font(Font::new("Menlo", 12.0).with_weight(FontWeight::Bold))
            .underline(Some(LineStyle::Single), None)
            .build();
        let output = text.render_ansi();
        assert!(output.contains("\x1b[1m"));
        assert!(output.contains("\x1b[4m"));
    }

    #[test]
    fn test_each_run_is_styled_separately() {
        let text = StyledText::plain("plain ") + StyledText::plain("red").with_color(Color::RED);
        let output = text.render_ansi();
        assert!(output.starts_with("plain "));
        assert!(output.contains("\x1b[38;5;196mred"));
    }
}
