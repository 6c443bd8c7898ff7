use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Padding, Widget},
};

use super::layout::dialog_rect;
use super::theme::Theme;

/// Generic modal: a title, a few lines of text and key hints
pub struct NoticeView<'a> {
    title: &'a str,
    lines: Vec<(String, Style)>,
    hints: Vec<(&'a str, &'a str)>,
    border: Color,
    theme: &'a Theme,
}

impl<'a> NoticeView<'a> {
    pub fn new(title: &'a str, border: Color, theme: &'a Theme) -> Self {
        Self {
            title,
            lines: Vec::new(),
            hints: Vec::new(),
            border,
            theme,
        }
    }

    /// Add a line of plain text
    pub fn line(mut self, text: impl Into<String>) -> Self {
        let style = Style::default().fg(self.theme.fg);
        self.lines.push((text.into(), style));
        self
    }

    /// Add a dimmed line
    pub fn dim_line(mut self, text: impl Into<String>) -> Self {
        let style = Style::default().fg(self.theme.fg_dim);
        self.lines.push((text.into(), style));
        self
    }

    /// Add a checkbox line
    pub fn checkbox(mut self, label: &str, checked: bool) -> Self {
        let mark = if checked { "[x]" } else { "[ ]" };
        let style = Style::default().fg(if checked { self.theme.green } else { self.theme.fg_dim });
        self.lines.push((format!("{} {}", mark, label), style));
        self
    }

    pub fn hint(mut self, key: &'a str, desc: &'a str) -> Self {
        self.hints.push((key, desc));
        self
    }
}

/// Split `text` into lines of at most `width` chars on word boundaries
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

impl Widget for NoticeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 56u16;
        let text_width = (width as usize).saturating_sub(4).max(1);

        let mut wrapped: Vec<(String, Style)> = Vec::new();
        for (text, style) in &self.lines {
            if text.is_empty() {
                wrapped.push((String::new(), *style));
            }
            for line in wrap(text, text_width) {
                wrapped.push((line, *style));
            }
        }

        // lines + blank + hints + borders/padding
        let height = wrapped.len() as u16 + 2 + 4;
        let dialog_area = dialog_rect(area, width, height);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border))
            .style(Style::default().bg(self.theme.bg_surface))
            .padding(Padding::uniform(1));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        if inner.height < 1 || inner.width < 4 {
            return;
        }

        let bottom = inner.y + inner.height;
        for (i, (text, style)) in wrapped.iter().enumerate() {
            let row = inner.y + i as u16;
            if row + 1 >= bottom {
                break;
            }
            buf.set_stringn(inner.x, row, text, inner.width as usize, *style);
        }

        let key_style = Style::default()
            .fg(self.theme.green)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.fg);
        let hints_y = bottom - 1;
        let mut x = inner.x;
        for (key, desc) in &self.hints {
            let key_str = format!("[{}]", key);
            buf.set_string(x, hints_y, &key_str, key_style);
            x += key_str.chars().count() as u16 + 1;
            buf.set_string(x, hints_y, *desc, desc_style);
            x += desc.chars().count() as u16 + 3;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_on_words() {
        assert_eq!(
            wrap("Backend API is not running", 12),
            vec!["Backend API", "is not", "running"]
        );
        assert_eq!(wrap("", 10), Vec::<String>::new());
    }

    #[test]
    fn test_renders_lines_and_hints() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 70, 16);
        let mut buf = Buffer::empty(area);
        NoticeView::new("Success", theme.green, &theme)
            .line("Photos uploaded successfully!")
            .checkbox("Don't show this pop-up again", true)
            .hint("Enter", "OK")
            .render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Photos uploaded successfully!"));
        assert!(text.contains("[x] Don't show this pop-up again"));
        assert!(text.contains("[Enter] OK"));
    }
}
