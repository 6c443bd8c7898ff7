use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Padding, Widget},
};

use super::layout::dialog_rect;
use super::text::truncate_end;
use super::theme::Theme;

/// Braille spinner characters
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn spinner_char(frame: usize) -> char {
    SPINNER[frame % SPINNER.len()]
}

/// Small box shown while a blocking API call is in flight
pub struct BusyView<'a> {
    title: &'a str,
    message: &'a str,
    spinner_frame: usize,
    theme: &'a Theme,
}

impl<'a> BusyView<'a> {
    pub fn new(title: &'a str, message: &'a str, spinner_frame: usize, theme: &'a Theme) -> Self {
        Self {
            title,
            message,
            spinner_frame,
            theme,
        }
    }
}

impl Widget for BusyView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.message.chars().count() as u16 + 10).max(30);
        let dialog_area = dialog_rect(area, width, 5);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.blue))
            .style(Style::default().bg(self.theme.bg_surface))
            .padding(Padding::horizontal(1));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        if inner.height < 1 || inner.width < 4 {
            return;
        }

        let spinner_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);
        let row = inner.y + inner.height / 2;
        buf.set_string(
            inner.x,
            row,
            spinner_char(self.spinner_frame).to_string(),
            spinner_style,
        );

        let message = truncate_end(self.message, inner.width.saturating_sub(2) as usize);
        buf.set_string(inner.x + 2, row, &message, Style::default().fg(self.theme.fg));
    }
}
