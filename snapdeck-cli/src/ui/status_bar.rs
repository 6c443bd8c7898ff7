use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::app::AppState;

use super::progress::spinner_char;
use super::text::truncate_end;
use super::theme::Theme;

/// One-line summary of what is loaded and what is under the cursor
pub struct StatusBar<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let pager = self.state.gallery.pager();
        let loaded = pager.items().len();
        let mut summary = format!(
            "{} loaded · page {}{}",
            loaded,
            pager.current_page() + 1,
            if pager.has_more() { "" } else { " (all)" }
        );
        if pager.is_loading() {
            let spinner = spinner_char(self.state.spinner_frame);
            summary = format!("{} {} · loading...", spinner, summary);
        }
        buf.set_string(area.x + 1, area.y, &summary, Style::default().fg(self.theme.fg_dim));

        // Image reference of the photo under the cursor, right-aligned
        if let Some(photo) = self.state.cursor_photo() {
            let reference = if photo.raw_is_url() {
                photo.raw.clone()
            } else if photo.raw.is_empty() {
                "no image".to_string()
            } else {
                format!("inline image, {} bytes", photo.raw.len())
            };
            let room = (area.width as usize).saturating_sub(summary.chars().count() + 6);
            if room > 10 {
                let text = truncate_end(&reference, room);
                let x = area.x + area.width - text.chars().count() as u16 - 1;
                buf.set_string(x, area.y, &text, Style::default().fg(self.theme.fg_muted));
            }
        }
    }
}
