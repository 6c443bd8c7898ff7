use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use snapdeck_core::photo_label;

use crate::app::AppState;

use super::theme::Theme;

/// Header widget: title, delete/upload affordances and page size
pub struct Header<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let title_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x + 1, area.y, "Photos", title_style);

        let url_style = Style::default().fg(self.theme.fg_muted);
        buf.set_string(area.x + 8, area.y, "─", Style::default().fg(self.theme.border));
        let max_url = area.width.saturating_sub(60) as usize;
        if max_url > 8 {
            let url = super::text::truncate_end(&self.state.api_url, max_url);
            buf.set_string(area.x + 10, area.y, &url, url_style);
        }

        // Right side: [d] Delete N photos │ [u] Upload │ Page size 25
        let key_style = Style::default()
            .fg(self.theme.yellow)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(self.theme.fg);
        let sep_style = Style::default().fg(self.theme.border);

        let mut parts: Vec<(&str, String, Style)> = Vec::new();
        let selected = self.state.selection_count();
        if selected > 0 {
            parts.push((
                "d",
                format!("Delete {} {}", selected, photo_label(selected)),
                Style::default().fg(self.theme.red).add_modifier(Modifier::BOLD),
            ));
        }
        parts.push(("u", "Upload".to_string(), text_style));
        parts.push((
            "[]",
            format!("Page size {}", self.state.gallery.pager().page_size()),
            text_style,
        ));

        let width: usize = parts
            .iter()
            .map(|(k, d, _)| k.len() + 3 + d.chars().count())
            .sum::<usize>()
            + (parts.len() - 1) * 3;
        let mut x = (area.x + area.width).saturating_sub(width as u16 + 1);

        for (i, (key, desc, style)) in parts.iter().enumerate() {
            let key_str = format!("[{}]", key);
            buf.set_string(x, area.y, &key_str, key_style);
            x += key_str.len() as u16 + 1;
            buf.set_string(x, area.y, desc, *style);
            x += desc.chars().count() as u16;
            if i < parts.len() - 1 {
                buf.set_string(x, area.y, " │ ", sep_style);
                x += 3;
            }
        }
    }
}
