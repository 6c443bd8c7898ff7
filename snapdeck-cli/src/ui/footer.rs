use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use snapdeck_core::photo_label;

use crate::app::{AppMode, SessionStats};

use super::theme::Theme;

/// Footer widget showing keyboard hints and session stats
pub struct Footer<'a> {
    mode: AppMode,
    can_load_more: bool,
    theme: &'a Theme,
    session_stats: &'a SessionStats,
}

impl<'a> Footer<'a> {
    pub fn new(mode: AppMode, theme: &'a Theme, session_stats: &'a SessionStats) -> Self {
        Self {
            mode,
            can_load_more: false,
            theme,
            session_stats,
        }
    }

    pub fn with_load_more(mut self, can_load_more: bool) -> Self {
        self.can_load_more = can_load_more;
        self
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 1 {
            return;
        }

        let hints: Vec<(&str, &str)> = match self.mode {
            AppMode::Connecting | AppMode::Deleting | AppMode::Uploading => vec![("q", "Quit")],
            AppMode::ApiDown => vec![("r", "Retry"), ("q", "Quit")],
            AppMode::Browsing => {
                let mut hints = vec![
                    ("↑↓←→", "Navigate"),
                    ("Space", "Select"),
                    ("d", "Delete"),
                    ("u", "Upload"),
                ];
                if self.can_load_more {
                    hints.push(("m", "Load more"));
                }
                hints.extend([("[ ]", "Page size"), ("?", "Help"), ("q", "Quit")]);
                hints
            }
            AppMode::Help => vec![("Esc", "Close help"), ("q", "Close")],
            AppMode::Instructions => vec![("Space", "Don't show again"), ("Enter", "OK")],
            AppMode::ConfirmDelete => vec![("y", "Yes"), ("n", "Cancel")],
            AppMode::Upload => vec![
                ("Enter", "Add file"),
                ("←→", "Album"),
                ("Ctrl+U", "Upload"),
                ("Esc", "Cancel"),
            ],
            AppMode::Notice => vec![("Enter", "OK")],
        };

        let key_style = Style::default()
            .fg(self.theme.fg)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.theme.fg_dim);
        let sep_style = Style::default().fg(self.theme.border);

        let mut x = area.x + 1;
        for (i, (key, desc)) in hints.iter().enumerate() {
            buf.set_string(x, area.y, *key, key_style);
            x += key.chars().count() as u16 + 1;

            buf.set_string(x, area.y, *desc, desc_style);
            x += desc.chars().count() as u16;

            if i < hints.len() - 1 {
                buf.set_string(x, area.y, "  │  ", sep_style);
                x += 5;
            }

            if x >= area.x + area.width - 5 {
                break;
            }
        }

        // Session activity on the right side
        let deleted = self.session_stats.photos_deleted;
        let uploaded = self.session_stats.photos_uploaded;
        if deleted > 0 || uploaded > 0 {
            let stats_text = format!(
                "Deleted {} {} · Uploaded {} {}",
                deleted,
                photo_label(deleted),
                uploaded,
                photo_label(uploaded)
            );
            let stats_style = Style::default()
                .fg(self.theme.green)
                .add_modifier(Modifier::BOLD);
            let width = stats_text.chars().count() as u16;
            let stats_x = (area.x + area.width).saturating_sub(width + 1);
            if stats_x > x + 2 {
                buf.set_string(stats_x, area.y, &stats_text, stats_style);
            }
        }
    }
}
