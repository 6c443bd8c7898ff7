use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Padding, Widget},
};
use snapdeck_core::DeleteConfirmation;

use super::layout::dialog_rect;
use super::text::truncate_end;
use super::theme::Theme;

/// Albums listed before collapsing into "...and N more"
const MAX_GROUPS: usize = 5;

/// Batch delete confirmation dialog widget
pub struct ConfirmDeleteView<'a> {
    confirmation: &'a DeleteConfirmation,
    theme: &'a Theme,
}

impl<'a> ConfirmDeleteView<'a> {
    pub fn new(confirmation: &'a DeleteConfirmation, theme: &'a Theme) -> Self {
        Self {
            confirmation,
            theme,
        }
    }
}

impl Widget for ConfirmDeleteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let groups = &self.confirmation.groups;
        let show_count = groups.len().min(MAX_GROUPS);
        let has_more = groups.len() > MAX_GROUPS;

        // prompt + blank + groups + more + blank + hints
        let content_lines = 1 + 1 + show_count + usize::from(has_more) + 1 + 1;
        let dialog_area = dialog_rect(area, 60, content_lines as u16 + 4);

        Clear.render(dialog_area, buf);

        let title = format!(" {}? ", self.confirmation.title());
        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.red))
            .style(Style::default().bg(self.theme.bg_surface))
            .padding(Padding::uniform(1));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        if inner.width < 10 || inner.height < 2 {
            return;
        }

        let text_style = Style::default().fg(self.theme.fg);
        let album_style = Style::default()
            .fg(self.theme.yellow)
            .add_modifier(Modifier::BOLD);
        let dim_style = Style::default().fg(self.theme.fg_dim);
        let key_style = Style::default()
            .fg(self.theme.green)
            .add_modifier(Modifier::BOLD);

        let max_w = inner.width as usize;
        let bottom = inner.y + inner.height;
        let mut row = inner.y;

        let prompt = truncate_end(&self.confirmation.prompt(), max_w);
        buf.set_string(inner.x, row, &prompt, text_style);
        row += 2;

        for group in groups.iter().take(MAX_GROUPS) {
            if row + 1 >= bottom {
                break;
            }
            let album = format!("{}: ", group.album);
            buf.set_string(inner.x + 1, row, &album, album_style);
            let avail = max_w.saturating_sub(album.chars().count() + 1);
            let names = truncate_end(&group.names.join(", "), avail);
            buf.set_string(
                inner.x + 1 + album.chars().count() as u16,
                row,
                &names,
                dim_style,
            );
            row += 1;
        }

        if has_more && row + 1 < bottom {
            let more_text = format!("  ...and {} more albums", groups.len() - MAX_GROUPS);
            buf.set_string(inner.x, row, &more_text, dim_style);
        }

        let hints_y = bottom.saturating_sub(1);
        buf.set_string(inner.x, hints_y, "[y]", key_style);
        buf.set_string(inner.x + 4, hints_y, "Yes, delete", text_style);
        buf.set_string(inner.x + 18, hints_y, "[n]", key_style);
        buf.set_string(inner.x + 22, hints_y, "Cancel", text_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapdeck_core::Photo;

    fn rendered(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_lists_albums_and_prompt() {
        let photos = vec![
            Photo::new("1", "a.png", "Travel"),
            Photo::new("2", "b.png", "Food"),
            Photo::new("3", "c.png", "Travel"),
        ];
        let confirmation = DeleteConfirmation::for_selection(&photos).unwrap();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        ConfirmDeleteView::new(&confirmation, &theme).render(area, &mut buf);

        let text = rendered(&buf);
        assert!(text.contains("Delete photos?"));
        assert!(text.contains("Are you sure you want to delete these 3 photos?"));
        assert!(text.contains("Travel: a.png, c.png"));
        assert!(text.contains("Food: b.png"));
    }
}
