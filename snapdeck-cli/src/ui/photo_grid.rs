use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use snapdeck_core::Photo;

use crate::app::AppState;

use super::progress::spinner_char;
use super::text::truncate_end;
use super::theme::Theme;

/// Most columns the grid ever shows
pub const MAX_COLUMNS: usize = 5;
/// Narrowest a cell may get before a column is dropped
pub const MIN_CELL_WIDTH: u16 = 24;
/// Cell height: border + name + album + image ref + border
pub const CELL_HEIGHT: u16 = 5;

/// Grid columns and visible cell rows for an area.
///
/// One line is held back for the "load more" row.
pub fn grid_geometry(area: Rect) -> (usize, usize) {
    let columns = ((area.width / MIN_CELL_WIDTH) as usize).clamp(1, MAX_COLUMNS);
    let rows = (area.height.saturating_sub(1) / CELL_HEIGHT).max(1) as usize;
    (columns, rows)
}

/// Photo grid widget
pub struct PhotoGrid<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> PhotoGrid<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn render_cell(&self, photo: &Photo, is_cursor: bool, area: Rect, buf: &mut Buffer) {
        let is_selected = self.state.gallery.is_selected(photo);

        // Three-state: cursor, selected, normal
        let (border_color, cell_style) = if is_cursor {
            (
                self.theme.selection_bg,
                Style::default().bg(self.theme.bg_highlight).fg(self.theme.fg),
            )
        } else if is_selected {
            (
                self.theme.purple,
                Style::default().bg(self.theme.bg_surface).fg(self.theme.fg),
            )
        } else {
            (self.theme.border, Style::default().fg(self.theme.fg))
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(cell_style);
        if is_selected {
            block = block.title(" ✓ ");
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 1 {
            return;
        }
        let width = inner.width as usize;

        let name_style = cell_style.add_modifier(Modifier::BOLD);
        buf.set_string(inner.x, inner.y, truncate_end(&photo.name, width), name_style);

        if inner.height >= 2 {
            let album_style = cell_style.fg(self.theme.album_color(&photo.album));
            buf.set_string(
                inner.x,
                inner.y + 1,
                truncate_end(&photo.album, width),
                album_style,
            );
        }

        if inner.height >= 3 {
            let hint = if photo.raw_is_url() {
                photo.raw.as_str()
            } else if photo.raw.is_empty() {
                "no image"
            } else {
                "inline image"
            };
            buf.set_string(
                inner.x,
                inner.y + 2,
                truncate_end(hint, width),
                cell_style.fg(self.theme.fg_muted),
            );
        }
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let loading = self.state.gallery.pager().is_loading();
        let (text, style) = if loading {
            (
                format!("{} Loading photos...", spinner_char(self.state.spinner_frame)),
                Style::default().fg(self.theme.blue),
            )
        } else {
            (
                "List is empty. Press u to upload.".to_string(),
                Style::default().fg(self.theme.fg_dim),
            )
        };
        let width = text.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(x, y, &text, style);
    }
}

impl Widget for PhotoGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width < 10 {
            return;
        }

        let photos = self.state.gallery.photos();
        if photos.is_empty() {
            self.render_empty(area, buf);
            return;
        }

        let (columns, rows) = grid_geometry(area);
        let cell_width = area.width / columns as u16;
        let first = self.state.scroll_row * columns;

        for (i, photo) in photos.iter().enumerate().skip(first).take(columns * rows) {
            let offset = i - first;
            let col = (offset % columns) as u16;
            let row = (offset / columns) as u16;
            let cell = Rect::new(
                area.x + col * cell_width,
                area.y + row * CELL_HEIGHT,
                cell_width,
                CELL_HEIGHT,
            );
            self.render_cell(photo, i == self.state.cursor, cell, buf);
        }

        // Footer row of the grid: load more / loading / end of list
        let last_row = (photos.len() - 1) / columns;
        let at_bottom = last_row < self.state.scroll_row + rows;
        let status_y = area.y + area.height - 1;
        let pager = self.state.gallery.pager();
        if pager.is_loading() {
            let text = format!("{} Loading...", spinner_char(self.state.spinner_frame));
            buf.set_string(area.x + 1, status_y, &text, Style::default().fg(self.theme.blue));
        } else if self.state.can_load_more() && at_bottom {
            let style = Style::default()
                .fg(self.theme.yellow)
                .add_modifier(Modifier::BOLD);
            buf.set_string(area.x + 1, status_y, "Load more (m)", style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_columns_on_wide_terminals() {
        assert_eq!(grid_geometry(Rect::new(0, 0, 200, 31)), (5, 6));
        assert_eq!(grid_geometry(Rect::new(0, 0, 120, 11)), (5, 2));
    }

    #[test]
    fn test_columns_shrink_with_width() {
        assert_eq!(grid_geometry(Rect::new(0, 0, 80, 20)).0, 3);
        assert_eq!(grid_geometry(Rect::new(0, 0, 30, 20)).0, 1);
        assert_eq!(grid_geometry(Rect::new(0, 0, 10, 3)), (1, 1));
    }
}
