use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main application layout
pub struct AppLayout {
    pub header: Rect,
    pub status: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(1), // Status line
                Constraint::Min(4),    // Photo grid
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            status: chunks[1],
            grid: chunks[2],
            footer: chunks[3],
        }
    }
}

/// Centered dialog rectangle of at most `width` x `height`, leaving a margin
pub fn dialog_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = dialog_rect(area, 50, 10);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_dialog_rect_shrinks_on_small_terminals() {
        let area = Rect::new(0, 0, 30, 8);
        let rect = dialog_rect(area, 50, 10);
        assert_eq!(rect.width, 26);
        assert_eq!(rect.height, 4);
    }
}
