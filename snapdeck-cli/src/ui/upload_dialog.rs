use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Padding, Widget},
};
use snapdeck_core::UploadForm;

use super::layout::dialog_rect;
use super::progress::spinner_char;
use super::text::{truncate_end, truncate_start};
use super::theme::Theme;

/// Files listed before collapsing into "...and N more"
const MAX_FILES: usize = 6;

/// Rows under the file list: blank, album, blank, error/progress
const TAIL_ROWS: u16 = 4;

/// How many staged files to list in `rows` lines, and how many are hidden.
///
/// When not all fit, the last line is spent on "...and N more".
fn visible_files(total: usize, rows: usize) -> (usize, usize) {
    let rows = rows.min(MAX_FILES + 1);
    if total <= rows.min(MAX_FILES) {
        return (total, 0);
    }
    if rows == 0 {
        return (0, 0);
    }
    let shown = rows - 1;
    (shown, total - shown)
}

/// Upload dialog: path input, staged files, album picker
pub struct UploadDialog<'a> {
    form: &'a UploadForm,
    input: &'a str,
    error: Option<&'a str>,
    uploading: bool,
    spinner_frame: usize,
    theme: &'a Theme,
}

impl<'a> UploadDialog<'a> {
    pub fn new(form: &'a UploadForm, input: &'a str, theme: &'a Theme) -> Self {
        Self {
            form,
            input,
            error: None,
            uploading: false,
            spinner_frame: 0,
            theme,
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Show upload progress instead of the error line
    pub fn uploading(mut self, spinner_frame: usize) -> Self {
        self.uploading = true;
        self.spinner_frame = spinner_frame;
        self
    }
}

impl Widget for UploadDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let files = self.form.files();
        let shown = files.len().clamp(1, MAX_FILES);
        let has_more = files.len() > MAX_FILES;

        // label + input + blank + "Files:" + files + more + tail + hints
        let content_lines = 4 + shown + usize::from(has_more) + TAIL_ROWS as usize + 1;
        let dialog_area = dialog_rect(area, 64, content_lines as u16 + 4);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(" Upload Photos ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.blue))
            .style(Style::default().bg(self.theme.bg_surface))
            .padding(Padding::uniform(1));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        if inner.width < 20 || inner.height < 2 {
            return;
        }

        let text_style = Style::default().fg(self.theme.fg);
        let dim_style = Style::default().fg(self.theme.fg_dim);
        let label_style = Style::default()
            .fg(self.theme.blue)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default()
            .fg(self.theme.green)
            .add_modifier(Modifier::BOLD);
        let disabled_style = Style::default().fg(self.theme.fg_muted);

        let width = inner.width as usize;
        // Everything above the hints line must stay above this row
        let hints_y = inner.y + inner.height - 1;
        let mut row = inner.y;

        // Path input
        buf.set_string(inner.x, row, "Add file (.png, .jpeg, .gif):", label_style);
        row += 1;
        if row < hints_y {
            let input = truncate_start(self.input, width.saturating_sub(4));
            buf.set_string(inner.x, row, "> ", text_style);
            buf.set_string(inner.x + 2, row, &input, text_style);
            if !self.uploading {
                let cursor_x = inner.x + 2 + input.chars().count() as u16;
                buf.set_string(cursor_x, row, " ", Style::default().bg(self.theme.fg));
            }
        }
        row += 2;

        // Staged files, collapsed to the rows left above the album picker
        if row < hints_y {
            buf.set_string(inner.x, row, "Files:", label_style);
            row += 1;
            let rows = hints_y.saturating_sub(row).saturating_sub(TAIL_ROWS) as usize;
            if files.is_empty() {
                if rows > 0 {
                    buf.set_string(inner.x + 1, row, "No files selected...", dim_style);
                    row += 1;
                }
            } else {
                let (shown, hidden) = visible_files(files.len(), rows);
                for path in files.iter().take(shown) {
                    let display = truncate_start(&path.to_string_lossy(), width.saturating_sub(2));
                    buf.set_string(
                        inner.x + 1,
                        row,
                        &display,
                        Style::default().fg(self.theme.yellow),
                    );
                    row += 1;
                }
                if hidden > 0 {
                    let more = format!("...and {} more", hidden);
                    buf.set_string(inner.x + 1, row, &more, dim_style);
                    row += 1;
                }
            }
        }
        row += 1;

        // Album picker
        if row < hints_y {
            buf.set_string(inner.x, row, "Album:", label_style);
            match self.form.album() {
                Some(album) => {
                    let picker = format!("< {} >", album);
                    buf.set_string(
                        inner.x + 7,
                        row,
                        &picker,
                        Style::default()
                            .fg(self.theme.album_color(album))
                            .add_modifier(Modifier::BOLD),
                    );
                }
                None => buf.set_string(inner.x + 7, row, "< Select album >", dim_style),
            }
        }
        row += 2;

        // Inline error or progress
        if row < hints_y {
            if self.uploading {
                let text = format!("{} Uploading...", spinner_char(self.spinner_frame));
                buf.set_string(inner.x, row, &text, Style::default().fg(self.theme.blue));
            } else if let Some(error) = self.error {
                buf.set_string(
                    inner.x,
                    row,
                    truncate_end(error, width),
                    Style::default().fg(self.theme.red),
                );
            }
        }

        // Hints; upload is greyed out until a file is staged
        let upload_enabled = !files.is_empty() && !self.uploading;
        let (upload_key, upload_desc) = if upload_enabled {
            (key_style, text_style)
        } else {
            (disabled_style, disabled_style)
        };
        buf.set_string(inner.x, hints_y, "[Ctrl+U]", upload_key);
        buf.set_string(inner.x + 9, hints_y, "Upload", upload_desc);
        buf.set_string(inner.x + 18, hints_y, "[←→]", key_style);
        buf.set_string(inner.x + 23, hints_y, "Album", text_style);
        buf.set_string(inner.x + 31, hints_y, "[Esc]", key_style);
        buf.set_string(inner.x + 37, hints_y, "Cancel", text_style);
    }
}
