mod app;
mod logging;
mod tui;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, style::Style, widgets::Widget};
use snapdeck_core::{RestClient, Settings, validate_page_size};
use tracing::info;

use app::{Action, AppMode, AppState};
use tui::{AppEvent, EventHandler, handle_key};
use ui::{
    AppLayout, BusyView, ConfirmDeleteView, Footer, Header, HelpView, NoticeView, PhotoGrid,
    StatusBar, Theme, UploadDialog,
};

/// SNAPDECK - Terminal photo gallery
#[derive(Parser, Debug)]
#[command(name = "snapdeck")]
#[command(about = "Browse, select, batch-delete and upload photos from the terminal")]
#[command(version)]
struct Args {
    /// Base URL of the photo service
    #[arg(long, env = "SNAPDECK_API_URL")]
    api_url: Option<String>,

    /// Photos fetched per page (5, 10, 25, 50, 100, 250 or 500)
    #[arg(short = 'n', long)]
    page_size: Option<usize>,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (defaults to the user data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    logging::init(args.log_file.clone().or_else(logging::default_log_path))?;

    let settings_path = args.config.clone().or_else(Settings::default_path);
    let settings = match &settings_path {
        Some(path) => Settings::load_from(path)?,
        None => Settings::default(),
    };

    // Flags win over the settings file
    let api_url = args
        .api_url
        .clone()
        .unwrap_or_else(|| settings.api_url().to_string());
    let page_size = match args.page_size {
        Some(size) => validate_page_size(size)?,
        None => settings.page_size(),
    };

    info!(%api_url, page_size, "starting snapdeck");

    let client = RestClient::new(api_url.clone());
    let mut state = AppState::new(
        Arc::new(client),
        api_url,
        page_size,
        settings,
        settings_path,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let result = run_app(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    info!(
        deleted = state.session_stats.photos_deleted,
        uploaded = state.session_stats.photos_uploaded,
        "exiting"
    );

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    let theme = Theme::default();
    let event_handler = EventHandler::new(50); // 50ms tick rate

    state.start();

    loop {
        state.poll_api();

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();
            let layout = AppLayout::new(area);

            // Background
            frame
                .buffer_mut()
                .set_style(area, Style::default().bg(theme.bg));

            // Grid geometry drives cursor movement
            let (columns, rows) = ui::grid_geometry(layout.grid);
            state.set_grid(columns, rows);

            Header::new(state, &theme).render(layout.header, frame.buffer_mut());
            StatusBar::new(state, &theme).render(layout.status, frame.buffer_mut());

            if !matches!(state.mode, AppMode::Connecting | AppMode::ApiDown) {
                PhotoGrid::new(state, &theme).render(layout.grid, frame.buffer_mut());
            }

            render_overlay(state, &theme, area, frame.buffer_mut());

            Footer::new(state.mode, &theme, &state.session_stats)
                .with_load_more(state.can_load_more())
                .render(layout.footer, frame.buffer_mut());
        })?;

        // Handle events
        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = handle_key(key, state.mode);
                handle_action(state, action);
            }
            AppEvent::Resize(_, _) => {
                // Terminal will redraw automatically
            }
            AppEvent::Tick => {
                state.tick_spinner();
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Modal drawn above the grid for the current mode
fn render_overlay(
    state: &AppState,
    theme: &Theme,
    area: ratatui::layout::Rect,
    buf: &mut ratatui::buffer::Buffer,
) {
    match state.mode {
        AppMode::Connecting => {
            BusyView::new("Connecting", "Checking the photo API...", state.spinner_frame, theme)
                .render(area, buf);
        }
        AppMode::ApiDown => {
            let mut view = NoticeView::new("API error", theme.red, theme)
                .line("Backend API is not running. Please run the API and press r to retry.");
            if let Some(error) = &state.api_error {
                view = view.line("").dim_line(error.clone());
            }
            view.hint("r", "Retry").hint("q", "Quit").render(area, buf);
        }
        AppMode::Help => HelpView::new(theme).render(area, buf),
        AppMode::Instructions => {
            NoticeView::new("How to delete", theme.blue, theme)
                .line("To start deleting photos, select any photo with Space.")
                .line("Then press d to delete every selected photo.")
                .line("")
                .checkbox("Don't show this pop-up again", state.instructions_dont_show)
                .hint("Space", "Toggle")
                .hint("Enter", "OK")
                .render(area, buf);
        }
        AppMode::ConfirmDelete => {
            if let Some(confirmation) = state.gallery.pending_delete() {
                ConfirmDeleteView::new(confirmation, theme).render(area, buf);
            }
        }
        AppMode::Deleting => {
            let message = format!(
                "Deleting {} {}...",
                state.selection_count(),
                snapdeck_core::photo_label(state.selection_count())
            );
            BusyView::new("Deleting", &message, state.spinner_frame, theme).render(area, buf);
        }
        AppMode::Upload => UploadDialog::new(&state.upload, &state.upload_input, theme)
            .error(state.upload_error.as_deref())
            .render(area, buf),
        AppMode::Uploading => UploadDialog::new(&state.upload, &state.upload_input, theme)
            .uploading(state.spinner_frame)
            .render(area, buf),
        AppMode::Notice => {
            if let Some(notice) = &state.notice {
                NoticeView::new(&notice.title, theme.notice_color(notice.kind), theme)
                    .line(notice.message.clone())
                    .hint("Enter", "OK")
                    .render(area, buf);
            }
        }
        AppMode::Browsing => {}
    }
}

fn handle_action(state: &mut AppState, action: Action) {
    match action {
        Action::Quit => state.quit(),
        Action::MoveUp => state.move_up(),
        Action::MoveDown => state.move_down(),
        Action::MoveLeft => state.move_left(),
        Action::MoveRight => state.move_right(),
        Action::PageUp => state.page_up(),
        Action::PageDown => state.page_down(),
        Action::GoToFirst => state.go_to_first(),
        Action::GoToLast => state.go_to_last(),
        Action::ToggleSelect => state.toggle_select(),
        Action::ClearSelection => state.clear_selection(),
        Action::LoadMore => state.load_more(),
        Action::PageSizeUp => state.page_size_up(),
        Action::PageSizeDown => state.page_size_down(),
        Action::Refresh => state.refresh(),
        Action::ShowHelp => state.show_help(),
        Action::HideHelp => state.hide_help(),
        Action::Delete => state.request_delete(),
        Action::ConfirmDelete => state.confirm_delete(),
        Action::CancelDelete => state.cancel_delete(),
        Action::OpenUpload => state.open_upload(),
        Action::CancelUpload => state.cancel_upload(),
        Action::SubmitUpload => state.submit_upload(),
        Action::UploadInput(c) => state.upload_input(c),
        Action::UploadBackspace => state.upload_backspace(),
        Action::UploadEnter => state.upload_enter(),
        Action::AlbumNext => state.album_next(),
        Action::AlbumPrev => state.album_prev(),
        Action::ToggleDontShow => state.toggle_dont_show(),
        Action::DismissInstructions => state.dismiss_instructions(),
        Action::DismissNotice => state.dismiss_notice(),
        Action::RetryHealth => state.retry_health(),
        Action::Tick => {}
    }
}
