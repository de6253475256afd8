use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use filecombiner::app::App;
use filecombiner::core::actions::find_action;
use filecombiner::logging;
use filecombiner::ui::{
    self, CommandBar, Dialog, DialogKind, LayoutMode, SelectionList, StatusBar, TitleBar,
    WarningScreen,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

fn main() -> Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("logging disabled: {e:#}");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "filecombiner starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(app.theme_manager.current());
                    f.render_widget(warning, size);
                }
                LayoutMode::Normal => render_main_ui(f, app),
            }
        })?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Windows에서는 키를 뗄 때도 이벤트가 옴
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.is_dialog_active() {
                    handle_dialog_keys(app, key.modifiers, key.code);
                } else if let Some(action) = find_action(key.modifiers, key.code) {
                    app.execute_action(action);
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 다이얼로그 모드 키 처리
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    let dialog_kind = match &app.dialog {
        Some(kind) => kind.clone(),
        None => return,
    };

    match dialog_kind {
        DialogKind::Input { .. } => handle_input_dialog_keys(app, modifiers, code),
        DialogKind::Confirm { .. } => handle_confirm_dialog_keys(app, modifiers, code),
        DialogKind::Error { .. } | DialogKind::Message { .. } => {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
        }
        DialogKind::Help { .. } => handle_help_dialog_keys(app, code),
    }
}

/// 입력 다이얼로그 키 처리
fn handle_input_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Enter) => app.submit_input_dialog(),
        (_, KeyCode::Esc) => app.close_dialog(),
        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
            app.dialog_toggle_button();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.dialog_input_delete_prev_segment(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => app.dialog_input_char(c),
        (_, KeyCode::Backspace) => app.dialog_input_backspace(),
        (_, KeyCode::Delete) => app.dialog_input_delete(),
        (_, KeyCode::Left) => app.dialog_input_left(),
        (_, KeyCode::Right) => app.dialog_input_right(),
        (_, KeyCode::Home) => app.dialog_input_home(),
        (_, KeyCode::End) => app.dialog_input_end(),
        _ => {}
    }
}

/// 확인 다이얼로그 키 처리
fn handle_confirm_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (KeyModifiers::NONE, KeyCode::Tab)
        | (KeyModifiers::SHIFT, KeyCode::BackTab)
        | (_, KeyCode::Left)
        | (_, KeyCode::Right) => app.dialog_toggle_button(),
        (_, KeyCode::Enter) => app.submit_confirm_dialog(),
        (_, KeyCode::Char('y')) => app.confirm_confirm_dialog(),
        (_, KeyCode::Esc) | (_, KeyCode::Char('n')) => app.close_dialog(),
        _ => {}
    }
}

/// 도움말 다이얼로그 키 처리
fn handle_help_dialog_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
            app.close_dialog();
        }
        KeyCode::Up | KeyCode::Char('k') => app.help_scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.help_scroll_down(),
        _ => {}
    }
}

fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();

    let filter_display = app.filter().display();
    f.render_widget(TitleBar::new(&filter_display).theme(theme), areas.title_bar);

    let list = SelectionList::new()
        .paths(app.selection.snapshot())
        .cursor(app.cursor)
        .scroll_offset(app.scroll_offset)
        .marked(&app.marked)
        .theme(theme);
    f.render_widget(list, areas.list);

    render_status_bar(f, app, theme, areas.status_bar);

    let command_bar = CommandBar::new()
        .selection_empty(app.selection.is_empty())
        .theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }
}

fn render_status_bar(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme, area: Rect) {
    let total_size = app.total_size_display();
    let status_bar = StatusBar::new()
        .file_count(app.selection.len())
        .total_size(&total_size)
        .marked_count(app.marked.len())
        .notice(app.notice.as_deref())
        .theme(theme);
    f.render_widget(status_bar, area);
}
