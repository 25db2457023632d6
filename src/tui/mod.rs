use crate::client::notice::Notice;
use crate::client::{Outcome, Translator};
use crate::errors::AppResult;
use crate::i18n::I18n;
use crate::languages::{LanguageDescriptor, FOREIGN_LANGUAGES, NATIVE_LANGUAGES};
use crate::models::TranslateRequest;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::debug;

pub mod theme;

use theme::Theme;

const NOTICE_TTL: Duration = Duration::from_secs(3);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SourceLanguages,
    TargetLanguages,
    SourceText,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::SourceLanguages => Focus::TargetLanguages,
            Focus::TargetLanguages => Focus::SourceText,
            Focus::SourceText => Focus::SourceLanguages,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::SourceLanguages => Focus::SourceText,
            Focus::TargetLanguages => Focus::SourceLanguages,
            Focus::SourceText => Focus::TargetLanguages,
        }
    }
}

pub struct TuiState {
    pub should_quit: bool,
    pub focus: Focus,
    pub source_cursor: usize,
    pub target_cursor: usize,
    pub notice: Option<(Notice, Instant)>,
    pub in_flight: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            should_quit: false,
            focus: Focus::SourceLanguages,
            source_cursor: 0,
            target_cursor: 0,
            notice: None,
            in_flight: 0,
        }
    }
}

impl TuiState {
    fn show(&mut self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            self.notice = Some((notice, Instant::now()));
        }
    }

    fn current_notice(&self) -> Option<Notice> {
        self.notice
            .filter(|(_, shown_at)| shown_at.elapsed() < NOTICE_TTL)
            .map(|(notice, _)| notice)
    }
}

pub async fn run_tui(mut translator: Translator, i18n: I18n, theme: Theme) -> AppResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut translator, &i18n, &theme).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    translator: &mut Translator,
    i18n: &I18n,
    theme: &Theme,
) -> AppResult<()> {
    let mut state = TuiState::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

    loop {
        terminal.draw(|f| ui(f, &*translator, &state, i18n, theme))?;

        while let Ok((request, outcome)) = rx.try_recv() {
            state.in_flight = state.in_flight.saturating_sub(1);
            let notice = translator.complete(request, outcome);
            state.show(notice);
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(request) = handle_key(translator, &mut state, key) {
                        dispatch(translator, &mut state, request, tx.clone());
                    }
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Send a request in the background; the outcome comes back through `tx`.
/// Nothing stops a second request while one is outstanding.
fn dispatch(
    translator: &Translator,
    state: &mut TuiState,
    request: TranslateRequest,
    tx: mpsc::UnboundedSender<Outcome>,
) {
    let api = translator.api();
    state.in_flight += 1;
    debug!("Dispatching translate request ({} in flight)", state.in_flight);

    tokio::spawn(async move {
        let _ = tx.send(Translator::send(api, request).await);
    });
}

/// Apply one key press. Returns a request when the user asked to translate
/// and the form is valid.
pub fn handle_key(translator: &mut Translator, state: &mut TuiState, key: KeyEvent) -> Option<TranslateRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('q') if ctrl => state.should_quit = true,
        KeyCode::Char('t') if ctrl => match translator.prepare() {
            Ok(request) => return Some(request),
            Err(notice) => state.show(Some(notice)),
        },
        KeyCode::Char('y') if ctrl => {
            let notice = translator.copy();
            state.show(notice);
        }
        KeyCode::Char('l') if ctrl => translator.clear(),
        KeyCode::Tab => state.focus = state.focus.next(),
        KeyCode::BackTab => state.focus = state.focus.prev(),
        _ => match state.focus {
            Focus::SourceLanguages => {
                let notice = handle_language_key(key.code, &mut state.source_cursor, NATIVE_LANGUAGES)
                    .and_then(|name| translator.select_source(name));
                state.show(notice);
            }
            Focus::TargetLanguages => {
                let notice = handle_language_key(key.code, &mut state.target_cursor, FOREIGN_LANGUAGES)
                    .and_then(|name| translator.select_target(name));
                state.show(notice);
            }
            Focus::SourceText => match key.code {
                KeyCode::Char(c) if !ctrl => translator.push_char(c),
                KeyCode::Enter => translator.push_char('\n'),
                KeyCode::Backspace => translator.pop_char(),
                _ => {}
            },
        },
    }

    None
}

/// Move the cursor within a language bar; `Enter` yields the name under it.
fn handle_language_key(
    code: KeyCode,
    cursor: &mut usize,
    table: &'static [LanguageDescriptor],
) -> Option<&'static str> {
    match code {
        KeyCode::Left => {
            *cursor = cursor.saturating_sub(1);
            None
        }
        KeyCode::Right => {
            *cursor = (*cursor + 1).min(table.len().saturating_sub(1));
            None
        }
        KeyCode::Enter => table.get(*cursor).map(|lang| lang.name),
        _ => None,
    }
}

fn ui(f: &mut Frame, translator: &Translator, state: &TuiState, i18n: &I18n, theme: &Theme) {
    let history_height = translator.history().len() as u16 * 3 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(history_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled(i18n.ts("app_title"), theme.title_style()),
        Span::raw("  "),
        Span::styled(i18n.ts("app_subtitle"), theme.dimmed_style()),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(theme.border_style(false)));
    f.render_widget(header, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let translator_state = translator.state();
    render_side(
        f,
        columns[0],
        Side {
            bar_title: i18n.ts("source_languages"),
            bar_focused: state.focus == Focus::SourceLanguages,
            languages: NATIVE_LANGUAGES,
            selected: translator_state.native_lang(),
            cursor: state.source_cursor,
            text_title: i18n.ts("source_text").to_string(),
            text_focused: state.focus == Focus::SourceText,
            text: translator_state.native_text(),
            placeholder: translator_state.native_placeholder(),
        },
        i18n,
        theme,
    );

    let mut target_title = i18n.ts("target_text").to_string();
    if state.in_flight > 0 {
        target_title = format!("{} - {}", target_title, i18n.ts("translating"));
    }
    render_side(
        f,
        columns[1],
        Side {
            bar_title: i18n.ts("target_languages"),
            bar_focused: state.focus == Focus::TargetLanguages,
            languages: FOREIGN_LANGUAGES,
            selected: translator_state.foreign_lang(),
            cursor: state.target_cursor,
            text_title: target_title,
            text_focused: false,
            text: translator_state.translated_text(),
            placeholder: translator_state.foreign_placeholder(),
        },
        i18n,
        theme,
    );

    // Recent translations
    if !translator.history().is_empty() {
        let items: Vec<ListItem> = translator
            .history()
            .iter()
            .map(|record| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!("{} → {}", record.from, record.to),
                        theme.title_style(),
                    )),
                    Line::from(Span::styled(first_line(&record.native_text), theme.dimmed_style())),
                    Line::from(Span::styled(first_line(&record.translate_text), theme.text_style())),
                ])
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(false))
                .title(i18n.ts("history_title")),
        );
        f.render_widget(list, chunks[2]);
    }

    // Status bar
    let status = match state.current_notice() {
        Some(notice) => Paragraph::new(i18n.ts(notice.key())).style(theme.notice_style(notice.level())),
        None => Paragraph::new("").style(theme.status_bar_style()),
    };
    f.render_widget(status, chunks[3]);

    let footer = Paragraph::new(i18n.ts("footer")).style(theme.dimmed_style());
    f.render_widget(footer, chunks[4]);
}

struct Side<'a> {
    bar_title: &'a str,
    bar_focused: bool,
    languages: &'static [LanguageDescriptor],
    selected: &'a str,
    cursor: usize,
    text_title: String,
    text_focused: bool,
    text: &'a str,
    placeholder: &'static str,
}

fn render_side(f: &mut Frame, area: Rect, side: Side, i18n: &I18n, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let any_selected = !side.selected.is_empty();
    let mut spans = Vec::with_capacity(side.languages.len() * 2);
    for (i, lang) in side.languages.iter().enumerate() {
        let mut style = theme.language_style(lang.color, lang.name == side.selected, any_selected);
        if side.bar_focused && i == side.cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {} ", lang.label()), style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(side.bar_focused))
            .title(focus_title(side.bar_title, side.bar_focused, i18n)),
    );
    f.render_widget(bar, rows[0]);

    let body = if side.text.is_empty() && !side.text_focused {
        Paragraph::new(side.placeholder).style(theme.dimmed_style())
    } else if side.text_focused {
        Paragraph::new(format!("{}█", side.text)).style(theme.text_style())
    } else {
        Paragraph::new(side.text).style(theme.text_style())
    };
    let text = body.wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(side.text_focused))
            .title(Span::styled(
                focus_title(&side.text_title, side.text_focused, i18n),
                if side.text_focused { theme.accent_style() } else { theme.text_style() },
            )),
    );
    f.render_widget(text, rows[1]);
}

/// History rows are one line per text; longer texts are cut at the first break.
fn first_line(text: &str) -> String {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    if lines.next().is_some() {
        format!("{}…", first)
    } else {
        first.to_string()
    }
}

fn focus_title(title: &str, focused: bool, i18n: &I18n) -> String {
    if focused {
        format!("{} {}", title, i18n.ts("active"))
    } else {
        title.to_string()
    }
}
