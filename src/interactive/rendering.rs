//! TUI rendering with ratatui
//!
//! Grid, radar and score panels for the Battlewords interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Coord;
use crate::game::tier;
use crate::output::{CellView, PULSE, cell_view};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🚢 BATTLEWORDS")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_span(app: &App, coord: Coord) -> Span<'static> {
    let view = cell_view(&app.state, coord);
    let mut style = match view {
        CellView::Hidden => Style::default().fg(Color::DarkGray),
        CellView::Empty => Style::default().fg(Color::Blue),
        CellView::Letter(_) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellView::Solved(_) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    };
    if coord == app.cursor && app.input_mode != InputMode::GameOver {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!(" {} ", view.glyph()), style)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let size = app.state.grid_size();
    let header: String = (1..=size).map(|col| format!("{col:>2} ")).collect();

    let mut lines = vec![Line::from(Span::styled(
        format!("   {header}"),
        Style::default().fg(Color::DarkGray),
    ))];
    for row in 0..size {
        let mut spans = vec![Span::styled(
            format!("{:>2} ", row + 1),
            Style::default().fg(Color::DarkGray),
        )];
        spans.extend((0..size).map(|col| cell_span(app, Coord::new(row, col))));
        lines.push(Line::from(spans));
    }

    let title = format!(" Grid | cursor {} ", app.cursor);
    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(radar_height(app.state.grid_size())), // Radar
            Constraint::Length(3),                                   // Score gauge
            Constraint::Length(8),                                   // Words
            Constraint::Min(4),                                      // Messages
        ])
        .split(area);

    render_radar(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    render_words(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

/// Rows for the radar panel: one per grid row plus borders
fn radar_height(grid_size: usize) -> u16 {
    u16::try_from(grid_size)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn render_radar(f: &mut Frame, app: &App, area: Rect) {
    let size = app.state.grid_size();
    let radar = app.state.puzzle().radar();

    let lines: Vec<Line> = (0..size)
        .map(|row| {
            let spans: Vec<Span> = (0..size)
                .map(|col| {
                    if radar.contains(&Coord::new(row, col)) {
                        Span::styled(format!("{PULSE} "), Style::default().fg(Color::Red))
                    } else {
                        Span::styled("· ", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Radar ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Red)),
    );
    f.render_widget(paragraph, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let found = app.state.guessed().len();
    let total = app.state.puzzle().words().len().max(1);
    let percent = (found * 100 / total) as u16;
    let score = app.state.score();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{score} pts | {found}/{total} words | {}", tier(score)));

    f.render_widget(gauge, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let game_over = app.state.is_game_over();
    let items: Vec<ListItem> = app
        .state
        .puzzle()
        .words()
        .iter()
        .map(|word| {
            if let Some(points) = app.state.points_for(word.text()) {
                ListItem::new(format!("{:<6} +{points}", word.text()))
                    .style(Style::default().fg(Color::Green))
            } else if game_over {
                ListItem::new(word.text().to_string()).style(Style::default().fg(Color::Red))
            } else {
                ListItem::new(format!("{} ({})", "?".repeat(word.length()), word.length()))
                    .style(Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Words ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " 🎉 ALL WORDS FOUND! | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guess => (
            " Guess a word (4-6 letters) | Enter to submit, ESC to cancel ",
            app.guess_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Grid => (" Reveal a cell | Space/Enter ", "", Color::Cyan),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let guess_text = if app.state.can_guess() {
        "Guess: ready"
    } else {
        "Guess: reveal first"
    };
    f.render_widget(
        Paragraph::new(guess_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Best: {}",
        app.stats.games_played, app.stats.best_score
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("q: Quit | n: New | Tab/g: Guess | Arrows: Move")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
