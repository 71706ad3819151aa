//! TUI rendering with ratatui
//!
//! Layout for the unscramble game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{spaced_letters, verdict};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word panel
            Constraint::Percentage(40), // Score and messages
        ])
        .split(chunks[1]);

    if app.input_mode == InputMode::GameOver {
        render_summary(f, app, main_chunks[0]);
    } else {
        render_word(f, app, main_chunks[0]);
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 UNSCRAMBLE")
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

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let view = app.session.view();

    let content = vec![
        Line::from(format!("Word {} of {}", view.round, view.max_rounds)),
        Line::from(""),
        Line::from(Span::styled(
            spaced_letters(view.scrambled),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Unscramble the word using all the letters.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Scrambled Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let view = app.session.view();
    let solved = app.session.words_solved();

    let content = vec![
        Line::from(Span::styled(
            "🎉 Congratulations! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("You scored {}!", view.score)),
        Line::from(format!("Words unscrambled: {solved}/{}", view.max_rounds)),
        Line::from(verdict(solved, view.max_rounds)),
        Line::from(""),
        Line::from("p: Play again | q: Exit"),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Game Over ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score gauge
            Constraint::Length(3), // Round gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_rounds(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let view = app.session.view();
    let max_score = app.session.state().config().max_score();
    let ratio = if max_score == 0 {
        0.0
    } else {
        (f64::from(view.score) / f64::from(max_score)).min(1.0)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(format!("{} / {max_score}", view.score));

    f.render_widget(gauge, area);
}

fn render_rounds(f: &mut Frame, app: &App, area: Rect) {
    let view = app.session.view();
    let ratio = (view.round as f64 / view.max_rounds.max(1) as f64).min(1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Rounds ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{} / {}", view.round, view.max_rounds));

    f.render_widget(gauge, area);
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
            " 🎉 GAME OVER! 🎉 | Press 'p' to play again or 'q' to exit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter Your Word | ENTER to submit, TAB to skip ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Playing",
        InputMode::GameOver => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let games_text = format!(
        "Games: {} | Best: {}",
        app.stats.games_played, app.stats.best_score
    );
    let games = Paragraph::new(games_text).alignment(Alignment::Center);
    f.render_widget(games, chunks[1]);

    let solved_text = format!("Words solved: {}", app.stats.words_solved);
    let solved = Paragraph::new(solved_text).alignment(Alignment::Center);
    f.render_widget(solved, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "ESC: Quit | Enter: Submit | TAB: Skip",
        InputMode::GameOver => "q: Exit | p: Play Again",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, Session, WordCatalog};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_scramble_and_round() {
        let catalog = WordCatalog::from_words(["android", "kotlin"]).unwrap();
        let session =
            Session::new(&catalog, GameConfig::new(2, 20), StdRng::seed_from_u64(1)).unwrap();
        let scrambled = spaced_letters(session.view().scrambled);
        let app = App::new(session);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Word 1 of 2"));
        assert!(text.contains(&scrambled));
    }

    #[test]
    fn renders_scramble_in_original_case() {
        let catalog = WordCatalog::from_words(["Kotlin"]).unwrap();
        let session =
            Session::new(&catalog, GameConfig::new(1, 20), StdRng::seed_from_u64(6)).unwrap();
        let scrambled = session.view().scrambled.to_string();
        let app = App::new(session);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(scrambled.contains('K'));
        assert!(text.contains(&spaced_letters(&scrambled)));
        assert!(!text.contains(&spaced_letters(&scrambled.to_uppercase())));
    }

    #[test]
    fn renders_summary_on_game_over() {
        let catalog = WordCatalog::from_words(["android", "kotlin"]).unwrap();
        let session =
            Session::new(&catalog, GameConfig::new(1, 20), StdRng::seed_from_u64(1)).unwrap();
        let mut app = App::new(session);
        app.skip_word();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Congratulations!"));
        assert!(text.contains("You scored 0!"));
    }
}
