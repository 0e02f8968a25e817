use fate::Game;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the final tally.
pub fn draw_game_over_scene(frame: &mut Frame, area: Rect, game: &Game) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("You reached round {}", game.round())),
        Line::from(format!("Monsters defeated: {}", game.monsters_defeated())),
        Line::from(""),
        Line::styled(
            "[R] Play again   [Q] Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );
}
