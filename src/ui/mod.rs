pub mod app;
mod combat_scene;
mod dice;
mod game_over_scene;
mod loot_scene;

use app::App;
use fate::GamePhase;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(size);

    frame.render_widget(
        Paragraph::new("DICE OF FATE")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    match app.game.phase() {
        GamePhase::Combat => combat_scene::draw_combat_scene(frame, chunks[1], app),
        GamePhase::LootSelection => {
            loot_scene::draw_loot_scene(frame, chunks[1], app.game.offer())
        }
        GamePhase::GameOver => {
            game_over_scene::draw_game_over_scene(frame, chunks[1], &app.game)
        }
    }
}
