use super::app::App;
use super::dice::{die_lines, flicker_face};
use fate::items::Item;
use fate::{Game, PlayerState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

fn hp_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn hp_gauge<'a>(title: &'a str, current: u32, max: u32, fraction: f64) -> Gauge<'a> {
    let ratio = fraction.clamp(0.0, 1.0);
    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(
            Style::default()
                .fg(hp_color(ratio))
                .add_modifier(Modifier::BOLD),
        )
        .label(format!("{}/{}", current, max))
        .ratio(ratio)
}

/// Draws the combat screen: both fighters, the die and the log.
pub fn draw_combat_scene(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Fighters
            Constraint::Length(7), // Die
            Constraint::Length(7), // Log
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let fighters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_player_panel(frame, fighters[0], app.game.player());
    draw_monster_panel(frame, fighters[1], &app.game);
    draw_die(frame, chunks[1], &app.game);
    draw_log(frame, chunks[2], app);

    let hint = if app.game.is_rolling() {
        "Rolling..."
    } else {
        "[Space/Enter] Roll   [Q] Quit"
    };
    frame.render_widget(
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

fn draw_player_panel(frame: &mut Frame, area: Rect, player: &PlayerState) {
    let block = Block::default().borders(Borders::ALL).title("You");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    frame.render_widget(
        hp_gauge(
            "Health",
            player.health,
            player.max_health,
            player.health_fraction(),
        ),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("Damage: "),
            Span::styled(
                format!("x{:.2}", player.damage_multiplier()),
                Style::default().fg(Color::Cyan),
            ),
        ])),
        chunks[1],
    );

    let items: Vec<Line> = if player.items.is_empty() {
        vec![Line::from(Span::styled(
            "No items yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        player.items.iter().map(item_line).collect()
    };
    frame.render_widget(
        Paragraph::new(items).wrap(Wrap { trim: true }),
        chunks[2],
    );
}

fn item_line(item: &Item) -> Line<'static> {
    // Inert effects do nothing in combat; show them dimmed
    let inert = item.effect_kind().is_some_and(|kind| kind.is_inert());
    let text_style = if inert {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled("• ", Style::default().fg(Color::Magenta)),
        Span::styled(item.description.clone(), text_style),
    ])
}

fn draw_monster_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let monster = game.monster();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Round {}", game.round()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(monster.name.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        chunks[0],
    );
    let pattern: Vec<Line> = monster.pattern.lines().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(pattern).alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        hp_gauge(
            "Health",
            monster.current_health,
            monster.max_health,
            monster.health_fraction(),
        ),
        chunks[2],
    );
}

fn draw_die(frame: &mut Frame, area: Rect, game: &Game) {
    let face = if game.is_rolling() {
        Some(flicker_face())
    } else {
        game.last_roll()
    };
    let style = if game.is_rolling() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let lines: Vec<Line> = die_lines(face)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn draw_log(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app.log.lines().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Log"))
            .wrap(Wrap { trim: true }),
        area,
    );
}
