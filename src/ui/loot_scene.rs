use fate::items::{Item, ItemCategory};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn category_color(category: ItemCategory) -> Color {
    match category {
        ItemCategory::Damage => Color::Red,
        ItemCategory::Health => Color::Green,
        ItemCategory::Effect => Color::Magenta,
    }
}

/// Draws the reward choice after a monster falls.
pub fn draw_loot_scene(frame: &mut Frame, area: Rect, offer: &[Item]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new("Victory! Choose your reward")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    let count = offer.len().max(1) as u32;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(chunks[1]);

    for (i, (item, card)) in offer.iter().zip(cards.iter()).enumerate() {
        let color = category_color(item.category());
        let lines = vec![
            Line::from(Span::styled(
                item.name.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                item.category().name(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(item.description.clone()),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color))
                        .title(format!("[{}]", i + 1)),
                ),
            *card,
        );
    }

    frame.render_widget(
        Paragraph::new("[1-3] Pick   [Q] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}
