//! Die face art.

use std::time::{SystemTime, UNIX_EPOCH};

/// Pip rows for faces 1 to 6, three rows of three cells each.
const PIPS: [[&str; 3]; 6] = [
    ["     ", "  ●  ", "     "],
    ["●    ", "     ", "    ●"],
    ["●    ", "  ●  ", "    ●"],
    ["●   ●", "     ", "●   ●"],
    ["●   ●", "  ●  ", "●   ●"],
    ["●   ●", "●   ●", "●   ●"],
];

/// Five text rows drawing `face` inside a box. Faces outside 1..=6 draw blank.
pub fn die_lines(face: Option<u8>) -> Vec<String> {
    let rows = match face {
        Some(f @ 1..=6) => PIPS[f as usize - 1],
        _ => ["     ", "  ?  ", "     "],
    };
    let mut lines = Vec::with_capacity(5);
    lines.push("┌───────┐".to_string());
    for row in rows {
        lines.push(format!("│ {} │", row));
    }
    lines.push("└───────┘".to_string());
    lines
}

fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Face shown while a roll is pending; changes every 80ms.
pub fn flicker_face() -> u8 {
    flicker_face_at(current_millis())
}

fn flicker_face_at(millis: u128) -> u8 {
    ((millis / 80) % 6) as u8 + 1
}
