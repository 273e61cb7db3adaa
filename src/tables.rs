use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{core::limits::LimitSet, quantity::current::Amperes};

pub fn build_phases_table(limits: &LimitSet, currents: &[Amperes; 3]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Phase", "Min", "Max", "Pause", "Measured"]);
    for (phase, limit) in limits.iter() {
        let current = currents[phase.index()];
        table.add_row(vec![
            Cell::new(phase),
            Cell::new(limit.min).set_alignment(CellAlignment::Right),
            Cell::new(limit.max).set_alignment(CellAlignment::Right),
            Cell::new(limit.pause).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(current)
                .set_alignment(CellAlignment::Right)
                .fg(if current >= limit.min { Color::Green } else { Color::Reset }),
        ]);
    }
    table
}
