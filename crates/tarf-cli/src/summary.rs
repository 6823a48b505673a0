//! Human-readable result tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use tarf_model::{GENDERS, RiskTier, SUPPORTED_STATES, VEHICLE_TYPES, WEATHER_CODES};

use crate::commands::{PredictionOutcome, PrepareSummary};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

pub fn print_prepare_summary(summary: &PrepareSummary) {
    println!("Input:  {}", summary.input.display());
    println!("Output: {}", summary.output.display());
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Rows read"),
        header_cell("Rows kept"),
        header_cell("Faults"),
    ]);
    table.add_row(vec![
        Cell::new(summary.rows_read).set_alignment(CellAlignment::Right),
        Cell::new(summary.rows_kept).set_alignment(CellAlignment::Right),
        Cell::new(summary.faults)
            .set_alignment(CellAlignment::Right)
            .fg(if summary.faults > 0 {
                Color::Yellow
            } else {
                Color::Green
            }),
    ]);
    println!("{table}");
}

pub fn print_prediction(outcome: &PredictionOutcome) {
    let tier_color = match outcome.tier {
        RiskTier::Low => Color::Green,
        RiskTier::Moderate => Color::Yellow,
        RiskTier::High => Color::Red,
    };
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Conditions"),
        header_cell("Probability"),
        header_cell("Risk"),
    ]);
    table.add_row(vec![
        Cell::new(format!(
            "{} / {} / {} {}h",
            outcome.record.state,
            outcome.record.weather_condition,
            outcome.record.part_of_day,
            outcome.record.hour
        )),
        Cell::new(format!("{:.1}%", outcome.result.probability * 100.0))
            .set_alignment(CellAlignment::Right),
        Cell::new(outcome.tier.label())
            .fg(tier_color)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_codes() {
    let mut table = base_table();
    table.set_header(vec![header_cell("Weather code"), header_cell("Condition")]);
    for (code, label) in WEATHER_CODES {
        table.add_row(vec![
            Cell::new(code).set_alignment(CellAlignment::Right),
            Cell::new(label),
        ]);
    }
    println!("{table}");

    let mut table = base_table();
    table.set_header(vec![header_cell("Vehicle label"), header_cell("Token")]);
    for (label, token) in VEHICLE_TYPES {
        table.add_row(vec![Cell::new(label), Cell::new(token)]);
    }
    println!("{table}");

    let mut table = base_table();
    table.set_header(vec![header_cell("Gender label"), header_cell("Token")]);
    for (label, token) in GENDERS {
        table.add_row(vec![Cell::new(label), Cell::new(token)]);
    }
    println!("{table}");

    println!("Supported states: {}", SUPPORTED_STATES.join(", "));
}
