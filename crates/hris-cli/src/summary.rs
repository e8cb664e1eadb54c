//! Terminal tables for the wizard review and the role console.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use hris_map::{MappingConfigurator, Violation};
use hris_model::MappingTemplate;
use hris_roles::UserRow;

/// Render the template catalog.
pub fn templates_table(templates: &[MappingTemplate]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Name"),
        header_cell("Fields"),
        header_cell("Required"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for template in templates {
        table.add_row(vec![
            Cell::new(&template.id)
                .fg(comfy_table::Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&template.display_name),
            Cell::new(template.field_mapping.len()),
            Cell::new(template.required_fields.len()),
            Cell::new(&template.description),
        ]);
    }
    table
}

/// Render the mapping review: one row per external field, with the
/// internal target and the required flag.
pub fn mapping_table(configurator: &MappingConfigurator) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("External field"),
        header_cell("Applicant field"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for (external, internal) in configurator.mapping() {
        let required = configurator.required().contains(external);
        table.add_row(vec![
            Cell::new(external),
            Cell::new(internal),
            required_cell(required),
        ]);
    }
    table
}

/// Render the role console rows.
pub fn users_table<'a>(rows: impl Iterator<Item = &'a UserRow>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Email"),
        header_cell("Name"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in rows {
        let record = row.record();
        table.add_row(vec![
            Cell::new(record.user_id.0),
            Cell::new(&record.email),
            Cell::new(&record.display_name),
            Cell::new(record.current_role.label()),
        ]);
    }
    table
}

/// Print validation findings to stderr.
pub fn print_violations(violations: &[Violation]) {
    eprintln!("Cannot submit:");
    for violation in violations {
        eprintln!("- {violation}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn required_cell(required: bool) -> Cell {
    if required {
        Cell::new("yes")
            .fg(comfy_table::Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("-").fg(comfy_table::Color::DarkGrey)
    }
}
