//! Pretty output formatting.

use itemstore_core::item::{Item, ItemId};

use crate::commands::CommandOutput;
use crate::scenario::ScenarioReport;

/// Format an item for display.
pub fn format_item(item: &Item) -> String {
    format!("{}\n  Payload: {}", item.id, item.payload)
}

/// Format the result of a lookup, which may have found nothing.
pub fn format_lookup(id: &ItemId, item: Option<&Item>) -> String {
    match item {
        Some(item) => format_item(item),
        None => format!("No item found with ID {}", id),
    }
}

/// Format table names for display.
pub fn format_tables(tables: &[String]) -> String {
    if tables.is_empty() {
        return "No tables found.".to_string();
    }
    let mut output = format!("TABLES ({})\n", tables.len());
    output.push_str(&"-".repeat(40));
    for table in tables {
        output.push_str(&format!("\n{}", table));
    }
    output
}

/// Format a demo run, one section per step.
pub fn format_report(report: &ScenarioReport) -> String {
    let id = &report.created.id;
    let mut sections = vec![
        format_tables(&report.tables),
        format!("Created:\n{}", format_item(&report.created)),
        format!("Fetched:\n{}", format_lookup(id, report.fetched.as_ref())),
        format!("Updated:\n{}\n  Payload: {}", id, report.updated_payload),
    ];
    sections.push(match &report.deleted {
        Some(item) => format!("Deleted:\n{}", format_item(item)),
        None => format!("Deleted:\n{} (was already gone)", id),
    });
    sections.push(format!(
        "After delete:\n{}",
        format_lookup(id, report.after_delete.as_ref())
    ));
    sections.join("\n\n")
}

/// Format any command result for display.
pub fn format_command_output(output: &CommandOutput) -> String {
    match output {
        CommandOutput::Tables { tables } => format_tables(tables),
        CommandOutput::Created { item } => format!("Created:\n{}", format_item(item)),
        CommandOutput::Fetched { id, item } => format_lookup(id, item.as_ref()),
        CommandOutput::Updated { id, payload } => {
            format!("Updated:\n{}\n  Payload: {}", id, payload)
        }
        CommandOutput::Deleted { id, removed } => match removed {
            Some(item) => format!("Deleted:\n{}", format_item(item)),
            None => format!("Nothing to delete for ID {}", id),
        },
        CommandOutput::Demo { report } => format_report(report),
    }
}
