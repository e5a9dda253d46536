//! Command-line interface - a thin collaborator over the medicine store.
//!
//! Each invocation opens the store, runs one operation, and prints plain text.
//! Everything here goes through the store's public operations only.

use crate::{
    config::settings::{DEFAULT_SETTINGS_PATH, Settings},
    core::{
        DocumentStorage, MedicineStore,
        report::{ChecklistRow, completion_percent},
    },
    entities::{DAY_LABELS, Medicine, WeeklySchedule},
    errors::Result,
};
use clap::{Args, Parser, Subcommand};
use std::{collections::BTreeMap, fmt::Write, path::PathBuf};
use tracing::info;

/// Track scheduled medicines and today's doses
#[derive(Debug, Parser)]
#[command(name = "medbay", version)]
pub struct Cli {
    /// Settings file
    #[arg(long, default_value = DEFAULT_SETTINGS_PATH)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show today's checklist
    List,
    /// Show every tracked medicine
    Medicines,
    /// Add a medicine, replacing any medicine with the same name
    Add(AddArgs),
    /// Stop tracking a medicine
    Remove { name: String },
    /// Record one dose taken
    Take { name: String },
    /// Undo one recorded dose
    Undo { name: String },
    /// Print the medicine ids for drug-information lookups
    Ids,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    /// Amount in a single dose
    #[arg(long)]
    pub dose_size: u32,
    /// Doses on hand
    #[arg(long)]
    pub inventory: i64,
    /// Unit of a dose, e.g. mg or tablet
    #[arg(long)]
    pub unit: String,
    /// Doses per day from Sunday to Saturday, e.g. 0,1,1,1,1,1,0
    #[arg(long)]
    pub schedule: WeeklySchedule,
    #[arg(long, default_value = "")]
    pub description: String,
    /// External lookup id
    #[arg(long, default_value = "")]
    pub id: String,
}

/// Runs one command against the store and returns the text to print.
pub fn run<S: DocumentStorage>(
    command: Command,
    store: &mut MedicineStore<S>,
    settings: &Settings,
) -> Result<String> {
    match command {
        Command::List => {
            let rows = store.checklist_report(settings.low_supply_threshold);
            Ok(format_checklist(store.today_day(), &rows))
        }
        Command::Medicines => Ok(format_medicines(store.user_medicines())),
        Command::Add(args) => {
            if store.exists(&args.name) {
                info!("Replacing existing medicine '{}'", args.name);
            }
            let medicine = store.factory().create_medicine(
                args.name,
                args.dose_size,
                args.inventory,
                args.unit,
                args.schedule,
                args.description,
                args.id,
            );
            let name = medicine.name.clone();
            store.save_medicine(medicine)?;
            Ok(format!("Saved {name}"))
        }
        Command::Remove { name } => {
            let existed = store.exists(&name);
            store.remove_medicine(&name)?;
            Ok(if existed {
                format!("Removed {name}")
            } else {
                format!("{name} was not tracked")
            })
        }
        Command::Take { name } => {
            store.take_medicine(&name)?;
            Ok(format_taken(store, &name))
        }
        Command::Undo { name } => {
            store.undo_take_medicine(&name)?;
            Ok(format_taken(store, &name))
        }
        Command::Ids => Ok(store.id_list_string()),
    }
}

fn format_taken<S: DocumentStorage>(store: &MedicineStore<S>, name: &str) -> String {
    let taken = store.today_checklist().get(name).copied().unwrap_or_default();
    let inventory = store
        .user_medicines()
        .get(name)
        .map(|medicine| medicine.dose.inventory)
        .unwrap_or_default();
    format!("{name}: {taken} taken today, {inventory} left")
}

/// Formats today's checklist, one line per medicine.
#[must_use]
pub fn format_checklist(day: usize, rows: &[ChecklistRow]) -> String {
    let label = DAY_LABELS.get(day).copied().unwrap_or("?");
    if rows.is_empty() {
        return format!("Nothing scheduled for {label}");
    }

    let mut out = format!(
        "Checklist for {label} - {:.0}% done\n",
        completion_percent(rows)
    );
    for row in rows {
        let mark = if row.is_complete() { "x" } else { " " };
        let _ = write!(
            out,
            "[{mark}] {} - {}/{} x {} {}",
            row.name, row.taken, row.scheduled, row.dose_size, row.unit
        );
        if row.low_supply {
            let _ = write!(out, " (low supply: {} left)", row.inventory);
        }
        out.push('\n');
    }
    out
}

/// Formats every tracked medicine with its schedule and supply.
#[must_use]
pub fn format_medicines(medicines: &BTreeMap<String, Medicine>) -> String {
    if medicines.is_empty() {
        return "No medicines tracked".to_string();
    }

    let mut out = String::new();
    for medicine in medicines.values() {
        let _ = writeln!(
            out,
            "{} [{}] {} {} per dose, {} on hand, schedule {}",
            medicine.name,
            medicine.id,
            medicine.dose.size,
            medicine.dose.unit,
            medicine.dose.inventory,
            medicine.weekly_schedule
        );
        if !medicine.description.is_empty() {
            let _ = writeln!(out, "    {}", medicine.description);
        }
    }
    out
}
