use chrono::Utc;
use clap::{Parser, Subcommand};
use edtrack_core::allergy::allergy_summary;
use edtrack_core::census::Census;
use edtrack_core::chart::export_json;
use edtrack_core::config::{department_name_from_env_value, TrackerConfig};
use edtrack_core::mock::{demo_census, demo_forms, demo_users};
use edtrack_core::timeline::{assemble, group_by_day};
use edtrack_core::vitals::{trend, vitals_table};
use edtrack_ranges::DisplayClass;

#[derive(Parser)]
#[command(name = "edtrack")]
#[command(about = "Department tracking board browser (demo dataset)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the board census, optionally filtered
    Census {
        /// Filter by name or MRN substring
        query: Option<String>,
    },
    /// Show the header banner for one patient
    Banner {
        /// Medical record number
        mrn: String,
    },
    /// Show the vitals table, or one measurement's trend
    Vitals {
        /// Medical record number
        mrn: String,
        /// Measurement key to trend (for example heartRate)
        #[arg(long)]
        trend: Option<String>,
    },
    /// Show resulted lab panels
    Labs {
        /// Medical record number
        mrn: String,
    },
    /// Show documented allergies
    Allergies {
        /// Medical record number
        mrn: String,
    },
    /// Show chart notes
    Notes {
        /// Medical record number
        mrn: String,
    },
    /// Show the patient timeline grouped by day
    Timeline {
        /// Medical record number
        mrn: String,
    },
    /// Browse the clinical-forms catalog
    Forms {
        /// Filter by name or category substring
        query: Option<String>,
    },
    /// Check credentials against the mock user directory
    Login {
        username: String,
        password: String,
    },
    /// Dump one patient's chart as JSON
    Export {
        /// Medical record number
        mrn: String,
    },
}

/// Suffix like ` [warning]` for values that need attention.
fn flag(class: DisplayClass) -> String {
    match class {
        DisplayClass::Normal => String::new(),
        other => format!(" [{other}]"),
    }
}

fn print_census(census: &Census, department: &str, query: Option<&str>) {
    let patients = census.search(query.unwrap_or(""));
    println!("{department} — {} patient(s)", patients.len());
    if patients.is_empty() {
        println!("No patients match.");
        return;
    }
    let today = Utc::now().date_naive();
    for patient in patients {
        println!(
            "{}  {:<24} {}{}  {}",
            patient.mrn,
            patient.full_name(),
            patient.age_on(today),
            patient.sex.abbrev(),
            patient.location
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = TrackerConfig::new(department_name_from_env_value(
        std::env::var("EDTRACK_DEPARTMENT").ok(),
    ))?;

    let cli = Cli::parse();
    let census = demo_census()?;

    match cli.command {
        Some(Commands::Census { query }) => {
            print_census(&census, config.department_name(), query.as_deref());
        }
        Some(Commands::Banner { mrn }) => {
            let chart = census.find_by_mrn(&mrn)?;
            let today = Utc::now().date_naive();
            println!("{}", chart.patient.banner_line(today));
            println!("Allergies: {}", allergy_summary(&chart.allergies));
        }
        Some(Commands::Vitals { mrn, trend: trend_key }) => {
            let chart = census.find_by_mrn(&mrn)?;
            match trend_key {
                Some(key) => {
                    let series = trend(&chart.vitals, &key);
                    if series.is_empty() {
                        println!("No data for measurement '{key}'.");
                    } else {
                        for (at, value) in series {
                            println!("{}  {}", at.format("%Y-%m-%d %H:%M"), value);
                        }
                    }
                }
                None => {
                    for observation in vitals_table(&chart.vitals) {
                        println!("{}", observation.recorded_at.format("%Y-%m-%d %H:%M"));
                        for m in observation.classified() {
                            println!(
                                "  {:<18} {} {}{}  ({})",
                                m.label,
                                m.value,
                                m.unit,
                                flag(m.class),
                                m.range
                            );
                        }
                    }
                }
            }
        }
        Some(Commands::Labs { mrn }) => {
            let chart = census.find_by_mrn(&mrn)?;
            if chart.labs.is_empty() {
                println!("No labs resulted.");
            }
            for panel in &chart.labs {
                println!(
                    "{} — collected {}",
                    panel.name,
                    panel.collected_at.format("%Y-%m-%d %H:%M")
                );
                for r in panel.flagged() {
                    println!(
                        "  {:<20} {} {}{}  ({})",
                        r.label,
                        r.value,
                        r.unit,
                        flag(r.class),
                        r.range
                    );
                }
            }
        }
        Some(Commands::Allergies { mrn }) => {
            let chart = census.find_by_mrn(&mrn)?;
            println!("{}", allergy_summary(&chart.allergies));
            for allergy in &chart.allergies {
                println!(
                    "  {} — {} ({}, noted {})",
                    allergy.substance,
                    allergy.reaction,
                    allergy.severity.label(),
                    allergy.noted_on
                );
            }
        }
        Some(Commands::Notes { mrn }) => {
            let chart = census.find_by_mrn(&mrn)?;
            if chart.notes.is_empty() {
                println!("No notes on chart.");
            }
            for note in &chart.notes {
                println!(
                    "== {} note — {} — {}",
                    note.note_type.label(),
                    note.author,
                    note.recorded_at.format("%Y-%m-%d %H:%M")
                );
                if let Some(title) = &note.title {
                    println!("   {title}");
                }
                println!("{}", note.body);
            }
        }
        Some(Commands::Timeline { mrn }) => {
            let chart = census.find_by_mrn(&mrn)?;
            for day in group_by_day(assemble(chart)) {
                println!("{}", day.date);
                for event in &day.events {
                    let detail = event
                        .detail
                        .as_deref()
                        .map(|d| format!(" — {d}"))
                        .unwrap_or_default();
                    println!(
                        "  {}  {:<10} {}{}",
                        event.occurred_at.format("%H:%M"),
                        event.category.label(),
                        event.summary,
                        detail
                    );
                }
            }
        }
        Some(Commands::Forms { query }) => {
            let catalog = demo_forms();
            let forms = catalog.search(query.as_deref().unwrap_or(""));
            if forms.is_empty() {
                println!("No forms match.");
            }
            for form in forms {
                println!(
                    "{:<32} {:<12} revised {}",
                    form.name, form.category, form.revised_on
                );
            }
        }
        Some(Commands::Login { username, password }) => {
            match demo_users().authenticate(&username, &password) {
                Ok(session) => println!(
                    "Signed in as {} ({})",
                    session.display_name,
                    session.role.label()
                ),
                Err(e) => eprintln!("Login failed: {e}"),
            }
        }
        Some(Commands::Export { mrn }) => {
            let chart = census.find_by_mrn(&mrn)?;
            println!("{}", export_json(chart)?);
        }
        None => {
            println!("Use 'edtrack --help' for commands");
        }
    }

    Ok(())
}
