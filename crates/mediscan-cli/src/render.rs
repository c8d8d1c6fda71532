use colored::Colorize;
use mediscan_application::{InteractionSession, LookupOutcome};
use mediscan_core::medication::MedicationRecord;

pub fn print_record(record: &MedicationRecord) {
    println!();
    println!(
        "{}",
        format!("{} {}", record.name, record.dosage).bright_green().bold()
    );
    let rows = [
        ("Generic name", record.generic_name.as_str()),
        ("Purpose", record.purpose.as_str()),
        ("Usage", record.usage.as_str()),
        ("Side effects", record.side_effects.as_str()),
        ("Warnings", record.warnings.as_str()),
        ("Manufacturer", record.manufacturer.as_str()),
    ];
    for (label, value) in rows {
        println!("  {:<13} {}", format!("{label}:").bright_black(), value);
    }
    println!(
        "  {:<13} {}",
        "Expires:".bright_black(),
        record.expiry_display()
    );
    println!();
}

pub fn print_outcome(outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::Found(record) => print_record(record),
        LookupOutcome::Failed { message, .. } => println!("{}", message.red()),
        LookupOutcome::Stale => {}
    }
}

/// Prints the latest announcement when speech is off.
pub fn print_notice(session: &InteractionSession) {
    if session.speech().is_supported() {
        return;
    }
    if let Some(notice) = session.last_notice() {
        println!("{} {}", "[notice]".yellow(), notice);
    }
}

pub fn print_state(session: &InteractionSession) {
    let state = session.state();
    let accessibility = session.accessibility();
    println!("{} {}", "session:".bright_black(), session.id());
    println!("{} {}", "view:".bright_black(), session.view());
    println!("{} {}", "tab:".bright_black(), session.active_tab());
    println!("{} {:?}", "query:".bright_black(), session.query());
    println!("{} {}", "camera:".bright_black(), session.is_camera_active());
    println!("{} {}", "loading:".bright_black(), state.loading);
    match (&state.result, &state.error) {
        (Some(record), _) => println!("{} {}", "result:".bright_black(), record.name),
        (None, Some(error)) => println!("{} {}", "error:".bright_black(), error.red()),
        (None, None) => println!("{} none", "result:".bright_black()),
    }
    println!(
        "{} high contrast {}, font {}",
        "display:".bright_black(),
        accessibility.high_contrast,
        accessibility.font_size
    );
}
