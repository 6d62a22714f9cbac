use crate::schedule::{DayRoster, RunReport};

/// Formats a day's roster as `Day: duty -> assignee, ...`
pub fn format_day_roster(day: &DayRoster) -> String {
    let duties: Vec<String> = day
        .assignments
        .iter()
        .map(|a| format!("{} -> {}", a.duty, a.assignee))
        .collect();
    format!("{}: {}", day.day, duties.join(", "))
}

/// Prints a finished run in a readable format
pub fn print_run_report(report: &RunReport) {
    println!("\n=== Duty Roster {} ===", report.label);
    for day in &report.days {
        println!("  {}", format_day_roster(day));
    }

    println!("\nUpdated counts ({} duties assigned):", report.assignments_made());
    for candidate in &report.candidates {
        println!("  {:<20} {}", candidate.name(), candidate.count());
    }
}
