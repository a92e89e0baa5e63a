use std::path::PathBuf;

use clap::Parser;

use leaveplanner::report::reportlocale::ReportLocale;

/// Suggests leave days that turn public holidays into long breaks.
#[derive(Parser)]
#[command(name = "leaveplanner", version, about = "Plan leave days around public holidays")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON configuration file with holiday calendars and planner defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the holiday calendar to plan around.
    #[arg(long)]
    pub calendar: Option<String>,

    /// Maximum number of leave days; prompts on stdin when omitted.
    #[arg(short, long, allow_negative_numbers = true)]
    pub max_leaves: Option<i64>,

    /// Report language (English or Turkish).
    #[arg(short, long)]
    pub locale: Option<ReportLocale>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Reads a leave count typed by the user. Blank input means `default`;
/// anything that is not an integer yields `None`.
pub fn parse_max_leaves(input: &str, default: usize) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Some(default as i64);
    }
    input.parse::<i64>().ok()
}
