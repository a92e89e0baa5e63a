mod cli;

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use leaveplanner::configuration::Configuration;
use leaveplanner::logging;
use leaveplanner::planner::leaveselector::{LeaveBudget, find_efficient_leaves};
use leaveplanner::report::leavereport::LeaveReport;
use leaveplanner::report::reportlocale::ReportLocale;
use leaveplanner::time::calendar::holidaycalendar::build_holiday_dates;

use crate::cli::{Cli, parse_max_leaves};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn prompt_max_leaves(locale: ReportLocale, default: usize) -> Result<i64> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", locale.prompt(default))?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_max_leaves(&line, default).unwrap_or_else(|| {
        println!("{}", locale.invalid_input(default));
        default as i64
    }))
}

fn run(cli: Cli) -> Result<()> {
    let config = Configuration::new();
    if let Some(path) = cli.config.as_ref() {
        config
            .from_reader(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?;
    }
    let settings = config.planner_settings().clone();
    let locale = cli.locale.unwrap_or(settings.locale());

    let calendar = config.calendar(cli.calendar.as_deref())?;
    let holidays = build_holiday_dates(&calendar)
        .with_context(|| format!("invalid holiday calendar '{}'", calendar.name()))?;
    let Some(year) = calendar.planning_year(&holidays) else {
        bail!("calendar '{}' has neither a year nor any holidays", calendar.name());
    };

    let default = settings.default_max_leaves().get();
    let requested = match cli.max_leaves {
        Some(n) => n,
        None => prompt_max_leaves(locale, default)?
    };
    let budget = LeaveBudget::clamped(requested);

    let plan = find_efficient_leaves(&holidays, budget.get() as i64);
    let report = LeaveReport::new(year, budget.get(), plan, &holidays);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.localized(locale));
    }
    Ok(())
}
