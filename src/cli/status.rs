use std::path::PathBuf;

use clap::Args;
use imfridge::{Config, clock, items, output};
use imfridge_calendar::status_list;

#[derive(Args)]
pub struct StatusArgs {
    /// JSON item snapshot
    #[arg(long)]
    pub items: PathBuf,

    /// Override the clock
    #[arg(long, value_parser = super::parse_date)]
    pub today: Option<time::Date>,
}

pub fn status(config: Config, args: StatusArgs) -> anyhow::Result<()> {
    let today = match args.today {
        Some(today) => today,
        None => clock::today(&config.clock.timezone)?,
    };

    let items = items::load_items(&args.items)?;
    let statuses = status_list(&items, today, config.calendar.reminder_window_days);

    print!("{}", output::status_text(&statuses));

    Ok(())
}
