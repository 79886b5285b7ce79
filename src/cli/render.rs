use std::path::PathBuf;

use clap::{Args, ValueEnum};
use imfridge::{Config, clock, items, output};
use imfridge_calendar::{ViewKind, ViewWindow, build};
use time::Date;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    Month,
    Week,
    Day,
}

impl From<View> for ViewKind {
    fn from(value: View) -> Self {
        match value {
            View::Month => ViewKind::Month,
            View::Week => ViewKind::Week,
            View::Day => ViewKind::Day,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Args)]
pub struct RenderArgs {
    /// JSON item snapshot
    #[arg(long)]
    pub items: PathBuf,

    #[arg(long, value_enum, default_value_t = View::Week)]
    pub view: View,

    /// Date the view is anchored to (defaults to today)
    #[arg(long, value_parser = super::parse_date)]
    pub date: Option<Date>,

    /// Override the clock
    #[arg(long, value_parser = super::parse_date)]
    pub today: Option<Date>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn render(config: Config, args: RenderArgs) -> anyhow::Result<()> {
    let options = config.render_options();
    let today = match args.today {
        Some(today) => today,
        None => clock::today(&config.clock.timezone)?,
    };
    let view = ViewWindow::new(args.view.into(), args.date.unwrap_or(today));

    let items = items::load_items(&args.items)?;
    let model = build(&items, view, today, &options);

    let rendered = match args.format {
        Format::Text => output::render_text(&model),
        Format::Json => serde_json::to_string_pretty(&model)? + "\n",
    };
    print!("{rendered}");

    Ok(())
}
