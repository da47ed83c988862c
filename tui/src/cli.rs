use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use contract_core::Field;

use crate::app_event::Route;

/// View the application opens on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StartView {
    /// Landing page with the destination cards.
    #[default]
    Landing,
    /// Straight into the contract editor.
    Editor,
}

impl From<StartView> for Route {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Landing => Route::Landing,
            StartView::Editor => Route::Editor,
        }
    }
}

/// One `<section>.<field>=<value>` edit given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub field: Field,
    pub value: String,
}

impl FromStr for FieldAssignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((path, value)) = s.split_once('=') else {
            return Err(format!("expected <section>.<field>=<value>, got '{s}'"));
        };
        let field = Field::parse_path(path.trim()).map_err(|e| e.to_string())?;
        Ok(Self {
            field,
            value: value.to_string(),
        })
    }
}

#[derive(Parser, Debug, Default)]
#[command(version, about = "Terminal editor for a single contract record")]
pub struct Cli {
    /// View to open on start.
    #[arg(long = "start", value_enum, default_value_t = StartView::Landing)]
    pub start: StartView,

    /// Read configuration from this file instead of the default location.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the captured diagnostic log to FILE on exit.
    #[arg(long = "dump-log", value_name = "FILE")]
    pub dump_log: Option<PathBuf>,

    /// Print the contract record as JSON and exit without starting the UI.
    #[arg(long = "print", default_value_t = false)]
    pub print: bool,

    /// Edit applied before printing, e.g. `--set rates.hourlyRate=90`.
    /// Repeatable.
    #[arg(long = "set", value_name = "SECTION.FIELD=VALUE", requires = "print")]
    pub set: Vec<FieldAssignment>,
}
