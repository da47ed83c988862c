use clap::Parser;
use contract_tui::Cli;
use contract_tui::record_json;
use contract_tui::run_main;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.print {
        println!("{}", record_json(&cli.set)?);
        return Ok(());
    }

    run_main(cli)
}
