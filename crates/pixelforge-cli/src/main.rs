//! pixelforge CLI - Command-line interface for the sprite asset pipeline
//!
//! This binary provides commands for generating, slicing, cleaning,
//! inspecting and replicating sprite assets, and for running whole
//! pipeline configs.

mod cli_args;

use clap::Parser;
use pixelforge_spec::Grid;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use pixelforge_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { out_root, json } => commands::generate::run(&out_root, json),
        Commands::Split {
            input,
            output_dir,
            cols,
            rows,
            names,
            json,
        } => commands::split::run(&input, &output_dir, Grid::new(cols, rows), &names, json),
        Commands::Clean {
            input,
            output,
            json,
        } => commands::clean::run(&input, output.as_deref(), json),
        Commands::Inspect {
            input,
            cols,
            rows,
            frames,
            json,
        } => commands::inspect::run(&input, Grid::new(cols, rows), frames, json),
        Commands::Replicate {
            sources,
            output_dir,
            count,
            prefix,
            json,
        } => commands::replicate::run(&sources, &output_dir, count, &prefix, json),
        Commands::Convert { input, output } => commands::convert::run(&input, &output),
        Commands::Run { config, dry_run } => commands::run::run(&config, dry_run),
        Commands::Validate { config, json } => commands::validate::run(&config, json),
        Commands::Chat { model, endpoint } => commands::chat::run(&model, &endpoint),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
