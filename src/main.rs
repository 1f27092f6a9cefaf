use anyhow::Result;
use clap::Parser;

use creational_patterns::{
    cli::{
        execute_abstract_factory_example, execute_abstract_factory_generic,
        execute_factory_method_example, execute_factory_method_generic, execute_platforms,
        format_failure, setup_logging, Cli, Commands,
    },
    ConsoleOutput, Output, PatternResult,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let out = ConsoleOutput::new();

    if let Err(error) = run_command(cli.command, &out) {
        eprintln!("{}", format_failure(&error));
        std::process::exit(1);
    }

    Ok(())
}

fn run_command(command: Commands, out: &dyn Output) -> PatternResult<()> {
    match command {
        Commands::AbstractFactoryGeneric => execute_abstract_factory_generic(out)?,
        Commands::AbstractFactoryExample { os } => {
            execute_abstract_factory_example(out, os.as_deref())?
        }
        Commands::FactoryMethodGeneric => execute_factory_method_generic(out)?,
        Commands::FactoryMethodExample { os } => {
            execute_factory_method_example(out, os.as_deref())?
        }
        Commands::Platforms => execute_platforms(out),
    }

    Ok(())
}
