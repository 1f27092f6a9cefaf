use anyhow::Result;
use creational_patterns::{
    cli::{execute_abstract_factory_generic, setup_logging},
    ConsoleOutput,
};

fn main() -> Result<()> {
    setup_logging(false);
    execute_abstract_factory_generic(&ConsoleOutput::new())?;
    Ok(())
}
