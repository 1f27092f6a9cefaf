use anyhow::Result;
use creational_patterns::{
    cli::{execute_factory_method_generic, setup_logging},
    ConsoleOutput,
};

fn main() -> Result<()> {
    setup_logging(false);
    execute_factory_method_generic(&ConsoleOutput::new())?;
    Ok(())
}
