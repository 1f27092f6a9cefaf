use anyhow::Result;
use creational_patterns::{
    cli::{execute_factory_method_example, setup_logging},
    ConsoleOutput,
};

fn main() -> Result<()> {
    setup_logging(false);
    execute_factory_method_example(&ConsoleOutput::new(), None)?;
    Ok(())
}
