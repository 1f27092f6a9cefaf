use anyhow::Result;
use creational_patterns::{
    cli::{execute_abstract_factory_example, setup_logging},
    ConsoleOutput,
};

fn main() -> Result<()> {
    setup_logging(false);
    execute_abstract_factory_example(&ConsoleOutput::new(), None)?;
    Ok(())
}
