use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "creational_patterns")]
#[command(about = "Runnable examples of the Abstract Factory and Factory Method patterns")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Abstract Factory with two product families and two models
    AbstractFactoryGeneric,

    /// Abstract Factory building Android or IOS UI elements
    AbstractFactoryExample {
        /// Target platform (Android or IOS). Renders both platforms when omitted
        #[arg(long)]
        os: Option<String>,
    },

    /// Factory Method with two concrete factories
    FactoryMethodGeneric,

    /// Factory Method rendering a Windows or Web dialog
    FactoryMethodExample {
        /// Target platform (Windows or Web). Defaults to the application config
        #[arg(long)]
        os: Option<String>,
    },

    /// List the platforms each example accepts
    Platforms,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["creational_patterns", "factory-method-generic"]).unwrap();
        assert!(matches!(cli.command, Commands::FactoryMethodGeneric));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_os_and_verbose() {
        let cli = Cli::try_parse_from([
            "creational_patterns",
            "abstract-factory-example",
            "--os",
            "IOS",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::AbstractFactoryExample { os } => assert_eq!(os.as_deref(), Some("IOS")),
            _ => panic!("AbstractFactoryExampleが期待されます"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["creational_patterns"]).is_err());
    }
}
