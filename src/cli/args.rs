use crate::transpiler::Dialect;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "figdroid",
    about = "Convert design documents into Android layout XML and Java/Kotlin view code",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to ./figdroid.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a design document into layout and view code
    Convert {
        /// Design document JSON export ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory for generated files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Package name for generated code
        #[arg(short, long)]
        package: Option<String>,

        /// Class name for generated code
        #[arg(short, long)]
        class_name: Option<String>,

        /// Outputs to generate (repeatable, defaults to all)
        #[arg(short, long, value_enum)]
        target: Vec<Target>,

        /// Convert only the node with this id
        #[arg(long)]
        node: Option<String>,
    },

    /// Print the normalized component tree
    Inspect {
        /// Design document JSON export ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print components as JSON instead of a tree
        #[arg(long)]
        json: bool,

        /// Inspect only the node with this id
        #[arg(long)]
        node: Option<String>,
    },

    /// Write the built-in sample document
    Sample {
        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Xml,
    Java,
    Kotlin,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Xml, Target::Java, Target::Kotlin];

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("xml") || name.eq_ignore_ascii_case("markup") {
            return Some(Target::Xml);
        }

        Dialect::by_name(name).map(|dialect| {
            if dialect.name == Dialect::KOTLIN.name {
                Target::Kotlin
            } else {
                Target::Java
            }
        })
    }

    /// Construction dialect for code targets; `None` for the layout.
    pub fn dialect(self) -> Option<&'static Dialect> {
        match self {
            Target::Xml => None,
            Target::Java => Some(&Dialect::JAVA),
            Target::Kotlin => Some(&Dialect::KOTLIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "figdroid", "convert", "design.json", "-t", "xml", "-t", "kotlin", "--class-name",
            "LoginLayout", "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Convert {
                input,
                target,
                class_name,
                package,
                ..
            } => {
                assert_eq!(input, PathBuf::from("design.json"));
                assert_eq!(target, vec![Target::Xml, Target::Kotlin]);
                assert_eq!(class_name.as_deref(), Some("LoginLayout"));
                assert!(package.is_none());
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_target_names() {
        assert_eq!(Target::parse("XML"), Some(Target::Xml));
        assert_eq!(Target::parse("kt"), Some(Target::Kotlin));
        assert_eq!(Target::parse(" Java "), Some(Target::Java));
        assert_eq!(Target::Kotlin.dialect().map(|d| d.file_extension), Some("kt"));
        assert!(Target::Xml.dialect().is_none());
        assert_eq!(Target::parse("swift"), None);
    }
}
