mod convert;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use mintter_blocks_config::Config;
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Converts rich-text blocks between editor trees and annotated wire blocks
#[derive(Parser, Debug)]
#[command(name = "mintter-blocks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Write the result to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert an editor block (or group) into wire JSON
    ToApi {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
    },

    /// Convert a wire block (or block node list) into an editor tree
    ToTree {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,

        /// Skip checking annotations before conversion
        #[arg(long)]
        no_validate: bool,
    },
}

/// Logger reading its filter from `env`, falling back to `info` when the
/// variable is unset.
fn logger_builder(env: Env) -> env_logger::Builder {
    env_logger::Builder::from_env(env.default_filter_or("info"))
}

fn main() -> Result<()> {
    logger_builder(Env::default()).init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());
    let config = Config::load_from_path(&config_path)?.unwrap_or_default();

    let pretty = cli.pretty || config.pretty;

    let result = match &cli.command {
        Command::ToApi { input } => convert::tree_to_wire(&read_input(input.as_deref())?, pretty)?,
        Command::ToTree { input, no_validate } => {
            let check = config.validate && !no_validate;
            convert::wire_to_tree(&read_input(input.as_deref())?, pretty, check)?
        }
    };

    match &cli.output {
        Some(path) => {
            let path = config.resolve_output(path);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, format!("{result}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{result}"),
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_to_tree_flags() {
        let cli = Cli::parse_from(["mintter-blocks", "to-tree", "in.json", "--no-validate", "--pretty"]);

        assert!(cli.pretty);
        match cli.command {
            Command::ToTree { input, no_validate } => {
                assert_eq!(input, Some(PathBuf::from("in.json")));
                assert!(no_validate);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_log_level_defaults_to_info() {
        let logger = logger_builder(Env::new().filter("MINTTER_BLOCKS_UNSET_LOG")).build();
        assert_eq!(logger.filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_log_level_follows_environment() {
        unsafe {
            std::env::set_var("MINTTER_BLOCKS_TEST_LOG", "debug");
        }

        let logger = logger_builder(Env::new().filter("MINTTER_BLOCKS_TEST_LOG")).build();
        assert_eq!(logger.filter(), log::LevelFilter::Debug);

        unsafe {
            std::env::remove_var("MINTTER_BLOCKS_TEST_LOG");
        }
    }

    #[test]
    fn test_read_input_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("block.json");
        std::fs::write(&file, "{}").unwrap();

        assert_eq!(read_input(Some(&file)).unwrap(), "{}");
        assert!(read_input(Some(&temp_dir.path().join("missing.json"))).is_err());
    }
}
