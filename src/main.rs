use anyhow::Result;
use clap::Parser;

use refgen::cli::{Cli, IndentChar};
use refgen::commands::generate::{self, GenerateOptions};
use refgen::config::{GenerationConfig, Indentation, VisibilityFloor};
use refgen::filters::ExclusionSet;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = GenerationConfig {
        visibility: if cli.include_internal {
            VisibilityFloor::IncludeInternal
        } else {
            VisibilityFloor::PublicSurface
        },
        exception_message: cli.exception_message,
        excluded_attributes: cli
            .exclude_attributes_file
            .as_deref()
            .map(ExclusionSet::from_file)
            .unwrap_or_default(),
        indentation: match cli.indent_char {
            IndentChar::Space => Indentation::new(cli.indent_size, ' '),
            IndentChar::Tab => Indentation::new(cli.indent_size, '\t'),
        },
    };

    generate::run(GenerateOptions {
        inputs: cli.inputs,
        output: cli.output,
        header_file: cli.header_file,
        config,
    })
}
