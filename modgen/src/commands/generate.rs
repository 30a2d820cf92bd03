use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use modgen::{Config, GenerateOptions, Generator, Overwrite, Request};

use super::UnwrapOrExit;
use crate::reports::{
    self, GenerateReport, GenerationResult, OutputFormat, PreviewResult, WrittenResult,
};

const EXAMPLES: &str = "\
Examples:
  modgen generate -s go -n product -f \"name:string,price:int64\" -p github.com/user/app
  modgen generate -s laravel -n Product -f \"name:string,price:integer\"
  modgen generate -s react -n product -f \"name:string,price:number\"
  modgen generate -s flutter -n product -f \"name:String,price:int\"";

#[derive(Args)]
#[command(after_help = EXAMPLES)]
pub struct GenerateCommand {
    /// Target stack: go, laravel, react or flutter
    #[arg(short, long)]
    pub stack: Option<String>,

    /// Module/entity name, e.g. order_item
    #[arg(short, long)]
    pub name: String,

    /// Fields as name[:type][?], comma-separated
    #[arg(short, long)]
    pub fields: String,

    /// Project path used in cross-file imports (Go module path, etc.)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Output directory (defaults to current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also generate validators (Go only)
    #[arg(long)]
    pub validators: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub skip_existing: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Path to modgen.toml (defaults to ./modgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Invocation settings after merging flags over config defaults.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    stack: String,
    project: String,
    output: PathBuf,
    options: GenerateOptions,
    overwrite: Overwrite,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let settings = self.settings(&config)?;

        let generation = Generator::default()
            .run(&Request {
                stack: &settings.stack,
                name: &self.name,
                fields: &self.fields,
                project: &settings.project,
                options: &settings.options,
            })
            .unwrap_or_exit();

        let result = if self.dry_run {
            GenerationResult::Preview(PreviewResult {
                files: generation.artifacts,
            })
        } else {
            let files = generation
                .artifacts
                .write(&settings.output, settings.overwrite)
                .wrap_err("Failed to write generated files")?;
            GenerationResult::Written(WrittenResult {
                output_dir: settings.output,
                files,
            })
        };

        let report = GenerateReport {
            stack: generation.stack,
            entity: generation.entity.pascal().to_string(),
            field_count: generation.fields.len(),
            result,
        };
        reports::emit(&report, self.format)
    }

    /// Merge flags over config defaults over built-in defaults.
    fn settings(&self, config: &Config) -> Result<Settings> {
        let defaults = &config.defaults;

        let Some(stack) = self.stack.clone().or_else(|| defaults.stack.clone()) else {
            eyre::bail!("no stack given: pass --stack or set defaults.stack in modgen.toml");
        };

        let overwrite = if self.skip_existing {
            Overwrite::IfMissing
        } else {
            defaults.overwrite.unwrap_or_default()
        };

        Ok(Settings {
            stack,
            project: self
                .project
                .clone()
                .or_else(|| defaults.project.clone())
                .unwrap_or_default(),
            output: self
                .output
                .clone()
                .or_else(|| defaults.output.as_ref().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(".")),
            options: GenerateOptions {
                validators: self.validators || defaults.validators.unwrap_or(false),
            },
            overwrite,
        })
    }
}
