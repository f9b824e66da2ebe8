use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use constgen_codegen::{Language, RenderRequest, canonicalize};
use constgen_core::{KeyTable, flatten};
use constgen_document::{DocumentFormat, SourceDocument};
use eyre::{Context, Result};

use super::UnwrapOrExit;

const HEADER: &str = "Code generated by constgen. DO NOT EDIT.";

#[derive(Args)]
pub struct GenerateCommand {
    /// Input document (YAML, JSON, or TOML)
    pub input: PathBuf,

    /// Output file, stdout if not specified
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Package (Go) or module (Rust) for the generated constants
    #[arg(short, long)]
    pub package: Option<String>,

    /// Prefix prepended to every constant name
    #[arg(short = 'r', long, default_value = "")]
    pub prefix: String,

    /// Target language
    #[arg(short, long, default_value_t = Language::Go)]
    pub language: Language,

    /// Input format (overrides file extension detection)
    #[arg(short, long)]
    pub format: Option<DocumentFormat>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let source = SourceDocument::open(&self.input, self.format).unwrap_or_exit();

        let flat = flatten(source.document());
        let table = KeyTable::from_flat(&flat);

        let rendered = self.language.renderer().render(&RenderRequest {
            table: &table,
            package: self.package.as_deref(),
            prefix: &self.prefix,
            header: HEADER,
        });

        let code = match canonicalize(&rendered) {
            Ok(code) => code,
            Err(err) => {
                // Keep the unformatted output but surface the problem.
                eprintln!("warning: {}", err);
                err.raw
            }
        };

        match &self.output {
            Some(path) => std::fs::write(path, &code)
                .wrap_err_with(|| format!("failed to write '{}'", path.display()))?,
            None => std::io::stdout()
                .write_all(code.as_bytes())
                .wrap_err("failed to write to stdout")?,
        }

        Ok(())
    }
}
