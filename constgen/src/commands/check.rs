use std::path::PathBuf;

use clap::Args;
use constgen_core::{KeyTable, flatten};
use constgen_document::{DocumentFormat, SourceDocument};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Input document (YAML, JSON, or TOML)
    pub input: PathBuf,

    /// Input format (overrides file extension detection)
    #[arg(short, long)]
    pub format: Option<DocumentFormat>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let source = SourceDocument::open(&self.input, self.format).unwrap_or_exit();

        let flat = flatten(source.document());
        let table = KeyTable::from_flat(&flat);

        println!("✓ {} is valid ({})\n", self.input.display(), source.format());
        println!(
            "  {} constant{}:",
            table.len(),
            if table.len() == 1 { "" } else { "s" }
        );
        for entry in table.iter() {
            println!("    {} -> {}", entry.path, entry.ident);
        }

        Ok(())
    }
}
