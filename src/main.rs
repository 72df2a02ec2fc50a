// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use logging::Logging;
use tetrasub::Substitution;

/// Replaces the second atom of an XYZ fragment with three substituents on the first atom,
/// arranged as a regular tetrahedron with the original bond length.
#[derive(Parser)]
#[command(name = tetrasub::APP_NAME, version)]
struct Cli {
    /// XYZ file whose first row is the heavy atom and second row the atom it is bonded to.
    input: PathBuf,
    /// XYZ file the substituted fragment is appended to.
    output: PathBuf,
    /// Label of the first substituent.
    first: String,
    /// Label of the second substituent.
    second: String,
    /// Label of the third substituent.
    third: String,
}

fn run(cli: &Cli) -> Result<()> {
    let substitution = Substitution::from_xyz(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let labels = [cli.first.as_str(), cli.second.as_str(), cli.third.as_str()];
    substitution
        .write_xyz(&cli.output, labels)
        .with_context(|| format!("writing {}", cli.output.display()))
}

fn main() {
    Logging::new(vec![env!("CARGO_PKG_NAME")]).init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        for cause in err.chain().skip(1) {
            eprintln!("because: {}", cause);
        }
        std::process::exit(1);
    }
}

// End of File
