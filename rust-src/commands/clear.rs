//! Clear command - empty the barcode history.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::storage::HistoryStore;


/// Run the clear command, asking for confirmation unless `force` is set.
pub fn run(store: &HistoryStore, force: bool) -> Result<bool> {
    if !force {
        let stdin = io::stdin();
        let confirmed = confirm(&mut stdin.lock(), &mut io::stdout())?;
        if !confirmed {
            println!("\x1b[33mCancelled\x1b[0m");
            return Ok(false);
        }
    }

    store.clear().context("Failed to clear barcode history")?;

    Ok(true)
}


/// Ask the user to confirm; only `y` or `yes` counts.
fn confirm(input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    writeln!(output, "\x1b[1m\x1b[31mAre you sure you want to clear the barcode history?\x1b[0m")?;
    write!(output, "\x1b[33mThis action cannot be undone.\x1b[0m [y/N]: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
