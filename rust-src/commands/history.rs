//! History command - list and search previously generated barcodes.

use anyhow::Result;

use crate::storage::{HistoryQuery, HistoryStore};


/// Run the history command.
pub fn run(store: &HistoryStore, search: Option<&str>) -> Result<()> {
    let term = search.unwrap_or("");
    let results = store.query(term);

    if results.is_empty() {
        if term.is_empty() {
            println!("No barcodes in history yet. Run 'upcb generate <NUMBER>' to create one.");
        } else {
            println!("No barcodes match '{}'.", term);
        }
        return Ok(());
    }

    print!("{}", format_listing(&results));

    Ok(())
}


/// Format results as a numbered list, most recent first.
fn format_listing(results: &HistoryQuery) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>4}  {:<12}  {}\n", "#", "Number", "Name"));
    out.push_str(&format!("{}\n", "-".repeat(40)));

    for (index, record) in results.iter().enumerate() {
        out.push_str(&format!("{:>4}  {:<12}  {}\n", index + 1, record.code, record.label));
    }

    out
}
