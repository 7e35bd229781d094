//! Generate command - render a barcode and record it in the history.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::commands::default_image_path;
use crate::config::default_label;
use crate::models::UpcCode;
use crate::notify::MSG_INVALID_CODE;
use crate::render::Renderer;
use crate::storage::{HistoryStore, InsertOutcome};


/// Run the generate command.
///
/// The image is written even when the history rejects the barcode as a
/// duplicate, and the barcode is recorded even when the image cannot be
/// written.
pub fn run(
    store: &HistoryStore,
    renderer: &dyn Renderer,
    number: &str,
    name: Option<String>,
    output: Option<PathBuf>,
) -> Result<InsertOutcome> {
    let code = UpcCode::parse(number).context(MSG_INVALID_CODE)?;

    let label = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| default_label(Utc::now()));

    let rendered = renderer
        .render(&code)
        .with_context(|| format!("Failed to render barcode {code}"))?;

    let output_path = output.unwrap_or_else(|| default_image_path(&label));
    let written = std::fs::write(&output_path, &rendered.png);
    if written.is_ok() {
        println!("\x1b[32m+ Barcode image: {}\x1b[0m", output_path.display());
    }

    let outcome = store
        .insert(code.as_str(), &label, &rendered.to_data_uri())
        .context("Failed to save barcode")?;

    if outcome == InsertOutcome::Inserted {
        println!("\x1b[2mSaved to history as '{}'\x1b[0m", label);
    }

    written.with_context(|| format!("Failed to write image to {}", output_path.display()))?;

    Ok(outcome)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    use crate::notify::{NoticeBoard, MSG_DUPLICATE};
    use crate::render::{RenderError, RenderedBarcode};

    struct FakeRenderer;

    impl Renderer for FakeRenderer {
        fn render(&self, _code: &UpcCode) -> Result<RenderedBarcode, RenderError> {
            Ok(RenderedBarcode {
                png: vec![0x89, b'P', b'N', b'G'],
                width: 1,
                height: 1,
            })
        }
    }

    fn setup() -> (TempDir, HistoryStore, Arc<NoticeBoard>) {
        let tmp_dir = TempDir::new().unwrap();
        let board = Arc::new(NoticeBoard::new());
        let store = HistoryStore::open(tmp_dir.path().join("barcodes.json"), Box::new(Arc::clone(&board)));
        (tmp_dir, store, board)
    }

    #[test]
    fn test_generate_saves_image_and_record() {
        let (tmp, store, _) = setup();
        let output = tmp.path().join("out.png");

        let outcome = run(&store, &FakeRenderer, "12345678901", Some("first".into()), Some(output.clone())).unwrap();

        assert_eq!(outcome, InsertOutcome::Inserted);
        assert_eq!(std::fs::read(&output).unwrap(), vec![0x89, b'P', b'N', b'G']);

        let records = store.load();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "first");
        assert_eq!(records[0].image, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_generate_default_label() {
        let (tmp, store, _) = setup();

        run(&store, &FakeRenderer, "12345678901", Some("  ".into()), Some(tmp.path().join("a.png"))).unwrap();

        assert!(store.load()[0].label.starts_with("barcode_"));
    }

    #[test]
    fn test_generate_duplicate_still_writes_image() {
        let (tmp, store, board) = setup();
        run(&store, &FakeRenderer, "12345678901", Some("first".into()), Some(tmp.path().join("a.png"))).unwrap();

        let second = tmp.path().join("b.png");
        let outcome = run(&store, &FakeRenderer, "12345678901", Some("other".into()), Some(second.clone())).unwrap();

        assert_eq!(outcome, InsertOutcome::Duplicate);
        assert!(second.exists());
        assert_eq!(board.current().unwrap().message, MSG_DUPLICATE);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_generate_records_barcode_when_image_write_fails() {
        let (tmp, store, _) = setup();
        let output = tmp.path().join("missing-dir").join("a.png");

        let err = run(&store, &FakeRenderer, "12345678901", Some("Shelf A/B".into()), Some(output)).unwrap_err();

        assert!(err.to_string().starts_with("Failed to write image"));
        let records = store.load();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "Shelf A/B");
    }

    #[test]
    fn test_generate_rejects_invalid_number() {
        let (tmp, store, _) = setup();

        let err = run(&store, &FakeRenderer, "1234", None, Some(tmp.path().join("a.png"))).unwrap_err();

        assert_eq!(err.to_string(), MSG_INVALID_CODE);
        assert!(!tmp.path().join("a.png").exists());
        assert!(!store.path().exists());
    }
}
