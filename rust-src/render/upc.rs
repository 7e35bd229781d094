//! UPC-A symbol layout and rasterization.

use thiserror::Error;
use tracing::debug;

use crate::models::UpcCode;

use super::encode_png_data_uri;


// Layout, in pixels
const MODULE_WIDTH: u32 = 2;
const BAR_HEIGHT: u32 = 100;
const GUARD_EXTENSION: u32 = 10;
const MARGIN: u32 = 10;
const FONT_SIZE: u32 = 20;
const TEXT_MARGIN: u32 = 2;

const BAR_COLOR: &str = "#000000";
const BACKGROUND_COLOR: &str = "#FFFFFF";

/// Total modules in a UPC-A symbol.
const SYMBOL_MODULES: usize = 95;

const START_END_GUARD: &str = "101";
const CENTER_GUARD: &str = "01010";

/// Left-hand (odd parity) digit patterns; right-hand patterns are the complement.
const L_CODES: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011",
    "0110001", "0101111", "0111011", "0110111", "0001011",
];


/// Rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to parse barcode SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("failed to allocate {0}x{1} pixmap")]
    Pixmap(u32, u32),

    #[error("failed to encode PNG: {0}")]
    Png(String),

    #[error("invalid data URI: {0}")]
    DataUri(String),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}


/// A rendered barcode image.
#[derive(Debug, Clone)]
pub struct RenderedBarcode {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RenderedBarcode {
    /// Image payload as stored in the history.
    pub fn to_data_uri(&self) -> String {
        encode_png_data_uri(&self.png)
    }
}


/// Turns a barcode number into an image.
pub trait Renderer {
    fn render(&self, code: &UpcCode) -> Result<RenderedBarcode, RenderError>;
}


/// Black-on-white UPC-A renderer with the digits printed below the bars.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpcRenderer;

impl Renderer for UpcRenderer {
    fn render(&self, code: &UpcCode) -> Result<RenderedBarcode, RenderError> {
        let svg_content = generate_svg(code);

        let mut options = resvg::usvg::Options::default();
        options.fontdb_mut().load_system_fonts();

        let tree = resvg::usvg::Tree::from_str(&svg_content, &options)?;

        let size = tree.size();
        let width = size.width().ceil() as u32;
        let height = size.height().ceil() as u32;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::Pixmap(width, height))?;
        pixmap.fill(tiny_skia::Color::WHITE);

        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        let png = pixmap
            .encode_png()
            .map_err(|e| RenderError::Png(e.to_string()))?;

        debug!(code = %code, width, height, bytes = png.len(), "rendered barcode");

        Ok(RenderedBarcode { png, width, height })
    }
}


/// Encode the 12 digits into the 95 module pattern (`true` is a bar).
pub fn encode_modules(code: &UpcCode) -> Vec<bool> {
    let digits = code.full_digits();
    let mut pattern = String::with_capacity(SYMBOL_MODULES);

    pattern.push_str(START_END_GUARD);
    for &d in &digits[..6] {
        pattern.push_str(L_CODES[d as usize]);
    }
    pattern.push_str(CENTER_GUARD);
    for &d in &digits[6..] {
        // R-code is the bitwise complement of the L-code
        pattern.extend(L_CODES[d as usize].chars().map(|c| if c == '1' { '0' } else { '1' }));
    }
    pattern.push_str(START_END_GUARD);

    pattern.chars().map(|c| c == '1').collect()
}


/// Whether a module index belongs to one of the three guard patterns.
fn is_guard(index: usize) -> bool {
    index < 3 || (45..50).contains(&index) || index >= SYMBOL_MODULES - 3
}


/// Generate SVG content for the symbol.
fn generate_svg(code: &UpcCode) -> String {
    let modules = encode_modules(code);
    let width = MARGIN * 2 + SYMBOL_MODULES as u32 * MODULE_WIDTH;
    let height = MARGIN * 2 + BAR_HEIGHT + TEXT_MARGIN + FONT_SIZE;

    let mut svg_parts = vec![
        format!(r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#, width, height),
        format!(r#"<rect width="{}" height="{}" fill="{}"/>"#, width, height, BACKGROUND_COLOR),
    ];

    // Merge adjacent dark modules into one rect
    let mut index = 0;
    while index < modules.len() {
        if !modules[index] {
            index += 1;
            continue;
        }

        let start = index;
        while index < modules.len() && modules[index] && is_guard(index) == is_guard(start) {
            index += 1;
        }

        let bar_height = if is_guard(start) { BAR_HEIGHT + GUARD_EXTENSION } else { BAR_HEIGHT };
        svg_parts.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            MARGIN + start as u32 * MODULE_WIDTH,
            MARGIN,
            (index - start) as u32 * MODULE_WIDTH,
            bar_height,
            BAR_COLOR
        ));
    }

    let text: String = code.full_digits().iter().map(|d| char::from(b'0' + d)).collect();
    svg_parts.push(format!(
        r#"<text x="{}" y="{}" font-family="monospace" font-size="{}" text-anchor="middle" fill="{}">{}</text>"#,
        width / 2,
        MARGIN + BAR_HEIGHT + TEXT_MARGIN + FONT_SIZE,
        FONT_SIZE,
        BAR_COLOR,
        text
    ));

    svg_parts.push("</svg>".to_string());

    svg_parts.join("\n")
}
