//! Barcode rendering: UPC-A symbol to PNG and data URI.

mod data_uri;
mod upc;

pub use data_uri::{decode_data_uri, encode_png_data_uri};
pub use upc::{encode_modules, RenderedBarcode, Renderer, RenderError, UpcRenderer};
