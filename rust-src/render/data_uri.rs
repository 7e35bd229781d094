//! `data:` URI encoding for rendered images.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::RenderError;


const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";


/// Wrap PNG bytes into a `data:image/png;base64,` URI.
pub fn encode_png_data_uri(png: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URI_PREFIX, BASE64.encode(png))
}


/// Recover the raw bytes of a base64 `data:` URI.
///
/// Any media type is accepted as long as the payload is base64.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, RenderError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| RenderError::DataUri("missing data: scheme".to_string()))?;

    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| RenderError::DataUri("missing payload separator".to_string()))?;

    if !meta.ends_with(";base64") {
        return Err(RenderError::DataUri(format!("unsupported encoding: {meta}")));
    }

    Ok(BASE64.decode(payload.trim())?)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_prefix() {
        let uri = encode_png_data_uri(&[0x89, b'P', b'N', b'G']);
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_decode() {
        let bytes = decode_data_uri("data:image/png;base64,iVBORw==").unwrap();
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_decode_rejects_non_data_uri() {
        assert!(matches!(decode_data_uri("https://example.com/a.png"), Err(RenderError::DataUri(_))));
        assert!(matches!(decode_data_uri("data:image/png;base64"), Err(RenderError::DataUri(_))));
        assert!(matches!(decode_data_uri("data:text/plain,hello"), Err(RenderError::DataUri(_))));
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(matches!(decode_data_uri("data:image/png;base64,@@@"), Err(RenderError::Base64(_))));
    }
}
