//! JSON rendering for parsed `pdfinfo` output.

use crate::error::{Error, Result};
use crate::model::PdfInfo;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
///
/// The output has two top-level objects, `Properties` and `Pages`.
pub fn to_json(info: &PdfInfo, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(info),
        JsonFormat::Compact => serde_json::to_string(info),
    };

    result.map_err(|e| Error::Json(format!("serialization error: {}", e)))
}

/// Read a document back from its JSON representation.
pub fn from_json(json: &str) -> Result<PdfInfo> {
    serde_json::from_str(json).map_err(|e| Error::Json(format!("deserialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> PdfInfo {
        let mut info = PdfInfo::new();
        info.record_property("Producer", "pdfTeX-1.40.25");
        info.record_property("File size", "1024 bytes");
        info.record_page_attribute("1", "size", "612 x 792 pts (letter)");
        info.record_page_attribute("1", "rot", "0");
        info
    }

    #[test]
    fn test_to_json_shape() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            json!({
                "Properties": {
                    "File size": "1024 bytes",
                    "Producer": "pdfTeX-1.40.25"
                },
                "Pages": {
                    "1": {
                        "rot": "0",
                        "size": "612 x 792 pts (letter)"
                    }
                }
            })
        );
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"Properties\""));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&PdfInfo::new(), JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"Properties":{},"Pages":{}}"#);
    }

    #[test]
    fn test_round_trip() {
        let info = sample();
        let json = to_json(&info, JsonFormat::Pretty).unwrap();
        assert_eq!(from_json(&json).unwrap(), info);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = from_json(r#"{"Properties": []}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
