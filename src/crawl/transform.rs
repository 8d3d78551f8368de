//! Backend result → caller record mapping.

use serde::{Deserialize, Serialize};

use crate::upstream::BackendResult;

/// One page as OpenWebUI expects it from a web loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProxyRecord {
    pub page_content: String,
    pub metadata: RecordMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordMetadata {
    /// The URL exactly as the caller sent it.
    pub source: String,
}

/// Keep only the markdown; everything else the backend returned is dropped.
pub fn to_record(url: &str, result: BackendResult) -> ProxyRecord {
    ProxyRecord {
        page_content: result.markdown_or_empty(),
        metadata: RecordMetadata {
            source: url.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_record() {
        let record = to_record(
            "https://a.example",
            BackendResult {
                markdown: Some("# Title".into()),
            },
        );

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"page_content": "# Title", "metadata": {"source": "https://a.example"}})
        );
    }

    #[test]
    fn test_missing_markdown_is_empty() {
        let record = to_record("https://a.example", BackendResult::default());
        assert_eq!(record.page_content, "");
        assert_eq!(record.metadata.source, "https://a.example");
    }
}
