//! JSON-encoded string lists stored in text columns.
//!
//! Room types keep `amenities` and `photo_urls` as JSON arrays in a single
//! column. Reads are lenient: a NULL, blank or malformed value decodes to an
//! empty list instead of failing the row.

/// Decode a stored JSON array of strings.
pub fn decode(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Vec::new();
    };

    serde_json::from_str::<Vec<String>>(raw).unwrap_or_default()
}

/// Encode a list for storage. Blank entries are dropped, the rest are trimmed
/// and de-duplicated preserving first occurrence.
pub fn encode<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned: Vec<String> = Vec::new();
    for item in items {
        let item = item.as_ref().trim();
        if item.is_empty() || cleaned.iter().any(|existing| existing == item) {
            continue;
        }
        cleaned.push(item.to_string());
    }

    // Serializing a Vec<String> cannot fail.
    serde_json::to_string(&cleaned).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_tolerates_missing_and_malformed_values() {
        assert!(decode(None).is_empty());
        assert!(decode(Some("   ")).is_empty());
        assert!(decode(Some("{not json")).is_empty());
        assert!(decode(Some("{\"a\":1}")).is_empty());
    }

    #[test]
    fn decode_reads_string_arrays() {
        assert_eq!(
            decode(Some(r#"["WiFi", "TV"]"#)),
            vec!["WiFi".to_string(), "TV".to_string()]
        );
    }

    #[test]
    fn encode_trims_and_deduplicates() {
        let encoded = encode(["  WiFi ", "", "TV", "WiFi"]);
        assert_eq!(encoded, r#"["WiFi","TV"]"#);
        assert_eq!(encode(Vec::<String>::new()), "[]");
    }
}
