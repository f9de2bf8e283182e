use medgloss_types::TermRecord;
use serde_json::{Map, Value};

use crate::FormatError;

/// Pull the JSON object out of raw model text.
///
/// Scans from the first `{` to the last `}` and parses that slice. Anything
/// before or after, such as prose or code fences, is ignored.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, FormatError> {
    let (Some(first), Some(last)) = (text.find('{'), text.rfind('}')) else {
        return Err(FormatError::NoJson);
    };
    if last <= first {
        return Err(FormatError::NoJson);
    }

    match serde_json::from_str::<Value>(&text[first..=last]) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(FormatError::NoJson),
        Err(e) => Err(FormatError::InvalidJson(e)),
    }
}

/// Parse model output, trying the whole payload first and falling back to
/// brace scanning.
pub fn parse_model_output(text: &str) -> Result<Map<String, Value>, FormatError> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text.trim()) {
        return Ok(map);
    }
    extract_json_object(text)
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Keep the four expected keys, defaulting missing or non-string values.
/// `term` falls back to the query the user typed.
pub fn normalize_record(object: &Map<String, Value>, query: &str) -> TermRecord {
    TermRecord {
        term: string_field(object, "term").unwrap_or_else(|| query.to_string()),
        pronunciation: string_field(object, "pronunciation_ar").unwrap_or_default(),
        meaning: string_field(object, "meaning_ar").unwrap_or_default(),
        definition: string_field(object, "definition_ar").unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_object_inside_prose() {
        let text = r#"Sure! Here it is:
```json
{"term":"Osteomyelitis","pronunciation_ar":"أوستيوميلايتس","meaning_ar":"التهاب العظم","definition_ar":"عدوى بكتيرية في العظم"}
```
Hope that helps."#;

        let object = extract_json_object(text).unwrap();
        let record = normalize_record(&object, "osteomyelitis");

        assert_eq!(record.term, "Osteomyelitis");
        assert_eq!(record.pronunciation, "أوستيوميلايتس");
        assert_eq!(record.meaning, "التهاب العظم");
        assert_eq!(record.definition, "عدوى بكتيرية في العظم");
    }

    #[test]
    fn missing_braces_is_a_parse_error() {
        assert!(matches!(
            extract_json_object("no json here"),
            Err(FormatError::NoJson)
        ));
        assert!(matches!(
            extract_json_object("only an opening {"),
            Err(FormatError::NoJson)
        ));
        assert!(matches!(
            extract_json_object("closing } before opening {"),
            Err(FormatError::NoJson)
        ));
        assert!(matches!(extract_json_object(""), Err(FormatError::NoJson)));
    }

    #[test]
    fn malformed_slice_is_a_parse_error() {
        let err = extract_json_object(r#"{"term": "Osteo", }"#).unwrap_err();
        assert!(matches!(err, FormatError::InvalidJson(_)));
    }

    #[test]
    fn defaults_for_missing_and_non_string_fields() {
        let object = extract_json_object(
            r#"{"pronunciation_ar": 42, "meaning_ar": null, "definition_ar": ["a"], "extra": "x"}"#,
        )
        .unwrap();
        let record = normalize_record(&object, "Nephritis");

        assert_eq!(
            record,
            TermRecord {
                term: "Nephritis".to_string(),
                pronunciation: String::new(),
                meaning: String::new(),
                definition: String::new(),
            }
        );
    }

    #[test]
    fn empty_term_falls_back_to_query() {
        let object = extract_json_object(r#"{"term": ""}"#).unwrap();
        assert_eq!(normalize_record(&object, "Nephritis").term, "Nephritis");
    }

    #[test]
    fn whole_payload_is_preferred() {
        let object = parse_model_output(r#"  {"term":"Anemia","meaning_ar":"فقر الدم"}  "#).unwrap();
        assert_eq!(normalize_record(&object, "anemia").meaning, "فقر الدم");
    }

    #[test]
    fn falls_back_to_brace_scan() {
        let object = parse_model_output("Result: {\"term\":\"Anemia\"} done").unwrap();
        assert_eq!(normalize_record(&object, "anemia").term, "Anemia");

        assert!(matches!(
            parse_model_output("I cannot help with that."),
            Err(FormatError::NoJson)
        ));
    }
}
