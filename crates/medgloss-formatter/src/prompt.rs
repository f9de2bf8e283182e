/// Instruction sent to the model for one term
pub fn build_prompt(query: &str) -> String {
    format!(
        "You are a medical terminology formatter.

Return ONLY valid JSON with exactly these keys:
term (string),
pronunciation_ar (string in Arabic letters),
meaning_ar (string),
definition_ar (string, short Arabic definition, no extra talk)

Rules:
- Keep definition_ar brief, factual, and medical if relevant.
- If the term is not medical, still follow the same format.
- Do not include bullet points.
- Do not include any extra keys.

User term: {query}"
    )
}

/// JSON schema matching the prompt, for providers that enforce it
pub fn term_schema() -> serde_json::Value {
    let string = serde_json::json!({ "type": "string" });
    serde_json::json!({
        "type": "object",
        "properties": {
            "term": string,
            "pronunciation_ar": string,
            "meaning_ar": string,
            "definition_ar": string,
        },
        "required": ["term", "pronunciation_ar", "meaning_ar", "definition_ar"],
        "additionalProperties": false,
    })
}
