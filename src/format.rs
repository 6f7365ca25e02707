// Idempotent: text without escape sequences only gets trimmed.
pub fn format_code(raw: &str) -> String {
    raw.replace("\\n", "\n")
        .replace("\\t", "  ")
        .replace("\\\"", "\"")
        .replace("\\'", "'")
        .trim()
        .to_string()
}
