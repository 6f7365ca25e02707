use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    File,
    Summary,
}

impl Match {
    pub fn kind(&self) -> MatchKind {
        if self.file.is_some() {
            MatchKind::File
        } else {
            MatchKind::Summary
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub keyword: String,
    #[serde(default)]
    pub matches: Vec<Match>,
}

/// Body of `POST /analyze/v2`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub pr: String,
    pub force: &'static str,
    #[serde(rename = "repoName")]
    pub repo_name: Option<String>,
}

impl SearchRequest {
    pub fn new(keyword: impl Into<String>, repo_name: Option<&str>) -> Self {
        Self {
            pr: keyword.into(),
            force: "false",
            repo_name: repo_name.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_repo_serializes_null() {
        let request = SearchRequest::new("BCCD_SIC_DESIGNATION_ID", None);
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"pr":"BCCD_SIC_DESIGNATION_ID","force":"false","repoName":null}"#
        );
    }

    #[test]
    fn request_with_repo() {
        let request = SearchRequest::new("PARTNER_ID", Some("partner-portal-api"));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["repoName"], "partner-portal-api");
        assert_eq!(value["force"], "false");
    }

    #[test]
    fn decodes_both_match_shapes() {
        let body = r#"{
            "keyword": "X",
            "matches": [
                {"file": "src/a.ts", "repo": "r1", "code": "let a;", "explanation": "E"},
                {"repo": "r2", "summary": "S"}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.keyword, "X");
        assert_eq!(response.matches.len(), 2);
        assert_eq!(response.matches[0].kind(), MatchKind::File);
        assert_eq!(response.matches[0].code.as_deref(), Some("let a;"));
        assert_eq!(response.matches[1].kind(), MatchKind::Summary);
        assert_eq!(response.matches[1].summary.as_deref(), Some("S"));
    }

    #[test]
    fn file_match_without_code_is_still_a_file_match() {
        let m: Match = serde_json::from_str(r#"{"file": "a.sql", "repo": "r"}"#).unwrap();
        assert_eq!(m.kind(), MatchKind::File);
        assert!(m.code.is_none());
    }

    #[test]
    fn ignores_reserved_fields() {
        let body = r#"{"keyword": "X", "matches": [], "DevDescriptionSummary": "unused"}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(response.matches.is_empty());
    }

    #[test]
    fn missing_matches_defaults_to_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"keyword": "X"}"#).unwrap();
        assert!(response.matches.is_empty());
    }
}
