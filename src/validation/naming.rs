use crate::error::Result;
use regex::{Regex, RegexBuilder};

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Suffix a model reference is expected to carry after the operation id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSuffix {
    Request,
    Response,
}

impl ModelSuffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSuffix::Request => "Request",
            ModelSuffix::Response => "Response",
        }
    }
}

/// Matches model references against `#/definitions/<OperationId><Suffix>`.
///
/// Both patterns are compiled once per operation and shared by every
/// parameter and response of that operation.
#[derive(Debug, Clone)]
pub struct NamingMatcher {
    canonical: String,
    request: Regex,
    response: Regex,
}

impl NamingMatcher {
    pub fn new(operation_id: &str) -> Result<Self> {
        let canonical = title_case(operation_id);
        let request = build_pattern(&canonical, ModelSuffix::Request)?;
        let response = build_pattern(&canonical, ModelSuffix::Response)?;

        Ok(Self {
            canonical,
            request,
            response,
        })
    }

    /// Title-cased operation id the patterns are built from
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Whether `reference` starts with the expected model name
    pub fn matches(&self, reference: &str, suffix: ModelSuffix) -> bool {
        match suffix {
            ModelSuffix::Request => self.request.is_match(reference),
            ModelSuffix::Response => self.response.is_match(reference),
        }
    }
}

fn build_pattern(canonical: &str, suffix: ModelSuffix) -> Result<Regex> {
    let pattern = format!(
        "^{}{}{}",
        regex::escape(DEFINITIONS_PREFIX),
        regex::escape(canonical),
        suffix.as_str()
    );

    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

/// Title-case the first letter of every word.
///
/// Words are split on whitespace and on ASCII punctuation other than `_`;
/// letters and digits (ASCII or not) continue a word. Each letter maps to a
/// single char: letters with no one-char upper-case form are kept as is.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if at_word_start {
            result.push(to_title(c));
        } else {
            result.push(c);
        }
        at_word_start = is_word_separator(c);
    }

    result
}

fn to_title(c: char) -> char {
    match c {
        // Latin digraphs have a dedicated titlecase form
        'Ǆ' | 'ǅ' | 'ǆ' => 'ǅ',
        'Ǉ' | 'ǈ' | 'ǉ' => 'ǈ',
        'Ǌ' | 'ǋ' | 'ǌ' => 'ǋ',
        'Ǳ' | 'ǲ' | 'ǳ' => 'ǲ',
        _ => {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        }
    }
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    !c.is_alphanumeric() && c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("getItems"), "GetItems");
        assert_eq!(title_case("GetItems"), "GetItems");
        assert_eq!(title_case("get items"), "Get Items");
        assert_eq!(title_case("get-items.list"), "Get-Items.List");
        assert_eq!(title_case("get_items"), "Get_items");
        assert_eq!(title_case("émettre"), "Émettre");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_keeps_one_char_per_letter() {
        assert_eq!(title_case("ßuchen"), "ßuchen");
        assert_eq!(title_case("ǆungla"), "ǅungla");
        assert_eq!(title_case("ǉ ǌ"), "ǈ ǋ");

        let matcher = NamingMatcher::new("ßuchen").unwrap();
        assert_eq!(matcher.canonical(), "ßuchen");
        assert!(matcher.matches("#/definitions/ßuchenRequest", ModelSuffix::Request));
    }

    #[test]
    fn test_matches_request_model() {
        let matcher = NamingMatcher::new("postItems").unwrap();

        assert_eq!(matcher.canonical(), "PostItems");
        assert!(matcher.matches("#/definitions/PostItemsRequest", ModelSuffix::Request));
        assert!(matcher.matches("#/definitions/PostItemsRequestV2", ModelSuffix::Request));
        assert!(!matcher.matches("#/definitions/postItems", ModelSuffix::Request));
        assert!(!matcher.matches("#/definitions/PostItemsResponse", ModelSuffix::Request));
    }

    #[test]
    fn test_matches_response_model() {
        let matcher = NamingMatcher::new("getItems").unwrap();

        assert!(matcher.matches("#/definitions/GetItemsResponse", ModelSuffix::Response));
        assert!(!matcher.matches("#/definitions/getItems", ModelSuffix::Response));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let matcher = NamingMatcher::new("getItems").unwrap();

        assert!(matcher.matches("#/definitions/getitemsresponse", ModelSuffix::Response));
        assert!(matcher.matches("#/DEFINITIONS/GETITEMSRESPONSE", ModelSuffix::Response));
    }

    #[test]
    fn test_match_is_anchored() {
        let matcher = NamingMatcher::new("getItems").unwrap();

        assert!(!matcher.matches(
            "other.json#/definitions/GetItemsResponse",
            ModelSuffix::Response
        ));
        assert!(!matcher.matches(" #/definitions/GetItemsResponse", ModelSuffix::Response));
    }

    #[test]
    fn test_metacharacters_in_operation_id_are_literal() {
        let matcher = NamingMatcher::new("get.items(").unwrap();

        assert_eq!(matcher.canonical(), "Get.Items(");
        assert!(matcher.matches("#/definitions/Get.Items(Request", ModelSuffix::Request));
        assert!(!matcher.matches("#/definitions/GetXItems(Request", ModelSuffix::Request));
    }
}
