//! Certificate template personalization.

use crate::config::{PLACEHOLDER_INSTRUCTOR_NAME, PLACEHOLDER_USER_NAME};

/// Who a certificate is for and who signs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRequest {
    pub email: String,
    pub instructor_name: String,
}

/// SVG certificate template carrying the name placeholders.
#[derive(Debug, Clone)]
pub struct CertificateTemplate {
    markup: String,
}

impl CertificateTemplate {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Substitute the first occurrence of each placeholder.
    ///
    /// Values are inserted verbatim, without XML escaping. A missing
    /// placeholder leaves the markup unchanged.
    pub fn personalize(&self, user_name: &str, instructor_name: &str) -> String {
        self.markup
            .replacen(PLACEHOLDER_USER_NAME, user_name, 1)
            .replacen(PLACEHOLDER_INSTRUCTOR_NAME, instructor_name, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personalize_replaces_both_placeholders() {
        let template = CertificateTemplate::new(
            "<svg><text>{{USER_NAME}}</text><text>{{INSTRUCTOR_NAME}}</text></svg>",
        );

        let svg = template.personalize("Alice Example", "Dr. Bob");

        assert_eq!(
            svg,
            "<svg><text>Alice Example</text><text>Dr. Bob</text></svg>"
        );
    }

    #[test]
    fn test_only_first_occurrence_is_replaced() {
        let template = CertificateTemplate::new("{{USER_NAME}} and {{USER_NAME}}");

        assert_eq!(template.personalize("A", "B"), "A and {{USER_NAME}}");
    }

    #[test]
    fn test_missing_placeholders_are_a_no_op() {
        let template = CertificateTemplate::new("<svg/>");

        assert_eq!(template.personalize("A", "B"), "<svg/>");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let template = CertificateTemplate::new("<text>{{USER_NAME}}</text>");

        assert_eq!(
            template.personalize("<b>&</b>", ""),
            "<text><b>&</b></text>"
        );
    }

    #[test]
    fn test_user_value_containing_instructor_token() {
        // Substitution is sequential, so a user name that contains the
        // instructor token is consumed by the second pass.
        let template = CertificateTemplate::new("{{USER_NAME}}|{{INSTRUCTOR_NAME}}");

        assert_eq!(
            template.personalize("{{INSTRUCTOR_NAME}}", "Dr. X"),
            "Dr. X|{{INSTRUCTOR_NAME}}"
        );
    }
}
