use crate::{base::validator::Validator, visitor::VisitorContext};

/// ISO 3166-1 alpha-2 codes the platform's phone widgets support.
/// Consumers must reject codes outside this set or map them to their own
/// unknown-country fallback.
pub const SUPPORTED_COUNTRY_CODES: &[&str] = &[
    "de", "dk", "es", "fi", "fr", "gb", "is", "it", "no", "se", "us",
];

///
/// IsoCountry
/// Accepts lowercase ISO 3166-1 alpha-2 codes from the supported set.
///

pub struct IsoCountry;

impl Validator<str> for IsoCountry {
    fn validate(&self, s: &str, ctx: &mut dyn VisitorContext) {
        if s.len() != 2 || !s.chars().all(|c| c.is_ascii_lowercase()) {
            ctx.issue(format!(
                "country code '{s}' must be a lowercase ISO 3166-1 alpha-2 code"
            ));
            return;
        }

        if !SUPPORTED_COUNTRY_CODES.contains(&s) {
            ctx.issue(format!("country code '{s}' is not supported"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::Issues;

    #[test]
    fn accepts_every_supported_code() {
        for code in SUPPORTED_COUNTRY_CODES {
            let mut issues = Issues::new();
            IsoCountry.validate(code, &mut issues);
            assert!(issues.is_empty(), "'{code}' should pass");
        }
    }

    #[test]
    fn rejects_shape_and_membership_failures() {
        for code in ["", "FI", "fin", "xx"] {
            let mut issues = Issues::new();
            IsoCountry.validate(code, &mut issues);
            assert!(!issues.is_empty(), "'{code}' should be rejected");
        }
    }
}
