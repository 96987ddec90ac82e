use crate::{base::validator::Validator, visitor::VisitorContext};
use widgetry_schema::validate::css;

///
/// CssLength
/// Accepts `<number><unit>` strings, unitless zero, and `auto`.
///

pub struct CssLength;

impl Validator<str> for CssLength {
    fn validate(&self, s: &str, ctx: &mut dyn VisitorContext) {
        if let Err(e) = css::validate_length(s) {
            ctx.issue(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visitor::Issues;

    #[test]
    fn flags_unitless_values() {
        let mut issues = Issues::new();
        CssLength.validate("40", &mut issues);

        let issues = issues.into_inner();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("no recognised CSS unit"), "got: {}", issues[0]);
    }

    #[test]
    fn passes_manifest_defaults() {
        for length in ["40px", "14px", "4px"] {
            let mut issues = Issues::new();
            CssLength.validate(length, &mut issues);
            assert!(issues.is_empty(), "'{length}' should pass");
        }
    }
}
