use crate::{base::validator::Validator, visitor::VisitorContext};
use widgetry_schema::validate::css;

///
/// CssColor
/// Accepts hex, `rgb()`/`rgba()`, and named color strings.
///

pub struct CssColor;

impl Validator<str> for CssColor {
    fn validate(&self, s: &str, ctx: &mut dyn VisitorContext) {
        if let Err(e) = css::validate_color(s) {
            ctx.issue(e);
        }
    }
}
