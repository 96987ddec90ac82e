use crate::{
    base::validator::{
        Validator,
        text::{CssColor, CssLength},
    },
    visitor::{Issues, VisitorContext},
};
use widgetry_schema::{
    node::{Property, Value},
    types::PropertyType,
};

///
/// Resolution
/// Outcome of resolving a bindable property's live value. `fell_back`
/// is set when a supplied value was rejected and the declared default
/// was used instead.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution<'a> {
    pub value: &'a Value,
    pub fell_back: bool,
    pub issues: Vec<String>,
}

/// Resolve the live value for a property under the binding contract: an
/// absent bound value yields the declared default, and an invalid one
/// falls back to it rather than propagating downstream.
#[must_use]
pub fn resolve<'a>(property: &'a Property, bound: Option<&'a Value>) -> Resolution<'a> {
    let Some(bound) = bound else {
        return Resolution {
            value: &property.default_value,
            fell_back: false,
            issues: Vec::new(),
        };
    };

    let issues = check(property, bound);
    if issues.is_empty() {
        return Resolution {
            value: bound,
            fell_back: false,
            issues,
        };
    }

    log::warn!(
        "bound value for '{}' rejected, falling back to default: {}",
        property.key,
        issues.join("; "),
    );

    Resolution {
        value: &property.default_value,
        fell_back: true,
        issues,
    }
}

/// Collect every reason a bound value cannot stand in for the property.
#[must_use]
pub fn check(property: &Property, bound: &Value) -> Vec<String> {
    let mut issues = Issues::new();

    if !property.bindable {
        issues.issue(format!("'{}' is not bindable", property.key));
        return issues.into_inner();
    }

    let expected = property.ty.expected_runtime_type();
    let found = bound.runtime_type();
    if found != expected {
        issues.issue(format!("expected {expected}, found {found}"));
        return issues.into_inner();
    }

    if let Some(text) = bound.as_text() {
        match property.ty {
            PropertyType::Length => CssLength.validate(text, &mut issues),
            PropertyType::Color => CssColor.validate(text, &mut issues),
            PropertyType::TextSelect => {
                if let Some(options) = &property.options {
                    if !options.contains_value(text) {
                        issues.issue(format!("'{text}' is not one of the declared options"));
                    }
                }
            }
            PropertyType::Text | PropertyType::OnOff => {}
        }
    }

    issues.into_inner()
}
