pub mod intl;
pub mod text;

use crate::visitor::VisitorContext;

///
/// Validator
///
/// Checks a bound runtime value against a property's declared shape,
/// reporting problems through the context rather than failing fast.
///

pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T, ctx: &mut dyn VisitorContext);
}
