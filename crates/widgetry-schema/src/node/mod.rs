mod event;
mod hints;
mod locale;
mod property;
mod registry;
mod value;
mod widget;

pub use event::*;
pub use hints::*;
pub use locale::*;
pub use property::*;
pub use registry::*;
pub use value::*;
pub use widget::*;

use crate::{error::ErrorTree, visit::Visitor};
use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("widget '{0}' is already registered")]
    DuplicateWidget(String),

    #[error("widget '{0}' was not found in the registry")]
    WidgetNotFound(String),
}

///
/// ValidateNode
/// Local structural invariants for a single node. Cross-node rules live
/// in the registry-wide validation passes.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// VisitableNode
///

pub trait VisitableNode: ValidateNode {
    /// Route segment this node contributes to issue paths.
    fn route_key(&self) -> String {
        String::new()
    }

    /// Drive the visitor into child nodes.
    fn drive<V: Visitor>(&self, _v: &mut V) {}

    fn accept<V: Visitor>(&self, v: &mut V)
    where
        Self: Sized,
    {
        v.push(&self.route_key());
        v.visit(self);
        self.drive(v);
        v.pop();
    }
}
