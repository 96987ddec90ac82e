use crate::{
    error::ErrorTree,
    node::{ValidateNode, VisitableNode},
};

///
/// Visitor
/// Depth-first traversal over descriptor nodes. Route segments are pushed
/// as the traversal descends so issues can be keyed by path.
///

pub trait Visitor {
    fn visit<N: ValidateNode>(&mut self, node: &N);

    fn push(&mut self, _segment: &str) {}
    fn pop(&mut self) {}
}

///
/// ValidateVisitor
/// Collects every node's validation failures under the node's route.
///

#[derive(Debug, Default)]
pub struct ValidateVisitor {
    pub errors: ErrorTree,
    route: Vec<String>,
}

impl ValidateVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a whole node tree and return the aggregated result.
    pub fn check<N: VisitableNode>(node: &N) -> Result<(), ErrorTree> {
        let mut visitor = Self::new();
        node.accept(&mut visitor);

        visitor.errors.result()
    }

    fn current_route(&self) -> String {
        let segments: Vec<&str> = self
            .route
            .iter()
            .filter(|segment| !segment.is_empty())
            .map(String::as_str)
            .collect();

        segments.join(".")
    }
}

impl Visitor for ValidateVisitor {
    fn visit<N: ValidateNode>(&mut self, node: &N) {
        if let Err(errs) = node.validate() {
            self.errors.merge_at(&self.current_route(), errs);
        }
    }

    fn push(&mut self, segment: &str) {
        self.route.push(segment.to_string());
    }

    fn pop(&mut self) {
        self.route.pop();
    }
}
