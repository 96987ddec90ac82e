///
/// VisitorContext
/// Narrow interface exposed to validators for reporting non-fatal issues.
///

pub trait VisitorContext {
    fn issue(&mut self, message: String);
}

///
/// Issues
/// Collecting context used by the binding layer.
///

#[derive(Debug, Default)]
pub struct Issues {
    issues: Vec<String>,
}

impl Issues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.issues
    }
}

impl VisitorContext for Issues {
    fn issue(&mut self, message: String) {
        self.issues.push(message);
    }
}
