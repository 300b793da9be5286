use std::fmt;

use crate::NonEmptyStaticStr;

/// Name of a native operation, used to attribute failures at the boundary.
///
/// Operation names are string literals checked non-empty at compile time:
///
/// ```
/// use strand_types::OperationName;
///
/// const MAKE_INT: OperationName = OperationName::new("MakeIntOK");
/// assert_eq!(MAKE_INT.as_str(), "MakeIntOK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationName(NonEmptyStaticStr);

impl OperationName {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(NonEmptyStaticStr::new(name))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0.as_str()
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for OperationName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
