//! Built-in checks.

pub mod fully_qualified_image;

pub use fully_qualified_image::FullyQualifiedImageCheck;

use crate::check::Check;

/// All built-in check instances, in registration order.
pub fn builtin_checks() -> Vec<Box<dyn Check>> {
    vec![Box::new(FullyQualifiedImageCheck)]
}
