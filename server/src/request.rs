pub use self::{cart::*, order::*, session::*};

mod cart;
mod order;
mod session;

use error_stack::Report;
use kernel::KernelError;

/// Fails with `Validation` when `value` is empty after trimming.
pub(crate) fn require_filled(field: &str, value: String) -> Result<String, Report<KernelError>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("`{field}` must not be blank")));
    }
    Ok(trimmed.to_string())
}
