use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    NotAuthenticated,
    Authentication,
    InvalidCredential,
    DuplicateIdentity,
    EmptyCart,
    OrderNotFound,
    NotFound,
    InvalidStatus,
    Validation,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::NotAuthenticated => write!(f, "Not logged in"),
            KernelError::Authentication => write!(f, "No such user"),
            KernelError::InvalidCredential => write!(f, "Wrong password"),
            KernelError::DuplicateIdentity => write!(f, "Email is already registered"),
            KernelError::EmptyCart => write!(f, "Cart is empty"),
            KernelError::OrderNotFound => write!(f, "Order not found"),
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::InvalidStatus => write!(f, "Order status does not allow this operation"),
            KernelError::Validation => write!(f, "Invalid input"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
