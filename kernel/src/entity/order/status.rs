use std::fmt::{Display, Formatter};

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StatusTransition {
    Pay,
    Ship,
    ConfirmReceived,
    Cancel,
}

impl OrderStatus {
    /// Paying moves a pending order straight to `Shipped`; there is no separate paid hold.
    /// `Cancelled` is terminal for everything except a repeated cancel.
    pub fn next(&self, transition: StatusTransition) -> error_stack::Result<Self, KernelError> {
        match (self, transition) {
            (_, StatusTransition::Cancel) => Ok(OrderStatus::Cancelled),
            (OrderStatus::Pending, StatusTransition::Pay) => Ok(OrderStatus::Shipped),
            (OrderStatus::Cancelled, _) | (_, StatusTransition::Pay) => {
                Err(Report::new(KernelError::InvalidStatus)
                    .attach_printable(format!("cannot {transition:?} an order that is {self}")))
            }
            (_, StatusTransition::Ship) => Ok(OrderStatus::Shipped),
            (_, StatusTransition::ConfirmReceived) => Ok(OrderStatus::Completed),
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Paid => write!(f, "paid"),
            OrderStatus::Shipped => write!(f, "shipped"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{OrderStatus, StatusTransition};
    use crate::KernelError;

    #[test]
    fn pay_only_from_pending() {
        assert_eq!(
            OrderStatus::Pending.next(StatusTransition::Pay).unwrap(),
            OrderStatus::Shipped
        );
        let report = OrderStatus::Shipped.next(StatusTransition::Pay).unwrap_err();
        assert_eq!(*report.current_context(), KernelError::InvalidStatus);
    }

    #[test]
    fn ship_and_confirm_from_live_states() {
        assert_eq!(
            OrderStatus::Pending.next(StatusTransition::Ship).unwrap(),
            OrderStatus::Shipped
        );
        assert_eq!(
            OrderStatus::Pending.next(StatusTransition::ConfirmReceived).unwrap(),
            OrderStatus::Completed
        );
        assert_eq!(
            OrderStatus::Shipped.next(StatusTransition::ConfirmReceived).unwrap(),
            OrderStatus::Completed
        );
    }

    #[test]
    fn cancel_from_any_state() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.next(StatusTransition::Cancel).unwrap(), OrderStatus::Cancelled);
        }
    }
}
