use std::future::Future;

use error_stack::Report;
use kernel::prelude::entity::{Cart, Identity, Money, Order};
use kernel::KernelError;
use tokio::sync::RwLock;

/// What a caller renders while an operation runs: a loading flag and the
/// message of the last failure. Both are reset when an operation starts.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Progress {
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct ProgressTracker(RwLock<Progress>);

impl ProgressTracker {
    pub async fn snapshot(&self) -> Progress {
        self.0.read().await.clone()
    }

    pub async fn track<T, F>(&self, operation: F) -> error_stack::Result<T, KernelError>
    where
        F: Future<Output = error_stack::Result<T, KernelError>> + Send,
        T: Send,
    {
        *self.0.write().await = Progress {
            loading: true,
            error: None,
        };
        let result = operation.await;
        let mut progress = self.0.write().await;
        progress.loading = false;
        if let Err(report) = &result {
            progress.error = Some(report.current_context().to_string());
        }
        result
    }

    pub(crate) async fn fail(&self, report: &Report<KernelError>) {
        self.0.write().await.error = Some(report.current_context().to_string());
    }
}

/// The active identity, if any. At most one at a time.
#[derive(Debug, Default)]
pub struct SessionContext {
    identity: RwLock<Option<Identity>>,
    progress: ProgressTracker,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Option<Identity> {
        self.identity.read().await.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.identity.read().await.is_some()
    }

    pub async fn require(&self) -> error_stack::Result<Identity, KernelError> {
        self.current().await.ok_or_else(|| {
            Report::new(KernelError::NotAuthenticated).attach_printable("no active session")
        })
    }

    pub(crate) async fn replace(&self, identity: Option<Identity>) {
        *self.identity.write().await = identity;
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }
}

/// In-memory view of the active identity's cart.
#[derive(Debug, Default)]
pub struct CartState {
    cart: RwLock<Option<Cart>>,
    progress: ProgressTracker,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn view(&self) -> Option<Cart> {
        self.cart.read().await.clone()
    }

    pub async fn total_amount(&self) -> Money {
        self.cart
            .read()
            .await
            .as_ref()
            .map(Cart::total_amount)
            .unwrap_or_else(Money::zero)
    }

    pub async fn total_item_count(&self) -> u64 {
        self.cart
            .read()
            .await
            .as_ref()
            .map(Cart::total_item_count)
            .unwrap_or_default()
    }

    pub(crate) async fn replace(&self, cart: Option<Cart>) {
        *self.cart.write().await = cart;
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }
}

#[derive(Debug, Default)]
pub struct OrderState {
    orders: RwLock<Vec<Order>>,
    current: RwLock<Option<Order>>,
    progress: ProgressTracker,
}

impl OrderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.orders.read().await.clone()
    }

    pub async fn current_order(&self) -> Option<Order> {
        self.current.read().await.clone()
    }

    pub(crate) async fn replace_orders(&self, orders: Vec<Order>) {
        *self.orders.write().await = orders;
    }

    pub(crate) async fn replace_current(&self, order: Option<Order>) {
        *self.current.write().await = order;
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }
}

pub trait DependOnSessionContext: 'static + Sync + Send {
    fn session_context(&self) -> &SessionContext;
}

pub trait DependOnCartState: 'static + Sync + Send {
    fn cart_state(&self) -> &CartState;
}

pub trait DependOnOrderState: 'static + Sync + Send {
    fn order_state(&self) -> &OrderState;
}

#[cfg(test)]
mod test {
    use error_stack::Report;
    use kernel::KernelError;

    use crate::state::{Progress, ProgressTracker};

    #[tokio::test]
    async fn failure_message_survives_until_next_operation() {
        let tracker = ProgressTracker::default();
        let _ = tracker
            .track(async { Err::<(), _>(Report::new(KernelError::EmptyCart)) })
            .await;
        let progress = tracker.snapshot().await;
        assert!(!progress.loading);
        assert_eq!(progress.error, Some(KernelError::EmptyCart.to_string()));

        tracker.track(async { Ok(()) }).await.unwrap();
        assert_eq!(tracker.snapshot().await, Progress::default());
    }
}
