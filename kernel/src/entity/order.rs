mod delivery;
mod id;
mod item;
mod status;

pub use self::{delivery::*, id::*, item::*, status::*};
use crate::entity::{Cart, CreatedAt, IdentityId, Money, StoreId, UpdatedAt};
use crate::KernelError;
use destructure::{Destructure, Mutation};
use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    user_id: IdentityId,
    store_id: StoreId,
    items: Vec<OrderItem>,
    total_amount: Money,
    status: OrderStatus,
    #[serde(flatten)]
    delivery: Delivery,
    created_at: CreatedAt<Order>,
    updated_at: UpdatedAt<Order>,
}

impl Order {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: OrderId,
        user_id: IdentityId,
        store_id: StoreId,
        items: Vec<OrderItem>,
        total_amount: Money,
        status: OrderStatus,
        delivery: Delivery,
        created_at: CreatedAt<Order>,
        updated_at: UpdatedAt<Order>,
    ) -> Self {
        Self {
            id,
            user_id,
            store_id,
            items,
            total_amount,
            status,
            delivery,
            created_at,
            updated_at,
        }
    }

    /// Freezes the cart into a pending order. The store is taken from the first line;
    /// carts spanning several stores are not split.
    pub fn place(
        id: OrderId,
        cart: &Cart,
        delivery: Delivery,
    ) -> error_stack::Result<Self, KernelError> {
        let store_id = cart
            .lines()
            .first()
            .map(|line| *line.store_id())
            .ok_or_else(|| Report::new(KernelError::EmptyCart))?;
        let items = cart.lines().iter().map(OrderItem::freeze).collect();
        let created_at = CreatedAt::now();
        let updated_at = UpdatedAt::from(&created_at);
        Ok(Self::new(
            id,
            *cart.owner(),
            store_id,
            items,
            cart.total_amount(),
            OrderStatus::Pending,
            delivery,
            created_at,
            updated_at,
        ))
    }

    pub fn transit(&mut self, transition: StatusTransition) -> error_stack::Result<(), KernelError> {
        let next = self.status.next(transition)?;
        self.substitute(|order| {
            *order.status = next;
            *order.updated_at = UpdatedAt::now();
        });
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::entity::{
        Book, BookAuthor, BookCover, BookId, BookTitle, Cart, Delivery, IdentityId, Money, Order,
        OrderId, OrderStatus, Quantity, StatusTransition, StoreId,
    };
    use crate::KernelError;

    fn delivery() -> Delivery {
        Delivery::new("1 Main St", "010-12345678", "Reader", "alipay")
    }

    fn cart_with(store: i64) -> Cart {
        let mut cart = Cart::empty(IdentityId::new(Uuid::new_v4()));
        let book = Book::new(
            BookId::new(1),
            BookTitle::new("Three Body"),
            BookAuthor::new("Liu Cixin"),
            Money::new(Decimal::new(598, 1)),
            BookCover::new("https://example.com/1.png"),
            StoreId::new(store),
        );
        cart.add(&book, Quantity::parse(3).unwrap());
        cart
    }

    #[test]
    fn place_snapshots_the_cart() {
        let cart = cart_with(7);
        let order = Order::place(OrderId::new(Uuid::new_v4()), &cart, delivery()).unwrap();

        assert_eq!(order.items().len(), 1);
        assert_eq!(*order.total_amount(), cart.total_amount());
        assert_eq!(*order.store_id(), StoreId::new(7));
        assert_eq!(order.user_id(), cart.owner());
        assert_eq!(*order.status(), OrderStatus::Pending);
        assert_eq!(*order.items()[0].subtotal(), Money::new(Decimal::new(1794, 1)));
    }

    #[test]
    fn place_rejects_empty_cart() {
        let cart = Cart::empty(IdentityId::new(Uuid::new_v4()));
        let report = Order::place(OrderId::new(Uuid::new_v4()), &cart, delivery()).unwrap_err();
        assert_eq!(*report.current_context(), KernelError::EmptyCart);
    }

    #[test]
    fn cancelled_order_stays_cancelled() {
        let mut order = Order::place(OrderId::new(Uuid::new_v4()), &cart_with(1), delivery()).unwrap();
        order.transit(StatusTransition::Cancel).unwrap();
        assert_eq!(*order.status(), OrderStatus::Cancelled);

        for transition in [
            StatusTransition::Pay,
            StatusTransition::Ship,
            StatusTransition::ConfirmReceived,
        ] {
            let report = order.transit(transition).unwrap_err();
            assert_eq!(*report.current_context(), KernelError::InvalidStatus);
            assert_eq!(*order.status(), OrderStatus::Cancelled);
        }
    }

    #[test]
    fn serialized_order_keeps_delivery_fields_flat() {
        let order = Order::place(OrderId::new(Uuid::new_v4()), &cart_with(1), delivery()).unwrap();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["contactPhone"], "010-12345678");
        assert_eq!(json["status"], "pending");

        let restored: Order = serde_json::from_value(json).unwrap();
        assert_eq!(restored, order);
    }
}
