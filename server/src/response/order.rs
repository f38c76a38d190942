use axum::http::StatusCode;
use axum::Json;
use kernel::prelude::entity::Order;

use crate::controller::Exhaust;

pub struct OrderPresenter;

impl Exhaust<Order> for OrderPresenter {
    type To = Json<Order>;
    fn emit(&self, input: Order) -> Self::To {
        Json(input)
    }
}

impl Exhaust<Vec<Order>> for OrderPresenter {
    type To = Json<Vec<Order>>;
    fn emit(&self, input: Vec<Order>) -> Self::To {
        Json(input)
    }
}

impl Exhaust<()> for OrderPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}
