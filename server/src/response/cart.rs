use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{Cart, CartLine, DestructCart, IdentityId, Money};
use serde::Serialize;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    owner: IdentityId,
    lines: Vec<CartLine>,
    total_amount: Money,
    total_item_count: u64,
}

impl IntoResponse for CartResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

impl From<Cart> for CartResponse {
    fn from(value: Cart) -> Self {
        let total_amount = value.total_amount();
        let total_item_count = value.total_item_count();
        let DestructCart { owner, lines } = value.into_destruct();
        Self {
            owner,
            lines,
            total_amount,
            total_item_count,
        }
    }
}

pub struct CartPresenter;

impl Exhaust<Cart> for CartPresenter {
    type To = CartResponse;
    fn emit(&self, input: Cart) -> Self::To {
        CartResponse::from(input)
    }
}

impl Exhaust<Option<Cart>> for CartPresenter {
    type To = Option<CartResponse>;
    fn emit(&self, input: Option<Cart>) -> Self::To {
        input.map(CartResponse::from)
    }
}
