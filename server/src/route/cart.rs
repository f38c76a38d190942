use application::service::{
    AddCartItemService, ClearCartService, FetchCartService, RemoveCartItemService,
    UpdateCartQuantityService,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use uuid::Uuid;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    AddCartItemRequest, CartTransformer, RemoveCartItemRequest, UpdateCartQuantityRequest,
};
use crate::response::{CartPresenter, CartResponse};

pub trait CartRouter {
    fn route_cart(self) -> Self;
}

impl CartRouter for Router<AppModule> {
    fn route_cart(self) -> Self {
        self.route(
            "/cart",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), CartPresenter)
                    .bypass(|| handler.fetch_cart())
                    .await
                    .map_err(ErrorStatus::from)
                    .map(|res| {
                        res.map(CartResponse::into_response)
                            .unwrap_or_else(|| StatusCode::UNAUTHORIZED.into_response())
                    })
            })
            .post(
                |State(handler): State<AppModule>, Json(req): Json<AddCartItemRequest>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| handler.add_item(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(|State(handler): State<AppModule>| async move {
                Controller::new((), CartPresenter)
                    .bypass(|| handler.clear_cart())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/cart/:line_id",
            put(
                |State(handler): State<AppModule>,
                 Path(line_id): Path<Uuid>,
                 Json(req): Json<UpdateCartQuantityRequest>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .try_intake((line_id, req))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| handler.update_quantity(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(handler): State<AppModule>, Path(line_id): Path<Uuid>| async move {
                    Controller::new(CartTransformer, CartPresenter)
                        .intake(RemoveCartItemRequest::new(line_id))
                        .handle(|dto| handler.remove_item(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
