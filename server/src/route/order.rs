use application::service::{
    CreateOrderService, DeleteOrderService, GetOrderService, ListMyOrdersService,
    ListOrdersService, TransitOrderService,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use error_stack::Report;
use kernel::KernelError;
use uuid::Uuid;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateOrderRequest, DeleteOrderRequest, GetOrderRequest, GetStoreOrdersRequest,
    GetUserOrdersRequest, OrderTransformer,
};
use crate::response::OrderPresenter;

pub trait OrderRouter {
    fn route_order(self) -> Self;
}

impl OrderRouter for Router<AppModule> {
    fn route_order(self) -> Self {
        self.route(
            "/orders",
            post(
                |State(handler): State<AppModule>, Json(req): Json<CreateOrderRequest>| async move {
                    Controller::new(OrderTransformer, OrderPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| handler.create_order(dto))
                        .await
                        .map(|res| (StatusCode::CREATED, res))
                        .map_err(ErrorStatus::from)
                },
            )
            .get(|State(handler): State<AppModule>| async move {
                Controller::new((), OrderPresenter)
                    .bypass(|| handler.list_mine())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/orders/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(OrderTransformer, OrderPresenter)
                        .intake(GetOrderRequest::new(id))
                        .handle(|dto| handler.get_order(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(OrderTransformer, OrderPresenter)
                        .intake(DeleteOrderRequest::new(id))
                        .handle(|dto| handler.delete_order(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/orders/:id/pay",
            post(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new((), OrderPresenter)
                        .bypass(|| handler.pay(id))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/orders/:id/ship",
            post(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new((), OrderPresenter)
                        .bypass(|| handler.ship(id))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/orders/:id/receive",
            post(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new((), OrderPresenter)
                        .bypass(|| handler.confirm_received(id))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/orders/:id/cancel",
            post(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new((), OrderPresenter)
                        .bypass(|| handler.cancel(id))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users/:id/orders",
            get(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(OrderTransformer, OrderPresenter)
                        .intake(GetUserOrdersRequest::new(id))
                        .handle(|dto| async move {
                            Ok::<_, Report<KernelError>>(handler.list_for_user(dto).await)
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/stores/:id/orders",
            get(
                |State(handler): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(OrderTransformer, OrderPresenter)
                        .intake(GetStoreOrdersRequest::new(id))
                        .handle(|dto| async move {
                            Ok::<_, Report<KernelError>>(handler.list_for_store(dto).await)
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
