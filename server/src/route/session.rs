use application::service::{LoginService, LogoutService, RegisterService, UpdateProfileService};
use application::state::DependOnSessionContext;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{LoginRequest, RegisterRequest, SessionTransformer, UpdateProfileRequest};
use crate::response::SessionPresenter;

pub trait SessionRouter {
    fn route_session(self) -> Self;
}

impl SessionRouter for Router<AppModule> {
    fn route_session(self) -> Self {
        self.route(
            "/session/login",
            post(
                |State(handler): State<AppModule>, Json(req): Json<LoginRequest>| async move {
                    Controller::new(SessionTransformer, SessionPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| handler.login(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/session/register",
            post(
                |State(handler): State<AppModule>, Json(req): Json<RegisterRequest>| async move {
                    Controller::new(SessionTransformer, SessionPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| handler.register(dto))
                        .await
                        .map(|res| (StatusCode::CREATED, res))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/session",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), SessionPresenter)
                    .bypass(|| handler.session_context().require())
                    .await
                    .map_err(ErrorStatus::from)
            })
            .patch(
                |State(handler): State<AppModule>, Json(req): Json<UpdateProfileRequest>| async move {
                    Controller::new(SessionTransformer, SessionPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| handler.update_profile(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(|State(handler): State<AppModule>| async move {
                Controller::new((), SessionPresenter)
                    .bypass(|| handler.logout())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
