use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::{
    Avatar, CreatedAt, DestructIdentity, Email, Identity, IdentityId, Role, UserName,
};
use serde::Serialize;

use crate::controller::Exhaust;

/// Identity as shown to clients. The credential never leaves the server.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    id: IdentityId,
    username: UserName,
    email: Email,
    role: Role,
    avatar: Avatar,
    created_at: CreatedAt<Identity>,
}

impl IntoResponse for IdentityResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

impl From<Identity> for IdentityResponse {
    fn from(value: Identity) -> Self {
        let DestructIdentity {
            id,
            username,
            email,
            role,
            avatar,
            created_at,
            ..
        } = value.into_destruct();
        Self {
            id,
            username,
            email,
            role,
            avatar,
            created_at,
        }
    }
}

pub struct SessionPresenter;

impl Exhaust<Identity> for SessionPresenter {
    type To = IdentityResponse;
    fn emit(&self, input: Identity) -> Self::To {
        IdentityResponse::from(input)
    }
}

impl Exhaust<()> for SessionPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}
