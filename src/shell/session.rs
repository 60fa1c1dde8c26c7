// Builds the ClientSession of a request from its headers and the client's
// test-mode marker.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;
use tracing::warn;
use uuid::Uuid;

use crate::modules::access::core::role::Identity;
use crate::modules::catalog::adapters::outbound::local_overrides::is_test_mode;
use crate::modules::catalog::core::aggregate::CatalogMode;
use crate::shared::core::session::ClientSession;
use crate::shell::state::AppState;

pub const CLIENT_ID_HEADER: &str = "x-client-id";
pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_EMAIL_HEADER: &str = "x-user-email";
pub const EPHEMERAL_CLIENT_PREFIX: &str = "ephemeral-";

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl FromRequestParts<AppState> for ClientSession {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(client_id) = header(parts, CLIENT_ID_HEADER).map(str::to_string) else {
            let mut session =
                ClientSession::ephemeral(format!("{EPHEMERAL_CLIENT_PREFIX}{}", Uuid::now_v7()));
            session.identity = request_identity(parts);
            return Ok(session);
        };

        let test_mode = match is_test_mode(state.local_store.as_ref(), &client_id).await {
            Ok(marked) => marked,
            Err(error) => {
                warn!(%error, %client_id, "test-mode marker unreadable, using normal mode");
                false
            }
        };

        let identity = if test_mode && state.allow_mock_identity {
            Some(Identity::mock_admin())
        } else {
            request_identity(parts)
        };

        Ok(ClientSession {
            client_id,
            mode: if test_mode {
                CatalogMode::Draft
            } else {
                CatalogMode::Normal
            },
            identity,
            ephemeral: false,
        })
    }
}

fn request_identity(parts: &Parts) -> Option<Identity> {
    header(parts, USER_ID_HEADER)
        .map(|uid| Identity::new(uid, header(parts, USER_EMAIL_HEADER).unwrap_or_default()))
}
