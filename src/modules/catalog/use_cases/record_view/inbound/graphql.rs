use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shared::core::session::ClientSession;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecordViewMutation;

#[Object]
impl RecordViewMutation {
    async fn record_view(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let session = context
            .data_opt::<ClientSession>()
            .cloned()
            .unwrap_or_default();
        state
            .record_view
            .handle(&session, &id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
