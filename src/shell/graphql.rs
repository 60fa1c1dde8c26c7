use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::catalog::use_cases::browse_projects::inbound::graphql::BrowseProjectsQuery;
use crate::modules::catalog::use_cases::get_project::inbound::graphql::GetProjectQuery;
use crate::modules::catalog::use_cases::record_view::inbound::graphql::RecordViewMutation;
use crate::shared::core::session::ClientSession;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(BrowseProjectsQuery, GetProjectQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(RecordViewMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Executes a GraphQL request with the caller's session attached.
pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    session: ClientSession,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(session)).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
