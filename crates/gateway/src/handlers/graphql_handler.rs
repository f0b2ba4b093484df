//! GraphQL endpoint handlers.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{rejection::GraphQLRejection, GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use tracing::{debug, warn};

use common::{AppError, AppResult};

use crate::graphql::tag_request_errors;
use crate::state::AppState;

/// Execute a GraphQL request against the user schema.
///
/// A body that is not a GraphQL request never reaches the schema; it is
/// answered with a `BAD_REQUEST` error body.
pub async fn graphql_handler(
    State(state): State<AppState>,
    req: Result<GraphQLRequest, GraphQLRejection>,
) -> AppResult<GraphQLResponse> {
    let request = req
        .map_err(|rejection| {
            warn!("Rejected GraphQL request body: {}", rejection.0);
            AppError::bad_request(format!("malformed GraphQL request: {}", rejection.0))
        })?
        .into_inner();
    debug!(operation = ?request.operation_name, "Executing GraphQL request");

    let response = state.schema.execute(request).await;
    Ok(tag_request_errors(response).into())
}

/// Serve the GraphiQL explorer.
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Any method on `/graphql` other than the served ones.
pub async fn graphql_method_fallback() -> AppError {
    AppError::bad_request("GraphQL requests must be sent with POST")
}
