use crate::Flags;
use crate::error::FlagsError;
use axum::Json;
use axum::extract::{Path, Query, State};
use nshop_domain::config::FlagMap;
use nshop_domain::constants::FLAGS_TAG;
use nshop_kernel::server::ApiState;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub(crate) struct ClientQuery {
    /// Client identifier; omitted or unknown ids get the default table.
    client_id: Option<String>,
}

/// Every flag resolved for a client
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FlagsResponse {
    client_id: Option<String>,
    #[schema(value_type = Object)]
    flags: FlagMap,
}

/// One flag resolved for a client
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FlagResponse {
    feature: String,
    enabled: bool,
}

#[utoipa::path(
    get,
    path = "/api/flags",
    params(ClientQuery),
    responses((status = OK, description = "Resolved flag table", body = FlagsResponse)),
    tag = FLAGS_TAG,
)]
pub(crate) async fn list_flags(
    State(state): State<ApiState>,
    Query(query): Query<ClientQuery>,
) -> Result<Json<FlagsResponse>, FlagsError> {
    let flags = state.try_get_slice::<Flags>()?;
    let table = flags.registry.table_for(query.client_id.as_deref());

    Ok(Json(FlagsResponse { client_id: query.client_id, flags: table.as_map().clone() }))
}

#[utoipa::path(
    get,
    path = "/api/flags/{feature}",
    params(("feature" = String, Path, description = "Feature name"), ClientQuery),
    responses((status = OK, description = "Resolved flag", body = FlagResponse)),
    tag = FLAGS_TAG,
)]
pub(crate) async fn get_flag(
    State(state): State<ApiState>,
    Path(feature): Path<String>,
    Query(query): Query<ClientQuery>,
) -> Result<Json<FlagResponse>, FlagsError> {
    let flags = state.try_get_slice::<Flags>()?;
    let enabled = flags.registry.is_enabled(query.client_id.as_deref(), &feature);

    Ok(Json(FlagResponse { feature, enabled }))
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(list_flags)).routes(routes!(get_flag))
}
