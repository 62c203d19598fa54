//! Version information endpoint handler.

use crate::{build_info, models::VersionResponse};
use actix_web::{web, Result};
use paperclip::actix::api_v2_operation;

#[api_v2_operation(
    summary = "Version Information Endpoint",
    description = "Returns the current API version, commit hash, and build time.",
    tags("Version"),
    responses(
        (status = 200, description = "Successful response", body = VersionResponse)
    )
)]
pub async fn version() -> Result<web::Json<VersionResponse>> {
    Ok(web::Json(VersionResponse {
        version: build_info::version().to_string(),
        commit: build_info::commit().to_string(),
        build_time: build_info::build_time().to_string(),
    }))
}
