//! FFGZ REST API client helpers.
//!
//! Every call takes the `/api` base (see [`crate::BusinessConfig::api_url`]).
//! Failures carry a fixed, user-facing message per operation plus the
//! transport or status detail for the log.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::http::{Client, RequestBuilder, Response};
use crate::model::{
    BulkDeleteRequest, CreatedResponse, DataPayload, DataRow, DeletedResponse, LogEntry,
    OkResponse, TypePayload, TypeRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    ListTypes,
    CreateType,
    UpdateType,
    DeleteTypes,
    ListData,
    CreateData,
    DeleteData,
    ListLogs,
}

impl ApiOperation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::ListTypes => "Failed to load type list",
            Self::CreateType => "Failed to create type",
            Self::UpdateType => "Failed to update type",
            Self::DeleteTypes => "Failed to delete types",
            Self::ListData => "Failed to load data rows",
            Self::CreateData => "Failed to create data row",
            Self::DeleteData => "Failed to delete data rows",
            Self::ListLogs => "Failed to load activity log",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", operation.failure_message())]
pub struct ApiError {
    pub operation: ApiOperation,
    pub detail: String,
}

impl ApiError {
    fn new(operation: ApiOperation, detail: impl Into<String>) -> Self {
        Self {
            operation,
            detail: detail.into(),
        }
    }

    /// Message suitable for a notification.
    pub fn message(&self) -> &'static str {
        self.operation.failure_message()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

async fn call<T: DeserializeOwned>(operation: ApiOperation, request: RequestBuilder) -> ApiResult<T> {
    let url = request.url().to_owned();
    let response: Response = request
        .send()
        .await
        .map_err(|e| ApiError::new(operation, e.to_string()))?;

    if !response.is_success() {
        return Err(ApiError::new(
            operation,
            format!(
                "{url} returned status {}: {}",
                response.status,
                response.text().trim()
            ),
        ));
    }

    response
        .json()
        .map_err(|e| ApiError::new(operation, format!("{url}: unexpected body: {e}")))
}

fn with_json<B: serde::Serialize>(
    operation: ApiOperation,
    request: RequestBuilder,
    body: &B,
) -> ApiResult<RequestBuilder> {
    request
        .json(body)
        .map_err(|e| ApiError::new(operation, e.to_string()))
}

fn query_url(api_url: &str, resource: &str, keyword: &str) -> String {
    format!(
        "{api_url}/{resource}?q={}",
        urlencoding::encode(keyword.trim())
    )
}

/// GET `/types?q=<keyword>`
pub async fn list_types(api_url: &str, keyword: &str) -> ApiResult<Vec<TypeRecord>> {
    let op = ApiOperation::ListTypes;
    call(op, Client::get(query_url(api_url, "types", keyword))).await
}

/// POST `/types`
pub async fn create_type(api_url: &str, payload: &TypePayload) -> ApiResult<CreatedResponse> {
    let op = ApiOperation::CreateType;
    let request = with_json(op, Client::post(format!("{api_url}/types")), payload)?;
    call(op, request).await
}

/// PUT `/types/{id}`
pub async fn update_type(api_url: &str, id: i64, payload: &TypePayload) -> ApiResult<OkResponse> {
    let op = ApiOperation::UpdateType;
    let request = with_json(op, Client::put(format!("{api_url}/types/{id}")), payload)?;
    call(op, request).await
}

/// POST `/types/bulk_delete` with `{ids}`
pub async fn bulk_delete_types(api_url: &str, ids: &[i64]) -> ApiResult<DeletedResponse> {
    let op = ApiOperation::DeleteTypes;
    let body = BulkDeleteRequest { ids: ids.to_vec() };
    let request = with_json(op, Client::post(format!("{api_url}/types/bulk_delete")), &body)?;
    call(op, request).await
}

/// GET `/data?q=<keyword>`
pub async fn list_data(api_url: &str, keyword: &str) -> ApiResult<Vec<DataRow>> {
    let op = ApiOperation::ListData;
    call(op, Client::get(query_url(api_url, "data", keyword))).await
}

/// POST `/data`
pub async fn create_data(api_url: &str, payload: &DataPayload) -> ApiResult<CreatedResponse> {
    let op = ApiOperation::CreateData;
    let request = with_json(op, Client::post(format!("{api_url}/data")), payload)?;
    call(op, request).await
}

/// POST `/data/bulk_delete` with `{ids}`
pub async fn bulk_delete_data(api_url: &str, ids: &[i64]) -> ApiResult<DeletedResponse> {
    let op = ApiOperation::DeleteData;
    let body = BulkDeleteRequest { ids: ids.to_vec() };
    let request = with_json(op, Client::post(format!("{api_url}/data/bulk_delete")), &body)?;
    call(op, request).await
}

/// GET `/logs`
pub async fn list_logs(api_url: &str) -> ApiResult<Vec<LogEntry>> {
    call(ApiOperation::ListLogs, Client::get(format!("{api_url}/logs"))).await
}
