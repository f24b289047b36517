use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::header,
    response::{IntoResponse, Response},
};
use tokio::task;

use reportinghub_core::merge::UploadedFile;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Merges the uploaded workbooks into one and streams it back.
///
/// Every field carrying a filename is treated as an upload; the `names`
/// field carries the raw naming configuration. Field order is preserved.
pub async fn merge_workbooks(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Response> {
    let mut multipart = multipart.map_err(|_| {
        ApiError::InvalidContentType("Send files as multipart/form-data.".to_string())
    })?;

    let mut files: Vec<UploadedFile> = Vec::new();
    let mut names: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
        let is_names = field.name() == Some("names");
        if let Some(file_name) = field.file_name() {
            // A filename makes it an upload, whatever the field is called.
            let file_name = file_name.to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(invalid_multipart)?.to_vec();
            files.push(UploadedFile {
                file_name,
                content_type,
                bytes,
            });
        } else if is_names {
            let text = field.text().await.map_err(invalid_multipart)?;
            // First value wins when the field is repeated.
            if names.is_none() {
                names = Some(text);
            }
        }
    }

    // The merge is CPU-bound and may chew through hundreds of megabytes;
    // keep it off the async reactor.
    let service = state.merge_service.clone();
    let merged = task::spawn_blocking(move || service.merge(&files, names.as_deref()))
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))??;

    let headers = [
        (header::CONTENT_TYPE, merged.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", merged.file_name),
        ),
    ];
    Ok((headers, merged.bytes).into_response())
}

fn invalid_multipart(err: MultipartError) -> ApiError {
    ApiError::InvalidMultipart(format!("Invalid multipart/form-data payload: {}", err))
}
