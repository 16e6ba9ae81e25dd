use lambda_http::{
    http::{Method, StatusCode},
    tracing, Error, IntoResponse, Request, RequestPayloadExt, Response,
};
use shared::core::{CreateRecordRequest, IdGenerator, RecordService, RecordStore};
use shared::utils::{error_response, json_response};

const RECORDS_PATH: &str = "/records";
const RECORD_PREFIX: &str = "/records/";

pub(crate) async fn function_handler<S: RecordStore, G: IdGenerator>(
    service: &RecordService<S, G>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received event: {:?}", event);

    // Paths are matched case-insensitively; the id segment keeps its case.
    let path = event.uri().path().to_lowercase();
    if path == RECORDS_PATH {
        return match *event.method() {
            Method::GET => list_records(service).await,
            Method::POST => create_record(service, &event).await,
            _ => unhandled_method(&event),
        };
    }
    if path.starts_with(RECORD_PREFIX) {
        return match *event.method() {
            Method::GET => get_record(service, &event).await,
            _ => unhandled_method(&event),
        };
    }
    unhandled_path(&event)
}

async fn list_records<S: RecordStore, G: IdGenerator>(
    service: &RecordService<S, G>,
) -> Result<Response<String>, Error> {
    match service.list_records().await {
        Ok(records) => json_response(&StatusCode::OK, &records),
        Err(e) => {
            tracing::error!("Failed to list records: {:?}", e);
            error_response(&StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", &e)
        }
    }
}

async fn create_record<S: RecordStore, G: IdGenerator>(
    service: &RecordService<S, G>,
    event: &Request,
) -> Result<Response<String>, Error> {
    let request = match event.payload::<CreateRecordRequest>() {
        Ok(Some(request)) if request.is_valid() => request,
        _ => {
            return error_response(
                &StatusCode::BAD_REQUEST,
                "Invalid request",
                "Request body is invalid. Please see the documentation.",
            )
        }
    };

    match service.create_record(request).await {
        Ok(record) => json_response(&StatusCode::OK, &record),
        Err(e) => {
            tracing::error!("Failed to store record: {:?}", e);
            error_response(&StatusCode::INTERNAL_SERVER_ERROR, "Unable to store new record", &e)
        }
    }
}

async fn get_record<S: RecordStore, G: IdGenerator>(
    service: &RecordService<S, G>,
    event: &Request,
) -> Result<Response<String>, Error> {
    let path = event.uri().path();
    // Plain prefix strip, matching the routing rule above.
    let record_id = path.replacen(RECORD_PREFIX, "", 1);

    match service.get_record(&record_id).await {
        Ok(Some(record)) => json_response(&StatusCode::OK, &record),
        Ok(None) => error_response(
            &StatusCode::NOT_FOUND,
            "Not found",
            &format!("{} does not exist", path),
        ),
        Err(e) => {
            tracing::error!("Failed to get record {}: {:?}", record_id, e);
            error_response(&StatusCode::INTERNAL_SERVER_ERROR, "Unable to get record", &e)
        }
    }
}

fn unhandled_method(event: &Request) -> Result<Response<String>, Error> {
    error_response(
        &StatusCode::NOT_FOUND,
        &format!(
            "{} method is not supported for {} path",
            event.method(),
            event.uri().path()
        ),
        "Try again",
    )
}

fn unhandled_path(event: &Request) -> Result<Response<String>, Error> {
    error_response(
        &StatusCode::NOT_FOUND,
        &format!("Invalid path {}", event.uri().path()),
        "Try valid paths",
    )
}
