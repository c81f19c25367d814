//! API handlers

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::Response;
use bytes::Bytes;

use crate::api::AppState;
use crate::punch::{self, Classification};
use crate::status::IoStatus;

/// Acknowledgment expected after a stored punch or a data-action command
const ACK_RESULT: &str = "result=OK";
/// Default acknowledgment for everything else
const ACK_OK: &str = "OK";

/// cmd_id values whose acknowledgment must be `result=OK` regardless of payload
const DATA_ACTION_COMMANDS: [&str; 2] = ["RTLogSendAction", "RTEnrollDataAction"];

/// Device punch callback
///
/// Terminals in this protocol family expect HTTP 200 with a literal
/// acknowledgment body and a closed connection even when the payload is
/// unusable. Only a failed body read surfaces a transport-level error.
pub async fn punch_callback(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    if parts.method != Method::POST {
        return not_found().await;
    }

    let bytes: Bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, "Failed to read request body");
            return plain_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Error");
        }
    };

    let raw = String::from_utf8_lossy(&bytes);
    let mut reply = ACK_OK;

    match punch::json_fragment(&raw) {
        Some(fragment) => match punch::decode(fragment) {
            Ok(payload) => match payload.classify() {
                Classification::Punch => {
                    let status = IoStatus::from_mode(payload.io_mode).to_string();
                    tracing::info!(
                        user_id = %payload.user_id,
                        io_time = %payload.io_time,
                        %status,
                        "Punch received"
                    );
                    if let Err(err) = state.store.save_punch(&payload, &status).await {
                        tracing::warn!(
                            error = %err,
                            user_id = %payload.user_id,
                            "Store rejected punch"
                        );
                    }
                    reply = ACK_RESULT;
                }
                Classification::Heartbeat => {
                    tracing::info!(device = %payload.fk_name, "Heartbeat");
                }
                Classification::Discard => {
                    tracing::debug!("Payload is neither punch nor heartbeat");
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "Discarding malformed payload");
            }
        },
        None => {
            tracing::debug!("No JSON fragment in request body");
        }
    }

    let cmd_id = parts
        .headers
        .get("cmd_id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if DATA_ACTION_COMMANDS.contains(&cmd_id) {
        reply = ACK_RESULT;
    }

    plain_response(StatusCode::OK, reply)
}

/// Not-found fallback: anything but a POST to the callback path gets an
/// empty 404
pub async fn not_found() -> Response {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::empty())
        .unwrap()
}

fn plain_response(status: StatusCode, body: &'static str) -> Response {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/plain")
        .header(header::CONNECTION, "close")
        .body(Body::from(body))
        .unwrap()
}
