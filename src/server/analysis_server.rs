use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use warp::http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, RETRY_AFTER};
use warp::http::{Method, StatusCode};
use warp::hyper::body::Bytes;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};
use crate::enums::analysis_kind::AnalysisKind;
use crate::errors::{CodeQualityError, CodeQualityResult};
use crate::services::analysis_service::AnalysisService;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analyze_payload::AnalyzePayload;
use crate::structs::config::server_config::ServerConfig;

pub struct AnalysisServer {
    service: Arc<AnalysisService>,
    addr: SocketAddr,
}

impl AnalysisServer {
    pub fn new(service: Arc<AnalysisService>, server_config: &ServerConfig) -> CodeQualityResult<Self> {
        let addr = format!("{}:{}", server_config.host, server_config.port)
            .parse::<SocketAddr>()
            .map_err(|e| CodeQualityError::config_error(
                &format!("invalid listen address {}:{} ({})", server_config.host, server_config.port, e),
                Some("server.host"),
                Some("Use an IP address such as 127.0.0.1 or 0.0.0.0"),
            ))?;

        Ok(Self { service, addr })
    }

    /// Serves until Ctrl-C.
    pub async fn run(self) -> CodeQualityResult<()> {
        let (addr, server) = warp::serve(routes(self.service))
            .try_bind_with_graceful_shutdown(self.addr, async {
                tokio::signal::ctrl_c().await.ok();
                log::info!("🛑 Shutting down analysis server...");
            })
            .map_err(|e| CodeQualityError::system_error("bind HTTP listener", &e.to_string()))?;

        log::info!("🌐 Analysis server listening on http://{}", addr);
        server.await;
        log::info!("✅ Analysis server shutdown complete");

        Ok(())
    }
}

/// Full HTTP surface: `/api/{kind}`, `/health`, and a JSON 404 for the rest.
pub fn routes(service: Arc<AnalysisService>) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let service_filter = warp::any().map(move || Arc::clone(&service));

    let health = warp::path!("health")
        .and(warp::get())
        .map(|| with_cors(warp::reply::json(&json!({ "status": "ok" }))));

    let analyze = warp::path!("api" / String)
        .and(warp::method())
        .and(warp::body::bytes())
        .and(service_filter)
        .and_then(analysis_handler);

    health
        .or(analyze)
        .recover(handle_rejection)
}

async fn analysis_handler(
    kind: String,
    method: Method,
    body: Bytes,
    service: Arc<AnalysisService>,
) -> Result<Response, Infallible> {
    let Some(kind) = AnalysisKind::from_slug(&kind) else {
        return Ok(json_reply(
            StatusCode::NOT_FOUND,
            &json!({ "message": format!("Unknown analysis kind '{}'", kind) }),
        ));
    };

    if method == Method::OPTIONS {
        return Ok(with_cors(StatusCode::OK));
    }

    if method != Method::POST {
        return Ok(json_reply(
            StatusCode::METHOD_NOT_ALLOWED,
            &json!({ "message": format!("Method {} not allowed, use POST", method) }),
        ));
    }

    let request = match parse_request(kind, &body) {
        Ok(request) => request,
        Err(e) => return Ok(error_reply(&e)),
    };

    let request_id = uuid::Uuid::new_v4();
    log::info!(
        "📥 [{}] {} analysis requested ({}, {} bytes of code)",
        request_id, kind, request.language, request.source_code.len()
    );

    match service.analyze(&request).await {
        Ok(outcome) => {
            log::info!(
                "📤 [{}] {} analysis done (cached: {}, fallback: {})",
                request_id, kind, outcome.cached, outcome.fallback
            );
            Ok(json_reply(StatusCode::OK, &outcome))
        }
        Err(e) => {
            log::warn!("📤 [{}] {} analysis failed: {}", request_id, kind, e);
            Ok(error_reply(&e))
        }
    }
}

/// Body → request. Missing, empty or non-string `code` / `language` are
/// request-shape errors.
pub fn parse_request(kind: AnalysisKind, body: &[u8]) -> CodeQualityResult<AnalysisRequest> {
    let payload: AnalyzePayload = serde_json::from_slice(body).map_err(|e| {
        CodeQualityError::validation_error("body", "", &format!("must be a JSON object ({})", e), None)
    })?;

    let code = payload.code.filter(|code| !code.trim().is_empty());
    let language = payload.language.filter(|language| !language.trim().is_empty());

    match (code, language) {
        (Some(code), Some(language)) => {
            let request = AnalysisRequest::new(code, language.trim(), kind);
            Ok(match payload.config {
                Some(overrides) => request.with_overrides(overrides),
                None => request,
            })
        }
        (None, _) => Err(CodeQualityError::validation_error("code", "", "is required", Some("Send { \"code\": \"...\", \"language\": \"...\" }"))),
        (_, None) => Err(CodeQualityError::validation_error("language", "", "is required", Some("Send { \"code\": \"...\", \"language\": \"...\" }"))),
    }
}

fn error_reply(error: &CodeQualityError) -> Response {
    let status = StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    match error {
        CodeQualityError::RateLimited { retry_after_secs, .. } => {
            let mut response = json_reply(status, &json!({
                "message": error.user_message(),
                "error": error.error_code(),
                "retryAfter": retry_after_secs,
            }));
            response.headers_mut().insert(RETRY_AFTER, HeaderValue::from(*retry_after_secs));
            response
        }
        CodeQualityError::ValidationError { field, constraint, .. } => {
            json_reply(status, &json!({ "message": format!("'{}' {}", field, constraint) }))
        }
        _ => json_reply(status, &json!({
            "message": error.user_message(),
            "error": error.error_code(),
        })),
    }
}

async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    log::warn!("⚠️ Request rejected: {:?}", rejection);

    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else {
        (StatusCode::BAD_REQUEST, "Unreadable request body")
    };

    Ok(json_reply(status, &json!({ "message": message })))
}

fn json_reply<T: serde::Serialize>(status: StatusCode, body: &T) -> Response {
    with_cors(warp::reply::with_status(warp::reply::json(body), status))
}

fn with_cors(reply: impl Reply) -> Response {
    let mut response = reply.into_response();
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST, OPTIONS"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type"));
    response
}
