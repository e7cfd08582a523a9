//! HTTP routes.
//!
//! Every handler is a thin translation layer: extract, call the operation,
//! map the result. Domain errors surface as `{error, code}` bodies with the
//! status derived from the error taxonomy.

use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use gumshoe_domain::{CaseId, GameError, NpcId, SessionId};

use crate::api::dto::{
    CaseDto, ChatHistoryDto, ChatRequest, ChatResponseDto, CityViewDto, NpcMessageDto,
    SessionCreatedDto, SessionDto, SummaryDto, SuspectRefDto, SuspectsDto, TravelRequest,
    TravelResponseDto, WarrantDto, WarrantRequest, WarrantResponseDto,
};
use crate::app::App;

pub const SESSION_HEADER: &str = "x-session-id";

/// Create all HTTP routes.
pub fn routes(app: Arc<App>) -> Router {
    let case_routes = Router::new()
        .route("/api/cases", post(create_case))
        .route("/api/cases/{id}", get(get_case))
        .route("/api/cases/{id}/summary", get(get_case_summary))
        .route("/api/cases/{id}/city", get(get_current_city))
        .route("/api/cases/{id}/travel", post(travel))
        .route("/api/cases/{id}/suspects", get(get_suspects))
        .route("/api/cases/{id}/warrant", post(issue_warrant))
        .route("/api/cases/{id}/npcs/{npc_id}/chat", post(chat_with_npc))
        .route_layer(middleware::from_fn_with_state(
            app.clone(),
            require_session,
        ));

    Router::new()
        .route("/api/health", get(health))
        .route("/api/sessions", post(create_session))
        .route(
            "/api/sessions/{id}",
            get(resume_session).delete(delete_session),
        )
        .merge(case_routes)
        .with_state(app)
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Session guard
// =============================================================================

/// Gate on the case namespace: validate the `X-Session-Id` header, reject
/// expired sessions, adopt valid-format unknown tokens.
async fn require_session(State(app): State<Arc<App>>, request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok());
    match app.sessions.authorize(token) {
        Ok(_) => next.run(request).await,
        Err(err) => ApiError(err).into_response(),
    }
}

fn session_from_headers(headers: &HeaderMap) -> Result<SessionId, ApiError> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(SessionId::new)
        .ok_or(ApiError(GameError::MissingSession))
}

// =============================================================================
// Sessions
// =============================================================================

async fn create_session(State(app): State<Arc<App>>) -> Result<Response, ApiError> {
    let session = app.sessions.create()?;
    let id = session.id.to_string();
    Ok((
        StatusCode::CREATED,
        [(header::HeaderName::from_static(SESSION_HEADER), id)],
        Json(SessionCreatedDto::from(session)),
    )
        .into_response())
}

async fn resume_session(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<SessionDto>, ApiError> {
    let session = app.sessions.resume(&SessionId::new(id))?;
    Ok(Json(SessionDto::from(session)))
}

async fn delete_session(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if app.sessions.delete(&SessionId::new(id)) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError(GameError::SessionNotFound))
    }
}

// =============================================================================
// Cases
// =============================================================================

async fn create_case(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let session_id = session_from_headers(&headers)?;
    let case = app.cases.create(&session_id)?;
    Ok((StatusCode::CREATED, Json(CaseDto::from(case))).into_response())
}

async fn get_case(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<CaseDto>, ApiError> {
    let case = app.cases.get(&CaseId::new(id))?;
    Ok(Json(CaseDto::from(case)))
}

async fn get_case_summary(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<SummaryDto>, ApiError> {
    let summary = app.cases.summary(&CaseId::new(id))?;
    Ok(Json(SummaryDto::from(summary)))
}

async fn get_current_city(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<CityViewDto>, ApiError> {
    let view = app.cases.current_city(&CaseId::new(id))?;
    Ok(Json(CityViewDto::from(view)))
}

async fn travel(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TravelResponseDto>, ApiError> {
    // A missing or malformed body is treated as a missing destination.
    let request: TravelRequest = serde_json::from_slice(&body).unwrap_or_default();
    let result = app.cases.travel(&CaseId::new(id), request.city_id)?;
    Ok(Json(TravelResponseDto::from(result)))
}

async fn get_suspects(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<SuspectsDto>, ApiError> {
    let suspects = app.cases.suspects(&CaseId::new(id))?;
    Ok(Json(SuspectsDto { suspects }))
}

async fn issue_warrant(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<WarrantResponseDto>, ApiError> {
    let request: WarrantRequest = serde_json::from_slice(&body).unwrap_or_default();
    let result = app.cases.issue_warrant(&CaseId::new(id), request.suspect_id)?;

    use gumshoe_domain::WarrantOutcome::*;
    let dto = match result.outcome {
        Won => WarrantResponseDto {
            result: "won",
            reason: None,
            case_status: result.status,
            message: Some(format!(
                "You caught {}! The stolen treasure has been recovered.",
                result.suspect_name
            )),
            warrant: Some(WarrantDto {
                suspect_id: Some(result.warrant.suspect_id),
                city_id: result.warrant.city_id,
                issued_at: Some(result.warrant.issued_at),
            }),
            correct_suspect: None,
        },
        LostWrongSuspect => WarrantResponseDto {
            result: "lost",
            reason: result.outcome.reason(),
            case_status: result.status,
            message: None,
            warrant: None,
            correct_suspect: result.correct_suspect.map(SuspectRefDto::from),
        },
        LostWrongCity => WarrantResponseDto {
            result: "lost",
            reason: result.outcome.reason(),
            case_status: result.status,
            message: None,
            warrant: Some(WarrantDto {
                suspect_id: None,
                city_id: result.warrant.city_id,
                issued_at: None,
            }),
            correct_suspect: None,
        },
    };
    Ok(Json(dto))
}

// =============================================================================
// NPC chat
// =============================================================================

async fn chat_with_npc(
    State(app): State<Arc<App>>,
    Path((id, npc_id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<ChatResponseDto>, ApiError> {
    let request: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();
    let outcome = app
        .chat
        .chat(&CaseId::new(id), &NpcId::new(npc_id), request.message)
        .await?;

    Ok(Json(ChatResponseDto {
        npc_message: NpcMessageDto {
            npc_id: outcome.npc_message.npc_id,
            npc_name: outcome.npc_message.npc_name,
            text: outcome.npc_message.text,
            timestamp: outcome.npc_message.timestamp,
        },
        chat_history: ChatHistoryDto {
            message_count: outcome.message_count,
            remaining_messages: outcome.remaining_messages,
        },
    }))
}

// =============================================================================
// Error mapping
// =============================================================================

#[derive(Debug)]
pub struct ApiError(pub GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use GameError::*;
        let status = match self.0 {
            SessionNotFound | CaseNotFound | CityNotFound | NpcNotFound => StatusCode::NOT_FOUND,
            MissingSession => StatusCode::UNAUTHORIZED,
            InvalidSession | CaseStillActive | SameCity | InvalidDestination | MissingCityId
            | MissingSuspectId | InvalidSuspect | EmptyMessage | MessageTooLong | NpcWrongCity => {
                StatusCode::BAD_REQUEST
            }
            ActiveCaseExists | CaseCompleted | NoSteps | WarrantAlreadyIssued => {
                StatusCode::CONFLICT
            }
            SessionExpired => StatusCode::GONE,
            ChatCapReached => StatusCode::TOO_MANY_REQUESTS,
            MaxSessionsReached => StatusCode::SERVICE_UNAVAILABLE,
        };

        let mut body = serde_json::json!({
            "error": self.0.to_string(),
            "code": self.0.code(),
        });
        if matches!(self.0, MaxSessionsReached) {
            body["retryAfter"] = 60.into();
            return (status, [(header::RETRY_AFTER, "60")], Json(body)).into_response();
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{ManualClock, SystemRandom};
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use chrono::{DateTime, Duration, Utc};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn start() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
    }

    fn fixture() -> (Router, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::at(start()));
        let app = App::with_ports(clock.clone(), Arc::new(SystemRandom), None);
        (routes(Arc::new(app)), clock)
    }

    async fn send(router: &Router, request: HttpRequest<Body>) -> (StatusCode, Value) {
        let response = router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible service");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, value)
    }

    fn request(method: &str, uri: &str, session: Option<&str>, body: Option<Value>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().method(method).uri(uri);
        if let Some(session) = session {
            builder = builder.header("X-Session-Id", session);
        }
        match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(value.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        }
    }

    async fn open_session(router: &Router) -> String {
        let response = router
            .clone()
            .oneshot(request("POST", "/api/sessions", None, None))
            .await
            .expect("infallible service");
        assert_eq!(response.status(), StatusCode::CREATED);
        let header = response
            .headers()
            .get("x-session-id")
            .expect("session header")
            .to_str()
            .expect("ascii")
            .to_string();
        header
    }

    async fn open_case(router: &Router, session: &str) -> Value {
        let (status, body) = send(router, request("POST", "/api/cases", Some(session), None)).await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    fn trail_of(case: &Value) -> Vec<String> {
        case["trail"]
            .as_array()
            .expect("trail array")
            .iter()
            .map(|v| v.as_str().expect("city id").to_string())
            .collect()
    }

    #[tokio::test]
    async fn session_lifecycle_roundtrip() {
        let (router, _) = fixture();

        let id = open_session(&router).await;
        assert!(id.starts_with("sess-"));

        let (status, body) =
            send(&router, request("GET", &format!("/api/sessions/{id}"), None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], json!(id));
        assert_eq!(body["status"], json!("active"));

        let (status, _) =
            send(&router, request("DELETE", &format!("/api/sessions/{id}"), None, None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) =
            send(&router, request("DELETE", &format!("/api/sessions/{id}"), None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], json!("SESSION_NOT_FOUND"));
    }

    #[tokio::test]
    async fn unknown_session_reads_as_gone() {
        let (router, _) = fixture();
        let (status, body) = send(
            &router,
            request(
                "GET",
                "/api/sessions/sess-00000000-0000-0000-0000-000000000009",
                None,
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::GONE);
        assert_eq!(body["code"], json!("SESSION_EXPIRED"));
    }

    #[tokio::test]
    async fn case_routes_enforce_the_session_header() {
        let (router, _) = fixture();

        let (status, body) = send(&router, request("POST", "/api/cases", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], json!("MISSING_SESSION"));

        let (status, body) =
            send(&router, request("POST", "/api/cases", Some("garbage"), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("INVALID_SESSION"));

        // A valid-format unknown token is adopted rather than rejected.
        let adopted = "sess-00000000-0000-0000-0000-00000000abcd";
        let (status, _) = send(&router, request("POST", "/api/cases", Some(adopted), None)).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) =
            send(&router, request("GET", &format!("/api/sessions/{adopted}"), None, None)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn idle_sessions_expire_on_case_routes() {
        let (router, clock) = fixture();
        let session = open_session(&router).await;

        clock.advance(Duration::hours(25));
        let (status, body) =
            send(&router, request("POST", "/api/cases", Some(&session), None)).await;
        assert_eq!(status, StatusCode::GONE);
        assert_eq!(body["code"], json!("SESSION_EXPIRED"));
    }

    #[tokio::test]
    async fn winning_run_end_to_end() {
        let (router, _) = fixture();
        let session = open_session(&router).await;
        let case = open_case(&router, &session).await;
        let case_id = case["id"].as_str().expect("case id");
        let trail = trail_of(&case);

        assert_eq!(case["remainingSteps"], json!(10));
        assert_eq!(case["status"], json!("active"));
        assert_eq!(case["currentCity"], json!(trail[0]));

        // Walk the trail in order.
        for city in trail.iter().skip(1) {
            let (status, body) = send(
                &router,
                request(
                    "POST",
                    &format!("/api/cases/{case_id}/travel"),
                    Some(&session),
                    Some(json!({ "cityId": city })),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["city"]["id"], json!(city));
            assert_eq!(body["caseStatus"], json!("active"));
        }

        let (status, body) = send(
            &router,
            request(
                "GET",
                &format!("/api/cases/{case_id}/city"),
                Some(&session),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isFinalCity"], json!(true));
        assert_eq!(body["travelOptions"], json!([]));

        let (status, body) = send(
            &router,
            request(
                "POST",
                &format!("/api/cases/{case_id}/warrant"),
                Some(&session),
                Some(json!({ "suspectId": "suspect-carmen" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], json!("won"));
        assert_eq!(body["caseStatus"], json!("won"));
        assert_eq!(
            body["message"],
            json!("You caught Carmen Sandiego! The stolen treasure has been recovered.")
        );
        assert_eq!(body["warrant"]["suspectId"], json!("suspect-carmen"));

        let (status, body) = send(
            &router,
            request(
                "GET",
                &format!("/api/cases/{case_id}/summary"),
                Some(&session),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], json!("won"));
        assert_eq!(body["totalSteps"], json!(10));
        assert_eq!(body["correctSuspect"]["id"], json!("suspect-carmen"));
        assert_eq!(body["playerWarrant"]["suspectId"], json!("suspect-carmen"));
    }

    #[tokio::test]
    async fn travel_rejections_map_to_statuses() {
        let (router, _) = fixture();
        let session = open_session(&router).await;
        let case = open_case(&router, &session).await;
        let case_id = case["id"].as_str().expect("case id");
        let current = case["currentCity"].as_str().expect("current city");

        let travel_uri = format!("/api/cases/{case_id}/travel");

        let (status, body) =
            send(&router, request("POST", &travel_uri, Some(&session), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("MISSING_CITY_ID"));

        let (status, body) = send(
            &router,
            request(
                "POST",
                &travel_uri,
                Some(&session),
                Some(json!({ "cityId": current })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("SAME_CITY"));

        let (status, body) = send(
            &router,
            request(
                "POST",
                &travel_uri,
                Some(&session),
                Some(json!({ "cityId": "atlantis" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("INVALID_DESTINATION"));

        let (status, body) = send(
            &router,
            request(
                "POST",
                "/api/cases/case-missing/travel",
                Some(&session),
                Some(json!({ "cityId": "paris" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], json!("CASE_NOT_FOUND"));
    }

    #[tokio::test]
    async fn one_active_case_per_session_is_enforced() {
        let (router, _) = fixture();
        let session = open_session(&router).await;
        open_case(&router, &session).await;

        let (status, body) =
            send(&router, request("POST", "/api/cases", Some(&session), None)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], json!("ACTIVE_CASE_EXISTS"));
    }

    #[tokio::test]
    async fn warrant_rejections_map_to_statuses() {
        let (router, _) = fixture();
        let session = open_session(&router).await;
        let case = open_case(&router, &session).await;
        let case_id = case["id"].as_str().expect("case id");
        let warrant_uri = format!("/api/cases/{case_id}/warrant");

        let (status, body) =
            send(&router, request("POST", &warrant_uri, Some(&session), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("MISSING_SUSPECT_ID"));

        let (status, body) = send(
            &router,
            request(
                "POST",
                &warrant_uri,
                Some(&session),
                Some(json!({ "suspectId": "suspect-nobody" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("INVALID_SUSPECT"));

        // First warrant at the starting city: culprit named, wrong city.
        let (status, body) = send(
            &router,
            request(
                "POST",
                &warrant_uri,
                Some(&session),
                Some(json!({ "suspectId": "suspect-carmen" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], json!("lost"));
        assert_eq!(body["reason"], json!("wrong_city"));
        assert!(body.get("message").is_none());

        let (status, body) = send(
            &router,
            request(
                "POST",
                &warrant_uri,
                Some(&session),
                Some(json!({ "suspectId": "suspect-carmen" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], json!("WARRANT_ALREADY_ISSUED"));
    }

    #[tokio::test]
    async fn wrong_suspect_reveals_the_culprit() {
        let (router, _) = fixture();
        let session = open_session(&router).await;
        let case = open_case(&router, &session).await;
        let case_id = case["id"].as_str().expect("case id");

        let (status, body) = send(
            &router,
            request(
                "POST",
                &format!("/api/cases/{case_id}/warrant"),
                Some(&session),
                Some(json!({ "suspectId": "suspect-top" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reason"], json!("wrong_suspect"));
        assert_eq!(body["correctSuspect"]["name"], json!("Carmen Sandiego"));
    }

    #[tokio::test]
    async fn summary_requires_a_finished_case() {
        let (router, _) = fixture();
        let session = open_session(&router).await;
        let case = open_case(&router, &session).await;
        let case_id = case["id"].as_str().expect("case id");

        let (status, body) = send(
            &router,
            request(
                "GET",
                &format!("/api/cases/{case_id}/summary"),
                Some(&session),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("CASE_STILL_ACTIVE"));
    }

    #[tokio::test]
    async fn suspects_list_the_full_gallery() {
        let (router, _) = fixture();
        let session = open_session(&router).await;
        let case = open_case(&router, &session).await;
        let case_id = case["id"].as_str().expect("case id");

        let (status, body) = send(
            &router,
            request(
                "GET",
                &format!("/api/cases/{case_id}/suspects"),
                Some(&session),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let suspects = body["suspects"].as_array().expect("suspects array");
        assert_eq!(suspects.len(), 11);
        assert!(suspects
            .iter()
            .any(|s| s["traits"]["distinguishingFeature"] == json!("Red trench coat")));
    }

    #[tokio::test]
    async fn chat_exchanges_until_the_cap() {
        let (router, _) = fixture();
        let session = open_session(&router).await;
        let case = open_case(&router, &session).await;
        let case_id = case["id"].as_str().expect("case id");

        let (status, city) = send(
            &router,
            request(
                "GET",
                &format!("/api/cases/{case_id}/city"),
                Some(&session),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let npc_id = city["npcs"][0]["id"].as_str().expect("npc id").to_string();
        let chat_uri = format!("/api/cases/{case_id}/npcs/{npc_id}/chat");

        for exchange in 1..=10 {
            let (status, body) = send(
                &router,
                request(
                    "POST",
                    &chat_uri,
                    Some(&session),
                    Some(json!({ "message": "seen anyone suspicious?" })),
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["chatHistory"]["messageCount"], json!(exchange * 2));
            assert_eq!(
                body["chatHistory"]["remainingMessages"],
                json!(20 - exchange * 2)
            );
            assert_eq!(body["npcMessage"]["npcId"], json!(npc_id));
        }

        let (status, body) = send(
            &router,
            request(
                "POST",
                &chat_uri,
                Some(&session),
                Some(json!({ "message": "one more question" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["code"], json!("CHAT_CAP_REACHED"));
    }

    #[tokio::test]
    async fn chat_validation_statuses() {
        let (router, _) = fixture();
        let session = open_session(&router).await;
        let case = open_case(&router, &session).await;
        let case_id = case["id"].as_str().expect("case id");

        let (_, city) = send(
            &router,
            request(
                "GET",
                &format!("/api/cases/{case_id}/city"),
                Some(&session),
                None,
            ),
        )
        .await;
        let npc_id = city["npcs"][0]["id"].as_str().expect("npc id").to_string();

        let (status, body) = send(
            &router,
            request(
                "POST",
                &format!("/api/cases/{case_id}/npcs/{npc_id}/chat"),
                Some(&session),
                None,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("EMPTY_MESSAGE"));

        let (status, body) = send(
            &router,
            request(
                "POST",
                &format!("/api/cases/{case_id}/npcs/{npc_id}/chat"),
                Some(&session),
                Some(json!({ "message": "x".repeat(281) })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("MESSAGE_TOO_LONG"));

        let (status, body) = send(
            &router,
            request(
                "POST",
                &format!("/api/cases/{case_id}/npcs/npc-nobody/chat"),
                Some(&session),
                Some(json!({ "message": "hello" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], json!("NPC_NOT_FOUND"));
    }

    #[tokio::test]
    async fn health_endpoint_answers() {
        let (router, _) = fixture();
        let response = router
            .clone()
            .oneshot(request("GET", "/api/health", None, None))
            .await
            .expect("infallible service");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
