use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use helpbubble::constants::{context_preview, truncate_chars};
use helpbubble::reader::{AnswerModel, ModelAnswer};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{
    AskRequest, AskResponse, ContextsResponse, HealthResponse, TestContextQuery,
    TestContextResponse,
};
use crate::gateway::state::HandlerState;
use crate::gateway::status::{HELPBUBBLE_STATUS_HEADER, HelpBubbleStatus};

/// Characters of the question echoed into the request log.
const QUESTION_LOG_CHARS: usize = 100;

#[instrument(
    skip(state, request),
    fields(request_id = %Uuid::new_v4(), user_id = tracing::field::Empty)
)]
pub async fn ask_handler<M>(
    State(state): State<HandlerState<M>>,
    request: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    M: AnswerModel + 'static,
{
    let started = Instant::now();
    let Json(request) =
        request.map_err(|e| GatewayError::InvalidRequest(format!("Invalid request body: {}", e)))?;

    let question = request.question.trim().to_string();
    if question.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "question must not be blank".to_string(),
        ));
    }
    if let Some(user_id) = &request.user_id {
        tracing::Span::current().record("user_id", tracing::field::display(user_id));
    }

    let (context, category) = match request.context.filter(|c| !c.trim().is_empty()) {
        Some(context) => (context, None),
        None => {
            let decision = state.router().route(&question);
            (
                decision.passage.unwrap_or_default().to_string(),
                Some(decision.category.to_string()),
            )
        }
    };

    let answer = match state.reader.clone() {
        Some(reader) => match run_reader(reader, question.clone(), context.clone()).await {
            Ok(answer) => Some(answer),
            Err(e) => {
                warn!(error = %e, "Reader failed, serving fallback answer");
                None
            }
        },
        None => {
            debug!("No reader loaded, serving fallback answer");
            None
        }
    };

    let (response, status) = match answer {
        Some(answer) => (
            AskResponse {
                answer: answer.text,
                confidence: f64::from(answer.score),
                context_used: context_preview(&context),
                category,
                fallback: false,
                response_time: 0.0,
                timestamp: String::new(),
            },
            HelpBubbleStatus::Answered,
        ),
        None => {
            let reply = state.responder.respond(&question);
            (
                AskResponse {
                    answer: reply.answer,
                    confidence: 0.0,
                    context_used: context_preview(&context),
                    category: Some(reply.category),
                    fallback: true,
                    response_time: 0.0,
                    timestamp: String::new(),
                },
                HelpBubbleStatus::Fallback,
            )
        }
    };

    let response = AskResponse {
        response_time: started.elapsed().as_secs_f64(),
        timestamp: now_timestamp(),
        ..response
    };

    info!(
        question = %truncate_chars(&question, QUESTION_LOG_CHARS),
        answer = %response.answer,
        confidence = response.confidence,
        fallback = response.fallback,
        "Answered question"
    );

    Ok(json_response(StatusCode::OK, status, response))
}

#[instrument(skip(state, query))]
pub async fn test_context_handler<M>(
    State(state): State<HandlerState<M>>,
    query: Result<Query<TestContextQuery>, QueryRejection>,
) -> Result<Response, GatewayError>
where
    M: AnswerModel + 'static,
{
    let Query(query) =
        query.map_err(|e| GatewayError::InvalidRequest(format!("Invalid query: {}", e)))?;

    let reader = state.reader.clone().ok_or(GatewayError::ModelUnavailable)?;
    let answer = run_reader(reader, query.question.clone(), query.context.clone()).await?;

    let response = TestContextResponse {
        context: context_preview(&query.context),
        question: query.question,
        answer: answer.text,
        confidence: f64::from(answer.score),
        start: answer.start,
        end: answer.end,
    };

    Ok(json_response(
        StatusCode::OK,
        HelpBubbleStatus::Answered,
        response,
    ))
}

#[instrument(skip(state))]
pub async fn health_handler<M>(State(state): State<HandlerState<M>>) -> Response
where
    M: AnswerModel + 'static,
{
    let model_loaded = state.model_loaded();
    let status = if model_loaded {
        HelpBubbleStatus::Healthy
    } else {
        HelpBubbleStatus::FallbackOnly
    };

    json_response(
        StatusCode::OK,
        status,
        HealthResponse {
            status: "healthy".to_string(),
            model_loaded,
            model_name: state.model_name.clone(),
            timestamp: now_timestamp(),
        },
    )
}

#[instrument(skip(state))]
pub async fn contexts_handler<M>(State(state): State<HandlerState<M>>) -> Response
where
    M: AnswerModel + 'static,
{
    let knowledge = state.router().knowledge_base();
    let contexts: Vec<String> = knowledge.categories().map(str::to_string).collect();

    json_response(
        StatusCode::OK,
        HelpBubbleStatus::Ok,
        ContextsResponse {
            total_contexts: contexts.len(),
            contexts,
        },
    )
}

/// Runs the reader on the blocking pool so inference never stalls the async workers.
pub(crate) async fn run_reader<M>(
    reader: Arc<M>,
    question: String,
    context: String,
) -> Result<ModelAnswer, GatewayError>
where
    M: AnswerModel + 'static,
{
    tokio::task::spawn_blocking(move || reader.answer(&question, &context))
        .await
        .map_err(|e| GatewayError::InternalError(format!("Inference task failed: {}", e)))?
        .map_err(GatewayError::from)
}

pub(crate) fn json_response<T: Serialize>(
    code: StatusCode,
    status: HelpBubbleStatus,
    body: T,
) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        HELPBUBBLE_STATUS_HEADER,
        HeaderValue::from_static(status.as_str()),
    );
    (code, headers, Json(body)).into_response()
}

pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
