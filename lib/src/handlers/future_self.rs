
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use tracing::{info, warn};
use uuid::Uuid;

use crate::mood::Mood;
use crate::service::common_structs::{FutureSelfRequest, PersonaResponse, UserProfile};
use crate::service::CommonService;
use crate::utilities::with_fallback;
use super::{build_error_response, build_success_response, parse_body};


pub async fn handle(service: &CommonService, journal: &str, profile: &UserProfile, mood: Mood) -> PersonaResponse {
    with_fallback(
        "future-self",
        service.groq.future_self(journal, profile, mood),
        || service.tables.pick_persona_fallback(mood),
    ).await
}


pub async fn future_self(
    State(service): State<CommonService>,
    body: Bytes
) -> Response {
    let request_id = Uuid::new_v4();

    let request = match parse_body::<FutureSelfRequest>(&body) {
        Ok(request) => request,
        Err(error) => {
            warn!(%request_id, error = %error, "invalid future-self body");
            return build_error_response(&error.to_string());
        },
    };

    let mood = Mood::parse_or_default(&request.mood);
    let response = handle(&service, &request.journal, &request.user_data, mood).await;
    info!(%request_id, %mood, "future self replied");
    build_success_response(&response)
}
