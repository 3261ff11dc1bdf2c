pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::linkedin::handlers as linkedin_handlers;
use crate::network::handlers as network_handlers;
use crate::resumes::autofill;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;
use crate::users::handlers as user_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/register", post(user_handlers::handle_register))
        .route("/api/v1/auth/login", post(user_handlers::handle_login))
        // Profile
        .route("/api/v1/profile/me", get(user_handlers::handle_get_my_profile))
        .route(
            "/api/v1/profile",
            post(user_handlers::handle_create_profile)
                .put(user_handlers::handle_update_profile)
                .delete(user_handlers::handle_delete_profile),
        )
        .route(
            "/api/v1/profile/autofill",
            post(autofill::handle_autofill_profile),
        )
        // Resumes
        .route(
            "/api/v1/resumes",
            post(resume_handlers::handle_upload_resume)
                .get(resume_handlers::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get_resume),
        )
        // LinkedIn
        .route(
            "/api/v1/linkedin/extract",
            post(linkedin_handlers::handle_extract_profile),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            get(network_handlers::handle_list_recommendations),
        )
        .route(
            "/api/v1/recommendations/:id/status",
            patch(network_handlers::handle_update_recommendation_status),
        )
        .with_state(state)
}
