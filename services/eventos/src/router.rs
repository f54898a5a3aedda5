use axum::{
    Router,
    routing::{get, post},
};
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use eventos_core::error::not_found;
use eventos_core::health::healthz;
use eventos_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    cost::{
        create_cost, delete_cost, get_cost, get_event_costs, list_costs, patch_cost, replace_cost,
    },
    event::{create_event, delete_event, get_event, list_events, patch_event, replace_event},
    health::readyz,
    token::create_token,
    user::{create_user, delete_user, get_user, list_users, patch_user, replace_user},
    venue::{create_venue, delete_venue, get_venue, list_venues, patch_venue, replace_venue},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/token", post(create_token))
        // Users: registration and reads are open, changes need the account's token
        .route("/usuarios", get(list_users).post(create_user))
        .route(
            "/usuarios/{id}",
            get(get_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user),
        )
        // Venues
        .route("/locais", get(list_venues).post(create_venue))
        .route(
            "/locais/{id}",
            get(get_venue)
                .put(replace_venue)
                .patch(patch_venue)
                .delete(delete_venue),
        )
        // Events
        .route("/eventos", get(list_events).post(create_event))
        .route(
            "/eventos/{id}",
            get(get_event)
                .put(replace_event)
                .patch(patch_event)
                .delete(delete_event),
        )
        .route("/eventos/{id}/custos", get(get_event_costs))
        // Costs
        .route("/custos", get(list_costs).post(create_cost))
        .route(
            "/custos/{id}",
            get(get_cost)
                .put(replace_cost)
                .patch(patch_cost)
                .delete(delete_cost),
        )
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}

/// [`build_router`] behind trailing-slash trimming, so `/eventos/` and
/// `/eventos` reach the same handler. Path normalization has to wrap the
/// router from outside to run before route matching.
pub fn build_app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
