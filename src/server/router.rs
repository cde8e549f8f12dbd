//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState, ws};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Log in, creating the user on first use
/// - `GET /api/auth/logout` - Logout current user
/// - `GET /api/auth/user` - Get current user information
/// - `GET /api/rooms` - List rooms with online counts
/// - `GET /api/rooms/{room_id}/messages` - Recent messages of a room
/// - `GET /api/rooms/{room_id}/bartenders` - Bartenders of a room
/// - `GET /api/bartenders/{bartender_id}/menu` - Menu of a bartender
/// - `GET /api/bartenders/{bartender_id}/mood` - Bartender's mood toward the current user
/// - `GET /api/user/inventory` - Inventory of the current user
/// - `POST /api/user/inventory/{inventory_id}/equip` - Equip an inventory entry
/// - `POST /api/user/inventory/{inventory_id}/unequip` - Unequip an inventory entry
/// - `POST /api/actions` - Run a game action
/// - `GET /ws` - WebSocket upgrade
///
/// The OpenAPI specification is available at `/api/docs/openapi.json` and Swagger UI is
/// served at `/api/docs`.
///
/// # Example
/// ```ignore
/// let app_state = AppState::from(db);
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pixel Tavern", description = "Pixel Tavern API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::room::ROOM_TAG, description = "Rooms & chat history"),
        (name = controller::bartender::BARTENDER_TAG, description = "Bartenders, menus & moods"),
        (name = controller::inventory::INVENTORY_TAG, description = "User inventory & equipment"),
        (name = controller::action::ACTION_TAG, description = "Game actions"),
        (name = ws::handler::WS_TAG, description = "WebSocket protocol"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::room::get_rooms))
        .routes(routes!(controller::room::get_room_messages))
        .routes(routes!(controller::room::get_room_bartenders))
        .routes(routes!(controller::bartender::get_menu))
        .routes(routes!(controller::bartender::get_mood))
        .routes(routes!(controller::inventory::get_inventory))
        .routes(routes!(controller::inventory::equip_item))
        .routes(routes!(controller::inventory::unequip_item))
        .routes(routes!(controller::action::dispatch_action))
        .routes(routes!(ws::handler::ws_handler))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
