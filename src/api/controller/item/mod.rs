use axum::extract::{Path, State};
use axum::response::Response;

use crate::api::dto::envelope::{MetadataOverrides, StatusOverride};
use crate::api::request_context::RequestContext;
use crate::app_state::AppState;

pub struct ItemController;

impl ItemController {
    pub async fn list_items(State(state): State<AppState>, ctx: RequestContext) -> Response {
        let limit = match parse_limit(&ctx) {
            Ok(limit) => limit,
            Err(message) => return state.responder.bad_request(&ctx, Some(&message)),
        };

        match state.item_service.list(limit) {
            Ok(items) => state.responder.respond(
                &ctx,
                items,
                MetadataOverrides::default(),
                StatusOverride::default(),
            ),
            Err(err) => state.responder.failed(&ctx, Some(&err.to_string()), Some(500)),
        }
    }

    pub async fn get_item(
        State(state): State<AppState>,
        Path(id): Path<String>,
        ctx: RequestContext,
    ) -> Response {
        let Ok(id) = id.parse::<u64>() else {
            return state
                .responder
                .bad_request(&ctx, Some("item id must be a non-negative integer"));
        };

        match state.item_service.find(id) {
            Some(item) => state.responder.respond(
                &ctx,
                vec![item],
                MetadataOverrides::default(),
                StatusOverride::default(),
            ),
            None => state.responder.not_found(&ctx, None),
        }
    }
}

fn parse_limit(ctx: &RequestContext) -> Result<Option<usize>, String> {
    match ctx.param_str("limit") {
        None => Ok(None),
        Some(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| format!("limit must be a non-negative integer, got \"{raw}\"")),
    }
}
