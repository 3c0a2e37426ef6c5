use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::{info, warn};

use crate::api::dto::envelope::{
    AutoSorting, DebugInfo, DebugRequestInfo, Envelope, Metadata, MetadataOverrides, Record,
    Status, StatusOverride,
};
use crate::api::request_context::RequestContext;
use crate::api::util::sort::sort_records;
use crate::config::AppConfig;
use crate::errors::SortError;

/// Builds the standard `{data, metadata, status}` envelope for every
/// handler, applying opportunistic sorting when the client asked for it via
/// `sortKey`/`sortDir` query parameters.
///
/// All configuration is injected at construction, so the responder is a
/// pure function of its inputs and can be shared freely across requests.
pub struct Responder {
    environment: String,
    production_like: bool,
    server_ip: Option<String>,
    server_name: Option<String>,
    server_signature: Option<String>,
    sort_key: String,
    sort_direction: String,
}

impl Responder {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            environment: config.environment.clone(),
            production_like: config.is_production_like(),
            server_ip: config.server_ip.clone(),
            server_name: config.server_name.clone(),
            server_signature: config.server_signature.clone(),
            sort_key: config.sort_key.clone(),
            sort_direction: config.sort_direction.clone(),
        }
    }

    /// Sort records, falling back to the configured default key and
    /// direction when a caller passes `None`.
    pub fn sort(
        &self,
        records: &[Record],
        key: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Vec<Record>, SortError> {
        let key = key.unwrap_or(&self.sort_key);
        let direction = direction.unwrap_or(&self.sort_direction);
        sort_records(records, key, direction)
    }

    /// Assemble and emit the envelope. The transport status code always
    /// equals `status.code`; codes that are not valid HTTP fall back to 500.
    pub fn respond(
        &self,
        ctx: &RequestContext,
        data: Vec<Record>,
        meta_overrides: MetadataOverrides,
        status_overrides: StatusOverride,
    ) -> Response {
        let (code, envelope) = self.assemble(ctx, data, meta_overrides, status_overrides);
        (code, Json(envelope)).into_response()
    }

    fn assemble(
        &self,
        ctx: &RequestContext,
        mut data: Vec<Record>,
        meta_overrides: MetadataOverrides,
        status_overrides: StatusOverride,
    ) -> (StatusCode, Envelope) {
        let status = Status::merged(status_overrides);
        let mut metadata = self.build_metadata(ctx, &data, meta_overrides);

        // Only attempt the sort when the client supplied both parameters.
        // Failure degrades to the unsorted data; it never changes the
        // response status.
        if let (Some(key), Some(direction)) = (ctx.sort_key(), ctx.sort_dir()) {
            match self.sort(&data, Some(key), Some(direction)) {
                Ok(sorted) => {
                    metadata.auto_sorting = AutoSorting::applied();
                    data = sorted;
                }
                Err(err) => {
                    warn!("auto-sorting failed: {err}");
                    metadata.auto_sorting = AutoSorting::failed(&err);
                }
            }
        }

        let code =
            StatusCode::from_u16(status.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            code,
            Envelope {
                data,
                metadata,
                status,
            },
        )
    }

    /// Computed metadata with structured override precedence: a set override
    /// field wins, `input` and `debug` are always computed.
    pub fn build_metadata(
        &self,
        ctx: &RequestContext,
        data: &[Record],
        overrides: MetadataOverrides,
    ) -> Metadata {
        let count = data.len();

        Metadata {
            count: overrides.count.unwrap_or(count),
            // totalCount mirrors count: true pagination totals are not
            // tracked here, callers override when they have them.
            total_count: overrides.total_count.unwrap_or(count),
            page: overrides.page.unwrap_or(1),
            input: ctx.params.clone(),
            debug: if self.production_like {
                None
            } else {
                Some(self.build_debug_info(ctx))
            },
            auto_sorting: overrides.auto_sorting.unwrap_or_else(AutoSorting::not_attempted),
        }
    }

    pub fn build_debug_info(&self, ctx: &RequestContext) -> DebugInfo {
        DebugInfo {
            client_ip: ctx.client_ip.clone(),
            server_ip: self.server_ip.clone(),
            server_name: self.server_name.clone(),
            server_sig: self.server_signature.clone(),
            request: DebugRequestInfo {
                method: ctx.method.clone(),
                path: ctx.path.clone(),
                domain: ctx.domain.clone(),
                full_url: ctx.full_url.clone(),
                proxy: ctx.proxy_flag(),
                params: ctx.params.clone(),
                cache_hit: None,
            },
            environment: self.environment.clone(),
        }
    }

    pub fn not_found(&self, ctx: &RequestContext, message: Option<&str>) -> Response {
        warn!("404: resource not found");
        self.respond(
            ctx,
            Vec::new(),
            MetadataOverrides::default(),
            StatusOverride::with(404, message.unwrap_or("Not found")),
        )
    }

    pub fn bad_request(&self, ctx: &RequestContext, message: Option<&str>) -> Response {
        info!(
            "400: bad request, input: {}",
            serde_json::Value::Object(ctx.params.clone())
        );
        self.respond(
            ctx,
            Vec::new(),
            MetadataOverrides::default(),
            StatusOverride::with(
                400,
                message.unwrap_or(
                    "Bad request, some of the given params are not correct, try to adjust them.",
                ),
            ),
        )
    }

    pub fn failed(&self, ctx: &RequestContext, message: Option<&str>, code: Option<u16>) -> Response {
        let code = code.unwrap_or(401);
        warn!("{code}: something went wrong with the call");

        let message = match message {
            Some(message) => message.to_owned(),
            None => format!("{code}: something went wrong, try to adjust your search query"),
        };
        self.respond(
            ctx,
            Vec::new(),
            MetadataOverrides::default(),
            StatusOverride::with(code, message),
        )
    }
}
