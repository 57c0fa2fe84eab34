use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use quoter_core::{
    catalog, compute_layout, compute_pricing, grid_placements, CalculationSettings, Client,
    LayoutParams, LayoutResult, Operational, Placement, PricingInputs, PricingResult, Product,
    QuoteError, QuoteForm, QuoteMode,
};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use uuid::Uuid;

mod session;
mod svg;

use session::SessionStore;

const SESSION_COOKIE: &str = "quoter_sid";
const SESSION_MAX_AGE_DAYS: i64 = 7;

#[derive(Clone, Default)]
struct AppState {
    sessions: SessionStore,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Print Quoter API");

    let app = Router::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
        .route("/api/quotes", get(quotes_catalog))
        .route("/api/layout", post(layout))
        .route("/api/layout/svg", post(layout_svg))
        .route("/api/pricing", post(pricing))
        .route("/api/wizard", get(get_wizard).delete(reset_wizard))
        .route("/api/wizard/mode", post(save_mode))
        .route("/api/wizard/customer", post(save_customer))
        .route("/api/wizard/product", post(save_product))
        .route("/api/wizard/operational", post(save_operational))
        .route("/api/wizard/calculation", post(save_calculation))
        .layer(CorsLayer::permissive())
        .with_state(AppState::default());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind to port 3000");

    info!("API server listening on http://0.0.0.0:3000");
    info!("Try: curl http://localhost:3000/api/health");

    axum::serve(listener, app).await.expect("Server error");
}

async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "service": "print-quoter-api",
        "endpoints": [
            "GET  /api/health",
            "GET  /api/quotes",
            "POST /api/layout",
            "POST /api/layout/svg",
            "POST /api/pricing",
            "GET  /api/wizard",
            "POST /api/wizard/{mode,customer,product,operational,calculation}",
            "DELETE /api/wizard",
        ],
    }))
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "print-quoter-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Mock catalog: stock papers and saved quote templates.
async fn quotes_catalog() -> Json<serde_json::Value> {
    Json(json!({
        "papers": catalog::paper_options(),
        "quote_templates": catalog::quote_templates(),
    }))
}

#[derive(Serialize)]
struct LayoutResponse {
    layout: LayoutResult,
    placements: Vec<Placement>,
}

/// Sheet layout computation endpoint.
async fn layout(Json(params): Json<LayoutParams>) -> Json<LayoutResponse> {
    let layout = compute_layout(&params);

    info!(
        "Computed layout: {} across x {} down = {} per sheet ({:.1}% used)",
        layout.across, layout.down, layout.per_sheet, layout.used_area_percent
    );

    let placements = grid_placements(&params, &layout);
    Json(LayoutResponse { layout, placements })
}

/// SVG imposition preview endpoint.
async fn layout_svg(Json(params): Json<LayoutParams>) -> Response {
    let svg = svg::render(&params);
    (StatusCode::OK, [("Content-Type", "image/svg+xml")], svg).into_response()
}

/// Pricing roll-up endpoint.
async fn pricing(Json(inputs): Json<PricingInputs>) -> Json<PricingResult> {
    let result = compute_pricing(&inputs);

    info!(
        "Computed pricing: subtotal {:.2}, total {:.2}",
        result.subtotal, result.total_price
    );

    Json(result)
}

/// Current wizard state; a blank form when no session exists yet.
async fn get_wizard(State(state): State<AppState>, jar: CookieJar) -> Json<QuoteForm> {
    match jar.get(SESSION_COOKIE) {
        Some(cookie) => Json(state.sessions.load(cookie.value()).await.unwrap_or_default()),
        None => Json(QuoteForm::default()),
    }
}

/// Step 1: new quote or prefill from an existing template.
async fn save_mode(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(mode): Json<QuoteMode>,
) -> Result<(CookieJar, Json<QuoteForm>), AppError> {
    let (jar, sid, mut form) = open_session(&state, jar).await;
    form.set_mode(mode, &catalog::quote_templates())?;
    state.sessions.save(&sid, form.clone()).await;
    Ok((jar, Json(form)))
}

/// Step 2: customer details.
async fn save_customer(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(client): Json<Client>,
) -> Result<(CookieJar, Json<QuoteForm>), AppError> {
    let (jar, sid, mut form) = open_session(&state, jar).await;
    form.set_client(client)?;
    state.sessions.save(&sid, form.clone()).await;
    Ok((jar, Json(form)))
}

/// Step 3: product specification.
async fn save_product(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(product): Json<Product>,
) -> Result<(CookieJar, Json<QuoteForm>), AppError> {
    let (jar, sid, mut form) = open_session(&state, jar).await;
    form.set_product(product)?;
    state.sessions.save(&sid, form.clone()).await;
    Ok((jar, Json(form)))
}

/// Step 4: sheet setup and finishing costs; re-syncs derived values.
async fn save_operational(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(operational): Json<Operational>,
) -> Result<(CookieJar, Json<QuoteForm>), AppError> {
    let (jar, sid, mut form) = open_session(&state, jar).await;
    form.set_operational(operational)?;

    info!(
        "Session {}: {} recommended sheets",
        sid,
        form.operational
            .papers
            .first()
            .map(|p| p.recommended_sheets)
            .unwrap_or(0)
    );

    state.sessions.save(&sid, form.clone()).await;
    Ok((jar, Json(form)))
}

/// Step 5: margin and discount settings; returns the fresh breakdown.
async fn save_calculation(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(settings): Json<CalculationSettings>,
) -> Result<(CookieJar, Json<PricingResult>), AppError> {
    let (jar, sid, mut form) = open_session(&state, jar).await;
    form.set_calculation(settings)?;
    let breakdown = form.calculation.clone();
    state.sessions.save(&sid, form).await;
    Ok((jar, Json(breakdown)))
}

/// Clears the stored form and drops the session cookie.
async fn reset_wizard(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            state.sessions.clear(cookie.value()).await;
            jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
        }
        None => jar,
    };
    (jar, StatusCode::NO_CONTENT)
}

/// Loads the session's form, minting a new session cookie when needed.
async fn open_session(state: &AppState, jar: CookieJar) -> (CookieJar, String, QuoteForm) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let sid = cookie.value().to_string();
        let form = state.sessions.load(&sid).await.unwrap_or_default();
        return (jar, sid, form);
    }

    let sid = Uuid::new_v4().to_string();
    let cookie = Cookie::build((SESSION_COOKIE, sid.clone()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::days(SESSION_MAX_AGE_DAYS))
        .build();
    (jar.add(cookie), sid, QuoteForm::default())
}

/// Application error type
struct AppError(anyhow::Error);

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        AppError(err.into())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request error: {}", self.0);

        let status = match self.0.downcast_ref::<QuoteError>() {
            Some(QuoteError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Some(QuoteError::UnknownTemplate(_)) => StatusCode::NOT_FOUND,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(json!({
                "error": self.0.to_string(),
            })),
        )
            .into_response()
    }
}
