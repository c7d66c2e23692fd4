use axum::{
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::recipe::{self, AnalysisConstraints, RecipeAnalysis};
use crate::core::taste::{self, FormulaIngredient, TasteReport};
use crate::error::ValidationError;

use super::AppState;

// ─── Request bodies ─────────────────────────────────────────────────────────

/// POST /taste-predictor request body.
#[derive(Debug, Deserialize)]
pub struct TastePredictorRequest {
    pub ingredients: Vec<FormulaIngredient>,
    /// Accepted for forward compatibility; the mock model ignores it.
    #[serde(rename = "targetProfile", default)]
    pub target_profile: Option<serde_json::Value>,
}

/// POST /recipe-analyzer request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeAnalyzerRequest {
    pub product_description: String,
    #[serde(default)]
    pub target_market: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub budget_constraint: Option<f64>,
}

// ─── Error taxonomy ─────────────────────────────────────────────────────────

/// Gateway failure modes: validation → 400 with the precise message,
/// everything else → 500 with a generic message. The real cause is logged,
/// never returned to the caller.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    Internal(anyhow::Error),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => {
                tracing::warn!("request rejected: {err}");
                error_response(StatusCode::BAD_REQUEST, &err.to_string())
            }
            Self::Internal(err) => {
                tracing::error!("internal error: {err:#}");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// JSON error envelope shared by every failure path.
fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

// ─── Handlers ───────────────────────────────────────────────────────────────

/// GET /health — liveness probe, always public.
pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.started_at.elapsed().as_secs(),
    }))
}

/// POST /taste-predictor — formula → taste vector + recommendations + cost.
pub async fn handle_taste_predictor(
    body: Result<Json<TastePredictorRequest>, JsonRejection>,
) -> Result<Json<TasteReport>, ApiError> {
    let request_id = Uuid::new_v4();
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(%request_id, "taste predictor body rejected: {rejection}");
        ApiError::Validation(ValidationError::EmptyFormula)
    })?;

    tracing::debug!(
        %request_id,
        ingredients = request.ingredients.len(),
        has_target_profile = request.target_profile.is_some(),
        "taste prediction requested"
    );

    let report = taste::predict(&request.ingredients)?;
    Ok(Json(report))
}

/// POST /recipe-analyzer — description → suggestions + properties +
/// compliance + timeline.
pub async fn handle_recipe_analyzer(
    body: Result<Json<RecipeAnalyzerRequest>, JsonRejection>,
) -> Result<Json<RecipeAnalysis>, ApiError> {
    let request_id = Uuid::new_v4();
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(%request_id, "recipe analyzer body rejected: {rejection}");
        ApiError::Validation(ValidationError::EmptyDescription)
    })?;

    tracing::debug!(
        %request_id,
        restrictions = request.dietary_restrictions.len(),
        "recipe analysis requested"
    );

    let constraints = AnalysisConstraints {
        target_market: request.target_market,
        dietary_restrictions: request.dietary_restrictions,
        budget_constraint: request.budget_constraint,
    };
    let analysis = recipe::analyze(&request.product_description, &constraints)?;
    Ok(Json(analysis))
}

/// Fallback for the analysis routes: plain OPTIONS gets an empty 200 (CORS
/// preflights are answered by the CORS layer before reaching here), any
/// other non-POST method gets 405.
pub async fn handle_method_not_allowed(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taste_request_parses_camel_case_target_profile() {
        let raw = r#"{
            "ingredients": [{"id": "a", "name": "Yeast Extract", "percentage": 100}],
            "targetProfile": {"umami": 8}
        }"#;
        let request: TastePredictorRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.ingredients.len(), 1);
        assert!(request.target_profile.is_some());
    }

    #[test]
    fn taste_request_requires_ingredients_field() {
        let raw = r#"{"targetProfile": {}}"#;
        let parsed: Result<TastePredictorRequest, _> = serde_json::from_str(raw);
        assert!(parsed.is_err());
    }

    #[test]
    fn recipe_request_optionals_default() {
        let raw = r#"{"productDescription": "vegan cheese block"}"#;
        let request: RecipeAnalyzerRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.product_description, "vegan cheese block");
        assert!(request.target_market.is_none());
        assert!(request.dietary_restrictions.is_empty());
        assert!(request.budget_constraint.is_none());
    }

    #[test]
    fn recipe_request_parses_camel_case_fields() {
        let raw = r#"{
            "productDescription": "burger",
            "targetMarket": "US retail",
            "dietaryRestrictions": ["soy-free"],
            "budgetConstraint": 18.5
        }"#;
        let request: RecipeAnalyzerRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.target_market.as_deref(), Some("US retail"));
        assert_eq!(request.dietary_restrictions, vec!["soy-free".to_string()]);
        assert!(request.budget_constraint.is_some());
    }

    #[test]
    fn api_error_converts_from_validation() {
        let err: ApiError = ValidationError::EmptyFormula.into();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::EmptyFormula)
        ));
    }
}
