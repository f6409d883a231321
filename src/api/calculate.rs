use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::domain::{CalculationInput, CalculationResult};
use crate::error::AppError;
use crate::validation::InputError;

/// `POST /v1/calculate`: size one fund from a JSON `CalculationInput`.
pub async fn post_calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculationInput>, JsonRejection>,
) -> Result<Json<CalculationResult>, AppError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "calculate body rejected");
        AppError::from(InputError::InvalidFields)
    })?;
    let fields = [
        input.cash_balance,
        input.asset_price,
        input.underlying_asset_price,
        input.underlying_asset_200ma_price,
    ];
    if fields.iter().any(|v| !v.is_positive()) {
        return Err(InputError::NonPositiveFields.into());
    }

    let result = state.engine.calculate(&input)?;
    tracing::info!(
        fund = %result.fund,
        final_investment = %result.final_investment,
        "calculated via api"
    );
    Ok(Json(result))
}
