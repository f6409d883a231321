use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use crate::api::{html, AppState};
use crate::domain::{CalculationInput, CalculationResult, Decimal, Fund};
use crate::error::AppError;
use crate::validation::{parse_all_positive, parse_fund};

/// Fields of the single-fund form. Every field is optional so that a missing
/// field is reported like an unparsable one instead of being rejected by the
/// extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleFundForm {
    pub investment_type: Option<String>,
    pub asset_price: Option<String>,
    pub cash_balance: Option<String>,
    pub underlying_price: Option<String>,
    #[serde(rename = "underlying200Ma")]
    pub underlying_200ma: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BothFundsForm {
    pub cash_balance: Option<String>,
    pub tqqq_price: Option<String>,
    pub qqq_price: Option<String>,
    #[serde(rename = "qqq200Ma")]
    pub qqq_200ma: Option<String>,
    pub upro_price: Option<String>,
    pub voo_price: Option<String>,
    #[serde(rename = "voo200Ma")]
    pub voo_200ma: Option<String>,
}

/// Form page rendering, used for both the success and the error path.
pub struct FormPage {
    status: StatusCode,
    body: String,
}

impl IntoResponse for FormPage {
    fn into_response(self) -> Response {
        (self.status, Html(self.body)).into_response()
    }
}

pub async fn both_funds_page() -> Html<String> {
    Html(html::both_funds_page(None))
}

pub async fn single_fund_page() -> Html<String> {
    Html(html::single_fund_page(None))
}

pub async fn submit_single_fund(
    State(state): State<AppState>,
    Form(form): Form<SingleFundForm>,
) -> FormPage {
    match calculate_single(&state, &form) {
        Ok((cash_balance, result)) => FormPage {
            status: StatusCode::OK,
            body: html::single_fund_page(Some(&html::single_result_block(cash_balance, &result))),
        },
        Err(err) => {
            tracing::debug!(error = %err, "single fund form rejected");
            FormPage {
                status: err.status(),
                body: html::single_fund_page(Some(&html::error_block(err.message()))),
            }
        }
    }
}

pub async fn submit_both_funds(
    State(state): State<AppState>,
    Form(form): Form<BothFundsForm>,
) -> FormPage {
    match calculate_both(&state, &form) {
        Ok((cash_balance, results)) => FormPage {
            status: StatusCode::OK,
            body: html::both_funds_page(Some(&html::both_results_block(cash_balance, &results))),
        },
        Err(err) => {
            tracing::debug!(error = %err, "both funds form rejected");
            FormPage {
                status: err.status(),
                body: html::both_funds_page(Some(&html::error_block(err.message()))),
            }
        }
    }
}

fn calculate_single(
    state: &AppState,
    form: &SingleFundForm,
) -> Result<(Decimal, CalculationResult), AppError> {
    let fund = parse_fund(form.investment_type.as_deref())?;
    let [asset_price, cash_balance, underlying_asset_price, underlying_asset_200ma_price] =
        parse_all_positive([
            form.asset_price.as_deref(),
            form.cash_balance.as_deref(),
            form.underlying_price.as_deref(),
            form.underlying_200ma.as_deref(),
        ])?;

    let result = state.engine.calculate(&CalculationInput {
        fund,
        cash_balance,
        asset_price,
        underlying_asset_price,
        underlying_asset_200ma_price,
    })?;
    tracing::info!(
        fund = %fund,
        final_investment = %result.final_investment,
        "single fund sized"
    );
    Ok((cash_balance, result))
}

fn calculate_both(
    state: &AppState,
    form: &BothFundsForm,
) -> Result<(Decimal, Vec<CalculationResult>), AppError> {
    let [cash_balance, tqqq_price, qqq_price, qqq_200ma, upro_price, voo_price, voo_200ma] =
        parse_all_positive([
            form.cash_balance.as_deref(),
            form.tqqq_price.as_deref(),
            form.qqq_price.as_deref(),
            form.qqq_200ma.as_deref(),
            form.upro_price.as_deref(),
            form.voo_price.as_deref(),
            form.voo_200ma.as_deref(),
        ])?;

    let inputs = [
        CalculationInput {
            fund: Fund::Tqqq,
            cash_balance,
            asset_price: tqqq_price,
            underlying_asset_price: qqq_price,
            underlying_asset_200ma_price: qqq_200ma,
        },
        CalculationInput {
            fund: Fund::Upro,
            cash_balance,
            asset_price: upro_price,
            underlying_asset_price: voo_price,
            underlying_asset_200ma_price: voo_200ma,
        },
    ];

    let results = inputs
        .iter()
        .map(|input| state.engine.calculate(input))
        .collect::<Result<Vec<_>, _>>()?;
    for result in &results {
        tracing::info!(
            fund = %result.fund,
            final_investment = %result.final_investment,
            "fund sized"
        );
    }
    Ok((cash_balance, results))
}
