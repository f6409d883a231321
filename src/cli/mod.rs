//! Interactive prompt flow: collect inputs, size each selected fund, build a report.
//!
//! The flow talks to the user only through [`Prompter`], so it runs the same
//! against a real terminal ([`TerminalPrompter`]) and a canned script
//! ([`ScriptedPrompter`]).

use crate::config::{BuyMenu, Config};
use crate::domain::{CalculationInput, CalculationResult, Decimal, Fund};
use crate::engine::{CalcError, PricingEngine};
use crate::format;
use crate::validation::{parse_positive, InputError};
use std::fmt::Write as _;
use thiserror::Error;

pub mod scripted;
pub mod terminal;

pub use scripted::{Answer, ScriptedPrompter};
pub use terminal::TerminalPrompter;

pub const BANNER: &str = "\n💰 Investment Calculator\n\n\
Size leveraged ETF buys from your cash balance and the 200-day moving average.\n\
Press Esc or submit an empty answer to cancel.\n";

pub const CANCELLED_MESSAGE: &str = "\nCalculation cancelled.";

/// Validator handed to [`Prompter::input`]; `Err` carries the message to show.
pub type Validate<'a> = &'a dyn Fn(&str) -> Result<(), String>;

#[derive(Debug, Error)]
#[error("prompt failed: {0}")]
pub struct PromptError(#[from] pub std::io::Error);

/// Source of user answers. `Ok(None)` means the user cancelled.
pub trait Prompter {
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, PromptError>;

    /// Must keep asking until `validate` accepts the answer, or the user cancels.
    fn input(
        &mut self,
        prompt: &str,
        validate: Validate<'_>,
    ) -> Result<Option<String>, PromptError>;
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Calculation(#[from] CalcError),
}

/// What the user chose to size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Single(Fund),
    Both,
}

impl Target {
    const CHOICES: [Target; 3] = [
        Target::Single(Fund::Tqqq),
        Target::Single(Fund::Upro),
        Target::Both,
    ];

    fn label(&self) -> String {
        match self {
            Target::Single(fund) => fund.title(),
            Target::Both => "Both (TQQQ and UPRO)".to_string(),
        }
    }

    pub fn funds(&self) -> Vec<Fund> {
        match self {
            Target::Single(fund) => vec![*fund],
            Target::Both => Fund::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundReport {
    pub result: CalculationResult,
    /// Notional buy amount picked from the menu.
    pub amount_used: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub cash_balance: Decimal,
    pub portfolio_scale_factor: Decimal,
    pub funds: Vec<FundReport>,
}

impl Report {
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n=== Results ===");
        let _ = writeln!(out, "Cash Balance: {}", format::usd(self.cash_balance));
        let _ = writeln!(
            out,
            "Portfolio Scale Factor: {}\n",
            format::scale_factor(self.portfolio_scale_factor)
        );
        for fund in &self.funds {
            let _ = writeln!(
                out,
                "{} investment amount: {}",
                fund.result.fund,
                format::usd(fund.result.final_investment)
            );
            let _ = writeln!(
                out,
                "{} Amount Used: ${}\n",
                fund.result.fund.ticker(),
                fund.amount_used
            );
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Completed(Report),
    Cancelled,
}

struct Quote {
    fund: Fund,
    amount: Decimal,
    price: Decimal,
    moving_average: Decimal,
}

/// Run the whole prompt sequence. Nothing is computed until every answer is in.
pub fn run_flow<P: Prompter + ?Sized>(
    prompter: &mut P,
    config: &Config,
    engine: &PricingEngine,
) -> Result<FlowOutcome, FlowError> {
    let target_items: Vec<String> = Target::CHOICES.iter().map(Target::label).collect();
    let Some(choice) = prompter.select("Select investment type:", &target_items, 0)? else {
        return Ok(FlowOutcome::Cancelled);
    };
    let target = Target::CHOICES
        .get(choice)
        .copied()
        .ok_or(InputError::UnknownInvestmentType)?;
    let funds = target.funds();
    tracing::debug!(?target, "investment target selected");

    let mut amounts = Vec::with_capacity(funds.len());
    for fund in &funds {
        let Some(amount) = select_amount(prompter, *fund, config.menu(*fund))? else {
            return Ok(FlowOutcome::Cancelled);
        };
        amounts.push(amount);
    }

    let Some(cash_balance) = ask_positive(
        prompter,
        "Enter the cash balance amount:",
        "Cash balance",
    )?
    else {
        return Ok(FlowOutcome::Cancelled);
    };

    let mut quotes = Vec::with_capacity(funds.len());
    for (fund, amount) in funds.iter().zip(amounts) {
        let ticker = fund.underlying_ticker();
        let Some(price) = ask_positive(
            prompter,
            &format!("Enter the {} price:", ticker),
            &format!("{} price", ticker),
        )?
        else {
            return Ok(FlowOutcome::Cancelled);
        };
        let Some(moving_average) = ask_positive(
            prompter,
            &format!("Enter the {} 200MA price:", ticker),
            &format!("{} 200MA price", ticker),
        )?
        else {
            return Ok(FlowOutcome::Cancelled);
        };
        quotes.push(Quote {
            fund: *fund,
            amount,
            price,
            moving_average,
        });
    }

    let portfolio_scale_factor = engine.portfolio_scale_factor(cash_balance)?;
    let mut reports = Vec::with_capacity(quotes.len());
    for quote in quotes {
        let result = engine.calculate(&CalculationInput {
            fund: quote.fund,
            cash_balance,
            asset_price: quote.amount,
            underlying_asset_price: quote.price,
            underlying_asset_200ma_price: quote.moving_average,
        })?;
        tracing::debug!(
            fund = %result.fund,
            final_investment = %result.final_investment,
            "calculated recommendation"
        );
        reports.push(FundReport {
            result,
            amount_used: quote.amount,
        });
    }

    Ok(FlowOutcome::Completed(Report {
        cash_balance,
        portfolio_scale_factor,
        funds: reports,
    }))
}

fn select_amount<P: Prompter + ?Sized>(
    prompter: &mut P,
    fund: Fund,
    menu: BuyMenu,
) -> Result<Option<Decimal>, FlowError> {
    let items = [
        format!("{} (above 100 and 200 MA)", menu.above_ma),
        format!("{} (below 100 and 200 MA)", menu.below_ma),
    ];
    let prompt = format!("Select {} amount:", fund.ticker());
    Ok(prompter
        .select(&prompt, &items, 0)?
        .map(|i| if i == 0 { menu.above_ma } else { menu.below_ma }))
}

fn ask_positive<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    field: &str,
) -> Result<Option<Decimal>, FlowError> {
    let validate = |raw: &str| {
        parse_positive(field, raw)
            .map(|_| ())
            .map_err(|e| e.to_string())
    };
    match prompter.input(prompt, &validate)? {
        Some(raw) => Ok(Some(parse_positive(field, &raw)?)),
        None => Ok(None),
    }
}
