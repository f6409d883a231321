use etf_sizer::cli::{run_flow, Answer, FlowError, FlowOutcome, ScriptedPrompter};
use etf_sizer::{Config, Decimal, Fund, PricingEngine};
use rust_decimal_macros::dec;

fn run(answers: Vec<Answer>) -> (Result<FlowOutcome, FlowError>, ScriptedPrompter) {
    let config = Config::default();
    let engine = PricingEngine::new(config.portfolio_divisor).unwrap();
    let mut prompter = ScriptedPrompter::new(answers);
    let outcome = run_flow(&mut prompter, &config, &engine);
    (outcome, prompter)
}

#[test]
fn test_single_tqqq_flow() {
    let (outcome, prompter) = run(vec![
        Answer::Choice(0),
        Answer::Choice(0),
        Answer::text("2000"),
        Answer::text("400"),
        Answer::text("380"),
    ]);

    let FlowOutcome::Completed(report) = outcome.unwrap() else {
        panic!("expected a completed flow");
    };
    assert_eq!(
        prompter.prompts(),
        [
            "Select investment type:",
            "Select TQQQ amount:",
            "Enter the cash balance amount:",
            "Enter the QQQ price:",
            "Enter the QQQ 200MA price:",
        ]
    );
    assert_eq!(report.cash_balance, Decimal::new(dec!(2000)));
    assert_eq!(report.portfolio_scale_factor, Decimal::one());
    assert_eq!(report.funds.len(), 1);
    assert_eq!(report.funds[0].result.fund, Fund::Tqqq);
    assert_eq!(report.funds[0].amount_used, Decimal::new(dec!(130)));

    let rendered = report.render();
    assert!(rendered.contains("=== Results ==="));
    assert!(rendered.contains("Cash Balance: $2,000.00"));
    assert!(rendered.contains("Portfolio Scale Factor: 1x"));
    assert!(rendered.contains("tqqq-investment investment amount: $102.92"));
    assert!(rendered.contains("TQQQ Amount Used: $130"));
}

#[test]
fn test_both_funds_flow_asks_in_order() {
    let (outcome, prompter) = run(vec![
        Answer::Choice(2),
        Answer::Choice(1),
        Answer::Choice(1),
        Answer::text("3200"),
        Answer::text("350"),
        Answer::text("380"),
        Answer::text("480"),
        Answer::text("480"),
    ]);

    let FlowOutcome::Completed(report) = outcome.unwrap() else {
        panic!("expected a completed flow");
    };
    assert_eq!(
        prompter.prompts(),
        [
            "Select investment type:",
            "Select TQQQ amount:",
            "Select UPRO amount:",
            "Enter the cash balance amount:",
            "Enter the QQQ price:",
            "Enter the QQQ 200MA price:",
            "Enter the VOO price:",
            "Enter the VOO 200MA price:",
        ]
    );
    assert_eq!(report.portfolio_scale_factor, Decimal::new(dec!(2)));

    let rendered = report.render();
    // 1000 * 2 * (1 + 5 * 30/380)
    assert!(rendered.contains("tqqq-investment investment amount: $2,789.47"));
    assert!(rendered.contains("TQQQ Amount Used: $1000"));
    // 750 * 2 * 1
    assert!(rendered.contains("upro-investment investment amount: $1,500.00"));
    assert!(rendered.contains("UPRO Amount Used: $750"));
    let tqqq_at = rendered.find("tqqq-investment").unwrap();
    let upro_at = rendered.find("upro-investment").unwrap();
    assert!(tqqq_at < upro_at);
}

#[test]
fn test_single_upro_flow_skips_tqqq_prompts() {
    let (outcome, prompter) = run(vec![
        Answer::Choice(1),
        Answer::Choice(0),
        Answer::text("500"),
        Answer::text("500"),
        Answer::text("500"),
    ]);

    let FlowOutcome::Completed(report) = outcome.unwrap() else {
        panic!("expected a completed flow");
    };
    assert!(prompter.prompts().iter().all(|p| !p.contains("QQQ ")));
    assert_eq!(report.funds[0].result.fund, Fund::Upro);
    assert_eq!(report.funds[0].result.final_investment, Decimal::new(dec!(70)));
}

#[test]
fn test_invalid_cash_balance_is_reasked() {
    let (outcome, prompter) = run(vec![
        Answer::Choice(0),
        Answer::Choice(0),
        Answer::text("-5"),
        Answer::text("abc"),
        Answer::text("2000"),
        Answer::text("400"),
        Answer::text("380"),
    ]);

    assert!(matches!(outcome.unwrap(), FlowOutcome::Completed(_)));
    assert_eq!(
        prompter.rejections(),
        [
            "Cash balance must be greater than 0",
            "Please enter a valid number",
        ]
    );
}

#[test]
fn test_invalid_moving_average_message_names_the_index() {
    let (outcome, prompter) = run(vec![
        Answer::Choice(1),
        Answer::Choice(0),
        Answer::text("2000"),
        Answer::text("480"),
        Answer::text("0"),
        Answer::text("470"),
    ]);

    assert!(matches!(outcome.unwrap(), FlowOutcome::Completed(_)));
    assert_eq!(prompter.rejections(), ["VOO 200MA price must be greater than 0"]);
}

#[test]
fn test_cancel_at_target_selection() {
    let (outcome, prompter) = run(vec![Answer::Cancel]);
    assert_eq!(outcome.unwrap(), FlowOutcome::Cancelled);
    assert_eq!(prompter.prompts().len(), 1);
}

#[test]
fn test_cancel_midway_computes_nothing() {
    let (outcome, prompter) = run(vec![
        Answer::Choice(2),
        Answer::Choice(0),
        Answer::Choice(0),
        Answer::text("2000"),
        Answer::text("400"),
        Answer::Cancel,
        Answer::text("never read"),
    ]);
    assert_eq!(outcome.unwrap(), FlowOutcome::Cancelled);
    assert_eq!(prompter.remaining(), 1);
}

#[test]
fn test_prompt_failure_is_an_error() {
    let (outcome, _) = run(vec![Answer::Choice(0)]);
    let err = outcome.unwrap_err();
    assert!(matches!(err, FlowError::Prompt(_)));
    assert!(err.to_string().contains("Select TQQQ amount:"));
}
