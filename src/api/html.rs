//! HTML pages for the calculator forms.
//!
//! Every value interpolated here is either a fixed label or a formatted
//! number, so no escaping is needed.

use crate::domain::{CalculationResult, Decimal, Fund};
use crate::format;
use std::fmt::Write as _;

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; max-width: 640px; margin: 40px auto; color: #222; }
        label { display: block; margin-top: 12px; }
        input, select { width: 100%; padding: 6px; box-sizing: border-box; }
        button { margin-top: 16px; padding: 8px 16px; }
        #result { margin-top: 24px; }
        nav a { margin-right: 12px; }
"#;

fn page(title: &str, form: &str, result: Option<&str>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <nav><a href="/">Both funds</a><a href="/single">Single fund</a></nav>
    <h1>{title}</h1>
{form}
    <div id="result">{result}</div>
</body>
</html>
"#,
        result = result.unwrap_or(""),
    )
}

fn number_field(name: &str, label: &str) -> String {
    format!(
        r#"        <label for="{name}">{label}</label>
        <input type="number" step="any" id="{name}" name="{name}" required>
"#,
    )
}

/// Form sizing TQQQ and UPRO from one cash balance.
pub fn both_funds_page(result: Option<&str>) -> String {
    let mut form = String::from(
        r#"    <form id="calculatorForm" method="post" action="/calculate/both">
"#,
    );
    form.push_str(&number_field("cashBalance", "Cash Balance"));
    for fund in Fund::ALL {
        let prefix = fund.ticker().to_lowercase();
        let underlying = fund.underlying_ticker();
        let underlying_prefix = underlying.to_lowercase();
        let _ = writeln!(form, "        <h3>{}</h3>", fund.title());
        form.push_str(&number_field(
            &format!("{}Price", prefix),
            &format!("{} Amount", fund.ticker()),
        ));
        form.push_str(&number_field(
            &format!("{}Price", underlying_prefix),
            &format!("{} Price", underlying),
        ));
        form.push_str(&number_field(
            &format!("{}200Ma", underlying_prefix),
            &format!("{} 200MA Price", underlying),
        ));
    }
    form.push_str("        <button type=\"submit\">Calculate</button>\n    </form>");
    page("Leveraged ETF Investment Calculator", &form, result)
}

/// Form sizing one fund chosen from a select box.
pub fn single_fund_page(result: Option<&str>) -> String {
    let mut form = String::from(
        r#"    <form id="calculatorForm" method="post" action="/calculate">
        <label for="investmentType">Investment Type</label>
        <select id="investmentType" name="investmentType">
"#,
    );
    for fund in Fund::ALL {
        let _ = writeln!(
            form,
            r#"            <option value="{}">{}</option>"#,
            fund.tag(),
            fund.title()
        );
    }
    form.push_str("        </select>\n");
    form.push_str(&number_field("assetPrice", "Asset Amount"));
    form.push_str(&number_field("cashBalance", "Cash Balance"));
    form.push_str(&number_field("underlyingPrice", "Underlying Price"));
    form.push_str(&number_field("underlying200Ma", "Underlying 200MA Price"));
    form.push_str("        <button type=\"submit\">Calculate</button>\n    </form>");
    page("Leveraged ETF Investment Calculator", &form, result)
}

pub fn error_block(message: &str) -> String {
    format!("<p>Error: {}</p>", message)
}

fn fund_section(out: &mut String, result: &CalculationResult) {
    let _ = writeln!(
        out,
        "<p><strong>Recommended Investment Amount:</strong> {}</p>",
        format::usd(result.final_investment)
    );
    let _ = writeln!(
        out,
        "<p><strong>{} Distance from 200MA:</strong> {}</p>",
        result.fund.underlying_ticker(),
        format::percent(result.distance)
    );
    let _ = writeln!(
        out,
        "<p><strong>Market Position:</strong> {}</p>",
        format::market_position(result)
    );
}

pub fn single_result_block(cash_balance: Decimal, result: &CalculationResult) -> String {
    let mut out = String::from("<h2>Results</h2>\n");
    let _ = writeln!(
        out,
        "<p><strong>Cash Balance:</strong> {}</p>",
        format::usd(cash_balance)
    );
    let _ = writeln!(out, "<p><strong>Investment Type:</strong> {}</p>", result.fund);
    let _ = writeln!(
        out,
        "<p><strong>Portfolio Scale Factor:</strong> {}</p>",
        format::scale_factor(result.portfolio_scale_factor)
    );
    fund_section(&mut out, result);
    out
}

pub fn both_results_block(cash_balance: Decimal, results: &[CalculationResult]) -> String {
    let mut out = String::from("<h2>Results</h2>\n");
    let _ = writeln!(
        out,
        "<p><strong>Cash Balance:</strong> {}</p>",
        format::usd(cash_balance)
    );
    if let Some(first) = results.first() {
        let _ = writeln!(
            out,
            "<p><strong>Portfolio Scale Factor:</strong> {}</p>",
            format::scale_factor(first.portfolio_scale_factor)
        );
    }
    for result in results {
        let _ = writeln!(out, "\n<h3>{}</h3>", result.fund.title());
        fund_section(&mut out, result);
    }
    out
}
