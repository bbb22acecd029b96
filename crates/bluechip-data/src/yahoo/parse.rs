//! Mapping of a Yahoo `quoteSummary` response onto a [`TickerRecord`].
//!
//! Yahoo wraps numbers as `{"raw": 0.0252, "fmt": "2.52%"}` and reports
//! absent values as `{}`. Only `raw` is read.

use crate::error::{DataError, Result};
use crate::record::TickerRecord;
use serde_json::Value;

/// Modules requested from `quoteSummary`.
pub const MODULES: &str = "price,assetProfile,summaryDetail,financialData,defaultKeyStatistics,incomeStatementHistory";

fn raw(module: Option<&Value>, field: &str) -> Option<f64> {
    let value = module?.get(field)?;
    value
        .get("raw")
        .and_then(Value::as_f64)
        .or_else(|| value.as_f64())
        .filter(|v| v.is_finite())
}

fn text(module: Option<&Value>, field: &str) -> Option<String> {
    module?
        .get(field)?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse a `quoteSummary` body for `symbol`.
///
/// Fails with [`DataError::SymbolNotFound`] when Yahoo reports the symbol as
/// unknown, and with [`DataError::MissingData`] when the response carries
/// neither a name nor a price.
pub fn parse_quote_summary(symbol: &str, body: &Value) -> Result<TickerRecord> {
    let summary = body
        .get("quoteSummary")
        .ok_or_else(|| DataError::Parse("missing quoteSummary".to_string()))?;

    if let Some(err) = summary.get("error").filter(|e| !e.is_null()) {
        let code = err.get("code").and_then(Value::as_str).unwrap_or_default();
        let description = err
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        if code.eq_ignore_ascii_case("Not Found") {
            return Err(DataError::SymbolNotFound(symbol.to_string()));
        }
        return Err(DataError::YahooApi(description.to_string()));
    }

    let result = summary
        .get("result")
        .and_then(Value::as_array)
        .and_then(|r| r.first())
        .ok_or_else(|| DataError::MissingData {
            symbol: symbol.to_string(),
            reason: "empty quoteSummary result".to_string(),
        })?;

    let price = result.get("price");
    let profile = result.get("assetProfile");
    let detail = result.get("summaryDetail");
    let financial = result.get("financialData");
    let stats = result.get("defaultKeyStatistics");
    let income = result
        .get("incomeStatementHistory")
        .and_then(|m| m.get("incomeStatementHistory"))
        .and_then(Value::as_array)
        .and_then(|statements| statements.first());

    let name = text(price, "shortName").or_else(|| text(price, "longName"));
    let last_price = raw(price, "regularMarketPrice").or_else(|| raw(financial, "currentPrice"));

    if name.is_none() && last_price.is_none() {
        return Err(DataError::MissingData {
            symbol: symbol.to_string(),
            reason: "response has neither name nor price".to_string(),
        });
    }

    let book_value_per_share = raw(stats, "bookValue");
    let total_equity = book_value_per_share
        .zip(raw(stats, "sharesOutstanding"))
        .map(|(book, shares)| book * shares);

    Ok(TickerRecord {
        symbol: symbol.to_string(),
        name,
        sector: text(profile, "sector"),
        industry: text(profile, "industry"),
        price: last_price,
        eps_ttm: raw(stats, "trailingEps"),
        dividend_per_share: raw(detail, "dividendRate")
            .or_else(|| raw(detail, "trailingAnnualDividendRate")),
        dividend_history: Vec::new(),
        book_value_per_share,
        total_debt: raw(financial, "totalDebt"),
        total_equity,
        ebit: raw(income, "ebit"),
        interest_expense: raw(income, "interestExpense"),
        return_on_assets: raw(financial, "returnOnAssets"),
        return_on_equity: raw(financial, "returnOnEquity"),
        profit_margin: raw(financial, "profitMargins"),
        current_ratio: raw(financial, "currentRatio"),
        earnings_growth: raw(financial, "earningsGrowth"),
        reported_dividend_yield: raw(detail, "dividendYield"),
        reported_payout_ratio: raw(detail, "payoutRatio"),
        reported_debt_to_equity: raw(financial, "debtToEquity"),
        trailing_pe: raw(detail, "trailingPE"),
        forward_pe: raw(detail, "forwardPE").or_else(|| raw(stats, "forwardPE")),
        price_to_book: raw(stats, "priceToBook"),
    })
}
