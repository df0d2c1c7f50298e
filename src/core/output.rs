//! JSON output with mandatory non-finite float sanitisation

use std::io::Write;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::models::report::MarketReport;

/// Convert any serialisable tree into a JSON value with every NaN/±Inf as null.
///
/// The conversion goes through `serde_json::Value`, whose number type cannot
/// hold non-finite floats, so every such position becomes `Value::Null` and
/// every other value is carried over unchanged.
pub fn sanitize<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Sanitised, pretty-printed JSON document
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let sanitized = sanitize(value)?;
    Ok(serde_json::to_string_pretty(&sanitized)?)
}

/// Write the sanitised report to `writer`
pub fn write_report<W: Write>(mut writer: W, report: &MarketReport) -> Result<()> {
    let json = to_json_string(report)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(
        bytes = json.len(),
        nifty_50 = report.nifty_50.len(),
        us_stocks = report.us_stocks.len(),
        crypto = report.crypto.len(),
        news = report.news.len(),
        "Report written"
    );
    Ok(())
}
