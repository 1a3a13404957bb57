//! BDR universe helpers: suffix classification and US-ticker conversion

/// Numeric suffixes that mark a B3 ticker as a depositary receipt.
const BDR_SUFFIXES: &[&str] = &["31", "32", "33", "34", "35", "39"];

/// Static BDR ↔ US ticker pairs for the liquid names; conversion falls back
/// to stripping the numeric suffix for anything not listed.
const BDR_US_MAP: &[(&str, &str)] = &[
    ("AAPL", "AAPL34"),
    ("MSFT", "MSFT34"),
    ("GOOGL", "GOGL34"),
    ("AMZN", "AMZO34"),
    ("NVDA", "NVDC34"),
    ("TSLA", "TSLA34"),
    ("META", "FBOK34"),
    ("NFLX", "NFLX34"),
    ("AMD", "A1MD34"),
    ("INTC", "ITLC34"),
    ("JPM", "JPMC34"),
    ("BAC", "BOAC34"),
    ("WMT", "WALM34"),
    ("KO", "COCA34"),
    ("PEP", "PEPB34"),
    ("JNJ", "JNJB34"),
    ("DIS", "DISB34"),
    ("PFE", "PFIZ34"),
    ("XOM", "EXXO34"),
    ("CVX", "CHVX34"),
    ("PG", "PGCO34"),
    ("V", "VISA34"),
    ("MA", "MSCD34"),
    ("MCD", "MCDC34"),
    ("ABBV", "ABBV34"),
    ("MRK", "MRCK34"),
    ("CRM", "SACM34"),
    ("ORCL", "ORCL34"),
    ("AVGO", "AVGO34"),
    ("CSCO", "CSCO34"),
    ("ACN", "ACNB34"),
    ("ADBE", "ADBE34"),
    ("QCOM", "QCOM34"),
    ("TXN", "TEXA34"),
    ("HON", "HONB34"),
    ("UNH", "UNHH34"),
];

fn strip_exchange_suffix(ticker: &str) -> &str {
    ticker.strip_suffix(".SA").unwrap_or(ticker)
}

/// True when the ticker carries one of the BDR numeric suffixes.
pub fn is_bdr_ticker(ticker: &str) -> bool {
    let ticker = strip_exchange_suffix(ticker);
    BDR_SUFFIXES.iter().any(|suffix| ticker.ends_with(suffix))
}

/// Keep only BDR tickers, dropping duplicates while preserving order.
pub fn filter_bdr_universe<I, S>(tickers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for ticker in tickers {
        let ticker = strip_exchange_suffix(ticker.as_ref());
        if is_bdr_ticker(ticker) && seen.insert(ticker.to_string()) {
            out.push(ticker.to_string());
        }
    }
    out
}

/// Map a BDR ticker to its US listing, via the static table first and a
/// strip-the-digits fallback otherwise.
pub fn to_us_ticker(bdr: &str) -> Option<String> {
    let bdr = strip_exchange_suffix(bdr);
    if let Some((us, _)) = BDR_US_MAP.iter().find(|(_, mapped)| *mapped == bdr) {
        return Some((*us).to_string());
    }
    let stripped = bdr.trim_end_matches(|c: char| c.is_ascii_digit());
    if stripped.is_empty() || stripped == bdr {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Map a US ticker to its BDR listing, when the static table knows it.
pub fn to_bdr_ticker(us: &str) -> Option<&'static str> {
    BDR_US_MAP
        .iter()
        .find(|(mapped, _)| *mapped == us)
        .map(|(_, bdr)| *bdr)
}
