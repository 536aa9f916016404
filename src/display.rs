//! Text formatting used when rendering catalog records.

use crate::models::{CastMember, CatalogEntry};

pub const TOP_CAST: usize = 12;

/// `"2h 16m"`, `"45m"`, or `"N/A"` when unknown.
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        None | Some(0) => "N/A".to_string(),
        Some(m) if m >= 60 => format!("{}h {}m", m / 60, m % 60),
        Some(m) => format!("{m}m"),
    }
}

/// Whole US dollars with thousands separators.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_rating(vote_average: f64) -> String {
    if vote_average > 0.0 {
        format!("{vote_average:.1}")
    } else {
        "N/A".to_string()
    }
}

pub fn release_year(release_date: &str) -> String {
    match release_date.get(..4) {
        Some(year) if year.chars().all(|c| c.is_ascii_digit()) => year.to_string(),
        _ => "N/A".to_string(),
    }
}

pub fn results_summary(total_results: u64, search_query: &str) -> String {
    if search_query.is_empty() {
        format!("Showing {total_results} movies")
    } else {
        format!("Search results for \"{search_query}\" ({total_results} movies found)")
    }
}

/// One line per list entry: `Title (Year) ★ 7.5`.
pub fn summary_line<T: CatalogEntry>(entry: &T) -> String {
    format!(
        "{} ({}) ★ {}",
        entry.title(),
        release_year(entry.release_date()),
        format_rating(entry.vote_average())
    )
}

pub fn top_cast(cast: &[CastMember], limit: usize) -> &[CastMember] {
    &cast[..cast.len().min(limit)]
}
