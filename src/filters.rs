//! The user's discovery filters.
//!
//! Updating a field never triggers a fetch on its own; the store decides when
//! to re-query with the new snapshot.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Sort orders accepted by `/discover/movie`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    #[serde(rename = "popularity.desc")]
    PopularityDesc,
    #[serde(rename = "popularity.asc")]
    PopularityAsc,
    #[serde(rename = "vote_average.desc")]
    VoteAverageDesc,
    #[serde(rename = "vote_average.asc")]
    VoteAverageAsc,
    #[serde(rename = "release_date.desc")]
    ReleaseDateDesc,
    #[serde(rename = "release_date.asc")]
    ReleaseDateAsc,
    #[serde(rename = "title.asc")]
    TitleAsc,
    #[serde(rename = "title.desc")]
    TitleDesc,
}

impl SortBy {
    pub const ALL: [SortBy; 8] = [
        SortBy::PopularityDesc,
        SortBy::PopularityAsc,
        SortBy::VoteAverageDesc,
        SortBy::VoteAverageAsc,
        SortBy::ReleaseDateDesc,
        SortBy::ReleaseDateAsc,
        SortBy::TitleAsc,
        SortBy::TitleDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::PopularityDesc => "popularity.desc",
            SortBy::PopularityAsc => "popularity.asc",
            SortBy::VoteAverageDesc => "vote_average.desc",
            SortBy::VoteAverageAsc => "vote_average.asc",
            SortBy::ReleaseDateDesc => "release_date.desc",
            SortBy::ReleaseDateAsc => "release_date.asc",
            SortBy::TitleAsc => "title.asc",
            SortBy::TitleDesc => "title.desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::PopularityDesc => "Most Popular",
            SortBy::PopularityAsc => "Least Popular",
            SortBy::VoteAverageDesc => "Highest Rated",
            SortBy::VoteAverageAsc => "Lowest Rated",
            SortBy::ReleaseDateDesc => "Newest First",
            SortBy::ReleaseDateAsc => "Oldest First",
            SortBy::TitleAsc => "A-Z",
            SortBy::TitleDesc => "Z-A",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| format!("unknown sort key '{s}'"))
    }
}

/// Genre ids offered by the genre picker, with their display names.
pub const GENRE_OPTIONS: &[(&str, &str)] = &[
    ("28", "Action"),
    ("12", "Adventure"),
    ("16", "Animation"),
    ("35", "Comedy"),
    ("80", "Crime"),
    ("99", "Documentary"),
    ("18", "Drama"),
    ("10751", "Family"),
    ("14", "Fantasy"),
    ("36", "History"),
    ("27", "Horror"),
    ("10402", "Music"),
    ("9648", "Mystery"),
    ("10749", "Romance"),
    ("878", "Science Fiction"),
    ("10770", "TV Movie"),
    ("53", "Thriller"),
    ("10752", "War"),
    ("37", "Western"),
];

pub fn genre_label(code: &str) -> Option<&'static str> {
    GENRE_OPTIONS
        .iter()
        .find(|(id, _)| *id == code)
        .map(|(_, name)| *name)
}

/// The thirty most recent release years, newest first.
pub fn year_options(latest: i32) -> Vec<String> {
    (0..30).map(|i| (latest - i).to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Genre id, empty when unfiltered.
    pub genre: String,
    /// Four-digit release year, empty when unfiltered.
    pub year: String,
    /// Not applied to any query yet.
    pub rating: String,
    pub sort_by: SortBy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Genre(String),
    Year(String),
    Rating(String),
    SortBy(SortBy),
}

/// Partial overwrite; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub genre: Option<String>,
    pub year: Option<String>,
    pub rating: Option<String>,
    pub sort_by: Option<SortBy>,
}

impl FilterState {
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Genre(genre) => self.genre = genre,
            FilterUpdate::Year(year) => self.year = year,
            FilterUpdate::Rating(rating) => self.rating = rating,
            FilterUpdate::SortBy(sort_by) => self.sort_by = sort_by,
        }
    }

    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    /// Whether the "clear filters" affordance should be offered.
    pub fn has_active(&self, search_query: &str) -> bool {
        !self.genre.is_empty()
            || !self.year.is_empty()
            || self.sort_by != SortBy::default()
            || !search_query.is_empty()
    }
}

fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}$").expect("static year pattern"))
}

/// Query parameters of a discovery fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscoverFilters {
    pub genre: Option<String>,
    pub year: Option<String>,
    pub sort_by: SortBy,
}

impl DiscoverFilters {
    /// Empty fields mean unfiltered. A year that is not four digits is dropped.
    pub fn from_state(state: &FilterState) -> Self {
        let genre = Some(state.genre.trim())
            .filter(|g| !g.is_empty())
            .map(str::to_string);

        let year = match state.year.trim() {
            "" => None,
            y if year_pattern().is_match(y) => Some(y.to_string()),
            y => {
                tracing::warn!(year = %y, "Ignoring malformed release year filter");
                None
            }
        };

        Self {
            genre,
            year,
            sort_by: state.sort_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unfiltered_popularity_desc() {
        let state = FilterState::default();
        assert_eq!(state.genre, "");
        assert_eq!(state.year, "");
        assert_eq!(state.rating, "");
        assert_eq!(state.sort_by.as_str(), "popularity.desc");
    }

    #[test]
    fn clear_restores_defaults() {
        let mut state = FilterState::default();
        state.apply(FilterUpdate::Genre("28".into()));
        state.apply(FilterUpdate::Year("1999".into()));
        state.apply(FilterUpdate::Rating("7".into()));
        state.apply(FilterUpdate::SortBy(SortBy::TitleAsc));
        assert!(state.has_active(""));

        state.clear();
        assert_eq!(state, FilterState::default());
        assert!(!state.has_active(""));
    }

    #[test]
    fn merge_only_touches_given_fields() {
        let mut state = FilterState {
            genre: "18".into(),
            year: "2001".into(),
            rating: String::new(),
            sort_by: SortBy::VoteAverageDesc,
        };
        state.merge(FilterPatch {
            year: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(state.genre, "18");
        assert_eq!(state.year, "");
        assert_eq!(state.sort_by, SortBy::VoteAverageDesc);
    }

    #[test]
    fn search_query_alone_counts_as_active() {
        assert!(FilterState::default().has_active("matrix"));
    }

    #[test]
    fn sort_keys_round_trip_through_strings() {
        for sort in SortBy::ALL {
            assert_eq!(sort.as_str().parse::<SortBy>().unwrap(), sort);
        }
        assert!("rating.desc".parse::<SortBy>().is_err());
    }

    #[test]
    fn discover_filters_drop_empty_and_malformed_values() {
        let state = FilterState {
            genre: " ".into(),
            year: "99".into(),
            rating: String::new(),
            sort_by: SortBy::ReleaseDateAsc,
        };
        let filters = DiscoverFilters::from_state(&state);
        assert_eq!(filters.genre, None);
        assert_eq!(filters.year, None);
        assert_eq!(filters.sort_by, SortBy::ReleaseDateAsc);

        let state = FilterState {
            genre: "878".into(),
            year: "2010".into(),
            ..Default::default()
        };
        let filters = DiscoverFilters::from_state(&state);
        assert_eq!(filters.genre.as_deref(), Some("878"));
        assert_eq!(filters.year.as_deref(), Some("2010"));
    }

    #[test]
    fn genre_and_year_pickers() {
        assert_eq!(genre_label("878"), Some("Science Fiction"));
        assert_eq!(genre_label("1"), None);
        let years = year_options(2026);
        assert_eq!(years.len(), 30);
        assert_eq!(years.first().map(String::as_str), Some("2026"));
        assert_eq!(years.last().map(String::as_str), Some("1997"));
    }

    #[test]
    fn every_sort_key_has_a_distinct_label() {
        let labels: std::collections::HashSet<_> = SortBy::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels.len(), SortBy::ALL.len());
        assert_eq!(SortBy::default().label(), "Most Popular");
        assert_eq!(SortBy::TitleDesc.label(), "Z-A");
    }
}
