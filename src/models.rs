use serde::{Deserialize, Deserializer, Serialize};

/// Accepts `null` wherever the catalog sometimes sends it for a field we
/// treat as always present.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of a discovery or search page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub adult: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub original_language: String,
    #[serde(default, deserialize_with = "nullable")]
    pub original_title: String,
    #[serde(default)]
    pub video: bool,
}

/// `GET /discover/movie` and `GET /search/movie` share this envelope.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GenreList {
    pub genres: Vec<Genre>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProductionCompany {
    pub id: i64,
    #[serde(default)]
    pub logo_path: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub origin_country: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SpokenLanguage {
    #[serde(default, deserialize_with = "nullable")]
    pub english_name: String,
    pub iso_639_1: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

/// The franchise a movie belongs to, when it has one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CollectionRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// Full record behind `GET /movie/{id}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "nullable")]
    pub budget: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub revenue: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub adult: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub original_language: String,
    #[serde(default, deserialize_with = "nullable")]
    pub original_title: String,
    #[serde(default)]
    pub video: bool,
    #[serde(default)]
    pub belongs_to_collection: Option<CollectionRef>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CastMember {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CrewMember {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub job: String,
    #[serde(default, deserialize_with = "nullable")]
    pub department: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// `GET /movie/{id}/credits`. Both lists keep the service's ordering.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credits {
    pub id: i64,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub key: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
    #[serde(default)]
    pub official: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub published_at: String,
}

impl Video {
    pub fn is_youtube_trailer(&self) -> bool {
        self.video_type == "Trailer" && self.site == "YouTube"
    }

    pub fn youtube_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.key)
    }
}

/// `GET /movie/{id}/videos`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VideoList {
    pub id: i64,
    #[serde(default)]
    pub results: Vec<Video>,
}

// Shared accessors for list entries and detail records
pub trait CatalogEntry {
    fn id(&self) -> i64;
    fn title(&self) -> &str;
    fn poster_path(&self) -> Option<&str>;
    fn backdrop_path(&self) -> Option<&str>;
    fn release_date(&self) -> &str;
    fn vote_average(&self) -> f64;
}

impl CatalogEntry for Movie {
    fn id(&self) -> i64 { self.id }
    fn title(&self) -> &str { &self.title }
    fn poster_path(&self) -> Option<&str> { self.poster_path.as_deref() }
    fn backdrop_path(&self) -> Option<&str> { self.backdrop_path.as_deref() }
    fn release_date(&self) -> &str { &self.release_date }
    fn vote_average(&self) -> f64 { self.vote_average }
}

impl CatalogEntry for MovieDetail {
    fn id(&self) -> i64 { self.id }
    fn title(&self) -> &str { &self.title }
    fn poster_path(&self) -> Option<&str> { self.poster_path.as_deref() }
    fn backdrop_path(&self) -> Option<&str> { self.backdrop_path.as_deref() }
    fn release_date(&self) -> &str { &self.release_date }
    fn vote_average(&self) -> f64 { self.vote_average }
}
