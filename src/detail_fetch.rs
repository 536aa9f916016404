//! Detail, credits and videos fetched together as one unit.

use crate::catalog_client::CatalogApi;
use crate::error::Result;
use crate::models::{CastMember, CrewMember, MovieDetail, Video};

/// Everything the detail view shows for one movie.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailBundle {
    pub detail: MovieDetail,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub videos: Vec<Video>,
}

/// Issues the three requests concurrently and waits for all of them to
/// settle. Any failure fails the whole bundle; the first error in
/// detail, credits, videos order is returned.
pub async fn fetch_detail_bundle(api: &dyn CatalogApi, id: i64) -> Result<DetailBundle> {
    let (detail, credits, videos) = tokio::join!(
        api.get_movie_detail(id),
        api.get_movie_credits(id),
        api.get_movie_videos(id)
    );

    if let Err(e) = &detail {
        tracing::debug!(movie_id = id, kind = e.kind(), "Movie detail request failed");
    }
    if let Err(e) = &credits {
        tracing::debug!(movie_id = id, kind = e.kind(), "Movie credits request failed");
    }
    if let Err(e) = &videos {
        tracing::debug!(movie_id = id, kind = e.kind(), "Movie videos request failed");
    }

    let detail = detail?;
    let credits = credits?;
    let videos = videos?;

    Ok(DetailBundle {
        detail,
        cast: credits.cast,
        crew: credits.crew,
        videos,
    })
}

/// First official YouTube trailer, else the first YouTube trailer.
/// Trailers hosted elsewhere are never picked.
pub fn select_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|v| v.is_youtube_trailer() && v.official)
        .or_else(|| videos.iter().find(|v| v.is_youtube_trailer()))
}
