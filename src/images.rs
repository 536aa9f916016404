//! Image URL construction for posters, backdrops and profile photos.

use crate::config::DEFAULT_IMAGE_BASE_URL;

/// Which placeholder to fall back to when the catalog has no image path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Poster,
    Backdrop,
    Profile,
}

impl ImageKind {
    pub fn placeholder(self) -> &'static str {
        match self {
            ImageKind::Poster => "/placeholder-movie.svg",
            ImageKind::Backdrop => "/placeholder-backdrop.svg",
            ImageKind::Profile => "/placeholder-person.svg",
        }
    }

    /// Size token used when the caller has no preference.
    pub fn default_size(self) -> &'static str {
        match self {
            ImageKind::Poster => "w500",
            ImageKind::Backdrop => "w1280",
            ImageKind::Profile => "w185",
        }
    }
}

/// `{image_host}/{size}{path}`, or the kind's placeholder when `path` is absent.
///
/// Paths supplied by the catalog already start with `/`.
pub fn resolve_image_url(image_host: &str, path: Option<&str>, size: &str, kind: ImageKind) -> String {
    match path.filter(|p| !p.is_empty()) {
        Some(path) => format!("{}/{}{}", image_host.trim_end_matches('/'), size, path),
        None => kind.placeholder().to_string(),
    }
}

/// Same as [`resolve_image_url`] against the public image host.
pub fn default_image_url(path: Option<&str>, kind: ImageKind) -> String {
    resolve_image_url(DEFAULT_IMAGE_BASE_URL, path, kind.default_size(), kind)
}
