//! Query parameter types for API handlers.

use videostore_core::sort::VideoSort;

/// `GET /videos?sort=` parameters.
///
/// Built from the raw query pairs rather than a derived struct: a repeated
/// or unrecognized `sort` must fall back to the default ordering instead of
/// failing deserialization. The last `sort` value wins.
#[derive(Debug, Default)]
pub struct ListVideosParams {
    pub sort: Option<String>,
}

impl ListVideosParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let sort = pairs
            .into_iter()
            .filter(|(key, _)| key == "sort")
            .map(|(_, value)| value)
            .last();
        Self { sort }
    }

    pub fn sort(&self) -> VideoSort {
        VideoSort::from_param(self.sort.as_deref())
    }
}
