//! Ordering options for the video listing.

/// How `GET /videos` orders its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VideoSort {
    /// Ascending by identifier, i.e. creation order.
    #[default]
    Id,
    /// Ascending lexicographic by title.
    Title,
    /// Ascending chronological by release date.
    ReleaseDate,
}

impl VideoSort {
    /// Map a `?sort=` value to an ordering.
    ///
    /// Unrecognized or missing values fall back to [`VideoSort::Id`] rather
    /// than being rejected.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some("title") => Self::Title,
            Some("release_date") => Self::ReleaseDate,
            _ => Self::Id,
        }
    }

    /// The `ORDER BY` clause for this ordering. Ties break on `id`.
    ///
    /// Titles compare byte-wise under the `"C"` collation so the order does
    /// not depend on the database's locale.
    pub fn order_by(self) -> &'static str {
        match self {
            Self::Id => "id ASC",
            Self::Title => "title COLLATE \"C\" ASC, id ASC",
            Self::ReleaseDate => "release_date ASC, id ASC",
        }
    }
}
