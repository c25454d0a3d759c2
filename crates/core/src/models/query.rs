/// Parameters of a price query.
///
/// `assets` holds asset NAMES in request order; a reduced (`as_of`) result
/// preserves that order. A complete `from`/`to` pair takes precedence over
/// `as_of`; a lone `from` or lone `to` is ignored entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceQuery {
    /// Requested asset names (required, non-empty)
    pub assets: Vec<String>,

    /// Exact-day filter, `YYYY-MM-DD`
    pub as_of: Option<String>,

    /// Inclusive range start, `YYYY-MM-DD`
    pub from: Option<String>,

    /// Inclusive range end, `YYYY-MM-DD`
    pub to: Option<String>,
}

impl PriceQuery {
    /// Query with no date filters.
    pub fn for_assets<I, S>(assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assets: assets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add an exact-day filter (latest-per-asset reduction applies).
    pub fn with_as_of(mut self, day: impl Into<String>) -> Self {
        self.as_of = Some(day.into());
        self
    }

    /// Add an inclusive date range filter.
    pub fn with_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }
}
