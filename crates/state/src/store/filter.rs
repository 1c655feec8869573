//! The product filter store.
//!
//! Pure selection criteria over the catalog; the store owns no product data.

use meena_core::{Gender, Slug};

use super::Reduce;

/// A filter dimension that is either wide open or narrowed to one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

// Manual impl: the derive would demand `T: Default`, which slugs and gender
// tags have no use for.
impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> Selection<T> {
    /// The narrowed value, if any.
    pub const fn selected(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Sort order for the derived product view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by Arabic name under Arabic collation. Also the behavior
    /// when no sort key is set.
    Name,
    /// Ascending numeric price.
    PriceAsc,
    /// Descending numeric price.
    PriceDesc,
    /// Descending rating.
    Rating,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "rating" => Ok(Self::Rating),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Active filter criteria. `Default` is the documented reset target: empty
/// search, everything `All`, no sort key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_query: String,
    pub category: Selection<Slug>,
    pub brand: Selection<Slug>,
    pub gender: Selection<Gender>,
    /// `None` sorts like [`SortKey::Name`].
    pub sort_by: Option<SortKey>,
}

/// Filter intents: plain field setters plus a one-step reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    SetSearchQuery(String),
    SetCategory(Selection<Slug>),
    SetBrand(Selection<Slug>),
    SetGender(Selection<Gender>),
    SetSortBy(Option<SortKey>),
    /// Restore every field to its default in a single transition.
    Reset,
}

impl Reduce for FilterState {
    type Action = FilterAction;

    fn reduce(mut self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetSearchQuery(query) => self.search_query = query,
            FilterAction::SetCategory(category) => self.category = category,
            FilterAction::SetBrand(brand) => self.brand = brand,
            FilterAction::SetGender(gender) => self.gender = gender,
            FilterAction::SetSortBy(sort_by) => self.sort_by = sort_by,
            FilterAction::Reset => return Self::default(),
        }
        self
    }
}

/// Owning handle for the filter state.
#[derive(Debug, Default)]
pub struct FilterStore {
    state: FilterState,
}

impl FilterStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action to the filters.
    pub fn dispatch(&mut self, action: FilterAction) {
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.dispatch(FilterAction::SetSearchQuery(query.into()));
    }

    pub fn set_category(&mut self, category: Selection<Slug>) {
        self.dispatch(FilterAction::SetCategory(category));
    }

    pub fn set_brand(&mut self, brand: Selection<Slug>) {
        self.dispatch(FilterAction::SetBrand(brand));
    }

    pub fn set_gender(&mut self, gender: Selection<Gender>) {
        self.dispatch(FilterAction::SetGender(gender));
    }

    pub fn set_sort_by(&mut self, sort_by: Option<SortKey>) {
        self.dispatch(FilterAction::SetSortBy(sort_by));
    }

    /// Restore all criteria to their defaults atomically.
    pub fn reset(&mut self) {
        tracing::debug!("Resetting filters");
        self.dispatch(FilterAction::Reset);
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }
}
