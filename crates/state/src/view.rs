//! The derived product view pipeline.
//!
//! A pure function from catalog + filter criteria to the ordered product
//! list a page should render. Stages apply in a fixed sequence - search,
//! category, brand, gender, sort - matching the storefront's behavior; the
//! order is part of the contract.

use std::sync::LazyLock;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use meena_core::{Gender, Product, Slug};

use crate::catalog::Catalog;
use crate::store::filter::{FilterState, SortKey};

/// Collator for the default name ordering. Arabic collation data is compiled
/// into the binary, so construction cannot fail for this locale.
static ARABIC_COLLATOR: LazyLock<Collator> = LazyLock::new(|| {
    Collator::try_new(&locale!("ar").into(), CollatorOptions::new())
        .expect("compiled Arabic collation data")
});

/// Page-local inputs that refine the shared filter state.
///
/// - `search`: the page's own search box; preferred over the store's query
///   when non-empty.
/// - `category`: a URL-derived category used only while the store's category
///   filter is wide open.
/// - `gender`: a fixed page audience (e.g., the women's watches page) applied
///   before the shared stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewOverrides<'a> {
    pub search: Option<&'a str>,
    pub category: Option<&'a Slug>,
    pub gender: Option<Gender>,
}

impl ViewOverrides<'_> {
    /// No overrides; the store's filter state alone drives the view.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            search: None,
            category: None,
            gender: None,
        }
    }
}

/// Derive the ordered product list for the current criteria.
///
/// Pure: the catalog and filter state are untouched, and the result is a
/// fresh list of product snapshots. An empty result is the valid "no
/// results" state, not an error.
#[must_use]
pub fn derive_view(
    catalog: &Catalog,
    filters: &FilterState,
    overrides: ViewOverrides<'_>,
) -> Vec<Product> {
    let mut result: Vec<Product> = catalog.products().to_vec();

    if let Some(audience) = overrides.gender {
        result.retain(|p| p.gender == audience);
    }

    let active_search = overrides
        .search
        .filter(|s| !s.is_empty())
        .unwrap_or(&filters.search_query);
    if !active_search.is_empty() {
        let query = active_search.to_lowercase();
        result.retain(|p| {
            p.name.to_lowercase().contains(&query)
                || p.name_ar.contains(&query)
                || p.brand.to_lowercase().contains(&query)
        });
    }

    // The store's category wins; the URL-derived one only applies while the
    // store filter is wide open.
    let active_category = filters.category.selected().or(overrides.category);
    if let Some(category) = active_category {
        result.retain(|p| &p.category == category);
    }

    if let Some(brand) = filters.brand.selected() {
        result.retain(|p| &p.brand_slug() == brand);
    }

    if let Some(gender) = filters.gender.selected() {
        result.retain(|p| &p.gender == gender);
    }

    match filters.sort_by {
        Some(SortKey::PriceAsc) => result.sort_by(|a, b| a.price.cmp(&b.price)),
        Some(SortKey::PriceDesc) => result.sort_by(|a, b| b.price.cmp(&a.price)),
        Some(SortKey::Rating) => result.sort_by(|a, b| b.rating.cmp(&a.rating)),
        Some(SortKey::Name) | None => {
            result.sort_by(|a, b| ARABIC_COLLATOR.compare(&a.name_ar, &b.name_ar));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::filter::Selection;
    use meena_core::{Price, ProductId};
    use rust_decimal::Decimal;

    fn product(id: &str, name: &str, name_ar: &str, brand: &str, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            name_ar: name_ar.to_owned(),
            brand: brand.to_owned(),
            category: Slug::raw("luxury"),
            gender: Gender::Men,
            price: Price::from(price),
            original_price: None,
            rating: Decimal::new(40, 1),
            reviews: 10,
            in_stock: true,
            image: String::new(),
            description: String::new(),
            features: vec![],
            is_new: None,
        }
    }

    fn catalog() -> Catalog {
        // Arabic names chosen so collation order (alef, ba, jim) differs
        // from both id order and price order.
        let mut c = product("c", "Carrera", "جيم", "TAG Heuer", 300);
        c.category = Slug::raw("sport");
        c.gender = Gender::Women;
        let mut b = product("b", "Beta", "با", "Omega", 100);
        b.rating = Decimal::new(49, 1);
        let a = product("a", "Alpha", "ألف", "Rolex", 200);
        Catalog::new(vec![c, b, a], vec![], vec![]).expect("valid catalog")
    }

    #[test]
    fn test_open_filters_return_full_catalog_in_name_order() {
        let catalog = catalog();
        let view = derive_view(&catalog, &FilterState::default(), ViewOverrides::none());

        let names: Vec<&str> = view.iter().map(|p| p.name_ar.as_str()).collect();
        assert_eq!(view.len(), 3);
        assert_eq!(names, vec!["ألف", "با", "جيم"]);
    }

    #[test]
    fn test_price_ascending_sort() {
        let catalog = catalog();
        let filters = FilterState {
            sort_by: Some(SortKey::PriceAsc),
            ..FilterState::default()
        };

        let view = derive_view(&catalog, &filters, ViewOverrides::none());
        let prices: Vec<Price> = view.iter().map(|p| p.price).collect();
        assert_eq!(
            prices,
            vec![Price::from(100), Price::from(200), Price::from(300)]
        );
    }

    #[test]
    fn test_price_descending_sort() {
        let catalog = catalog();
        let filters = FilterState {
            sort_by: Some(SortKey::PriceDesc),
            ..FilterState::default()
        };

        let view = derive_view(&catalog, &filters, ViewOverrides::none());
        let prices: Vec<Price> = view.iter().map(|p| p.price).collect();
        assert_eq!(
            prices,
            vec![Price::from(300), Price::from(200), Price::from(100)]
        );
    }

    #[test]
    fn test_rating_sorts_descending() {
        let catalog = catalog();
        let filters = FilterState {
            sort_by: Some(SortKey::Rating),
            ..FilterState::default()
        };

        let view = derive_view(&catalog, &filters, ViewOverrides::none());
        assert_eq!(view.first().map(|p| p.id.as_str()), Some("b"));
    }

    #[test]
    fn test_unknown_brand_slug_yields_empty_view() {
        let catalog = catalog();
        let filters = FilterState {
            brand: Selection::Only(Slug::raw("patek-philippe")),
            ..FilterState::default()
        };

        let view = derive_view(&catalog, &filters, ViewOverrides::none());
        assert!(view.is_empty());
    }

    #[test]
    fn test_brand_filter_matches_slugged_brand_name() {
        let catalog = catalog();
        let filters = FilterState {
            brand: Selection::Only(Slug::raw("tag-heuer")),
            ..FilterState::default()
        };

        let view = derive_view(&catalog, &filters, ViewOverrides::none());
        assert_eq!(view.len(), 1);
        assert_eq!(view.first().map(|p| p.brand.as_str()), Some("TAG Heuer"));
    }

    #[test]
    fn test_search_matches_arabic_name_only() {
        let catalog = catalog();
        let filters = FilterState {
            search_query: "جيم".to_owned(),
            ..FilterState::default()
        };

        let view = derive_view(&catalog, &filters, ViewOverrides::none());
        assert_eq!(view.len(), 1);
        assert_eq!(view.first().map(|p| p.id.as_str()), Some("c"));
    }

    #[test]
    fn test_search_is_case_insensitive_on_brand() {
        let catalog = catalog();
        let filters = FilterState {
            search_query: "ROLEX".to_owned(),
            ..FilterState::default()
        };

        let view = derive_view(&catalog, &filters, ViewOverrides::none());
        assert_eq!(view.len(), 1);
        assert_eq!(view.first().map(|p| p.id.as_str()), Some("a"));
    }

    #[test]
    fn test_local_search_override_wins_over_store_query() {
        let catalog = catalog();
        let filters = FilterState {
            search_query: "rolex".to_owned(),
            ..FilterState::default()
        };

        let overrides = ViewOverrides {
            search: Some("omega"),
            ..ViewOverrides::none()
        };
        let view = derive_view(&catalog, &filters, overrides);
        assert_eq!(view.first().map(|p| p.id.as_str()), Some("b"));
    }

    #[test]
    fn test_empty_local_search_falls_back_to_store_query() {
        let catalog = catalog();
        let filters = FilterState {
            search_query: "rolex".to_owned(),
            ..FilterState::default()
        };

        let overrides = ViewOverrides {
            search: Some(""),
            ..ViewOverrides::none()
        };
        let view = derive_view(&catalog, &filters, overrides);
        assert_eq!(view.first().map(|p| p.id.as_str()), Some("a"));
    }

    #[test]
    fn test_url_category_applies_only_while_store_is_all() {
        let catalog = catalog();
        let sport = Slug::raw("sport");

        let overrides = ViewOverrides {
            category: Some(&sport),
            ..ViewOverrides::none()
        };
        let view = derive_view(&catalog, &FilterState::default(), overrides);
        assert_eq!(view.len(), 1);
        assert_eq!(view.first().map(|p| p.id.as_str()), Some("c"));

        // Once the store narrows, the URL category is ignored.
        let filters = FilterState {
            category: Selection::Only(Slug::raw("luxury")),
            ..FilterState::default()
        };
        let view = derive_view(&catalog, &filters, overrides);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_gender_override_narrows_before_other_stages() {
        let catalog = catalog();
        let overrides = ViewOverrides {
            gender: Some(Gender::Women),
            ..ViewOverrides::none()
        };

        let view = derive_view(&catalog, &FilterState::default(), overrides);
        assert_eq!(view.len(), 1);
        assert_eq!(view.first().map(|p| p.id.as_str()), Some("c"));
    }

    #[test]
    fn test_gender_filter_from_store() {
        let catalog = catalog();
        let filters = FilterState {
            gender: Selection::Only(Gender::Women),
            ..FilterState::default()
        };

        let view = derive_view(&catalog, &filters, ViewOverrides::none());
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_pipeline_leaves_inputs_untouched() {
        let catalog = catalog();
        let filters = FilterState::default();
        let before = catalog.products().to_vec();

        let _ = derive_view(&catalog, &filters, ViewOverrides::none());
        assert_eq!(catalog.products(), before.as_slice());
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_everything_filtered_out_is_empty_not_error() {
        let catalog = catalog();
        let filters = FilterState {
            search_query: "no such watch".to_owned(),
            ..FilterState::default()
        };

        let view = derive_view(&catalog, &filters, ViewOverrides::none());
        assert!(view.is_empty());
    }
}
