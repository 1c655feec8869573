//! Cross-store integration tests for the Meena state core.
//!
//! Unit tests live in `#[cfg(test)]` modules next to each store; the tests
//! in this crate drive whole flows through [`meena_state::AppState`] against
//! a realistic catalog fixture, the way the storefront pages do.
//!
//! # Test Categories
//!
//! - `product_views` - The filter/sort pipeline over the fixture catalog
//! - `store_flows` - Cart/wishlist flows the pages compose
//! - `theme_lifecycle` - Theme initialization and persistence ordering

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::RefCell;
use std::rc::Rc;

use meena_state::{AppState, Catalog, MemoryPreferences, PreferenceStore};

/// A small but representative catalog: three brands (one with a space in the
/// name), two categories, both genders, one item on sale and one out of
/// stock.
pub const CATALOG_JSON: &str = r#"{
    "products": [
        {
            "id": "rlx-submariner",
            "name": "Submariner Date",
            "nameAr": "صبمارينر ديت",
            "brand": "Rolex",
            "category": "luxury",
            "gender": "men",
            "price": 42000,
            "rating": 4.9,
            "reviews": 310,
            "inStock": true,
            "image": "/images/submariner.webp",
            "description": "Diver's classic.",
            "features": ["Ceramic bezel", "300m water resistance"]
        },
        {
            "id": "omg-aqua-terra",
            "name": "Aqua Terra",
            "nameAr": "أكوا تيرا",
            "brand": "Omega",
            "category": "classic",
            "gender": "women",
            "price": 18500,
            "originalPrice": 21000,
            "rating": 4.7,
            "reviews": 140,
            "inStock": true,
            "image": "/images/aqua-terra.webp",
            "description": "Everyday elegance.",
            "isNew": true
        },
        {
            "id": "tag-carrera",
            "name": "Carrera Chronograph",
            "nameAr": "كاريرا كرونوغراف",
            "brand": "TAG Heuer",
            "category": "sport",
            "gender": "men",
            "price": 9800,
            "rating": 4.5,
            "reviews": 95,
            "inStock": false,
            "image": "/images/carrera.webp",
            "description": "Racing heritage."
        },
        {
            "id": "omg-constellation",
            "name": "Constellation",
            "nameAr": "كونستليشن",
            "brand": "Omega",
            "category": "luxury",
            "gender": "women",
            "price": 26500,
            "rating": 4.8,
            "reviews": 75,
            "inStock": true,
            "image": "/images/constellation.webp",
            "description": "Star of the lineup."
        }
    ],
    "categories": [
        { "id": "1", "slug": "luxury", "nameAr": "فاخرة" },
        { "id": "2", "slug": "classic", "nameAr": "كلاسيكية" },
        { "id": "3", "slug": "sport", "nameAr": "رياضية" }
    ],
    "brands": [
        { "id": "rolex", "name": "Rolex" },
        { "id": "omega", "name": "Omega" },
        { "id": "tag-heuer", "name": "TAG Heuer" }
    ]
}"#;

/// Parse the fixture catalog.
///
/// # Panics
///
/// Panics if the embedded fixture is invalid; that is a bug in the fixture.
#[must_use]
pub fn fixture_catalog() -> Catalog {
    Catalog::from_json(CATALOG_JSON).expect("fixture catalog is valid")
}

/// Write counter shared with a [`CountingPreferences`].
pub type WriteLog = Rc<RefCell<Vec<(String, String)>>>;

/// Preference store that records every write, for asserting persistence
/// ordering and counts.
#[derive(Debug, Default)]
pub struct CountingPreferences {
    inner: MemoryPreferences,
    writes: WriteLog,
}

impl CountingPreferences {
    #[must_use]
    pub fn new() -> (Self, WriteLog) {
        let writes = WriteLog::default();
        (
            Self {
                inner: MemoryPreferences::new(),
                writes: Rc::clone(&writes),
            },
            writes,
        )
    }

    /// Pre-seed a persisted value.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.inner.set(key, value);
    }
}

impl PreferenceStore for CountingPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes
            .borrow_mut()
            .push((key.to_owned(), value.to_owned()));
        self.inner.set(key, value);
    }
}

/// An [`AppState`] over the fixture catalog with in-memory collaborators.
#[must_use]
pub fn fixture_app() -> AppState {
    AppState::new(
        fixture_catalog(),
        Box::new(MemoryPreferences::new()),
        Box::new(|| None::<bool>),
    )
}
