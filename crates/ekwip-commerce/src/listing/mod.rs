//! Catalogue listing module.
//!
//! Contains the filter criteria, the filter/sort engine, and the
//! pagination/facet types used by catalogue pages. Both storefront
//! surfaces (rental catalogue and boutique category pages) go through
//! the same engine.

mod criteria;
mod engine;
mod results;

pub use criteria::{FilterCriteria, PriceRange, SortKey};
pub use engine::{apply_filters_and_sort, attribute_facets, brand_facet};
pub use results::{paginate, Facet, FacetValue, ListingPage, Pagination};
