//! Catalogue service.
//!
//! The single integration point for both storefront surfaces (rental
//! catalogue and boutique category pages): scoping, filtering, facets,
//! and pagination all happen here.

use crate::error::StoreError;
use crate::repository::{
    AttributeRepository, BrandRepository, CategoryRepository, ProductRepository,
};
use ekwip_commerce::catalog::{Category, Product, ProductKind, ProductStatus};
use ekwip_commerce::ids::CategoryId;
use ekwip_commerce::listing::{
    apply_filters_and_sort, attribute_facets, brand_facet, paginate, Facet, FilterCriteria,
    ListingPage, SortKey,
};
use std::sync::Arc;
use tracing::debug;

/// Parameters for one catalogue listing page.
#[derive(Debug, Clone)]
pub struct ListingRequest {
    /// Which side of the business is being browsed.
    pub kind: ProductKind,
    /// Restrict to one category (None = whole catalogue).
    pub category: Option<CategoryId>,
    /// User-selected filters.
    pub criteria: FilterCriteria,
    /// Sort order.
    pub sort: SortKey,
    /// Page number (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl ListingRequest {
    /// Create a request with default paging and no filters.
    pub fn new(kind: ProductKind) -> Self {
        Self {
            kind,
            category: None,
            criteria: FilterCriteria::new(),
            sort: SortKey::default(),
            page: 1,
            per_page: 24,
        }
    }

    /// Restrict to a category.
    pub fn in_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the filter criteria.
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Set the sort order.
    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }
}

/// Read-side service for catalogue pages.
pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
    brands: Arc<dyn BrandRepository>,
    categories: Arc<dyn CategoryRepository>,
    attributes: Arc<dyn AttributeRepository>,
}

impl CatalogService {
    /// Create a catalogue service over the given repositories.
    pub fn new(
        products: Arc<dyn ProductRepository>,
        brands: Arc<dyn BrandRepository>,
        categories: Arc<dyn CategoryRepository>,
        attributes: Arc<dyn AttributeRepository>,
    ) -> Self {
        Self {
            products,
            brands,
            categories,
            attributes,
        }
    }

    /// Produce one page of a catalogue listing.
    ///
    /// Only active products of the requested kind are eligible; this
    /// scoping is unconditional and happens before the user-selected
    /// filters. Facet counts are computed over the scoped set, so the
    /// sidebar keeps showing the full per-category counts while filters
    /// narrow the grid.
    pub fn listing(&self, request: &ListingRequest) -> Result<ListingPage<Product>, StoreError> {
        let scoped: Vec<Product> = self
            .products
            .list()?
            .into_iter()
            .filter(|p| p.status == ProductStatus::Active && p.kind == request.kind)
            .filter(|p| {
                request
                    .category
                    .as_ref()
                    .map_or(true, |c| &p.category_id == c)
            })
            .collect();

        let mut facets: Vec<Facet> = Vec::new();
        let brands = self.brands.list()?;
        facets.push(brand_facet(&scoped, &brands, &request.criteria));
        if let Some(category) = &request.category {
            let definitions = self.attributes.list_for_category(category)?;
            facets.extend(attribute_facets(&scoped, &definitions, &request.criteria));
        }
        facets.retain(|f| !f.values.is_empty());

        let matched = apply_filters_and_sort(&scoped, &request.criteria, request.sort);
        debug!(
            kind = request.kind.as_str(),
            scoped = scoped.len(),
            matched = matched.len(),
            sort = request.sort.as_str(),
            "catalogue listing"
        );

        let (items, pagination) = paginate(matched, request.page, request.per_page);
        Ok(ListingPage::new(items, pagination).with_facets(facets))
    }

    /// Fetch a product page by slug. Hidden products are reported as
    /// missing so the storefront renders a 404, not a draft.
    pub fn product_by_slug(&self, slug: &str) -> Result<Product, StoreError> {
        match self.products.find_by_slug(slug)? {
            Some(product) if product.is_published() => Ok(product),
            _ => Err(StoreError::NotFound(format!("product slug {slug}"))),
        }
    }

    /// Featured products for the home page, in catalogue order.
    pub fn featured(&self, kind: ProductKind, limit: usize) -> Result<Vec<Product>, StoreError> {
        let mut featured: Vec<Product> = self
            .products
            .list()?
            .into_iter()
            .filter(|p| p.is_published() && p.kind == kind && p.is_featured)
            .collect();
        featured.truncate(limit);
        Ok(featured)
    }

    /// Category navigation for one side of the business: root categories
    /// ordered by position.
    pub fn root_categories(&self, kind: ProductKind) -> Result<Vec<Category>, StoreError> {
        Ok(self
            .categories
            .list()?
            .into_iter()
            .filter(|c| c.is_root() && c.kind == kind)
            .collect())
    }
}
