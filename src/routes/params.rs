use serde::Deserialize;
use utoipa::IntoParams;

/// Query string of `GET /products`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Case-sensitive substring the product name must contain.
    pub name: Option<String>,
}

/// Query string of `GET /products/list`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SortedListParams {
    /// Case-sensitive substring the product name must contain.
    pub name: Option<String>,
    /// `price` or `name`; any other value keeps store order.
    #[serde(rename = "sortBy", alias = "sort_by")]
    pub sort_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortBy {
    Price,
    Name,
}

impl ProductSortBy {
    /// Exact, case-sensitive match on the two recognized keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "price" => Some(ProductSortBy::Price),
            "name" => Some(ProductSortBy::Name),
            _ => None,
        }
    }
}

/// Filter and ordering handed to the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub name: Option<String>,
    pub sort_by: Option<ProductSortBy>,
}

impl ProductQuery {
    pub fn new(name: Option<&str>, sort_by: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            sort_by: sort_by.and_then(ProductSortBy::from_key),
        }
    }

    /// The name filter, or `None` when it is absent or empty.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

impl From<ListParams> for ProductQuery {
    fn from(params: ListParams) -> Self {
        Self {
            name: params.name,
            sort_by: None,
        }
    }
}

impl From<SortedListParams> for ProductQuery {
    fn from(params: SortedListParams) -> Self {
        ProductQuery::new(params.name.as_deref(), params.sort_by.as_deref())
    }
}
