use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationErrors};

const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// Only return products with this availability.
    pub available: Option<bool>,
    /// Number of records to skip, default 0.
    #[serde(default)]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub skip: i64,
    /// Maximum number of records to return (1-100), default 10.
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl ListProductsQuery {
    /// `(offset, limit)`, or the range violations that make the query unusable.
    pub fn window(&self) -> Result<(u64, u64), ValidationErrors> {
        self.validate()?;
        // Both values are non-negative once validated.
        Ok((self.skip as u64, self.limit as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> ListProductsQuery {
        let uri: axum::http::Uri = format!("/products?{query}").parse().unwrap();
        axum::extract::Query::<ListProductsQuery>::try_from_uri(&uri)
            .unwrap()
            .0
    }

    #[test]
    fn applies_defaults() {
        let query = parse("");
        assert_eq!(query.available, None);
        assert_eq!(query.window().unwrap(), (0, 10));
    }

    #[test]
    fn parses_filter_and_window() {
        let query = parse("available=false&skip=5&limit=100");
        assert_eq!(query.available, Some(false));
        assert_eq!(query.window().unwrap(), (5, 100));
    }

    #[test]
    fn rejects_out_of_range_values() {
        for query in ["limit=0", "limit=101", "skip=-1"] {
            let errors = parse(query).window().unwrap_err();
            let field = query.split('=').next().unwrap();
            assert!(errors.field_errors().contains_key(field), "{query}");
        }
    }
}
