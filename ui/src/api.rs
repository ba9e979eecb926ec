//! Client for the remote products endpoint.

use gloo_net::http::Request;
use serde_json::Value;

use crate::state::ProductQuery;
use crate::types::TableSlice;

const API_BASE: &str = "https://k6yilzfl19.execute-api.us-east-1.amazonaws.com";

/// Build the request URL for one page of one table. Only the search text
/// needs encoding; table names and numbers are URL-safe by construction.
pub fn products_url(query: &ProductQuery) -> String {
    format!(
        "{}/products?table={}&page={}&limit={}&search={}",
        API_BASE,
        query.table,
        query.page,
        query.limit,
        urlencoding::encode(&query.search)
    )
}

/// Fetch one page of products.
///
/// Transport failures and non-JSON bodies are errors for the caller to log;
/// a parsed body whose shape does not match the expected envelope (or that
/// lacks the requested table key) degrades to an empty slice instead.
pub async fn fetch_products(query: &ProductQuery) -> Result<TableSlice, String> {
    let response = Request::get(&products_url(query))
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    let body: Value = response
        .json()
        .await
        .map_err(|e| format!("failed to parse response: {e}"))?;

    Ok(slice_from_body(&body, query.table))
}

/// Extract `body.data[table]` as a `TableSlice`, coercing any missing key or
/// shape mismatch to an empty slice.
pub fn slice_from_body(body: &Value, table: &str) -> TableSlice {
    body.get("data")
        .and_then(|data| data.get(table))
        .cloned()
        .and_then(|slice| serde_json::from_value(slice).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DashboardState;
    use serde_json::json;

    #[test]
    fn url_for_default_bernhardt_query() {
        let mut state = DashboardState::new();
        state.select_manufacturer(Some('A'));
        let url = products_url(&state.query().unwrap());
        assert!(url.ends_with("/products?table=bernhardt_products&page=1&limit=20&search="));
    }

    #[test]
    fn url_encodes_search_text() {
        let mut state = DashboardState::new();
        state.select_manufacturer(Some('F'));
        state.edit_search("red chair & stool");
        let url = products_url(&state.query().unwrap());
        assert!(url.ends_with(
            "/products?table=shopify_carts&page=1&limit=20&search=red%20chair%20%26%20stool"
        ));
    }

    #[test]
    fn well_formed_body_parses() {
        let body = json!({
            "data": {
                "bernhardt_products": {
                    "data": [{ "id": 1, "name": "Sofa" }],
                    "count": 45
                }
            }
        });
        let slice = slice_from_body(&body, "bernhardt_products");
        assert_eq!(slice.count, 45);
        assert_eq!(slice.data.len(), 1);
    }

    #[test]
    fn missing_table_key_coerces_to_empty() {
        let body = json!({ "data": { "ashley_products": { "data": [], "count": 3 } } });
        assert_eq!(slice_from_body(&body, "bernhardt_products"), TableSlice::default());
    }

    #[test]
    fn malformed_shapes_coerce_to_empty() {
        for body in [
            json!(null),
            json!([1, 2, 3]),
            json!({ "data": "oops" }),
            json!({ "data": { "bernhardt_products": "oops" } }),
            json!({ "data": { "bernhardt_products": { "data": "oops", "count": "oops" } } }),
        ] {
            assert_eq!(slice_from_body(&body, "bernhardt_products"), TableSlice::default());
        }
    }

    #[test]
    fn partial_slice_fills_defaults() {
        let body = json!({ "data": { "bernhardt_products": { "count": 7 } } });
        let slice = slice_from_body(&body, "bernhardt_products");
        assert_eq!(slice.count, 7);
        assert!(slice.data.is_empty());
    }
}
