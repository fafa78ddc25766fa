// src/catalog.rs
//
// Fetch collaborator: pulls one category page, lifts the embedded
// __NEXT_DATA__ JSON out of it, and returns the product cards of the
// catalog query. Everything downstream works on RawCard values.

use serde::Deserialize;
use serde_json::Value;
use ureq::Agent;

use crate::config::consts::BASE_URL;
use crate::core::{html, net};
use crate::error::{Error, Result};

/// Nested price block of a product card. Either field may be missing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub original_price: Option<f64>,
}

/// One product card as delivered by the shop page. Every field is optional;
/// the source omits fields rather than defaulting them.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    #[serde(default)]
    pub sale_id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub price: Option<PriceInfo>,
}

/// Seam between the runner and the network. The live implementation is
/// `HttpCatalog`; tests substitute an in-memory one.
pub trait CatalogSource {
    fn product_cards(&self, category_id: u32) -> Result<Vec<RawCard>>;
}

pub struct HttpCatalog {
    agent: Agent,
}

impl HttpCatalog {
    pub fn new() -> Self {
        Self { agent: net::agent() }
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for HttpCatalog {
    fn product_cards(&self, category_id: u32) -> Result<Vec<RawCard>> {
        let url = format!("{BASE_URL}?categoryId={category_id}");
        let page = net::http_get(&self.agent, &url).map_err(|e| Error::Fetch {
            category_id,
            reason: e.to_string(),
        })?;
        extract_product_cards(&page, category_id)
    }
}

/// Parse the rendered page down to its product cards.
///
/// The dehydrated state holds several query blocks in no fixed position, so
/// we take the first one that actually carries a non-empty product list and
/// a pagination marker, rather than indexing into the list.
pub fn extract_product_cards(page: &str, category_id: u32) -> Result<Vec<RawCard>> {
    let payload = html::slice_between(page, r#"id="__NEXT_DATA__""#, "</script>")
        .ok_or_else(|| parse_err(category_id, "__NEXT_DATA__ payload not found in page"))?;

    let data: Value = serde_json::from_str(payload)
        .map_err(|e| parse_err(category_id, &format!("bad __NEXT_DATA__ JSON: {e}")))?;

    let queries = data
        .pointer("/props/pageProps/$dehydratedState/queries")
        .and_then(Value::as_array)
        .ok_or_else(|| parse_err(category_id, "dehydrated query list missing"))?;

    let cards = queries
        .iter()
        .find_map(|query| {
            let data = query.pointer("/state/data")?;
            let cards = data.get("productCards")?.as_array()?;
            if cards.is_empty() {
                return None;
            }
            // lastIdx marks the paginated catalog query; other queries can
            // carry product lists too (recommendations etc.).
            if data.get("lastIdx").map_or(true, Value::is_null) {
                return None;
            }
            Some(cards)
        })
        .ok_or_else(|| parse_err(category_id, "productCards not found"))?;

    serde_json::from_value(Value::Array(cards.clone()))
        .map_err(|e| parse_err(category_id, &format!("bad product card: {e}")))
}

fn parse_err(category_id: u32, reason: &str) -> Error {
    Error::Parse { category_id, reason: s!(reason) }
}
