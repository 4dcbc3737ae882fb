//! Startup Data
//!
//! Load chain for the initial pair list: local storage first, then the
//! bundled default document, then hardcoded defaults. Every failure path
//! degrades instead of crashing.

use gloo_net::http::Request;
use log::{info, warn};

use crate::models::{default_pairs, Pair, PairsDocument};
use crate::storage;

const BUNDLED_PAIRS_URL: &str = "data/pairs.json";

pub async fn load_initial_pairs() -> Vec<Pair> {
    if let Some(pairs) = storage::load_pairs() {
        info!("Loaded {} pairs from local storage", pairs.len());
        return pairs;
    }

    match fetch_bundled_pairs().await {
        Ok(pairs) => {
            info!("Loaded {} pairs from bundled document", pairs.len());
            storage::save_pairs(&pairs);
            pairs
        }
        Err(err) => {
            warn!("Falling back to default pairs: {err}");
            let pairs = default_pairs();
            storage::save_pairs(&pairs);
            pairs
        }
    }
}

async fn fetch_bundled_pairs() -> Result<Vec<Pair>, String> {
    let response = Request::get(BUNDLED_PAIRS_URL)
        .send()
        .await
        .map_err(|err| err.to_string())?;

    if !response.ok() {
        return Err(format!(
            "HTTP {} while fetching {}",
            response.status(),
            BUNDLED_PAIRS_URL
        ));
    }

    let text = response.text().await.map_err(|err| err.to_string())?;
    let doc: PairsDocument = serde_json::from_str(&text).map_err(|err| err.to_string())?;
    Ok(doc.pairs)
}
