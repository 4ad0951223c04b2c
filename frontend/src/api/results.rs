use gloo_net::http::Request;
use log::{debug, info};
use shared::{GameList, Result, SharedError};

use crate::api::api_url;
use crate::config::Config;

/// Fetches and decodes the accumulated results file. Called once per page load.
pub async fn fetch_game_list() -> Result<GameList> {
    let url = api_url(&Config::data_path());
    debug!("Fetching game results from {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| SharedError::Network(format!("Failed to fetch {}: {}", url, e)))?;

    ensure_success(response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| SharedError::Network(format!("Failed to read response body: {}", e)))?;

    let list = GameList::from_json(&body)?;
    info!("Loaded {} games ({} skipped)", list.len(), list.skipped);
    Ok(list)
}

/// Anything outside 2xx is a load failure
pub(crate) fn ensure_success(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SharedError::HttpStatus(status))
    }
}
