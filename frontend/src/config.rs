use log::Level;
use shared::DEFAULT_PAGE_SIZE;

const DEFAULT_DATA_PATH: &str = "/resultados_acumulados.json";

pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Empty means the data file is served next to the app, which is how
        // both Trunk and the simulation server lay things out.
        option_env!("RESULTS_API_BASE").unwrap_or("").to_string()
    }

    pub fn data_path() -> String {
        option_env!("RESULTS_DATA_PATH")
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_DATA_PATH)
            .to_string()
    }

    pub fn log_level() -> Level {
        option_env!("RESULTS_LOG_LEVEL")
            .and_then(|level| level.parse().ok())
            .unwrap_or(if cfg!(debug_assertions) { Level::Debug } else { Level::Info })
    }

    pub fn default_page_size() -> usize {
        DEFAULT_PAGE_SIZE
    }

    pub fn page_size_options() -> &'static [usize] {
        &[5, 10, 20, 50]
    }

    /// Rows shown in each summary table
    pub fn summary_top_n() -> usize {
        5
    }
}
