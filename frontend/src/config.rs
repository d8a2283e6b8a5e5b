pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Relative URLs work in both development (Trunk proxies /api/ to the
        // backend) and production (nginx does the same).
        "".to_string()
    }
}
