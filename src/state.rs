#[derive(Clone)]
pub struct Config {
    pub memory_json_path: String,
    pub hub_base: String,
    pub kb_base: String,
    pub membase_account: String,
    pub agent_name: String,
    pub max_errors: u32,
}

impl Config {
    pub fn from_env() -> Self {
        let hub_base = std::env::var("MEMBASE_HUB").unwrap_or_else(|_| "https://hub.membase.io".to_string());
        Self {
            memory_json_path: std::env::var("MEMORY_JSON_PATH").unwrap_or_else(|_| "./memory.json".to_string()),
            kb_base: std::env::var("KNOWLEDGE_BASE").unwrap_or_else(|_| hub_base.clone()),
            hub_base,
            membase_account: std::env::var("MEMBASE_ACCOUNT").unwrap_or_else(|_| "default".to_string()),
            agent_name: std::env::var("AGENT_NAME").unwrap_or_else(|_| "YieldAgent".to_string()),
            max_errors: std::env::var("MAX_ERRORS").ok().and_then(|v| v.parse().ok()).unwrap_or(100),
        }
    }
}

pub fn now_ts() -> u64 {
    chrono::Utc::now().timestamp() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        // Only assert knobs no test environment overrides.
        let cfg = Config::from_env();
        assert_eq!(cfg.max_errors, 100);
        assert_eq!(cfg.membase_account, "default");
        assert!(!cfg.agent_name.is_empty());
    }

    #[test]
    fn now_ts_is_plausible() {
        let ts = now_ts();
        assert!(ts > 1_700_000_000); // sanity check
    }
}
