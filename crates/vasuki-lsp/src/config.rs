use serde::Deserialize;

/// Root configuration for the vasuki-lsp server.
///
/// Provided by the client through initialization options or workspace
/// settings. Every field falls back to its default when omitted.
///
/// # Examples
///
/// ```
/// use vasuki_lsp::config::VasukiConfig;
///
/// let json = r#"{
///     "hover": { "enabled": false },
///     "cold_start": { "rate_limit_ms": 250 }
/// }"#;
///
/// let config: VasukiConfig = serde_json::from_str(json).unwrap();
/// assert!(!config.hover.enabled);
/// assert!(config.completion.enabled);
/// assert_eq!(config.cold_start.rate_limit_ms, 250);
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct VasukiConfig {
    #[serde(default)]
    pub completion: FeatureConfig,
    #[serde(default)]
    pub hover: FeatureConfig,
    #[serde(default)]
    pub definition: FeatureConfig,
    #[serde(default)]
    pub cold_start: ColdStartConfig,
}

impl VasukiConfig {
    /// Parses configuration from a `workspace/didChangeConfiguration` payload.
    ///
    /// Clients either nest the settings under a `vasuki` key or send the
    /// settings object directly. Returns `Ok(None)` when the payload holds
    /// nothing for this server (`null`, an empty object, or only other
    /// servers' sections), in which case the current configuration stays.
    pub fn from_settings(settings: serde_json::Value) -> serde_json::Result<Option<Self>> {
        match settings {
            serde_json::Value::Object(mut map) => {
                if let Some(section) = map.remove(vasuki_core::LANGUAGE_ID) {
                    if section.is_null() {
                        return Ok(None);
                    }
                    return serde_json::from_value(section).map(Some);
                }

                if !map.keys().any(|key| CONFIG_KEYS.contains(&key.as_str())) {
                    return Ok(None);
                }
                serde_json::from_value(serde_json::Value::Object(map)).map(Some)
            }
            serde_json::Value::Null => Ok(None),
            other => serde_json::from_value(other).map(Some),
        }
    }
}

/// Top-level keys of [`VasukiConfig`].
const CONFIG_KEYS: &[&str] = &["completion", "hover", "definition", "cold_start"];

/// On/off switch for a single LSP feature.
///
/// # Defaults
///
/// - `enabled`: `true`
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Configuration for cold start behavior.
///
/// Controls how the server handles requests for documents that were never
/// opened via `didOpen`.
///
/// # Defaults
///
/// - `enabled`: `true`
/// - `rate_limit_ms`: `100` (10 req/sec per URI)
///
/// # Examples
///
/// ```
/// use vasuki_lsp::config::ColdStartConfig;
///
/// let config = ColdStartConfig {
///     enabled: true,
///     rate_limit_ms: 200,
/// };
///
/// assert_eq!(config.rate_limit_ms, 200);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ColdStartConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_rate_limit_ms")]
    pub rate_limit_ms: u64,
}

impl Default for ColdStartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate_limit_ms: default_rate_limit_ms(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_rate_limit_ms() -> u64 {
    100 // 10 req/sec per URI
}
