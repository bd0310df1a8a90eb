use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main analyzer configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AnalyzerConfig {
    /// Recipe classification settings
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Analysis report settings
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Configuration for the recipe classifier
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ClassifierConfig {
    /// Convert hour-based cooking times to minutes before difficulty scoring.
    ///
    /// Off by default: the scorer compares the leading number of the
    /// extracted cooking time against 60 regardless of its unit, so
    /// "2 hours" scores as 2.
    #[serde(default)]
    pub hours_as_minutes: bool,
}

/// Configuration for analysis reports
#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// Analysis mode used when the caller does not request one
    #[serde(default = "default_mode")]
    pub default_mode: String,
    /// Maximum number of recipe suggestions returned
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Maximum number of cooking tips returned
    #[serde(default = "default_max_tips")]
    pub max_tips: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            max_suggestions: default_max_suggestions(),
            max_tips: default_max_tips(),
        }
    }
}

// Default value functions
fn default_mode() -> String {
    "general".to_string()
}

fn default_max_suggestions() -> usize {
    5
}

fn default_max_tips() -> usize {
    10
}

impl AnalyzerConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_ANALYZER__ prefix
    /// 2. recipe-analyzer.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_ANALYZER__CLASSIFIER__HOURS_AS_MINUTES
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AnalyzerConfig::load`] for the source priority.
pub fn load_config() -> Result<AnalyzerConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-analyzer").required(false))
        // Use double underscore for nested: RECIPE_ANALYZER__ANALYSIS__MAX_TIPS
        .add_source(
            Environment::with_prefix("RECIPE_ANALYZER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
