use contracts::enums::Language;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Товаров на странице
    pub page_size: usize,
    pub default_language: Language,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// trace | debug | info | warn | error
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub copyright_year: u16,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[catalog]
page_size = 8
default_language = "zh"

[logging]
level = "debug"

[contact]
email = "huangsmile1985@gmail.com"
phone = "+86 15620656792"
whatsapp = "8615620656792"
copyright_year = 2026
"#;

/// Parse and validate configuration from a TOML document
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;

    if config.catalog.page_size == 0 {
        anyhow::bail!("catalog.page_size must be positive");
    }
    config.logging.log_level()?;

    Ok(config)
}

/// Load the embedded configuration
///
/// Runs before the logger is initialised, so it must not log.
pub fn load_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

impl LoggingConfig {
    pub fn log_level(&self) -> anyhow::Result<log::Level> {
        self.level
            .parse()
            .map_err(|_| anyhow::anyhow!("unknown log level '{}'", self.level))
    }
}

impl ContactConfig {
    /// Ссылка на чат WhatsApp
    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                page_size: 8,
                default_language: Language::Zh,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
            contact: ContactConfig {
                email: "huangsmile1985@gmail.com".to_string(),
                phone: "+86 15620656792".to_string(),
                whatsapp: "8615620656792".to_string(),
                copyright_year: 2026,
            },
        }
    }
}
