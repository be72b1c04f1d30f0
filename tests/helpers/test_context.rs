//! Test context for integration tests
//!
//! Every context owns its own temporary data directory, so state files never
//! leak between tests. Translations and the card catalog are the bundled ones.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use DailyTarot::{
    config::Settings,
    i18n::I18n,
    services::{Deck, ServiceFactory},
};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Bot token the mock Telegram server answers to
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Path of a file bundled with the crate
pub fn manifest_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Settings pointing the stores at `data_dir`
pub fn test_settings(data_dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = test_bot_token();
    settings.storage.data_dir = data_dir.to_string_lossy().to_string();
    settings.deck.cards_path = manifest_path("data/cards.json").to_string_lossy().to_string();
    settings.i18n.translations_dir = manifest_path("translations").to_string_lossy().to_string();
    settings
}

/// Fully wired services over a private data directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub settings: Settings,
    pub services: ServiceFactory,
}

impl TestContext {
    /// Create a context with the bundled catalog
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();

        let temp_dir = tempfile::tempdir()?;
        let settings = test_settings(temp_dir.path());
        let deck = Deck::from_file(&settings.deck.cards_path, &settings.i18n.default_language).await?;

        Self::with_deck(temp_dir, settings, deck).await
    }

    /// Create a context with a custom deck
    pub async fn with_deck(
        temp_dir: TempDir,
        settings: Settings,
        deck: Deck,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();

        let mut i18n = I18n::new(&settings.i18n);
        i18n.load_translations().await?;

        let services = ServiceFactory::new(&settings, deck, i18n);

        Ok(Self {
            temp_dir,
            settings,
            services,
        })
    }

    /// Raw JSON contents of a state file, `Null` when it does not exist
    pub fn read_state(&self, file: &str) -> serde_json::Value {
        std::fs::read_to_string(self.temp_dir.path().join(file))
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(serde_json::Value::Null)
    }

    /// Write a state file directly, bypassing the services
    pub fn write_state(&self, file: &str, value: &serde_json::Value) {
        let raw = serde_json::to_string_pretty(value).expect("serialize state");
        std::fs::write(self.temp_dir.path().join(file), raw).expect("write state");
    }
}
