use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::clients::cloudinary::{CloudinaryClient, CloudinaryConfig};
use crate::config::Config;
use crate::db::Store;
use crate::services::{
    BookService, ImageHost, PostService, SeaOrmBookService, SeaOrmPostService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub image_host: Arc<dyn ImageHost>,

    pub book_service: Arc<dyn BookService>,

    pub post_service: Arc<dyn PostService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let image_host = Arc::new(CloudinaryClient::new(cloudinary_config(&config))?);
        Self::with_image_host(config, image_host).await
    }

    /// Builds the state around a caller-supplied image host.
    pub async fn with_image_host(
        config: Config,
        image_host: Arc<dyn ImageHost>,
    ) -> anyhow::Result<Self> {
        for setting in config.missing_settings() {
            warn!(setting, "Setting is not configured");
        }

        let store = Store::with_pool_options(
            &config.general.database_url,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let seeded = store.seed_default_boards().await?;
        if seeded > 0 {
            info!(count = seeded, "Created default boards");
        }

        let book_service = Arc::new(SeaOrmBookService::new(
            store.clone(),
            image_host.clone(),
            config.image_host.folder.clone(),
        )) as Arc<dyn BookService>;

        let post_service = Arc::new(SeaOrmPostService::new(store.clone())) as Arc<dyn PostService>;

        Ok(Self {
            config: Arc::new(config),
            store,
            image_host,
            book_service,
            post_service,
        })
    }
}

fn cloudinary_config(config: &Config) -> CloudinaryConfig {
    let host = &config.image_host;
    CloudinaryConfig {
        cloud_name: host.cloud_name.clone(),
        api_key: host.api_key.clone(),
        api_secret: host.api_secret.clone(),
        api_base: host.api_base.clone(),
        timeout: Duration::from_secs(host.request_timeout_seconds),
    }
}
