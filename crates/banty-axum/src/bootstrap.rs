//! Server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete port implementations are
//! instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use banty_cloudinary::{CloudinaryConfig, CloudinaryUploader};
use banty_core::policy::AdminPolicy;
use banty_core::ports::{IdentityVerifier, MediaHost};
use banty_core::services::CatalogService;
use banty_core::settings::Settings;
use banty_core::{CatalogRepository, Notifier};
use banty_google::{GoogleVerifier, GoogleVerifierConfig};
use banty_mail::{SmtpConfig, SmtpMailer};
use banty_store::{JsonCatalogStore, resolve_catalog_path};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Origins the deployed frontends are served from.
pub fn default_cors_origins() -> Vec<String> {
    [
        "http://localhost:5173",
        "http://localhost:3000",
        "http://127.0.0.1:5173",
        "http://127.0.0.1:3000",
        "https://caraccessories-gray.vercel.app",
        "https://www.caraccessories-gray.vercel.app",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Server configuration for the web adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Environment-derived settings.
    pub settings: Settings,
    /// Directory holding the bundled catalog snapshot.
    pub bundled_data_dir: PathBuf,
    /// Spool directory for in-flight uploads; defaults to a scratch
    /// directory under the OS temp dir.
    pub upload_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Build a config from settings.
    ///
    /// When `CORS_ORIGINS` is configured the allowed set is the default
    /// frontend origins plus the configured extras; otherwise all
    /// origins are allowed, as in development.
    pub fn from_settings(settings: Settings) -> Self {
        let cors = if settings.cors_origins.is_empty() {
            CorsConfig::AllowAll
        } else {
            let mut origins = default_cors_origins();
            origins.extend(settings.cors_origins.clone());
            CorsConfig::AllowOrigins(origins)
        };
        Self {
            settings,
            bundled_data_dir: PathBuf::from("data"),
            upload_dir: None,
            cors,
        }
    }
}

/// Application context for the web adapter.
///
/// Holds the composed services for all handlers.
pub struct AppContext {
    /// Catalog reads and admin-gated mutations.
    pub catalog: CatalogService,
    /// Enquiry/contact mail dispatch.
    pub notifier: Notifier,
    /// Identity assertion verification.
    pub verifier: Arc<dyn IdentityVerifier>,
    /// Media uploads.
    pub media: Arc<dyn MediaHost>,
    /// Admin allow-list policy.
    pub policy: AdminPolicy,
    /// Where multipart image parts are spooled before upload.
    pub upload_dir: PathBuf,
}

/// Bootstrap the web adapter with all concrete services.
pub async fn bootstrap(config: ServerConfig) -> Result<AppContext> {
    let settings = &config.settings;

    let catalog_path =
        resolve_catalog_path(settings.data_dir.as_deref(), &config.bundled_data_dir).await;

    let upload_dir = config
        .upload_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("banty").join("uploads"));
    tokio::fs::create_dir_all(&upload_dir).await?;

    tracing::info!(
        catalog_path = %catalog_path.display(),
        upload_dir = %upload_dir.display(),
        admin_count = settings.admin_emails.len(),
        "bootstrap resolved paths"
    );

    let store: Arc<dyn CatalogRepository> = Arc::new(JsonCatalogStore::new(catalog_path));
    let catalog = CatalogService::new(store);

    let verifier: Arc<dyn IdentityVerifier> = Arc::new(GoogleVerifier::new(
        GoogleVerifierConfig::new(settings.google_client_id.clone()),
    ));

    let media: Arc<dyn MediaHost> = Arc::new(CloudinaryUploader::new(CloudinaryConfig::new(
        settings.cloudinary_cloud_name.clone(),
        settings.cloudinary_api_key.clone(),
        settings.cloudinary_api_secret.clone(),
    )));

    let mailer = Arc::new(SmtpMailer::new(&SmtpConfig {
        host: settings.mail_host.clone(),
        port: settings.mail_port,
        user: settings.mail_user.clone(),
        pass: settings.mail_pass.clone(),
        from_name: settings.mail_from_name.clone(),
    })?);
    let notifier = Notifier::new(
        mailer,
        settings.admin_inbox.clone(),
        settings.contact_phone.clone(),
    );

    let policy = AdminPolicy::new(&settings.admin_emails);

    Ok(AppContext {
        catalog,
        notifier,
        verifier,
        media,
        policy,
        upload_dir,
    })
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let port = config.settings.port;
    let cors = config.cors.clone();
    let ctx = bootstrap(config).await?;
    let app = crate::routes::create_router(ctx, &cors);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!("Banty Car Accessories API listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
