//! Process configuration.
//!
//! All configuration is read from the environment once at startup and
//! passed down explicitly; nothing in the core reads env vars at
//! request time. Values mirror the `.env` keys of the deployed service.

use std::path::PathBuf;

/// Default HTTP port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Flat application settings, one field per environment key.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// HTTP port (`PORT`).
    pub port: u16,
    /// Admin allow-list (`ADMIN_EMAILS`, comma-separated).
    pub admin_emails: Vec<String>,
    /// Inbox that receives enquiry/contact mail (`ADMIN_GMAIL`).
    pub admin_inbox: String,
    /// Phone number shown in the enquiry auto-reply (`BANTY_CONTACT_PHONE`).
    pub contact_phone: String,
    /// Expected audience for identity assertions (`GOOGLE_CLIENT_ID`).
    pub google_client_id: String,
    /// Extra allowed CORS origins (`CORS_ORIGINS`, comma-separated).
    pub cors_origins: Vec<String>,
    /// Override for the catalog storage directory (`BANTY_DATA_DIR`).
    pub data_dir: Option<PathBuf>,

    // Media host credentials
    pub cloudinary_cloud_name: String,
    pub cloudinary_api_key: String,
    pub cloudinary_api_secret: String,

    // Mail relay
    pub mail_host: String,
    pub mail_port: u16,
    pub mail_user: String,
    pub mail_pass: String,
    pub mail_from_name: String,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// Missing keys fall back to the same defaults the deployed service
    /// used; nothing here fails hard, so a partially configured process
    /// still starts and reports dependency errors per request.
    pub fn from_env() -> Self {
        Self {
            port: env_var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            admin_emails: split_csv(&env_var("ADMIN_EMAILS").unwrap_or_default()),
            admin_inbox: env_var("ADMIN_GMAIL").unwrap_or_default(),
            contact_phone: env_var("BANTY_CONTACT_PHONE").unwrap_or_default(),
            google_client_id: env_var("GOOGLE_CLIENT_ID").unwrap_or_default(),
            cors_origins: split_csv(&env_var("CORS_ORIGINS").unwrap_or_default()),
            data_dir: env_var("BANTY_DATA_DIR").map(PathBuf::from),
            cloudinary_cloud_name: env_var("CLOUDINARY_CLOUD_NAME").unwrap_or_default(),
            cloudinary_api_key: env_var("CLOUDINARY_API_KEY").unwrap_or_default(),
            cloudinary_api_secret: env_var("CLOUDINARY_API_SECRET").unwrap_or_default(),
            mail_host: env_var("MAIL_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
            mail_port: env_var("MAIL_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(587),
            mail_user: env_var("MAIL_USER").unwrap_or_default(),
            mail_pass: env_var("MAIL_PASS").unwrap_or_default(),
            mail_from_name: env_var("MAIL_FROM_NAME")
                .unwrap_or_else(|| "Banty Car Accessories".to_string()),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
