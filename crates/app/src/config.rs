/// Connection settings for the remote document store.
///
/// All fields have defaults suitable for local development; override
/// via environment variables. Credentials and hosting details belong to
/// the store, not to this application.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the hosted store.
    pub url: String,
    /// Collection holding the user documents.
    pub collection: String,
    /// Optional static bearer token sent on every request.
    pub token: Option<String>,
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                 |
    /// |--------------------|-------------------------|
    /// | `STORE_URL`        | `http://localhost:8080` |
    /// | `STORE_COLLECTION` | `usuarios`              |
    /// | `STORE_TOKEN`      | unset                   |
    pub fn from_env() -> Self {
        let url = std::env::var("STORE_URL").unwrap_or_else(|_| "http://localhost:8080".into());

        let collection =
            std::env::var("STORE_COLLECTION").unwrap_or_else(|_| "usuarios".into());

        let token = std::env::var("STORE_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());

        Self {
            url,
            collection,
            token,
        }
    }
}
