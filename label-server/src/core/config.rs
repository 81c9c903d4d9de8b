//! Server configuration

/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | RASTERIZER_URL | http://api.labelary.com/v1/printers | Preview rasterizer base URL |
/// | DOCUMENT_SERVICE_URL | http://localhost:4000/api/documents | Duplicate-label document generator |
/// | PRODUCT_SERVICE_URL | http://localhost:4100/api/products | Product catalog |
/// | PRINTER_ADDR | 192.168.1.100:9100 | Raw TCP printer port |
/// | SPOOL_DIR | /var/spool/marka | Print spool directory |
/// | REQUEST_TIMEOUT_MS | 30000 | Outbound request timeout |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 PRINTER_ADDR=10.0.0.5:9100 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Preview rasterizer base URL
    pub rasterizer_url: String,
    /// Document generator endpoint (duplicate-label print path)
    pub document_service_url: String,
    /// Product catalog base URL
    pub product_service_url: String,
    /// Raw TCP printer address
    pub printer_addr: String,
    /// Print spool directory
    pub spool_dir: String,
    /// Outbound request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            rasterizer_url: std::env::var("RASTERIZER_URL")
                .unwrap_or_else(|_| "http://api.labelary.com/v1/printers".into()),
            document_service_url: std::env::var("DOCUMENT_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:4000/api/documents".into()),
            product_service_url: std::env::var("PRODUCT_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:4100/api/products".into()),
            printer_addr: std::env::var("PRINTER_ADDR")
                .unwrap_or_else(|_| "192.168.1.100:9100".into()),
            spool_dir: std::env::var("SPOOL_DIR").unwrap_or_else(|_| "/var/spool/marka".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
