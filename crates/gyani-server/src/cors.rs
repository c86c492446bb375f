use actix_cors::Cors;
use actix_web::http::Uri;
use tracing::warn;

use gyani_core::ConfigError;

/// Check `server.allowedOrigins` the way the CORS layer parses them.
///
/// `*` is rejected too: it cannot be combined with credentials.
pub fn check_origins(origins: &[String]) -> Result<(), ConfigError> {
    origins.iter().try_for_each(|origin| check_origin(origin))
}

fn check_origin(origin: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidOrigin {
        origin: origin.to_string(),
        reason,
    };
    if origin == "*" {
        return Err(invalid("wildcard not allowed with credentials".to_string()));
    }
    origin
        .parse::<Uri>()
        .map(|_| ())
        .map_err(|e| invalid(e.to_string()))
}

/// CORS policy for the configured origins: exact origin match, any method,
/// any header, credentials allowed. Entries that fail [`check_origins`] are
/// skipped with a warning.
pub fn build_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| match check_origin(origin) {
            Ok(()) => cors.allowed_origin(origin),
            Err(e) => {
                warn!("{e}");
                cors
            }
        })
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
