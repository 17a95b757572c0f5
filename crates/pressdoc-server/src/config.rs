use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND: &str = "127.0.0.1:5000";
const DEFAULT_SOFFICE: &str = "soffice";
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server settings, read from `PRESSDOC_*` environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Office suite binary used for PDF conversion.
    pub soffice: PathBuf,
    /// Parent for per-request scratch directories.
    pub scratch_dir: Option<PathBuf>,
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unset and empty values
    /// fall back to defaults; values that don't parse are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = get("PRESSDOC_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse()
            .map_err(|e| eyre::eyre!("invalid PRESSDOC_BIND {bind_raw:?}: {e}"))?;

        let soffice = PathBuf::from(get("PRESSDOC_SOFFICE").unwrap_or_else(|| DEFAULT_SOFFICE.to_string()));
        let scratch_dir = get("PRESSDOC_SCRATCH_DIR").map(PathBuf::from);

        let max_body_bytes = match get("PRESSDOC_MAX_BODY_BYTES") {
            Some(raw) => raw
                .parse()
                .map_err(|e| eyre::eyre!("invalid PRESSDOC_MAX_BODY_BYTES {raw:?}: {e}"))?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        let log_format = match get("PRESSDOC_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid PRESSDOC_LOG_FORMAT {other:?}: expected \"text\" or \"json\""
                ));
            }
        };

        Ok(Self {
            bind,
            soffice,
            scratch_dir,
            max_body_bytes,
            log_format,
        })
    }
}
