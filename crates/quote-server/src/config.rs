use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://query1.finance.yahoo.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub allowed_origin: String,
    pub upstream_base_url: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidListenAddr(AddrParseError),
    InvalidAllowedOrigin,
    InvalidUpstreamBaseUrl,
    NonUnicodeListenAddr,
    NonUnicodeAllowedOrigin,
    NonUnicodeUpstreamBaseUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListenAddr(err) => {
                write!(f, "QUOTE_PROXY_ADDR is not a valid socket address: {err}")
            }
            Self::InvalidAllowedOrigin => {
                write!(f, "QUOTE_PROXY_ALLOWED_ORIGIN must not be empty or whitespace")
            }
            Self::InvalidUpstreamBaseUrl => {
                write!(f, "QUOTE_PROXY_UPSTREAM_URL must not be empty or whitespace")
            }
            Self::NonUnicodeListenAddr => {
                write!(f, "QUOTE_PROXY_ADDR contains non-unicode data")
            }
            Self::NonUnicodeAllowedOrigin => {
                write!(f, "QUOTE_PROXY_ALLOWED_ORIGIN contains non-unicode data")
            }
            Self::NonUnicodeUpstreamBaseUrl => {
                write!(f, "QUOTE_PROXY_UPSTREAM_URL contains non-unicode data")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidListenAddr(err) => Some(err),
            Self::InvalidAllowedOrigin => None,
            Self::InvalidUpstreamBaseUrl => None,
            Self::NonUnicodeListenAddr => None,
            Self::NonUnicodeAllowedOrigin => None,
            Self::NonUnicodeUpstreamBaseUrl => None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var("QUOTE_PROXY_ADDR") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => DEFAULT_LISTEN_ADDR
                .parse()
                .expect("default listen address must be valid"),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeListenAddr);
            }
        };

        let allowed_origin = non_empty_env(
            "QUOTE_PROXY_ALLOWED_ORIGIN",
            DEFAULT_ALLOWED_ORIGIN,
            ConfigError::InvalidAllowedOrigin,
            ConfigError::NonUnicodeAllowedOrigin,
        )?;

        let upstream_base_url = non_empty_env(
            "QUOTE_PROXY_UPSTREAM_URL",
            DEFAULT_UPSTREAM_BASE_URL,
            ConfigError::InvalidUpstreamBaseUrl,
            ConfigError::NonUnicodeUpstreamBaseUrl,
        )?;

        Ok(Self {
            listen_addr,
            allowed_origin,
            upstream_base_url,
        })
    }
}

fn non_empty_env(
    key: &str,
    default_value: &str,
    invalid_error: ConfigError,
    non_unicode_error: ConfigError,
) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            if value.trim().is_empty() {
                return Err(invalid_error);
            }
            Ok(value)
        }
        Err(env::VarError::NotPresent) => Ok(default_value.to_owned()),
        Err(env::VarError::NotUnicode(_)) => Err(non_unicode_error),
    }
}

#[cfg(test)]
mod tests {
    use std::{env, sync::Mutex};

    use super::{Config, ConfigError};

    static ENV_LOCK: Mutex<()> = Mutex::new(());
    const ENV_ADDR_KEY: &str = "QUOTE_PROXY_ADDR";
    const ENV_ORIGIN_KEY: &str = "QUOTE_PROXY_ALLOWED_ORIGIN";
    const ENV_UPSTREAM_KEY: &str = "QUOTE_PROXY_UPSTREAM_URL";

    struct EnvVarGuard {
        key: &'static str,
        previous: Option<std::ffi::OsString>,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let previous = env::var_os(key);
            env::set_var(key, value);
            Self { key, previous }
        }

        fn unset(key: &'static str) -> Self {
            let previous = env::var_os(key);
            env::remove_var(key);
            Self { key, previous }
        }

        #[cfg(unix)]
        fn set_os(key: &'static str, value: std::ffi::OsString) -> Self {
            let previous = env::var_os(key);
            env::set_var(key, value);
            Self { key, previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            match self.previous.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }

    fn reset_config_env_baseline() -> [EnvVarGuard; 3] {
        [
            EnvVarGuard::unset(ENV_ADDR_KEY),
            EnvVarGuard::unset(ENV_ORIGIN_KEY),
            EnvVarGuard::unset(ENV_UPSTREAM_KEY),
        ]
    }

    #[test]
    fn defaults_listen_address_when_env_is_unset() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn defaults_allowed_origin_and_upstream_url() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();

        let config = Config::from_env().unwrap();

        assert_eq!(config.allowed_origin, "http://localhost:5173");
        assert_eq!(config.upstream_base_url, "https://query1.finance.yahoo.com");
    }

    #[test]
    fn uses_listen_address_override_from_env() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_ADDR_KEY, "127.0.0.1:9090");

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9090".parse().unwrap());
    }

    #[test]
    fn returns_error_for_invalid_listen_address_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_ADDR_KEY, "not-an-addr");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidListenAddr(_)));
    }

    #[test]
    fn uses_allowed_origin_override_from_env() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_ORIGIN_KEY, "http://localhost:4000");

        let config = Config::from_env().unwrap();

        assert_eq!(config.allowed_origin, "http://localhost:4000");
    }

    #[test]
    fn returns_error_for_empty_allowed_origin_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_ORIGIN_KEY, "");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidAllowedOrigin));
    }

    #[test]
    fn returns_error_for_whitespace_upstream_url_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_UPSTREAM_KEY, "   ");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidUpstreamBaseUrl));
    }

    #[test]
    fn uses_upstream_url_override_from_env() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_UPSTREAM_KEY, "http://127.0.0.1:9999");

        let config = Config::from_env().unwrap();

        assert_eq!(config.upstream_base_url, "http://127.0.0.1:9999");
    }

    #[cfg(unix)]
    #[test]
    fn returns_error_for_non_unicode_listen_address_env_var() {
        use std::os::unix::ffi::OsStringExt;

        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set_os(
            ENV_ADDR_KEY,
            std::ffi::OsString::from_vec(vec![0x66, 0x6f, 0x80]),
        );

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::NonUnicodeListenAddr));
    }

    #[cfg(unix)]
    #[test]
    fn returns_error_for_non_unicode_allowed_origin_env_var() {
        use std::os::unix::ffi::OsStringExt;

        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set_os(
            ENV_ORIGIN_KEY,
            std::ffi::OsString::from_vec(vec![0x66, 0x6f, 0x80]),
        );

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::NonUnicodeAllowedOrigin));
    }
}
