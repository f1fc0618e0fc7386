use figment::providers::Env;

/// Environment variables holding the connection credentials.
pub const CREDENTIAL_KEYS: [&str; 4] = ["host", "user", "password", "database"];

pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Connection credentials captured from the process environment.
///
/// Nothing is validated here: a missing variable only shows up as a connection
/// error the first time the credentials are used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbCredentials {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl DbCredentials {
    pub fn from_env() -> Self {
        let env = Env::raw().only(&CREDENTIAL_KEYS);
        Self::from_pairs(env.iter().map(|(key, value)| (key.as_str().to_string(), value)))
    }

    /// Build from raw `(key, value)` pairs; unknown keys are ignored and key
    /// matching is case-insensitive.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, String)>,
        K: AsRef<str>,
    {
        let mut creds = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref().to_ascii_lowercase().as_str() {
                "host" => &mut creds.host,
                "user" => &mut creds.user,
                "password" => &mut creds.password,
                "database" => &mut creds.database,
                _ => continue,
            };
            *slot = Some(value);
        }
        creds
    }

    /// Name of the first credential that is not set, if any.
    pub fn first_missing(&self) -> Option<&'static str> {
        [&self.host, &self.user, &self.password, &self.database]
            .into_iter()
            .zip(CREDENTIAL_KEYS)
            .find_map(|(value, key)| value.is_none().then_some(key))
    }

    /// Split `host` into host name and port.
    ///
    /// Accepts `db.example`, `db.example:3307`, a bare IPv6 address such as
    /// `::1`, and `[::1]:3307`.
    pub fn host_and_port(&self) -> Option<(&str, u16)> {
        let host = self.host.as_deref()?;

        if let Some(rest) = host.strip_prefix('[') {
            let (addr, tail) = rest.split_once(']')?;
            return match tail.strip_prefix(':') {
                Some(port) => port.parse().ok().map(|p| (addr, p)),
                None if tail.is_empty() => Some((addr, DEFAULT_MYSQL_PORT)),
                None => None,
            };
        }

        match host.split_once(':') {
            // More than one colon without brackets: an IPv6 address, no port.
            Some((_, rest)) if rest.contains(':') => Some((host, DEFAULT_MYSQL_PORT)),
            Some((name, port)) => port.parse().ok().map(|p| (name, p)),
            None => Some((host, DEFAULT_MYSQL_PORT)),
        }
    }
}
