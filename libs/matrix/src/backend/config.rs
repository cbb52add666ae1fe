//! Backend configuration.

use super::parallel::DEFAULT_PARALLEL_THRESHOLD;
use std::{fmt, str::FromStr};
use tracing::warn;

/// Environment variable selecting the backend kind.
pub const BACKEND_VAR: &str = "MATRIX_BACKEND";

/// Environment variable overriding the parallel threshold.
pub const PARALLEL_THRESHOLD_VAR: &str = "MATRIX_PARALLEL_THRESHOLD";

/// Environment variable setting the number of worker threads.
pub const THREADS_VAR: &str = "MATRIX_THREADS";

/// Which backend performs elementwise additions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BackendKind {
    /// Let the library pick.
    #[default]
    Auto,

    /// Always add on the calling thread.
    Serial,

    /// Add on rayon worker threads.
    Parallel,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Auto => "auto",
            BackendKind::Serial => "serial",
            BackendKind::Parallel => "parallel",
        };
        f.write_str(name)
    }
}

/// An unknown backend kind.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown backend kind '{0}', expected one of: auto, serial, parallel")]
pub struct UnknownBackendKind(pub String);

impl FromStr for BackendKind {
    type Err = UnknownBackendKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(BackendKind::Auto),
            "serial" => Ok(BackendKind::Serial),
            "parallel" => Ok(BackendKind::Parallel),
            _ => Err(UnknownBackendKind(s.to_string())),
        }
    }
}

/// Configuration for the elementwise addition backend.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BackendConfig {
    /// The backend kind.
    pub kind: BackendKind,

    /// Element count below which the parallel backend adds serially.
    pub parallel_threshold: usize,

    /// Size of a dedicated worker pool, rayon's global pool when unset.
    pub num_threads: Option<usize>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { kind: BackendKind::Auto, parallel_threshold: DEFAULT_PARALLEL_THRESHOLD, num_threads: None }
    }
}

impl BackendConfig {
    /// Loads the configuration from `MATRIX_BACKEND`, `MATRIX_PARALLEL_THRESHOLD` and
    /// `MATRIX_THREADS`.
    ///
    /// Unset variables keep their default. Unparsable ones are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(kind) = parse_var(&lookup, BACKEND_VAR) {
            config.kind = kind;
        }
        if let Some(threshold) = parse_var(&lookup, PARALLEL_THRESHOLD_VAR) {
            config.parallel_threshold = threshold;
        }
        if let Some(threads) = parse_var(&lookup, THREADS_VAR) {
            config.num_threads = Some(threads);
        }
        config
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = lookup(name)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring invalid {name}={value:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[rstest]
    #[case("auto", BackendKind::Auto)]
    #[case("serial", BackendKind::Serial)]
    #[case("Parallel", BackendKind::Parallel)]
    #[case(" SERIAL ", BackendKind::Serial)]
    fn parse_kind(#[case] input: &str, #[case] expected: BackendKind) {
        assert_eq!(input.parse::<BackendKind>(), Ok(expected));
    }

    #[test]
    fn parse_unknown_kind() {
        assert_eq!("gpu".parse::<BackendKind>(), Err(UnknownBackendKind("gpu".to_string())));
    }

    #[test]
    fn defaults_without_variables() {
        let config = BackendConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, BackendConfig::default());
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn reads_all_variables() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            (BACKEND_VAR, "parallel"),
            (PARALLEL_THRESHOLD_VAR, "128"),
            (THREADS_VAR, "2"),
        ]));
        assert_eq!(config, BackendConfig { kind: BackendKind::Parallel, parallel_threshold: 128, num_threads: Some(2) });
    }

    #[test]
    fn ignores_invalid_values() {
        let config = BackendConfig::from_lookup(lookup_from(&[
            (BACKEND_VAR, "quantum"),
            (PARALLEL_THRESHOLD_VAR, "-5"),
            (THREADS_VAR, "many"),
        ]));
        assert_eq!(config, BackendConfig::default());
    }

    #[test]
    fn kind_display_round_trip() {
        for kind in [BackendKind::Auto, BackendKind::Serial, BackendKind::Parallel] {
            assert_eq!(kind.to_string().parse::<BackendKind>(), Ok(kind));
        }
    }
}
