//! Loader endpoint configuration.

/// Path prefix of the indicator time-series endpoint.
pub const INDICATOR_PATH: &str = "/api/indicador";

/// Where the loader sends its requests.
///
/// An empty `api_base` means same-origin, which is how the page is served.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoaderConfig {
    api_base: String,
}

impl LoaderConfig {
    /// Use `base` as the origin for requests. Trailing slashes are dropped.
    pub fn with_base(base: &str) -> Self {
        Self {
            api_base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// `{base}/api/indicador/{country}/{indicator}/`
    pub fn endpoint(&self, country: &str, indicator: &str) -> String {
        format!(
            "{}{}/{}/{}/",
            self.api_base, INDICATOR_PATH, country, indicator
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let cfg = LoaderConfig::default();
        assert_eq!(cfg.endpoint("chile", "uf"), "/api/indicador/chile/uf/");
    }

    #[test]
    fn test_base_trailing_slash_is_normalized() {
        let cfg = LoaderConfig::with_base("http://localhost:8000/ ");
        assert_eq!(cfg.api_base(), "http://localhost:8000");
        assert_eq!(
            cfg.endpoint("peru", "usd"),
            "http://localhost:8000/api/indicador/peru/usd/"
        );
    }
}
