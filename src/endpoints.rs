//! Logical backend operations and the URLs they resolve to.

use std::collections::HashMap;
use std::fmt;

use reqwest::Url;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    NewsList,
    NewsFetch,
    TelegramPost,
}

impl Endpoint {
    pub const ALL: [Self; 3] = [Self::NewsList, Self::NewsFetch, Self::TelegramPost];

    pub fn name(&self) -> &'static str {
        match self {
            Self::NewsList => "news-list",
            Self::NewsFetch => "news-fetch",
            Self::TelegramPost => "telegram-post",
        }
    }

    /// Accepts `news-list` as well as `news_list`, since environment
    /// variables cannot carry dashes. When both spellings are configured
    /// the non-canonical one wins, see [`EndpointMap`].
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "news-list" => Some(Self::NewsList),
            "news-fetch" => Some(Self::NewsFetch),
            "telegram-post" => Some(Self::TelegramPost),
            _ => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("endpoint `{0}` is not configured")]
    Missing(Endpoint),

    #[error("endpoint `{endpoint}` has an invalid url `{url}`: {reason}")]
    InvalidUrl {
        endpoint: Endpoint,
        url: String,
        reason: String,
    },

    #[error("endpoint `{0}` must use http or https")]
    UnsupportedScheme(Endpoint),

    #[error("endpoint `{endpoint}` is configured twice, as `{first}` and `{second}`")]
    Conflict {
        endpoint: Endpoint,
        first: String,
        second: String,
    },
}

/// Immutable mapping from every [`Endpoint`] to an absolute URL.
///
/// Keys spelled exactly like [`Endpoint::name`] come from the config files;
/// any other spelling (`news_list`, `NEWS_LIST`) comes from the environment
/// and overrides them. Two non-canonical spellings of one endpoint are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, String>")]
pub struct EndpointMap {
    news_list: Url,
    news_fetch: Url,
    telegram_post: Url,
}

impl EndpointMap {
    pub fn new(news_list: Url, news_fetch: Url, telegram_post: Url) -> Self {
        Self {
            news_list,
            news_fetch,
            telegram_post,
        }
    }

    pub fn resolve(&self, endpoint: Endpoint) -> &Url {
        match endpoint {
            Endpoint::NewsList => &self.news_list,
            Endpoint::NewsFetch => &self.news_fetch,
            Endpoint::TelegramPost => &self.telegram_post,
        }
    }

    /// Every endpoint rooted at `base`, e.g. `http://127.0.0.1:9000/news-list`.
    pub fn with_base(base: &Url) -> Result<Self, EndpointError> {
        let join = |endpoint: Endpoint| {
            base.join(endpoint.name())
                .map_err(|e| EndpointError::InvalidUrl {
                    endpoint,
                    url: base.to_string(),
                    reason: e.to_string(),
                })
        };

        Ok(Self::new(
            join(Endpoint::NewsList)?,
            join(Endpoint::NewsFetch)?,
            join(Endpoint::TelegramPost)?,
        ))
    }
}

fn parse_url(endpoint: Endpoint, raw: &str) -> Result<Url, EndpointError> {
    let url = Url::parse(raw.trim()).map_err(|e| EndpointError::InvalidUrl {
        endpoint,
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(EndpointError::UnsupportedScheme(endpoint)),
    }
}

impl TryFrom<HashMap<String, String>> for EndpointMap {
    type Error = EndpointError;

    fn try_from(raw: HashMap<String, String>) -> Result<Self, Self::Error> {
        let mut resolved: HashMap<Endpoint, (&str, Url)> = HashMap::new();

        for (name, url) in &raw {
            let Some(endpoint) = Endpoint::from_name(name) else {
                tracing::debug!(name = %name, "ignoring unknown endpoint");
                continue;
            };
            let url = parse_url(endpoint, url)?;

            match resolved.get(&endpoint) {
                None => {}
                Some((prev, _)) if *prev == endpoint.name() => {}
                Some(_) if name == endpoint.name() => continue,
                Some((prev, _)) => {
                    return Err(EndpointError::Conflict {
                        endpoint,
                        first: prev.to_string(),
                        second: name.clone(),
                    })
                }
            }
            resolved.insert(endpoint, (name.as_str(), url));
        }

        let mut take = |endpoint: Endpoint| {
            resolved
                .remove(&endpoint)
                .map(|(_, url)| url)
                .ok_or(EndpointError::Missing(endpoint))
        };

        Ok(Self::new(
            take(Endpoint::NewsList)?,
            take(Endpoint::NewsFetch)?,
            take(Endpoint::TelegramPost)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn resolves_every_logical_name() {
        let map = EndpointMap::try_from(raw(&[
            ("news-list", "https://fn.example.com/aaa"),
            ("news_fetch", "https://fn.example.com/bbb"),
            ("TELEGRAM_POST", "https://fn.example.com/ccc"),
            ("unrelated-function", "https://fn.example.com/ddd"),
        ]))
        .unwrap();

        assert_eq!(map.resolve(Endpoint::NewsList).path(), "/aaa");
        assert_eq!(map.resolve(Endpoint::NewsFetch).path(), "/bbb");
        assert_eq!(map.resolve(Endpoint::TelegramPost).path(), "/ccc");
    }

    #[test]
    fn rejects_relative_and_non_http_urls() {
        let err = EndpointMap::try_from(raw(&[
            ("news-list", "/news"),
            ("news-fetch", "https://fn.example.com/b"),
            ("telegram-post", "https://fn.example.com/c"),
        ]))
        .unwrap_err();
        assert!(matches!(err, EndpointError::InvalidUrl { endpoint: Endpoint::NewsList, .. }));

        let err = EndpointMap::try_from(raw(&[
            ("news-list", "https://fn.example.com/a"),
            ("news-fetch", "ftp://fn.example.com/b"),
            ("telegram-post", "https://fn.example.com/c"),
        ]))
        .unwrap_err();
        assert!(matches!(err, EndpointError::UnsupportedScheme(Endpoint::NewsFetch)));
    }

    #[test]
    fn environment_spelling_overrides_file_spelling() {
        let pairs = [
            ("news-list", "https://fn.example.com/from-file"),
            ("news_list", "https://fn.example.com/from-env"),
            ("news-fetch", "https://fn.example.com/b"),
            ("telegram-post", "https://fn.example.com/c"),
        ];

        // HashMap iteration order differs between instances
        for _ in 0..64 {
            let map = EndpointMap::try_from(raw(&pairs)).unwrap();
            assert_eq!(map.resolve(Endpoint::NewsList).path(), "/from-env");
        }
    }

    #[test]
    fn two_overrides_of_one_endpoint_conflict() {
        let err = EndpointMap::try_from(raw(&[
            ("news_list", "https://fn.example.com/a"),
            ("NEWS-LIST", "https://fn.example.com/b"),
            ("news-fetch", "https://fn.example.com/b"),
            ("telegram-post", "https://fn.example.com/c"),
        ]))
        .unwrap_err();
        assert!(matches!(err, EndpointError::Conflict { endpoint: Endpoint::NewsList, .. }));
    }

    #[test]
    fn with_base_joins_names() {
        let base = Url::parse("http://127.0.0.1:9000/").unwrap();
        let map = EndpointMap::with_base(&base).unwrap();

        for endpoint in Endpoint::ALL {
            assert_eq!(
                map.resolve(endpoint).as_str(),
                format!("http://127.0.0.1:9000/{}", endpoint.name())
            );
        }
    }
}
