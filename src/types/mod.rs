pub mod category;
pub mod news;

pub use category::{Category, UnknownCategory};
pub use news::{
    FetchNewsResponse, NewsId, NewsItem, NewsListResponse, TelegramPostRequest,
    TelegramPostResponse,
};

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn deserialize_null_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
