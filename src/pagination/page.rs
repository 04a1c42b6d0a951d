//! One page of a list response

use super::types::{ListParams, NextPage, PageFetcher};
use crate::decode::{Decoder, Extras, Field, ObjectReader, RawJson, Resource, ResourceJson};
use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// A decoded list response: items plus the cursor for the next page
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Items on this page, in API order
    pub data: Vec<T>,
    /// Opaque cursor for the next page; `None` or empty on the last page
    pub next_cursor: Option<String>,
    /// Presence, raw bytes and unrecognized keys of the list envelope
    #[serde(skip)]
    pub json: PageJson,
}

/// Decode metadata for [`Page`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageJson {
    /// Metadata for `data`
    pub data: Field,
    /// Metadata for `next_cursor`
    pub next_cursor: Field,
    /// The complete payload, as received
    pub raw: String,
    /// Keys present in the payload with no declared field
    pub extras: Extras,
}

impl ResourceJson for PageJson {
    fn field(&self, key: &str) -> Option<&Field> {
        match key {
            "data" => Some(&self.data),
            "next_cursor" => Some(&self.next_cursor),
            _ => None,
        }
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn extras(&self) -> &Extras {
        &self.extras
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            next_cursor: None,
            json: PageJson::default(),
        }
    }
}

impl<T: PartialEq> PartialEq for Page<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.next_cursor == other.next_cursor
    }
}

impl<T> Page<T> {
    /// The cursor for the next page, if there is one
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|cursor| !cursor.is_empty())
    }

    /// Whether another page follows this one
    pub fn has_next_page(&self) -> bool {
        self.next_cursor().is_some()
    }

    /// What follows this page
    pub fn next(&self) -> NextPage {
        NextPage::from_cursor(self.next_cursor.as_deref())
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page has no items
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the items
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Resource> Page<T> {
    pub(crate) fn from_reader(mut reader: ObjectReader<'_>, decoder: &Decoder) -> Result<Self> {
        let (items, data_field) = reader.field::<Vec<RawJson>>("data", true)?;
        let (next_cursor, cursor_field) = reader.field::<Option<String>>("next_cursor", true)?;
        let (raw, extras) = reader.finish()?;

        let data = items
            .iter()
            .map(|item| decoder.decode_str::<T>(item.as_str()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            data,
            next_cursor,
            json: PageJson {
                data: data_field,
                next_cursor: cursor_field,
                raw,
                extras,
            },
        })
    }

    /// Fetch the page after this one.
    ///
    /// Returns `Ok(None)` without calling the fetcher when this is the last page.
    pub async fn next_page<F>(
        &self,
        fetcher: &F,
        decoder: &Decoder,
        limit: Option<u32>,
    ) -> Result<Option<Page<T>>>
    where
        F: PageFetcher + ?Sized,
    {
        let Some(cursor) = self.next_cursor() else {
            return Ok(None);
        };

        let params = ListParams {
            cursor: Some(cursor.to_string()),
            limit,
        };
        debug!(model = T::NAME, cursor, "fetching next page");
        let body = fetcher.fetch_page(&params).await?;
        decoder.decode_page(&body).map(Some)
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'de, T: Resource> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawJson::deserialize(deserializer)?;
        Decoder::default()
            .decode_page_str(raw.as_str())
            .map_err(serde::de::Error::custom)
    }
}
