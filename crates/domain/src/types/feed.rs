//! Vendor response envelope

use serde::{Deserialize, Serialize};

use crate::utils::nullable::null_as_default;

/// One page of a platform feed (`{ items, totalItems, ... }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_items: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl<T> FeedPage<T> {
    /// Wrap a list of items as a single complete page.
    pub fn from_items(items: Vec<T>) -> Self {
        let total_items = items.len() as u64;
        Self { items, total_items, page: None, page_size: None, total_pages: None }
    }
}

impl<T> Default for FeedPage<T> {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}
