/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Pagination models shared by every paginated endpoint

use crate::constants::DEFAULT_PAGE_SIZE;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One page request: an opaque cursor plus the number of items wanted
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Continuation token returned by the previous page, `None` for the first page
    pub cursor: Option<String>,
    /// Number of items requested
    pub page_size: u32,
}

impl PageRequest {
    /// Request for the first page
    #[must_use]
    pub fn first(page_size: u32) -> Self {
        Self {
            cursor: None,
            page_size,
        }
    }
}

/// One page of items and the cursor to the next one
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    /// Items of this page, in server order
    pub items: Vec<T>,
    /// Cursor of the next page, `None` once the collection is exhausted
    pub next_cursor: Option<String>,
}

impl<T> PageResult<T> {
    /// Creates a page
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    /// Whether this is the final page
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// Caller controls for a paginated fetch
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Maximum number of items to collect, `None` to run until the cursor is exhausted
    pub cap: Option<usize>,
    /// Items requested per call
    pub page_size: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            cap: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FetchOptions {
    /// Options with the given cap and the default page size
    #[must_use]
    pub fn with_cap(cap: usize) -> Self {
        Self {
            cap: Some(cap),
            ..Self::default()
        }
    }

    /// Replaces the page size
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Whether `collected` items reach the cap
    #[must_use]
    pub fn is_satisfied_by(&self, collected: usize) -> bool {
        self.cap.is_some_and(|cap| collected >= cap)
    }
}

/// Everything collected for one query key (a handle or a search term)
///
/// Serializes as a single entry map, `{"<key>": [ ...items ]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionResult<T> {
    /// Handle or search term the items were collected for
    pub key: String,
    /// Collected items
    pub items: Vec<T>,
}

impl<T> CollectionResult<T> {
    /// Creates a result
    pub fn new(key: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            key: key.into(),
            items,
        }
    }

    /// Number of collected items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was collected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Serialize> Serialize for CollectionResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.items)?;
        map.end()
    }
}
