/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Accumulation strategies for paginated fetches

use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Collects the items of successive pages
pub trait Accumulator<T>: Send {
    /// Type of the collected entries
    type Output;

    /// Adds one item
    fn push(&mut self, item: T);

    /// Number of entries collected so far
    fn len(&self) -> usize;

    /// Whether nothing has been collected
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the accumulator, returning the entries in insertion order
    fn into_items(self) -> Vec<Self::Output>;
}

/// Keeps every item as received
#[derive(Debug, Clone)]
pub struct AppendItems<T> {
    items: Vec<T>,
}

impl<T> AppendItems<T> {
    /// Creates an empty accumulator
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for AppendItems<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> Accumulator<T> for AppendItems<T> {
    type Output = T;

    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Keeps the `handle` of each profile, duplicates included
#[derive(Debug, Clone, Default)]
pub struct CollectHandles {
    handles: Vec<String>,
}

impl CollectHandles {
    /// Creates an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator<Value> for CollectHandles {
    type Output = String;

    fn push(&mut self, item: Value) {
        match item.get("handle").and_then(Value::as_str) {
            Some(handle) => self.handles.push(handle.to_string()),
            None => debug!("Skipping profile without handle"),
        }
    }

    fn len(&self) -> usize {
        self.handles.len()
    }

    fn into_items(self) -> Vec<String> {
        self.handles
    }
}

/// Keeps the distinct `author.handle` values of posts, in first seen order
#[derive(Debug, Clone, Default)]
pub struct DistinctAuthorHandles {
    seen: HashSet<String>,
    handles: Vec<String>,
}

impl DistinctAuthorHandles {
    /// Creates an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator<Value> for DistinctAuthorHandles {
    type Output = String;

    fn push(&mut self, item: Value) {
        let Some(handle) = item.pointer("/author/handle").and_then(Value::as_str) else {
            debug!("Skipping post without author handle");
            return;
        };
        if self.seen.insert(handle.to_string()) {
            self.handles.push(handle.to_string());
        }
    }

    fn len(&self) -> usize {
        self.handles.len()
    }

    fn into_items(self) -> Vec<String> {
        self.handles
    }
}
