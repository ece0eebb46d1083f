//! Symbol-keyed price series cache.
//!
//! The store is an ordinary owned value: whoever owns it decides its lifetime,
//! and sharing it across threads needs an explicit lock around it. Entries are
//! replaced on re-insert and never evicted.

use std::collections::HashMap;

use crate::domain::PriceSeries;

#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    series: HashMap<String, PriceSeries>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `series` under `symbol`, returning the entry it replaced.
    pub fn insert(&mut self, symbol: impl Into<String>, series: PriceSeries) -> Option<PriceSeries> {
        self.series.insert(symbol.into(), series)
    }

    pub fn get(&self, symbol: &str) -> Option<&PriceSeries> {
        self.series.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.series.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
