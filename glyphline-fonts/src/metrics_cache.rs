//! Cache of measured string sizes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::layout::Size;
use crate::style::TextStyle;

/// Measured size and baseline of a string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    pub size: Size,
    pub baseline: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MetricsKey {
    text: String,
    /// Font size as raw bits; sizes compare exactly.
    size_bits: u32,
    style: TextStyle,
}

impl MetricsKey {
    fn new(text: &str, font_size: f32, style: &TextStyle) -> Self {
        Self {
            text: text.to_string(),
            size_bits: font_size.to_bits(),
            style: *style,
        }
    }
}

/// Thread-safe map from `(text, size, style)` to [`TextMetrics`].
///
/// Entries are never evicted one by one; [`MetricsCache::clear`] drops them
/// all at once and starts a new generation. Measurements taken before a clear
/// can be stored with [`MetricsCache::put_if_current`], which drops them if a
/// clear happened in between.
#[derive(Debug, Default)]
pub struct MetricsCache {
    entries: RwLock<HashMap<MetricsKey, TextMetrics>>,
    generation: AtomicU64,
}

impl MetricsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, text: &str, font_size: f32, style: &TextStyle) -> Option<TextMetrics> {
        self.entries
            .read()
            .get(&MetricsKey::new(text, font_size, style))
            .copied()
    }

    /// Store a measurement. A concurrent store for the same key may win
    /// instead; both hold the same value.
    pub fn put(&self, text: &str, font_size: f32, style: &TextStyle, metrics: TextMetrics) {
        self.entries
            .write()
            .insert(MetricsKey::new(text, font_size, style), metrics);
    }

    /// Store a measurement only if no clear happened since `generation` was
    /// read from [`MetricsCache::generation`]. Returns whether it was stored.
    pub fn put_if_current(
        &self,
        generation: u64,
        text: &str,
        font_size: f32,
        style: &TextStyle,
        metrics: TextMetrics,
    ) -> bool {
        let mut entries = self.entries.write();
        if self.generation.load(Ordering::Acquire) != generation {
            return false;
        }
        entries.insert(MetricsKey::new(text, font_size, style), metrics);
        true
    }

    /// Number of clears so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn clear(&self) {
        let mut entries = self.entries.write();
        self.generation.fetch_add(1, Ordering::AcqRel);
        let stale = std::mem::take(&mut *entries);
        drop(entries);
        log::debug!("Cleared {} cached text measurements", stale.len());
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
