//! Per-style face set resolution with a wholesale-cleared cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;
use glyphline_config::FontCategory;
use parking_lot::RwLock;

use super::FaceSet;
use crate::face::{FaceProvider, FontFace, NotdefFace};
use crate::style::TextStyle;
use crate::theme::{FontResource, ThemeFonts};

/// Resolves text styles to face sets and caches the result per style.
///
/// Two threads missing on the same style may both build a set; both are built
/// from the same theme snapshot, so whichever is stored last is equivalent.
/// [`FaceSetResolver::clear`] replaces the whole cache in one step and bumps a
/// generation counter. A set built before a clear is returned to its caller
/// but never stored.
pub struct FaceSetResolver {
    provider: Arc<dyn FaceProvider>,
    theme: ArcSwap<ThemeFonts>,
    cache: RwLock<HashMap<TextStyle, Arc<FaceSet>>>,
    generation: AtomicU64,
}

impl FaceSetResolver {
    pub fn new(theme: ThemeFonts, provider: Arc<dyn FaceProvider>) -> Self {
        Self {
            provider,
            theme: ArcSwap::from_pointee(theme),
            cache: RwLock::new(HashMap::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// The face set for `style`, building and caching it on first use.
    pub fn resolve(&self, style: &TextStyle) -> Arc<FaceSet> {
        if let Some(set) = self.cache.read().get(style) {
            return Arc::clone(set);
        }

        // Captured before the theme is read, so a clear that lands while the
        // set is being built keeps it out of the new cache
        let generation = self.generation.load(Ordering::Acquire);
        let set = Arc::new(self.build(style.category()));

        let mut cache = self.cache.write();
        if self.generation.load(Ordering::Acquire) == generation {
            cache.insert(*style, Arc::clone(&set));
        } else {
            log::debug!("Discarding {} face set built before a cache clear", style.category());
        }
        set
    }

    /// Drop every cached face set; the next resolution of any style reloads
    /// its faces from the current theme.
    pub fn clear(&self) {
        let mut cache = self.cache.write();
        self.generation.fetch_add(1, Ordering::AcqRel);
        let stale = std::mem::take(&mut *cache);
        drop(cache);
        log::debug!("Cleared {} cached face sets", stale.len());
    }

    /// Switch to a new theme and clear the cache.
    pub fn set_theme(&self, theme: ThemeFonts) {
        self.theme.store(Arc::new(theme));
        self.clear();
    }

    /// The active theme snapshot.
    pub fn theme(&self) -> Arc<ThemeFonts> {
        self.theme.load_full()
    }

    /// Number of clears so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Number of styles currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    fn build(&self, category: FontCategory) -> FaceSet {
        let theme = self.theme.load();

        let primary = theme.primary(category).and_then(|res| self.load(res));
        let fallback = theme.default_font(category).and_then(|res| self.load(res));

        let mut faces: Vec<Arc<dyn FontFace>> = match (primary, fallback) {
            (Some(primary), Some(fallback)) => vec![primary, fallback],
            (Some(face), None) | (None, Some(face)) => vec![face],
            (None, None) => {
                log::error!(
                    "No usable {category} font in the theme, rendering with the built-in notdef face"
                );
                vec![Arc::new(NotdefFace::new()) as Arc<dyn FontFace>]
            }
        };
        faces.extend(theme.emoji().and_then(|res| self.load(res)));
        let set = FaceSet { faces };

        log::debug!(
            "Resolved {} face set: [{}]",
            category,
            set.faces()
                .iter()
                .map(|face| face.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        set
    }

    fn load(&self, resource: &FontResource) -> Option<Arc<dyn FontFace>> {
        match self.provider.parse(resource) {
            Ok(face) => Some(face),
            Err(e) => {
                log::error!("{e}");
                None
            }
        }
    }
}
