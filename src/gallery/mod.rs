// SPDX-License-Identifier: MPL-2.0
//! The gallery result set.
//!
//! Owns the ordered list of image URLs returned by the most recently
//! *successful* scrape. A failed scrape never touches the entries, so the
//! gallery always reflects the last response that settled with a result.

use iced::widget::image::Handle;

/// Per-entry thumbnail lifecycle.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    /// Bytes are still being fetched in the background.
    Loading,
    /// Decoded and ready to render.
    Ready {
        handle: Handle,
        width: u32,
        height: u32,
    },
    /// The fetch or decode failed; a placeholder is rendered instead.
    Failed,
}

impl Thumbnail {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Thumbnail::Ready { .. })
    }
}

/// One scraped image reference plus its thumbnail state.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    url: String,
    thumbnail: Thumbnail,
}

impl GalleryEntry {
    /// The source image URL. Download links must point here exactly.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }
}

/// Ordered result set of the most recent successful scrape.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
    /// Bumped on every replacement so in-flight thumbnail fetches from a
    /// superseded result set can be recognized and dropped.
    generation: u64,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = &GalleryEntry> {
        self.entries.iter()
    }

    /// The generation tag of the current result set.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the result set with the response list, in response order.
    ///
    /// Returns the new generation tag, to be attached to the thumbnail
    /// fetches spawned for this result set.
    pub fn apply_results(&mut self, urls: Vec<String>) -> u64 {
        self.generation += 1;
        self.entries = urls
            .into_iter()
            .map(|url| GalleryEntry {
                url,
                thumbnail: Thumbnail::Loading,
            })
            .collect();
        self.generation
    }

    /// Records a settled thumbnail fetch.
    ///
    /// Results tagged with a superseded generation are discarded, as are
    /// results for URLs no longer present. Returns whether anything changed.
    pub fn set_thumbnail(&mut self, generation: u64, url: &str, thumbnail: Thumbnail) -> bool {
        if generation != self.generation {
            return false;
        }
        let mut changed = false;
        for entry in self.entries.iter_mut().filter(|e| e.url == url) {
            entry.thumbnail = thumbnail.clone();
            changed = true;
        }
        changed
    }

    /// Number of entries whose thumbnail is still loading.
    #[must_use]
    pub fn pending_thumbnails(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.thumbnail, Thumbnail::Loading))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_gallery_is_empty() {
        let gallery = Gallery::new();
        assert!(gallery.is_empty());
        assert_eq!(gallery.len(), 0);
    }

    #[test]
    fn apply_results_preserves_response_order() {
        let mut gallery = Gallery::new();
        gallery.apply_results(urls(&["a.png", "b.png"]));

        let collected: Vec<&str> = gallery.entries().map(GalleryEntry::url).collect();
        assert_eq!(collected, vec!["a.png", "b.png"]);
    }

    #[test]
    fn apply_results_replaces_previous_set() {
        let mut gallery = Gallery::new();
        gallery.apply_results(urls(&["old.png"]));
        gallery.apply_results(urls(&["new-1.png", "new-2.png"]));

        assert_eq!(gallery.len(), 2);
        assert!(gallery.entries().all(|e| e.url().starts_with("new-")));
    }

    #[test]
    fn apply_empty_results_clears_entries() {
        let mut gallery = Gallery::new();
        gallery.apply_results(urls(&["a.png"]));
        gallery.apply_results(Vec::new());
        assert!(gallery.is_empty());
    }

    #[test]
    fn generation_increases_on_each_replacement() {
        let mut gallery = Gallery::new();
        let first = gallery.apply_results(urls(&["a.png"]));
        let second = gallery.apply_results(urls(&["b.png"]));
        assert!(second > first);
    }

    #[test]
    fn set_thumbnail_updates_matching_entry() {
        let mut gallery = Gallery::new();
        let generation = gallery.apply_results(urls(&["a.png", "b.png"]));

        let changed = gallery.set_thumbnail(generation, "b.png", Thumbnail::Failed);
        assert!(changed);

        let states: Vec<bool> = gallery
            .entries()
            .map(|e| matches!(e.thumbnail(), Thumbnail::Failed))
            .collect();
        assert_eq!(states, vec![false, true]);
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut gallery = Gallery::new();
        let stale = gallery.apply_results(urls(&["a.png"]));
        gallery.apply_results(urls(&["a.png"]));

        let changed = gallery.set_thumbnail(stale, "a.png", Thumbnail::Failed);
        assert!(!changed);
        assert!(gallery
            .entries()
            .all(|e| matches!(e.thumbnail(), Thumbnail::Loading)));
    }

    #[test]
    fn unknown_url_is_ignored() {
        let mut gallery = Gallery::new();
        let generation = gallery.apply_results(urls(&["a.png"]));
        assert!(!gallery.set_thumbnail(generation, "ghost.png", Thumbnail::Failed));
    }

    #[test]
    fn duplicate_urls_all_receive_the_thumbnail() {
        let mut gallery = Gallery::new();
        let generation = gallery.apply_results(urls(&["dup.png", "dup.png"]));

        gallery.set_thumbnail(generation, "dup.png", Thumbnail::Failed);
        assert!(gallery
            .entries()
            .all(|e| matches!(e.thumbnail(), Thumbnail::Failed)));
    }

    #[test]
    fn pending_thumbnails_counts_loading_entries() {
        let mut gallery = Gallery::new();
        let generation = gallery.apply_results(urls(&["a.png", "b.png", "c.png"]));
        gallery.set_thumbnail(generation, "a.png", Thumbnail::Failed);

        assert_eq!(gallery.pending_thumbnails(), 2);
    }
}
