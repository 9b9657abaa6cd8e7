//! Curated wellness media catalog.
//!
//! Media replies carry a category and a type; the boundary resolves them to a
//! concrete item from here.

use super::entities::{MediaCategory, MediaItem, MediaType};
use rand::Rng;
use rand::seq::SliceRandom;

const BELL_AUDIO: &str = "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav";

const CATALOG: &[MediaItem] = &[
    MediaItem {
        id: "relaxing-music-1",
        title: "Peaceful Piano Meditation",
        description: "Gentle piano melodies to help you relax and unwind",
        media_type: MediaType::Audio,
        category: MediaCategory::Relaxation,
        url: BELL_AUDIO,
        thumbnail: None,
        duration_secs: 600,
    },
    MediaItem {
        id: "relaxing-music-2",
        title: "Nature Sounds & Rain",
        description: "Soothing rain sounds with gentle nature ambiance",
        media_type: MediaType::Audio,
        category: MediaCategory::Nature,
        url: BELL_AUDIO,
        thumbnail: None,
        duration_secs: 900,
    },
    MediaItem {
        id: "relaxing-music-3",
        title: "Ocean Waves Meditation",
        description: "Calming ocean waves to wash away stress and anxiety",
        media_type: MediaType::Audio,
        category: MediaCategory::Meditation,
        url: BELL_AUDIO,
        thumbnail: None,
        duration_secs: 1200,
    },
    MediaItem {
        id: "relaxing-music-4",
        title: "Soft Ambient Music",
        description: "Gentle ambient sounds perfect for focus and relaxation",
        media_type: MediaType::Audio,
        category: MediaCategory::Music,
        url: BELL_AUDIO,
        thumbnail: None,
        duration_secs: 720,
    },
    MediaItem {
        id: "meditation-video-1",
        title: "5-Minute Breathing Meditation",
        description: "Quick guided breathing exercise to center yourself",
        media_type: MediaType::Video,
        category: MediaCategory::Meditation,
        url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
        thumbnail: Some("https://via.placeholder.com/400x225/4299e1/ffffff?text=Breathing+Meditation"),
        duration_secs: 300,
    },
    MediaItem {
        id: "meditation-video-2",
        title: "10-Minute Mindfulness Practice",
        description: "Gentle mindfulness meditation for mental clarity",
        media_type: MediaType::Video,
        category: MediaCategory::Meditation,
        url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
        thumbnail: Some("https://via.placeholder.com/400x225/48bb78/ffffff?text=Mindfulness+Practice"),
        duration_secs: 600,
    },
    MediaItem {
        id: "meditation-video-3",
        title: "Progressive Muscle Relaxation",
        description: "Full body relaxation technique to release tension",
        media_type: MediaType::Video,
        category: MediaCategory::Relaxation,
        url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
        thumbnail: Some("https://via.placeholder.com/400x225/9f7aea/ffffff?text=Muscle+Relaxation"),
        duration_secs: 900,
    },
    MediaItem {
        id: "nature-video-1",
        title: "Forest Walk Visualization",
        description: "Immersive forest experience for stress relief",
        media_type: MediaType::Video,
        category: MediaCategory::Nature,
        url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
        thumbnail: Some("https://via.placeholder.com/400x225/38a169/ffffff?text=Forest+Walk"),
        duration_secs: 1200,
    },
    MediaItem {
        id: "nature-video-2",
        title: "Sunrise Over Mountains",
        description: "Peaceful mountain sunrise for morning meditation",
        media_type: MediaType::Video,
        category: MediaCategory::Nature,
        url: "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/Sintel.mp4",
        thumbnail: Some("https://via.placeholder.com/400x225/ed8936/ffffff?text=Mountain+Sunrise"),
        duration_secs: 600,
    },
    MediaItem {
        id: "therapy-audio-1",
        title: "Anxiety Relief Meditation",
        description: "Guided meditation specifically designed for anxiety management",
        media_type: MediaType::Audio,
        category: MediaCategory::Therapy,
        url: BELL_AUDIO,
        thumbnail: None,
        duration_secs: 900,
    },
    MediaItem {
        id: "therapy-audio-2",
        title: "Sleep Stories for Rest",
        description: "Calming bedtime stories to help with insomnia",
        media_type: MediaType::Audio,
        category: MediaCategory::Therapy,
        url: BELL_AUDIO,
        thumbnail: None,
        duration_secs: 1800,
    },
];

/// Read-only view over the built-in catalog.
#[derive(Debug, Clone, Copy)]
pub struct MediaLibrary {
    items: &'static [MediaItem],
}

impl Default for MediaLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MediaLibrary {
    pub fn builtin() -> Self {
        Self { items: CATALOG }
    }

    pub fn items(&self) -> &'static [MediaItem] {
        self.items
    }

    pub fn by_category(&self, category: MediaCategory) -> Vec<&'static MediaItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Case-insensitive search over title, description and category.
    pub fn search(&self, query: &str) -> Vec<&'static MediaItem> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&query)
                    || item.description.to_lowercase().contains(&query)
                    || item.category.as_str().contains(&query)
            })
            .collect()
    }

    /// Pick an item for a media reply.
    ///
    /// `Any` draws from the whole category. A concrete type prefers items of
    /// that type and falls back to the whole category when none exist.
    pub fn suggest<R: Rng + ?Sized>(
        &self,
        category: MediaCategory,
        media_type: MediaType,
        rng: &mut R,
    ) -> Option<&'static MediaItem> {
        let in_category = self.by_category(category);
        if media_type != MediaType::Any {
            let typed: Vec<_> = in_category
                .iter()
                .copied()
                .filter(|item| item.media_type == media_type)
                .collect();
            if let Some(item) = typed.choose(rng) {
                return Some(*item);
            }
        }
        in_category.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_every_category_has_items() {
        let library = MediaLibrary::builtin();
        for category in [
            MediaCategory::Relaxation,
            MediaCategory::Meditation,
            MediaCategory::Nature,
            MediaCategory::Music,
            MediaCategory::Therapy,
        ] {
            assert!(!library.by_category(category).is_empty(), "{category}");
        }
        assert!(library.by_category(MediaCategory::Unspecified).is_empty());
    }

    #[test]
    fn test_suggest_respects_type() {
        let library = MediaLibrary::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            let item = library
                .suggest(MediaCategory::Nature, MediaType::Video, &mut rng)
                .unwrap();
            assert_eq!(item.category, MediaCategory::Nature);
            assert_eq!(item.media_type, MediaType::Video);
        }
    }

    #[test]
    fn test_suggest_falls_back_to_category() {
        let library = MediaLibrary::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        // No music videos exist.
        let item = library
            .suggest(MediaCategory::Music, MediaType::Video, &mut rng)
            .unwrap();
        assert_eq!(item.id, "relaxing-music-4");
    }

    #[test]
    fn test_search_matches_title_description_category() {
        let library = MediaLibrary::builtin();
        let ids: Vec<_> = library.search("SLEEP").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["therapy-audio-2"]);
        assert_eq!(library.search("therapy").len(), 2);
        assert!(library.search("karaoke").is_empty());
    }

    #[test]
    fn test_videos_have_thumbnails() {
        let library = MediaLibrary::builtin();
        for item in library.items() {
            if item.media_type == MediaType::Video {
                assert!(item.url.ends_with(".mp4"));
                assert!(item.thumbnail.is_some());
            }
        }
    }
}
