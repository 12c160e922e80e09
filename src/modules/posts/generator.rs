//! Mock "AI" post generator.
//!
//! Nothing here talks to a model: a post is assembled from the configured
//! destination and theme lists, a random source and a clock reading.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::ensure;
use once_cell::sync::Lazy;
use rand::Rng;
use time::OffsetDateTime;
use voyage_kernel::settings::GeneratorSettings;

use super::models::TravelPost;
use crate::utils;

const TITLE_SEPARATOR: &str = ": ";
const IMAGE_QUERY: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80";
const IMAGE_TOKEN_BOUND: u64 = 1_000_000_000;

/// Shared by every generator built with [`PostGenerator::new`].
static PROCESS_IDS: Lazy<Arc<IdSequence>> = Lazy::new(|| Arc::new(IdSequence::default()));

/// Hands out strictly increasing millisecond-based ids.
///
/// Two calls inside the same millisecond (or after the clock stepped back)
/// get `previous + 1`.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: AtomicU64,
}

impl IdSequence {
    pub fn next(&self, now_millis: u64) -> u64 {
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(previous + 1);
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => previous = actual,
            }
        }
    }
}

/// Builds new posts from fixed candidate lists.
#[derive(Debug, Clone)]
pub struct PostGenerator {
    destinations: Vec<String>,
    themes: Vec<String>,
    read_time_min: u32,
    read_time_max: u32,
    country: String,
    image_base_url: String,
    tags: Vec<String>,
    ids: Arc<IdSequence>,
}

impl PostGenerator {
    /// Validate the settings and build a generator sharing the process id sequence.
    pub fn new(settings: &GeneratorSettings) -> anyhow::Result<Self> {
        ensure!(
            !settings.destinations.is_empty(),
            "generator needs at least one destination"
        );
        ensure!(
            !settings.themes.is_empty(),
            "generator needs at least one theme"
        );
        ensure!(
            settings.read_time_min > 0,
            "generator read_time_min must be positive"
        );
        ensure!(
            settings.read_time_min <= settings.read_time_max,
            "generator read_time_min ({}) exceeds read_time_max ({})",
            settings.read_time_min,
            settings.read_time_max
        );

        Ok(Self {
            destinations: settings.destinations.clone(),
            themes: settings.themes.clone(),
            read_time_min: settings.read_time_min,
            read_time_max: settings.read_time_max,
            country: settings.country.clone(),
            image_base_url: settings.image_base_url.trim_end_matches('/').to_string(),
            tags: settings.tags.clone(),
            ids: PROCESS_IDS.clone(),
        })
    }

    /// Use a private id sequence instead of the process-wide one.
    pub fn with_id_sequence(mut self, ids: Arc<IdSequence>) -> Self {
        self.ids = ids;
        self
    }

    pub fn read_time_range(&self) -> (u32, u32) {
        (self.read_time_min, self.read_time_max)
    }

    /// Generate a post from the thread-local RNG and the wall clock.
    pub fn generate(&self) -> TravelPost {
        self.generate_with(&mut rand::thread_rng(), OffsetDateTime::now_utc())
    }

    /// Generate a post from an explicit random source and clock reading.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R, now: OffsetDateTime) -> TravelPost {
        let destination = &self.destinations[rng.gen_range(0..self.destinations.len())];
        let theme = &self.themes[rng.gen_range(0..self.themes.len())];
        let image_token = rng.gen_range(0..IMAGE_TOKEN_BOUND);
        let read_time = rng.gen_range(self.read_time_min..=self.read_time_max);

        let now_millis = u64::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(0);
        let id = self.ids.next(now_millis);

        let mut tags = self.tags.clone();
        tags.push(destination.clone());

        TravelPost {
            id: id.to_string(),
            title: format!("{destination}{TITLE_SEPARATOR}{theme}"),
            excerpt: format!(
                "AI analysis reveals fascinating insights about {destination}, uncovering patterns invisible to traditional travel guides."
            ),
            content: format!(
                "This is a dynamically generated travel post about {destination}. Our AI systems have analyzed local patterns around \"{theme}\" to provide unique insights about this destination..."
            ),
            destination: destination.clone(),
            country: self.country.clone(),
            image_url: format!("{}/photo-{image_token}{IMAGE_QUERY}", self.image_base_url),
            published_at: utils::iso_timestamp(now),
            read_time,
            tags,
            ai_generated: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use time::macros::datetime;

    fn generator() -> PostGenerator {
        PostGenerator::new(&GeneratorSettings::default())
            .unwrap()
            .with_id_sequence(Arc::new(IdSequence::default()))
    }

    fn single_choice_settings() -> GeneratorSettings {
        GeneratorSettings {
            destinations: vec!["Kyoto".to_string()],
            themes: vec!["Temples at dawn".to_string()],
            read_time_min: 7,
            read_time_max: 7,
            ..GeneratorSettings::default()
        }
    }

    #[test]
    fn generated_posts_hold_field_invariants() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(42);
        let settings = GeneratorSettings::default();

        for _ in 0..200 {
            let post = generator.generate_with(&mut rng, OffsetDateTime::now_utc());
            assert!(!post.id.is_empty());
            assert!(!post.title.is_empty());
            assert!(!post.excerpt.is_empty());
            assert!(!post.content.is_empty());
            assert!((5..=12).contains(&post.read_time));
            assert!(post.ai_generated);
            assert_eq!(post.country, "Various");
            assert!(settings.destinations.contains(&post.destination));
            assert!(post
                .image_url
                .starts_with("https://images.unsplash.com/photo-"));
            assert!(post.image_url.ends_with(IMAGE_QUERY));
            assert_eq!(post.tags[0], "AI Generated");
            assert_eq!(post.tags.last(), Some(&post.destination));
            assert!(post.title.starts_with(&format!("{}: ", post.destination)));
        }
    }

    #[test]
    fn exact_output_from_single_choice_lists() {
        let generator = PostGenerator::new(&single_choice_settings())
            .unwrap()
            .with_id_sequence(Arc::new(IdSequence::default()));
        let mut rng = StdRng::seed_from_u64(7);
        let now = datetime!(2024-03-01 09:15:30.250 UTC);

        let post = generator.generate_with(&mut rng, now);

        assert_eq!(post.id, "1709284530250");
        assert_eq!(post.title, "Kyoto: Temples at dawn");
        assert_eq!(post.destination, "Kyoto");
        assert_eq!(post.published_at, "2024-03-01T09:15:30.250Z");
        assert_eq!(post.read_time, 7);
        assert_eq!(post.tags, vec!["AI Generated", "Exploration", "Kyoto"]);
        assert!(post.excerpt.contains("Kyoto"));
        assert!(post.content.contains("Kyoto"));
        assert!(post.content.contains("Temples at dawn"));
    }

    #[test]
    fn same_seed_same_post() {
        let now = datetime!(2024-03-01 09:15:30 UTC);
        let first = generator().generate_with(&mut StdRng::seed_from_u64(3), now);
        let second = generator().generate_with(&mut StdRng::seed_from_u64(3), now);
        assert_eq!(first, second);
    }

    #[test]
    fn ids_stay_unique_within_one_clock_tick() {
        let generator = generator();
        let mut rng = StdRng::seed_from_u64(1);
        let now = datetime!(2024-03-01 09:15:30 UTC);

        let ids: HashSet<String> = (0..50)
            .map(|_| generator.generate_with(&mut rng, now).id)
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn consecutive_generations_differ() {
        let generator = PostGenerator::new(&GeneratorSettings::default()).unwrap();
        let first = generator.generate();
        let second = generator.generate();
        assert_ne!(first.id, second.id);
        assert!(second.id.parse::<u64>().unwrap() > first.id.parse::<u64>().unwrap());
    }

    #[test]
    fn id_sequence_survives_clock_going_backwards() {
        let ids = IdSequence::default();
        assert_eq!(ids.next(1_000), 1_000);
        assert_eq!(ids.next(1_000), 1_001);
        assert_eq!(ids.next(900), 1_002);
        assert_eq!(ids.next(5_000), 5_000);
    }

    #[test]
    fn rejects_unusable_settings() {
        let empty_destinations = GeneratorSettings {
            destinations: vec![],
            ..GeneratorSettings::default()
        };
        assert!(PostGenerator::new(&empty_destinations).is_err());

        let empty_themes = GeneratorSettings {
            themes: vec![],
            ..GeneratorSettings::default()
        };
        assert!(PostGenerator::new(&empty_themes).is_err());

        let inverted = GeneratorSettings {
            read_time_min: 9,
            read_time_max: 4,
            ..GeneratorSettings::default()
        };
        assert!(PostGenerator::new(&inverted).is_err());

        let zero = GeneratorSettings {
            read_time_min: 0,
            ..GeneratorSettings::default()
        };
        assert!(PostGenerator::new(&zero).is_err());
    }
}
