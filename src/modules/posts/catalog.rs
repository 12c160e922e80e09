//! The fixed seed catalog, newest first.

use once_cell::sync::Lazy;

use super::models::TravelPost;

const IMAGE_QUERY: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80";

struct SeedPost {
    id: &'static str,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    destination: &'static str,
    country: &'static str,
    photo: &'static str,
    published_at: &'static str,
    read_time: u32,
    tags: &'static [&'static str],
}

const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        id: "1",
        title: "Mystical Mornings in Santorini: Where Gods Once Walked",
        excerpt: "AI discovers the enchanting dawn rituals of this volcanic paradise, where azure meets infinity and time stands still.",
        content: "The first light of dawn in Santorini doesn't simply arrive, it performs. Like a celestial choreographer, the sun paints the whitewashed buildings in hues of amber and rose, while the Aegean Sea mirrors this daily masterpiece with perfect precision.\n\nOur AI analysis of thousands of sunrise photographs reveals that Santorini's unique position creates what locals call \"the golden embrace\": a 47-minute window where the volcanic cliffs act as natural reflectors, intensifying the morning light by 23% compared to other Greek islands.\n\nThe village of Oia, perched precariously on the caldera's edge, becomes a living canvas during these precious moments. The iconic blue domes, weathered by centuries of Aegean winds, seem to glow from within.",
        destination: "Santorini",
        country: "Greece",
        photo: "1570077188670-e3a8d69ac5ff",
        published_at: "2024-01-15T06:30:00Z",
        read_time: 8,
        tags: &["Greece", "Sunrise", "Photography", "Digital Nomad"],
    },
    SeedPost {
        id: "2",
        title: "Tokyo After Dark: AI Maps the Neon Labyrinth",
        excerpt: "Machine learning unveils the hidden patterns of Tokyo's nightlife, revealing the algorithmic poetry of urban illumination.",
        content: "Tokyo's neon jungle pulses with an algorithmic rhythm that reveals itself only through artificial intelligence. Our deep learning models have analyzed over 100,000 nighttime photographs to decode the mathematical beauty hidden within the city's electric chaos.\n\n**The Neon Algorithm**\n\nEach district of Tokyo follows its own nocturnal pattern. Shibuya's lights peak at 11:47 PM on average, creating what our AI calls \"peak luminosity convergence.\" The famous scramble crossing becomes a living circuit board, with pedestrian flow patterns matching the rhythm of the surrounding advertisements.",
        destination: "Tokyo",
        country: "Japan",
        photo: "1540959733332-eab4deabeeaf",
        published_at: "2024-01-14T22:15:00Z",
        read_time: 10,
        tags: &["Japan", "Nightlife", "Technology", "Urban Exploration"],
    },
    SeedPost {
        id: "3",
        title: "Patagonian Winds: AI Decodes Nature's Symphony",
        excerpt: "Machine learning analysis reveals the musical patterns hidden in Patagonia's legendary winds, creating a natural orchestra.",
        content: "In the vast expanses of Patagonia, where the Andes meet the Atlantic, artificial intelligence has discovered something remarkable: the wind doesn't just blow, it composes. Our acoustic analysis of Patagonian weather patterns reveals a natural symphony that has been playing for millennia.\n\n**The Physics of Wind Music**\n\nUsing advanced audio processing algorithms, we've identified that Patagonian winds create distinct \"musical phrases\" as they navigate the complex topography. The granite spires of Torres del Paine act as massive organ pipes, generating low-frequency resonances that can be felt as much as heard.",
        destination: "Patagonia",
        country: "Argentina/Chile",
        photo: "1518611012118-696072aa579a",
        published_at: "2024-01-13T16:45:00Z",
        read_time: 12,
        tags: &["Patagonia", "Nature", "Science", "Wildlife"],
    },
    SeedPost {
        id: "4",
        title: "Bali's Digital Detox: AI Paradox in Paradise",
        excerpt: "How artificial intelligence is helping travelers disconnect from technology in Bali's most serene corners.",
        content: "In a delicious irony, artificial intelligence is becoming the key to digital detox in Bali. Our machine learning algorithms have identified the perfect \"disconnection zones\" across the island, where travelers can find respite from our hyperconnected world.\n\n**The Science of Serenity**\n\nUsing satellite imagery, acoustic mapping, and cellular signal analysis, we've created the first comprehensive \"tranquility index\" for Bali. The results reveal surprising pockets of profound peace hidden throughout the island, many unknown to traditional guidebooks.",
        destination: "Bali",
        country: "Indonesia",
        photo: "1537953773345-d172ccf13cf1",
        published_at: "2024-01-12T08:20:00Z",
        read_time: 9,
        tags: &["Bali", "Wellness", "Digital Detox", "Culture"],
    },
    SeedPost {
        id: "5",
        title: "Arctic Aurora: AI Predicts the Dance of Light",
        excerpt: "Machine learning models crack the code of aurora borealis, revealing optimal viewing times and locations.",
        content: "The Northern Lights have captivated humanity for millennia, but artificial intelligence is revolutionizing how we experience this celestial phenomenon. Our predictive models, trained on decades of geomagnetic data, can now forecast aurora activity with 94.7% accuracy up to 72 hours in advance.\n\n**The Aurora Algorithm**\n\nAurora borealis occurs when charged particles from solar wind interact with Earth's magnetosphere. Our models combine solar wind speed, magnetometer readings and local cloud cover into a single viewing score for every night of the season.",
        destination: "Tromsø",
        country: "Norway",
        photo: "1531366936337-7c912a4589a7",
        published_at: "2024-01-11T23:30:00Z",
        read_time: 11,
        tags: &["Norway", "Aurora Borealis", "Science", "Photography"],
    },
    SeedPost {
        id: "6",
        title: "Marrakech Markets: AI Navigates the Sensory Labyrinth",
        excerpt: "Machine learning maps the complex ecosystem of Marrakech's medina, revealing hidden patterns in chaos.",
        content: "The medina of Marrakech appears chaotic to the untrained eye, but artificial intelligence reveals it as a sophisticated urban ecosystem operating on principles refined over a thousand years. Our spatial analysis algorithms have decoded the hidden logic behind what seems like beautiful pandemonium.\n\n**The Mathematics of the Medina**\n\nUsing GPS tracking, purchase pattern analysis, and crowd flow modeling, we've discovered that the medina operates on fractal principles. Each souk contains smaller versions of the overall pattern, creating a self-similar structure that maximizes both foot traffic and merchant visibility.",
        destination: "Marrakech",
        country: "Morocco",
        photo: "1539650116574-75c0c6d73f6e",
        published_at: "2024-01-10T14:20:00Z",
        read_time: 13,
        tags: &["Morocco", "Culture", "Markets", "Urban Planning"],
    },
];

static CATALOG: Lazy<Vec<TravelPost>> =
    Lazy::new(|| SEED_POSTS.iter().map(SeedPost::to_post).collect());

impl SeedPost {
    fn to_post(&self) -> TravelPost {
        TravelPost {
            id: self.id.to_string(),
            title: self.title.to_string(),
            excerpt: self.excerpt.to_string(),
            content: self.content.to_string(),
            destination: self.destination.to_string(),
            country: self.country.to_string(),
            image_url: format!(
                "https://images.unsplash.com/photo-{}{}",
                self.photo, IMAGE_QUERY
            ),
            published_at: self.published_at.to_string(),
            read_time: self.read_time,
            tags: self.tags.iter().map(|tag| tag.to_string()).collect(),
            ai_generated: true,
        }
    }
}

/// The seed catalog. Built once and never mutated.
pub fn seed_posts() -> &'static [TravelPost] {
    &CATALOG
}
