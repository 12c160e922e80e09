use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use time::OffsetDateTime;
use voyage_app::{catalog, feed, generator::PostGenerator, models::TravelPost, utils};
use voyage_kernel::settings::Settings;

const EXCERPT_CHARS: usize = 100;

#[derive(Parser)]
#[command(name = "voyage", about = "Explore the AI travel feed from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print freshly generated posts as JSON
    Generate {
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[command(flatten)]
        random: RandomArgs,
    },
    /// Print the feed, optionally after generating new posts
    Feed {
        /// Only show posts carrying this exact tag
        #[arg(long)]
        tag: Option<String>,
        #[command(flatten)]
        catalog: CatalogArgs,
        /// Pause before each generation, like the web feed does
        #[arg(long, default_value_t = 0)]
        pace_ms: u64,
    },
    /// Print the tag vocabulary, one tag per line
    Tags {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

#[derive(Args)]
struct RandomArgs {
    /// Seed the random source for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct CatalogArgs {
    /// Generate this many posts in front of the seed catalog
    #[arg(long = "generate", default_value_t = 0)]
    generated: usize,
    #[command(flatten)]
    random: RandomArgs,
}

impl RandomArgs {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().with_context(|| "failed to load voyage settings")?;
    if let Err(err) = voyage_telemetry::init_stderr(&settings.telemetry) {
        eprintln!("telemetry disabled: {err:#}");
    }

    let generator = PostGenerator::new(&settings.generator)
        .with_context(|| "invalid generator settings")?;

    match cli.command {
        Command::Generate { count, random } => {
            let mut rng = random.rng();
            let posts: Vec<TravelPost> = (0..count)
                .map(|_| generator.generate_with(&mut rng, OffsetDateTime::now_utc()))
                .collect();
            println!("{}", serde_json::to_string_pretty(&posts)?);
        }
        Command::Feed {
            tag,
            catalog,
            pace_ms,
        } => {
            let posts = build_catalog(&generator, &catalog, pace_ms).await;
            let selected = tag.as_deref().filter(|t| !t.is_empty());
            print_feed(&posts, selected);
        }
        Command::Tags { catalog } => {
            let posts = build_catalog(&generator, &catalog, 0).await;
            for tag in feed::all_tags(&posts) {
                println!("{tag}");
            }
        }
    }

    Ok(())
}

/// The seed catalog with `generated` new posts prepended, newest first.
async fn build_catalog(
    generator: &PostGenerator,
    args: &CatalogArgs,
    pace_ms: u64,
) -> Vec<TravelPost> {
    let mut rng = args.random.rng();
    let mut posts = catalog::seed_posts().to_vec();

    for _ in 0..args.generated {
        if pace_ms > 0 {
            tokio::time::sleep(Duration::from_millis(pace_ms)).await;
        }
        let post = generator.generate_with(&mut rng, OffsetDateTime::now_utc());
        tracing::debug!(
            post_id = %post.id,
            destination = %post.destination,
            "prepending generated post"
        );
        posts = feed::prepend(&posts, post);
    }

    posts
}

fn print_feed(posts: &[TravelPost], selected_tag: Option<&str>) {
    let view = feed::FeedView::project(posts, selected_tag);
    let now = OffsetDateTime::now_utc();

    println!("Tags: {}", view.tags.join(", "));
    println!();

    if view.is_empty() {
        if let Some(tag) = selected_tag {
            println!("No stories found for \"{tag}\"");
        }
        return;
    }

    for post in &view.posts {
        let date = utils::format_date(&post.published_at)
            .unwrap_or_else(|| post.published_at.clone());
        let ago = utils::time_ago(&post.published_at, now).unwrap_or_default();
        println!("{}", post.title);
        println!(
            "  {}, {} | {} ({}) | {} min read",
            post.destination, post.country, date, ago, post.read_time
        );
        println!("  {}", utils::truncate_text(&post.excerpt, EXCERPT_CHARS));
        println!("  #{}", post.tags.join(" #"));
        println!();
    }

    println!("{} of {} stories", view.total, posts.len());
}
