use crate::entry::GameEntry;

struct SeedGame {
    id: &'static str,
    title: &'static str,
    url: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
}

const SEED_GAMES: &[SeedGame] = &[
    SeedGame {
        id: "dig-game",
        title: "Dig Game",
        url: "https://diggame.vercel.app",
        description: "Exciting digging adventure. Uncover hidden treasures beneath the surface.",
        tags: &["Adventure", "Action", "Arcade"],
    },
    SeedGame {
        id: "nego-ai",
        title: "Nego AI",
        url: "https://negoai.vercel.app/",
        description: "Challenge an advanced AI in this strategic negotiation simulation.",
        tags: &["AI", "Strategy", "Simulation"],
    },
    SeedGame {
        id: "astro-game",
        title: "Astro Game",
        url: "https://astrogame.vercel.app/",
        description: "Navigate the cosmos and survive the dangers of deep space.",
        tags: &["Space", "Sci-Fi", "Action"],
    },
    SeedGame {
        id: "chips-game",
        title: "Chips Game",
        url: "https://chipsgame.vercel.app/",
        description: "A strategic puzzle game. Stack, bet, and win with chips.",
        tags: &["Puzzle", "Strategy", "Board"],
    },
    SeedGame {
        id: "charity-game",
        title: "Charity Game",
        url: "https://charitygame.vercel.app/",
        description: "Make a difference in the world through this philanthropic simulation.",
        tags: &["Simulation", "Social", "Educational"],
    },
    SeedGame {
        id: "ski-game",
        title: "Ski Game",
        url: "https://skigame.vercel.app/",
        description: "Hit the slopes! Dodge obstacles and race to the finish line.",
        tags: &["Sports", "Winter", "Action"],
    },
    SeedGame {
        id: "zombie-survival",
        title: "Zombie Survival",
        url: "https://zombie.vercel.app/",
        description: "Fight for survival against hordes of zombies in this intense game.",
        tags: &["Horror", "Survival", "Action"],
    },
    SeedGame {
        id: "pizza-ng",
        title: "Pizza NG",
        url: "https://pizzang.vercel.app/",
        description: "Become a master chef and bake the most delicious pizzas.",
        tags: &["Cooking", "Simulation", "Fun"],
    },
    SeedGame {
        id: "chemistry-game",
        title: "Chemistry Game",
        url: "https://chemistrygame.vercel.app/",
        description: "Explore chemical reactions and elements in a safe virtual lab.",
        tags: &["Science", "Educational", "Puzzle"],
    },
    SeedGame {
        id: "shoe-laces",
        title: "Shoe Laces",
        url: "https://shoe-laces.vercel.app/",
        description: "Master the art of tying shoe laces with various techniques.",
        tags: &["Educational", "Life Skills", "Casual"],
    },
    SeedGame {
        id: "make-burger",
        title: "Make Burger",
        url: "https://makeburger.vercel.app",
        description: "Stack ingredients and serve the perfect burger before time runs out.",
        tags: &["Cooking", "Time Management", "Arcade"],
    },
    SeedGame {
        id: "hotdog-game",
        title: "Hotdog Game",
        url: "https://hotdog-game.vercel.app/",
        description: "A fun and fast-paced game centered around everyone's favorite snack.",
        tags: &["Arcade", "Food", "Casual"],
    },
];

/// Built-in catalog used when no persisted snapshot exists or the snapshot
/// fails to parse. Timestamps step back one second per entry so recency sort
/// is well-defined. Content is a fixture, not a contract.
pub fn seed_catalog(now_ms: i64) -> Vec<GameEntry> {
    SEED_GAMES
        .iter()
        .enumerate()
        .map(|(i, seed)| GameEntry {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            url: seed.url.to_string(),
            thumbnail_url: None,
            description: seed.description.to_string(),
            tags: seed.tags.iter().map(|t| (*t).to_string()).collect(),
            created_at: now_ms - (i as i64) * 1000,
        })
        .collect()
}
