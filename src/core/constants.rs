//! Compiled-in lists shared by every invocation.

/// Host substrings that mostly serve stock, merch or vector art.
pub const BLOCK_SITES: &[&str] = &[
    "pinterest.",
    "etsy.",
    "redbubble.",
    "aliexpress.",
    "temu.",
    "vectorstock.",
    "shutterstock.",
    "adobe.",
    "istockphoto.",
    "123rf.",
    "dreamstime.",
    "depositphotos.",
    "freepik.",
    "pngtree.",
];

/// Title substrings (lowercase) that indicate a non-photo result.
pub const BLOCK_WORDS: &[&str] = &[
    "sticker",
    "clipart",
    "svg",
    "logo",
    "vector",
    "icon",
    "plush",
    "plushie",
    "toy",
    "merch",
    "tattoo",
    "drawing",
    "ai",
    "midjourney",
    "dalle",
    "generated",
    "meme",
    "cartoon",
];

pub const SEED_QUERIES: &[&str] = &[
    "lizard wildlife photo",
    "lizard macro photo",
    "gecko close up nature photo",
    "anole close up photo",
    "iguana portrait wildlife photo",
    "lizard basking on rock photo",
    "reptile macro eyes photo",
    "lizard nature photography outdoors",
];

pub const NEGATIVE_TERMS: &[&str] = &[
    "-plush", "-toy", "-merch", "-clipart", "-sticker", "-logo", "-vector", "-cartoon",
];

/// Hotlink-friendly images used when dynamic sourcing fails.
pub const STATIC_FALLBACKS: &[&str] = &[
    "https://upload.wikimedia.org/wikipedia/commons/5/50/Common_lizard.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/f/f4/Anolis_carolinensis.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/3/32/Agama_agama_male.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/2/28/Iguana_iguana_1.jpg",
];

pub const VECTOR_EXTENSIONS: &[&str] = &[".svg", ".svgz"];

pub const CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=3600";

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";
pub const IMAGE_ACCEPT: &str = "image/*,*/*;q=0.8";

pub const FILENAME_STEM: &str = "lizard";

/// Largest image served. Base64 inflates it by a third and the Lambda
/// response payload is capped at 6 MB.
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;
