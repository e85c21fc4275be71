//! Small formatting and collection helpers shared by the timeline

use rand::Rng;
use rand::seq::SliceRandom;

/// Left-pad a number with a single zero when it is below 10 (`5` -> `"05"`)
pub fn pad_zero(x: u32) -> String {
    format!("{:02}", x)
}

/// Last non-empty `/`-separated segment of a repository path (`"/x/proj/"` -> `"proj"`)
pub fn repo_display_name(path: &str) -> &str {
    path.split('/')
        .rfind(|segment| !segment.is_empty())
        .unwrap_or("")
}

/// Shuffle a slice in place using the thread-local RNG
pub fn shuffle<T>(items: &mut [T]) {
    shuffle_with(items, &mut rand::rng());
}

/// Shuffle a slice in place with a caller-provided RNG (seedable in tests)
pub fn shuffle_with<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
