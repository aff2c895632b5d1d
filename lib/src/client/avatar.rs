//! Profile avatars. Generated avatars are picked from a few fixed styles;
//! a profile without a usable avatar shows the default one.

use rand::seq::SliceRandom;

pub const DEFAULT_AVATAR: &str = "https://api.dicebear.com/7.x/croodles-neutral/svg?seed=soulsync&backgroundColor=b6e3f4,c0aede,d1d4f9&mood=happy&facialHairProbability=0";

pub const AVATAR_STYLES: [&str; 3] = [
    "https://api.dicebear.com/7.x/avataaars/svg?seed=soul1&backgroundColor=b6e3f4,c0aede,d1d4f9&clothesColor=25557c,65c9ff,5199e4",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=soul2&backgroundColor=ffd5dc,ffdfba,d1d4f9&clothesColor=ff6b9d,65c9ff,5199e4",
    "https://api.dicebear.com/7.x/avataaars/svg?seed=soul3&backgroundColor=c7ceea,ffd3e4,d1d4f9&clothesColor=662d91,ff6b9d,65c9ff",
];


/// Uniform pick among [`AVATAR_STYLES`].
pub fn generate_avatar() -> String {
    AVATAR_STYLES
        .choose(&mut rand::thread_rng())
        .unwrap_or(&DEFAULT_AVATAR)
        .to_string()
}

pub fn avatar_or_default(avatar: Option<&str>) -> &str {
    match avatar.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_AVATAR,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_avatar_is_one_of_the_styles() {
        for _ in 0..20 {
            let avatar = generate_avatar();
            assert!(AVATAR_STYLES.contains(&avatar.as_str()));
        }
    }

    #[test]
    fn missing_avatar_uses_default() {
        assert_eq!(avatar_or_default(None), DEFAULT_AVATAR);
        assert_eq!(avatar_or_default(Some("  ")), DEFAULT_AVATAR);
        assert_eq!(avatar_or_default(Some("https://a/b.svg")), "https://a/b.svg");
    }
}
