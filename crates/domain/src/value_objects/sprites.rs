//! Sprite URL construction.

/// Default base URL for static sprites.
pub const DEFAULT_SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Default base URL for animated sprites.
pub const DEFAULT_ANIMATED_SPRITE_BASE_URL: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/versions/generation-v/black-white/animated";

/// Image shown for creatures that could not be loaded.
pub const PLACEHOLDER_SPRITE_URL: &str = "https://via.placeholder.com/80?text=Error";

/// Where sprite images for a creature id live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteUrls {
    static_base: String,
    animated_base: String,
    placeholder: String,
}

impl SpriteUrls {
    pub fn new(static_base: &str, animated_base: &str) -> Self {
        Self {
            static_base: static_base.trim_end_matches('/').to_string(),
            animated_base: animated_base.trim_end_matches('/').to_string(),
            placeholder: PLACEHOLDER_SPRITE_URL.to_string(),
        }
    }

    pub fn sprite(&self, id: u32) -> String {
        format!("{}/{}.png", self.static_base, id)
    }

    pub fn animated(&self, id: u32) -> String {
        format!("{}/{}.gif", self.animated_base, id)
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl Default for SpriteUrls {
    fn default() -> Self {
        Self::new(DEFAULT_SPRITE_BASE_URL, DEFAULT_ANIMATED_SPRITE_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_urls_from_id() {
        let urls = SpriteUrls::new("https://sprites.test/pokemon/", "https://sprites.test/anim");

        assert_eq!(urls.sprite(252), "https://sprites.test/pokemon/252.png");
        assert_eq!(urls.animated(252), "https://sprites.test/anim/252.gif");
    }
}
