//! Value objects - Immutable objects defined by their attributes

mod capture_method;
mod names;
mod sprites;
mod theme;
mod version;

pub use capture_method::CaptureMethod;
pub use names::{capitalize_first, format_display_name, is_creature_key};
pub use sprites::{
    SpriteUrls, DEFAULT_ANIMATED_SPRITE_BASE_URL, DEFAULT_SPRITE_BASE_URL, PLACEHOLDER_SPRITE_URL,
};
pub use theme::{Theme, THEME_STORAGE_KEY};
pub use version::{filter_by_version, VersionKey, KNOWN_EDITIONS};
