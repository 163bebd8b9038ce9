//! Species-level detail shown in a creature's detail view.

/// Gender rate meaning the species has no gender.
pub const GENDERLESS: i8 = -1;

/// Species detail fetched on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesDetail {
    /// Female fraction in eighths (0-8), or `GENDERLESS`
    pub gender_rate: i8,
    /// 0-255
    pub capture_rate: u8,
    pub hatch_counter: u32,
}

impl SpeciesDetail {
    /// Placeholder used when the species endpoint is unavailable.
    pub fn unknown() -> Self {
        Self {
            gender_rate: GENDERLESS,
            capture_rate: 0,
            hatch_counter: 0,
        }
    }

    /// Female percentage, `None` for genderless species.
    pub fn female_percent(&self) -> Option<f64> {
        if self.gender_rate < 0 {
            None
        } else {
            Some(f64::from(self.gender_rate) / 8.0 * 100.0)
        }
    }

    pub fn gender_ratio_label(&self) -> String {
        match self.gender_rate {
            GENDERLESS => "Genderless".to_string(),
            0 => "100% ♂ Male".to_string(),
            8 => "100% ♀ Female".to_string(),
            _ => {
                let female = self.female_percent().unwrap_or(0.0);
                let male = 100.0 - female;
                format!("{:.0}% ♂ / {:.0}% ♀", male.round(), female.round())
            }
        }
    }
}

impl Default for SpeciesDetail {
    fn default() -> Self {
        Self::unknown()
    }
}
