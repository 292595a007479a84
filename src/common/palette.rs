use iced::Color;
use rand::seq::SliceRandom;
use rand::Rng;

// Pastel card backgrounds
const BACKGROUNDS: [Color; 6] = [
    Color::from_rgb(0.99, 0.95, 0.90), // peach
    Color::from_rgb(0.93, 0.97, 0.92), // mint
    Color::from_rgb(0.92, 0.95, 0.99), // sky
    Color::from_rgb(0.98, 0.93, 0.96), // rose
    Color::from_rgb(0.99, 0.98, 0.89), // butter
    Color::from_rgb(0.95, 0.93, 0.99), // lavender
];

// Text tones that stay readable on every background above
const TEXTS: [Color; 5] = [
    Color::from_rgb(0.55, 0.22, 0.05), // burnt orange
    Color::from_rgb(0.10, 0.38, 0.18), // forest
    Color::from_rgb(0.12, 0.25, 0.55), // navy
    Color::from_rgb(0.52, 0.10, 0.32), // plum
    Color::from_rgb(0.20, 0.20, 0.25), // charcoal
];

/// Background and text colour of one result card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardColors {
    pub background: Color,
    pub text: Color,
}

impl CardColors {
    /// Picks background and text independently.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            background: *BACKGROUNDS.choose(rng).unwrap_or(&BACKGROUNDS[0]),
            text: *TEXTS.choose(rng).unwrap_or(&TEXTS[0]),
        }
    }

    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }
}
