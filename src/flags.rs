//! Flag artwork
//!
//! Resolves a country identifier to a simplified flag drawn from colored
//! cells. Both front ends paint from `FlagArt::color_at`, so the quiz
//! core never deals with artwork.

/// RGB triple
pub type Rgb = (u8, u8, u8);

const WHITE: Rgb = (255, 255, 255);
const BLACK: Rgb = (0, 0, 0);
const GRAY: Rgb = (110, 110, 110);

/// Layout of the flag's color fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Bands stacked top to bottom, each with a relative height
    Horizontal(Vec<(Rgb, u16)>),
    /// Bands left to right, each with a relative width
    Vertical(Vec<(Rgb, u16)>),
    /// Centered cross with a border over a field
    Cross { field: Rgb, border: Rgb, cross: Rgb },
    /// Thirteen stripes with a canton in the top left
    StripesWithCanton { stripe: Rgb, alternate: Rgb, canton: Rgb },
    /// Unknown country
    Placeholder,
}

/// Simplified flag for terminal display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagArt {
    pub pattern: Pattern,
}

/// Look up the artwork for a country
pub fn flag_for(country: &str) -> Option<FlagArt> {
    use Pattern::*;

    let pattern = match country {
        "Estonia" => Horizontal(vec![((0, 114, 206), 1), (BLACK, 1), (WHITE, 1)]),
        "France" => Vertical(vec![((0, 35, 149), 1), (WHITE, 1), ((237, 41, 57), 1)]),
        "Germany" => Horizontal(vec![(BLACK, 1), ((221, 0, 0), 1), ((255, 206, 0), 1)]),
        "Ireland" => Vertical(vec![((22, 155, 98), 1), (WHITE, 1), ((255, 136, 62), 1)]),
        "Italy" => Vertical(vec![((0, 146, 70), 1), (WHITE, 1), ((206, 43, 55), 1)]),
        "Nigeria" => Vertical(vec![((0, 135, 81), 1), (WHITE, 1), ((0, 135, 81), 1)]),
        "Poland" => Horizontal(vec![(WHITE, 1), ((220, 20, 60), 1)]),
        "Russia" => Horizontal(vec![(WHITE, 1), ((0, 57, 166), 1), ((213, 43, 30), 1)]),
        "Spain" => Horizontal(vec![((170, 21, 27), 1), ((241, 191, 0), 2), ((170, 21, 27), 1)]),
        "UK" => Cross {
            field: (1, 33, 105),
            border: WHITE,
            cross: (200, 16, 46),
        },
        "US" => StripesWithCanton {
            stripe: (178, 34, 52),
            alternate: WHITE,
            canton: (60, 59, 110),
        },
        _ => return None,
    };

    Some(FlagArt { pattern })
}

/// Artwork for any country, falling back to a neutral placeholder
pub fn flag_or_placeholder(country: &str) -> FlagArt {
    flag_for(country).unwrap_or(FlagArt {
        pattern: Pattern::Placeholder,
    })
}

impl FlagArt {
    pub fn is_placeholder(&self) -> bool {
        self.pattern == Pattern::Placeholder
    }

    /// Color of cell (x, y) in a flag drawn `width` x `height` cells large
    pub fn color_at(&self, x: u16, y: u16, width: u16, height: u16) -> Rgb {
        let width = width.max(1);
        let height = height.max(1);

        match &self.pattern {
            Pattern::Horizontal(bands) => band_at(bands, y, height),
            Pattern::Vertical(bands) => band_at(bands, x, width),
            Pattern::Cross {
                field,
                border,
                cross,
            } => {
                // distances from the center line, doubled to stay in integers
                let dx = (2 * x as i32 + 1 - width as i32).unsigned_abs();
                let dy = (2 * y as i32 + 1 - height as i32).unsigned_abs();
                let bar_w = (width as u32 / 6).max(1);
                let bar_h = (height as u32 / 3).max(1);

                if dx <= bar_w || dy <= bar_h {
                    *cross
                } else if dx <= bar_w * 2 || dy <= bar_h * 2 {
                    *border
                } else {
                    *field
                }
            }
            Pattern::StripesWithCanton {
                stripe,
                alternate,
                canton,
            } => {
                let row = (y as u32 * 13) / height as u32;
                if x as u32 * 5 < width as u32 * 2 && row < 7 {
                    *canton
                } else if row % 2 == 0 {
                    *stripe
                } else {
                    *alternate
                }
            }
            Pattern::Placeholder => GRAY,
        }
    }

    /// Full grid of colors, row by row
    pub fn grid(&self, width: u16, height: u16) -> Vec<Vec<Rgb>> {
        (0..height)
            .map(|y| (0..width).map(|x| self.color_at(x, y, width, height)).collect())
            .collect()
    }
}

fn band_at(bands: &[(Rgb, u16)], pos: u16, extent: u16) -> Rgb {
    let total: u32 = bands.iter().map(|(_, weight)| *weight as u32).sum();
    if total == 0 {
        return GRAY;
    }

    let scaled = pos as u32 * total / extent as u32;
    let mut acc = 0;
    for (color, weight) in bands {
        acc += *weight as u32;
        if scaled < acc {
            return *color;
        }
    }
    bands.last().map(|(color, _)| *color).unwrap_or(GRAY)
}
