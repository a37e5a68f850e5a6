use ratatui::style::Color;

use crate::engine::{Ink, VariantKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

/// Best-effort light/dark detection from `COLORFGBG` (set by several
/// terminal emulators as "fg;bg" palette indices). Anything ambiguous is
/// treated as dark.
#[must_use]
pub fn detect_theme_mode() -> ThemeMode {
    let Ok(value) = std::env::var("COLORFGBG") else {
        return ThemeMode::Dark;
    };
    theme_from_colorfgbg(&value)
}

fn theme_from_colorfgbg(value: &str) -> ThemeMode {
    let Some(bg) = value.rsplit(';').next().and_then(|s| s.parse::<u8>().ok()) else {
        return ThemeMode::Dark;
    };
    if bg == 7 || bg == 15 {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    }
}

/// Concrete colors for one theme mode. Resolved fresh at every blit so a
/// theme change shows up on the next painted frame.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    mode: ThemeMode,
}

impl Palette {
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Background gradient for the active variant, top to bottom.
    #[must_use]
    pub fn sky(&self, kind: Option<VariantKind>) -> (Color, Color) {
        let dark = self.mode == ThemeMode::Dark;
        let (top, bottom) = match kind {
            Some(VariantKind::Clear) | None => {
                if dark {
                    ((20, 30, 60), (40, 50, 80))
                } else {
                    ((135, 206, 235), (200, 230, 255))
                }
            }
            Some(VariantKind::Cloudy) => {
                if dark {
                    ((40, 45, 50), (50, 55, 60))
                } else {
                    ((180, 190, 200), (210, 220, 230))
                }
            }
            Some(VariantKind::Rain) => {
                if dark {
                    ((0, 10, 20), (20, 30, 45))
                } else {
                    ((200, 210, 240), (220, 228, 248))
                }
            }
            Some(VariantKind::Snow) => {
                if dark {
                    ((10, 15, 25), (25, 32, 45))
                } else {
                    ((230, 240, 255), (240, 246, 255))
                }
            }
            Some(VariantKind::Thunder) => {
                if dark {
                    ((30, 35, 45), (40, 45, 55))
                } else {
                    ((100, 110, 130), (130, 140, 160))
                }
            }
            Some(VariantKind::Mist) => {
                if dark {
                    ((40, 45, 55), (52, 57, 66))
                } else {
                    ((220, 225, 235), (232, 236, 244))
                }
            }
            Some(VariantKind::Windy) => {
                if dark {
                    ((30, 40, 50), (40, 52, 64))
                } else {
                    ((210, 230, 250), (226, 240, 255))
                }
            }
        };
        (
            Color::Rgb(top.0, top.1, top.2),
            Color::Rgb(bottom.0, bottom.1, bottom.2),
        )
    }

    #[must_use]
    pub fn ink(&self, ink: Ink) -> Color {
        let dark = self.mode == ThemeMode::Dark;
        let (r, g, b) = match ink {
            Ink::None => {
                if dark {
                    (200, 205, 215)
                } else {
                    (60, 65, 75)
                }
            }
            Ink::Drop => {
                if dark {
                    (120, 160, 255)
                } else {
                    (100, 140, 240)
                }
            }
            Ink::Ripple => {
                if dark {
                    (100, 150, 255)
                } else {
                    (255, 255, 255)
                }
            }
            Ink::Puddle => {
                if dark {
                    (80, 120, 200)
                } else {
                    (150, 180, 255)
                }
            }
            Ink::Flake | Ink::SnowBank => {
                if dark {
                    (200, 210, 255)
                } else {
                    (255, 255, 255)
                }
            }
            Ink::Sun => {
                if dark {
                    (255, 210, 120)
                } else {
                    (255, 230, 150)
                }
            }
            Ink::SunRay => {
                if dark {
                    (255, 200, 100)
                } else {
                    (255, 220, 130)
                }
            }
            Ink::Cloud => {
                if dark {
                    (200, 210, 255)
                } else {
                    (250, 250, 250)
                }
            }
            Ink::StormCloud => {
                if dark {
                    (70, 70, 90)
                } else {
                    (100, 100, 120)
                }
            }
            Ink::Bird => {
                if dark {
                    (200, 200, 200)
                } else {
                    (50, 50, 50)
                }
            }
            Ink::Mist => {
                if dark {
                    (200, 210, 220)
                } else {
                    (255, 255, 255)
                }
            }
            Ink::Streak => {
                if dark {
                    (180, 200, 220)
                } else {
                    (255, 255, 255)
                }
            }
            Ink::Grass => {
                if dark {
                    (100, 120, 80)
                } else {
                    (50, 180, 50)
                }
            }
            Ink::Bolt => {
                if dark {
                    (200, 230, 255)
                } else {
                    (255, 255, 200)
                }
            }
        };
        Color::Rgb(r, g, b)
    }

    /// Full-surface lightning flash tint.
    #[must_use]
    pub fn flash(&self) -> Color {
        if self.mode == ThemeMode::Dark {
            Color::Rgb(200, 220, 255)
        } else {
            Color::Rgb(255, 255, 200)
        }
    }
}
