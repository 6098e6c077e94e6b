use clap::ValueEnum;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteKind {
    #[default]
    Inferno,
    Viridis,
    Magma,
    Fire,
    BlueWhite,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[
        Self::Inferno,
        Self::Viridis,
        Self::Magma,
        Self::Fire,
        Self::BlueWhite,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Inferno => "inferno",
            Self::Viridis => "viridis",
            Self::Magma => "magma",
            Self::Fire => "fire",
            Self::BlueWhite => "blue-white",
        }
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
