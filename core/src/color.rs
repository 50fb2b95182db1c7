use std::fmt;

pub const SPECTRUM_LEN: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
}

/// Spectral order, longest wavelength first. The one invariant of the domain.
pub const SPECTRUM: [Color; SPECTRUM_LEN] = [
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Indigo,
    Color::Violet,
];

#[derive(Clone, Copy, Debug)]
pub struct ColorEntry {
    pub color: Color,
    pub label: &'static str,
    pub slug: &'static str,
    pub hex: &'static str,
    pub wavelength_nm: (u16, u16),
}

pub const COLOR_CATALOG: &[ColorEntry] = &[
    ColorEntry {
        color: Color::Red,
        label: "Red",
        slug: "red",
        hex: "#FF0000",
        wavelength_nm: (620, 750),
    },
    ColorEntry {
        color: Color::Orange,
        label: "Orange",
        slug: "orange",
        hex: "#FF7F00",
        wavelength_nm: (590, 620),
    },
    ColorEntry {
        color: Color::Yellow,
        label: "Yellow",
        slug: "yellow",
        hex: "#FFFF00",
        wavelength_nm: (570, 590),
    },
    ColorEntry {
        color: Color::Green,
        label: "Green",
        slug: "green",
        hex: "#00FF00",
        wavelength_nm: (495, 570),
    },
    ColorEntry {
        color: Color::Blue,
        label: "Blue",
        slug: "blue",
        hex: "#0000FF",
        wavelength_nm: (450, 495),
    },
    ColorEntry {
        color: Color::Indigo,
        label: "Indigo",
        slug: "indigo",
        hex: "#4B0082",
        wavelength_nm: (420, 450),
    },
    ColorEntry {
        color: Color::Violet,
        label: "Violet",
        slug: "violet",
        hex: "#8B00FF",
        wavelength_nm: (380, 420),
    },
];

pub fn color_entry(color: Color) -> &'static ColorEntry {
    // catalog is declared in enum order
    &COLOR_CATALOG[color as usize]
}

pub fn color_by_slug(slug: &str) -> Option<&'static ColorEntry> {
    let trimmed = slug.trim();
    COLOR_CATALOG
        .iter()
        .find(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
}

pub fn color_by_label(label: &str) -> Option<&'static ColorEntry> {
    let trimmed = label.trim();
    COLOR_CATALOG
        .iter()
        .find(|entry| entry.label.eq_ignore_ascii_case(trimmed))
}

impl Color {
    pub fn label(self) -> &'static str {
        color_entry(self).label
    }

    pub fn slug(self) -> &'static str {
        color_entry(self).slug
    }

    pub fn hex(self) -> &'static str {
        color_entry(self).hex
    }

    pub fn wavelength_nm(self) -> (u16, u16) {
        color_entry(self).wavelength_nm
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
