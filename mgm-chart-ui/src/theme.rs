//! Accent palette lookup shared by the presentational atoms.
//!
//! The dashboard uses a dark slate theme with four accent families; each
//! accent resolves to a fixed gradient pair so cards and gauges stay
//! consistent without per-call color strings.

/// Slate base palette used in inline styles across the dashboard.
pub mod slate {
    pub const BG_900: &str = "#0f172a";
    pub const BG_800: &str = "#1e293b";
    pub const BORDER_700: &str = "rgba(51, 65, 85, 0.5)";
    pub const GRID_700: &str = "rgba(51, 65, 85, 0.3)";
    pub const TEXT_100: &str = "#f1f5f9";
    pub const TEXT_200: &str = "#e2e8f0";
    pub const TEXT_300: &str = "#cbd5e1";
    pub const TEXT_400: &str = "#94a3b8";
    pub const TEXT_500: &str = "#64748b";
}

/// Accent color family of a metric card or status gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Cyan,
    Blue,
    Red,
}

impl Accent {
    /// (start, end) colors of the accent gradient.
    pub fn gradient(self) -> (&'static str, &'static str) {
        match self {
            Self::Green => ("#22c55e", "#14b8a6"),
            Self::Cyan => ("#06b6d4", "#3b82f6"),
            Self::Blue => ("#3b82f6", "#6366f1"),
            Self::Red => ("#ef4444", "#ec4899"),
        }
    }

    /// Flat color used for icons and small glyphs.
    pub fn solid(self) -> &'static str {
        self.gradient().0
    }

    /// CSS `linear-gradient` value for gauge fills.
    pub fn css_gradient(self) -> String {
        let (from, to) = self.gradient();
        format!("linear-gradient(to right, {from}, {to})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_accent_has_a_gradient_pair() {
        for accent in [Accent::Green, Accent::Cyan, Accent::Blue, Accent::Red] {
            let (from, to) = accent.gradient();
            assert!(from.starts_with('#'));
            assert!(to.starts_with('#'));
            assert_eq!(accent.solid(), from);
            assert!(accent.css_gradient().contains(from));
        }
    }
}
