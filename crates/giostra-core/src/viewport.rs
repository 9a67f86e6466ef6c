#![forbid(unsafe_code)]

//! Viewport breakpoint classification.
//!
//! Carousels derive how many cards fit side by side from the viewport width
//! against two thresholds. The classification is re-evaluated on demand
//! (typically after a resize), never subscribed reactively.

/// Width class of the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthClass {
    /// Narrowest layouts: one card visible.
    Narrow,
    /// Mid-size layouts: two cards visible.
    Medium,
    /// Wide layouts: three cards visible.
    Wide,
}

impl WidthClass {
    /// How many carousel cards fit in this width class.
    #[must_use]
    pub const fn visible_cards(self) -> usize {
        match self {
            Self::Narrow => 1,
            Self::Medium => 2,
            Self::Wide => 3,
        }
    }
}

/// Thresholds for classifying a viewport width.
///
/// Widths are abstract units: the defaults carry the conventional page
/// breakpoints (992/768); terminal hosts pass column-scale values instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// Minimum width for [`WidthClass::Wide`].
    pub wide_min: u32,
    /// Minimum width for [`WidthClass::Medium`].
    pub medium_min: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            wide_min: 992,
            medium_min: 768,
        }
    }
}

impl Breakpoints {
    /// Create breakpoints with explicit thresholds.
    ///
    /// `wide_min` below `medium_min` would make Medium unreachable, so it is
    /// raised to `medium_min`.
    #[must_use]
    pub fn new(wide_min: u32, medium_min: u32) -> Self {
        Self {
            wide_min: wide_min.max(medium_min),
            medium_min,
        }
    }

    /// Classify a viewport width.
    #[must_use]
    pub fn classify(&self, width: u32) -> WidthClass {
        if width >= self.wide_min {
            WidthClass::Wide
        } else if width >= self.medium_min {
            WidthClass::Medium
        } else {
            WidthClass::Narrow
        }
    }

    /// Visible card count for a viewport width.
    #[must_use]
    pub fn visible_cards(&self, width: u32) -> usize {
        self.classify(width).visible_cards()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_classify_page_widths() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(1280), WidthClass::Wide);
        assert_eq!(bp.classify(992), WidthClass::Wide);
        assert_eq!(bp.classify(991), WidthClass::Medium);
        assert_eq!(bp.classify(768), WidthClass::Medium);
        assert_eq!(bp.classify(767), WidthClass::Narrow);
        assert_eq!(bp.classify(0), WidthClass::Narrow);
    }

    #[test]
    fn visible_cards_mapping() {
        let bp = Breakpoints::default();
        assert_eq!(bp.visible_cards(1200), 3);
        assert_eq!(bp.visible_cards(800), 2);
        assert_eq!(bp.visible_cards(400), 1);
    }

    #[test]
    fn inverted_thresholds_are_repaired() {
        let bp = Breakpoints::new(50, 80);
        assert_eq!(bp.wide_min, 80);
        assert_eq!(bp.classify(80), WidthClass::Wide);
        assert_eq!(bp.classify(79), WidthClass::Narrow);
    }

    #[test]
    fn terminal_scale_thresholds() {
        let bp = Breakpoints::new(120, 80);
        assert_eq!(bp.visible_cards(160), 3);
        assert_eq!(bp.visible_cards(100), 2);
        assert_eq!(bp.visible_cards(60), 1);
    }
}
