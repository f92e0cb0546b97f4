use crate::profile::SECTIONS;

/// Vertical scroll offset (px) past which the nav bar switches to its
/// compact, opaque style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

/// Observer root margin that shrinks the viewport to its horizontal
/// midline, so at most one section intersects it at a time.
pub const MIDLINE_ROOT_MARGIN: &str = "-50% 0px -50% 0px";

/// Tracks which page section crosses the viewport midline.
///
/// The most recent section to cross stays active until another one does,
/// so the highlight doesn't drop out while the midline sits in a gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSections {
    order: Vec<&'static str>,
    crossing: Vec<&'static str>,
    latched: Option<&'static str>,
}

impl ActiveSections {
    pub fn new(order: Vec<&'static str>) -> Self {
        Self {
            order,
            crossing: Vec::new(),
            latched: None,
        }
    }

    /// Records an observer report for `id`. Unknown ids are ignored.
    pub fn set_visible(&mut self, id: &'static str, crossing: bool) {
        if !self.order.contains(&id) {
            return;
        }
        self.crossing.retain(|s| *s != id);
        if crossing {
            self.crossing.push(id);
        }
        if let Some(&newest) = self.crossing.last() {
            self.latched = Some(newest);
        }
    }

    /// The section that most recently crossed the midline. Falls back to
    /// the first section before any report arrives.
    pub fn active(&self) -> Option<&'static str> {
        self.latched.or_else(|| self.order.first().copied())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }
}

impl Default for ActiveSections {
    fn default() -> Self {
        Self::new(SECTIONS.iter().map(|s| s.id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_first_section() {
        let sections = ActiveSections::default();
        assert_eq!(sections.active(), Some("home"));
        assert!(sections.is_active("home"));
        assert_eq!(ActiveSections::new(Vec::new()).active(), None);
    }

    #[test]
    fn test_latest_section_to_cross_wins() {
        // a fast scroll can report the next section before the last one leaves
        let mut sections = ActiveSections::default();
        sections.set_visible("about", true);
        sections.set_visible("experience", true);
        assert_eq!(sections.active(), Some("experience"));
        assert!(!sections.is_active("about"));

        sections.set_visible("experience", false);
        assert_eq!(sections.active(), Some("about"));
    }

    #[test]
    fn test_active_section_latches_between_reports() {
        let mut sections = ActiveSections::default();
        sections.set_visible("skills", true);
        sections.set_visible("skills", false);
        assert_eq!(sections.active(), Some("skills"));

        sections.set_visible("contact", true);
        sections.set_visible("contact", false);
        assert_eq!(sections.active(), Some("contact"));
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let mut sections = ActiveSections::default();
        sections.set_visible("footer", true);
        assert_eq!(sections.active(), Some("home"));
    }

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLL_THRESHOLD));
        assert!(is_scrolled(SCROLL_THRESHOLD + 1.0));
    }
}
