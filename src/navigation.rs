use std::fmt;

/// Distance from the top of the viewport a section must straddle to be current.
pub const REFERENCE_LINE: f64 = 100.0;
/// Scroll offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;
/// Height of the fixed header, subtracted from scroll destinations.
pub const HEADER_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Every section in page order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Element id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// Navigation label: the id with its first letter capitalised.
    pub fn label(self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Vertical extent of an element relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Geometry and scrolling capabilities of whatever surface renders the page.
pub trait Viewport {
    /// Current on-screen box of the section, if it is rendered.
    fn bounding_box(&self, section: Section) -> Option<Rect>;
    /// Offset of the section from the top of the document, if it is rendered.
    fn offset_top(&self, section: Section) -> Option<f64>;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

/// Navigation state of the page: which section is highlighted, whether the
/// mobile menu is open and whether the scroll-to-top button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub active: Section,
    pub menu_open: bool,
    pub scroll_top_visible: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the active section and scroll-to-top visibility.
    pub fn on_scroll(&mut self, viewport: &impl Viewport) {
        self.scroll_top_visible = scroll_top_visible(viewport.scroll_y());
        if let Some(section) = current_section(viewport) {
            self.active = section;
        }
    }

    /// Scrolls to `target` and highlights it without waiting for the
    /// animation. Returns false when the section is not rendered.
    pub fn navigate(&mut self, viewport: &impl Viewport, target: Section) -> bool {
        let Some(offset) = viewport.offset_top(target) else {
            return false;
        };
        viewport.smooth_scroll_to(scroll_destination(offset));
        self.active = target;
        self.menu_open = false;
        true
    }

    pub fn scroll_to_top(&self, viewport: &impl Viewport) {
        viewport.smooth_scroll_to(0.0);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

/// First section, in page order, whose box straddles the reference line.
pub fn current_section(viewport: &impl Viewport) -> Option<Section> {
    Section::ALL.into_iter().find(|&section| {
        viewport
            .bounding_box(section)
            .is_some_and(|rect| rect.straddles(REFERENCE_LINE))
    })
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

pub fn scroll_destination(offset_top: f64) -> f64 {
    offset_top - HEADER_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashMap};

    // Sections stacked top to bottom, each `height` tall, scrolled by `scroll_y`
    #[derive(Default)]
    struct FakeViewport {
        offsets: HashMap<Section, (f64, f64)>,
        scroll_y: f64,
        scrolls: RefCell<Vec<f64>>,
    }

    impl FakeViewport {
        fn stacked(height: f64, scroll_y: f64) -> Self {
            let offsets = Section::ALL
                .into_iter()
                .enumerate()
                .map(|(i, s)| (s, (i as f64 * height, height)))
                .collect();
            Self {
                offsets,
                scroll_y,
                ..Default::default()
            }
        }
    }

    impl Viewport for FakeViewport {
        fn bounding_box(&self, section: Section) -> Option<Rect> {
            self.offsets.get(&section).map(|&(offset, height)| Rect {
                top: offset - self.scroll_y,
                bottom: offset + height - self.scroll_y,
            })
        }

        fn offset_top(&self, section: Section) -> Option<f64> {
            self.offsets.get(&section).map(|&(offset, _)| offset)
        }

        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[test]
    fn test_section_ids_and_labels() {
        let ids = Section::ALL.map(Section::id);
        assert_eq!(ids, ["home", "about", "projects", "skills", "contact"]);
        assert_eq!(Section::Projects.label(), "Projects");
        assert_eq!(Section::Home.to_string(), "home");
    }

    #[test]
    fn test_active_section_tracks_scroll() {
        let mut state = NavigationState::new();

        state.on_scroll(&FakeViewport::stacked(1000.0, 0.0));
        assert_eq!(state.active, Section::Home);

        state.on_scroll(&FakeViewport::stacked(1000.0, 950.0));
        assert_eq!(state.active, Section::About);

        state.on_scroll(&FakeViewport::stacked(1000.0, 3500.0));
        assert_eq!(state.active, Section::Skills);
    }

    #[test]
    fn test_reference_line_edges_are_inclusive() {
        let mut state = NavigationState::new();
        // About's top sits exactly on the line; Home's bottom does too and wins by order
        state.on_scroll(&FakeViewport::stacked(1000.0, 900.0));
        assert_eq!(state.active, Section::Home);

        state.on_scroll(&FakeViewport::stacked(1000.0, 900.5));
        assert_eq!(state.active, Section::About);
    }

    #[test]
    fn test_first_matching_section_wins() {
        let mut viewport = FakeViewport::default();
        viewport.offsets.insert(Section::Projects, (0.0, 500.0));
        viewport.offsets.insert(Section::About, (50.0, 100.0));

        let mut state = NavigationState::new();
        state.on_scroll(&viewport);
        assert_eq!(state.active, Section::About);
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let mut state = NavigationState::new();
        state.on_scroll(&FakeViewport::stacked(1000.0, 2200.0));
        assert_eq!(state.active, Section::Projects);

        // Gap between sections and past the end of the page
        let mut gappy = FakeViewport::default();
        gappy.offsets.insert(Section::Home, (0.0, 50.0));
        gappy.offsets.insert(Section::About, (200.0, 50.0));
        state.on_scroll(&gappy);
        assert_eq!(state.active, Section::Projects);

        state.on_scroll(&FakeViewport::default());
        assert_eq!(state.active, Section::Projects);
    }

    #[test]
    fn test_scroll_top_visibility() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(500.0));
        assert!(scroll_top_visible(500.1));

        let mut state = NavigationState::new();
        state.on_scroll(&FakeViewport::stacked(1000.0, 800.0));
        assert!(state.scroll_top_visible);
        state.on_scroll(&FakeViewport::stacked(1000.0, 10.0));
        assert!(!state.scroll_top_visible);
    }

    #[test]
    fn test_scroll_is_idempotent() {
        let viewport = FakeViewport::stacked(700.0, 1500.0);
        let mut first = NavigationState::new();
        first.on_scroll(&viewport);
        let mut second = first;
        second.on_scroll(&viewport);
        assert_eq!(first, second);
    }

    #[test]
    fn test_navigate_sets_active_immediately() {
        let viewport = FakeViewport::stacked(1000.0, 0.0);
        let mut state = NavigationState::new();
        state.toggle_menu();
        assert!(state.menu_open);

        assert!(state.navigate(&viewport, Section::Contact));
        assert_eq!(state.active, Section::Contact);
        assert!(!state.menu_open);
        assert_eq!(*viewport.scrolls.borrow(), vec![4000.0 - HEADER_HEIGHT]);
    }

    #[test]
    fn test_navigate_to_missing_section_is_noop() {
        let mut viewport = FakeViewport::default();
        viewport.offsets.insert(Section::Home, (0.0, 1000.0));
        let mut state = NavigationState::new();
        state.toggle_menu();

        assert!(!state.navigate(&viewport, Section::Skills));
        assert_eq!(state.active, Section::Home);
        assert!(state.menu_open);
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_scroll_to_top() {
        let viewport = FakeViewport::stacked(1000.0, 2500.0);
        NavigationState::new().scroll_to_top(&viewport);
        assert_eq!(*viewport.scrolls.borrow(), vec![0.0]);
    }
}
