/// Class toggled on the document element so globally scoped styles follow the theme.
pub const DARK_CLASS: &str = "dark";
/// Media query reporting the host's colour scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Light/dark presentation preference for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Chooses between the dark and light variant of a style.
    pub fn pick(self, dark: &'static str, light: &'static str) -> &'static str {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }

    /// Joins a fixed class list with the variant for this theme.
    pub fn classes(self, base: &str, dark: &'static str, light: &'static str) -> String {
        let themed = self.pick(dark, light);
        if base.is_empty() {
            themed.to_string()
        } else {
            format!("{} {}", base, themed)
        }
    }

    /// Text colour of a navigation entry, accented when it is the active section.
    pub fn nav_item_class(self, active: bool) -> &'static str {
        match (active, self) {
            (true, Self::Dark) => "text-purple-400",
            (true, Self::Light) => "text-purple-600",
            (false, Self::Dark) => "text-gray-300",
            (false, Self::Light) => "text-gray-600",
        }
    }
}

/// Page theme plus whether it has been settled, either by the host
/// preference at start-up or by the user toggling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    theme: Theme,
    settled: bool,
}

impl ThemeState {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Adopts the host preference. Only the first report counts, and none
    /// after a toggle.
    pub fn seed(&mut self, prefers_dark: bool) {
        if !self.settled {
            self.theme = Theme::from_prefers_dark(prefers_dark);
            self.settled = true;
        }
    }

    pub fn toggle(&mut self) {
        self.theme = self.theme.toggle();
        self.settled = true;
    }
}
