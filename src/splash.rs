use std::time::Duration;

pub const SPLASH_TEXT: &str = "> Initializing portfolio...";
/// Delay between revealing consecutive characters.
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(50);
/// Pause after the last character before the splash is dismissed.
pub const DISMISS_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Active,
    Typing(usize),
    Complete,
}

/// Reveals a fixed string one character per step, then completes after a pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: &'static str,
    revealed: usize,
    complete: bool,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            revealed: 0,
            complete: false,
        }
    }

    pub fn state(&self) -> LoaderState {
        match (self.complete, self.revealed) {
            (true, _) => LoaderState::Complete,
            (false, 0) => LoaderState::Active,
            (false, n) => LoaderState::Typing(n),
        }
    }

    /// Reveals the next character, or completes the splash once the whole
    /// text shows.
    pub fn step(&mut self) {
        if self.is_revealed() {
            self.complete = true;
        } else {
            self.revealed += 1;
        }
    }

    /// How long to wait before the next `step`; `None` once complete.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.complete {
            None
        } else if self.is_revealed() {
            Some(DISMISS_DELAY)
        } else {
            Some(REVEAL_INTERVAL)
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed == self.len()
    }

    pub fn visible(&self) -> &'static str {
        let end = self
            .text
            .char_indices()
            .nth(self.revealed)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Time from mount until the splash hands over to the main view.
pub fn total_duration(text: &str) -> Duration {
    REVEAL_INTERVAL * text.chars().count() as u32 + DISMISS_DELAY
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Follows the delays the way the splash timers do, recording the clock
    /// and state after every step.
    fn run_schedule(text: &'static str) -> Vec<(Duration, LoaderState)> {
        let mut tw = Typewriter::new(text);
        let mut clock = Duration::ZERO;
        let mut steps = Vec::new();
        while let Some(delay) = tw.next_delay() {
            clock += delay;
            tw.step();
            steps.push((clock, tw.state()));
        }
        steps
    }

    #[test]
    fn test_reveals_one_char_per_step() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.state(), LoaderState::Active);
        assert_eq!(tw.visible(), "");

        tw.step();
        assert_eq!(tw.visible(), "a");
        assert_eq!(tw.state(), LoaderState::Typing(1));

        tw.step();
        assert_eq!(tw.visible(), "ab");

        tw.step();
        assert_eq!(tw.visible(), "abc");
        assert!(tw.is_revealed());
        assert_eq!(tw.state(), LoaderState::Typing(3));

        tw.step();
        assert_eq!(tw.visible(), "abc");
        assert_eq!(tw.state(), LoaderState::Complete);

        // extra steps don't run past the end
        tw.step();
        assert_eq!(tw.visible(), "abc");
        assert_eq!(tw.next_delay(), None);
    }

    #[test]
    fn test_delays() {
        let mut tw = Typewriter::new("ok");
        assert_eq!(tw.next_delay(), Some(REVEAL_INTERVAL));
        tw.step();
        assert_eq!(tw.next_delay(), Some(REVEAL_INTERVAL));
        tw.step();
        assert_eq!(tw.next_delay(), Some(DISMISS_DELAY));
        tw.step();
        assert_eq!(tw.next_delay(), None);
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new("→ hi");
        tw.step();
        assert_eq!(tw.visible(), "→");
        tw.step();
        assert_eq!(tw.visible(), "→ ");
    }

    #[test]
    fn test_total_duration() {
        assert_eq!(total_duration("abc"), Duration::from_millis(650));
        assert_eq!(total_duration(""), DISMISS_DELAY);
    }

    #[test]
    fn test_completes_exactly_at_total_duration() {
        let steps = run_schedule(SPLASH_TEXT);
        let total = total_duration(SPLASH_TEXT);

        let (last_at, last_state) = steps[steps.len() - 1];
        assert_eq!(last_state, LoaderState::Complete);
        assert_eq!(last_at, total);

        for (at, state) in &steps[..steps.len() - 1] {
            assert_ne!(*state, LoaderState::Complete);
            assert!(*at < total);
        }
    }

    #[test]
    fn test_text_fully_shown_before_dismiss_delay() {
        let steps = run_schedule(SPLASH_TEXT);
        let chars = SPLASH_TEXT.chars().count();
        assert_eq!(steps.len(), chars + 1);
        assert_eq!(steps[chars - 1], (REVEAL_INTERVAL * chars as u32, LoaderState::Typing(chars)));
    }

    #[test]
    fn test_empty_text_waits_dismiss_delay() {
        assert_eq!(run_schedule(""), vec![(DISMISS_DELAY, LoaderState::Complete)]);
    }
}
