/// Types a phrase one character per tick, holds it, deletes it, then moves on
/// to the next phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    phase: Phase,
    hold_ticks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

impl Typewriter {
    pub fn new(phrases: &[&str], hold_ticks: u32) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
            hold_ticks,
        }
    }

    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase)
            .map(|p| p.chars().take(self.shown).collect())
            .unwrap_or_default()
    }

    pub fn tick(&mut self) {
        let Some(current) = self.phrases.get(self.phrase) else {
            return;
        };
        let len = current.chars().count();

        self.phase = match self.phase {
            Phase::Typing if self.shown < len => {
                self.shown += 1;
                if self.shown == len { Phase::Holding(0) } else { Phase::Typing }
            }
            Phase::Typing => Phase::Holding(0),
            Phase::Holding(n) if n + 1 < self.hold_ticks => Phase::Holding(n + 1),
            Phase::Holding(_) => Phase::Deleting,
            Phase::Deleting if self.shown > 0 => {
                self.shown -= 1;
                Phase::Deleting
            }
            Phase::Deleting => {
                self.phrase = (self.phrase + 1) % self.phrases.len();
                Phase::Typing
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut tw = Typewriter::new(&["ab", "xyz"], 2);
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "a");
        tw.tick();
        assert_eq!(tw.text(), "ab");
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "ab");
        tw.tick();
        assert_eq!(tw.text(), "a");
        tw.tick();
        assert_eq!(tw.text(), "");
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut tw = Typewriter::new(&["Zürich"], 1);
        for _ in 0..6 {
            tw.tick();
        }
        assert_eq!(tw.text(), "Zürich");
    }

    #[test]
    fn no_phrases_is_inert() {
        let mut tw = Typewriter::new(&[], 3);
        tw.tick();
        assert_eq!(tw.text(), "");
    }
}
