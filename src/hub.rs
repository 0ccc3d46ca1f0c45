//! The arcade hub: game catalog plus age / subject / search filtering.
//!
//! The hub is pure state; rendering lives in `ui::hub_scene` and key
//! dispatch in the binary.

use crate::constants::{DEFAULT_AGE, MAX_AGE, MIN_AGE};

/// Subject area a game teaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Math,
    Words,
    Logic,
    Science,
    Art,
    Music,
    Brain,
    Explore,
}

impl Discipline {
    pub const ALL: [Discipline; 8] = [
        Discipline::Math,
        Discipline::Words,
        Discipline::Logic,
        Discipline::Science,
        Discipline::Art,
        Discipline::Music,
        Discipline::Brain,
        Discipline::Explore,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Discipline::Math => "Math",
            Discipline::Words => "Words",
            Discipline::Logic => "Logic",
            Discipline::Science => "Science",
            Discipline::Art => "Art",
            Discipline::Music => "Music",
            Discipline::Brain => "Brain",
            Discipline::Explore => "Explore",
        }
    }
}

/// One tile in the arcade catalog.
#[derive(Debug, Clone, Copy)]
pub struct GameEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub discipline: Discipline,
    pub min_age: u8,
    pub max_age: u8,
    pub description: &'static str,
    /// Whether an implementation exists. Unbuilt tiles show a notice instead.
    pub playable: bool,
}

/// The full catalog, in display order.
pub const CATALOG: [GameEntry; 11] = [
    GameEntry {
        id: "number-garden",
        title: "Number Garden",
        discipline: Discipline::Math,
        min_age: 5,
        max_age: 8,
        description: "Grow flowers by solving gentle sums and counting seeds. Add, subtract, and compare!",
        playable: true,
    },
    GameEntry {
        id: "snack-math",
        title: "Snack Math",
        discipline: Discipline::Math,
        min_age: 5,
        max_age: 8,
        description: "Feed Munchy the monster and learn subtraction! Count snacks on a picnic plate.",
        playable: true,
    },
    GameEntry {
        id: "shape-sort-dash",
        title: "Shape Sort Dash",
        discipline: Discipline::Logic,
        min_age: 5,
        max_age: 9,
        description: "Drag falling shapes into matching outlines before they hit the ground!",
        playable: true,
    },
    GameEntry {
        id: "word-whizz-pop",
        title: "Word Whizz Pop",
        discipline: Discipline::Words,
        min_age: 6,
        max_age: 9,
        description: "Build words from jelly letters, rhyme rockets, and silly synonyms!",
        playable: false,
    },
    GameEntry {
        id: "puzzle-pebbles",
        title: "Puzzle Pebbles",
        discipline: Discipline::Logic,
        min_age: 6,
        max_age: 9,
        description: "Sort pebbles by rules that change - learn patterns, sequences, and reasoning.",
        playable: false,
    },
    GameEntry {
        id: "lab-bubbles",
        title: "Lab Bubbles",
        discipline: Discipline::Science,
        min_age: 5,
        max_age: 9,
        description: "Mix colors, test float vs sink, and pop facts in a bubbly mini-lab!",
        playable: false,
    },
    GameEntry {
        id: "melody-marshmallows",
        title: "Melody Marshmallows",
        discipline: Discipline::Music,
        min_age: 5,
        max_age: 9,
        description: "Tap soft marshmallows to learn rhythm, pitch, and make tiny tunes.",
        playable: false,
    },
    GameEntry {
        id: "creative-clouds",
        title: "Creative Clouds",
        discipline: Discipline::Art,
        min_age: 5,
        max_age: 9,
        description: "Paint with drip-free jelly brushes and stamp shapes to tell mini stories.",
        playable: false,
    },
    GameEntry {
        id: "brain-bridges",
        title: "Brain Bridges",
        discipline: Discipline::Brain,
        min_age: 7,
        max_age: 9,
        description: "Cross rivers by planning steps ahead - executive function and strategy!",
        playable: false,
    },
    GameEntry {
        id: "sum-slides",
        title: "Sum Slides",
        discipline: Discipline::Math,
        min_age: 7,
        max_age: 9,
        description: "Slide tiles to make target numbers - practice facts and mental math.",
        playable: false,
    },
    GameEntry {
        id: "curious-creatures",
        title: "Curious Creatures",
        discipline: Discipline::Explore,
        min_age: 5,
        max_age: 9,
        description: "Mini quests about animals, habitats, and planet care with gentle reading.",
        playable: false,
    },
];

/// Filter and selection state for the hub screen.
#[derive(Debug, Clone)]
pub struct HubState {
    /// Age filter, clamped to `MIN_AGE..=MAX_AGE`.
    pub age: u8,
    /// `None` means "All Subjects".
    pub discipline: Option<Discipline>,
    /// Free-text search over title and description.
    pub query: String,
    /// Index into the *filtered* list.
    pub selected: usize,
}

impl Default for HubState {
    fn default() -> Self {
        Self::new()
    }
}

impl HubState {
    pub fn new() -> Self {
        Self {
            age: DEFAULT_AGE,
            discipline: None,
            query: String::new(),
            selected: 0,
        }
    }

    fn matches(&self, entry: &GameEntry) -> bool {
        if entry.min_age > self.age || entry.max_age < self.age {
            return false;
        }
        if let Some(d) = self.discipline {
            if entry.discipline != d {
                return false;
            }
        }
        if self.query.is_empty() {
            return true;
        }
        let q = self.query.to_lowercase();
        entry.title.to_lowercase().contains(&q) || entry.description.to_lowercase().contains(&q)
    }

    /// The catalog entries currently visible, in catalog order.
    pub fn filtered(&self) -> Vec<&'static GameEntry> {
        CATALOG.iter().filter(|e| self.matches(e)).collect()
    }

    /// The entry under the cursor, if the filtered list is non-empty.
    pub fn selected_entry(&self) -> Option<&'static GameEntry> {
        let list = self.filtered();
        if list.is_empty() {
            return None;
        }
        Some(list[self.selected.min(list.len() - 1)])
    }

    /// Keep the cursor inside the filtered list after a filter change.
    pub fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn adjust_age(&mut self, delta: i8) {
        let age = self.age as i8 + delta;
        self.age = age.clamp(MIN_AGE as i8, MAX_AGE as i8) as u8;
        self.clamp_selection();
    }

    /// Cycle All -> Math -> ... -> Explore -> All.
    pub fn cycle_discipline(&mut self) {
        self.discipline = match self.discipline {
            None => Some(Discipline::ALL[0]),
            Some(d) => {
                let idx = Discipline::ALL.iter().position(|x| *x == d).unwrap_or(0);
                if idx + 1 < Discipline::ALL.len() {
                    Some(Discipline::ALL[idx + 1])
                } else {
                    None
                }
            }
        };
        self.clamp_selection();
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.clamp_selection();
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.clamp_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_age_shows_full_catalog() {
        let hub = HubState::new();
        // Every catalog entry covers age 7.
        assert_eq!(hub.filtered().len(), CATALOG.len());
    }

    #[test]
    fn test_age_filter_narrows() {
        let mut hub = HubState::new();
        hub.age = 5;
        let ids: Vec<&str> = hub.filtered().iter().map(|e| e.id).collect();
        assert!(ids.contains(&"number-garden"));
        assert!(ids.contains(&"shape-sort-dash"));
        // min_age 6 and 7 entries drop out
        assert!(!ids.contains(&"word-whizz-pop"));
        assert!(!ids.contains(&"brain-bridges"));

        hub.age = 9;
        let ids: Vec<&str> = hub.filtered().iter().map(|e| e.id).collect();
        // max_age 8 entries drop out
        assert!(!ids.contains(&"number-garden"));
        assert!(!ids.contains(&"snack-math"));
        assert!(ids.contains(&"shape-sort-dash"));
    }

    #[test]
    fn test_age_clamps() {
        let mut hub = HubState::new();
        for _ in 0..10 {
            hub.adjust_age(-1);
        }
        assert_eq!(hub.age, MIN_AGE);
        for _ in 0..10 {
            hub.adjust_age(1);
        }
        assert_eq!(hub.age, MAX_AGE);
    }

    #[test]
    fn test_discipline_filter() {
        let mut hub = HubState::new();
        hub.discipline = Some(Discipline::Math);
        let list = hub.filtered();
        assert!(!list.is_empty());
        assert!(list.iter().all(|e| e.discipline == Discipline::Math));
    }

    #[test]
    fn test_discipline_cycle_wraps() {
        let mut hub = HubState::new();
        assert!(hub.discipline.is_none());
        for _ in 0..Discipline::ALL.len() {
            hub.cycle_discipline();
            assert!(hub.discipline.is_some());
        }
        hub.cycle_discipline();
        assert!(hub.discipline.is_none());
    }

    #[test]
    fn test_query_matches_title_and_description() {
        let mut hub = HubState::new();
        hub.query = "SHAPE".to_string();
        let ids: Vec<&str> = hub.filtered().iter().map(|e| e.id).collect();
        // Matches Shape Sort Dash by title and Creative Clouds by description
        // ("stamp shapes").
        assert!(ids.contains(&"shape-sort-dash"));
        assert!(ids.contains(&"creative-clouds"));
        assert!(!ids.contains(&"snack-math"));
    }

    #[test]
    fn test_no_matches_yields_empty_list() {
        let mut hub = HubState::new();
        hub.query = "zzzzz".to_string();
        assert!(hub.filtered().is_empty());
        assert!(hub.selected_entry().is_none());
    }

    #[test]
    fn test_selection_clamps_when_filter_shrinks() {
        let mut hub = HubState::new();
        hub.selected = CATALOG.len() - 1;
        hub.discipline = Some(Discipline::Explore);
        hub.clamp_selection();
        assert_eq!(hub.selected, hub.filtered().len() - 1);
        assert!(hub.selected_entry().is_some());
    }

    #[test]
    fn test_select_next_stops_at_end() {
        let mut hub = HubState::new();
        let len = hub.filtered().len();
        for _ in 0..len + 5 {
            hub.select_next();
        }
        assert_eq!(hub.selected, len - 1);
    }

    #[test]
    fn test_exactly_three_playable() {
        let playable: Vec<&str> = CATALOG
            .iter()
            .filter(|e| e.playable)
            .map(|e| e.id)
            .collect();
        assert_eq!(
            playable,
            vec!["number-garden", "snack-math", "shape-sort-dash"]
        );
    }
}
