use std::fmt;

/// Lowest value either counter can hold.
pub const STAT_MIN: i32 = 0;
/// Highest value either counter can hold.
pub const STAT_MAX: i32 = 10;
/// Name used in flavor lines when none is configured.
pub const DEFAULT_PET_NAME: &str = "Termagotchi";

/// The pet's two counters. Each value is kept in `STAT_MIN..=STAT_MAX`.
///
/// Fields are public so callers can construct arbitrary states; every
/// mutating method on this type ends with [`PetState::clamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetState {
    /// 0 is stuffed, 10 is starving.
    pub hunger: i32,
    /// 0 is miserable, 10 is delighted.
    pub happiness: i32,
}

impl Default for PetState {
    fn default() -> Self {
        Self {
            hunger: 5,
            happiness: 5,
        }
    }
}

impl PetState {
    /// Create a pet with the given counters, clamped into range.
    pub fn new(hunger: i32, happiness: i32) -> Self {
        let mut pet = Self { hunger, happiness };
        pet.clamp();
        pet
    }

    /// Force both counters into range.
    pub fn clamp(&mut self) {
        self.hunger = self.hunger.clamp(STAT_MIN, STAT_MAX);
        self.happiness = self.happiness.clamp(STAT_MIN, STAT_MAX);
    }

    /// Apply deltas to both counters, saturating at the bounds.
    pub fn adjust(&mut self, hunger_delta: i32, happiness_delta: i32) {
        self.hunger = self.hunger.saturating_add(hunger_delta);
        self.happiness = self.happiness.saturating_add(happiness_delta);
        self.clamp();
    }

    /// One passive decay step: hungrier and lonelier.
    pub fn decay(&mut self) {
        self.adjust(1, -1);
    }

    /// Mood derived from the hunger counter.
    pub fn hunger_mood(&self) -> HungerMood {
        match self.hunger {
            h if h <= 3 => HungerMood::Satisfied,
            h if h <= 7 => HungerMood::Peckish,
            _ => HungerMood::Hungry,
        }
    }

    /// Mood derived from the happiness counter.
    pub fn happiness_mood(&self) -> HappinessMood {
        match self.happiness {
            h if h <= 3 => HappinessMood::Lonely,
            h if h <= 7 => HappinessMood::Content,
            _ => HappinessMood::Joyful,
        }
    }

    /// The single flavor remark for the current state, if any.
    ///
    /// Checked in priority order; the first match wins.
    pub fn flavor(&self) -> Option<Flavor> {
        if self.happiness >= 8 {
            Some(Flavor::Joyful)
        } else if self.hunger >= 8 {
            Some(Flavor::WaitingForFood)
        } else if self.happiness <= 2 {
            Some(Flavor::Lonely)
        } else if self.hunger <= 2 {
            Some(Flavor::HappilyFull)
        } else {
            None
        }
    }

    /// Render the status file text using the default pet name.
    pub fn render_status(&self) -> String {
        self.render_status_named(DEFAULT_PET_NAME)
    }

    /// Render the status file text, naming the pet in the flavor line.
    pub fn render_status_named(&self, name: &str) -> String {
        let mut out = format!(
            "Hunger: {}/{STAT_MAX} ({})\nHappiness: {}/{STAT_MAX} ({})",
            self.hunger,
            self.hunger_mood(),
            self.happiness,
            self.happiness_mood(),
        );
        if let Some(flavor) = self.flavor() {
            out.push('\n');
            out.push_str(&flavor.line(name));
        }
        out
    }
}

/// Hunger-based mood label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HungerMood {
    /// Hunger 0-3.
    Satisfied,
    /// Hunger 4-7.
    Peckish,
    /// Hunger 8-10.
    Hungry,
}

impl fmt::Display for HungerMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Satisfied => write!(f, "Satisfied"),
            Self::Peckish => write!(f, "Peckish"),
            Self::Hungry => write!(f, "Hungry"),
        }
    }
}

/// Happiness-based mood label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HappinessMood {
    /// Happiness 0-3.
    Lonely,
    /// Happiness 4-7.
    Content,
    /// Happiness 8-10.
    Joyful,
}

impl fmt::Display for HappinessMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lonely => write!(f, "Lonely"),
            Self::Content => write!(f, "Content"),
            Self::Joyful => write!(f, "Joyful"),
        }
    }
}

/// An extra remark appended to the status text at extreme states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Happiness 8 or more.
    Joyful,
    /// Hunger 8 or more.
    WaitingForFood,
    /// Happiness 2 or less.
    Lonely,
    /// Hunger 2 or less.
    HappilyFull,
}

impl Flavor {
    /// The remark as a sentence about the named pet.
    pub fn line(&self, name: &str) -> String {
        match self {
            Self::Joyful => format!("{name} looks joyful today!"),
            Self::WaitingForFood => format!("{name} is waiting for food\u{2026}"),
            Self::Lonely => format!("{name} seems lonely."),
            Self::HappilyFull => format!("{name} is happily full."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_are_five_and_five() {
        let pet = PetState::default();
        assert_eq!(pet.hunger, 5);
        assert_eq!(pet.happiness, 5);
    }

    #[test]
    fn adjust_saturates_low() {
        let mut pet = PetState::default();
        pet.adjust(-3, 0);
        pet.adjust(-3, 0);
        assert_eq!(pet.hunger, 0);
    }

    #[test]
    fn adjust_saturates_high() {
        let mut pet = PetState::new(9, 9);
        pet.adjust(3, 3);
        assert_eq!(pet, PetState::new(10, 10));
    }

    #[test]
    fn adjust_survives_extreme_deltas() {
        let mut pet = PetState::default();
        pet.adjust(i32::MAX, i32::MIN);
        assert_eq!(pet, PetState::new(10, 0));
    }

    #[test]
    fn decay_moves_both_counters() {
        let mut pet = PetState::default();
        pet.decay();
        assert_eq!(pet, PetState::new(6, 4));
    }

    #[test]
    fn decay_clamps_at_bounds() {
        let mut pet = PetState::new(10, 0);
        pet.decay();
        assert_eq!(pet, PetState::new(10, 0));
    }

    #[test]
    fn mood_thresholds() {
        assert_eq!(PetState::new(3, 3).hunger_mood(), HungerMood::Satisfied);
        assert_eq!(PetState::new(4, 4).hunger_mood(), HungerMood::Peckish);
        assert_eq!(PetState::new(7, 7).hunger_mood(), HungerMood::Peckish);
        assert_eq!(PetState::new(8, 8).hunger_mood(), HungerMood::Hungry);

        assert_eq!(PetState::new(3, 3).happiness_mood(), HappinessMood::Lonely);
        assert_eq!(PetState::new(4, 4).happiness_mood(), HappinessMood::Content);
        assert_eq!(PetState::new(8, 8).happiness_mood(), HappinessMood::Joyful);
    }

    #[test]
    fn joyful_wins_regardless_of_hunger() {
        for hunger in STAT_MIN..=STAT_MAX {
            assert_eq!(PetState::new(hunger, 9).flavor(), Some(Flavor::Joyful));
        }
    }

    #[test]
    fn hungry_pet_waits_for_food() {
        assert_eq!(PetState::new(9, 5).flavor(), Some(Flavor::WaitingForFood));
    }

    #[test]
    fn waiting_beats_lonely() {
        assert_eq!(PetState::new(8, 1).flavor(), Some(Flavor::WaitingForFood));
    }

    #[test]
    fn lonely_beats_full() {
        assert_eq!(PetState::new(1, 1).flavor(), Some(Flavor::Lonely));
    }

    #[test]
    fn happily_full() {
        assert_eq!(PetState::new(2, 5).flavor(), Some(Flavor::HappilyFull));
    }

    #[test]
    fn middling_pet_has_no_flavor() {
        assert_eq!(PetState::default().flavor(), None);
        assert_eq!(PetState::new(3, 3).flavor(), None);
    }

    #[test]
    fn render_default_status() {
        insta::assert_snapshot!(PetState::default().render_status(), @r"
        Hunger: 5/10 (Peckish)
        Happiness: 5/10 (Content)
        ");
    }

    #[test]
    fn render_status_with_flavor() {
        let text = PetState::new(9, 5).render_status();
        assert_eq!(
            text,
            "Hunger: 9/10 (Hungry)\nHappiness: 5/10 (Content)\nTermagotchi is waiting for food\u{2026}"
        );
    }

    #[test]
    fn render_uses_custom_name() {
        let text = PetState::new(5, 10).render_status_named("Pixel");
        assert!(text.ends_with("\nPixel looks joyful today!"));
        assert_eq!(text.lines().count(), 3);
    }

    proptest! {
        #[test]
        fn clamp_keeps_counters_in_range(hunger in any::<i32>(), happiness in any::<i32>()) {
            let mut pet = PetState { hunger, happiness };
            pet.clamp();
            prop_assert!((STAT_MIN..=STAT_MAX).contains(&pet.hunger));
            prop_assert!((STAT_MIN..=STAT_MAX).contains(&pet.happiness));
        }

        #[test]
        fn clamp_is_idempotent(hunger in any::<i32>(), happiness in any::<i32>()) {
            let mut once = PetState { hunger, happiness };
            once.clamp();
            let mut twice = once;
            twice.clamp();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn adjust_always_lands_in_range(
            hunger in STAT_MIN..=STAT_MAX,
            happiness in STAT_MIN..=STAT_MAX,
            dh in -20i32..=20,
            dp in -20i32..=20,
        ) {
            let mut pet = PetState::new(hunger, happiness);
            pet.adjust(dh, dp);
            prop_assert!((STAT_MIN..=STAT_MAX).contains(&pet.hunger));
            prop_assert!((STAT_MIN..=STAT_MAX).contains(&pet.happiness));
        }

        #[test]
        fn at_most_one_flavor_line(hunger in STAT_MIN..=STAT_MAX, happiness in STAT_MIN..=STAT_MAX) {
            let text = PetState::new(hunger, happiness).render_status();
            prop_assert!(text.lines().count() <= 3);
        }
    }
}
