//! Configuration for a shell session.

use std::time::Duration;

use tg_core::PetState;
use tg_core::fs::STATUS_PATH;
use tg_core::pet::DEFAULT_PET_NAME;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Time between passive decay ticks. `None` disables passive decay.
    pub decay_period: Option<Duration>,
    /// Name used in status flavor lines and command confirmations.
    pub pet_name: String,
    /// Pet counters at session start.
    pub initial_pet: PetState,
    /// Absolute path the status renderer writes to.
    pub status_path: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            decay_period: Some(Duration::from_secs(60)),
            pet_name: DEFAULT_PET_NAME.to_string(),
            initial_pet: PetState::default(),
            status_path: STATUS_PATH.to_string(),
        }
    }
}

impl ShellConfig {
    /// Set the time between decay ticks. A zero period disables decay.
    pub fn with_decay_period(mut self, period: Duration) -> Self {
        self.decay_period = if period.is_zero() { None } else { Some(period) };
        self
    }

    /// Set the time between decay ticks in whole seconds (0 = disabled).
    pub fn with_decay_secs(self, secs: u64) -> Self {
        self.with_decay_period(Duration::from_secs(secs))
    }

    /// Turn passive decay off.
    pub fn without_decay(mut self) -> Self {
        self.decay_period = None;
        self
    }

    /// Set the pet's name.
    pub fn with_pet_name(mut self, name: impl Into<String>) -> Self {
        self.pet_name = name.into();
        self
    }

    /// Set the starting counters (clamped into range).
    pub fn with_initial_pet(mut self, hunger: i32, happiness: i32) -> Self {
        self.initial_pet = PetState::new(hunger, happiness);
        self
    }

    /// Set where the status file is written.
    pub fn with_status_path(mut self, path: impl Into<String>) -> Self {
        self.status_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ShellConfig::default();
        assert_eq!(cfg.decay_period, Some(Duration::from_secs(60)));
        assert_eq!(cfg.pet_name, "Termagotchi");
        assert_eq!(cfg.initial_pet, PetState::new(5, 5));
        assert_eq!(cfg.status_path, "/pet/status.txt");
    }

    #[test]
    fn builder_chain() {
        let cfg = ShellConfig::default()
            .with_decay_secs(5)
            .with_pet_name("Pixel")
            .with_initial_pet(2, 8)
            .with_status_path("/var/pet.txt");
        assert_eq!(cfg.decay_period, Some(Duration::from_secs(5)));
        assert_eq!(cfg.pet_name, "Pixel");
        assert_eq!(cfg.initial_pet, PetState::new(2, 8));
        assert_eq!(cfg.status_path, "/var/pet.txt");
    }

    #[test]
    fn zero_period_disables_decay() {
        assert_eq!(ShellConfig::default().with_decay_secs(0).decay_period, None);
        assert_eq!(ShellConfig::default().without_decay().decay_period, None);
    }

    #[test]
    fn initial_pet_clamped() {
        let cfg = ShellConfig::default().with_initial_pet(99, -4);
        assert_eq!(cfg.initial_pet, PetState::new(10, 0));
    }
}
