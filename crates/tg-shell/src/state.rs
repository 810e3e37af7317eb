//! The mutable state of one session.

use tracing::warn;

use tg_core::{PetState, VirtualFilesystem, WorkingDirectory};

use crate::config::ShellConfig;

/// The filesystem, working directory and pet a session operates on.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub(crate) fs: VirtualFilesystem,
    pub(crate) cwd: WorkingDirectory,
    pub(crate) pet: PetState,
    pet_name: String,
    status_path: String,
}

impl ShellState {
    /// Create state over the boot filesystem, with the status file rendered.
    pub fn new(config: &ShellConfig) -> Self {
        Self::with_filesystem(config, VirtualFilesystem::boot())
    }

    /// Create state over a given filesystem, with the status file rendered.
    pub fn with_filesystem(config: &ShellConfig, fs: VirtualFilesystem) -> Self {
        let mut state = Self {
            fs,
            cwd: WorkingDirectory::root(),
            pet: config.initial_pet,
            pet_name: config.pet_name.clone(),
            status_path: config.status_path.clone(),
        };
        state.refresh_status();
        state
    }

    /// The filesystem.
    pub fn fs(&self) -> &VirtualFilesystem {
        &self.fs
    }

    /// The working directory.
    pub fn cwd(&self) -> &WorkingDirectory {
        &self.cwd
    }

    /// The pet.
    pub fn pet(&self) -> &PetState {
        &self.pet
    }

    /// The pet, mutably. Call [`ShellState::refresh_status`] afterwards to
    /// keep the status file in step.
    pub fn pet_mut(&mut self) -> &mut PetState {
        &mut self.pet
    }

    /// The pet's name.
    pub fn pet_name(&self) -> &str {
        &self.pet_name
    }

    /// Where the status file lives.
    pub fn status_path(&self) -> &str {
        &self.status_path
    }

    /// Re-render the pet into the status file.
    ///
    /// Missing directories on the way are created. If something else
    /// occupies the path the refresh is skipped.
    pub fn refresh_status(&mut self) {
        let text = self.pet.render_status_named(&self.pet_name);
        if let Err(e) = self.fs.write_file(&self.status_path, text) {
            warn!(path = %self.status_path, error = %e, "status refresh skipped");
        }
    }

    /// One passive decay step followed by a status refresh.
    pub fn decay(&mut self) {
        self.pet.decay();
        self.refresh_status();
    }

    /// Swap in a new filesystem and go back to the root. The pet is kept.
    pub fn replace_filesystem(&mut self, fs: VirtualFilesystem) {
        self.fs = fs;
        self.cwd.reset();
    }
}
