use getset::Getters;
use log::{debug, info, warn};
use std::path::Path;

use crate::sampler::{select_names_from_path, NameRecord, RandomIndex};

/// What the user currently sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorState {
    Idle,
    Error(String),
    Sampled(Vec<NameRecord>),
}

/// Holds the state between user actions. Only `upload` touches files; `clear` just resets.
#[derive(Debug, Getters)]
pub struct Selector {
    #[getset(get = "pub")]
    state: SelectorState,
    #[getset(get = "pub")]
    sample_size: usize,
}

impl Selector {
    pub fn new(sample_size: usize) -> Self {
        Selector {
            state: SelectorState::Idle,
            sample_size,
        }
    }

    /// Replace the current state with the outcome of drawing from `file_path`.
    pub fn upload<R>(&mut self, file_path: &Path, rng: &mut R) -> &SelectorState
    where
        R: RandomIndex + ?Sized,
    {
        debug!("uploading {}", file_path.display());

        self.state = match select_names_from_path(file_path, self.sample_size, rng) {
            Ok(names) => {
                info!("drew {} names from {}", names.len(), file_path.display());
                SelectorState::Sampled(names)
            }
            Err(e) => {
                warn!("{} rejected: {}", file_path.display(), e.kind());
                SelectorState::Error(e.to_string())
            }
        };

        &self.state
    }

    pub fn clear(&mut self) -> &SelectorState {
        debug!("clearing selection");
        self.state = SelectorState::Idle;
        &self.state
    }

    /// The current sample, if the last upload succeeded.
    pub fn selected(&self) -> Option<&[NameRecord]> {
        match &self.state {
            SelectorState::Sampled(names) => Some(names),
            _ => None,
        }
    }
}

/******************************************************************************/
/* Tests                                                                      */
/******************************************************************************/
