//! Configuration of [`DefaultEvaluator`](super::DefaultEvaluator).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
    time::Duration,
};

/// Configuration of [`DefaultEvaluator`](super::DefaultEvaluator).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EvaluatorConfig {
    /// The number of episodes. Ignored when rendering, which always runs one episode.
    pub n_episodes: usize,

    /// Renders the environment at every step.
    pub render: bool,

    /// Wait after each rendered step in milliseconds.
    pub render_wait_ms: u64,

    /// Maximum number of steps in an episode. `None` runs episodes until done.
    pub max_steps: Option<usize>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            n_episodes: 1,
            render: false,
            render_wait_ms: 50,
            max_steps: None,
        }
    }
}

impl EvaluatorConfig {
    /// Sets the number of episodes.
    pub fn n_episodes(mut self, v: usize) -> Self {
        self.n_episodes = v;
        self
    }

    /// Sets the rendering flag.
    pub fn render(mut self, v: bool) -> Self {
        self.render = v;
        self
    }

    /// Sets the wait after each rendered step in milliseconds.
    pub fn render_wait_ms(mut self, v: u64) -> Self {
        self.render_wait_ms = v;
        self
    }

    /// Sets the step ceiling of an episode.
    pub fn max_steps(mut self, v: Option<usize>) -> Self {
        self.max_steps = v;
        self
    }

    /// The number of episodes actually run.
    pub fn effective_n_episodes(&self) -> usize {
        if self.render {
            1
        } else {
            self.n_episodes
        }
    }

    pub(crate) fn render_wait(&self) -> Duration {
        Duration::from_millis(self.render_wait_ms)
    }

    /// Constructs [`EvaluatorConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`EvaluatorConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
