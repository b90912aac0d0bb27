//! # Host Runtime
//!
//! The tick loop that ties the session, the view and the input together.
//!
//! Each step runs the same phases in the same order:
//! 1. Synchronize the text box with the highlight
//! 2. Render the frame from the now-consistent session
//! 3. Apply the next input

use crate::config::{ConfigError, HostConfig};
use crate::input_script::{InputScript, InputScriptError, ScriptedInput};
use fragment_core::{EditorCommand, EditorSession, SessionConfig};
use services_overlay_view::{
    fit_image, Frame, FrameBuilder, ImageLayout, MonospaceMeasure, PanelLayout, TextFrameRenderer,
};
use services_record_io::{DetectionRecord, RecordError};
use std::io::{self, BufRead, Write};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Script error: {0}")]
    Script(#[from] InputScriptError),

    #[error("Failed to read script {}: {source}", path.display())]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Record has nothing to review")]
    EmptyRecord,
}

/// Host runtime configuration
#[derive(Debug, Clone)]
pub struct HostRuntimeConfig {
    pub host: HostConfig,
    /// Maximum steps to run (0 = unlimited)
    pub max_steps: usize,
    /// Print the console frame on every step
    pub print_frames: bool,
}

impl Default for HostRuntimeConfig {
    fn default() -> Self {
        Self {
            host: HostConfig::default(),
            max_steps: 0,
            print_frames: false,
        }
    }
}

/// Host runtime state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostState {
    Running,
    Shutdown,
}

/// Host runtime
pub struct HostRuntime {
    config: HostRuntimeConfig,
    record: DetectionRecord,
    session: EditorSession,
    image: ImageLayout,
    measure: MonospaceMeasure,
    renderer: TextFrameRenderer,
    script: InputScript,
    /// Line source once the script runs dry (interactive mode)
    interactive: Option<Box<dyn BufRead>>,
    interactive_line: usize,
    state: HostState,
    steps: usize,
    changes: usize,
    last_frame: Frame,
}

impl HostRuntime {
    /// Creates a new host runtime over a loaded record
    pub fn new(
        config: HostRuntimeConfig,
        record: DetectionRecord,
        image: ImageLayout,
        script: InputScript,
    ) -> Result<Self, HostRuntimeError> {
        let panel = PanelLayout::from_config(&config.host.view);
        let session = EditorSession::new(
            record.fragments(),
            SessionConfig {
                visible_window: config.host.view.visible_window,
                text_box_rect: panel.edit_box.into(),
            },
        )
        .ok_or(HostRuntimeError::EmptyRecord)?;

        Ok(Self {
            measure: config.host.measure(),
            renderer: TextFrameRenderer::new(config.host.viewport_rows),
            config,
            record,
            session,
            image,
            script,
            interactive: None,
            interactive_line: 0,
            state: HostState::Running,
            steps: 0,
            changes: 0,
            last_frame: Frame::default(),
        })
    }

    /// Read further input lines from `reader` once the script is exhausted
    pub fn with_interactive(mut self, reader: Box<dyn BufRead>) -> Self {
        self.interactive = Some(reader);
        self
    }

    /// Runs the host event loop
    ///
    /// Returns when:
    /// - Quit input received
    /// - Max steps reached (if configured)
    /// - Input exhausted (script drained and no interactive source, or EOF)
    pub fn run(&mut self) -> Result<(), HostRuntimeError> {
        while self.state == HostState::Running {
            if self.config.max_steps > 0 && self.steps >= self.config.max_steps {
                log::info!("stopping after {} steps", self.steps);
                break;
            }
            self.step()?;
        }
        Ok(())
    }

    /// Executes one step of the event loop
    pub fn step(&mut self) -> Result<(), HostRuntimeError> {
        // 1. Synchronize
        if self.session.tick() {
            log::debug!(
                "now editing fragment {}: {:?}",
                self.session.highlight(),
                self.session.edited_text()
            );
        }

        // 2. Render
        self.render()?;

        // 3. Input
        match self.next_input()? {
            Some(ScriptedInput::Key(key)) => {
                let command = EditorCommand::from_key(&key);
                let outcome = self.session.apply(command.clone());
                if outcome.is_changed() {
                    self.changes += 1;
                }
                log::trace!("{:?} -> {:?} ({:?})", key, command, outcome);
            }
            Some(ScriptedInput::Quit) => {
                log::info!("quit requested");
                self.state = HostState::Shutdown;
            }
            None => {
                log::info!("input exhausted");
                self.state = HostState::Shutdown;
            }
        }

        self.steps += 1;
        Ok(())
    }

    fn render(&mut self) -> Result<(), HostRuntimeError> {
        let builder = FrameBuilder::new(&self.config.host.view, &self.measure);
        self.last_frame = builder.build(&self.session, &self.image);

        if self.config.print_frames {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", self.renderer.render(&self.session))?;
            writeln!(stdout)?;
        }
        Ok(())
    }

    fn next_input(&mut self) -> Result<Option<ScriptedInput>, HostRuntimeError> {
        loop {
            if let Some(input) = self.script.next_input() {
                return Ok(Some(input));
            }

            let Some(reader) = self.interactive.as_mut() else {
                return Ok(None);
            };

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.interactive_line += 1;

            // A typo at the prompt should not end the session
            if let Err(e) = self.script.push_line(&line, self.interactive_line) {
                log::warn!("{}", e);
            }
        }
    }

    /// Write the session's edits into the record and hand it back
    pub fn finish(mut self) -> DetectionRecord {
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&self.session.snapshot()) {
                Ok(state) => log::debug!("final state: {}", state),
                Err(e) => log::debug!("final state unavailable: {}", e),
            }
        }

        let store = self.session.into_store();
        self.record.apply(&store);
        log::info!(
            "review finished after {} steps: {} changes, {} fragments kept",
            self.steps,
            self.changes,
            store.len()
        );
        self.record
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn last_frame(&self) -> &Frame {
        &self.last_frame
    }

    pub fn step_count(&self) -> usize {
        self.steps
    }

    pub fn is_running(&self) -> bool {
        self.state == HostState::Running
    }
}

/// Read and parse an input script file
pub fn load_script(path: &Path) -> Result<InputScript, HostRuntimeError> {
    let text = fs::read_to_string(path).map_err(|source| HostRuntimeError::ScriptRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(InputScript::from_text(&text)?)
}

/// Lay out the image at `path`, or the full image area when its size cannot
/// be read.
pub fn probe_image(path: &Path, host: &HostConfig) -> ImageLayout {
    let view = &host.view;
    match image::image_dimensions(path) {
        Ok((width, height)) => {
            log::info!("image {} is {}x{}", path.display(), width, height);
            fit_image(width, height, view)
        }
        Err(e) => {
            log::warn!(
                "could not read image size of {}: {}; using the full image area",
                path.display(),
                e
            );
            fit_image(
                (view.image_max_width * view.window_width) as u32,
                (view.image_max_height * view.window_height) as u32,
                view,
            )
        }
    }
}
