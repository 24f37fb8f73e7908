//! Interactive session driving the placement engine from text commands.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tagging_core::{
    DatasetSource, Evaluation, Gesture, GestureRouter, PlacementEngine, Snapshot, WidgetConfig,
    WidgetView, Zone,
};

use crate::commands::{Command, CommandRegistry};
use crate::error::AppError;
use crate::render::render_view;

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub widget: WidgetConfig,
    /// Shuffle the tags once they are loaded.
    pub shuffle: bool,
}

impl AppConfig {
    /// Read the widget settings from a JSON file. Missing keys keep their defaults.
    pub fn from_config_file(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        let widget = WidgetConfig::from_json(&json)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(Self {
            widget,
            shuffle: false,
        })
    }

    /// Location of the tag dataset.
    pub fn dataset_path(&self) -> PathBuf {
        PathBuf::from(&self.widget.dataset)
    }
}

/// One widget session.
pub struct App {
    config: AppConfig,
    engine: PlacementEngine,
    router: GestureRouter,
}

impl App {
    /// Create a session with no tags loaded.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            engine: PlacementEngine::new(),
            router: GestureRouter::new(),
        }
    }

    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    /// Fetch tags from `source` and load them into the engine.
    ///
    /// On failure the engine keeps its previous state.
    pub async fn load_from<S: DatasetSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<Snapshot, AppError> {
        log::info!("Collecting tags from {}", source.describe());
        let records = source.fetch().await?;
        let mut snapshot = self.engine.load(records)?;
        if self.config.shuffle {
            snapshot = self.engine.reset();
        }
        Ok(snapshot)
    }

    /// Current view of the widget.
    pub fn view(&self) -> WidgetView {
        WidgetView::from_snapshot(&self.config.widget, &self.engine.snapshot())
    }

    /// Read commands from `input` until it ends or the user quits.
    ///
    /// Command errors are reported to `out` and the session continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), AppError> {
        render_view(&self.view(), out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(out, "> ")?;
                out.flush()?;
                continue;
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => write!(out, "{}", CommandRegistry::format_all())?,
                Ok(command) => match self.execute(command) {
                    Ok(()) => {
                        render_view(&self.view(), out)?;
                        if let Some(eval) = self.engine.evaluation() {
                            writeln!(out, "{}", describe_evaluation(&eval))?;
                        }
                    }
                    Err(e) => writeln!(out, "Error: {e}")?,
                },
                Err(e) => writeln!(out, "Error: {e}")?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Apply a single command to the engine.
    pub fn execute(&mut self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Place(id) => {
                self.engine.place(&id)?;
            }
            Command::Remove(id) => {
                self.engine.remove(&id)?;
            }
            Command::Toggle(id) => {
                self.engine.toggle(&id)?;
            }
            Command::Click(id) => {
                let zone = if self.engine.is_placed(&id) {
                    Zone::AnswerArea
                } else {
                    Zone::Pool
                };
                self.dispatch(Gesture::Click { id, zone })?;
            }
            Command::Drag(id) => self.dispatch(Gesture::DragStart { id })?,
            Command::Drop(zone) => self.dispatch(Gesture::Drop { zone })?,
            Command::Check => self.dispatch(Gesture::CheckPressed)?,
            Command::Reset => self.dispatch(Gesture::ResetPressed)?,
            Command::Help | Command::Quit => {}
        }
        Ok(())
    }

    fn dispatch(&mut self, gesture: Gesture) -> Result<(), AppError> {
        self.router.dispatch(&mut self.engine, gesture)?;
        Ok(())
    }
}

fn describe_evaluation(eval: &Evaluation) -> String {
    let mut text = format!("{} correct, {} incorrect", eval.correct, eval.incorrect);
    if eval.missed > 0 {
        text.push_str(&format!(", {} correct tag(s) still in the pool", eval.missed));
    }
    text
}
