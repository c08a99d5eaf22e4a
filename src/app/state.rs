use crate::config::AppConfig;
use crate::engine::{Clock, Command, Phase, Snapshot, StopwatchEngine};

pub struct AppState {
    pub config: AppConfig,
    pub engine: StopwatchEngine,
    pub snapshot: Snapshot,
    pub clock: Box<dyn Clock>,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, clock: Box<dyn Clock>) -> Self {
        let engine = StopwatchEngine::new();
        let snapshot = engine.tick(clock.now_ms());
        Self {
            config,
            engine,
            snapshot,
            clock,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    /// Run a command against the engine at the current instant and return
    /// the phase before and after it.
    pub fn command(&mut self, command: Command) -> (Phase, Phase) {
        let before = self.engine.phase();
        let now = self.clock.now_ms();
        self.snapshot = self.engine.apply(command, now);
        let after = self.engine.phase();
        self.status_message = match (command, after) {
            (Command::Lap, Phase::Running) => self
                .snapshot
                .laps
                .first()
                .map(|lap| format!("{} recorded: {}", lap.label, lap.formatted_time)),
            _ => None,
        };
        self.dirty = true;
        (before, after)
    }

    pub fn refresh(&mut self) {
        let snapshot = self.engine.tick(self.clock.now_ms());
        if snapshot != self.snapshot {
            self.snapshot = snapshot;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let phase = match self.snapshot.phase {
            Phase::Idle => "Ready",
            Phase::Running => "Running",
            Phase::Stopped => "Stopped",
        };
        let laps = self.engine.state().lap_counter;
        if laps > 0 {
            format!("{} | Laps: {}", phase, laps)
        } else {
            phase.to_string()
        }
    }
}
