use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::engine::{Command, Phase};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.refresh();
            vec![]
        }
        AppEvent::InputClosed => {
            tracing::warn!("terminal input closed, quitting");
            vec![Action::Quit]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => press_primary(state),
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Enter => press_secondary(state),
        KeyCode::Char('r') | KeyCode::Char('R') => run_command(state, Command::Reset),
        _ => vec![],
    }
}

/// Start/Stop button.
fn press_primary(state: &mut AppState) -> Vec<Action> {
    let command = if state.snapshot.is_running {
        Command::Stop
    } else {
        Command::Start
    };
    run_command(state, command)
}

/// Lap/Reset button.
fn press_secondary(state: &mut AppState) -> Vec<Action> {
    let command = if state.snapshot.is_running {
        Command::Lap
    } else {
        Command::Reset
    };
    run_command(state, command)
}

fn run_command(state: &mut AppState, command: Command) -> Vec<Action> {
    let (before, after) = state.command(command);
    ticker_actions(before, after)
}

/// The ticker runs exactly while the engine is running.
fn ticker_actions(before: Phase, after: Phase) -> Vec<Action> {
    match (before == Phase::Running, after == Phase::Running) {
        (false, true) => vec![Action::StartTicker],
        (true, false) => vec![Action::StopTicker],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::engine::ManualClock;

    fn setup() -> (AppState, ManualClock) {
        let clock = ManualClock::new(0);
        let state = AppState::new(AppConfig::default(), Box::new(clock.clone()));
        (state, clock)
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    #[test]
    fn test_primary_toggles_and_drives_ticker() {
        let (mut state, clock) = setup();
        assert_eq!(press(&mut state, KeyCode::Char(' ')), vec![Action::StartTicker]);
        assert!(state.snapshot.is_running);

        clock.set(1_230);
        assert_eq!(press(&mut state, KeyCode::Char(' ')), vec![Action::StopTicker]);
        assert!(!state.snapshot.is_running);
        assert_eq!(state.snapshot.total_time, "00:01.23");
    }

    #[test]
    fn test_secondary_laps_while_running() {
        let (mut state, clock) = setup();
        press(&mut state, KeyCode::Char('s'));
        clock.set(1_500);
        assert!(press(&mut state, KeyCode::Char('l')).is_empty());
        assert_eq!(state.snapshot.laps.len(), 1);
        assert_eq!(state.snapshot.laps[0].label, "Lap 1");
        assert_eq!(state.snapshot.laps[0].formatted_time, "00:01.50");
    }

    #[test]
    fn test_secondary_resets_while_stopped() {
        let (mut state, clock) = setup();
        press(&mut state, KeyCode::Char('s'));
        clock.set(800);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.snapshot.phase, Phase::Stopped);

        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(state.snapshot.phase, Phase::Idle);
        assert!(state.snapshot.laps.is_empty());
        assert_eq!(state.snapshot.total_time, "00:00.00");
    }

    #[test]
    fn test_reset_while_running_stops_ticker() {
        let (mut state, clock) = setup();
        press(&mut state, KeyCode::Char('s'));
        clock.set(300);
        assert_eq!(press(&mut state, KeyCode::Char('r')), vec![Action::StopTicker]);
        assert_eq!(state.snapshot.phase, Phase::Idle);
    }

    #[test]
    fn test_tick_refreshes_snapshot() {
        let (mut state, clock) = setup();
        press(&mut state, KeyCode::Char('s'));
        state.dirty = false;
        clock.set(2_300);
        assert!(handle_event(&mut state, AppEvent::Tick).is_empty());
        assert_eq!(state.snapshot.total_time, "00:02.30");
        assert!(state.dirty);
    }

    #[test]
    fn test_idle_tick_stays_clean() {
        let (mut state, clock) = setup();
        state.dirty = false;
        clock.set(9_000);
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);
    }

    #[test]
    fn test_quit_keys() {
        let (mut state, _) = setup();
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
        assert_eq!(press(&mut state, KeyCode::Esc), vec![Action::Quit]);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_event(&mut state, AppEvent::Terminal(CEvent::Key(ctrl_c))),
            vec![Action::Quit]
        );
    }

    #[test]
    fn test_input_closed_quits_while_running() {
        let (mut state, _) = setup();
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(
            handle_event(&mut state, AppEvent::InputClosed),
            vec![Action::Quit]
        );
    }

    #[test]
    fn test_status_line_counts_laps() {
        let (mut state, clock) = setup();
        assert_eq!(state.status_line(), "Ready");
        press(&mut state, KeyCode::Char('s'));
        clock.set(100);
        press(&mut state, KeyCode::Char('l'));
        clock.set(350);
        press(&mut state, KeyCode::Char('l'));
        assert_eq!(state.status_line(), "Lap 2 recorded: 00:00.25");

        press(&mut state, KeyCode::Char(' '));
        assert_eq!(state.status_line(), "Stopped | Laps: 2");
    }
}
