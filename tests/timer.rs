#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use pomo::libs::error::PomodoroError;
    use pomo::libs::record::Phase;
    use pomo::libs::settings::Settings;
    use pomo::libs::timer::{CompletionEvent, Timer};

    /// Wall clock advanced one second per tick.
    struct Clock(NaiveDateTime);

    impl Clock {
        fn new() -> Self {
            Clock(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(9, 0, 0).unwrap())
        }

        fn now(&self) -> NaiveDateTime {
            self.0
        }

        fn advance(&mut self) -> NaiveDateTime {
            self.0 += TimeDelta::seconds(1);
            self.0
        }
    }

    /// Starts the current phase and ticks until it completes.
    fn run_phase(timer: &mut Timer, clock: &mut Clock) -> CompletionEvent {
        timer.toggle(clock.now());
        loop {
            if let Some(event) = timer.tick(clock.advance()) {
                return event;
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let timer = Timer::new(Settings::default());
        let state = timer.state();
        assert_eq!(state.phase, Phase::Work);
        assert_eq!(state.remaining_seconds, 1500);
        assert!(!state.is_running);
        assert_eq!(state.completed_work_count, 0);
        assert_eq!(state.current_session_started_at, None);
    }

    #[test]
    fn test_ticks_decrement_by_one_second() {
        let mut clock = Clock::new();
        let mut timer = Timer::new(Settings::default());
        timer.toggle(clock.now());

        for _ in 0..100 {
            assert!(timer.tick(clock.advance()).is_none());
        }
        assert_eq!(timer.state().remaining_seconds, 1400);
        assert!(timer.state().is_running);
    }

    #[test]
    fn test_work_completion_moves_to_short_break() {
        let mut clock = Clock::new();
        let mut timer = Timer::new(Settings::default());
        let started = clock.now();

        let event = run_phase(&mut timer, &mut clock);
        assert_eq!(event.phase, Phase::Work);
        assert_eq!(event.started_at, Some(started));
        assert_eq!(event.ended_at, started + TimeDelta::seconds(1500));
        assert_eq!(event.next_phase, Phase::ShortBreak);

        let state = timer.state();
        assert_eq!(state.completed_work_count, 1);
        assert_eq!(state.phase, Phase::ShortBreak);
        assert_eq!(state.remaining_seconds, 300);
        assert!(!state.is_running);
        assert_eq!(state.current_session_started_at, None);
    }

    #[test]
    fn test_long_break_after_interval() {
        let mut clock = Clock::new();
        let settings = Settings::new(1, 1, 2, 2).unwrap();
        let mut timer = Timer::new(settings);

        assert_eq!(run_phase(&mut timer, &mut clock).next_phase, Phase::ShortBreak);
        assert_eq!(run_phase(&mut timer, &mut clock).next_phase, Phase::Work);
        assert_eq!(run_phase(&mut timer, &mut clock).next_phase, Phase::LongBreak);
        assert_eq!(timer.state().completed_work_count, 2);
        assert_eq!(timer.state().remaining_seconds, 120);
    }

    #[test]
    fn test_breaks_return_to_work_without_counting() {
        let mut clock = Clock::new();
        let mut timer = Timer::new(Settings::default());

        for phase in [Phase::ShortBreak, Phase::LongBreak] {
            timer.switch_phase(phase).unwrap();
            let event = run_phase(&mut timer, &mut clock);
            assert_eq!(event.phase, phase);
            assert_eq!(event.started_at, None);
            assert_eq!(event.next_phase, Phase::Work);
            assert_eq!(timer.state().remaining_seconds, 1500);
            assert_eq!(timer.state().completed_work_count, 0);
        }
    }

    #[test]
    fn test_reset_restores_full_duration() {
        let mut clock = Clock::new();
        let mut timer = Timer::new(Settings::default());
        timer.toggle(clock.now());
        for _ in 0..42 {
            timer.tick(clock.advance());
        }

        timer.reset();
        let state = timer.state();
        assert_eq!(state.phase, Phase::Work);
        assert_eq!(state.remaining_seconds, 1500);
        assert!(!state.is_running);
        assert_eq!(state.current_session_started_at, None);
    }

    #[test]
    fn test_switch_phase_rejected_while_running() {
        let mut clock = Clock::new();
        let mut timer = Timer::new(Settings::default());
        timer.toggle(clock.now());
        timer.tick(clock.advance());
        let before = timer.snapshot();

        let result = timer.switch_phase(Phase::LongBreak);
        assert!(matches!(result, Err(PomodoroError::Validation(_))));
        assert_eq!(timer.snapshot(), before);
    }

    #[test]
    fn test_switch_phase_when_stopped() {
        let mut timer = Timer::new(Settings::default());
        timer.switch_phase(Phase::LongBreak).unwrap();
        assert_eq!(timer.state().phase, Phase::LongBreak);
        assert_eq!(timer.state().remaining_seconds, 900);
        assert!(!timer.state().is_running);
    }

    #[test]
    fn test_update_settings_while_stopped_discards_progress() {
        let mut clock = Clock::new();
        let mut timer = Timer::new(Settings::default());
        timer.toggle(clock.now());
        timer.tick(clock.advance());
        timer.toggle(clock.now());

        timer.update_settings(Settings::new(50, 10, 30, 4).unwrap());
        assert_eq!(timer.state().remaining_seconds, 3000);
    }

    #[test]
    fn test_update_settings_while_running_keeps_countdown() {
        let mut clock = Clock::new();
        let mut timer = Timer::new(Settings::default());
        timer.toggle(clock.now());
        timer.tick(clock.advance());

        timer.update_settings(Settings::new(50, 10, 30, 4).unwrap());
        assert_eq!(timer.state().remaining_seconds, 1499);

        // The new lengths apply from the next phase on.
        let event = run_until_complete(&mut timer, &mut clock);
        assert_eq!(event.next_phase, Phase::ShortBreak);
        assert_eq!(timer.state().remaining_seconds, 600);
    }

    fn run_until_complete(timer: &mut Timer, clock: &mut Clock) -> CompletionEvent {
        loop {
            if let Some(event) = timer.tick(clock.advance()) {
                return event;
            }
        }
    }

    #[test]
    fn test_four_cycles_with_default_settings() {
        let mut clock = Clock::new();
        let mut timer = Timer::new(Settings::default());
        let mut completed = Vec::new();

        for _ in 0..8 {
            completed.push(run_phase(&mut timer, &mut clock).phase);
        }

        assert_eq!(
            completed,
            vec![
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::LongBreak,
            ]
        );
        assert_eq!(timer.state().completed_work_count, 4);
        assert_eq!(timer.state().phase, Phase::Work);
        assert_eq!(timer.state().remaining_seconds, 1500);
    }

    #[test]
    fn test_completed_count_is_monotonic() {
        let mut clock = Clock::new();
        let mut timer = Timer::new(Settings::new(1, 1, 1, 3).unwrap());
        let mut last = 0;

        for _ in 0..10 {
            run_phase(&mut timer, &mut clock);
            timer.reset();
            let count = timer.state().completed_work_count;
            assert!(count >= last);
            last = count;
        }
    }
}
