use super::messages::ViewEvent;
use super::state::{LoadPhase, ViewState};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::models::{RangeModel, TooltipState, nearest_visible_index};

/// Applies one event. Returns whether anything changed.
///
/// Every derived value (visible window, stats, domains) is recomputed from
/// the resulting state, so the reducer only touches the source fields.
pub fn reduce(state: &mut ViewState, ev: ViewEvent) -> bool {
    match ev {
        ViewEvent::DataLoaded(Ok(points)) => {
            log::info!("Loaded {} data points", points.len());
            state.range_model = RangeModel::new(points);
            state.phase = LoadPhase::Ready;
            state.tooltip = TooltipState::default();
            true
        }
        ViewEvent::DataLoaded(Err(error)) => {
            log::error!("Failed to fetch margin ratio data: {}", error);
            state.range_model = RangeModel::default();
            state.phase = LoadPhase::Failed(error);
            state.tooltip = TooltipState::default();
            true
        }
        ViewEvent::RangeChanged(range) => {
            if state.phase != LoadPhase::Ready {
                return false;
            }
            state.range_model.set_range(range)
        }
        ViewEvent::PointerMoved { plot_x, screen } => {
            if state.phase != LoadPhase::Ready {
                return false;
            }
            let visible = state.range_model.visible();
            let before = state.tooltip.clone();
            match nearest_visible_index(plot_x, visible.len()) {
                Some(index) => state.tooltip.activate(index, &visible[index], screen),
                None => state.tooltip.deactivate(),
            }
            let changed = state.tooltip != before;

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_tooltip && changed && before.active != state.tooltip.active {
                log::info!("[tooltip] active = {}", state.tooltip.active);
            }
            changed
        }
        ViewEvent::PointerLeft => {
            let was_active = state.tooltip.active;
            state.tooltip.deactivate();
            was_active
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FeedError;
    use crate::domain::{DataPoint, TimeRange};
    use crate::models::ScreenPoint;

    fn series(len: usize) -> Vec<DataPoint> {
        (0..len)
            .map(|i| {
                DataPoint::new(
                    format!("2024-{:02}-{:02}", 1 + i / 28, 1 + i % 28),
                    i as i64,
                    0.04 + (i % 10) as f64 * 0.001,
                )
            })
            .collect()
    }

    fn loaded(len: usize) -> ViewState {
        let mut state = ViewState::default();
        reduce(&mut state, ViewEvent::DataLoaded(Ok(series(len))));
        state
    }

    #[test]
    fn starts_loading_without_stats() {
        let state = ViewState::default();
        assert!(state.is_loading());
        assert_eq!(state.stats(), None);
        assert_eq!(state.range(), None);
    }

    #[test]
    fn data_loaded_sets_trailing_window() {
        let state = loaded(250);
        assert_eq!(state.phase, LoadPhase::Ready);
        assert_eq!(state.range(), Some(TimeRange::new(50, 249)));
        assert_eq!(state.visible().len(), 200);
        assert!(state.stats().is_some());
    }

    #[test]
    fn empty_data_shows_nothing() {
        let state = loaded(0);
        assert_eq!(state.phase, LoadPhase::Ready);
        assert!(!state.has_data());
        assert_eq!(state.stats(), None);
        assert_eq!(state.range(), None);
    }

    #[test]
    fn fetch_failure_is_terminal_and_keeps_reason() {
        let mut state = ViewState::default();
        reduce(
            &mut state,
            ViewEvent::DataLoaded(Err(FeedError::Transport("connection reset".into()))),
        );

        let error = state.error().expect("failed state");
        assert!(error.to_string().contains("connection reset"));
        assert_eq!(state.stats(), None);
        assert_eq!(state.range(), None);

        // Later interaction is ignored
        assert!(!reduce(&mut state, ViewEvent::RangeChanged(TimeRange::new(0, 0))));
        assert!(!reduce(
            &mut state,
            ViewEvent::PointerMoved {
                plot_x: 0.0,
                screen: ScreenPoint::default()
            }
        ));
    }

    #[test]
    fn range_change_updates_visible_window() {
        let mut state = loaded(120);
        assert!(reduce(&mut state, ViewEvent::RangeChanged(TimeRange::new(10, 50))));
        assert_eq!(state.visible().len(), 41);
        assert_eq!(state.visible()[0], state.range_model.points()[10]);
        assert_eq!(state.visible()[40], state.range_model.points()[50]);

        // Idempotent
        assert!(!reduce(&mut state, ViewEvent::RangeChanged(TimeRange::new(10, 50))));
    }

    #[test]
    fn pointer_move_resolves_nearest_point() {
        let mut state = loaded(30);
        let screen = ScreenPoint::new(200.0, 90.0);
        assert!(reduce(&mut state, ViewEvent::PointerMoved { plot_x: 4.2, screen }));

        let expected = state.visible()[4].clone();
        assert!(state.tooltip.active);
        assert_eq!(state.tooltip.date, expected.date);
        assert_eq!(state.tooltip.value, expected.value);
        assert_eq!(state.tooltip.screen_position, Some(screen));
        assert_eq!(state.tooltip.visible_index, Some(4));

        // Same input, same state
        assert!(!reduce(&mut state, ViewEvent::PointerMoved { plot_x: 4.2, screen }));
    }

    #[test]
    fn pointer_outside_series_deactivates() {
        let mut state = loaded(30);
        let screen = ScreenPoint::new(10.0, 10.0);
        reduce(&mut state, ViewEvent::PointerMoved { plot_x: 3.0, screen });
        assert!(reduce(&mut state, ViewEvent::PointerMoved { plot_x: 45.0, screen }));
        assert!(!state.tooltip.active);
    }

    #[test]
    fn pointer_left_preserves_content() {
        let mut state = loaded(30);
        let screen = ScreenPoint::new(50.0, 60.0);
        reduce(&mut state, ViewEvent::PointerMoved { plot_x: 2.0, screen });
        let content = state.tooltip.clone();

        assert!(reduce(&mut state, ViewEvent::PointerLeft));
        assert!(!state.tooltip.active);
        assert_eq!(state.tooltip.date, content.date);
        assert_eq!(state.tooltip.formatted_value, content.formatted_value);
        assert_eq!(state.tooltip.screen_position, content.screen_position);

        assert!(!reduce(&mut state, ViewEvent::PointerLeft));
    }
}
