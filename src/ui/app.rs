use crate::motion::ManualMotion;
use crate::ui::geometry::Measurements;
use crate::ui::mvi::Store;
use crate::ui::navigation::{FrameId, PathAction};
use crate::ui::rocket_detail::{RocketDetailAction, RocketDetailState};
use crate::ui::rocket_launch::{
    LaunchAnimation, RocketLaunchAction, RocketLaunchState, MOTION_UPDATES,
};
use crate::ui::rocket_list::{
    Destination, DestinationAction, RocketListAction, RocketListReducer, RocketListState,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::Instant;

/// Pitch change per arrow key press, in radians.
pub const TILT_STEP: f64 = 0.1;

/// Screen currently on top, resolved from the navigation path.
#[derive(Clone, Copy, Debug)]
pub enum Screen<'a> {
    List,
    Detail(FrameId, &'a RocketDetailState),
    Launch(FrameId, &'a RocketLaunchState),
}

pub struct App {
    store: Store<RocketListReducer>,
    selected: usize,
    should_quit: bool,
    /// Keyboard-driven sensor, when the launch screen is fed by one.
    manual: Option<ManualMotion>,
    /// Start motion updates as soon as the launch screen opens.
    auto_start: bool,
    animation: LaunchAnimation,
    measurements: Measurements,
}

impl App {
    pub fn new(
        store: Store<RocketListReducer>,
        manual: Option<ManualMotion>,
        auto_start: bool,
    ) -> Self {
        Self {
            store,
            selected: 0,
            should_quit: false,
            manual,
            auto_start,
            animation: LaunchAnimation::default(),
            measurements: Measurements::new(),
        }
    }

    pub fn state(&self) -> &RocketListState {
        self.store.state()
    }

    pub fn store_mut(&mut self) -> &mut Store<RocketListReducer> {
        &mut self.store
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Highlighted row, clamped to the current record count.
    pub fn selected(&self) -> usize {
        self.selected
            .min(self.state().rockets.len().saturating_sub(1))
    }

    pub fn manual(&self) -> Option<&ManualMotion> {
        self.manual.as_ref()
    }

    pub fn animation(&self) -> &LaunchAnimation {
        &self.animation
    }

    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    /// Fold what the last draw measured into the known geometry.
    pub fn record(&mut self, measured: Measurements) {
        self.measurements.merge(measured);
    }

    pub fn screen(&self) -> Screen<'_> {
        match self.state().path.top() {
            None => Screen::List,
            Some(frame) => match &frame.state {
                Destination::Detail(state) => Screen::Detail(frame.id(), state),
                Destination::Launch(state) => Screen::Launch(frame.id(), state),
            },
        }
    }

    /// True while the launch frame `id` has a live pitch subscription.
    pub fn motion_active(&self, id: FrameId) -> bool {
        self.store.is_running(&MOTION_UPDATES.scoped(id))
    }

    pub fn load(&mut self) {
        self.store.send(RocketListAction::Load);
    }

    /// Keep the animation target in step with the launch state on top.
    pub fn on_tick(&mut self, now: Instant) {
        if let Screen::Launch(_, state) = self.screen() {
            let launched = state.is_launched;
            self.animation.set_launched(launched, now);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.screen() {
            Screen::List => self.on_list_key(key),
            Screen::Detail(id, _) => self.on_detail_key(id, key),
            Screen::Launch(id, _) => self.on_launch_key(id, key),
        }
    }

    fn on_list_key(&mut self, key: KeyEvent) {
        let count = self.state().rockets.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected().saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 {
                    self.selected = (self.selected() + 1).min(count - 1);
                }
            }
            KeyCode::Enter => {
                if let Some(rocket) = self.state().rockets.get(self.selected()).cloned() {
                    self.store.send(RocketListAction::OpenDetail(rocket));
                }
            }
            KeyCode::Char('l') => self.open_launch(),
            KeyCode::Char('r') => self.load(),
            _ => {}
        }
    }

    fn on_detail_key(&mut self, id: FrameId, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.back(),
            KeyCode::Char('u') => self.send_to(
                id,
                DestinationAction::Detail(RocketDetailAction::ToggleUnits),
            ),
            KeyCode::Char('q') => self.request_quit(),
            _ => {}
        }
    }

    fn on_launch_key(&mut self, id: FrameId, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.back(),
            KeyCode::Char('l') => self.send_launch(id, RocketLaunchAction::Launch),
            KeyCode::Char('d') => self.send_launch(id, RocketLaunchAction::Land),
            KeyCode::Char('m') => {
                let action = if self.motion_active(id) {
                    RocketLaunchAction::StopMotionUpdates
                } else {
                    RocketLaunchAction::StartMotionUpdates
                };
                self.send_launch(id, action);
            }
            KeyCode::Up => self.tilt(TILT_STEP),
            KeyCode::Down => self.tilt(-TILT_STEP),
            KeyCode::Char('q') => self.request_quit(),
            _ => {}
        }
    }

    fn open_launch(&mut self) {
        self.store.send(RocketListAction::OpenLaunch);
        self.animation = LaunchAnimation::default();
        if self.auto_start {
            if let Screen::Launch(id, _) = self.screen() {
                self.send_launch(id, RocketLaunchAction::StartMotionUpdates);
            }
        }
    }

    fn back(&mut self) {
        self.store.send(RocketListAction::Path(PathAction::Pop));
    }

    fn tilt(&mut self, delta: f64) {
        if let Some(manual) = &self.manual {
            let pitch = manual.tilt(delta);
            tracing::trace!(pitch, "Manual pitch adjusted");
        }
    }

    fn send_launch(&mut self, id: FrameId, action: RocketLaunchAction) {
        self.send_to(id, DestinationAction::Launch(action));
    }

    fn send_to(&mut self, id: FrameId, action: DestinationAction) {
        self.store
            .send(RocketListAction::Path(PathAction::Element { id, action }));
    }
}
