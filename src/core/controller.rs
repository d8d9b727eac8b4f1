// Preferences Window Controller
// Pane switching state machine: registry lookup, resize, cross-fade, toolbar sync

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use ratatui::layout::{Position, Rect, Size};
use tracing::{debug, info};

use super::app_config::ControllerConfig;
use super::clock::{Clock, SystemClock};
use super::errors::PrefsError;
use super::pane::{Pane, ViewRef};
use super::registry::ViewRegistry;
use super::toolbar::Toolbar;
use super::transition::{Transition, TransitionHandle, TransitionOutcome};
use super::window::PrefsWindow;

/// Pane registration callback run once before the window is first shown
pub type SetupFn = Box<dyn FnOnce(&mut ViewRegistry) -> Result<(), PrefsError>>;

/// Screen assumed until the host reports the real terminal size
const DEFAULT_SCREEN: Rect = Rect { x: 0, y: 0, width: 80, height: 24 };

thread_local! {
    static SHARED: Rc<RefCell<PrefsWindowController>> =
        Rc::new(RefCell::new(PrefsWindowController::new(ControllerConfig::default())));
}

/// Controls the preferences window: which pane is visible and how switches animate.
///
/// All methods run on the UI thread. Animated switches progress only when the
/// event loop calls [`tick`](Self::tick).
pub struct PrefsWindowController {
    config: ControllerConfig,
    registry: ViewRegistry,
    setup: Option<SetupFn>,
    /// Set once the toolbar has been built; the registry is frozen from then on
    sealed: bool,
    toolbar: Toolbar,
    window: PrefsWindow,
    current: Option<String>,
    cross_fade: bool,
    transition: Option<Transition>,
    clock: Rc<dyn Clock>,
}

impl fmt::Debug for PrefsWindowController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefsWindowController")
            .field("current", &self.current)
            .field("cross_fade", &self.cross_fade)
            .field("animating", &self.is_animating())
            .field("sealed", &self.sealed)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

impl PrefsWindowController {
    /// Create a controller using the wall clock and a default 80x24 screen
    pub fn new(config: ControllerConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::default()
    }

    /// Process-wide instance for the current (UI) thread, created on first access
    pub fn shared() -> Rc<RefCell<Self>> {
        SHARED.with(Rc::clone)
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                        Setup                                               │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Supply the pane registration callback
    pub fn set_setup<F>(&mut self, setup: F)
    where
        F: FnOnce(&mut ViewRegistry) -> Result<(), PrefsError> + 'static,
    {
        self.setup = Some(Box::new(setup));
    }

    /// Register a pane directly (before the window is shown)
    pub fn register(&mut self, view: ViewRef, label: &str, image: Option<&str>) -> Result<String, PrefsError> {
        self.ensure_unsealed(label)?;
        self.registry.register(view, label, image)
    }

    /// Register a pane under an identifier distinct from its label
    pub fn register_with_identifier(
        &mut self,
        identifier: &str,
        view: ViewRef,
        label: &str,
        image: Option<&str>,
    ) -> Result<String, PrefsError> {
        self.ensure_unsealed(identifier)?;
        self.registry.register_with_identifier(identifier, view, label, image)
    }

    /// Add a flexible space between toolbar items
    pub fn add_spacer(&mut self) -> Result<(), PrefsError> {
        self.ensure_unsealed("<spacer>")?;
        self.registry.add_spacer();
        Ok(())
    }

    fn ensure_unsealed(&self, what: &str) -> Result<(), PrefsError> {
        if self.sealed {
            Err(PrefsError::RegistrySealed(what.to_string()))
        } else {
            Ok(())
        }
    }

    /// Run the setup callback and build the toolbar. Runs once; later calls do nothing.
    ///
    /// A failing callback aborts setup and leaves the registry as it was.
    pub fn setup_toolbar(&mut self) -> Result<(), PrefsError> {
        if self.sealed {
            return Ok(());
        }

        if let Some(setup) = self.setup.take() {
            let mut staged = self.registry.clone();
            setup(&mut staged)?;
            self.registry = staged;
        }

        self.toolbar = Toolbar::from_registry(&self.registry, &self.config.icons);
        self.sealed = true;

        info!(
            event = "prefs.toolbar.setup_completed",
            panes = self.registry.len(),
            entries = self.registry.entries().len()
        );
        Ok(())
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                    Window lifecycle                                        │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Make the window visible; the first show displays the first pane unanimated
    pub fn show_window(&mut self) -> Result<(), PrefsError> {
        self.setup_toolbar()?;

        if self.current.is_none() {
            let first = self
                .registry
                .first_pane()
                .map(|p| p.identifier.clone())
                .ok_or(PrefsError::NoPanes)?;
            self.display_view(&first, false)?;
        }

        if !self.window.is_placed() {
            if self.config.center_on_first_show {
                self.window.center();
            } else {
                let screen = self.window.screen();
                self.window.place_at(Position { x: screen.x, y: screen.y });
            }
        }

        self.window.set_visible(true);
        info!(event = "prefs.window.shown", pane = ?self.current, frame = ?self.window.frame());
        Ok(())
    }

    /// Hide the window, finalizing any running animation first
    pub fn close_window(&mut self) {
        self.finish_transition(TransitionOutcome::Snapped);
        self.window.set_visible(false);
        info!(event = "prefs.window.closed", pane = ?self.current);
    }

    pub fn is_visible(&self) -> bool {
        self.window.is_visible()
    }

    /// Report the current screen area (terminal size)
    pub fn set_screen(&mut self, screen: Rect) {
        self.window.set_screen(screen);
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                     Pane switching                                         │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Switch the window to the pane registered as `identifier`.
    ///
    /// A running animation towards another pane is snapped to its end state
    /// before the new request is handled. Re-selecting the displayed pane, or
    /// the pane being animated in, does nothing. Animated
    /// switches complete over later `tick()` calls; await or poll the returned
    /// handle to observe completion.
    pub fn display_view(&mut self, identifier: &str, animate: bool) -> Result<TransitionHandle, PrefsError> {
        self.setup_toolbar()?;
        let pane = self.registry.lookup(identifier)?.clone();

        // Already animating towards this pane: let it finish undisturbed
        if self.transition.as_ref().is_some_and(|t| t.to == identifier) {
            return Ok(TransitionHandle::ready(TransitionOutcome::Unchanged));
        }

        if self.transition.is_some() {
            debug!(event = "prefs.transition.superseded", next = identifier);
            self.finish_transition(TransitionOutcome::Snapped);
        }

        if self.current.as_deref() == Some(identifier) {
            return Ok(TransitionHandle::ready(TransitionOutcome::Unchanged));
        }

        let target = pane.view.fitting_size();
        let can_animate = self.current.is_some()
            && self.window.is_visible()
            && !self.config.transition_duration.is_zero();

        if !animate || !can_animate {
            self.switch_now(&pane, target);
            return Ok(TransitionHandle::ready(TransitionOutcome::Switched));
        }

        Ok(self.begin_transition(&pane, target))
    }

    /// Switch to the pane after the current one, wrapping around
    pub fn select_next(&mut self, animate: bool) -> Result<TransitionHandle, PrefsError> {
        self.select_relative(1, animate)
    }

    /// Switch to the pane before the current one, wrapping around
    pub fn select_previous(&mut self, animate: bool) -> Result<TransitionHandle, PrefsError> {
        self.select_relative(-1, animate)
    }

    /// Switch to the pane at `position` among the selectable panes
    pub fn select_position(&mut self, position: usize, animate: bool) -> Result<TransitionHandle, PrefsError> {
        self.setup_toolbar()?;
        let identifier = self
            .registry
            .pane_at(position)
            .map(|p| p.identifier.clone())
            .ok_or(PrefsError::PositionOutOfRange {
                position,
                count: self.registry.len(),
            })?;
        self.display_view(&identifier, animate)
    }

    fn select_relative(&mut self, step: isize, animate: bool) -> Result<TransitionHandle, PrefsError> {
        self.setup_toolbar()?;
        let count = self.registry.len();
        if count == 0 {
            return Err(PrefsError::NoPanes);
        }

        // Relative to where the window is heading, not where it is mid-animation
        let from = self
            .transition
            .as_ref()
            .map(|t| t.to.as_str())
            .or(self.current.as_deref())
            .and_then(|id| self.registry.position(id));

        let next = match from {
            Some(pos) => (pos as isize + step).rem_euclid(count as isize) as usize,
            None => 0,
        };
        self.select_position(next, animate)
    }

    fn switch_now(&mut self, pane: &Pane, target: Size) {
        debug!(
            event = "prefs.transition.switched",
            from = ?self.current,
            to = %pane.identifier,
            width = target.width,
            height = target.height
        );

        self.window.detach_all_except(&pane.identifier);
        self.window.resize_content(target);
        self.window.attach(&pane.identifier, Rc::clone(&pane.view), 1.0);
        self.commit(&pane.identifier);
    }

    fn begin_transition(&mut self, pane: &Pane, target: Size) -> TransitionHandle {
        let fade = self.cross_fade;
        let from = self.current.clone();

        if fade {
            self.window.attach(&pane.identifier, Rc::clone(&pane.view), 0.0);
        } else {
            self.window.detach_all_except(&pane.identifier);
            self.window.attach(&pane.identifier, Rc::clone(&pane.view), 1.0);
        }

        let (sender, handle) = TransitionHandle::pending();
        let transition = Transition::new(
            from,
            pane.identifier.clone(),
            fade,
            self.clock.now(),
            self.config.transition_duration,
            self.window.content_size(),
            target,
            sender,
        );

        debug!(
            event = "prefs.transition.started",
            from = ?transition.from,
            to = %transition.to,
            fade,
            duration_ms = transition.duration.as_millis() as u64
        );

        self.transition = Some(transition);
        handle
    }

    /// Advance a running animation. Returns true while one is still in flight.
    pub fn tick(&mut self) -> bool {
        let Some(transition) = self.transition.as_ref() else {
            return false;
        };

        let frame = transition.frame_at(self.clock.now());
        if frame.finished {
            self.finish_transition(TransitionOutcome::Completed);
            return false;
        }

        let (from, to, fade) = (transition.from.clone(), transition.to.clone(), transition.fade);
        self.window.resize_content(frame.content);
        if fade {
            if let Some(from) = from.as_deref() {
                self.window.set_opacity(from, frame.old_opacity);
            }
            self.window.set_opacity(&to, frame.new_opacity);
        }
        true
    }

    /// Jump a running animation to its end state and resolve its handle
    fn finish_transition(&mut self, outcome: TransitionOutcome) {
        let Some(mut transition) = self.transition.take() else {
            return;
        };

        self.window.resize_content(transition.target_size);
        self.window.detach_all_except(&transition.to);
        self.window.set_opacity(&transition.to, 1.0);
        self.commit(&transition.to);

        debug!(event = "prefs.transition.finished", to = %transition.to, outcome = ?outcome);
        transition.finish(outcome);
    }

    /// Record `identifier` as the displayed pane and sync toolbar and title
    fn commit(&mut self, identifier: &str) {
        self.current = Some(identifier.to_string());
        self.toolbar.select(identifier);
        if let Ok(pane) = self.registry.lookup(identifier) {
            self.window.set_title(pane.label.clone());
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                       Accessors                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn cross_fade(&self) -> bool {
        self.cross_fade
    }

    /// Enable or disable the cross-fade; running animations are unaffected
    pub fn set_cross_fade(&mut self, enabled: bool) {
        self.cross_fade = enabled;
    }

    pub fn current_identifier(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn window(&self) -> &PrefsWindow {
        &self.window
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Identifier of the toolbar item under a screen coordinate
    pub fn toolbar_item_at(&self, x: u16, y: u16) -> Option<String> {
        if !self.window.is_visible() {
            return None;
        }
        self.toolbar
            .item_at(self.window.visible_toolbar_area(), x, y)
            .map(str::to_string)
    }
}

/// Builder for [`PrefsWindowController`]
#[derive(Default)]
pub struct ControllerBuilder {
    config: Option<ControllerConfig>,
    clock: Option<Rc<dyn Clock>>,
    screen: Option<Rect>,
    setup: Option<SetupFn>,
}

impl ControllerBuilder {
    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Time source for animations (inject a `ManualClock` in tests)
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Rc::new(clock));
        self
    }

    pub fn screen(mut self, screen: Rect) -> Self {
        self.screen = Some(screen);
        self
    }

    pub fn setup<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ViewRegistry) -> Result<(), PrefsError> + 'static,
    {
        self.setup = Some(Box::new(setup));
        self
    }

    pub fn build(self) -> PrefsWindowController {
        let config = self.config.unwrap_or_default();
        let window = PrefsWindow::new(config.title.clone(), self.screen.unwrap_or(DEFAULT_SCREEN));

        PrefsWindowController {
            cross_fade: config.cross_fade,
            config,
            registry: ViewRegistry::new(),
            setup: self.setup,
            sealed: false,
            toolbar: Toolbar::default(),
            window,
            current: None,
            transition: None,
            clock: self.clock.unwrap_or_else(|| Rc::new(SystemClock)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::pane::test_support::FixedView;
    use std::time::Duration;

    const STEP: Duration = Duration::from_millis(50);

    fn config() -> ControllerConfig {
        ControllerConfig::default()
            .with_cross_fade(true)
            .with_transition_duration(Duration::from_millis(200))
    }

    /// Controller with panes A (300x200), B (300x400) and C (40x10), shown
    fn shown_controller() -> (PrefsWindowController, ManualClock) {
        let clock = ManualClock::new();
        let mut controller = PrefsWindowController::builder()
            .config(config())
            .clock(clock.clone())
            .setup(|registry| {
                registry.register(FixedView::shared(300, 200), "A", None)?;
                registry.register(FixedView::shared(300, 400), "B", None)?;
                registry.add_spacer();
                registry.register(FixedView::shared(40, 10), "C", None)?;
                Ok(())
            })
            .build();
        controller.show_window().unwrap();
        (controller, clock)
    }

    fn run_to_end(controller: &mut PrefsWindowController, clock: &ManualClock) {
        while controller.tick() {
            clock.advance(STEP);
        }
    }

    #[test]
    fn test_first_show_selects_first_pane_without_animation() {
        let (controller, _clock) = shown_controller();

        assert_eq!(controller.current_identifier(), Some("A"));
        assert!(!controller.is_animating());
        assert!(controller.is_visible());
        assert_eq!(controller.toolbar().selected(), Some("A"));
        assert_eq!(controller.window().title(), "A");
        assert_eq!(controller.window().opacity_of("A"), Some(1.0));
        assert_eq!(controller.window().content_size(), Size { width: 300, height: 200 });
    }

    #[test]
    fn test_show_window_without_panes() {
        let mut controller = PrefsWindowController::new(config());
        assert_eq!(controller.show_window().unwrap_err(), PrefsError::NoPanes);
        assert!(!controller.is_visible());
    }

    #[test]
    fn test_setup_failure_aborts_and_keeps_registry() {
        let mut controller = PrefsWindowController::builder()
            .config(config())
            .setup(|registry| {
                registry.register(FixedView::shared(10, 5), "A", None)?;
                registry.register(FixedView::shared(10, 5), "A", None)?;
                Ok(())
            })
            .build();

        assert_eq!(
            controller.setup_toolbar().unwrap_err(),
            PrefsError::DuplicateIdentifier("A".to_string())
        );
        assert!(controller.registry().is_empty());
    }

    #[test]
    fn test_registry_sealed_after_show() {
        let (mut controller, _clock) = shown_controller();
        let err = controller.register(FixedView::shared(5, 5), "D", None).unwrap_err();

        assert_eq!(err, PrefsError::RegistrySealed("D".to_string()));
        assert!(controller.add_spacer().is_err());
        assert_eq!(controller.registry().len(), 3);
    }

    #[test]
    fn test_unknown_identifier_leaves_state() {
        let (mut controller, _clock) = shown_controller();
        let err = controller.display_view("nonexistent", false).unwrap_err();

        assert_eq!(err, PrefsError::UnknownIdentifier("nonexistent".to_string()));
        assert_eq!(controller.current_identifier(), Some("A"));
        assert_eq!(controller.toolbar().selected(), Some("A"));
    }

    #[test]
    fn test_reselecting_current_pane_is_noop() {
        let (mut controller, _clock) = shown_controller();
        let frame = controller.window().frame();

        let mut handle = controller.display_view("A", true).unwrap();

        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Unchanged));
        assert!(!controller.is_animating());
        assert_eq!(controller.window().frame(), frame);
        assert_eq!(controller.window().subviews().len(), 1);
    }

    #[test]
    fn test_unanimated_switch_is_immediate() {
        let (mut controller, _clock) = shown_controller();
        let mut handle = controller.display_view("C", false).unwrap();

        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Switched));
        assert_eq!(controller.current_identifier(), Some("C"));
        assert_eq!(controller.toolbar().selected(), Some("C"));
        assert!(!controller.window().is_attached("A"));
        assert_eq!(controller.window().content_size(), Size { width: 40, height: 10 });
    }

    #[test]
    fn test_animated_switch_converges() {
        let (mut controller, clock) = shown_controller();
        let mut handle = controller.display_view("B", true).unwrap();

        // Nothing is committed until the animation finishes
        assert!(controller.is_animating());
        assert_eq!(controller.current_identifier(), Some("A"));
        assert_eq!(controller.toolbar().selected(), Some("A"));
        assert_eq!(controller.window().opacity_of("B"), Some(0.0));
        assert_eq!(handle.try_outcome(), None);

        clock.advance(Duration::from_millis(100));
        assert!(controller.tick());
        let old = controller.window().opacity_of("A").unwrap();
        let new = controller.window().opacity_of("B").unwrap();
        assert!(old > 0.0 && old < 1.0);
        assert!((old + new - 1.0).abs() < 1e-6);
        let height = controller.window().content_size().height;
        assert!(height > 200 && height < 400);

        run_to_end(&mut controller, &clock);

        assert_eq!(controller.current_identifier(), Some("B"));
        assert_eq!(controller.toolbar().selected(), Some("B"));
        assert!(!controller.is_animating());
        assert!(!controller.window().is_attached("A"));
        assert_eq!(controller.window().opacity_of("B"), Some(1.0));
        assert_eq!(controller.window().title(), "B");
        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Completed));
    }

    #[test]
    fn test_resize_keeps_top_left_anchor() {
        let (mut controller, clock) = shown_controller();
        let before = controller.window().frame();

        controller.display_view("B", true).unwrap();
        clock.advance(Duration::from_millis(60));
        controller.tick();
        assert_eq!(controller.window().anchor(), Position { x: before.x, y: before.y });

        run_to_end(&mut controller, &clock);
        let after = controller.window().frame();

        assert_eq!((after.x, after.y), (before.x, before.y));
        assert_eq!(after.width, before.width);
        assert_eq!(after.height, before.height + 200);
    }

    #[test]
    fn test_geometry_only_animation_without_cross_fade() {
        let (mut controller, clock) = shown_controller();
        controller.set_cross_fade(false);

        controller.display_view("B", true).unwrap();
        assert!(controller.is_animating());
        assert!(!controller.window().is_attached("A"));
        assert_eq!(controller.window().opacity_of("B"), Some(1.0));
        assert_eq!(controller.current_identifier(), Some("A"));

        run_to_end(&mut controller, &clock);
        assert_eq!(controller.current_identifier(), Some("B"));
        assert_eq!(controller.toolbar().selected(), Some("B"));
    }

    #[test]
    fn test_cross_fade_toggle_does_not_touch_running_animation() {
        let (mut controller, clock) = shown_controller();
        controller.display_view("B", true).unwrap();
        controller.set_cross_fade(false);

        clock.advance(Duration::from_millis(100));
        controller.tick();

        assert!(controller.window().is_attached("A"));
        let new = controller.window().opacity_of("B").unwrap();
        assert!(new > 0.0 && new < 1.0);
    }

    #[test]
    fn test_new_request_snaps_running_animation() {
        let (mut controller, clock) = shown_controller();
        let mut first = controller.display_view("B", true).unwrap();
        clock.advance(Duration::from_millis(50));
        controller.tick();

        let mut second = controller.display_view("C", true).unwrap();

        assert_eq!(first.try_outcome(), Some(TransitionOutcome::Snapped));
        assert_eq!(controller.current_identifier(), Some("B"));
        assert!(controller.is_animating());
        assert!(!controller.window().is_attached("A"));
        assert_eq!(controller.window().subviews().len(), 2);

        run_to_end(&mut controller, &clock);
        assert_eq!(second.try_outcome(), Some(TransitionOutcome::Completed));
        assert_eq!(controller.current_identifier(), Some("C"));
        assert_eq!(controller.window().subviews().len(), 1);
    }

    #[test]
    fn test_request_for_animation_target_keeps_animation_running() {
        let (mut controller, clock) = shown_controller();
        let mut first = controller.display_view("B", true).unwrap();
        clock.advance(Duration::from_millis(50));
        controller.tick();
        let opacity = controller.window().opacity_of("B");

        let mut again = controller.display_view("B", true).unwrap();

        assert_eq!(again.try_outcome(), Some(TransitionOutcome::Unchanged));
        assert_eq!(first.try_outcome(), None);
        assert!(controller.is_animating());
        assert_eq!(controller.current_identifier(), Some("A"));
        assert!(controller.window().is_attached("A"));
        assert_eq!(controller.window().opacity_of("B"), opacity);

        run_to_end(&mut controller, &clock);
        assert_eq!(first.try_outcome(), Some(TransitionOutcome::Completed));
        assert_eq!(controller.current_identifier(), Some("B"));
    }

    #[test]
    fn test_close_window_finalizes_animation() {
        let (mut controller, _clock) = shown_controller();
        let mut handle = controller.display_view("B", true).unwrap();

        controller.close_window();

        assert!(!controller.is_visible());
        assert!(!controller.is_animating());
        assert_eq!(controller.current_identifier(), Some("B"));
        assert_eq!(controller.window().opacity_of("B"), Some(1.0));
        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Snapped));
    }

    #[test]
    fn test_hidden_window_switches_synchronously() {
        let (mut controller, _clock) = shown_controller();
        controller.close_window();

        let mut handle = controller.display_view("C", true).unwrap();

        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Switched));
        assert!(!controller.is_animating());

        // Reopening keeps the pane and does not re-center
        let anchor = controller.window().anchor();
        controller.show_window().unwrap();
        assert_eq!(controller.current_identifier(), Some("C"));
        assert_eq!(controller.window().anchor(), anchor);
    }

    #[test]
    fn test_deep_link_before_first_show() {
        let mut controller = PrefsWindowController::builder().config(config()).build();
        controller.register(FixedView::shared(10, 4), "A", None).unwrap();
        controller.register(FixedView::shared(12, 6), "B", None).unwrap();

        let mut handle = controller.display_view("B", true).unwrap();
        controller.show_window().unwrap();

        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Switched));
        assert_eq!(controller.current_identifier(), Some("B"));
        assert_eq!(controller.toolbar().selected(), Some("B"));
    }

    #[test]
    fn test_select_next_and_previous_wrap() {
        let (mut controller, _clock) = shown_controller();

        controller.select_next(false).unwrap();
        assert_eq!(controller.current_identifier(), Some("B"));
        controller.select_next(false).unwrap();
        assert_eq!(controller.current_identifier(), Some("C"));
        controller.select_next(false).unwrap();
        assert_eq!(controller.current_identifier(), Some("A"));
        controller.select_previous(false).unwrap();
        assert_eq!(controller.current_identifier(), Some("C"));
        assert_eq!(
            controller.select_position(7, false).unwrap_err(),
            PrefsError::PositionOutOfRange { position: 7, count: 3 }
        );
    }

    #[test]
    fn test_select_next_runs_setup_before_first_show() {
        let mut controller = PrefsWindowController::builder()
            .config(config())
            .setup(|registry| {
                registry.register(FixedView::shared(10, 4), "A", None)?;
                registry.register(FixedView::shared(10, 4), "B", None)?;
                Ok(())
            })
            .build();

        let mut handle = controller.select_next(true).unwrap();

        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Switched));
        assert_eq!(controller.current_identifier(), Some("A"));
        assert_eq!(controller.registry().len(), 2);
    }

    #[test]
    fn test_toolbar_click_resolves_identifier() {
        let (controller, _clock) = shown_controller();
        let area = controller.window().toolbar_area();

        assert_eq!(controller.toolbar_item_at(area.x + 1, area.y), Some("A".to_string()));
        assert_eq!(controller.toolbar_item_at(area.x + 1, area.y + 1), None);
    }

    #[test]
    fn test_click_hits_visible_item_of_window_wider_than_screen() {
        let mut controller = PrefsWindowController::builder()
            .config(config())
            .screen(Rect { x: 0, y: 0, width: 40, height: 16 })
            .setup(|registry| {
                registry.register(FixedView::shared(60, 4), "Alpha", None)?;
                registry.add_spacer();
                registry.register(FixedView::shared(60, 4), "Beta", None)?;
                Ok(())
            })
            .build();
        controller.show_window().unwrap();
        let row = controller.window().toolbar_area().y;

        // " Beta " is pushed against the right edge of the screen
        assert_eq!(controller.toolbar_item_at(37, row), Some("Beta".to_string()));
        assert_eq!(controller.toolbar_item_at(2, row), Some("Alpha".to_string()));
        assert_eq!(controller.toolbar_item_at(50, row), None);
    }

    #[test]
    fn test_zero_duration_falls_back_to_sync_switch() {
        let mut controller = PrefsWindowController::builder()
            .config(config().with_transition_duration(Duration::ZERO))
            .setup(|registry| {
                registry.register(FixedView::shared(10, 4), "A", None)?;
                registry.register(FixedView::shared(10, 8), "B", None)?;
                Ok(())
            })
            .build();
        controller.show_window().unwrap();

        let mut handle = controller.display_view("B", true).unwrap();
        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Switched));
        assert!(!controller.is_animating());
    }

    #[tokio::test]
    async fn test_handle_awaits_animation_completion() {
        let (mut controller, clock) = shown_controller();
        let handle = controller.display_view("C", true).unwrap();

        run_to_end(&mut controller, &clock);

        assert_eq!(handle.await, TransitionOutcome::Completed);
    }

    #[test]
    fn test_dropping_controller_resolves_pending_handle() {
        let (mut controller, _clock) = shown_controller();
        let mut handle = controller.display_view("B", true).unwrap();
        drop(controller);

        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Dropped));
    }

    #[test]
    fn test_shared_returns_same_instance() {
        let a = PrefsWindowController::shared();
        let b = PrefsWindowController::shared();
        assert!(Rc::ptr_eq(&a, &b));
    }
}
