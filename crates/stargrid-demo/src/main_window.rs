//! The demo's single window: message dispatch, layout state and painting.

use std::convert::Infallible;

use stargrid_engine::coords::Viewport;
use stargrid_engine::core::{App, AppControl, FrameCtx, WindowCtx, WindowLifecycle};
use stargrid_engine::device::Lifecycle;
use stargrid_engine::input::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};
use stargrid_engine::paint::Stroke;
use stargrid_engine::render::shapes::ellipse::EllipseRenderer;
use stargrid_engine::render::shapes::line::LineRenderer;
use stargrid_engine::scene::{DrawList, ZIndex};

use crate::config::DemoConfig;
use crate::layout::{compute_grid, Grid};
use crate::notify::{report_pointer_event, Notifier};
use crate::star::push_star;

/// The six reported pointer events.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerEventKind {
    LeftButtonDown,
    LeftButtonUp,
    LeftButtonDoubleClicked,
    RightButtonDown,
    RightButtonUp,
    RightButtonDoubleClicked,
}

impl PointerEventKind {
    /// Handler name shown in reports.
    pub fn name(self) -> &'static str {
        match self {
            PointerEventKind::LeftButtonDown => "OnLeftButtonDown",
            PointerEventKind::LeftButtonUp => "OnLeftButtonUp",
            PointerEventKind::LeftButtonDoubleClicked => "OnLeftButtonDoubleClicked",
            PointerEventKind::RightButtonDown => "OnRightButtonDown",
            PointerEventKind::RightButtonUp => "OnRightButtonUp",
            PointerEventKind::RightButtonDoubleClicked => "OnRightButtonDoubleClicked",
        }
    }

    /// `None` for buttons other than left and right.
    pub fn from_event(ev: &PointerButtonEvent) -> Option<Self> {
        use PointerEventKind::*;

        let kind = match (ev.button, ev.state, ev.is_double_click()) {
            (MouseButton::Left, MouseButtonState::Pressed, true) => LeftButtonDoubleClicked,
            (MouseButton::Left, MouseButtonState::Pressed, false) => LeftButtonDown,
            (MouseButton::Left, MouseButtonState::Released, _) => LeftButtonUp,
            (MouseButton::Right, MouseButtonState::Pressed, true) => RightButtonDoubleClicked,
            (MouseButton::Right, MouseButtonState::Pressed, false) => RightButtonDown,
            (MouseButton::Right, MouseButtonState::Released, _) => RightButtonUp,
            _ => return None,
        };
        Some(kind)
    }
}

/// A pointer event with its client-area pixel position.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PointerAction {
    pub kind: PointerEventKind,
    pub x: i32,
    pub y: i32,
}

impl PointerAction {
    pub fn from_event(ev: &PointerButtonEvent) -> Option<Self> {
        let kind = PointerEventKind::from_event(ev)?;
        let (x, y) = ev.pixel;
        Some(Self { kind, x, y })
    }
}

/// Messages the window reacts to; each has one handler on [`MainWindow`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Message {
    Create,
    Destroy,
    /// `None` when no drawing surface exists yet.
    Resize(Option<Viewport>),
    SurfaceCreated(Viewport),
    SurfaceDiscarded,
    Pointer(PointerAction),
}

impl Message {
    fn from_lifecycle(ev: &WindowLifecycle) -> Self {
        match *ev {
            WindowLifecycle::Created => Message::Create,
            WindowLifecycle::Resized(vp) => Message::Resize(vp),
            WindowLifecycle::SurfaceCreated(vp) => Message::SurfaceCreated(vp),
            WindowLifecycle::SurfaceDiscarded => Message::SurfaceDiscarded,
            WindowLifecycle::Destroyed => Message::Destroy,
        }
    }
}

/// Device-dependent drawing resources, released together with the surface.
struct Brush {
    stroke: Stroke,
    ellipses: EllipseRenderer,
    lines: LineRenderer,
}

impl Brush {
    fn new(stroke: Stroke) -> Self {
        Self {
            stroke,
            ellipses: EllipseRenderer::new(),
            lines: LineRenderer::new(),
        }
    }
}

pub struct MainWindow<N: Notifier> {
    config: DemoConfig,
    grid: Option<Grid>,
    brush: Lifecycle<Brush>,
    notifier: N,
    draw_list: DrawList,
}

impl<N: Notifier> MainWindow<N> {
    pub fn new(config: DemoConfig, notifier: N) -> Self {
        Self {
            config,
            grid: None,
            brush: Lifecycle::new(),
            notifier,
            draw_list: DrawList::new(),
        }
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::Create => self.on_create(),
            Message::Destroy => self.on_destroy(),
            Message::Resize(viewport) => self.on_resize(viewport),
            Message::SurfaceCreated(viewport) => self.on_surface_created(viewport),
            Message::SurfaceDiscarded => self.on_surface_discarded(),
            Message::Pointer(action) => self.on_pointer(action),
        }
    }

    fn on_create(&mut self) {
        log::info!(
            "window created: {}x{} grid",
            self.config.grid.rows(),
            self.config.grid.cols()
        );
    }

    fn on_destroy(&mut self) {
        self.brush.teardown();
        self.grid = None;
        log::info!("window destroyed");
    }

    fn on_resize(&mut self, viewport: Option<Viewport>) {
        match viewport {
            Some(vp) => self.relayout(vp),
            None => log::warn!("resize before a drawing surface exists; layout unchanged"),
        }
    }

    fn on_surface_created(&mut self, viewport: Viewport) {
        self.relayout(viewport);
    }

    fn on_surface_discarded(&mut self) {
        if self.brush.invalidate() {
            log::info!("brush released with the surface");
        }
    }

    fn on_pointer(&mut self, action: PointerAction) {
        report_pointer_event(&mut self.notifier, action.kind.name(), action.x, action.y);
    }

    fn relayout(&mut self, viewport: Viewport) {
        let grid = compute_grid(viewport, self.config.grid);
        log::debug!(
            "layout {}x{}: {} ellipses",
            grid.viewport().width,
            grid.viewport().height,
            grid.len()
        );
        self.grid = Some(grid);
    }

    /// Records the current grid and its stars into `list`, outlined with `stroke`.
    pub fn paint(&self, stroke: Stroke, list: &mut DrawList) {
        list.clear();

        let Some(grid) = &self.grid else {
            return;
        };
        for ellipse in grid.ellipses() {
            list.push_ellipse(ZIndex::BACKGROUND, *ellipse, stroke);
            push_star(list, ellipse, stroke, self.config.star);
        }
    }
}

impl<N: Notifier> App for MainWindow<N> {
    fn on_lifecycle(&mut self, _window: &WindowCtx<'_>, event: &WindowLifecycle) -> AppControl {
        self.handle(Message::from_lifecycle(event));
        AppControl::Continue
    }

    fn on_input(&mut self, _window: &WindowCtx<'_>, event: &InputEvent) -> AppControl {
        let InputEvent::PointerButton(ev) = event else {
            return AppControl::Continue;
        };
        if let Some(action) = PointerAction::from_event(ev) {
            self.handle(Message::Pointer(action));
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let config_stroke = self.config.stroke;
        let stroke = match self.brush.acquire(|| Ok::<_, Infallible>(Brush::new(config_stroke))) {
            Ok(acquired) => {
                if acquired.was_created() {
                    log::debug!("brush created");
                }
                acquired.into_inner().stroke
            }
            Err(never) => match never {},
        };

        let mut list = std::mem::take(&mut self.draw_list);
        self.paint(stroke, &mut list);

        let clear = self.config.clear_color;
        let Some(brush) = self.brush.get_mut() else {
            self.draw_list = list;
            return AppControl::Continue;
        };
        let control = ctx.render(clear, |rctx, target| {
            brush.ellipses.render(rctx, target, &mut list);
            brush.lines.render(rctx, target, &mut list);
        });

        self.draw_list = list;
        control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stargrid_engine::device::Phase;
    use stargrid_engine::paint::Color;
    use stargrid_engine::scene::DrawCmd;

    use crate::layout::GridShape;
    use crate::star::StarStyle;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Notifier for Recorder {
        fn notify(&mut self, _title: &str, body: &str) {
            self.0.push(body.to_string());
        }
    }

    fn window() -> MainWindow<Recorder> {
        MainWindow::new(DemoConfig::default(), Recorder::default())
    }

    fn counts(list: &DrawList) -> (usize, usize) {
        let ellipses = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Ellipse(_))).count();
        let lines = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Line(_))).count();
        (ellipses, lines)
    }

    fn button(button: MouseButton, state: MouseButtonState, click_count: u8) -> PointerButtonEvent {
        PointerButtonEvent {
            button,
            state,
            x: 5.0,
            y: 10.0,
            pixel: (10, 20),
            click_count,
        }
    }

    // ── layout messages ───────────────────────────────────────────────────

    #[test]
    fn surface_creation_builds_grid() {
        let mut w = window();
        w.handle(Message::Create);
        assert!(w.grid.is_none());

        w.handle(Message::SurfaceCreated(Viewport::new(1000.0, 500.0)));
        let grid = w.grid.as_ref().unwrap();
        assert_eq!(grid.len(), 50);
        assert_eq!(grid.ellipses()[0].radius_x, 50.0);
    }

    #[test]
    fn resize_replaces_grid() {
        let mut w = window();
        w.handle(Message::SurfaceCreated(Viewport::new(1000.0, 500.0)));
        w.handle(Message::Resize(Some(Viewport::new(800.0, 400.0))));

        let grid = w.grid.as_ref().unwrap();
        assert_eq!(grid.viewport(), Viewport::new(800.0, 400.0));
        assert!(grid.ellipses().iter().all(|e| e.radius_x == 40.0 && e.radius_y == 40.0));
    }

    #[test]
    fn resize_without_surface_keeps_layout() {
        let mut w = window();
        w.handle(Message::Resize(None));
        assert!(w.grid.is_none());

        w.handle(Message::SurfaceCreated(Viewport::new(1000.0, 500.0)));
        let before = w.grid.clone();
        w.handle(Message::Resize(None));
        assert_eq!(w.grid.clone(), before);
    }

    // ── resources ─────────────────────────────────────────────────────────

    #[test]
    fn brush_follows_surface_lifecycle() {
        let mut w = window();
        let stroke = w.config.stroke;
        w.brush.acquire(|| Ok::<_, Infallible>(Brush::new(stroke))).unwrap();
        assert_eq!(w.brush.phase(), Phase::Ready);

        w.handle(Message::SurfaceDiscarded);
        assert_eq!(w.brush.phase(), Phase::Invalid);

        w.brush.acquire(|| Ok::<_, Infallible>(Brush::new(stroke))).unwrap();
        w.handle(Message::SurfaceCreated(Viewport::new(300.0, 200.0)));
        w.handle(Message::Destroy);
        assert_eq!(w.brush.phase(), Phase::Uninitialized);
        assert!(w.grid.is_none());
    }

    // ── painting ──────────────────────────────────────────────────────────

    #[test]
    fn paint_records_outlines_stars_and_markers() {
        let mut w = window();
        w.handle(Message::SurfaceCreated(Viewport::new(1000.0, 500.0)));

        let mut list = DrawList::new();
        w.paint(w.config.stroke, &mut list);
        assert_eq!(counts(&list), (50 + 250, 250));

        let background = list.items().iter().filter(|i| i.key.z == ZIndex::BACKGROUND).count();
        assert_eq!(background, 50);
    }

    #[test]
    fn paint_without_markers() {
        let mut config = DemoConfig::default();
        config.star = StarStyle { marker_radius: None };
        config.grid = GridShape::DEFAULT;
        let mut w = MainWindow::new(config, Recorder::default());
        w.handle(Message::SurfaceCreated(Viewport::new(1000.0, 500.0)));

        let mut list = DrawList::new();
        w.paint(w.config.stroke, &mut list);
        assert_eq!(counts(&list), (50, 250));
    }

    #[test]
    fn paint_outlines_with_given_stroke() {
        let mut w = window();
        w.handle(Message::SurfaceCreated(Viewport::new(1000.0, 500.0)));

        let stroke = Stroke::new(3.0, Color::sky_blue());
        let mut list = DrawList::new();
        w.paint(stroke, &mut list);
        assert!(!list.is_empty());
        assert!(list.items().iter().all(|i| match &i.cmd {
            DrawCmd::Ellipse(cmd) => cmd.stroke == stroke,
            DrawCmd::Line(cmd) => cmd.stroke == stroke,
        }));
    }

    #[test]
    fn paint_before_layout_is_empty() {
        let w = window();
        let mut list = DrawList::new();
        w.paint(w.config.stroke, &mut list);
        assert!(list.is_empty());
    }

    // ── pointer events ────────────────────────────────────────────────────

    #[test]
    fn pointer_kinds_cover_both_buttons() {
        use MouseButtonState::{Pressed, Released};

        let kind = |b, s, n| PointerEventKind::from_event(&button(b, s, n));
        assert_eq!(kind(MouseButton::Left, Pressed, 1), Some(PointerEventKind::LeftButtonDown));
        assert_eq!(kind(MouseButton::Left, Released, 1), Some(PointerEventKind::LeftButtonUp));
        assert_eq!(
            kind(MouseButton::Left, Pressed, 2),
            Some(PointerEventKind::LeftButtonDoubleClicked)
        );
        assert_eq!(kind(MouseButton::Right, Pressed, 1), Some(PointerEventKind::RightButtonDown));
        assert_eq!(kind(MouseButton::Right, Released, 1), Some(PointerEventKind::RightButtonUp));
        assert_eq!(
            kind(MouseButton::Right, Pressed, 2),
            Some(PointerEventKind::RightButtonDoubleClicked)
        );
        assert_eq!(kind(MouseButton::Middle, Pressed, 1), None);
    }

    #[test]
    fn pointer_message_reports_pixel_position() {
        let mut w = window();
        let press = button(MouseButton::Left, MouseButtonState::Pressed, 1);
        w.handle(Message::Pointer(PointerAction::from_event(&press).unwrap()));

        let double = button(MouseButton::Right, MouseButtonState::Pressed, 2);
        w.handle(Message::Pointer(PointerAction::from_event(&double).unwrap()));

        assert_eq!(
            w.notifier.0,
            vec![
                "Event OnLeftButtonDown is fired, pos is (10, 20).".to_string(),
                "Event OnRightButtonDoubleClicked is fired, pos is (10, 20).".to_string(),
            ]
        );
    }
}
