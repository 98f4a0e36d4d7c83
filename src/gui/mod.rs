mod chrome;
mod input;
mod lifecycle;
mod render;
mod state;
mod text;

use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::Context as _;
use softbuffer::{Context, Surface};
use tracing::{debug, error, info, trace};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

use crate::config::{AppConfig, load_font};
use crate::core::{TabBar, TabEvent};

use self::chrome::ChromeLayout;
use self::render::Painter;
use self::state::{App, DemoWindow};
use self::text::TextRenderer;

const DEFAULT_WINDOW_SIZE: (f64, f64) = (900.0, 560.0);

impl DemoWindow {
    fn new(
        window: Arc<Window>,
        context: &Context<winit::event_loop::OwnedDisplayHandle>,
        config: &AppConfig,
    ) -> anyhow::Result<Self> {
        let surface = Surface::new(context, window.clone())
            .map_err(|err| anyhow::anyhow!("softbuffer surface: {err}"))?;

        let mut bar = TabBar::new(config.tab_bar_config());
        bar.subscribe(|event: &TabEvent| debug!(?event, "tab event"));

        let mut win = DemoWindow {
            window,
            surface,
            bar,
            palette: config.theme.resolve(),
            text: load_font(&config.font)
                .map(|font| TextRenderer::new(font, config.font.pixel_size())),
            sidebar_width: config.layout.sidebar_width,
            sidebar_visible: true,
            scroll_x: 0.0,
            activation_threshold: config.reorder.activation_threshold,
            modifiers: ModifiersState::empty(),
            mouse_pos: (0.0, 0.0),
            pointer: None,
            window_title: String::new(),
        };
        win.sync_strip_width();
        win.refresh_title();
        Ok(win)
    }

    fn scale(&self) -> f32 {
        self.window.scale_factor() as f32
    }

    /// Window chrome for the current inner size, in logical pixels.
    fn chrome(&self) -> ChromeLayout {
        let size = self.window.inner_size();
        let scale = self.scale();
        ChromeLayout::compute(
            &self.bar.config().metrics,
            size.width as f32 / scale,
            size.height as f32 / scale,
            self.sidebar_width,
            self.sidebar_visible,
        )
        .scrolled(self.scroll_x)
    }

    fn sync_strip_width(&mut self) {
        let width = self.chrome().strip_width();
        self.bar.resize(Some(width));
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let strip_width = self.chrome().strip_width();
        let content_width = self.bar.snapshot().content_width;
        self.scroll_x = chrome::clamp_scroll(self.scroll_x, content_width, strip_width);
    }

    /// Scrolls the strip by `delta` logical pixels. Returns whether the offset changed.
    fn scroll_by(&mut self, delta: f32) -> bool {
        // Slot positions are pinned to the pointer while a tab is dragged.
        if self.bar.engine().is_dragging() {
            return false;
        }
        let before = self.scroll_x;
        self.scroll_x += delta;
        self.clamp_scroll();
        if self.scroll_x != before {
            trace!(scroll = self.scroll_x, "strip scrolled");
        }
        self.scroll_x != before
    }

    /// Brings the selected tab fully into view.
    fn reveal_selected(&mut self) {
        let snapshot = self.bar.snapshot();
        let Some(frame) = snapshot
            .selected
            .and_then(|id| snapshot.frame(id))
            .map(|tab| tab.frame)
        else {
            return;
        };
        let strip_width = self.chrome().strip_width();
        self.scroll_x = chrome::reveal(self.scroll_x, frame, strip_width);
        self.clamp_scroll();
    }

    fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
        debug!(visible = self.sidebar_visible, "sidebar toggled");
        self.sync_strip_width();
    }

    /// Applies delivered tab events to window state (title, pointer, scroll).
    fn after_bar_update(&mut self) {
        // A close under the pointer discards the engine's session.
        if self.pointer.is_some_and(|p| p.active) && !self.bar.engine().is_dragging() {
            self.pointer = None;
            self.window.set_cursor(winit::window::CursorIcon::Default);
        }
        let events = self.bar.drain_events();
        if events.iter().any(|event| {
            matches!(
                event,
                TabEvent::SelectionChanged { .. } | TabEvent::TabClosed { .. }
            )
        }) {
            self.refresh_title();
        }
        if !events.is_empty() {
            self.clamp_scroll();
        }
        let moved = events.iter().any(|event| {
            matches!(
                event,
                TabEvent::SelectionChanged { .. } | TabEvent::OrderChanged { .. }
            )
        });
        // A tab under the pointer stays put so an armed drag starts where it was pressed.
        if moved && self.pointer.is_none() {
            self.reveal_selected();
        }
    }

    fn refresh_title(&mut self) {
        let tabs = self.bar.tabs();
        let selected = tabs
            .selected_index()
            .and_then(|index| tabs.get(index))
            .map(|tab| tab.title.as_str());
        let title = chrome::window_title(selected);
        if title != self.window_title {
            self.window.set_title(&title);
            self.window_title = title;
        }
    }

    fn on_redraw_requested(&mut self) {
        let size = self.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        if let Err(err) = self.surface.resize(w, h) {
            error!(%err, "surface resize failed");
            return;
        }

        let chrome = self.chrome();
        let snapshot = self.bar.snapshot();
        let scale = self.scale();
        let palette = self.palette;
        let mut buffer = match self.surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(err) => {
                error!(%err, "failed to map frame buffer");
                return;
            }
        };
        let mut painter = Painter::new(&mut buffer, w.get() as usize, h.get() as usize, scale);
        render::paint_frame(
            &mut painter,
            &chrome,
            &snapshot,
            &palette,
            self.text.as_mut(),
        );
        if let Err(err) = buffer.present() {
            error!(%err, "failed to present frame");
        }
    }
}

impl App {
    fn new(config: AppConfig) -> Self {
        App {
            config,
            context: None,
            window: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let context = self
            .context
            .as_ref()
            .context("rendering context not initialised")?;
        let (w, h) = DEFAULT_WINDOW_SIZE;
        let attrs = Window::default_attributes()
            .with_title("tabstrip")
            .with_inner_size(winit::dpi::LogicalSize::new(w, h));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let win = DemoWindow::new(window, context, &self.config)?;
        win.window.request_redraw();
        self.window = Some(win);
        Ok(())
    }
}

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(config);
    info!("starting tab strip demo");
    event_loop
        .run_app(&mut app)
        .context("event loop terminated with an error")
}
