//! App struct: frame pass, input routing, event loop.
//!
//! [`App`] owns the root element, the compiled stylesheet, the event router
//! and the terminal driver. Each frame renders the whole tree into a fresh
//! buffer, hands the new registry to the router and writes only the changed
//! cells. The `new_headless` constructor allows testing without a terminal.

use std::io;
use std::time::Duration;

use crossterm::event::EventStream;
use futures::StreamExt;
use tracing::{debug, info};

use crate::css::CompiledStylesheet;
use crate::element::{Element, RenderContext};
use crate::error::{Result, ToolkitError};
use crate::event::{EventResult, EventRouter, InputEvent};
use crate::render::{Buffer, Driver, Frame};

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Terminal title set when [`App::run`] starts.
    pub title: Option<String>,
    /// User stylesheet.
    pub css: Option<String>,
    /// Lowest-priority stylesheet; any user rule beats it.
    pub default_css: Option<String>,
    /// Target frames per second for the render loop.
    pub fps: u32,
    /// Capture mouse events in [`App::run`].
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: None,
            css: None,
            default_css: None,
            fps: 60,
            mouse: true,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    pub fn with_default_css(mut self, css: impl Into<String>) -> Self {
        self.default_css = Some(css.into());
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Compile `default_css` and `css` into one cascade.
    pub fn stylesheet(&self) -> Result<CompiledStylesheet> {
        let sheet = CompiledStylesheet::with_defaults(
            self.default_css.as_deref().unwrap_or_default(),
            self.css.as_deref().unwrap_or_default(),
        )?;
        Ok(sheet)
    }

    fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The main application struct.
///
/// The driver is optional to support headless testing.
pub struct App {
    root: Box<dyn Element>,
    stylesheet: CompiledStylesheet,
    router: EventRouter,
    buffer: Buffer,
    previous: Buffer,
    driver: Option<Driver>,
    pub config: AppConfig,
    running: bool,
    width: u16,
    height: u16,
}

impl App {
    /// Create an app sized to the current terminal.
    pub fn new(root: impl Element + 'static, config: AppConfig) -> Result<Self> {
        let (width, height) = Driver::terminal_size()?;
        let mut app = Self::new_headless(root, config, width, height)?;
        app.driver = Some(Driver::new()?);
        Ok(app)
    }

    /// Create an app without a terminal driver.
    pub fn new_headless(
        root: impl Element + 'static,
        config: AppConfig,
        width: u16,
        height: u16,
    ) -> Result<Self> {
        let stylesheet = config.stylesheet()?;
        Ok(Self {
            root: Box::new(root),
            stylesheet,
            router: EventRouter::new(),
            buffer: Buffer::new(width, height),
            previous: Buffer::new(width, height),
            driver: None,
            config,
            running: true,
            width,
            height,
        })
    }

    // ── Frame pass ──────────────────────────────────────────────────

    /// Render one frame and refresh the router's registry.
    pub fn render(&mut self) -> Result<()> {
        let mut frame = Frame::new(self.width, self.height);
        let area = frame.area();
        let mut ctx =
            RenderContext::with_engine(&self.stylesheet).with_focus(self.router.focused().cloned());
        self.root.render(&mut frame, area, &mut ctx)?;
        ctx.register_root(&*self.root, area);
        let registry = ctx.into_registry();

        self.router.update(registry);
        self.previous = std::mem::replace(&mut self.buffer, frame.into_buffer());
        Ok(())
    }

    /// The most recently rendered frame.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    // ── Input ───────────────────────────────────────────────────────

    /// Apply one input event.
    ///
    /// Ctrl+C quits. Keys and mouse events go through the router against the
    /// registry of the last rendered frame.
    pub fn handle_input(&mut self, event: InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) if key.is_ctrl('c') => {
                self.request_quit();
                EventResult::Handled
            }
            InputEvent::Key(key) => self.router.route_key(&mut *self.root, &key),
            InputEvent::Mouse(mouse) => self.router.route_mouse(&mut *self.root, &mouse),
            InputEvent::Resize { width, height } => {
                debug!(width, height, "terminal resized");
                self.width = width;
                self.height = height;
                EventResult::Handled
            }
            InputEvent::FocusGained | InputEvent::FocusLost | InputEvent::Paste(_) => {
                EventResult::Unhandled
            }
        }
    }

    pub fn router(&self) -> &EventRouter {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut EventRouter {
        &mut self.router
    }

    /// Id of the focused element, if it has one.
    pub fn focused_id(&self) -> Option<String> {
        self.router.focused_element().and_then(|e| e.id.clone())
    }

    /// Whether the app should quit.
    pub fn should_quit(&self) -> bool {
        !self.running
    }

    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Whether the app has a terminal driver (not headless).
    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    // ── Event loop ──────────────────────────────────────────────────

    /// Run until quit, drawing to the terminal.
    ///
    /// Elements are `!Send`, so drive this on a current-thread runtime.
    pub async fn run(&mut self) -> Result<()> {
        let mut driver = self
            .driver
            .take()
            .ok_or_else(|| ToolkitError::InvalidArgument("app has no terminal driver".into()))?;

        let result = match self.start_terminal(&mut driver) {
            Ok(()) => {
                info!(width = self.width, height = self.height, fps = self.config.fps, "app started");
                self.event_loop(&mut driver).await
            }
            Err(err) => Err(err.into()),
        };

        let restored = driver.restore();
        self.driver = Some(driver);
        info!("app stopped");
        // A teardown failure only surfaces when the loop itself succeeded.
        result.and(restored.map_err(ToolkitError::from))
    }

    fn start_terminal(&self, driver: &mut Driver) -> io::Result<()> {
        driver.enter_alt_screen()?;
        if let Some(title) = &self.config.title {
            driver.set_title(title)?;
        }
        driver.hide_cursor()?;
        if self.config.mouse {
            driver.enable_mouse()?;
        }
        Ok(())
    }

    async fn event_loop(&mut self, driver: &mut Driver) -> Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(self.config.frame_interval());

        driver.clear()?;
        self.previous = Buffer::new(0, 0);
        self.draw(driver)?;

        while self.running {
            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => {
                        let event = InputEvent::from(event);
                        if let InputEvent::Resize { .. } = event {
                            driver.clear()?;
                            self.buffer = Buffer::new(0, 0);
                        }
                        self.handle_input(event);
                    }
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
                _ = ticker.tick() => self.draw(driver)?,
            }
        }
        Ok(())
    }

    fn draw(&mut self, driver: &mut Driver) -> Result<()> {
        self.render()?;
        let updates = self.buffer.diff(&self.previous);
        if !updates.is_empty() {
            driver.apply_updates(&updates)?;
            driver.flush()?;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
