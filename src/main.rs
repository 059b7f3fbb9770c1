//! Car Racer entry point
//!
//! Handles platform-specific initialization and wires timers and input into
//! the game controller.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{Context, anyhow};
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use car_racer::renderer::{Palette, RenderState};
    use car_racer::view::{Frame, GAME_OVER_TEXT, RESTART_LABEL};
    use car_racer::{Controller, GameEvent, Settings, TimerCommand};

    /// Player preferences toggled from the HUD
    #[derive(Debug, Clone, Copy)]
    enum Preference {
        DemoMode,
        HighContrast,
        ShowTicks,
    }

    /// Game instance holding all state
    struct Game {
        controller: Controller,
        settings: Settings,
        render_state: Option<RenderState>,
        /// Handle of the running `setInterval`, if any
        interval_id: Option<i32>,
        /// Registered while mounted
        tick_callback: Option<Closure<dyn FnMut()>>,
        keydown_callback: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            let mut controller = Controller::new(seed);
            controller.set_demo_mode(settings.demo_mode);
            Self {
                controller,
                settings,
                render_state: None,
                interval_id: None,
                tick_callback: None,
                keydown_callback: None,
            }
        }

        /// Process queued events and carry out the resulting timer commands
        fn pump(&mut self) {
            for command in self.controller.process() {
                self.apply_timer(command);
            }
        }

        fn apply_timer(&mut self, command: TimerCommand) {
            match command {
                TimerCommand::Start { interval_ms } => {
                    self.clear_interval();
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    if let Some(callback) = &self.tick_callback {
                        match window.set_interval_with_callback_and_timeout_and_arguments_0(
                            callback.as_ref().unchecked_ref(),
                            interval_ms as i32,
                        ) {
                            Ok(id) => self.interval_id = Some(id),
                            Err(e) => log::error!("Failed to start tick timer: {:?}", e),
                        }
                    }
                }
                TimerCommand::Stop => self.clear_interval(),
            }
        }

        fn clear_interval(&mut self) {
            if let Some(id) = self.interval_id.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
            }
        }

        fn toggle_preference(&mut self, preference: Preference) {
            match preference {
                Preference::DemoMode => {
                    self.settings.toggle_demo_mode();
                    self.controller.set_demo_mode(self.settings.demo_mode);
                }
                Preference::HighContrast => {
                    self.settings.toggle_high_contrast();
                    log::info!("High contrast: {}", self.settings.high_contrast);
                }
                Preference::ShowTicks => self.settings.toggle_show_ticks(),
            }
            self.settings.save();
        }

        /// Render the current frame
        fn render(&mut self, frame: &Frame) {
            let palette = Palette::for_settings(&self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(frame, &palette) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, frame: &Frame) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&frame.score_text));
            }

            set_visible(&document, "game-over", frame.game_over);

            set_visible(&document, "ticks", self.settings.show_ticks);
            if self.settings.show_ticks {
                if let Some(el) = document.get_element_by_id("ticks") {
                    el.set_text_content(Some(&format!("Ticks: {}", frame.ticks)));
                }
            }

            set_visible(&document, "demo-badge", self.controller.demo_mode());
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    pub async fn run() -> anyhow::Result<()> {
        log::info!("Car Racer starting...");

        let window = web_sys::window().context("no window")?;
        let document = window.document().context("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .context("no #canvas element")?
            .dyn_into()
            .map_err(|_| anyhow!("#canvas is not a canvas element"))?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, Settings::load())));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| anyhow!("failed to create surface: {e}"))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("failed to get adapter: {e}"))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;
        game.borrow_mut().render_state = Some(render_state);

        // Static overlay text
        if let Some(el) = document.get_element_by_id("game-over-text") {
            el.set_text_content(Some(GAME_OVER_TEXT));
        }
        setup_restart_button(&document, game.clone())?;
        setup_preference_buttons(&document, &game)?;
        setup_lifecycle(&window, game.clone())?;

        mount(&game)?;

        // Start render loop
        request_animation_frame(game);

        log::info!("Car Racer running!");
        Ok(())
    }

    /// Register the keyboard listener and start the tick timer
    fn mount(game: &Rc<RefCell<Game>>) -> anyhow::Result<()> {
        let window = web_sys::window().context("no window")?;
        let mut g = game.borrow_mut();
        if g.controller.is_mounted() {
            return Ok(());
        }

        // Tick timer callback
        {
            let weak = Rc::downgrade(game);
            let closure = Closure::<dyn FnMut()>::new(move || {
                if let Some(game) = weak.upgrade() {
                    let mut g = game.borrow_mut();
                    g.controller.push(GameEvent::Tick);
                    g.pump();
                }
            });
            g.tick_callback = Some(closure);
        }

        // Keyboard
        {
            let weak = Rc::downgrade(game);
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                // Anything but the arrows is left to the browser
                let Some(game_event) = GameEvent::from_key(&event.key()) else {
                    return;
                };
                let Some(game) = weak.upgrade() else {
                    return;
                };
                // Keep arrow keys from scrolling the page
                event.prevent_default();
                let mut g = game.borrow_mut();
                g.controller.push(game_event);
                g.pump();
            });
            window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(|e| anyhow!("failed to add keydown listener: {:?}", e))?;
            g.keydown_callback = Some(closure);
        }

        if let Some(command) = g.controller.mount() {
            g.apply_timer(command);
        }
        Ok(())
    }

    /// Remove the keyboard listener and stop the tick timer
    fn unmount(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();
        if let Some(command) = g.controller.unmount() {
            g.apply_timer(command);
        }
        g.clear_interval();

        if let Some(callback) = g.keydown_callback.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
        g.tick_callback = None;
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) -> anyhow::Result<()> {
        let btn = document
            .get_element_by_id("restart-btn")
            .context("no #restart-btn element")?;
        btn.set_text_content(Some(RESTART_LABEL));

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut g = game.borrow_mut();
            g.controller.push(GameEvent::Restart);
            g.pump();
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("failed to add restart listener: {:?}", e))?;
        closure.forget();
        Ok(())
    }

    fn setup_preference_buttons(document: &Document, game: &Rc<RefCell<Game>>) -> anyhow::Result<()> {
        let buttons = [
            ("demo-btn", Preference::DemoMode),
            ("contrast-btn", Preference::HighContrast),
            ("ticks-btn", Preference::ShowTicks),
        ];
        for (id, preference) in buttons {
            let btn = document
                .get_element_by_id(id)
                .with_context(|| format!("no #{id} element"))?;
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().toggle_preference(preference);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(|e| anyhow!("failed to add #{id} listener: {:?}", e))?;
            closure.forget();
        }
        Ok(())
    }

    /// Tear down on `pagehide`, mount again if the page comes back from cache
    fn setup_lifecycle(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> anyhow::Result<()> {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                unmount(&game);
            });
            window
                .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())
                .map_err(|e| anyhow!("failed to add pagehide listener: {:?}", e))?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if let Err(e) = mount(&game) {
                    log::error!("Failed to remount: {:#}", e);
                }
            });
            window
                .add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref())
                .map_err(|e| anyhow!("failed to add pageshow listener: {:?}", e))?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let frame = Frame::from_state(g.controller.state());
            g.render(&frame);
            g.update_hud(&frame);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    if let Err(e) = wasm_game::run().await {
        log::error!("Car Racer failed to start: {:#}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use clap::Parser;

    use car_racer::headless;

    /// Run a headless Car Racer session
    #[derive(Parser, Debug)]
    #[command(name = "car-racer", version, about)]
    pub struct Args {
        /// RNG seed (defaults to the current time)
        pub seed: Option<u64>,

        /// Maximum number of ticks to simulate
        #[arg(default_value_t = 12_000)]
        pub max_ticks: u64,

        /// Hold still instead of letting the autopilot steer
        #[arg(long)]
        pub no_autopilot: bool,
    }

    fn clock_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    pub fn main() {
        env_logger::init();
        let args = Args::parse();
        let seed = args.seed.unwrap_or_else(clock_seed);

        log::info!("Car Racer (native) starting with seed {}", seed);
        log::info!("Native mode runs headless - use `trunk serve` for the web version");

        let summary = headless::run(seed, args.max_ticks, !args.no_autopilot);

        println!("seed:    {}", summary.seed);
        println!("ticks:   {}", summary.ticks);
        println!("score:   {}", summary.score);
        println!(
            "result:  {}",
            if summary.crashed { "crashed" } else { "survived" }
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
