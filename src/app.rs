use crate::audio::CuePlayer;
use crate::frame::{self, RafScheduler, SessionClock};
use crate::render::CanvasRenderer;
use crate::sim::{BurnConfig, BurnSimulator, CueBuffer, FrameView, Prompt};
use crate::{dom, events, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct ViewState {
    pub document: web::Document,
    pub renderer: CanvasRenderer,
    pub prompt: Option<Prompt>,
}

/// Shared handles for listeners and the frame loop. All of it lives on the
/// one JS thread; `BurnSimulator` is the only writer of burn state.
#[derive(Clone)]
pub struct App {
    pub sim: Rc<RefCell<BurnSimulator>>,
    pub audio: Option<Rc<RefCell<CuePlayer>>>,
    pub scheduler: Rc<RefCell<RafScheduler>>,
    pub view: Rc<RefCell<ViewState>>,
    pub clock: SessionClock,
}

impl App {
    #[inline]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn resume_audio(&self) {
        if let Some(audio) = &self.audio {
            audio.borrow().resume();
        }
    }

    pub fn play(&self, cues: CueBuffer) {
        let Some(audio) = &self.audio else {
            return;
        };
        let mut audio = audio.borrow_mut();
        for cue in cues {
            audio.execute(cue);
        }
    }

    /// Keep the prompt in step with the model; touches the DOM only on change.
    pub fn sync_prompt(&self, view: &FrameView) {
        let prompt = Prompt::for_view(view);
        let mut vs = self.view.borrow_mut();
        if vs.prompt != Some(prompt) {
            overlay::apply_prompt(&vs.document, prompt);
            vs.prompt = Some(prompt);
        }
    }

    pub fn present(&self, view: &FrameView, now: Duration) {
        self.view.borrow_mut().renderer.draw(view, now);
        self.sync_prompt(view);
    }

    /// One requestAnimationFrame callback.
    pub fn frame(&self) {
        let Some(ticket) = self.scheduler.borrow_mut().take_pending() else {
            return;
        };
        let now = self.now();
        let mut cues = CueBuffer::new();
        let view = {
            let mut scheduler = self.scheduler.borrow_mut();
            self.sim
                .borrow_mut()
                .frame(ticket, now, &mut *scheduler, &mut cues)
        };
        if let Some(view) = view {
            self.present(&view, now);
        }
        self.play(cues);
    }

    pub fn light(&self) {
        self.resume_audio();
        let mut cues = CueBuffer::new();
        if self.sim.borrow_mut().light(&mut cues) {
            self.play(cues);
            let view = self.sim.borrow().view(self.now());
            self.sync_prompt(&view);
        }
    }

    pub fn restart(&self) {
        let now = self.now();
        let mut cues = CueBuffer::new();
        let result = {
            let mut scheduler = self.scheduler.borrow_mut();
            self.sim
                .borrow_mut()
                .restart(now, &mut *scheduler, &mut cues)
        };
        match result {
            Ok(_) => {
                self.play(cues);
                self.view.borrow_mut().renderer.reset();
                let view = self.sim.borrow().view(now);
                self.present(&view, now);
            }
            Err(e) => log::warn!("[session] {}", e),
        }
    }
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_buttons(app: &App) {
    let document = app.view.borrow().document.clone();
    let app_light = app.clone();
    dom::add_click_listener(&document, overlay::LIGHT_BUTTON_ID, move || {
        app_light.light();
    });
    let app_restart = app.clone();
    dom::add_click_listener(&document, overlay::RESTART_BUTTON_ID, move || {
        app_restart.restart();
    });
}

fn load_config() -> BurnConfig {
    let query = dom::location_query();
    match BurnConfig::from_query(&query) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("config error: {}; using defaults", e);
            BurnConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("burnsim-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = load_config();
    log::info!("[config] {:?}", config);

    // Sound is cosmetic: carry on silently if WebAudio is unavailable
    let audio = match CuePlayer::new() {
        Ok(player) => Some(Rc::new(RefCell::new(player))),
        Err(e) => {
            log::error!("audio init error: {:?}", e);
            None
        }
    };

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let renderer = CanvasRenderer::new(&canvas, seed)?;

    let clock = SessionClock::start();
    let app = App {
        sim: Rc::new(RefCell::new(BurnSimulator::new(config, clock.now()))),
        audio,
        scheduler: Rc::new(RefCell::new(RafScheduler::new())),
        view: Rc::new(RefCell::new(ViewState {
            document,
            renderer,
            prompt: None,
        })),
        clock,
    };

    wire_buttons(&app);
    events::wire_hold_listeners(&app);

    let initial = app.sim.borrow().view(app.now());
    app.present(&initial, app.now());
    frame::start_loop(&app);
    Ok(())
}
