//! The Rotunda entry point
//!
//! The browser build owns the frame loop and the DOM control panel. The native
//! build has no window; it logs a summary of the generated city.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::fmt::Write;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, EventTarget, HtmlCanvasElement, HtmlElement, HtmlInputElement,
        HtmlTextAreaElement, PointerEvent, WheelEvent,
    };

    use rotunda::advisory::{Advisory, AdvisoryConfig, PanelStatus, lore_result};
    use rotunda::app::{Command, DiagramElement, Layer, RingEdit, UtilitySystem, View};
    use rotunda::hover::{ScreenPos, TOOLTIP_HEIGHT, TOOLTIP_WIDTH};
    use rotunda::layout::{FloorGroup, RingId};
    use rotunda::renderer::{RenderState, build_scene};
    use rotunda::scene::{Camera, SceneInput, pick};
    use rotunda::sim::frame_dt;
    use rotunda::{AppState, LayoutParams, Theme};

    /// Wheel delta (pixels) to zoom factor exponent
    const WHEEL_ZOOM_RATE: f32 = 0.0015;

    /// App instance holding all state
    struct App {
        state: AppState,
        camera: Camera,
        render_state: Option<RenderState>,
        advisory: Rc<Advisory>,
        last_time: f64,
        /// Last pointer position while dragging the map
        drag: Option<Vec2>,
        /// Ring editor rows need rebuilding
        rings_dirty: bool,
        /// Panels other than the ring editor need refreshing
        ui_dirty: bool,
    }

    impl App {
        fn new(seed: u64, theme: Theme, width: f32, height: f32) -> Self {
            let mut state = AppState::new(LayoutParams::default(), seed);
            if let Err(e) = state.apply(Command::SetTheme(theme)) {
                log::warn!("{}", e);
            }
            let mut camera = Camera::new(width, height);
            camera.frame_layout(SceneInput::from_app(&state).city_radius());

            Self {
                state,
                camera,
                render_state: None,
                advisory: Rc::new(Advisory::from_config(&AdvisoryConfig::from_env())),
                last_time: 0.0,
                drag: None,
                rings_dirty: true,
                ui_dirty: true,
            }
        }

        /// Apply a command; rejected input is logged and otherwise ignored
        fn dispatch(&mut self, command: Command) {
            let touches_rings = matches!(
                command,
                Command::UpdateRing { .. }
                    | Command::AddRing
                    | Command::RemoveRing(_)
                    | Command::SetGlobalColor(_)
            );
            let theme = match command {
                Command::SetTheme(theme) => Some(theme),
                _ => None,
            };

            match self.state.apply(command) {
                Ok(()) => {
                    if let Some(theme) = theme {
                        theme.save();
                    }
                }
                Err(e) => log::warn!("Rejected input: {}", e),
            }
            // Rebuild even on rejection so the form shows the stored values again
            self.rings_dirty |= touches_rings;
            self.ui_dirty = true;
        }

        fn frame(&mut self, time: f64) {
            let dt = frame_dt(self.last_time, time);
            self.last_time = time;
            self.state.advance(dt);

            let input = SceneInput::from_app(&self.state);
            self.camera
                .observe_reset_trigger(input.reset_trigger, input.city_radius());

            if self.state.view() != View::City {
                return;
            }
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };

            let vertices = build_scene(&input);
            let clear = input.theme.palette().ground.to_linear_rgba(1.0);
            match render_state.render(&vertices, &self.camera, clear) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        fn hover_at(&mut self, offset: Vec2, client: ScreenPos) {
            let world = self.camera.screen_to_world(offset);
            let hover = pick(world, client, &SceneInput::from_app(&self.state));
            if self.state.hover() != hover.as_ref() {
                self.dispatch(Command::SetHover(hover));
            }
        }
    }

    // ========================================================================
    // STARTUP
    // ========================================================================

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("The Rotunda starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (client_w, client_h) = size_canvas(&window, &canvas);

        let theme = Theme::load();
        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed, theme, client_w, client_h)));
        log::info!("City generated, theme {}", theme.as_str());

        // Initialize WebGPU (WebGL2 fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        match init_renderer(&instance, &canvas).await {
            Some(render_state) => app.borrow_mut().render_state = Some(render_state),
            None => {
                if let Some(el) = document.get_element_by_id("no-gpu") {
                    let _ = el.class_list().remove_1("hidden");
                }
            }
        }

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.class_list().add_1("hidden");
        }

        // Deep links land on the matching view
        if let Ok(path) = window.location().pathname() {
            app.borrow_mut().dispatch(Command::Navigate(View::from_path(&path)));
        }

        render_utility_cards(&document);
        setup_canvas_handlers(&canvas, app.clone());
        setup_resize(&canvas, app.clone());
        setup_controls(&document, app.clone());
        setup_ring_editor(&document, app.clone());
        setup_navigation(&document, app.clone());
        setup_infrastructure(&document, app.clone());
        setup_advisory(&document, app.clone());

        request_animation_frame(app);

        log::info!("The Rotunda running!");
    }

    async fn init_renderer(
        instance: &wgpu::Instance,
        canvas: &HtmlCanvasElement,
    ) -> Option<RenderState> {
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| log::error!("Failed to create surface: {}", e))
            .ok()?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| log::error!("Failed to get adapter: {}", e))
            .ok()?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, canvas.width(), canvas.height())
            .await
            .map_err(|e| log::error!("Failed to create device: {}", e))
            .ok()
    }

    /// Match the backing store to the CSS size; returns the CSS size
    fn size_canvas(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (f32, f32) {
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        canvas.set_width((client_w as f64 * dpr) as u32);
        canvas.set_height((client_h as f64 * dpr) as u32);
        (client_w as f32, client_h as f32)
    }

    fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn listen_id<E>(document: &Document, id: &str, event: &str, handler: impl FnMut(E) + 'static)
    where
        E: FromWasmAbi + 'static,
    {
        match document.get_element_by_id(id) {
            Some(el) => listen(&el, event, handler),
            None => log::warn!("Missing #{} in page", id),
        }
    }

    fn input_value(event: &web_sys::Event) -> Option<String> {
        let target = event.target()?;
        if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        target.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
    }

    fn input_checked(event: &web_sys::Event) -> Option<bool> {
        event
            .target()?
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.checked())
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    fn setup_canvas_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Wheel zooms around the pointer
        {
            let app = app.clone();
            listen(canvas, "wheel", move |event: WheelEvent| {
                event.prevent_default();
                let anchor = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                let factor = (-(event.delta_y() as f32) * WHEEL_ZOOM_RATE).exp();
                app.borrow_mut().camera.zoom_by(factor, anchor);
            });
        }

        // Drag pans
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            listen(canvas, "pointerdown", move |event: PointerEvent| {
                let _ = canvas_clone.set_pointer_capture(event.pointer_id());
                let mut a = app.borrow_mut();
                a.drag = Some(Vec2::new(event.offset_x() as f32, event.offset_y() as f32));
                if a.state.hover().is_some() {
                    a.dispatch(Command::SetHover(None));
                }
            });
        }
        {
            let app = app.clone();
            listen(canvas, "pointerup", move |_event: PointerEvent| {
                app.borrow_mut().drag = None;
            });
        }

        // Move pans while dragging, otherwise hit-tests for the tooltip
        {
            let app = app.clone();
            listen(canvas, "pointermove", move |event: PointerEvent| {
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                let mut a = app.borrow_mut();
                let drag = a.drag;
                match drag {
                    Some(last) => {
                        a.camera.pan_by(pos - last);
                        a.drag = Some(pos);
                    }
                    None => {
                        let client = ScreenPos::new(event.client_x() as f32, event.client_y() as f32);
                        a.hover_at(pos, client);
                    }
                }
            });
        }

        // Pointer leaving the canvas hides the tooltip
        listen(canvas, "pointerleave", move |_event: PointerEvent| {
            let mut a = app.borrow_mut();
            a.drag = None;
            a.dispatch(Command::SetHover(None));
        });
    }

    fn setup_resize(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas = canvas.clone();
        let win = window.clone();
        listen(&window, "resize", move |_event: web_sys::Event| {
            let (w, h) = size_canvas(&win, &canvas);
            let mut a = app.borrow_mut();
            a.camera.set_viewport(w, h);
            if let Some(rs) = a.render_state.as_mut() {
                rs.resize(canvas.width(), canvas.height());
            }
        });
    }

    fn setup_controls(document: &Document, app: Rc<RefCell<App>>) {
        let simple = |id: &str, command: fn(&AppState) -> Command| {
            let app = app.clone();
            listen_id(document, id, "click", move |_event: web_sys::MouseEvent| {
                let mut a = app.borrow_mut();
                let command = command(&a.state);
                a.dispatch(command);
            });
        };
        simple("btn-play", |_| Command::TogglePlay);
        simple("btn-reset", |_| Command::Reset);
        simple("btn-add-ring", |_| Command::AddRing);
        simple("btn-theme", |s| Command::SetTheme(s.theme().toggled()));

        {
            let app = app.clone();
            listen_id(document, "time-scale", "input", move |event: web_sys::Event| {
                let Some(value) = input_value(&event) else {
                    return;
                };
                match value.trim().parse::<f64>() {
                    Ok(scale) => app.borrow_mut().dispatch(Command::SetTimeScale(scale)),
                    Err(_) => log::warn!("Ignoring time scale {:?}", value),
                }
            });
        }
        {
            let app = app.clone();
            listen_id(document, "opacity", "input", move |event: web_sys::Event| {
                let Some(value) = input_value(&event) else {
                    return;
                };
                match value.trim().parse::<f64>() {
                    Ok(opacity) => app.borrow_mut().dispatch(Command::SetOpacity(opacity)),
                    Err(_) => log::warn!("Ignoring opacity {:?}", value),
                }
            });
        }
        {
            let app = app.clone();
            listen_id(document, "global-color", "change", move |event: web_sys::Event| {
                let Some(value) = input_value(&event) else {
                    return;
                };
                match value.parse() {
                    Ok(color) => app.borrow_mut().dispatch(Command::SetGlobalColor(color)),
                    Err(e) => log::warn!("{}", e),
                }
            });
        }

        for group in FloorGroup::ALL {
            let app = app.clone();
            let id = format!("floor-{}", group.as_str());
            listen_id(document, &id, "change", move |event: web_sys::Event| {
                if let Some(checked) = input_checked(&event) {
                    app.borrow_mut().dispatch(Command::SetFloorGroup(group, checked));
                }
            });
        }
        for layer in Layer::ALL {
            let app = app.clone();
            let id = format!("layer-{}", layer.key());
            listen_id(document, &id, "change", move |event: web_sys::Event| {
                if let Some(checked) = input_checked(&event) {
                    app.borrow_mut().dispatch(Command::SetLayer(layer, checked));
                }
            });
        }
    }

    /// One delegated listener for every ring row
    fn setup_ring_editor(document: &Document, app: Rc<RefCell<App>>) {
        let Some(list) = document.get_element_by_id("ring-list") else {
            log::warn!("Missing #ring-list in page");
            return;
        };

        {
            let app = app.clone();
            listen(&list, "change", move |event: web_sys::Event| {
                let Some(el) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                    return;
                };
                let (Some(id), Some(field)) =
                    (el.get_attribute("data-ring-id"), el.get_attribute("data-field"))
                else {
                    return;
                };
                let value = input_value(&event).unwrap_or_default();
                let mut a = app.borrow_mut();
                match RingEdit::parse(&field, &value) {
                    Ok(edit) => a.dispatch(Command::UpdateRing {
                        id: RingId::new(id),
                        edit,
                    }),
                    Err(e) => {
                        log::warn!("Rejected input: {}", e);
                        a.rings_dirty = true;
                    }
                }
            });
        }

        listen(&list, "click", move |event: web_sys::MouseEvent| {
            let Some(el) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Some(id) = el.get_attribute("data-remove") {
                app.borrow_mut().dispatch(Command::RemoveRing(RingId::new(id)));
            }
        });
    }

    fn setup_navigation(document: &Document, app: Rc<RefCell<App>>) {
        for view in View::ALL {
            let app = app.clone();
            listen_id(document, nav_id(view), "click", move |event: web_sys::MouseEvent| {
                event.prevent_default();
                if let Some(Ok(history)) = web_sys::window().map(|w| w.history()) {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(view.path()));
                }
                app.borrow_mut().dispatch(Command::Navigate(view));
            });
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let win = window.clone();
        listen(&window, "popstate", move |_event: web_sys::Event| {
            if let Ok(path) = win.location().pathname() {
                app.borrow_mut().dispatch(Command::Navigate(View::from_path(&path)));
            }
        });
    }

    fn setup_infrastructure(document: &Document, app: Rc<RefCell<App>>) {
        for element in [
            DiagramElement::RotaryUnion,
            DiagramElement::InnerRing,
            DiagramElement::OuterRing,
        ] {
            let app = app.clone();
            let id = format!("diagram-{}", element.id());
            listen_id(document, &id, "click", move |_event: web_sys::MouseEvent| {
                app.borrow_mut()
                    .dispatch(Command::SelectDiagramElement(element));
            });
        }
        listen_id(
            document,
            "btn-diagram-animate",
            "click",
            move |_event: web_sys::MouseEvent| {
                app.borrow_mut().dispatch(Command::ToggleDiagramAnimation);
            },
        );
    }

    fn setup_advisory(document: &Document, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            listen_id(document, "btn-lore", "click", move |_event: web_sys::MouseEvent| {
                request_lore(&app);
            });
        }
        {
            let app = app.clone();
            listen_id(document, "btn-ask", "click", move |_event: web_sys::MouseEvent| {
                let query = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("ask-input"))
                    .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
                    .map(|t| t.value())
                    .unwrap_or_default();
                if query.trim().is_empty() {
                    return;
                }
                request_answer(&app, query);
            });
        }
        listen_id(document, "advisory-close", "click", move |_event: web_sys::MouseEvent| {
            app.borrow_mut().dispatch(Command::CloseAdvisory);
        });
    }

    fn request_lore(app: &Rc<RefCell<App>>) {
        let (ticket, rings, walkways, advisory) = {
            let mut a = app.borrow_mut();
            a.ui_dirty = true;
            (
                a.state.begin_advisory(),
                a.state.rings().to_vec(),
                a.state.walkways().to_vec(),
                a.advisory.clone(),
            )
        };
        let app = app.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let text = advisory.generate_lore(&rings, &walkways).await;
            let mut a = app.borrow_mut();
            let shown = a.state.complete_advisory(ticket, lore_result(text));
            a.ui_dirty |= shown;
        });
    }

    fn request_answer(app: &Rc<RefCell<App>>, query: String) {
        let (ticket, rings, walkways, advisory) = {
            let mut a = app.borrow_mut();
            a.ui_dirty = true;
            (
                a.state.begin_advisory(),
                a.state.rings().to_vec(),
                a.state.walkways().to_vec(),
                a.advisory.clone(),
            )
        };
        let app = app.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = advisory.ask(&rings, &walkways, &query).await;
            let mut a = app.borrow_mut();
            let shown = a.state.complete_advisory(ticket, result);
            a.ui_dirty |= shown;
        });
    }

    // ========================================================================
    // FRAME LOOP
    // ========================================================================

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            app_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn app_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.frame(time);

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                update_hud(&document, &a.state);
                if a.rings_dirty {
                    render_ring_list(&document, &a.state);
                    a.rings_dirty = false;
                }
                if a.ui_dirty {
                    sync_panels(&document, &a.state);
                    a.ui_dirty = false;
                }
            }
        }

        request_animation_frame(app);
    }

    // ========================================================================
    // DOM OUTPUT
    // ========================================================================

    fn nav_id(view: View) -> &'static str {
        match view {
            View::City => "nav-city",
            View::Infrastructure => "nav-infrastructure",
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    fn escape(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        out
    }

    /// Simulated clock as "Day N HH:MM:SS"
    fn format_sim_time(seconds: f64) -> String {
        let total = seconds.max(0.0) as u64;
        let (days, rest) = (total / 86_400, total % 86_400);
        format!(
            "Day {} {:02}:{:02}:{:02}",
            days + 1,
            rest / 3600,
            (rest % 3600) / 60,
            rest % 60
        )
    }

    /// Per-frame status line
    fn update_hud(document: &Document, state: &AppState) {
        let sim = state.sim();
        set_text(document, "sim-status", sim.phase.label());
        set_text(document, "sim-time", &format_sim_time(sim.current_time));
    }

    fn sync_panels(document: &Document, state: &AppState) {
        let sim = state.sim();
        set_text(
            document,
            "btn-play",
            if sim.is_playing() { "Pause" } else { "Play" },
        );
        set_text(document, "time-scale-value", &format!("{:.0}x", sim.time_scale));
        set_text(
            document,
            "opacity-value",
            &format!("{:.0}%", state.opacity() * 100.0),
        );

        // Theme
        if let Some(root) = document.document_element() {
            let dark = state.theme().is_dark();
            let _ = root.class_list().toggle_with_force("dark", dark);
            let _ = root.class_list().toggle_with_force("light", !dark);
        }
        set_text(
            document,
            "btn-theme",
            if state.theme().is_dark() { "Light mode" } else { "Dark mode" },
        );

        // Views
        let view = state.view();
        set_hidden(document, "city-view", view != View::City);
        set_hidden(document, "infrastructure-view", view != View::Infrastructure);
        for v in View::ALL {
            if let Some(el) = document.get_element_by_id(nav_id(v)) {
                let _ = el.class_list().toggle_with_force("active", v == view);
            }
        }

        render_stats(document, state);
        render_tooltip(document, state);
        render_advisory(document, state);
        render_diagram(document, state);
    }

    fn render_stats(document: &Document, state: &AppState) {
        let stats = state.stats();
        let Some(el) = document.get_element_by_id("stats") else {
            return;
        };
        el.set_inner_html(&format!(
            "<div><span>Rings</span><b>{}</b></div>\
             <div><span>Sections</span><b>{}</b></div>\
             <div><span>Bridges</span><b>{}</b></div>\
             <div><span>Umbilicals</span><b>{}</b></div>\
             <div><span>Water</span><b>{:.1} ML/day</b></div>\
             <div><span>Power</span><b>{:.1} MW</b></div>\
             <div><span>Radius</span><b>{:.0} m</b></div>",
            stats.rotating_rings,
            stats.sections,
            stats.bridges,
            stats.umbilicals,
            stats.water_liters_per_day / 1_000_000.0,
            stats.power_mw,
            stats.city_radius,
        ));
    }

    fn render_ring_list(document: &Document, state: &AppState) {
        let Some(list) = document.get_element_by_id("ring-list") else {
            return;
        };
        let mut html = String::new();
        for ring in state.rings() {
            let id = escape(ring.id.as_str());
            let color = ring.color.to_string();
            let motion = if ring.is_hub() {
                "Stationary".to_string()
            } else {
                format!(
                    "{} • {:.2} m/s • {} towers",
                    if ring.is_clockwise() { "CW" } else { "CCW" },
                    ring.edge_speed().abs(),
                    ring.umbilical_count
                )
            };
            let _ = write!(
                html,
                r#"<div class="ring-row">
  <span class="ring-swatch" style="background:{color}"></span>
  <input type="text" data-ring-id="{id}" data-field="name" value="{name}">
  <input type="number" data-ring-id="{id}" data-field="outerRadius" value="{outer:.0}" min="1">
  <input type="number" data-ring-id="{id}" data-field="sectionCount" value="{sections}" min="4" step="2"{disabled}>
  <input type="color" data-ring-id="{id}" data-field="color" value="{color}">
  <button class="ring-remove" data-remove="{id}" title="Remove ring">&times;</button>
  <div class="ring-meta">{inner:.0}-{outer:.0} m • {motion}</div>
</div>"#,
                name = escape(&ring.name),
                inner = ring.inner_radius,
                outer = ring.outer_radius,
                sections = ring.section_count,
                disabled = if ring.is_hub() { " disabled" } else { "" },
                motion = escape(&motion),
            );
        }
        list.set_inner_html(&html);
    }

    fn render_tooltip(document: &Document, state: &AppState) {
        let Some(el) = document
            .get_element_by_id("tooltip")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let Some(info) = state.hover() else {
            let _ = el.class_list().add_1("hidden");
            return;
        };

        let (vw, vh) = web_sys::window()
            .map(|w| {
                let dim = |v: Result<JsValue, JsValue>| {
                    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
                };
                (dim(w.inner_width()), dim(w.inner_height()))
            })
            .unwrap_or((TOOLTIP_WIDTH, TOOLTIP_HEIGHT));
        let (x, y) = info.tooltip_anchor(vw, vh);

        let mut html = format!(
            r#"<div class="tooltip-title"><span class="tooltip-dot" style="background:{}"></span>{}</div><p>{}</p>"#,
            info.kind.accent(),
            escape(&info.name),
            escape(&info.description),
        );
        if let Some(details) = &info.details {
            let _ = write!(html, r#"<p class="tooltip-details">{}</p>"#, escape(details));
        }
        el.set_inner_html(&html);
        let style = el.style();
        let _ = style.set_property("left", &format!("{}px", x));
        let _ = style.set_property("top", &format!("{}px", y));
        let _ = el.class_list().remove_1("hidden");
    }

    fn render_advisory(document: &Document, state: &AppState) {
        let panel = state.advisory();
        set_hidden(document, "advisory", !panel.is_open());
        match panel.status() {
            PanelStatus::Closed => {}
            PanelStatus::Loading { .. } => {
                set_text(document, "advisory-title", "Consulting the archives...");
                set_text(document, "advisory-content", "");
            }
            PanelStatus::Ready(result) => {
                set_text(document, "advisory-title", &result.title);
                set_text(document, "advisory-content", &result.content);
                if let Some(el) = document.get_element_by_id("advisory") {
                    let _ = el.set_attribute("data-kind", result.kind.as_str());
                }
            }
        }
    }

    fn render_diagram(document: &Document, state: &AppState) {
        let view = state.infrastructure();
        if let Some(el) = document.get_element_by_id("diagram") {
            let _ = el.class_list().toggle_with_force("animating", view.animating);
        }
        set_text(
            document,
            "btn-diagram-animate",
            if view.animating { "Pause Animation" } else { "Play Animation" },
        );
        for element in [
            DiagramElement::RotaryUnion,
            DiagramElement::InnerRing,
            DiagramElement::OuterRing,
        ] {
            if let Some(el) = document.get_element_by_id(&format!("diagram-{}", element.id())) {
                let _ = el
                    .class_list()
                    .toggle_with_force("selected", view.selected == Some(element));
            }
        }
        match view.selected {
            Some(element) => {
                set_hidden(document, "diagram-info", false);
                set_text(document, "diagram-info-title", element.title());
                set_text(document, "diagram-info-text", element.description());
            }
            None => set_hidden(document, "diagram-info", true),
        }
    }

    /// Static utility system cards on the infrastructure page
    fn render_utility_cards(document: &Document) {
        let Some(el) = document.get_element_by_id("utility-cards") else {
            return;
        };
        let mut html = String::new();
        for system in UtilitySystem::ALL {
            let _ = write!(
                html,
                r#"<div class="utility-card"><h3>{}</h3><p>{}</p><ul>"#,
                system.title(),
                system.summary()
            );
            for fact in system.facts() {
                let _ = write!(html, "<li>{}</li>", escape(fact));
            }
            html.push_str("</ul></div>");
        }
        el.set_inner_html(&html);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rotunda::advisory::AdvisoryConfig;
    use rotunda::{AppState, LayoutParams};

    env_logger::init();
    log::info!("The Rotunda (native) starting...");

    let app = AppState::new(LayoutParams::default(), 0);
    let stats = app.stats();
    log::info!(
        "{} rotating rings, {} sections, {} bridges, {} umbilical towers",
        stats.rotating_rings,
        stats.sections,
        stats.bridges,
        stats.umbilicals
    );
    log::info!(
        "City radius {:.0} m, water {:.0} L/day, power {:.1} MW",
        stats.city_radius,
        stats.water_liters_per_day,
        stats.power_mw
    );
    for ring in app.rings() {
        log::info!(
            "  {:<12} {:>6.0}-{:<6.0} m  {:>3} sections  {:+.4} deg/min  {:.2} m/s",
            ring.name,
            ring.inner_radius,
            ring.outer_radius,
            ring.section_count,
            ring.rotation_speed,
            ring.edge_speed().abs()
        );
    }

    let advisory = AdvisoryConfig::from_env();
    log::info!(
        "AI advisory: {} (model {})",
        if advisory.has_key() { "enabled" } else { "disabled" },
        advisory.model
    );
    log::info!("Rendering requires a browser - run with `trunk serve` for the web version");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
