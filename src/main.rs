#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[allow(unused_imports)]
use margin_ratio_viewer::{
    Cli,           // The struct from lib.rs
    run_app,       // The function from lib.rs
    select_source, // Picks mock or live feed
};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast; // REQUIRED for .dyn_into()
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    log::info!("Margin Ratio Viewer starting in WASM mode...");

    // B. No command line in the browser: always the mock feed
    let source = select_source(&Cli::default());
    let web_options = eframe::WebOptions::default();

    // C. Find the canvas element by ID
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document on the global window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(move |cc| Ok(run_app(cc, source))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use eframe::egui::ViewportBuilder;
    use margin_ratio_viewer::ui::ui_text::UI_TEXT;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Pick the feed; the app fetches from it once it is up
    let source = select_source(&args);

    // D. Run Native App
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([480.0, 600.0])
            .with_title(UI_TEXT.window_title),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, source))),
    )
}
