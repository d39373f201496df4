use geopin_pwa::components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 GeoPin PWA starting...");

    yew::Renderer::<App>::new().render();
}
