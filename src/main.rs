use bas_marketplace::components::App;
use bas_marketplace::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    bas_marketplace::init_logging();
    log::info!("🚀 BAS marketplace starting (backend: {})", CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}
