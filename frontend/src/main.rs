use crate::app::App;

mod api;
mod app;
mod components;

fn main() {
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    log::info!("source manager starting");
    yew::Renderer::<App>::new().render();
}
