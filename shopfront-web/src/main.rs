//! Browser entry point.

use shopfront_web::app::App;
use shopfront_web::config::FrontendConfig;
use shopfront_web::logging;
use yew::{Html, Renderer, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        let location = info
            .location()
            .map(|location| format!(" at {}:{}:{}", location.file(), location.line(), location.column()))
            .unwrap_or_default();
        web_sys::console::error_1(&format!("Panic: {payload}{location}").into());
    }));

    logging::init(FrontendConfig::default().log_level);
    log::info!("Starting Shopfront");

    Renderer::<Root>::new().render();
}
