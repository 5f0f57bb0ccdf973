use admin_console_kit::components::App;
use admin_console_kit::logging;

fn main() {
    logging::init(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
