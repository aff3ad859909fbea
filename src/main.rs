mod components;
mod util;

use components::app::App;

fn main() {
    util::init_logging(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
