use worblehat_ui::{config, logging, App};

fn main() {
    console_error_panic_hook::set_once();
    config::init(config::load());
    logging::info("worblehat frontend starting");
    yew::Renderer::<App>::new().render();
}
