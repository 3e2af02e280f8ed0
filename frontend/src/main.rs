use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod route;

fn main() {
    helpers::install_unsaved_changes_guard();
    yew::Renderer::<App>::new().render();
}
