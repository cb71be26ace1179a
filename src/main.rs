mod app;
mod config;
mod contact;
mod date;
mod modal;
mod nav;
mod projects;
mod reveal;
mod skills;
mod theme;

fn main() {
    dioxus::launch(app::App);
}
