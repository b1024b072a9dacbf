//! modalkit web app: the builder at `/` and published modals at `/embed/<id>`

fn main() {
    dioxus::launch(modalkit_web::App);
}
