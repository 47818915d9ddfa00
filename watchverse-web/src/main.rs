fn main() {
    dioxus::launch(watchverse_web::App);
}
