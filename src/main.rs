fn main() {
    hardenkit::app::cli::run();
}
