fn main() {
    projlayout::app::cli::run();
}
