fn main() {
    mili_release::app::cli::run();
}
