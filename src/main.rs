fn main() {
    strap::app::cli::run();
}
