fn main() {
    rpidsm::app::cli::run();
}
