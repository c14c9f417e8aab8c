fn main() {
    modx_install::app::cli::run();
}
