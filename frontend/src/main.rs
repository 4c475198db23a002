fn main() {
    reset_portal_frontend::start();
}
