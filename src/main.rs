fn main() {
    mc_status_lib::run()
}
