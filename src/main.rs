fn main() {
    icon_generator_lib::run()
}
