fn main() -> anyhow::Result<()> {
    wishbox::run()
}
