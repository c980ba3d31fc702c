fn main() -> anyhow::Result<()> {
    anidle::cli::run()
}
