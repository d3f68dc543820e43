fn main() -> anyhow::Result<()> {
    flowey_engine::run()
}
