fn main() -> anyhow::Result<()> {
    idiom_index::cli::run()
}
