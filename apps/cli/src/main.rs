fn main() -> anyhow::Result<()> {
    gift_bank::run()
}
