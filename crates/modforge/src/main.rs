fn main() -> anyhow::Result<()> {
    modforge_lib::main()
}
