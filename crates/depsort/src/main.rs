fn main() -> anyhow::Result<()> {
    depsort_lib::main()
}
