use fibstack_cli::run;

fn main() -> anyhow::Result<()> {
    run()
}
