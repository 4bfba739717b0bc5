use anyhow::bail;
use tracing_subscriber::EnvFilter;

mod check;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let summary = check::run_all(common::add);
    if !summary.all_passed() {
        bail!("{} of {} checks failed", summary.failed, summary.failed + summary.passed);
    }
    Ok(())
}
