use sw_pr_curve::config::RunConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = RunConfig::default();
    match sw_pr_curve::run(&config) {
        Ok(path) => {
            log::info!("Done: {}", path.display());
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to plot precision/recall curves: {e:#}");
            Err(e)
        }
    }
}
