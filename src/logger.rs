use anyhow::Result;
use anyhow::anyhow;
use ftail::Ftail;
use log::LevelFilter;
use std::env;
use std::fs;

const LOGS_DIR: &str = ".logs";
const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// File logger under ~/.logs/hk-deals/. Console output stays at Warn so the
/// alert text on stdout is not polluted.
pub fn init_logger() -> Result<()> {
    let home_folder = match env::home_dir() {
        Some(h) => h,
        None => return Err(anyhow!("Could not determine $HOME")),
    };

    let logs_path = home_folder.join(LOGS_DIR).join(PKG_NAME);
    let logs_file = logs_path.join(format!("{}.log", PKG_NAME));

    // Idempotent, so safe to run every time
    fs::create_dir_all(&logs_path)
        .map_err(|e| anyhow!("Could not create logs dir at {:#?}: {}", &logs_path, e))?;

    Ftail::new()
        .console(LevelFilter::Warn)
        .single_file(&logs_file, true, LevelFilter::Info)
        .init()
        .map_err(|e| anyhow!("Could not initialize logger: {}", e))?;

    Ok(())
}
