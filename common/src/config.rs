use std::path::PathBuf;

pub struct Config {
    /// Path of the flat text OUI database (IEEE `oui.txt` layout).
    pub oui_path: PathBuf,
    /// Resolve vendors from the database bundled with the binary instead of `oui_path`.
    pub bundled_oui: bool,
    /// File the expanded address list is written to.
    pub output: PathBuf,
    /// 0 prints everything, 1 drops headers, 2 only prints the final summary.
    pub quiet: u8,
}
