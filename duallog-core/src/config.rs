use std::sync::LazyLock;

use derive_from_env::FromEnv;

#[derive(FromEnv)]
#[from_env(prefix = "DUALLOG")]
#[allow(non_snake_case)]
pub struct DualLogConfig {
    /// Capacity of the buffer wrapping the secondary sink.
    /// Kept small so the file is written almost line by line.
    #[from_env(default = "128")]
    pub WRITE_BUFFER_SIZE: usize,
    /// Colour severities printed by the stderr primary sink.
    #[from_env(default = "true")]
    pub COLOR: bool,
}

impl Default for DualLogConfig {
    fn default() -> Self {
        Self {
            WRITE_BUFFER_SIZE: 128,
            COLOR: true,
        }
    }
}

pub static DUALLOG_CONFIG: LazyLock<DualLogConfig> =
    LazyLock::new(|| DualLogConfig::from_env().unwrap_or_default());
