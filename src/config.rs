use crate::*;
use confique::Config as _;

#[derive(Debug, confique::Config)]
pub struct Config {
    /// Number of samples the demo driver evaluates, starting at zero.
    #[config(env = "TIMELINE_FRAMES", default = 16)]
    pub frames: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Config::builder().env().load()?;
        debug!("Loaded configuration: {config:?}");
        Ok(config)
    }
}
