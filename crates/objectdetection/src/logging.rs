use crate::config::DetectionConfig;

pub fn setup_logging(config: &DetectionConfig) {
    common::setup_logging(config.environment);
}

/// Like [`setup_logging`], for hosts that may already have a subscriber.
pub fn try_setup_logging(config: &DetectionConfig) -> Result<(), common::TryInitError> {
    common::try_setup_logging(config.environment)
}
