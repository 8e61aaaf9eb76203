//! Serde-tagged sampler selection.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    FixedPoseSampler, RandomPoseOptions, RandomPoseSampler, TableError, TurntableOptions,
    TurntableSampler, ViewSampler,
};

/// Strategy selection for a view plan, deserializable from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SamplerConfig {
    /// Randomized training poses.
    Random {
        #[serde(flatten)]
        opts: RandomPoseOptions,
        /// Draws per pass.
        #[serde(default = "default_random_size")]
        size: usize,
    },
    /// Evenly spaced turntable pass.
    Turntable {
        #[serde(flatten)]
        opts: TurntableOptions,
    },
    /// Replay of calibrated capture poses.
    FixedReplay {
        /// Translation table, one `x y z` row per capture position.
        translation_path: PathBuf,
        /// Quaternion table, one `qx qy qz qw` row per view.
        rotation_path: PathBuf,
    },
}

fn default_random_size() -> usize {
    100
}

impl SamplerConfig {
    /// Construct the configured sampler. Calibration-table errors
    /// surface here; the other strategies cannot fail.
    pub fn build(&self) -> Result<Box<dyn ViewSampler>, TableError> {
        match self {
            SamplerConfig::Random { opts, size } => {
                Ok(Box::new(RandomPoseSampler::new(opts.clone(), *size)))
            }
            SamplerConfig::Turntable { opts } => Ok(Box::new(TurntableSampler::new(opts))),
            SamplerConfig::FixedReplay {
                translation_path,
                rotation_path,
            } => Ok(Box::new(FixedPoseSampler::from_files(
                translation_path,
                rotation_path,
            )?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turntable_config_round_trips_through_json() {
        let config = SamplerConfig::Turntable {
            opts: TurntableOptions {
                count: 4,
                alternate: true,
                ..Default::default()
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"type\":\"turntable\""));

        let restored: SamplerConfig = serde_json::from_str(&json).unwrap();
        let mut sampler = restored.build().unwrap();
        assert_eq!(sampler.len(), 4);
        assert!(matches!(sampler.sample(0), crate::ViewRecord::Angular(_)));
    }

    #[test]
    fn minimal_turntable_json_uses_field_defaults() {
        let json = r#"{"type": "turntable", "count": 6, "base_theta": 60.0, "radius": 1.25}"#;
        let config: SamplerConfig = serde_json::from_str(json).unwrap();
        let sampler = config.build().unwrap();
        assert_eq!(sampler.len(), 6);
    }

    #[test]
    fn random_config_defaults_the_pass_size() {
        let json = r#"{
            "type": "random",
            "radius_range": [1.0, 1.5],
            "theta_range": [0.0, 180.0],
            "phi_range": [0.0, 360.0]
        }"#;
        let config: SamplerConfig = serde_json::from_str(json).unwrap();
        let sampler = config.build().unwrap();
        assert_eq!(sampler.len(), 100);
    }

    #[test]
    fn replay_config_surfaces_table_errors() {
        let config = SamplerConfig::FixedReplay {
            translation_path: PathBuf::from("/nonexistent/cam_translations.txt"),
            rotation_path: PathBuf::from("/nonexistent/cubemap_rotations.txt"),
        };
        assert!(matches!(
            config.build().unwrap_err(),
            TableError::Io { .. }
        ));
    }
}
