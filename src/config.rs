//! Static game configuration: the item tray, the drop target and the rules.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Rect;

/// localStorage key for an optional JSON override of the default layout.
pub const CONFIG_STORAGE_KEY: &str = "dq_config";

fn default_container() -> String {
    "tray".to_string()
}
fn default_color() -> String {
    "#30363d".to_string()
}
fn default_delay() -> f64 {
    1.0
}
fn default_fail_threshold() -> u32 {
    2
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraggableDescriptor {
    pub name: String,
    /// Stage-space rect the item occupies in its container.
    pub region: Rect,
    /// Container the item lives in; its drag proxies are spawned into the same one.
    #[serde(default = "default_container")]
    pub container: String,
    #[serde(default = "default_color")]
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub stage_width: f64,
    pub stage_height: f64,
    pub items: Vec<DraggableDescriptor>,
    pub drop_target: Rect,
    pub correct_index: usize,
    #[serde(default = "default_delay")]
    pub success_delay_secs: f64,
    #[serde(default = "default_fail_threshold")]
    pub fail_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        let palette = ["#d4af37", "#58a6ff", "#2ea043", "#f0883e", "#a371f7"];
        let items = ["A", "B", "C", "D", "E"]
            .iter()
            .zip(palette)
            .enumerate()
            .map(|(i, (name, color))| DraggableDescriptor {
                name: (*name).to_string(),
                region: Rect::new(40.0 + i as f64 * 150.0, 440.0, 110.0, 110.0),
                container: default_container(),
                color: color.to_string(),
            })
            .collect();
        Self {
            stage_width: 800.0,
            stage_height: 600.0,
            items,
            drop_target: Rect::new(250.0, 80.0, 300.0, 200.0),
            correct_index: 2,
            success_delay_secs: default_delay(),
            fail_threshold: default_fail_threshold(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stage_width > 0.0 && self.stage_height > 0.0)
            || !self.stage_width.is_finite()
            || !self.stage_height.is_finite()
        {
            return Err(ConfigError::BadStage {
                width: self.stage_width,
                height: self.stage_height,
            });
        }
        if self.items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        if self.correct_index >= self.items.len() {
            return Err(ConfigError::CorrectIndexOutOfRange {
                index: self.correct_index,
                len: self.items.len(),
            });
        }
        let mut seen = HashSet::new();
        for (index, item) in self.items.iter().enumerate() {
            if !item.region.is_well_formed() {
                return Err(ConfigError::BadItemRegion {
                    index,
                    name: item.name.clone(),
                });
            }
            if !seen.insert(item.name.as_str()) {
                return Err(ConfigError::DuplicateName {
                    name: item.name.clone(),
                });
            }
        }
        if !self.drop_target.is_well_formed() {
            return Err(ConfigError::BadDropTarget);
        }
        if !self.success_delay_secs.is_finite() || self.success_delay_secs < 0.0 {
            return Err(ConfigError::BadDelay(self.success_delay_secs));
        }
        if self.fail_threshold == 0 {
            return Err(ConfigError::ZeroFailThreshold);
        }
        Ok(())
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Default layout unless localStorage carries an override. A broken override is an
    /// error rather than a silent fallback.
    pub fn load() -> Result<Self, ConfigError> {
        let raw = crate::util::local_storage()
            .and_then(|store| store.get_item(CONFIG_STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => {
                log::info!("using config override from {CONFIG_STORAGE_KEY}");
                Self::from_json(&raw)
            }
            None => {
                let cfg = Self::default();
                cfg.validate()?;
                Ok(cfg)
            }
        }
    }

    pub fn correct_item(&self) -> &DraggableDescriptor {
        &self.items[self.correct_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_valid() {
        let cfg = GameConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.items.len(), 5);
        assert_eq!(cfg.correct_item().name, "C");
        assert_eq!(cfg.fail_threshold, 2);
    }

    #[test]
    fn default_items_do_not_overlap_target() {
        let cfg = GameConfig::default();
        for item in &cfg.items {
            assert!(!item.region.overlaps(&cfg.drop_target), "{} overlaps target", item.name);
        }
    }

    #[test]
    fn rejects_empty_items() {
        let cfg = GameConfig {
            items: Vec::new(),
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::NoItems)));
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let cfg = GameConfig {
            correct_index: 5,
            ..GameConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::CorrectIndexOutOfRange { index: 5, len: 5 })
        ));
    }

    #[test]
    fn rejects_degenerate_target() {
        let cfg = GameConfig {
            drop_target: Rect::new(0.0, 0.0, 0.0, 10.0),
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::BadDropTarget)));
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut cfg = GameConfig::default();
        cfg.items[3].name = "A".to_string();
        assert!(matches!(cfg.validate(), Err(ConfigError::DuplicateName { .. })));
    }

    #[test]
    fn rejects_zero_threshold_and_negative_delay() {
        let cfg = GameConfig {
            fail_threshold: 0,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroFailThreshold)));
        let cfg = GameConfig {
            success_delay_secs: -1.0,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::BadDelay(_))));
    }

    #[test]
    fn json_fills_defaults() {
        let raw = r#"{
            "stage_width": 400, "stage_height": 300,
            "items": [
                {"name": "x", "region": {"x": 0, "y": 0, "width": 50, "height": 50}},
                {"name": "y", "region": {"x": 60, "y": 0, "width": 50, "height": 50}}
            ],
            "drop_target": {"x": 100, "y": 100, "width": 100, "height": 100},
            "correct_index": 1
        }"#;
        let cfg = GameConfig::from_json(raw).unwrap();
        assert_eq!(cfg.success_delay_secs, 1.0);
        assert_eq!(cfg.fail_threshold, 2);
        assert_eq!(cfg.items[0].container, "tray");
    }

    #[test]
    fn json_errors_are_reported() {
        assert!(matches!(GameConfig::from_json("{"), Err(ConfigError::Parse(_))));
        let raw = r#"{
            "stage_width": 400, "stage_height": 300, "items": [],
            "drop_target": {"x": 0, "y": 0, "width": 1, "height": 1},
            "correct_index": 0
        }"#;
        assert!(matches!(GameConfig::from_json(raw), Err(ConfigError::NoItems)));
    }
}
