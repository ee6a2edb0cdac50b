use derive_builder::Builder;

use crate::{
    errors::{Error, Result},
    math::FloatNum,
};

pub const DEFAULT_TIME_STEP: FloatNum = 0.02;

// air at sea level, kg/m³
pub const DEFAULT_DENSITY: FloatNum = 1.2;

pub const DEFAULT_RESTITUTION: FloatNum = 0.9;

/// Rectangular region `[0, width] × [0, height]` bodies bounce inside of.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    width: FloatNum,
    height: FloatNum,
}

impl Bounds {
    pub fn new(width: FloatNum, height: FloatNum) -> Result<Self> {
        let bounds = Self { width, height };
        bounds.validate()?;
        Ok(bounds)
    }

    #[inline]
    pub fn width(&self) -> FloatNum {
        self.width
    }

    #[inline]
    pub fn height(&self) -> FloatNum {
        self.height
    }

    fn validate(&self) -> Result<()> {
        let Self { width, height } = *self;
        if !(width.is_finite() && height.is_finite() && width > 0. && height > 0.) {
            return Err(Error::InvalidConfig(format!(
                "bounds must be finite and positive, got {width} x {height}"
            )));
        }
        Ok(())
    }
}

/// Parameters of a world.
///
/// ```
/// use fisika::scene::config::{Bounds, WorldConfigBuilder};
///
/// let config = WorldConfigBuilder::default()
///     .time_step(0.01)
///     .bounds(Bounds::new(12., 8.).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(config.density(), 1.2);
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(
    pattern = "owned",
    build_fn(private, name = "fallible_build", error = "Error")
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WorldConfig {
    /// seconds advanced by `World::tick`
    #[builder(default = "DEFAULT_TIME_STEP")]
    time_step: FloatNum,
    /// density of the medium, drives the drag
    #[builder(default = "DEFAULT_DENSITY")]
    density: FloatNum,
    /// coefficient of restitution shared by every contact, 1 is perfectly elastic
    #[builder(default = "DEFAULT_RESTITUTION")]
    restitution: FloatNum,
    #[builder(setter(strip_option), default)]
    bounds: Option<Bounds>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            density: DEFAULT_DENSITY,
            restitution: DEFAULT_RESTITUTION,
            bounds: None,
        }
    }
}

impl WorldConfigBuilder {
    pub fn build(self) -> Result<WorldConfig> {
        let config = self.fallible_build()?;
        config.validate()?;
        Ok(config)
    }
}

impl WorldConfig {
    #[inline]
    pub fn time_step(&self) -> FloatNum {
        self.time_step
    }

    #[inline]
    pub fn density(&self) -> FloatNum {
        self.density
    }

    #[inline]
    pub fn restitution(&self) -> FloatNum {
        self.restitution
    }

    #[inline]
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            time_step,
            density,
            restitution,
            bounds,
        } = self;

        if !(time_step.is_finite() && *time_step > 0.) {
            return Err(Error::InvalidConfig(format!(
                "time step must be finite and positive, got {time_step}"
            )));
        }

        if !(density.is_finite() && *density >= 0.) {
            return Err(Error::InvalidConfig(format!(
                "density must be finite and not negative, got {density}"
            )));
        }

        if !(0. ..=1.).contains(restitution) {
            return Err(Error::InvalidConfig(format!(
                "restitution must be within [0, 1], got {restitution}"
            )));
        }

        if let Some(bounds) = bounds {
            bounds.validate()?;
        }

        Ok(())
    }

    /// Load a config from json, missing fields fall back to their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| Error::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldConfigBuilder::default().build().unwrap();
        assert_eq!(config, WorldConfig::default());
        assert_eq!(config.time_step(), 0.02);
        assert_eq!(config.density(), 1.2);
        assert_eq!(config.restitution(), 0.9);
        assert!(config.bounds().is_none());
    }

    #[test]
    fn test_invalid_config() {
        let invalid = [
            WorldConfigBuilder::default().time_step(0.).build(),
            WorldConfigBuilder::default().time_step(FloatNum::NAN).build(),
            WorldConfigBuilder::default().density(-1.).build(),
            WorldConfigBuilder::default().restitution(1.5).build(),
            WorldConfigBuilder::default().restitution(-0.1).build(),
        ];
        for result in invalid {
            assert!(matches!(result, Err(Error::InvalidConfig(_))));
        }

        assert!(matches!(
            Bounds::new(0., 10.),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config = WorldConfig::from_json(
            r#"{ "time_step": 0.01, "bounds": { "width": 12.0, "height": 8.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.time_step(), 0.01);
        assert_eq!(config.restitution(), DEFAULT_RESTITUTION);
        assert_eq!(config.bounds(), Some(&Bounds::new(12., 8.).unwrap()));

        assert!(matches!(
            WorldConfig::from_json(r#"{ "restitution": 2.0 }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            WorldConfig::from_json("not json"),
            Err(Error::InvalidConfig(_))
        ));
    }
}
