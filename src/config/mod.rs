/*!
Configuration of a context.

All configuration for a context is contained within the context, and a configuration is fixed once a context has been made.

Each option is a [ConfigOption], which records the bounds of the option alongside its value.
Options are revised with [set](ConfigOption::set), which rejects values outside the bounds of the option.

```rust
# use otter_acts::config::Config;
let mut config = Config::default();
assert!(config.atom_limit.set(12).is_ok());
assert!(config.atom_limit.set(64).is_err());
assert_eq!(config.atom_limit.value, 12);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The largest permitted atom limit.
pub const ATOM_LIMIT_MAX: usize = 30;

/// The largest permitted model limit.
pub const MODEL_LIMIT_MAX: usize = 1 << 24;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The most distinct atoms a formula may have for its models to be enumerated.
    pub atom_limit: ConfigOption<usize>,

    /// The most quasi-models which may be live at any point of a run.
    pub model_limit: ConfigOption<usize>,

    /// The time limit for a run, where a limit of zero is no limit.
    pub time_limit: ConfigOption<std::time::Duration>,
}

impl Config {
    /// The time limit of a run, if any.
    pub fn time_limit(&self) -> Option<std::time::Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}

impl Default for Config {
    /// Limits sufficient for scenarios over a handful of fluents and a short horizon.
    fn default() -> Self {
        Config {
            atom_limit: ConfigOption {
                name: "atom_limit",
                min: 0,
                max: ATOM_LIMIT_MAX,
                value: 20,
            },

            model_limit: ConfigOption {
                name: "model_limit",
                min: 1,
                max: MODEL_LIMIT_MAX,
                value: 1 << 16,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                value: std::time::Duration::from_secs(0),
            },
        }
    }
}
