use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What a button release does to the set of held buttons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseMode {
    /// Releasing any button ends every drag mode, even if another button
    /// is still physically held.
    #[default]
    AllButtons,
    /// Releasing a button ends only the drag mode bound to it.
    PerButton,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer handling options.
pub struct InputOptions {
    /// Button release policy.
    #[schemars(title = "Release Mode")]
    pub release_mode: ReleaseMode,
}
