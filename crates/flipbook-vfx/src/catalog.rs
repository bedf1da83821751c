//! The built-in effect catalog.
//!
//! Entries are listed in generation order. Names double as output file stems.

use serde::Serialize;

use crate::effects::Effect;
use crate::error::{FlipbookError, FlipbookResult};
use crate::frame::Size;

/// Default canvas for every catalog entry.
pub const DEFAULT_SIZE: Size = Size::new(128, 128);

/// Default playback rate in frames per second.
pub const DEFAULT_RATE: u32 = 14;

/// One named effect with its canvas, length and playback rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectDef {
    pub name: &'static str,
    pub effect: Effect,
    pub size: Size,
    pub frame_count: u32,
    /// Frames per second.
    pub rate: u32,
}

impl EffectDef {
    pub const fn new(name: &'static str, effect: Effect, frame_count: u32) -> Self {
        Self {
            name,
            effect,
            size: DEFAULT_SIZE,
            frame_count,
            rate: DEFAULT_RATE,
        }
    }

    /// Check the definition before anything is drawn.
    pub fn validate(&self) -> FlipbookResult<()> {
        self.size.validate()?;
        if self.frame_count == 0 {
            return Err(FlipbookError::InvalidFrameCount(self.frame_count));
        }
        if self.rate == 0 {
            return Err(FlipbookError::InvalidRate(self.rate));
        }
        Ok(())
    }

    /// Per-frame display time in milliseconds.
    pub fn frame_delay_ms(&self) -> u32 {
        frame_delay_ms(self.rate)
    }
}

/// `round(1000 / rate)` milliseconds. A zero rate yields zero.
pub fn frame_delay_ms(rate: u32) -> u32 {
    if rate == 0 {
        return 0;
    }
    (1000.0 / rate as f64).round() as u32
}

static CATALOG: [EffectDef; 11] = [
    EffectDef::new("atk_slash_diag_fwd", Effect::SlashDiagonal, 12),
    EffectDef::new("atk_slash_cross", Effect::SlashCross, 12),
    EffectDef::new("atk_slash_spin", Effect::SlashSpin, 14),
    EffectDef::new("atk_slash_uplift", Effect::SlashUplift, 12),
    EffectDef::new("atk_slam_ground", Effect::SlamGround, 12),
    EffectDef::new("fx_dark_aura_idle", Effect::DarkAuraIdle, 16),
    EffectDef::new("fx_rage_surge_burst", Effect::RageSurgeBurst, 12),
    EffectDef::new("fx_shockwave_heavy", Effect::ShockwaveHeavy, 12),
    EffectDef::new("fx_shadow_portal_spawn", Effect::ShadowPortalSpawn, 12),
    EffectDef::new("fx_shadow_portal_exit", Effect::ShadowPortalExit, 12),
    EffectDef::new("fx_boss_entrance", Effect::BossEntrance, 12),
];

/// All catalog entries in generation order.
pub fn catalog() -> &'static [EffectDef] {
    &CATALOG
}

/// Look up an entry by name.
pub fn find(name: &str) -> Option<&'static EffectDef> {
    CATALOG.iter().find(|def| def.name == name)
}

/// Resolve a name filter against the catalog.
///
/// An empty filter selects everything. The result is in catalog order with
/// duplicates collapsed. Any unknown name fails the whole selection.
pub fn select<S: AsRef<str>>(names: &[S]) -> FlipbookResult<Vec<&'static EffectDef>> {
    if let Some(unknown) = names.iter().find(|n| find(n.as_ref()).is_none()) {
        return Err(FlipbookError::UnknownEffect(unknown.as_ref().to_string()));
    }
    if names.is_empty() {
        return Ok(CATALOG.iter().collect());
    }
    Ok(CATALOG
        .iter()
        .filter(|def| names.iter().any(|n| n.as_ref() == def.name))
        .collect())
}
