//! CRC runtime configuration (kernel selection + overrides).
//!
//! There is one portable engine, so the only knob is which kernel a digest
//! folds bytes with: the 256-entry table or the bitwise reference. The choice
//! is read once per process from `CRCHASH_FORCE` and cached.

/// Forced kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrcForce {
  /// Use the default selector (the table kernel).
  #[default]
  Auto,
  /// Force the table-driven kernel.
  Table,
  /// Force the bitwise reference implementation (slow, obviously correct).
  Reference,
}

impl CrcForce {
  /// The canonical `CRCHASH_FORCE` spelling of this mode.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Table => "table",
      Self::Reference => "reference",
    }
  }

  /// Parse an override value. Case-insensitive, surrounding whitespace ignored.
  ///
  /// Returns `None` for empty or unrecognized values.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("table")
      || value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("slice1")
    {
      return Some(Self::Table);
    }
    if value.eq_ignore_ascii_case("reference") || value.eq_ignore_ascii_case("bitwise") {
      return Some(Self::Reference);
    }
    None
  }

  /// Collapse `Auto` into the kernel it selects.
  #[inline]
  #[must_use]
  pub const fn resolve(self) -> Self {
    match self {
      Self::Auto | Self::Table => Self::Table,
      Self::Reference => Self::Reference,
    }
  }

  /// Human-readable backend name for the kernel this mode selects.
  #[inline]
  #[must_use]
  pub const fn backend_name(self) -> &'static str {
    match self.resolve() {
      Self::Reference => "reference/bitwise",
      _ => "portable/table",
    }
  }
}

/// Full CRC runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: CrcForce,
  /// The kernel actually used. Never `Auto`.
  pub effective_force: CrcForce,
}

impl CrcConfig {
  /// Resolve `Auto` to the table kernel; explicit modes pass through.
  #[inline]
  #[must_use]
  pub const fn from_force(requested_force: CrcForce) -> Self {
    Self {
      requested_force,
      effective_force: requested_force.resolve(),
    }
  }
}

impl Default for CrcConfig {
  fn default() -> Self {
    Self::from_force(CrcForce::Auto)
  }
}

#[cfg(feature = "std")]
fn read_env_force() -> CrcForce {
  std::env::var("CRCHASH_FORCE")
    .ok()
    .and_then(|value| CrcForce::parse(&value))
    .unwrap_or_default()
}

/// Cached process-wide CRC configuration.
#[inline]
#[must_use]
pub fn get() -> CrcConfig {
  #[cfg(feature = "std")]
  {
    use std::sync::OnceLock;
    static CACHED: OnceLock<CrcConfig> = OnceLock::new();
    *CACHED.get_or_init(|| CrcConfig::from_force(read_env_force()))
  }

  #[cfg(not(feature = "std"))]
  {
    CrcConfig::default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_aliases() {
    assert_eq!(CrcForce::parse("auto"), Some(CrcForce::Auto));
    assert_eq!(CrcForce::parse("TABLE"), Some(CrcForce::Table));
    assert_eq!(CrcForce::parse(" portable "), Some(CrcForce::Table));
    assert_eq!(CrcForce::parse("slice1"), Some(CrcForce::Table));
    assert_eq!(CrcForce::parse("reference"), Some(CrcForce::Reference));
    assert_eq!(CrcForce::parse("Bitwise"), Some(CrcForce::Reference));
  }

  #[test]
  fn parse_rejects_unknown() {
    assert_eq!(CrcForce::parse(""), None);
    assert_eq!(CrcForce::parse("clmul"), None);
    assert_eq!(CrcForce::parse("slice8"), None);
  }

  #[test]
  fn auto_resolves_to_table() {
    let cfg = CrcConfig::from_force(CrcForce::Auto);
    assert_eq!(cfg.requested_force, CrcForce::Auto);
    assert_eq!(cfg.effective_force, CrcForce::Table);
    assert_eq!(CrcForce::Auto.backend_name(), "portable/table");
    assert_eq!(CrcForce::Reference.backend_name(), "reference/bitwise");
  }

  #[test]
  fn as_str_round_trips_through_parse() {
    for force in [CrcForce::Auto, CrcForce::Table, CrcForce::Reference] {
      assert_eq!(CrcForce::parse(force.as_str()), Some(force));
    }
  }

  #[test]
  fn cached_config_is_stable() {
    let a = get();
    let b = get();
    assert_eq!(a, b);
    assert_ne!(a.effective_force, CrcForce::Auto);
  }
}
