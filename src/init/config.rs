use tracing::Level;

/// Runtime configuration consumed by [`run_opts`].
///
/// The execution model is fixed (one logical thread of control, no worker
/// pools) so the knobs here only shape diagnostics.
///
/// [`run_opts`]: crate::init::run_opts
pub struct RuntimeConfig {
  // ---------------------------------------------------------------------------
  // Tracing Subscriber Configuration
  // ---------------------------------------------------------------------------
  pub tracing_source_file: bool,
  pub tracing_source_line: bool,
  pub tracing_thread_info: bool,
  pub tracing_verbose: bool,
  pub tracing_very_verbose: bool,
}

impl RuntimeConfig {
  #[inline]
  pub fn new() -> Self {
    Self {
      tracing_source_file: false,
      tracing_source_line: false,
      tracing_thread_info: false,
      tracing_verbose: false,
      tracing_very_verbose: false,
    }
  }

  /// Returns the maximum tracing level implied by the verbosity flags.
  #[inline]
  pub const fn tracing_filter(&self) -> Level {
    if self.tracing_very_verbose {
      Level::TRACE
    } else if self.tracing_verbose {
      Level::DEBUG
    } else {
      Level::INFO
    }
  }
}

impl Default for RuntimeConfig {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use tracing::Level;

  use crate::init::RuntimeConfig;

  #[test]
  fn test_tracing_filter() {
    let mut config: RuntimeConfig = RuntimeConfig::new();

    assert_eq!(config.tracing_filter(), Level::INFO);

    config.tracing_verbose = true;

    assert_eq!(config.tracing_filter(), Level::DEBUG);

    config.tracing_very_verbose = true;

    assert_eq!(config.tracing_filter(), Level::TRACE);
  }
}
