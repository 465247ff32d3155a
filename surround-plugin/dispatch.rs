//! Minimal plugin API for routing host input through a handler.
//!
//! The seam is generic over the context and input so the policy can be driven
//! by a real host or by a test harness without either knowing about the other.

/// Result of a dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
  /// Pass the input on to the next handler (ultimately the host).
  Continue,
  /// Input was handled; stop the chain.
  Handled,
}

impl DispatchResult {
  pub const fn handled() -> Self {
    Self::Handled
  }

  pub const fn r#continue() -> Self {
    Self::Continue
  }

  #[inline]
  pub const fn is_handled(self) -> bool {
    matches!(self, Self::Handled)
  }
}

pub trait DispatchPlugin<Ctx, Input> {
  fn dispatch(&mut self, ctx: &mut Ctx, input: Input) -> DispatchResult;
}
