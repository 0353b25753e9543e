use std::sync::Arc;

/// Host-supplied tick label formatter, called once per generated tick value.
pub type TickLabelFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;
