use crate::{
    ease::Ease,
    error::{SegueError, SegueResult},
    lerp::Lerp,
    transition::Transition,
};

/// Declarative transition description, typically deserialized from JSON.
/// Only easing strategies are expressible here; path strategies carry
/// closures and are built in code.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TransitionConfig {
    pub kind: String,
    pub duration_secs: f64,
    #[serde(default)]
    pub cyclical: bool,
    #[serde(default)]
    pub params: serde_json::Value,
}

impl TransitionConfig {
    /// Assembles a ready transition between `start` and `end`.
    pub fn build<T>(&self, start: T, end: T) -> SegueResult<Transition<T>>
    where
        T: Lerp + Clone,
    {
        let ease = parse_ease(self)?;
        let mut transition = Transition::new(
            start,
            end,
            self.duration_secs,
            crate::transition::Strategy::Ease(ease),
        )?;
        transition.set_cyclical(self.cyclical);
        Ok(transition)
    }
}

#[tracing::instrument]
pub fn parse_ease(config: &TransitionConfig) -> SegueResult<Ease> {
    let kind = config.kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(SegueError::validation("transition kind must be non-empty"));
    }

    let params = if config.params.is_null() {
        None
    } else {
        Some(
            config
                .params
                .as_object()
                .ok_or_else(|| SegueError::validation("transition params must be an object"))?,
        )
    };

    match kind.as_str() {
        "linear" => Ok(Ease::Linear),
        "quadratic" | "quad" => Ok(Ease::Quadratic),
        "step" => {
            let steps = params
                .and_then(|p| p.get("steps"))
                .and_then(|v| v.as_u64())
                .ok_or_else(|| SegueError::validation("step requires integer params.steps"))?;
            if steps == 0 || steps > u64::from(u32::MAX) {
                return Err(SegueError::validation(format!(
                    "step.steps must be in 1..=u32::MAX, got {steps}"
                )));
            }
            Ok(Ease::Step(steps as u32))
        }
        "cubic_bezier" | "cubicbezier" | "bezier" => {
            let point = |name: &str, default: f64| -> SegueResult<f64> {
                match params.and_then(|p| p.get(name)) {
                    None => Ok(default),
                    Some(v) => {
                        let f = v.as_f64().ok_or_else(|| {
                            SegueError::validation(format!("bezier.{name} must be a number"))
                        })?;
                        if !f.is_finite() {
                            return Err(SegueError::validation(format!(
                                "bezier.{name} must be finite"
                            )));
                        }
                        Ok(f)
                    }
                }
            };
            // absent points fall back to the stock ease curve
            Ok(Ease::CubicBezier {
                x1: point("x1", 0.25)?,
                y1: point("y1", 0.1)?,
                x2: point("x2", 0.25)?,
                y2: point("y2", 1.0)?,
            })
        }
        "ease" => Ok(Ease::standard()),
        _ => Err(SegueError::validation(format!(
            "unknown transition kind '{kind}'"
        ))),
    }
}
