//! Display implementations for domain models.

use std::fmt;

use crate::models::{PlanStep, ScreenshotRef};

impl fmt::Display for PlanStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.step_number, self.description)
    }
}

impl fmt::Display for ScreenshotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} of {} action)",
            self.timestamp, self.phase, self.action_type
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Phase, PlanStep, ScreenshotRef};

    #[test]
    fn plan_step_formats_as_plan_line() {
        let step = PlanStep::new(2, "Tap search");
        assert_eq!(step.to_string(), "2. Tap search");
    }

    #[test]
    fn screenshot_ref_names_phase_and_action() {
        let shot = ScreenshotRef {
            action_type: "click".to_string(),
            phase: Phase::Start,
            timestamp: "1749284255204444500".to_string(),
        };
        assert_eq!(
            shot.to_string(),
            "1749284255204444500 (start of click action)"
        );
    }
}
