//! Verification plan types
//!
//! A plan is an ordered list of (route, output file) pairs. The built-in
//! plan covers the three calculator pages of the application under
//! development; each run visits every route in order and each URL is
//! visited before its screenshot path is written.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One route to visit and the file its screenshot lands in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSpec {
    /// URL path on the application under verification
    pub route: String,
    /// Output file, relative to the run's output directory
    pub output: PathBuf,
}

impl CaptureSpec {
    pub fn new(route: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            route: route.into(),
            output: output.into(),
        }
    }

    /// Absolute URL for this route against a base address
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.route)
    }
}

/// Ordered list of captures for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationPlan {
    pub specs: Vec<CaptureSpec>,
}

impl VerificationPlan {
    pub fn new(specs: Vec<CaptureSpec>) -> Self {
        Self { specs }
    }

    /// The built-in plan: the three calculator pages
    pub fn builtin() -> Self {
        Self::new(vec![
            CaptureSpec::new("/tools/calculators/wizard", "calculator_wizard.png"),
            CaptureSpec::new("/tools/calculators/break-even", "break_even_calculator.png"),
            CaptureSpec::new("/tools/calculators/revenue", "revenue_calculator.png"),
        ])
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Outcome of one successful capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureReport {
    /// Route that was captured
    pub route: String,
    /// File the screenshot was written to
    pub output: PathBuf,
    /// Size of the written image
    pub size_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_plan_routes_in_order() {
        let plan = VerificationPlan::builtin();
        assert_eq!(plan.len(), 3);
        assert!(!plan.is_empty());

        assert_eq!(plan.specs[0].route, "/tools/calculators/wizard");
        assert_eq!(plan.specs[0].output, PathBuf::from("calculator_wizard.png"));

        assert_eq!(plan.specs[1].route, "/tools/calculators/break-even");
        assert_eq!(
            plan.specs[1].output,
            PathBuf::from("break_even_calculator.png")
        );

        assert_eq!(plan.specs[2].route, "/tools/calculators/revenue");
        assert_eq!(
            plan.specs[2].output,
            PathBuf::from("revenue_calculator.png")
        );
    }

    #[test]
    fn test_spec_url_resolution() {
        let spec = CaptureSpec::new("/tools/calculators/wizard", "calculator_wizard.png");
        assert_eq!(
            spec.url("http://localhost:3000"),
            "http://localhost:3000/tools/calculators/wizard"
        );
        // Trailing slash on the base does not double up
        assert_eq!(
            spec.url("http://localhost:3000/"),
            "http://localhost:3000/tools/calculators/wizard"
        );
    }

    #[test]
    fn test_plan_serialization_round_trip() {
        let plan = VerificationPlan::builtin();
        let json = serde_json::to_string(&plan).unwrap();
        let restored: VerificationPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.specs, plan.specs);
    }
}
