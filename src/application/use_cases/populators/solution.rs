use super::bullet_list;
use crate::domain::pitch::Solution;
use crate::domain::view::SolutionView;

// The heading comes from the section's own field. The page this replaces
// derived it by slicing the first ten characters off the description text,
// which broke as soon as the copy changed.
pub fn populate(solution: &Solution) -> SolutionView {
    SolutionView {
        heading: solution.heading.clone(),
        description: solution.description.clone(),
        features: bullet_list("features", solution.features.iter().cloned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_is_not_derived_from_description() {
        let solution = Solution {
            heading: "Our Solution".to_string(),
            description: "A modular recycling facility with closed-loop water treatment."
                .to_string(),
            features: vec!["Modular build".to_string()],
        };
        let view = populate(&solution);
        assert_eq!(view.heading, "Our Solution");
    }
}
