//! Predicate filtering for the public freelancer listing.
//!
//! Every constraint is optional and an empty value is a wildcard. Matching
//! keeps the input order untouched.

use crate::features::freelancers::dtos::ListFreelancersQuery;
use crate::features::freelancers::models::Freelancer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreelancerFilter {
    pub region: Option<String>,
    pub experience: Option<String>,
    pub gender: Option<String>,
}

impl FreelancerFilter {
    pub fn new(region: Option<String>, experience: Option<String>, gender: Option<String>) -> Self {
        Self {
            region: non_empty(region),
            experience: non_empty(experience),
            gender: non_empty(gender),
        }
    }

    /// Whether any constraint is set
    pub fn is_active(&self) -> bool {
        self.region.is_some() || self.experience.is_some() || self.gender.is_some()
    }

    pub fn matches(&self, freelancer: &Freelancer) -> bool {
        if let Some(region) = &self.region {
            if &freelancer.region != region {
                return false;
            }
        }
        if let Some(experience) = &self.experience {
            if !freelancer.experiences.contains(experience.as_str()) {
                return false;
            }
        }
        if let Some(gender) = &self.gender {
            if freelancer.gender.as_deref() != Some(gender.as_str()) {
                return false;
            }
        }
        true
    }

    /// Keep the records that match, in their original order
    pub fn apply(&self, freelancers: Vec<Freelancer>) -> Vec<Freelancer> {
        if !self.is_active() {
            return freelancers;
        }
        freelancers.into_iter().filter(|f| self.matches(f)).collect()
    }
}

impl From<ListFreelancersQuery> for FreelancerFilter {
    fn from(query: ListFreelancersQuery) -> Self {
        Self::new(query.region, query.experience, query.gender)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_freelancer;

    fn records() -> Vec<Freelancer> {
        vec![
            sample_freelancer("São Paulo", "React"),
            sample_freelancer("Rio", "Design"),
        ]
    }

    #[test]
    fn test_region_filter_selects_exact_match() {
        let input = records();
        let expected_id = input[0].id;

        let result = FreelancerFilter::new(Some("São Paulo".to_string()), None, None).apply(input);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, expected_id);
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let input = records();
        let ids: Vec<_> = input.iter().map(|f| f.id).collect();

        let filter = FreelancerFilter::new(Some(String::new()), Some(String::new()), None);
        assert!(!filter.is_active());

        let result = filter.apply(input);
        assert_eq!(result.iter().map(|f| f.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn test_experience_is_case_sensitive_substring() {
        let input = vec![
            sample_freelancer("Recife", "Fotografia, Edição de Vídeo"),
            sample_freelancer("Recife", "Redação"),
        ];

        let hits = FreelancerFilter::new(None, Some("Vídeo".to_string()), None).apply(input.clone());
        assert_eq!(hits.len(), 1);

        let misses = FreelancerFilter::new(None, Some("vídeo".to_string()), None).apply(input);
        assert!(misses.is_empty());
    }

    #[test]
    fn test_gender_filter_excludes_unset_gender() {
        let mut with_gender = sample_freelancer("Salvador", "Copywriting");
        with_gender.gender = Some("Feminino".to_string());
        let mut without_gender = sample_freelancer("Salvador", "Copywriting");
        without_gender.gender = None;

        let filter = FreelancerFilter::new(None, None, Some("Feminino".to_string()));
        assert!(filter.matches(&with_gender));
        assert!(!filter.matches(&without_gender));
    }

    #[test]
    fn test_constraints_combine() {
        let mut target = sample_freelancer("Curitiba", "React, Node.js");
        target.gender = Some("Masculino".to_string());
        let mut other_region = target.clone();
        other_region.region = "Manaus".to_string();

        let filter = FreelancerFilter::new(
            Some("Curitiba".to_string()),
            Some("Node".to_string()),
            Some("Masculino".to_string()),
        );
        assert!(filter.matches(&target));
        assert!(!filter.matches(&other_region));
    }
}
