//! Plan catalog: slug registry, group/type/term matching.
//!
//! Plan slugs are the product identifiers that arrive on the site read model
//! (`business-bundle`, `jetpack_premium_monthly`, ...). The visibility policy
//! only ever asks "does this slug match a business-tier plan in this group",
//! so matching is structural, not string comparison on slugs.

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlanGroup {
    Wpcom,
    Jetpack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlanType {
    Free,
    Blogger,
    Personal,
    Premium,
    Business,
    Ecommerce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlanTerm {
    Monthly,
    Annually,
    Biennially,
}

/// One entry in the static plan catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub slug: &'static str,
    pub group: PlanGroup,
    pub plan_type: PlanType,
    pub term: PlanTerm,
}

const PLANS: &[Plan] = &[
    Plan { slug: "free_plan", group: PlanGroup::Wpcom, plan_type: PlanType::Free, term: PlanTerm::Annually },
    Plan { slug: "blogger-bundle", group: PlanGroup::Wpcom, plan_type: PlanType::Blogger, term: PlanTerm::Annually },
    Plan { slug: "personal-bundle", group: PlanGroup::Wpcom, plan_type: PlanType::Personal, term: PlanTerm::Annually },
    Plan { slug: "personal-bundle-2y", group: PlanGroup::Wpcom, plan_type: PlanType::Personal, term: PlanTerm::Biennially },
    Plan { slug: "value_bundle", group: PlanGroup::Wpcom, plan_type: PlanType::Premium, term: PlanTerm::Annually },
    Plan { slug: "value_bundle-2y", group: PlanGroup::Wpcom, plan_type: PlanType::Premium, term: PlanTerm::Biennially },
    Plan { slug: "business-bundle", group: PlanGroup::Wpcom, plan_type: PlanType::Business, term: PlanTerm::Annually },
    Plan { slug: "business-bundle-2y", group: PlanGroup::Wpcom, plan_type: PlanType::Business, term: PlanTerm::Biennially },
    Plan { slug: "business-bundle-monthly", group: PlanGroup::Wpcom, plan_type: PlanType::Business, term: PlanTerm::Monthly },
    Plan { slug: "ecommerce-bundle", group: PlanGroup::Wpcom, plan_type: PlanType::Ecommerce, term: PlanTerm::Annually },
    Plan { slug: "ecommerce-bundle-2y", group: PlanGroup::Wpcom, plan_type: PlanType::Ecommerce, term: PlanTerm::Biennially },
    Plan { slug: "jetpack_free", group: PlanGroup::Jetpack, plan_type: PlanType::Free, term: PlanTerm::Annually },
    Plan { slug: "jetpack_personal", group: PlanGroup::Jetpack, plan_type: PlanType::Personal, term: PlanTerm::Annually },
    Plan { slug: "jetpack_personal_monthly", group: PlanGroup::Jetpack, plan_type: PlanType::Personal, term: PlanTerm::Monthly },
    Plan { slug: "jetpack_premium", group: PlanGroup::Jetpack, plan_type: PlanType::Premium, term: PlanTerm::Annually },
    Plan { slug: "jetpack_premium_monthly", group: PlanGroup::Jetpack, plan_type: PlanType::Premium, term: PlanTerm::Monthly },
    Plan { slug: "jetpack_business", group: PlanGroup::Jetpack, plan_type: PlanType::Business, term: PlanTerm::Annually },
    Plan { slug: "jetpack_business_monthly", group: PlanGroup::Jetpack, plan_type: PlanType::Business, term: PlanTerm::Monthly },
];

/// Structural query against the catalog. Unset fields match anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanQuery {
    pub group: Option<PlanGroup>,
    pub plan_type: Option<PlanType>,
    pub term: Option<PlanTerm>,
}

impl PlanQuery {
    pub fn group(group: PlanGroup) -> Self {
        Self {
            group: Some(group),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, plan_type: PlanType) -> Self {
        self.plan_type = Some(plan_type);
        self
    }

    pub fn with_term(mut self, term: PlanTerm) -> Self {
        self.term = Some(term);
        self
    }
}

pub fn find_plan(slug: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.slug == slug)
}

/// True when `slug` names a known plan and every populated query field
/// matches it. An unknown slug never matches.
pub fn plan_matches(slug: &str, query: &PlanQuery) -> bool {
    let Some(plan) = find_plan(slug) else {
        return false;
    };

    query.group.is_none_or(|group| plan.group == group)
        && query.plan_type.is_none_or(|ty| plan.plan_type == ty)
        && query.term.is_none_or(|term| plan.term == term)
}

/// Billing term of the plan behind `slug`, or `None` when the plan cannot
/// be identified.
pub fn term_for_slug(slug: &str) -> Option<PlanTerm> {
    find_plan(slug).map(|plan| plan.term)
}
