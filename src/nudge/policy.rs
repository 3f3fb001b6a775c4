//! Pure predicates deciding whether the promotion nudge may render.

use super::log::{DismissalKind, DismissalLog};
use crate::plans::{PlanGroup, PlanQuery, PlanType, plan_matches};
use crate::site::SiteContext;

pub const WEEK_IN_MS: i64 = 7 * 24 * 3600 * 1000;

/// A dismissal suppresses the nudge for this long.
pub const NUDGE_COOLDOWN_MS: i64 = 2 * WEEK_IN_MS;

/// Dismissals after which the nudge stays hidden permanently, even once the
/// cool-down window has elapsed.
pub const MAX_DISMISS: usize = 2;

/// Number of `Dismiss`-kind events in the log. `AlreadyListed` entries are
/// history, not rejections, and do not count.
pub fn dismiss_count(log: &DismissalLog) -> usize {
    log.events()
        .iter()
        .filter(|event| event.kind == DismissalKind::Dismiss)
        .count()
}

/// Timestamp of the most recent `Dismiss`-kind event, or 0 if the nudge was
/// never dismissed.
pub fn last_dismiss_time(log: &DismissalLog) -> i64 {
    log.events()
        .iter()
        .filter(|event| event.kind == DismissalKind::Dismiss)
        .next_back()
        .map_or(0, |event| event.dismissed_at)
}

/// True while a dismissal is still in effect at `now_ms`.
///
/// A dismissal is effective when either:
/// - the last dismissal is less than [`NUDGE_COOLDOWN_MS`] old, or
/// - the nudge has been dismissed at least [`MAX_DISMISS`] times in total,
///   which is permanent.
pub fn is_dismissed(log: &DismissalLog, now_ms: i64) -> bool {
    let last = last_dismiss_time(log);
    if last == 0 {
        return false;
    }

    if dismiss_count(log) >= MAX_DISMISS {
        return true;
    }

    last > now_ms - NUDGE_COOLDOWN_MS
}

/// Site eligibility for the nudge, independent of dismissal state.
///
/// Eligible when the site has no connected location yet, is at least a week
/// old, runs a business-tier plan, and has the `promote` goal. Callers must
/// also check [`is_dismissed`] before rendering; the two predicates are
/// intentionally separate.
pub fn is_visible(site: &SiteContext, now_ms: i64) -> bool {
    if site.has_connected_location {
        return false;
    }

    let week_passed_since_creation = site.created_at_ms() + WEEK_IN_MS < now_ms;
    let business_query = PlanQuery::group(PlanGroup::Wpcom).with_type(PlanType::Business);

    week_passed_since_creation
        && plan_matches(&site.plan_slug, &business_query)
        && site.has_promote_goal()
}
