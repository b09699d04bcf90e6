//! Deletion rights over persisted records.
//!
//! Administrators may manage any record. Other actors may manage their own
//! records for a limited window after creation. All comparisons happen in UTC;
//! timestamps stored without zone information are read as UTC.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::entities::{Actor, Record};

/// Default window during which an owner may still delete an entry.
pub const DEFAULT_EDIT_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    edit_window: Duration,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(Duration::hours(DEFAULT_EDIT_WINDOW_HOURS))
    }
}

impl AccessPolicy {
    #[must_use]
    pub const fn new(edit_window: Duration) -> Self {
        Self { edit_window }
    }

    #[must_use]
    pub const fn edit_window(&self) -> Duration {
        self.edit_window
    }

    /// Whether `actor` may delete an entry owned by `owner`.
    ///
    /// An owner without a creation timestamp cannot manage the entry.
    #[must_use]
    pub fn can_manage(
        &self,
        actor: &Actor,
        owner: &str,
        created_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> bool {
        if actor.is_admin() {
            return true;
        }
        if actor.name != owner {
            return false;
        }
        created_at.is_some_and(|created| now.signed_duration_since(created) < self.edit_window)
    }

    /// Same as [`can_manage`](Self::can_manage) for a raw timestamp string.
    ///
    /// Accepts RFC 3339 and zone-less `YYYY-MM-DD HH:MM:SS[.fff]` /
    /// `YYYY-MM-DDTHH:MM:SS[.fff]` forms. A timestamp that cannot be parsed
    /// denies access rather than failing.
    #[must_use]
    pub fn can_manage_raw(
        &self,
        actor: &Actor,
        owner: &str,
        created_at: Option<&str>,
        now: DateTime<Utc>,
    ) -> bool {
        let parsed = created_at.and_then(parse_lenient_timestamp);
        self.can_manage(actor, owner, parsed, now)
    }

    /// Convenience for typed records.
    #[must_use]
    pub fn can_manage_record(&self, actor: &Actor, record: &Record, now: DateTime<Utc>) -> bool {
        self.can_manage(actor, record.actor(), Some(record.created_at()), now)
    }
}

/// Parse a timestamp, reading zone-less values as UTC. `None` if unparseable.
#[must_use]
pub fn parse_lenient_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Role;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-02T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn inspector(name: &str) -> Actor {
        Actor::new(name, Role::Inspector)
    }

    #[test]
    fn admin_can_manage_anything() {
        let policy = AccessPolicy::default();
        let admin = Actor::new("vice_major", Role::Admin);
        let ancient = now() - Duration::days(400);
        assert!(policy.can_manage(&admin, "as_hygiene_matin", Some(ancient), now()));
        assert!(policy.can_manage(&admin, "someone", None, now()));
    }

    #[test]
    fn owner_within_window() {
        let policy = AccessPolicy::default();
        let created = now() - Duration::hours(23) - Duration::minutes(59);
        assert!(policy.can_manage(&inspector("as_hygiene_matin"), "as_hygiene_matin", Some(created), now()));
    }

    #[test]
    fn owner_after_window() {
        let policy = AccessPolicy::default();
        let created = now() - Duration::hours(24) - Duration::minutes(1);
        assert!(!policy.can_manage(&inspector("as_hygiene_matin"), "as_hygiene_matin", Some(created), now()));
    }

    #[test]
    fn owner_without_timestamp_is_denied() {
        let policy = AccessPolicy::default();
        assert!(!policy.can_manage(&inspector("a"), "a", None, now()));
    }

    #[test]
    fn non_owner_is_denied_regardless_of_age() {
        let policy = AccessPolicy::default();
        let actor = inspector("as_hygiene_soir");
        for age in [Duration::zero(), Duration::minutes(5), Duration::days(3)] {
            assert!(!policy.can_manage(&actor, "as_hygiene_matin", Some(now() - age), now()));
        }
    }

    #[test]
    fn zone_less_timestamp_is_read_as_utc() {
        let policy = AccessPolicy::default();
        let actor = inspector("a");
        assert!(policy.can_manage_raw(&actor, "a", Some("2026-03-01 10:30:00"), now()));
        assert!(!policy.can_manage_raw(&actor, "a", Some("2026-03-01T09:59:00"), now()));
    }

    #[test]
    fn zoned_timestamp_is_converted() {
        let policy = AccessPolicy::default();
        let actor = inspector("a");
        // 11:30+02:00 is 09:30Z, more than 24h before now.
        assert!(!policy.can_manage_raw(&actor, "a", Some("2026-03-01T11:30:00+02:00"), now()));
        assert!(policy.can_manage_raw(&actor, "a", Some("2026-03-01T12:30:00+02:00"), now()));
    }

    #[test]
    fn garbage_timestamp_denies_without_panicking() {
        let policy = AccessPolicy::default();
        assert!(!policy.can_manage_raw(&inspector("a"), "a", Some("hier soir"), now()));
    }
}
