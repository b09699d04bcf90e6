//! Derivation of the ordered checklist a zone requires.

use crate::catalog::{ISOLATION_ITEMS, ISOLATION_PREFIX, base_items};
use crate::enums::ZoneKind;

/// Build the theoretical item list for a zone.
///
/// Rooms get the 16-item base catalog, followed by the six `[ISOLEMENT]` items
/// when `isolation_active` is set. Halls and sinks ignore the isolation flag.
/// The zone name does not influence the result; it is accepted so callers can
/// pass a zone as a whole.
#[must_use]
pub fn build_checklist(_zone_name: &str, kind: ZoneKind, isolation_active: bool) -> Vec<String> {
    let base = base_items(kind);
    let with_isolation = isolation_active && kind.supports_isolation();

    let extra = if with_isolation { ISOLATION_ITEMS.len() } else { 0 };
    let mut items = Vec::with_capacity(base.len() + extra);
    items.extend(base.iter().map(|item| (*item).to_string()));
    if with_isolation {
        items.extend(
            ISOLATION_ITEMS
                .iter()
                .map(|item| format!("{ISOLATION_PREFIX} {item}")),
        );
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn room_without_isolation_is_base_catalog() {
        let items = build_checklist("Salle A", ZoneKind::Room, false);
        assert_eq!(items.len(), 16);
        assert!(items.iter().all(|item| !item.starts_with(ISOLATION_PREFIX)));
    }

    #[test]
    fn isolation_appends_six_prefixed_items() {
        let plain = build_checklist("Salle A", ZoneKind::Room, false);
        let isolated = build_checklist("Salle A", ZoneKind::Room, true);

        assert_eq!(isolated.len(), plain.len() + 6);
        assert_eq!(&isolated[..16], plain.as_slice());
        assert!(isolated[16..].iter().all(|item| item.starts_with("[ISOLEMENT] ")));
    }

    #[test]
    fn hall_and_sink_ignore_isolation() {
        assert_eq!(
            build_checklist("Couloir", ZoneKind::Hall, true),
            build_checklist("Couloir", ZoneKind::Hall, false)
        );
        assert_eq!(build_checklist("Lavabo", ZoneKind::Sink, true).len(), 4);
        assert_eq!(build_checklist("Couloir", ZoneKind::Hall, true).len(), 3);
    }

    #[test]
    fn build_is_deterministic() {
        let first = build_checklist("Box 1", ZoneKind::Room, true);
        let second = build_checklist("Box 2", ZoneKind::Room, true);
        assert_eq!(first, second);
    }
}
