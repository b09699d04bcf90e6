use serde::Serialize;

use hyg_core::catalog::SECTORS;
use hyg_core::checklist::build_checklist;
use hyg_core::enums::ZoneKind;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SectorZoneRow {
    sector: &'static str,
    zone: &'static str,
    kind: ZoneKind,
    items: usize,
    isolation_items: usize,
}

#[derive(Debug, Serialize)]
struct SectorsResponse {
    zones: Vec<SectorZoneRow>,
}

/// Handle `hyg sectors`. Needs neither login nor the store.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&catalog_overview(), flags.format)
}

fn catalog_overview() -> SectorsResponse {
    let zones = SECTORS
        .iter()
        .flat_map(|sector| {
            sector.zones.iter().map(move |zone| {
                let items = build_checklist(zone.name, zone.kind, false).len();
                let with_isolation = build_checklist(zone.name, zone.kind, true).len();
                SectorZoneRow {
                    sector: sector.name,
                    zone: zone.name,
                    kind: zone.kind,
                    items,
                    isolation_items: with_isolation - items,
                }
            })
        })
        .collect();
    SectorsResponse { zones }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_lists_every_zone_once() {
        let overview = catalog_overview();
        let expected: usize = SECTORS.iter().map(|sector| sector.zones.len()).sum();
        assert_eq!(overview.zones.len(), expected);
    }

    #[test]
    fn only_rooms_have_isolation_items() {
        for row in catalog_overview().zones {
            match row.kind {
                ZoneKind::Room => assert_eq!((row.items, row.isolation_items), (16, 6)),
                ZoneKind::Hall => assert_eq!((row.items, row.isolation_items), (3, 0)),
                ZoneKind::Sink => assert_eq!((row.items, row.isolation_items), (4, 0)),
            }
        }
    }
}
