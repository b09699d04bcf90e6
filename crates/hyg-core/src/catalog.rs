//! Static item and sector catalogs.
//!
//! Item order is the display order and the order of the resulting audit record.
//! Zone kinds are fixed here, once, when the zone list is declared.

use crate::enums::ZoneKind;

/// Marker prepended to isolation items on a room checklist.
pub const ISOLATION_PREFIX: &str = "[ISOLEMENT]";

/// Synthetic compliant item recorded for rooms inspected without isolation.
pub const NO_ISOLATION_MARKER: &str = "Pas de patient en isolement (mesures non requises)";

/// Base catalog for patient rooms.
pub const ROOM_ITEMS: [&str; 16] = [
    "Surfaces hautes dépoussiérées",
    "Lit et barrières désinfectés",
    "Adaptable et table de chevet désinfectés",
    "Scope et câbles désinfectés",
    "Pousse-seringues et pompes désinfectés",
    "Respirateur nettoyé (surfaces externes)",
    "Plan de travail désinfecté",
    "Poignées de portes désinfectées",
    "Interrupteurs et sonnette désinfectés",
    "Niveau des solutions hydro-alcooliques vérifié",
    "Stock EPI (Gants/Masques) complété",
    "Poubelles DASRI vidées et fermées",
    "Collecteur OPCT sous la limite de remplissage",
    "Sol nettoyé",
    "Rideaux et stores propres",
    "Prises murales (vide, oxygène) propres",
];

/// Extra items for a room hosting an isolated patient, without the prefix.
pub const ISOLATION_ITEMS: [&str; 6] = [
    "Signalétique d'isolement affichée à la porte",
    "Chariot d'isolement complet devant la chambre",
    "Surblouses et tabliers disponibles",
    "Matériel dédié au patient (stéthoscope, brassard)",
    "Désinfection renforcée des points de contact",
    "Filière déchets d'isolement respectée",
];

/// Catalog for corridors.
pub const HALL_ITEMS: [&str; 3] = [
    "Sol du couloir nettoyé",
    "Mains courantes désinfectées",
    "Chariots de soins nettoyés et rangés",
];

/// Catalog for sinks and water points.
pub const SINK_ITEMS: [&str; 4] = [
    "Lavabos : pas d'encombrement",
    "Savon doux et essuie-mains approvisionnés",
    "Traçabilité Frigo complétée",
    "Siphon et robinetterie détartrés",
];

/// Base catalog for a zone kind, without isolation items.
#[must_use]
pub const fn base_items(kind: ZoneKind) -> &'static [&'static str] {
    match kind {
        ZoneKind::Room => &ROOM_ITEMS,
        ZoneKind::Hall => &HALL_ITEMS,
        ZoneKind::Sink => &SINK_ITEMS,
    }
}

/// A zone declared in the sector catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneDef {
    pub name: &'static str,
    pub kind: ZoneKind,
}

/// A sector and its fixed, ordered zone list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorDef {
    pub name: &'static str,
    pub zones: &'static [ZoneDef],
}

const fn room(name: &'static str) -> ZoneDef {
    ZoneDef {
        name,
        kind: ZoneKind::Room,
    }
}

const fn hall(name: &'static str) -> ZoneDef {
    ZoneDef {
        name,
        kind: ZoneKind::Hall,
    }
}

const fn sink(name: &'static str) -> ZoneDef {
    ZoneDef {
        name,
        kind: ZoneKind::Sink,
    }
}

pub const SECTORS: [SectorDef; 4] = [
    SectorDef {
        name: "Réa Mère",
        zones: &[
            room("Salle A"),
            room("Salle B"),
            room("Salle C"),
            hall("Couloir"),
            sink("Point d'eau"),
        ],
    },
    SectorDef {
        name: "Réa Enfant",
        zones: &[
            room("Salle A"),
            room("Salle B"),
            hall("Couloir"),
            sink("Point d'eau"),
        ],
    },
    SectorDef {
        name: "Bloc",
        zones: &[
            room("Salle d'opération 1"),
            room("Salle d'opération 2"),
            hall("Couloir du bloc"),
            sink("Lavabo chirurgical"),
        ],
    },
    SectorDef {
        name: "Salle de réveil",
        zones: &[
            room("Box 1"),
            room("Box 2"),
            room("Box 3"),
            sink("Lavabo"),
        ],
    },
];

/// Look up a sector by its exact name.
#[must_use]
pub fn find_sector(name: &str) -> Option<&'static SectorDef> {
    SECTORS.iter().find(|sector| sector.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_sizes_are_fixed() {
        assert_eq!(base_items(ZoneKind::Room).len(), 16);
        assert_eq!(base_items(ZoneKind::Hall).len(), 3);
        assert_eq!(base_items(ZoneKind::Sink).len(), 4);
        assert_eq!(ISOLATION_ITEMS.len(), 6);
    }

    #[test]
    fn items_are_unique_within_each_catalog() {
        for kind in [ZoneKind::Room, ZoneKind::Hall, ZoneKind::Sink] {
            let items = base_items(kind);
            let unique: HashSet<_> = items.iter().collect();
            assert_eq!(unique.len(), items.len(), "duplicate item in {kind} catalog");
        }
    }

    #[test]
    fn every_sector_has_zones_with_unique_names() {
        for sector in &SECTORS {
            assert!(!sector.zones.is_empty(), "{} has no zones", sector.name);
            let names: HashSet<_> = sector.zones.iter().map(|z| z.name).collect();
            assert_eq!(names.len(), sector.zones.len());
        }
    }

    #[test]
    fn find_sector_is_exact() {
        assert!(find_sector("Bloc").is_some());
        assert!(find_sector("bloc").is_none());
    }
}
