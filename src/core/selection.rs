//! Menge der für ein Polygon vorgemerkten Wegpunkt-Indizes.

use indexmap::IndexSet;

/// Selektierte Waypoint-Indizes in Auswahl-Reihenfolge.
///
/// Die Reihenfolge bestimmt die Eckpunkt-Folge des Polygons, deshalb
/// `IndexSet` statt sortierter Menge. Veraltete Indizes werden nicht geprüft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: IndexSet<usize>,
}

impl SelectionSet {
    /// Erstellt eine leere Selektion.
    pub fn new() -> Self {
        Self {
            indices: IndexSet::new(),
        }
    }

    /// Schaltet die Mitgliedschaft von `index` um.
    ///
    /// Gibt `true` zurück, wenn der Index danach selektiert ist.
    pub fn toggle(&mut self, index: usize) -> bool {
        // shift_remove erhält die Reihenfolge der übrigen Einträge
        if self.indices.shift_remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Prüft ob `index` selektiert ist.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Iteriert in Auswahl-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Anzahl selektierter Indizes.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
