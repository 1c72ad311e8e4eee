//! Strokes (Freihand-Linien) und die geordnete Stroke-Liste des Zeichen-Layers.

use indexmap::IndexMap;

use super::GeoPoint;

/// Mindestanzahl Punkte, ab der ein Stroke darstellbar ist.
pub const MIN_RENDERABLE_POINTS: usize = 2;

/// Herkunft einer Linie auf der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provenance {
    /// Vom Nutzer freihand gezeichnet
    #[default]
    Drawn,
}

impl Provenance {
    /// Tag für die GeoJSON-Property `type`.
    pub fn as_tag(self) -> &'static str {
        match self {
            Provenance::Drawn => "drawn",
        }
    }
}

/// Eine zusammenhängende Freihand-Linie.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Geordnete Punktfolge
    pub points: Vec<GeoPoint>,
    /// Linienfarbe als CSS-Farbstring (z.B. `#ff0000`)
    pub color: String,
    /// Herkunfts-Tag
    pub provenance: Provenance,
}

impl Stroke {
    /// Startet einen neuen Stroke mit genau einem Punkt.
    pub fn starting_at(point: GeoPoint, color: impl Into<String>) -> Self {
        Self {
            points: vec![point],
            color: color.into(),
            provenance: Provenance::Drawn,
        }
    }

    /// Erstellt einen Stroke aus einer fertigen Punktfolge.
    pub fn from_points(points: Vec<GeoPoint>, color: impl Into<String>) -> Self {
        Self {
            points,
            color: color.into(),
            provenance: Provenance::Drawn,
        }
    }

    /// Anzahl Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Prüft die Darstellbarkeits-Invariante (mindestens 2 Punkte).
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= MIN_RENDERABLE_POINTS
    }
}

/// Stabile ID eines Strokes innerhalb einer `StrokeList`.
pub type StrokeId = u64;

/// Geordnete Stroke-Sammlung; Einfüge-Reihenfolge = Zeichenreihenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeList {
    strokes: IndexMap<StrokeId, Stroke>,
    next_id: StrokeId,
}

impl StrokeList {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self {
            strokes: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Hängt einen Stroke an und gibt dessen ID zurück.
    pub fn push(&mut self, stroke: Stroke) -> StrokeId {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.strokes.insert(id, stroke);
        id
    }

    /// Entfernt den zuletzt hinzugefügten Stroke (Undo).
    pub fn pop(&mut self) -> Option<(StrokeId, Stroke)> {
        self.strokes.pop()
    }

    /// Entfernt alle Strokes. IDs werden nicht wiederverwendet.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Anzahl Strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// `true` wenn keine Strokes vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Stroke per ID.
    pub fn get(&self, id: StrokeId) -> Option<&Stroke> {
        self.strokes.get(&id)
    }

    /// Iteriert in Zeichenreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (StrokeId, &Stroke)> {
        self.strokes.iter().map(|(id, s)| (*id, s))
    }

    /// Iteriert nur über die Strokes (ohne IDs).
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.values()
    }

    /// Gesamtzahl aller Punkte über alle Strokes.
    pub fn total_points(&self) -> usize {
        self.strokes.values().map(Stroke::len).sum()
    }

    /// Baut eine neue Liste mit identischen IDs, aber ausgetauschten Strokes.
    ///
    /// `f` liefert `None` um einen Stroke zu verwerfen. Die Reihenfolge bleibt erhalten.
    pub fn filter_map_strokes<F>(&self, mut f: F) -> StrokeList
    where
        F: FnMut(StrokeId, &Stroke) -> Option<Stroke>,
    {
        let strokes = self
            .strokes
            .iter()
            .filter_map(|(id, stroke)| f(*id, stroke).map(|s| (*id, s)))
            .collect();
        StrokeList {
            strokes,
            next_id: self.next_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Stroke {
        Stroke::from_points(
            (0..n).map(|i| GeoPoint::new(i as f64, 0.0)).collect(),
            "#00ff00",
        )
    }

    #[test]
    fn push_keeps_drawing_order() {
        let mut list = StrokeList::new();
        let a = list.push(line(2));
        let b = list.push(line(3));

        let ids: Vec<StrokeId> = list.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(list.total_points(), 5);
    }

    #[test]
    fn pop_removes_most_recent() {
        let mut list = StrokeList::new();
        list.push(line(2));
        let last = list.push(line(4));

        let (id, stroke) = list.pop().expect("Stroke erwartet");
        assert_eq!(id, last);
        assert_eq!(stroke.len(), 4);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut list = StrokeList::new();
        let first = list.push(line(2));
        list.clear();
        let second = list.push(line(2));
        assert!(second > first);
    }

    #[test]
    fn filter_map_preserves_ids_and_order() {
        let mut list = StrokeList::new();
        let a = list.push(line(2));
        let _b = list.push(line(3));
        let c = list.push(line(4));

        let filtered = list.filter_map_strokes(|_, s| (s.len() != 3).then(|| s.clone()));
        let ids: Vec<StrokeId> = filtered.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn renderable_needs_two_points() {
        assert!(!line(1).is_renderable());
        assert!(line(2).is_renderable());
        assert_eq!(Provenance::Drawn.as_tag(), "drawn");
    }
}
