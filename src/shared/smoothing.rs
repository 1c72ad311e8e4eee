//! Linienglättung per Corner-Cutting (Chaikin-Variante mit festen Endpunkten).

use crate::core::GeoPoint;

/// Glättet eine Punktfolge mit `iterations` Durchläufen Corner-Cutting.
///
/// Pro Durchlauf wird jedes Nachbarpaar `(p0, p1)` durch die Punkte
/// `0.75·p0 + 0.25·p1` und `0.25·p0 + 0.75·p1` ersetzt. Der erste und der
/// letzte Punkt bleiben unverändert und ersetzen dabei den jeweils
/// äußersten Schnittpunkt, sodass aus `L` Punkten genau `2L - 2` werden.
///
/// Folgen mit weniger als 3 Punkten werden unverändert zurückgegeben.
/// Die Eingabe wird nicht verändert.
pub fn smooth_polyline(points: &[GeoPoint], iterations: u32) -> Vec<GeoPoint> {
    let mut current = points.to_vec();
    for _ in 0..iterations {
        if current.len() < 3 {
            break;
        }
        current = corner_cut(&current);
    }
    current
}

fn corner_cut(points: &[GeoPoint]) -> Vec<GeoPoint> {
    let last_pair = points.len() - 2;
    let mut out = Vec::with_capacity(2 * points.len() - 2);

    for (i, pair) in points.windows(2).enumerate() {
        let (p0, p1) = (pair[0], pair[1]);
        if i == 0 {
            out.push(p0);
        } else {
            out.push(p0.lerp(p1, 0.25));
        }
        if i == last_pair {
            out.push(p1);
        } else {
            out.push(p0.lerp(p1, 0.75));
        }
    }

    out
}
