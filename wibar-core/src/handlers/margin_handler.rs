use crate::models::{Bar, BarId, Edge, Margins};
use crate::state::State;

impl State {
    /// Room taken along `edge` by the other visible bars on `id`'s screen.
    ///
    /// With `stop_at_self` only bars registered before `id` are counted, so
    /// bars sharing an edge stack outward in registration order.
    #[must_use]
    pub fn compute_margin(&self, id: BarId, edge: Edge, stop_at_self: bool) -> u32 {
        let Some(screen) = self.bar(id).and_then(Bar::screen) else {
            return 0;
        };
        let mut margin: u32 = 0;
        for other in self.registry.iter() {
            if other == id {
                if stop_at_self {
                    break;
                }
                continue;
            }
            if let Some(bar) = self.bar(other).filter(|b| b.occupies(edge, screen)) {
                margin = margin.saturating_add(bar.extent(edge));
            }
        }
        margin
    }

    /// Margins for placing `id` against its own edge. Side bars also keep
    /// clear of every top and bottom bar; top and bottom bars ignore side bars.
    #[must_use]
    pub fn compute_margins(&self, id: BarId) -> Margins {
        let Some(edge) = self.bar(id).map(Bar::position) else {
            return Margins::default();
        };
        let mut margins = Margins::default();
        margins.set(edge, self.compute_margin(id, edge, true));
        if !edge.is_horizontal() {
            margins.top = self.compute_margin(id, Edge::Top, false);
            margins.bottom = self.compute_margin(id, Edge::Bottom, false);
        }
        margins
    }
}
